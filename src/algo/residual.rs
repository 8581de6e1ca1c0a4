use alloc::collections::{BTreeMap, BTreeSet};
use alloc::vec;
use alloc::vec::Vec;

use itertools::Itertools;

use crate::capacity::Capacity;
use crate::edge::Edge;
use crate::error::{Error, InvalidInput};

/// How repeated `(from, to)` pairs in the input edge list are treated.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DuplicateEdges {
    /// The later edge's capacity replaces the earlier one.
    #[default]
    Overwrite,
    /// Fail with `InvalidInput::DuplicateEdge`.
    Reject,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EdgeState<C> {
    pub capacity: C,
    pub flow: C,
}

impl<C: Capacity> EdgeState<C> {
    fn new(capacity: C) -> Self {
        Self {
            capacity,
            flow: C::zero(),
        }
    }

    fn spare(&self) -> C {
        self.capacity - self.flow
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Step<C> {
    /// Push along the declared edge `u -> v`.
    Forward(C),
    /// Cancel flow on the declared edge `v -> u`.
    Backward(C),
}

/// The residual view of a flow network.
///
/// Only the declared (forward) edges are stored, each with its capacity and current flow. Moving
/// against a declared edge is possible whenever that edge carries flow; such a move cancels flow
/// rather than using a materialized reverse edge. `residual_capacity` and `push_flow` are the only
/// places that decide between the two directions.
#[derive(Clone, Debug)]
pub struct ResidualGraph<C> {
    outgoing: Vec<BTreeMap<usize, EdgeState<C>>>,
    // For each vertex, the tails of the declared edges entering it.
    incoming: Vec<BTreeSet<usize>>,
}

/// Number of vertices implied by an edge list, i.e. one plus the largest vertex index.
pub fn vertex_count<C>(edges: &[Edge<C>]) -> Result<usize, Error> {
    edges
        .iter()
        .map(|e| e.from.max(e.to) + 1)
        .max()
        .ok_or(Error::InvalidInput(InvalidInput::EmptyNetwork))
}

impl<C: Capacity> ResidualGraph<C> {
    pub fn from_edges(edges: &[Edge<C>], duplicates: DuplicateEdges) -> Result<Self, Error> {
        let n = vertex_count(edges)?;
        if let Some(index) = edges.iter().position(|e| e.capacity.is_negative()) {
            return Err(InvalidInput::NegativeCapacity { index }.into());
        }

        let mut graph = Self {
            outgoing: vec![BTreeMap::new(); n],
            incoming: vec![BTreeSet::new(); n],
        };

        for (index, e) in edges.iter().enumerate() {
            let previous = graph.outgoing[e.from].insert(e.to, EdgeState::new(e.capacity));
            if previous.is_some() && duplicates == DuplicateEdges::Reject {
                return Err(InvalidInput::DuplicateEdge {
                    index,
                    from: e.from,
                    to: e.to,
                }
                .into());
            }
            graph.incoming[e.to].insert(e.from);
        }

        Ok(graph)
    }

    pub fn vertex_count(&self) -> usize {
        self.outgoing.len()
    }

    /// The declared edge `u -> v`, if any.
    pub fn edge(&self, u: usize, v: usize) -> Option<&EdgeState<C>> {
        self.outgoing.get(u)?.get(&v)
    }

    pub fn flow(&self, u: usize, v: usize) -> Option<C> {
        self.edge(u, v).map(|e| e.flow)
    }

    /// All declared edges as `((from, to), state)`, ordered by `(from, to)`.
    pub fn edges(&self) -> impl Iterator<Item = ((usize, usize), &EdgeState<C>)> + '_ {
        self.outgoing
            .iter()
            .enumerate()
            .flat_map(|(u, out)| out.iter().map(move |(&v, e)| ((u, v), e)))
    }

    /// Vertices adjacent to `v` through a declared edge in either direction, ascending and
    /// without repetition. Whether a move is actually possible is up to `residual_capacity`.
    pub fn neighbors(&self, v: usize) -> impl Iterator<Item = usize> + '_ {
        self.outgoing[v]
            .keys()
            .merge(self.incoming[v].iter())
            .dedup()
            .copied()
    }

    fn step(&self, u: usize, v: usize) -> Option<Step<C>> {
        match self.edge(u, v) {
            Some(e) if e.flow < e.capacity => return Some(Step::Forward(e.spare())),
            _ => {}
        }
        match self.edge(v, u) {
            Some(e) if e.flow > C::zero() => Some(Step::Backward(e.flow)),
            _ => None,
        }
    }

    /// The amount of flow that can be moved from `u` to `v` in one step: the spare capacity of
    /// `u -> v` if it has any, otherwise the cancellable flow on `v -> u`.
    pub fn residual_capacity(&self, u: usize, v: usize) -> C {
        match self.step(u, v) {
            Some(Step::Forward(c)) | Some(Step::Backward(c)) => c,
            None => C::zero(),
        }
    }

    /// Moves `amount` units from `u` to `v`, either by increasing the flow on `u -> v` or by
    /// cancelling flow on `v -> u`, following the same choice `residual_capacity` reports.
    ///
    /// Panics if `amount` exceeds `residual_capacity(u, v)`.
    pub fn push_flow(&mut self, u: usize, v: usize, amount: C) {
        let (from, to) = match self.step(u, v) {
            Some(Step::Forward(spare)) => {
                assert!(amount <= spare, "bug: pushed more than the spare capacity");
                (u, v)
            }
            Some(Step::Backward(flow)) => {
                assert!(amount <= flow, "bug: cancelled more than the existing flow");
                (v, u)
            }
            None => panic!("bug: pushed flow between {u} and {v} without residual capacity"),
        };

        let e = self
            .outgoing
            .get_mut(from)
            .and_then(|out| out.get_mut(&to))
            .expect("bug: residual step refers to a missing edge");
        if from == u {
            e.flow += amount;
        } else {
            e.flow -= amount;
        }
    }

    /// Marks every vertex reachable from `source` through edges with positive residual capacity.
    pub fn reachable_from(&self, source: usize) -> Vec<bool> {
        let mut seen = vec![false; self.vertex_count()];
        let mut stack = vec![source];
        seen[source] = true;

        while let Some(v) = stack.pop() {
            for u in self.neighbors(v) {
                if !seen[u] && self.residual_capacity(v, u) > C::zero() {
                    seen[u] = true;
                    stack.push(u);
                }
            }
        }

        seen
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn graph(edges: &[(usize, usize, i32)]) -> ResidualGraph<i32> {
        let edges: Vec<Edge<i32>> = edges.iter().copied().map(Edge::from).collect();
        ResidualGraph::from_edges(&edges, DuplicateEdges::Overwrite).unwrap()
    }

    #[test]
    fn vertex_count_is_one_past_the_largest_index() {
        let g = graph(&[(0, 4, 1), (2, 1, 1)]);
        assert_eq!(g.vertex_count(), 5);
        assert_eq!(
            vertex_count::<i32>(&[]),
            Err(Error::InvalidInput(InvalidInput::EmptyNetwork))
        );
    }

    #[test]
    fn negative_capacity_is_rejected() {
        let edges = [Edge::new(0, 1, 3), Edge::new(1, 2, -1)];
        let err = ResidualGraph::from_edges(&edges, DuplicateEdges::Overwrite).unwrap_err();
        assert_eq!(err, Error::from(InvalidInput::NegativeCapacity { index: 1 }));
    }

    #[test]
    fn duplicates_overwrite_or_reject() {
        let edges = [Edge::new(0, 1, 3), Edge::new(0, 1, 7)];

        let g = ResidualGraph::from_edges(&edges, DuplicateEdges::Overwrite).unwrap();
        assert_eq!(g.edge(0, 1).unwrap().capacity, 7);
        assert_eq!(g.edges().count(), 1);

        let err = ResidualGraph::from_edges(&edges, DuplicateEdges::Reject).unwrap_err();
        assert_eq!(
            err,
            Error::from(InvalidInput::DuplicateEdge {
                index: 1,
                from: 0,
                to: 1
            })
        );
    }

    #[test]
    fn neighbors_cover_both_directions_once() {
        let g = graph(&[(1, 0, 1), (1, 2, 1), (2, 1, 1), (3, 1, 1)]);
        assert_eq!(g.neighbors(1).collect::<Vec<_>>(), vec![0, 2, 3]);
        assert_eq!(g.neighbors(0).collect::<Vec<_>>(), vec![1]);
    }

    #[test]
    fn backward_moves_cancel_existing_flow() {
        let mut g = graph(&[(0, 1, 5)]);
        assert_eq!(g.residual_capacity(0, 1), 5);
        assert_eq!(g.residual_capacity(1, 0), 0);

        g.push_flow(0, 1, 3);
        assert_eq!(g.flow(0, 1), Some(3));
        assert_eq!(g.residual_capacity(0, 1), 2);
        assert_eq!(g.residual_capacity(1, 0), 3);

        g.push_flow(1, 0, 2);
        assert_eq!(g.flow(0, 1), Some(1));
        assert_eq!(g.residual_capacity(1, 0), 1);
    }

    #[test]
    fn antiparallel_edges_prefer_spare_capacity() {
        let mut g = graph(&[(0, 1, 2), (1, 0, 4)]);
        g.push_flow(1, 0, 4);
        assert_eq!(g.residual_capacity(0, 1), 2);

        g.push_flow(0, 1, 2);
        assert_eq!(g.flow(0, 1), Some(2));
        // 0 -> 1 is saturated, so the next move cancels flow on 1 -> 0
        assert_eq!(g.residual_capacity(0, 1), 4);
        g.push_flow(0, 1, 4);
        assert_eq!(g.flow(1, 0), Some(0));
        assert_eq!(g.flow(0, 1), Some(2));
    }

    #[test]
    #[should_panic]
    fn pushing_without_capacity_panics() {
        let mut g = graph(&[(0, 1, 1), (1, 2, 1)]);
        g.push_flow(0, 2, 1);
    }

    #[test]
    fn reachability_follows_residual_capacity() {
        let mut g = graph(&[(0, 1, 1), (1, 2, 1), (0, 3, 0)]);
        assert_eq!(g.reachable_from(0), vec![true, true, true, false]);

        g.push_flow(0, 1, 1);
        assert_eq!(g.reachable_from(0), vec![true, false, false, false]);
        assert_eq!(g.reachable_from(1), vec![true, true, true, false]);
    }
}
