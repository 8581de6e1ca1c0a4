use alloc::collections::BTreeSet;
use alloc::vec::Vec;

use crate::algo::residual::ResidualGraph;
use crate::capacity::Capacity;
use crate::error::Error;

/// A source/sink partition read off a saturated residual graph.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MinCut<C> {
    /// Vertices still reachable from the source.
    pub source_side: BTreeSet<usize>,
    /// Declared edges leaving `source_side`, as `(from, to)`.
    pub edges: Vec<(usize, usize)>,
    pub capacity: C,
}

impl<C: Capacity> MinCut<C> {
    /// Once no augmenting path is left, the vertices reachable from `source` form the source side
    /// of a minimum cut.
    pub fn from_residual(graph: &ResidualGraph<C>, source: usize) -> Result<Self, Error> {
        let reachable = graph.reachable_from(source);
        let source_side: BTreeSet<usize> = reachable
            .iter()
            .enumerate()
            .filter_map(|(v, &seen)| seen.then_some(v))
            .collect();

        let mut capacity = C::zero();
        let mut edges = Vec::new();
        for ((u, v), e) in graph.edges() {
            if reachable[u] && !reachable[v] {
                capacity = capacity
                    .checked_add(&e.capacity)
                    .ok_or(Error::ArithmeticOverflow)?;
                edges.push((u, v));
            }
        }

        Ok(Self {
            source_side,
            edges,
            capacity,
        })
    }

    pub fn separates(&self, source: usize, sink: usize) -> bool {
        self.source_side.contains(&source) && !self.source_side.contains(&sink)
    }
}
