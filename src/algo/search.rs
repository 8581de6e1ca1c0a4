use alloc::vec;
use alloc::vec::Vec;

use itertools::Itertools;

use crate::algo::residual::ResidualGraph;
use crate::capacity::Capacity;

/// The result of one augmenting-path search.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AugmentingPath<C> {
    bottleneck: C,
    vertices: Vec<usize>,
}

impl<C: Capacity> AugmentingPath<C> {
    /// The amount of flow the path can carry, zero if no path was found.
    pub fn bottleneck(&self) -> C {
        self.bottleneck
    }

    /// Vertices from source to sink. A lone source means the sink is unreachable.
    pub fn vertices(&self) -> &[usize] {
        &self.vertices
    }

    pub fn is_augmenting(&self) -> bool {
        self.vertices.len() >= 2
    }

    /// Consecutive `(v1, v2)` pairs along the path.
    pub fn steps(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.vertices.iter().copied().tuple_windows()
    }
}

/// Finds one path from `source` to `sink` along which flow can be increased, using an iterative
/// depth-first search over the residual graph.
///
/// Each step either uses spare capacity on a declared edge or cancels flow on a declared edge
/// pointing the other way. Vertices are tried in ascending order and each vertex is entered at
/// most once per call. When the sink cannot be reached the returned path holds only the source
/// and its bottleneck is zero; the same holds when `source == sink`.
///
/// Panics if `source` is not a vertex of `graph`.
pub fn search<C: Capacity>(
    graph: &ResidualGraph<C>,
    source: usize,
    sink: usize,
) -> AugmentingPath<C> {
    // (vertex, residual capacity of the step that reached it); the source entry is a sentinel
    let mut path = vec![(source, C::zero())];
    let mut visited = vec![false; graph.vertex_count()];
    visited[source] = true;

    while let Some(&(v1, _)) = path.last() {
        if v1 == sink {
            break;
        }

        let next = graph
            .neighbors(v1)
            .filter(|&u| !visited[u])
            .map(|u| (u, graph.residual_capacity(v1, u)))
            .find(|(_, residual)| *residual > C::zero());

        match next {
            Some((u, residual)) => {
                visited[u] = true;
                path.push((u, residual));
            }
            // dead end
            None => {
                path.pop();
            }
        }
    }

    if path.is_empty() {
        return AugmentingPath {
            bottleneck: C::zero(),
            vertices: vec![source],
        };
    }

    let bottleneck = path[1..]
        .iter()
        .map(|&(_, residual)| residual)
        .min()
        .unwrap_or_else(C::zero);

    AugmentingPath {
        bottleneck,
        vertices: path.into_iter().map(|(v, _)| v).collect(),
    }
}
