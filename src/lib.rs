#![no_std]
#![deny(
    trivial_casts,
    trivial_numeric_casts,
    unused_import_braces,
    rust_2018_idioms
)]
#![forbid(unsafe_code)]

extern crate alloc;

pub mod algo;
pub mod capacity;
pub mod check;
pub mod edge;
pub mod error;

pub use crate::algo::ford_fulkerson::{Config, FordFulkerson};
pub use crate::algo::min_cut::MinCut;
pub use crate::algo::residual::{DuplicateEdges, EdgeState, ResidualGraph};
pub use crate::algo::search::{search, AugmentingPath};
pub use crate::algo::{MaxFlow, MaxFlowSolution};
pub use crate::capacity::Capacity;
pub use crate::check::check;
pub use crate::edge::{Edge, EdgeFlow};
pub use crate::error::{Error, InvalidInput};

/// Computes a maximum flow from `source` to `sink` with the default configuration.
///
/// `edges` are `(from, to, capacity)` triples over the vertices `0..N`, where `N` is one more than
/// the largest index mentioned. Both terminals must lie in that range. A repeated `(from, to)` pair
/// replaces the capacity of the earlier one; use [`FordFulkerson`] with
/// [`DuplicateEdges::Reject`] to refuse such input instead.
pub fn max_flow<C: Capacity>(
    edges: &[Edge<C>],
    source: usize,
    sink: usize,
) -> Result<MaxFlowSolution<C>, Error> {
    FordFulkerson::default().max_flow(edges, source, sink)
}
