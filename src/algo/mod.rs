use alloc::vec::Vec;
use core::fmt::Debug;

use crate::edge::{Edge, EdgeFlow};

pub mod ford_fulkerson;
pub mod min_cut;
pub mod residual;
pub mod search;

use min_cut::MinCut;

/// The outcome of a max-flow computation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MaxFlowSolution<C> {
    /// Total flow leaving the source.
    pub value: C,
    /// Flow on each input edge, in input order.
    pub flows: Vec<C>,
    /// Number of augmenting paths applied.
    pub augmentations: usize,
    pub min_cut: MinCut<C>,
}

impl<C: Copy> MaxFlowSolution<C> {
    /// Pairs every input edge with its flow.
    pub fn edge_flows<'a>(
        &'a self,
        edges: &'a [Edge<C>],
    ) -> impl Iterator<Item = EdgeFlow<C>> + 'a {
        edges
            .iter()
            .zip(self.flows.iter())
            .map(|(e, &flow)| EdgeFlow::new(e, flow))
    }
}

/// A maximum flow algorithm over an edge list with dense vertex indices.
pub trait MaxFlow {
    type Capacity;
    type Error: Debug;

    /// Run the algorithm from `source` to `sink` and return the flow value together with the
    /// flow assigned to each edge.
    fn max_flow(
        &mut self,
        edges: &[Edge<Self::Capacity>],
        source: usize,
        sink: usize,
    ) -> Result<MaxFlowSolution<Self::Capacity>, Self::Error>;
}
