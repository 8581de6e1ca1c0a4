use alloc::vec::Vec;
use core::marker::PhantomData;

use crate::algo::min_cut::MinCut;
use crate::algo::residual::{vertex_count, DuplicateEdges, ResidualGraph};
use crate::algo::search::search;
use crate::algo::{MaxFlow, MaxFlowSolution};
use crate::capacity::Capacity;
use crate::edge::Edge;
use crate::error::{Error, InvalidInput};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Config {
    pub duplicate_edges: DuplicateEdges,
    /// Abort once this many augmenting paths have been applied. Depth-first augmentation may need
    /// a number of rounds proportional to the capacities themselves.
    pub max_augmentations: Option<usize>,
}

/// Ford-Fulkerson with depth-first augmenting paths.
#[derive(Clone, Debug, Default)]
pub struct FordFulkerson<C> {
    config: Config,
    _phantom: PhantomData<C>,
}

impl<C> FordFulkerson<C> {
    pub fn new(config: Config) -> Self {
        Self {
            config,
            _phantom: Default::default(),
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }
}

impl<C: Capacity> MaxFlow for FordFulkerson<C> {
    type Capacity = C;
    type Error = Error;

    fn max_flow(
        &mut self,
        edges: &[Edge<C>],
        source: usize,
        sink: usize,
    ) -> Result<MaxFlowSolution<C>, Self::Error> {
        let n = vertex_count(edges)?;
        if source >= n {
            return Err(InvalidInput::SourceOutOfRange {
                source,
                vertex_count: n,
            }
            .into());
        }
        if sink >= n {
            return Err(InvalidInput::SinkOutOfRange {
                sink,
                vertex_count: n,
            }
            .into());
        }

        let mut graph = ResidualGraph::from_edges(edges, self.config.duplicate_edges)?;

        let mut value = C::zero();
        let mut augmentations = 0;
        loop {
            let path = search(&graph, source, sink);
            if !path.is_augmenting() {
                break;
            }
            if let Some(limit) = self.config.max_augmentations {
                if augmentations >= limit {
                    log::warn!("no convergence after {limit} augmenting paths");
                    return Err(Error::AugmentationLimit { limit });
                }
            }

            let bottleneck = path.bottleneck();
            log::trace!("augmenting {:?} by {bottleneck}", path.vertices());

            value = value
                .checked_add(&bottleneck)
                .ok_or(Error::ArithmeticOverflow)?;
            for (v1, v2) in path.steps() {
                graph.push_flow(v1, v2, bottleneck);
            }
            augmentations += 1;
        }

        // duplicate (from, to) pairs all read the single stored edge
        let flows: Vec<C> = edges
            .iter()
            .map(|e| graph.flow(e.from, e.to).unwrap_or_else(C::zero))
            .collect();

        let min_cut = MinCut::from_residual(&graph, source)?;

        log::debug!("vertices: {n}, edges: {}", edges.len());
        log::debug!("augmenting paths: {augmentations}");
        log::debug!("max flow: {value}, min cut: {}", min_cut.capacity);

        Ok(MaxFlowSolution {
            value,
            flows,
            augmentations,
            min_cut,
        })
    }
}
