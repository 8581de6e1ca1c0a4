use displaydoc::Display;

#[derive(Clone, Debug, Display, PartialEq, Eq)]
pub enum Error {
    /// Invalid flow network: {0}
    InvalidInput(InvalidInput),
    /// Arithmetic overflow while accumulating flow
    ArithmeticOverflow,
    /// Gave up after {limit} augmenting paths
    AugmentationLimit { limit: usize },
    /// Flow on edge #{index} is negative or exceeds its capacity
    CapacityViolated { index: usize },
    /// Inflow and outflow differ at vertex {vertex}
    ConservationViolated { vertex: usize },
    /// Net outflow of the source differs from the reported max-flow value
    ValueMismatch,
    /// Reported minimum cut capacity differs from the max-flow value
    CutMismatch,
}

#[derive(Clone, Debug, Display, PartialEq, Eq)]
pub enum InvalidInput {
    /// empty edge list, vertex count cannot be derived
    EmptyNetwork,
    /// negative capacity on edge #{index}
    NegativeCapacity { index: usize },
    /// source {source} is outside the vertex range 0..{vertex_count}
    SourceOutOfRange { source: usize, vertex_count: usize },
    /// sink {sink} is outside the vertex range 0..{vertex_count}
    SinkOutOfRange { sink: usize, vertex_count: usize },
    /// edge #{index} repeats the vertex pair ({from}, {to})
    DuplicateEdge { index: usize, from: usize, to: usize },
}

impl From<InvalidInput> for Error {
    fn from(e: InvalidInput) -> Self {
        Self::InvalidInput(e)
    }
}
