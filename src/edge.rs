use serde::{Deserialize, Serialize};

/// A directed edge of the input network. Vertices are dense indices in `0..N`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Deserialize, Serialize)]
pub struct Edge<C> {
    pub from: usize,
    pub to: usize,
    pub capacity: C,
}

impl<C> Edge<C> {
    pub fn new(from: usize, to: usize, capacity: C) -> Self {
        Self { from, to, capacity }
    }
}

impl<C> From<(usize, usize, C)> for Edge<C> {
    fn from((from, to, capacity): (usize, usize, C)) -> Self {
        Self::new(from, to, capacity)
    }
}

/// An input edge augmented with the flow assigned to it.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct EdgeFlow<C> {
    pub from: usize,
    pub to: usize,
    pub capacity: C,
    pub flow: C,
}

impl<C: Copy> EdgeFlow<C> {
    pub fn new(edge: &Edge<C>, flow: C) -> Self {
        Self {
            from: edge.from,
            to: edge.to,
            capacity: edge.capacity,
            flow,
        }
    }
}
