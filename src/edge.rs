use std::fmt::{Debug, Display};

use crate::Node;

/// A pairing between a left vertex and a right vertex, both given by their
/// external **1-indexed** ids, ie. `Edge(a, b)` allows left vertex `a` to be
/// matched with right vertex `b`.
///
/// The same type is used for the pairs of a computed [`Matching`](crate::algo::Matching).
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Edge(pub Node, pub Node);

/// We limit the number of pairings to `2^32 - 1`.
pub type NumEdges = u32;

impl Display for Edge {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.0, self.1)
    }
}

impl Debug for Edge {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({},{})", self.0, self.1)
    }
}

impl Edge {
    /// Returns the left endpoint
    pub fn left(&self) -> Node {
        self.0
    }

    /// Returns the right endpoint
    pub fn right(&self) -> Node {
        self.1
    }

    /// Bijection from `0..x*y` to all possible pairs between `x` left and `y` right vertices
    pub fn from_u64(i: u64, y: u64) -> Self {
        Edge((i / y) as Node + 1, (i % y) as Node + 1)
    }
}

impl From<(Node, Node)> for Edge {
    fn from(value: (Node, Node)) -> Self {
        Edge(value.0, value.1)
    }
}

impl From<&(Node, Node)> for Edge {
    fn from(value: &(Node, Node)) -> Self {
        Edge(value.0, value.1)
    }
}

impl From<&Edge> for Edge {
    fn from(value: &Edge) -> Self {
        *value
    }
}

impl From<Edge> for (Node, Node) {
    fn from(value: Edge) -> Self {
        (value.0, value.1)
    }
}
