/*!
# Node Representation

We choose `Node = u32` as flow networks for matching rarely exceed `2^32` vertices.
This saves space compared to `usize`/`u64` in the per-vertex arrays of the search
and lets us manipulate node values directly without abstracting over them.

The same 32-bit representation is used for [`ArcId`](crate::flow::ArcId), so
[`OptionalIdImpl`] serves both as an optional node and as an optional arc.
*/

use std::num::NonZero;
use stream_bitset::bitset::BitSetImpl;

/// Nodes can be any unsigned integer from `0` to `Node::MAX - 1`
pub type Node = u32;

/// Node-Value that is considered invalid
pub const INVALID_NODE: Node = Node::MAX;

/// There can be at most `2^32 - 1` nodes in a flow network!
pub type NumNodes = Node;

/// BitSet for Nodes
pub type NodeBitSet = BitSetImpl<Node>;

/// As `Option<u32>` uses additional bytes for padding, it can be inefficient
/// since we often need `Vec<Option<u32>>` (parent arcs of a BFS for example).
/// This instead uses the `NonZero`-Wrapper with a reserved sentinel value `N`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(transparent)]
pub struct OptionalIdImpl<const N: u32>(NonZero<u32>);

/// Often, `INVALID_NODE` is safe to pick as the `None`-Value
pub type OptionalNode = OptionalIdImpl<INVALID_NODE>;

impl<const N: u32> OptionalIdImpl<N> {
    /// Returns `Some(OptionalIdImpl)` if `n != N` and `None` otherwise
    pub const fn new(n: u32) -> Option<Self> {
        match NonZero::new(n ^ N) {
            Some(inner) => Some(OptionalIdImpl(inner)),
            None => None,
        }
    }

    /// Gets the underlying value
    pub const fn get(&self) -> u32 {
        self.0.get() ^ N
    }
}
