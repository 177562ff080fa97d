/*!
# Flow Networks

This module provides the residual network a matching instance is reduced to:

- [`ResidualArc`] is a single directed arc with capacity, flow and the id of its paired
  reverse arc. All arcs are stored in one arena and addressed by [`ArcId`].
- [`FlowNetwork`] owns the arena and the per-vertex adjacency (in insertion order) and
  builds the standard source/sink network of a [`BipartiteInstance`](crate::instance::BipartiteInstance).

Algorithms working on the network (augmenting path search, Edmonds-Karp, matching
extraction) live in [`algo`](crate::algo).
*/

mod arc;
mod network;

pub use arc::*;
pub use network::*;
