/*!
`umatch` computes **maximum matchings** in **u**nweighted bipartite graphs by reducing them to
**u**nit-capacity maximum flow problems that are solved with the Edmonds–Karp algorithm.

# Representation

We represent **nodes** as `u32`. Externally, left vertices are numbered `1..=x` and right
vertices `1..=y`; a pairing is a tuple-struct `Edge(a, b)` allowing left vertex `a` to be
matched with right vertex `b`. Internally, the flow network numbers all `x + y + 2` vertices
(including a synthetic source and sink) from `0`, see [`flow`].

# Design

The computation is split into independent stages, each of which can be used on its own:

1. [`BipartiteInstance`](instance::BipartiteInstance) validates the input once,
2. [`FlowNetwork`](flow::FlowNetwork) builds the residual network (an arena of arcs, each
   linked to its reverse arc by index),
3. [`EdmondsKarp`](algo::EdmondsKarp) augments along shortest paths found by
   [`AugmentingPathSearch`](algo::AugmentingPathSearch) and is provided as an **iterator**
   over augmentations,
4. [`MatchingExtractor`](algo::MatchingExtractor) reads the matching off the final flow.

All algorithm state is owned by these structs; there is no global state and no IO in the
core. Reading instances and writing matchings is handled by [`io`].

# Usage

```rust
use umatch::prelude::*;

let matching = maximum_matching(3, 2, [(1, 1), (2, 1), (3, 2)]).unwrap();
assert_eq!(matching.len(), 2);
assert!(matching.is_valid());
```

There are *5* submodules you probably want to interact with:
- [`prelude`] includes nodes, pairings, instances and the flow network,
- [`algo`] includes Edmonds–Karp, matching extraction and König's minimum vertex cover,
- [`io`] includes readers/writers for the plain text PairList-Format,
- [`gens`] includes random instance generators,
- [`flow`] includes the arc and network model.
*/

pub mod algo;
pub mod edge;
pub mod flow;
pub mod gens;
pub mod instance;
pub mod io;
pub mod node;
#[cfg(test)]
pub(crate) mod testing;
pub mod utils;

/// `umatch::prelude` includes definitions for nodes, pairings, instances and the flow network.
pub mod prelude {
    pub use super::{edge::*, flow::*, instance::*, node::*};
}

pub use prelude::*;
