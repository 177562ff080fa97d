/*!
# Matching Algorithms

This module provides the algorithms operating on a [`FlowNetwork`]:

- [`AugmentingPathSearch`]: BFS for a shortest augmenting path in the residual network,
- [`EdmondsKarp`]: the augmentation loop, provided as an **iterator** over augmentations,
- [`MatchingExtractor`] / [`Matching`]: reading the final matching off the flow,
- [`MinimumVertexCover`]: König's minimum vertex cover as a certificate of maximality.

All algorithms are re-exported at the top level of this module, so you can simply do:
```rust
use umatch::algo::*;
```
*/

mod augmenting_path;
mod edmonds_karp;
mod matching;
mod vertex_cover;

use crate::{flow::*, instance::*, prelude::*};

pub use augmenting_path::*;
pub use edmonds_karp::*;
pub use matching::*;
pub use vertex_cover::*;
