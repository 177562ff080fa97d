/*!
# Instance Generators

Random generators for bipartite matching instances, mostly used for testing and
benchmarking. Generators follow the builder pattern:

1. Create a generator instance (e.g., `BipartiteGnp::new()`).
2. Set parameters (e.g., `.left(x).right(y).prob(p)`).
3. Produce pairings via [`PairGenerator::stream`] or a whole instance via
   [`PairGenerator::generate`].
*/

use rand::Rng;

use crate::prelude::*;

mod gnp;

pub use gnp::*;

/// General trait for a configurable random pairing generator.
pub trait PairGenerator {
    /// Creates a lazy iterator (stream) over generated pairings.
    fn stream<R>(&self, rng: &mut R) -> impl Iterator<Item = Edge>
    where
        R: Rng;

    /// Returns the number of left and right vertices of the generated instances
    fn sides(&self) -> (NumNodes, NumNodes);

    /// Collects the stream into a validated instance.
    ///
    /// # Errors
    /// Returns an [`InstanceError`] if the configured sides are too large to be addressed.
    fn generate<R>(&self, rng: &mut R) -> Result<BipartiteInstance, InstanceError>
    where
        R: Rng,
    {
        let (left, right) = self.sides();
        BipartiteInstance::try_new(left, right, self.stream(rng))
    }
}
