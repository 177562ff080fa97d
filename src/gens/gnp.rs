use rand_distr::{Distribution, Geometric};

use super::*;
use crate::utils::Probability;

/// A bipartite `G(x,y,p)` generator: every one of the `x * y` possible pairings is generated
/// independently with probability `p`. Pairings are emitted in lexicographic order without
/// duplicates.
///
/// Instead of drawing `x * y` coins, we jump between successes using a geometric
/// distribution, so the running time is linear in the number of generated pairings.
///
/// # Examples
/// ```
/// use umatch::gens::*;
/// use rand::SeedableRng;
/// use rand::rngs::StdRng;
///
/// let rng = &mut StdRng::seed_from_u64(1);
/// let instance = BipartiteGnp::new().left(10).right(5).prob(1.0).generate(rng).unwrap();
/// assert_eq!(instance.number_of_pairs(), 50);
/// assert_eq!(instance.maximum_matching().len(), 5);
/// ```
#[derive(Debug, Copy, Clone, Default)]
pub struct BipartiteGnp {
    left: NumNodes,
    right: NumNodes,
    prob: f64,
}

impl BipartiteGnp {
    /// Creates a new generator without vertices and with `p = 0`
    pub fn new() -> Self {
        Self::default()
    }

    /// Updates the number of left vertices `x`
    pub fn left(mut self, x: NumNodes) -> Self {
        self.left = x;
        self
    }

    /// Updates the number of right vertices `y`
    pub fn right(mut self, y: NumNodes) -> Self {
        self.right = y;
        self
    }

    /// Updates `p` directly
    pub fn prob(mut self, prob: f64) -> Self {
        assert!(prob.is_valid_probability());
        self.prob = prob;
        self
    }

    /// Updates `p` such that every left vertex has `deg` pairings in expectation.
    /// Requires the number of right vertices to be set beforehand.
    pub fn avg_deg(self, deg: f64) -> Self {
        assert!(self.right > 0, "Number of right vertices must be set first!");
        self.prob(deg / self.right as f64)
    }
}

impl PairGenerator for BipartiteGnp {
    fn stream<R>(&self, rng: &mut R) -> impl Iterator<Item = Edge>
    where
        R: Rng,
    {
        // The maximum possible value a pairing can be mapped to
        let max_value = self.left as u64 * self.right as u64;
        let right = self.right as u64;

        // `p = 0` yields no pairing at all; `Geometric` rejects invalid probabilities
        let distr = (self.prob > 0.0)
            .then(|| Geometric::new(self.prob).ok())
            .flatten();

        let mut cur = 0u64;
        std::iter::from_fn(move || {
            let distr = distr.as_ref()?;
            let next = cur.saturating_add(distr.sample(&mut *rng));

            if next >= max_value {
                cur = max_value;
                return None;
            }

            cur = next + 1;
            Some(Edge::from_u64(next, right))
        })
    }

    fn sides(&self) -> (NumNodes, NumNodes) {
        (self.left, self.right)
    }
}
