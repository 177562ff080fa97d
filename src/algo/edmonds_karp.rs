//! # Edmonds-Karp
//!
//! Repeatedly searches a shortest augmenting path and pushes its bottleneck capacity along
//! it until the sink becomes unreachable. As all capacities are `1`, every augmentation
//! grows the matching by exactly one pair and there are at most `min(x, y)` of them.

use log::{debug, info};

use super::*;

/// Summary of a single augmentation step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Augmentation {
    bottleneck: Capacity,
    length: usize,
    matched: Vec<Edge>,
    unmatched: Vec<Edge>,
}

impl Augmentation {
    /// Amount of flow pushed along the path
    pub fn bottleneck(&self) -> Capacity {
        self.bottleneck
    }

    /// Number of arcs on the augmenting path (source and sink arcs included)
    pub fn length(&self) -> usize {
        self.length
    }

    /// Pairings that received flow during this step, ordered from source to sink
    pub fn matched(&self) -> &[Edge] {
        &self.matched
    }

    /// Pairings whose flow was cancelled over their reverse arc during this step,
    /// ordered from source to sink
    pub fn unmatched(&self) -> &[Edge] {
        &self.unmatched
    }
}

/// The Edmonds-Karp maximum flow algorithm on a bipartite [`FlowNetwork`].
///
/// The solver owns the network and the search state, so independent solves never share
/// anything. Each call to [`Iterator::next`] performs one augmentation and returns its
/// [`Augmentation`]; the iterator terminates when no augmenting path exists anymore.
///
/// # Examples
/// ```
/// use umatch::{prelude::*, algo::*};
///
/// let instance = BipartiteInstance::try_new(2, 2, [(1, 1), (1, 2), (2, 1)]).unwrap();
/// let mut ek = EdmondsKarp::new(FlowNetwork::bipartite(&instance));
///
/// assert_eq!(ek.run(), 2);
/// assert_eq!(ek.matching().len(), 2);
/// ```
#[derive(Debug, Clone)]
pub struct EdmondsKarp {
    network: FlowNetwork,
    search: AugmentingPathSearch,
    total_flow: Capacity,
    augmentations: usize,
    exhausted: bool,
}

impl EdmondsKarp {
    /// Creates a new solver on the given network
    pub fn new(network: FlowNetwork) -> Self {
        let search = AugmentingPathSearch::new(&network);
        let total_flow = network.total_flow();
        Self {
            network,
            search,
            total_flow,
            augmentations: 0,
            exhausted: false,
        }
    }

    /// Runs the algorithm to completion and returns the maximum flow
    pub fn run(&mut self) -> Capacity {
        for _ in self.by_ref() {}
        self.total_flow
    }

    /// Performs at most `k` further augmentations and returns how many were performed
    pub fn count_upto(&mut self, k: usize) -> usize {
        self.by_ref().take(k).count()
    }

    /// Total flow pushed so far; equals the size of the current matching
    pub fn total_flow(&self) -> Capacity {
        self.total_flow
    }

    /// Number of augmentations performed so far
    pub fn number_of_augmentations(&self) -> usize {
        self.augmentations
    }

    /// Returns *true* once a search failed to reach the sink, ie. the flow is maximum
    pub fn is_exhausted(&self) -> bool {
        self.exhausted
    }

    /// Returns the underlying network
    pub fn network(&self) -> &FlowNetwork {
        &self.network
    }

    /// Returns the state of the last path search
    pub fn search(&self) -> &AugmentingPathSearch {
        &self.search
    }

    /// Consumes the solver and returns the network with its current flows
    pub fn into_network(self) -> FlowNetwork {
        self.network
    }

    /// Extracts the matching induced by the current flow
    pub fn matching(&self) -> Matching {
        self.network.extract_matching()
    }

    /// Pushes `bottleneck` along the path recorded by the last successful search
    fn augment(&mut self, bottleneck: Capacity) -> Augmentation {
        let path: Vec<ArcId> = self.search.path_arcs(&self.network).collect();

        let mut matched = Vec::new();
        let mut unmatched = Vec::new();

        // walk from source to sink to report pairings in path order
        for &id in path.iter().rev() {
            let arc = self.network.arc(id);
            match arc.kind() {
                ArcKind::Pairing => matched.push(self.network.external_pair(arc)),
                ArcKind::Reverse => {
                    let primary = self.network.arc(arc.reverse());
                    if primary.kind() == ArcKind::Pairing {
                        unmatched.push(self.network.external_pair(primary));
                    }
                }
                ArcKind::Source | ArcKind::Sink => {}
            }
        }

        for &id in &path {
            self.network.push_flow(id, bottleneck);
        }

        self.total_flow += bottleneck;
        self.augmentations += 1;

        debug!(
            "augmentation #{}: pushed {} over {} arcs (+{:?} -{:?}), total flow {}",
            self.augmentations,
            bottleneck,
            path.len(),
            matched,
            unmatched,
            self.total_flow
        );

        Augmentation {
            bottleneck,
            length: path.len(),
            matched,
            unmatched,
        }
    }
}

impl Iterator for EdmondsKarp {
    type Item = Augmentation;

    fn next(&mut self) -> Option<Self::Item> {
        if self.exhausted {
            return None;
        }

        match self.search.find(&self.network) {
            Some(bottleneck) => Some(self.augment(bottleneck)),
            None => {
                self.exhausted = true;
                info!(
                    "maximum flow {} reached after {} augmentations",
                    self.total_flow, self.augmentations
                );
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{gens::*, testing::*};
    use rand::{Rng, SeedableRng, seq::SliceRandom};
    use rand_pcg::Pcg64Mcg;

    fn solver(x: NumNodes, y: NumNodes, pairs: &[(Node, Node)]) -> EdmondsKarp {
        EdmondsKarp::new(FlowNetwork::bipartite(
            &BipartiteInstance::try_new(x, y, pairs).unwrap(),
        ))
    }

    #[test]
    fn scenarios() {
        assert_eq!(solver(2, 2, &[(1, 1), (1, 2), (2, 1)]).run(), 2);
        assert_eq!(solver(3, 2, &[(1, 1), (2, 1), (3, 2)]).run(), 2);
        assert_eq!(solver(2, 2, &[]).run(), 0);
        assert_eq!(solver(1, 1, &[(1, 1)]).run(), 1);
    }

    #[test]
    fn cancellation() {
        let mut ek = solver(2, 2, &[(1, 1), (2, 1), (1, 2)]);

        let first = ek.next().unwrap();
        assert_eq!(first.matched(), &[Edge(1, 1)]);
        assert!(first.unmatched().is_empty());
        assert_eq!(first.length(), 3);

        let second = ek.next().unwrap();
        assert_eq!(second.matched(), &[Edge(2, 1), Edge(1, 2)]);
        assert_eq!(second.unmatched(), &[Edge(1, 1)]);
        assert_eq!(second.length(), 5);

        assert!(ek.next().is_none());
        assert!(ek.is_exhausted());
        assert!(ek.next().is_none());

        assert_eq!(ek.matching().pairs(), &[Edge(2, 1), Edge(1, 2)]);
    }

    #[test]
    fn count_upto() {
        let mut ek = solver(3, 3, &[(1, 1), (2, 2), (3, 3)]);
        assert_eq!(ek.count_upto(2), 2);
        assert_eq!(ek.total_flow(), 2);
        assert!(!ek.is_exhausted());
        assert_eq!(ek.count_upto(5), 1);
        assert!(ek.is_exhausted());
        assert_eq!(ek.number_of_augmentations(), 3);
    }

    #[test]
    fn monotonic_progress() {
        let rng = &mut Pcg64Mcg::seed_from_u64(3);

        for (x, y) in [(5, 5), (10, 20), (30, 7)] {
            for p in [0.05, 0.2, 0.5] {
                let instance = BipartiteGnp::new().left(x).right(y).prob(p).generate(rng).unwrap();
                let mut ek = EdmondsKarp::new(FlowNetwork::bipartite(&instance));

                let mut flow = 0;
                while let Some(augmentation) = ek.next() {
                    assert_eq!(augmentation.bottleneck(), 1);
                    assert_eq!(
                        augmentation.matched().len(),
                        augmentation.unmatched().len() + 1
                    );
                    assert_eq!(augmentation.length(), 2 * augmentation.matched().len() + 1);
                    flow += augmentation.bottleneck();
                    assert_eq!(ek.total_flow(), flow);
                }

                assert!(ek.number_of_augmentations() <= instance.matching_upper_bound() as usize);
                assert_eq!(ek.network().total_flow(), ek.total_flow());
                assert!(ek.network().is_flow_conserved());
            }
        }
    }

    #[test]
    fn against_reference() {
        let rng = &mut Pcg64Mcg::seed_from_u64(1234);

        for _ in 0..200 {
            let x = rng.random_range(1..15);
            let y = rng.random_range(1..15);
            let p = rng.random_range(0.0..0.6);

            let mut pairs = BipartiteGnp::new()
                .left(x)
                .right(y)
                .prob(p)
                .generate(rng)
                .unwrap()
                .pairs()
                .to_vec();
            pairs.shuffle(rng);
            let instance = BipartiteInstance::try_new(x, y, pairs).unwrap();

            let mut ek = EdmondsKarp::new(FlowNetwork::bipartite(&instance));
            let flow = ek.run();
            let matching = ek.matching();

            assert_eq!(flow as usize, reference_matching_size(&instance));
            assert_eq!(matching.len(), flow as usize);
            assert_valid_matching(&instance, &matching);

            // extraction does not alter the network
            assert_eq!(ek.matching(), matching);
            assert!(ek.network().is_flow_conserved());
        }
    }
}
