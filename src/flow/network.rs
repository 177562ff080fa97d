//! # Bipartite Flow Network
//!
//! The network for `x` left and `y` right vertices has `x + y + 2` nodes:
//!
//! | external id          | internal node |
//! |----------------------|---------------|
//! | left `a` in `1..=x`  | `a - 1`       |
//! | right `b` in `1..=y` | `x + b - 1`   |
//! | source               | `x + y`       |
//! | sink                 | `x + y + 1`   |
//!
//! Arcs are inserted (and thus explored by the BFS) in the following order:
//! all pairings in input order, then `source -> a` for all left vertices, then
//! `b -> sink` for all right vertices. Each primary arc is immediately followed
//! by its reverse arc in the arena.

use smallvec::SmallVec;

use super::*;
use crate::{instance::BipartiteInstance, prelude::*};

/// Most vertices of sparse matching instances have only a handful of incident arcs
type OutArcs = SmallVec<[ArcId; 4]>;

/// A unit-capacity flow network modelling a bipartite matching instance.
///
/// The structure (endpoints, capacities, kinds, reverse links) is fixed at construction;
/// only flows change afterwards and only through [`FlowNetwork::push_flow`].
#[derive(Debug, Clone)]
pub struct FlowNetwork {
    left: NumNodes,
    right: NumNodes,
    arcs: Vec<ResidualArc>,
    out_arcs: Vec<OutArcs>,
}

impl FlowNetwork {
    /// Builds the flow network of a (validated) bipartite instance with all flows set to zero.
    ///
    /// # Examples
    /// ```
    /// use umatch::prelude::*;
    ///
    /// let instance = BipartiteInstance::try_new(2, 3, [(1, 3)]).unwrap();
    /// let network = FlowNetwork::bipartite(&instance);
    ///
    /// assert_eq!(network.number_of_nodes(), 7);
    /// // one pairing, two source arcs, three sink arcs -- each with a reverse arc
    /// assert_eq!(network.number_of_arcs(), 12);
    /// ```
    pub fn bipartite(instance: &BipartiteInstance) -> Self {
        let left = instance.number_of_left_nodes();
        let right = instance.number_of_right_nodes();
        let n = instance.number_of_nodes();

        let mut network = Self {
            left,
            right,
            arcs: Vec::with_capacity(
                2 * (instance.number_of_pairs() as usize + left as usize + right as usize),
            ),
            out_arcs: vec![OutArcs::new(); n as usize],
        };

        for &Edge(a, b) in instance.pairs() {
            let (u, v) = (network.left_node(a), network.right_node(b));
            network.add_arc_pair(u, v, ArcKind::Pairing);
        }

        let source = network.source();
        for u in 0..left {
            network.add_arc_pair(source, u, ArcKind::Source);
        }

        let sink = network.sink();
        for v in left..left + right {
            network.add_arc_pair(v, sink, ArcKind::Sink);
        }

        network
    }

    /// Adds the primary arc `u -> v` (capacity 1, flow 0) and its reverse arc `v -> u`
    /// (capacity 1, flow 1), linking both.
    fn add_arc_pair(&mut self, u: Node, v: Node, kind: ArcKind) {
        debug_assert!(kind.is_primary());

        let primary = self.arcs.len() as ArcId;
        let reverse = primary + 1;

        self.arcs.push(ResidualArc::new(u, v, 1, 0, kind, reverse));
        self.arcs.push(ResidualArc::new(v, u, 1, 1, ArcKind::Reverse, primary));

        self.out_arcs[u as usize].push(primary);
        self.out_arcs[v as usize].push(reverse);
    }

    /// Number of left vertices `x`
    pub fn number_of_left_nodes(&self) -> NumNodes {
        self.left
    }

    /// Number of right vertices `y`
    pub fn number_of_right_nodes(&self) -> NumNodes {
        self.right
    }

    /// Number of nodes including source and sink
    pub fn number_of_nodes(&self) -> NumNodes {
        self.out_arcs.len() as NumNodes
    }

    /// Number of arcs including reverse arcs
    pub fn number_of_arcs(&self) -> usize {
        self.arcs.len()
    }

    /// The synthetic source `x + y`
    #[inline]
    pub fn source(&self) -> Node {
        self.left + self.right
    }

    /// The synthetic sink `x + y + 1`
    #[inline]
    pub fn sink(&self) -> Node {
        self.left + self.right + 1
    }

    /// Maps the external left id `a` in `1..=x` to its internal node
    #[inline]
    pub fn left_node(&self, a: Node) -> Node {
        debug_assert!((1..=self.left).contains(&a));
        a - 1
    }

    /// Maps the external right id `b` in `1..=y` to its internal node
    #[inline]
    pub fn right_node(&self, b: Node) -> Node {
        debug_assert!((1..=self.right).contains(&b));
        self.left + b - 1
    }

    /// Returns *true* if `u` is an internal left node
    #[inline]
    pub fn is_left_node(&self, u: Node) -> bool {
        u < self.left
    }

    /// Returns *true* if `u` is an internal right node
    #[inline]
    pub fn is_right_node(&self, u: Node) -> bool {
        (self.left..self.left + self.right).contains(&u)
    }

    /// Maps an internal node back to its external id on its side.
    /// Must not be called on source or sink.
    #[inline]
    pub fn external_id(&self, u: Node) -> Node {
        debug_assert!(u < self.source());
        if self.is_left_node(u) {
            u + 1
        } else {
            u - self.left + 1
        }
    }

    /// Returns the arc with the given id
    #[inline]
    pub fn arc(&self, id: ArcId) -> &ResidualArc {
        &self.arcs[id as usize]
    }

    /// Iterates over all arcs (including reverse arcs) in insertion order
    pub fn arcs(&self) -> impl Iterator<Item = (ArcId, &ResidualArc)> + '_ {
        self.arcs
            .iter()
            .enumerate()
            .map(|(id, arc)| (id as ArcId, arc))
    }

    /// Iterates over all pairing arcs in input order
    pub fn pairing_arcs(&self) -> impl Iterator<Item = &ResidualArc> + '_ {
        self.arcs.iter().filter(|arc| arc.kind() == ArcKind::Pairing)
    }

    /// Returns the outgoing arcs of `u` in insertion order
    #[inline]
    pub fn out_arcs(&self, u: Node) -> &[ArcId] {
        &self.out_arcs[u as usize]
    }

    /// Returns the external pair `(a, b)` of a pairing arc
    pub fn external_pair(&self, arc: &ResidualArc) -> Edge {
        debug_assert_eq!(arc.kind(), ArcKind::Pairing);
        Edge(self.external_id(arc.from()), self.external_id(arc.to()))
    }

    /// Pushes `amount` units of flow over the arc `id` and retracts the same amount from
    /// its reverse arc. Pushing over a reverse arc thereby cancels flow of its primary arc.
    pub fn push_flow(&mut self, id: ArcId, amount: Capacity) {
        let reverse = self.arcs[id as usize].reverse();
        self.arcs[id as usize].add_flow(amount);
        self.arcs[reverse as usize].retract_flow(amount);
    }

    /// Total flow leaving the source
    pub fn total_flow(&self) -> Capacity {
        self.out_arcs(self.source())
            .iter()
            .map(|&id| self.arc(id))
            .filter(|arc| arc.kind() == ArcKind::Source)
            .map(|arc| arc.flow())
            .sum()
    }

    /// Returns *true* if for every vertex except source and sink the flow entering it over
    /// primary arcs equals the flow leaving it over primary arcs, and if every primary arc
    /// and its reverse arc together hold exactly the arc's capacity.
    pub fn is_flow_conserved(&self) -> bool {
        let n = self.number_of_nodes() as usize;
        let mut inflow = vec![0 as Capacity; n];
        let mut outflow = vec![0 as Capacity; n];

        for arc in self.arcs.iter().filter(|arc| arc.kind().is_primary()) {
            let reverse = self.arc(arc.reverse());
            if arc.flow() + reverse.flow() != arc.capacity() {
                return false;
            }

            outflow[arc.from() as usize] += arc.flow();
            inflow[arc.to() as usize] += arc.flow();
        }

        (0..self.source() as usize).all(|u| inflow[u] == outflow[u])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use itertools::Itertools;

    fn network(x: NumNodes, y: NumNodes, pairs: &[(Node, Node)]) -> FlowNetwork {
        FlowNetwork::bipartite(&BipartiteInstance::try_new(x, y, pairs).unwrap())
    }

    #[test]
    fn layout() {
        let net = network(2, 3, &[(1, 3), (2, 1)]);

        assert_eq!(net.number_of_nodes(), 7);
        assert_eq!(net.source(), 5);
        assert_eq!(net.sink(), 6);
        assert_eq!(net.left_node(2), 1);
        assert_eq!(net.right_node(1), 2);
        assert_eq!(net.external_id(2), 1);
        assert_eq!(net.external_id(1), 2);
        assert!(net.is_left_node(1) && !net.is_left_node(2));
        assert!(net.is_right_node(4) && !net.is_right_node(5));
    }

    #[test]
    fn arc_pairs() {
        let net = network(2, 2, &[(1, 1), (1, 2), (2, 1)]);

        assert_eq!(net.number_of_arcs(), 2 * (3 + 2 + 2));
        for (id, arc) in net.arcs() {
            let reverse = net.arc(arc.reverse());
            assert_eq!(reverse.reverse(), id);
            assert_eq!(reverse.from(), arc.to());
            assert_eq!(reverse.to(), arc.from());
            assert_eq!(arc.capacity(), 1);
            assert_eq!(arc.kind().is_primary(), arc.flow() == 0);
            assert_ne!(arc.kind().is_primary(), reverse.kind().is_primary());
        }

        assert_eq!(
            net.pairing_arcs().map(|arc| net.external_pair(arc)).collect_vec(),
            vec![Edge(1, 1), Edge(1, 2), Edge(2, 1)]
        );
    }

    #[test]
    fn exploration_order() {
        let net = network(2, 2, &[(1, 2), (1, 1)]);

        // pairings of left 1 in input order, followed by the reverse of its source arc
        let targets = net
            .out_arcs(net.left_node(1))
            .iter()
            .map(|&id| net.arc(id).to())
            .collect_vec();
        assert_eq!(targets, vec![net.right_node(2), net.right_node(1), net.source()]);

        // right vertices: reverse pairing arcs first, then the sink arc
        let kinds = net
            .out_arcs(net.right_node(1))
            .iter()
            .map(|&id| net.arc(id).kind())
            .collect_vec();
        assert_eq!(kinds, vec![ArcKind::Reverse, ArcKind::Sink]);

        let source_targets = net
            .out_arcs(net.source())
            .iter()
            .map(|&id| net.arc(id).to())
            .collect_vec();
        assert_eq!(source_targets, vec![0, 1]);
    }

    #[test]
    fn push_and_cancel() {
        let mut net = network(1, 1, &[(1, 1)]);
        assert!(net.is_flow_conserved());
        assert_eq!(net.total_flow(), 0);

        let pairing = net.out_arcs(0)[0];
        let reverse = net.arc(pairing).reverse();
        assert_eq!(net.arc(reverse).residual_capacity(), 0);

        net.push_flow(pairing, 1);
        assert_eq!(net.arc(pairing).flow(), 1);
        assert_eq!(net.arc(reverse).residual_capacity(), 1);
        // source and sink arcs are untouched, so node 0 and 1 are unbalanced
        assert!(!net.is_flow_conserved());

        net.push_flow(reverse, 1);
        assert_eq!(net.arc(pairing).flow(), 0);
        assert!(net.is_flow_conserved());
    }
}
