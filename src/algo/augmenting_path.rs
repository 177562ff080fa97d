//! # Augmenting Path Search
//!
//! Breadth-first search over all arcs with positive residual capacity. Vertices are
//! discovered at most once, and arcs are scanned in insertion order, so among all
//! shortest source-sink paths the one using the earliest inserted arcs is found first.

use std::collections::VecDeque;

use log::trace;

use super::*;

/// Reusable state of the BFS used by Edmonds-Karp.
///
/// Besides the parent arc of every discovered vertex, the search tracks the minimum
/// residual capacity along the tree path to each vertex; once the sink is discovered,
/// this value is the bottleneck of the augmenting path.
///
/// After a search that did **not** reach the sink, [`AugmentingPathSearch::did_visit_node`]
/// describes the set of vertices reachable from the source in the residual network.
#[derive(Debug, Clone)]
pub struct AugmentingPathSearch {
    parent_arc: Vec<Option<OptionalArc>>,
    bottleneck: Vec<Capacity>,
    queue: VecDeque<Node>,
    visited: NodeBitSet,
    source: Node,
    sink: Node,
}

impl AugmentingPathSearch {
    /// Allocates the search state for the given network
    pub fn new(network: &FlowNetwork) -> Self {
        let n = network.number_of_nodes();
        Self {
            parent_arc: vec![None; n as usize],
            bottleneck: vec![0; n as usize],
            queue: VecDeque::with_capacity(n as usize),
            visited: NodeBitSet::new(n),
            source: network.source(),
            sink: network.sink(),
        }
    }

    fn reset(&mut self) {
        self.parent_arc.fill(None);
        self.queue.clear();
        self.visited.clear_all();
    }

    /// Searches a shortest augmenting path and returns its bottleneck capacity, or `None`
    /// if the sink cannot be reached anymore. The search stops as soon as the sink is
    /// discovered; the path itself can then be obtained by [`AugmentingPathSearch::path_arcs`].
    pub fn find(&mut self, network: &FlowNetwork) -> Option<Capacity> {
        debug_assert_eq!(self.parent_arc.len(), network.number_of_nodes() as usize);
        self.reset();

        self.visited.set_bit(self.source);
        self.bottleneck[self.source as usize] = Capacity::MAX;
        self.queue.push_back(self.source);

        while let Some(u) = self.queue.pop_front() {
            for &id in network.out_arcs(u) {
                let arc = network.arc(id);
                let v = arc.to();
                let residual = arc.residual_capacity();

                if residual == 0 || self.visited.get_bit(v) {
                    continue;
                }

                self.visited.set_bit(v);
                self.parent_arc[v as usize] = OptionalArc::new(id);
                self.bottleneck[v as usize] = self.bottleneck[u as usize].min(residual);

                if v == self.sink {
                    trace!(
                        "augmenting path found with bottleneck {}",
                        self.bottleneck[v as usize]
                    );
                    return Some(self.bottleneck[v as usize]);
                }

                self.queue.push_back(v);
            }
        }

        trace!(
            "no augmenting path; {} vertices reachable from the source",
            self.visited.cardinality()
        );
        None
    }

    /// Returns the arc through which `u` was discovered by the last search
    pub fn parent_arc(&self, u: Node) -> Option<ArcId> {
        self.parent_arc[u as usize].map(|id| id.get())
    }

    /// Returns *true* if the last search discovered `u`
    pub fn did_visit_node(&self, u: Node) -> bool {
        self.visited.get_bit(u)
    }

    /// Iterates over the arcs of the path found by the last successful search, starting at
    /// the arc entering the sink and walking back towards the source.
    ///
    /// # Warning
    /// Must only be called directly after [`AugmentingPathSearch::find`] returned `Some(_)`
    /// and before the network was modified.
    pub fn path_arcs<'a>(&'a self, network: &'a FlowNetwork) -> PathArcs<'a> {
        debug_assert!(self.did_visit_node(self.sink));
        PathArcs {
            search: self,
            network,
            current: self.sink,
        }
    }
}

/// Iterator over the parent-arc chain from the sink back to the source.
/// See [`AugmentingPathSearch::path_arcs`].
pub struct PathArcs<'a> {
    search: &'a AugmentingPathSearch,
    network: &'a FlowNetwork,
    current: Node,
}

impl Iterator for PathArcs<'_> {
    type Item = ArcId;

    fn next(&mut self) -> Option<Self::Item> {
        if self.current == self.search.source {
            return None;
        }

        let id = self.search.parent_arc(self.current)?;
        self.current = self.network.arc(id).from();
        Some(id)
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
    fn shortest_path_on_empty_flow() {
        let net = network(2, 2, &[(1, 2), (1, 1), (2, 1)]);
        let mut search = AugmentingPathSearch::new(&net);

        assert_eq!(search.find(&net), Some(1));

        // source -> left 1 -> right 2 (first pairing of left 1) -> sink
        let path = search
            .path_arcs(&net)
            .map(|id| (net.arc(id).from(), net.arc(id).to()))
            .collect_vec();
        assert_eq!(
            path,
            vec![
                (net.right_node(2), net.sink()),
                (net.left_node(1), net.right_node(2)),
                (net.source(), net.left_node(1)),
            ]
        );
    }

    #[test]
    fn no_path_without_pairings() {
        let net = network(2, 2, &[]);
        let mut search = AugmentingPathSearch::new(&net);

        assert_eq!(search.find(&net), None);
        assert!(search.did_visit_node(net.source()));
        assert!(search.did_visit_node(net.left_node(1)));
        assert!(search.did_visit_node(net.left_node(2)));
        assert!(!search.did_visit_node(net.right_node(1)));
        assert!(!search.did_visit_node(net.sink()));
    }

    #[test]
    fn path_through_reverse_arc() {
        // after matching 1-1, left 2 can only be matched by re-routing left 1 to right 2
        let mut net = network(2, 2, &[(1, 1), (2, 1), (1, 2)]);
        let mut search = AugmentingPathSearch::new(&net);

        assert_eq!(search.find(&net), Some(1));
        let path = search.path_arcs(&net).collect_vec();
        assert_eq!(path.len(), 3);
        for id in path {
            net.push_flow(id, 1);
        }

        assert_eq!(search.find(&net), Some(1));
        let kinds = search
            .path_arcs(&net)
            .map(|id| net.arc(id).kind())
            .collect_vec();
        assert_eq!(
            kinds,
            vec![
                ArcKind::Sink,
                ArcKind::Pairing,
                ArcKind::Reverse,
                ArcKind::Pairing,
                ArcKind::Source
            ]
        );
    }
}
