/*!
# Minimum Vertex Cover (König)

By König's theorem, the size of a maximum matching in a bipartite graph equals the size
of a minimum vertex cover. Given a maximum flow, such a cover is read off the residual
network: let `Z` be the set of vertices reachable from the source. Then

- every left vertex **not** in `Z`, and
- every right vertex in `Z`

form a minimum vertex cover. It serves as a certificate that a computed matching is
indeed maximum.
*/

use itertools::Itertools;

use super::*;

/// A set of left and right vertices (external ids) covering every pairing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VertexCover {
    left: Vec<Node>,
    right: Vec<Node>,
}

impl VertexCover {
    /// Left vertices of the cover in ascending order
    pub fn left(&self) -> &[Node] {
        &self.left
    }

    /// Right vertices of the cover in ascending order
    pub fn right(&self) -> &[Node] {
        &self.right
    }

    /// Total number of vertices in the cover
    pub fn len(&self) -> usize {
        self.left.len() + self.right.len()
    }

    /// Returns *true* if the cover contains no vertex
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns *true* if every pairing of `instance` has at least one endpoint in the cover
    pub fn covers(&self, instance: &BipartiteInstance) -> bool {
        let mut left = NodeBitSet::new(instance.number_of_left_nodes() + 1);
        let mut right = NodeBitSet::new(instance.number_of_right_nodes() + 1);
        self.left.iter().for_each(|&a| {
            left.set_bit(a);
        });
        self.right.iter().for_each(|&b| {
            right.set_bit(b);
        });

        instance
            .pairs()
            .iter()
            .all(|&Edge(a, b)| left.get_bit(a) || right.get_bit(b))
    }
}

/// Computes a minimum vertex cover from a maximum flow.
pub trait MinimumVertexCover {
    /// Runs the flow computation to completion (if not done yet) and returns a minimum
    /// vertex cover. Its size equals the size of the maximum matching.
    fn minimum_vertex_cover(&mut self) -> VertexCover;
}

impl MinimumVertexCover for EdmondsKarp {
    fn minimum_vertex_cover(&mut self) -> VertexCover {
        self.run();
        debug_assert!(self.is_exhausted());

        // the final (failed) search visited exactly the vertices reachable from the source
        let network = self.network();
        let search = self.search();

        let left = (0..network.number_of_left_nodes())
            .filter(|&u| !search.did_visit_node(u))
            .map(|u| network.external_id(u))
            .collect_vec();

        let right = (network.number_of_left_nodes()..network.source())
            .filter(|&u| search.did_visit_node(u))
            .map(|u| network.external_id(u))
            .collect_vec();

        VertexCover { left, right }
    }
}

impl BipartiteInstance {
    /// Computes a minimum vertex cover of the instance.
    ///
    /// # Examples
    /// ```
    /// use umatch::prelude::*;
    ///
    /// // a star around right vertex 1
    /// let instance = BipartiteInstance::try_new(3, 2, [(1, 1), (2, 1), (3, 1)]).unwrap();
    /// let cover = instance.minimum_vertex_cover();
    ///
    /// assert!(cover.left().is_empty());
    /// assert_eq!(cover.right(), &[1]);
    /// ```
    pub fn minimum_vertex_cover(&self) -> VertexCover {
        EdmondsKarp::new(FlowNetwork::bipartite(self)).minimum_vertex_cover()
    }
}
