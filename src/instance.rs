/*!
# Bipartite Instances

A [`BipartiteInstance`] is the validated input of a matching computation: the number of
left vertices `x`, the number of right vertices `y` and a list of allowed pairings
`Edge(a, b)` with `1 <= a <= x` and `1 <= b <= y`.

Validation happens exactly once, in [`BipartiteInstance::try_new`]. Every later stage
(network construction, augmentation, extraction) relies on it and cannot fail.
*/

use fxhash::FxHashSet;
use log::debug;
use thiserror::Error;

use crate::{algo::*, flow::*, prelude::*};

/// Errors raised while validating a [`BipartiteInstance`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum InstanceError {
    /// The left endpoint of the pairing at position `index` is not in `1..=left`
    #[error("pairing #{index}: left vertex {vertex} is not in 1..={left}")]
    LeftOutOfRange {
        index: usize,
        vertex: Node,
        left: NumNodes,
    },
    /// The right endpoint of the pairing at position `index` is not in `1..=right`
    #[error("pairing #{index}: right vertex {vertex} is not in 1..={right}")]
    RightOutOfRange {
        index: usize,
        vertex: Node,
        right: NumNodes,
    },
    /// `left + right + 2` does not fit into a [`Node`]
    #[error("{left} + {right} vertices (plus source and sink) exceed the node id range")]
    TooManyNodes { left: NumNodes, right: NumNodes },
    /// The flow network would need more arcs than an [`ArcId`] can address
    #[error("{pairs} pairings on {nodes} vertices exceed the arc id range")]
    TooManyArcs { pairs: usize, nodes: NumNodes },
}

impl From<InstanceError> for std::io::Error {
    fn from(value: InstanceError) -> Self {
        std::io::Error::new(std::io::ErrorKind::InvalidData, value)
    }
}

/// A validated bipartite graph given by its side sizes and allowed pairings.
///
/// Pairings keep their input order as this order determines the arc insertion order
/// of the flow network and thereby which of several equally short augmenting paths is
/// found first. Duplicate pairings are kept: they become parallel arcs without any
/// effect on the size of the maximum matching.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BipartiteInstance {
    left: NumNodes,
    right: NumNodes,
    pairs: Vec<Edge>,
}

impl BipartiteInstance {
    /// Validates and creates a new instance.
    ///
    /// # Errors
    /// Returns an [`InstanceError`] if a pairing references a vertex outside of its side
    /// or if the resulting flow network cannot be addressed by 32-bit ids.
    ///
    /// # Examples
    /// ```
    /// use umatch::prelude::*;
    ///
    /// let instance = BipartiteInstance::try_new(2, 2, [(1, 1), (1, 2), (2, 1)]).unwrap();
    /// assert_eq!(instance.number_of_pairs(), 3);
    ///
    /// assert!(BipartiteInstance::try_new(2, 2, [(3, 1)]).is_err());
    /// ```
    pub fn try_new<I, E>(left: NumNodes, right: NumNodes, pairs: I) -> Result<Self, InstanceError>
    where
        I: IntoIterator<Item = E>,
        E: Into<Edge>,
    {
        let nodes = left
            .checked_add(right)
            .and_then(|n| n.checked_add(2))
            .ok_or(InstanceError::TooManyNodes { left, right })?;

        let pairs: Vec<Edge> = pairs.into_iter().map(Into::into).collect();

        for (index, &Edge(a, b)) in pairs.iter().enumerate() {
            if !(1..=left).contains(&a) {
                return Err(InstanceError::LeftOutOfRange {
                    index,
                    vertex: a,
                    left,
                });
            }
            if !(1..=right).contains(&b) {
                return Err(InstanceError::RightOutOfRange {
                    index,
                    vertex: b,
                    right,
                });
            }
        }

        // every pairing, left and right vertex contributes an arc and its reverse
        let arcs = (pairs.len() as u64 + left as u64 + right as u64) * 2;
        if arcs >= INVALID_ARC as u64 {
            return Err(InstanceError::TooManyArcs {
                pairs: pairs.len(),
                nodes,
            });
        }

        if log::log_enabled!(log::Level::Debug) {
            let mut seen = FxHashSet::default();
            for (index, edge) in pairs.iter().enumerate() {
                if !seen.insert(*edge) {
                    debug!("pairing #{index} {edge:?} is a duplicate and becomes a parallel arc");
                }
            }
        }

        Ok(Self { left, right, pairs })
    }

    /// Returns the number of left vertices `x`
    pub fn number_of_left_nodes(&self) -> NumNodes {
        self.left
    }

    /// Returns the number of right vertices `y`
    pub fn number_of_right_nodes(&self) -> NumNodes {
        self.right
    }

    /// Returns the number of vertices of the flow network, ie. `x + y + 2`
    pub fn number_of_nodes(&self) -> NumNodes {
        self.left + self.right + 2
    }

    /// Returns the number of pairings (duplicates included)
    pub fn number_of_pairs(&self) -> NumEdges {
        self.pairs.len() as NumEdges
    }

    /// Returns the pairings in input order
    pub fn pairs(&self) -> &[Edge] {
        &self.pairs
    }

    /// Upper bound on the size of any matching, ie. `min(x, y)`
    pub fn matching_upper_bound(&self) -> NumNodes {
        self.left.min(self.right)
    }

    /// Builds the flow network and runs Edmonds-Karp to completion.
    ///
    /// # Examples
    /// ```
    /// use umatch::prelude::*;
    ///
    /// let instance = BipartiteInstance::try_new(3, 2, [(1, 1), (2, 1), (3, 2)]).unwrap();
    /// assert_eq!(instance.maximum_matching().len(), 2);
    /// ```
    pub fn maximum_matching(&self) -> Matching {
        let mut ek = EdmondsKarp::new(FlowNetwork::bipartite(self));
        ek.run();
        ek.matching()
    }
}

/// Computes a maximum matching for `left` left vertices, `right` right vertices and the
/// allowed `pairs` (external 1-indexed ids).
///
/// This is the boundary of the library: no I/O is performed.
///
/// # Errors
/// Returns an [`InstanceError`] if the input does not describe a valid instance.
///
/// # Examples
/// ```
/// use umatch::prelude::*;
///
/// let matching = maximum_matching(1, 1, [(1, 1)]).unwrap();
/// assert_eq!(matching.pairs(), &[Edge(1, 1)]);
/// ```
pub fn maximum_matching<I, E>(
    left: NumNodes,
    right: NumNodes,
    pairs: I,
) -> Result<Matching, InstanceError>
where
    I: IntoIterator<Item = E>,
    E: Into<Edge>,
{
    Ok(BipartiteInstance::try_new(left, right, pairs)?.maximum_matching())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn out_of_range() {
        assert_eq!(
            BipartiteInstance::try_new(2, 3, [(1, 1), (0, 1)]),
            Err(InstanceError::LeftOutOfRange {
                index: 1,
                vertex: 0,
                left: 2
            })
        );
        assert_eq!(
            BipartiteInstance::try_new(2, 3, [(2, 4)]),
            Err(InstanceError::RightOutOfRange {
                index: 0,
                vertex: 4,
                right: 3
            })
        );
        // right ids are not shifted by the left side in the external representation
        assert!(BipartiteInstance::try_new(2, 3, [(2, 3)]).is_ok());
    }

    #[test]
    fn too_many_nodes() {
        assert_eq!(
            BipartiteInstance::try_new(Node::MAX - 1, 1, Vec::<Edge>::new()),
            Err(InstanceError::TooManyNodes {
                left: Node::MAX - 1,
                right: 1
            })
        );
    }

    #[test]
    fn duplicates_are_kept() {
        let instance = BipartiteInstance::try_new(1, 1, [(1, 1), (1, 1)]).unwrap();
        assert_eq!(instance.number_of_pairs(), 2);
        assert_eq!(instance.maximum_matching().len(), 1);
    }

    #[test]
    fn error_into_io() {
        let err: std::io::Error = InstanceError::TooManyNodes { left: 1, right: 2 }.into();
        assert_eq!(err.kind(), std::io::ErrorKind::InvalidData);
    }
}
