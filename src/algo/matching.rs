/*!
# Matchings

A [`Matching`] is the result of a maximum matching computation: an ordered list of
pairs `Edge(a, b)` of external left id `a` and external right id `b` in which no vertex
appears twice.

The [`MatchingExtractor`] reads a matching off a flow network: a pairing belongs to the
matching iff its arc carries positive flow. Extraction only reads the network, so
extracting twice yields the same result.
*/

use fxhash::FxHashSet;

use super::*;

/// A set of pairs between left and right vertices without shared endpoints.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Matching {
    pairs: Vec<Edge>,
}

impl Matching {
    /// Creates a matching from the given pairs without checking validity.
    /// See [`Matching::is_valid`].
    pub fn new(pairs: Vec<Edge>) -> Self {
        Self { pairs }
    }

    /// Number of matched pairs
    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    /// Returns *true* if no pair is matched
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// Returns the matched pairs in the order of their pairings in the input
    pub fn pairs(&self) -> &[Edge] {
        &self.pairs
    }

    /// Iterates over all matched pairs
    pub fn iter(&self) -> std::slice::Iter<'_, Edge> {
        self.pairs.iter()
    }

    /// Returns *true* if the pair `(a, b)` is matched
    pub fn contains(&self, pair: Edge) -> bool {
        self.pairs.contains(&pair)
    }

    /// Returns *true* if no left and no right vertex appears in more than one pair
    ///
    /// # Examples
    /// ```
    /// use umatch::{prelude::*, algo::*};
    ///
    /// assert!(Matching::new(vec![Edge(1, 2), Edge(2, 1)]).is_valid());
    /// assert!(!Matching::new(vec![Edge(1, 2), Edge(1, 1)]).is_valid());
    /// ```
    pub fn is_valid(&self) -> bool {
        let mut left = FxHashSet::default();
        let mut right = FxHashSet::default();
        self.pairs
            .iter()
            .all(|&Edge(a, b)| left.insert(a) && right.insert(b))
    }

    /// Consumes the matching and returns its pairs
    pub fn into_pairs(self) -> Vec<Edge> {
        self.pairs
    }
}

impl<'a> IntoIterator for &'a Matching {
    type Item = &'a Edge;
    type IntoIter = std::slice::Iter<'a, Edge>;

    fn into_iter(self) -> Self::IntoIter {
        self.pairs.iter()
    }
}

impl IntoIterator for Matching {
    type Item = Edge;
    type IntoIter = std::vec::IntoIter<Edge>;

    fn into_iter(self) -> Self::IntoIter {
        self.pairs.into_iter()
    }
}

/// Reads the matching encoded by the flow of a network.
pub trait MatchingExtractor {
    /// Returns all pairings whose arc carries strictly positive flow, in input order.
    fn extract_matching(&self) -> Matching;
}

impl MatchingExtractor for FlowNetwork {
    fn extract_matching(&self) -> Matching {
        Matching::new(
            self.pairing_arcs()
                .filter(|arc| arc.flow() > 0)
                .map(|arc| self.external_pair(arc))
                .collect(),
        )
    }
}
