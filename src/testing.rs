//! Helpers shared by the unit tests of several modules.

use crate::{algo::Matching, prelude::*};

/// Size of a maximum matching computed independently of the flow machinery using
/// Kuhn's augmenting DFS: for every left vertex, try to find a right vertex that is
/// either free or whose partner can be re-matched elsewhere.
pub(crate) fn reference_matching_size(instance: &BipartiteInstance) -> usize {
    let x = instance.number_of_left_nodes() as usize;
    let y = instance.number_of_right_nodes() as usize;

    let mut adjacency = vec![Vec::new(); x];
    for &Edge(a, b) in instance.pairs() {
        adjacency[a as usize - 1].push(b as usize - 1);
    }

    fn try_match(
        u: usize,
        adjacency: &[Vec<usize>],
        seen: &mut [bool],
        partner: &mut [Option<usize>],
    ) -> bool {
        for &v in &adjacency[u] {
            if seen[v] {
                continue;
            }
            seen[v] = true;

            let available = match partner[v] {
                None => true,
                Some(w) => try_match(w, adjacency, seen, partner),
            };
            if available {
                partner[v] = Some(u);
                return true;
            }
        }
        false
    }

    let mut partner = vec![None; y];
    let mut seen = vec![false; y];
    (0..x)
        .filter(|&u| {
            seen.fill(false);
            try_match(u, &adjacency, &mut seen, &mut partner)
        })
        .count()
}

/// Asserts that every matched pair is a pairing of the instance and that no vertex is
/// matched twice.
pub(crate) fn assert_valid_matching(instance: &BipartiteInstance, matching: &Matching) {
    assert!(matching.is_valid(), "vertex matched twice: {matching:?}");
    for pair in matching {
        assert!(
            instance.pairs().contains(pair),
            "{pair:?} is not a pairing of the instance"
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reference() {
        let instance = BipartiteInstance::try_new(3, 2, [(1, 1), (2, 1), (3, 2)]).unwrap();
        assert_eq!(reference_matching_size(&instance), 2);

        let instance = BipartiteInstance::try_new(2, 2, [(1, 1), (2, 1), (1, 2)]).unwrap();
        assert_eq!(reference_matching_size(&instance), 2);
    }
}
