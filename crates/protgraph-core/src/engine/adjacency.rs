//! Bonded-adjacency closure.
//!
//! Two atoms are "intra" partners when a chain of at most `max_hops` covalent bonds
//! links them, a covalent bond being any pair closer than the covalent cutoff. This is
//! a topological proxy derived purely from geometry; no bond table is consulted.
//!
//! The closure equals the boolean matrix power `B^max_hops` of the direct-bond matrix
//! `B`. Because every atom is at distance zero from itself, `B` is reflexive, so walks of
//! exactly `k` steps cover every shorter chain; a breadth-first expansion bounded by
//! `max_hops` from each atom computes the same rows without any numeric truthiness.

use super::matrix::from_rows;
use nalgebra::DMatrix;

/// Direct covalent-bond matrix: `true` where `distance < covalent_cutoff`.
pub fn covalent_bonds(distances: &DMatrix<f64>, covalent_cutoff: f64) -> DMatrix<bool> {
    distances.map(|d| d < covalent_cutoff)
}

/// Boolean matrix where `(i, j)` is `true` iff atoms `i` and `j` are joined by a chain of
/// at most `max_hops` covalent bonds. `max_hops` below 1 behaves as 1.
///
/// Self-pairs are `true`; they are never read as edge features.
pub fn bonded_adjacency(
    distances: &DMatrix<f64>,
    covalent_cutoff: f64,
    max_hops: usize,
) -> DMatrix<bool> {
    let n = distances.nrows();
    let neighbours: Vec<Vec<usize>> = (0..n)
        .map(|i| {
            (0..n)
                .filter(|&j| distances[(i, j)] < covalent_cutoff)
                .collect()
        })
        .collect();

    from_rows(n, |source| {
        let mut reached = vec![false; n];
        let mut frontier = vec![source];

        for _ in 0..max_hops.max(1) {
            let mut next = Vec::new();
            for &atom in &frontier {
                for &neighbour in &neighbours[atom] {
                    if !reached[neighbour] {
                        reached[neighbour] = true;
                        next.push(neighbour);
                    }
                }
            }
            if next.is_empty() {
                break;
            }
            frontier = next;
        }
        reached
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::matrix::distance_matrix;
    use nalgebra::Point3;

    const CUTOFF: f64 = 2.1;

    /// Five atoms on a line, 1.5 Å apart: a covalent chain 0-1-2-3-4.
    fn linear_chain() -> DMatrix<f64> {
        let positions: Vec<_> = (0..5)
            .map(|i| Point3::new(1.5 * i as f64, 0.0, 0.0))
            .collect();
        distance_matrix(&positions)
    }

    /// Reference boolean power `B^max_hops` via explicit boolean products.
    fn boolean_power(distances: &DMatrix<f64>, max_hops: usize) -> DMatrix<bool> {
        let b = covalent_bonds(distances, CUTOFF);
        let n = b.nrows();
        let mut result = b.clone();
        for _ in 1..max_hops {
            result = DMatrix::from_fn(n, n, |i, j| (0..n).any(|k| result[(i, k)] && b[(k, j)]));
        }
        result
    }

    #[test]
    fn covalent_bonds_uses_strict_cutoff() {
        let positions = [
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(2.1, 0.0, 0.0),
            Point3::new(0.0, 2.099, 0.0),
        ];
        let bonds = covalent_bonds(&distance_matrix(&positions), CUTOFF);
        assert!(!bonds[(0, 1)]);
        assert!(bonds[(0, 2)]);
        assert!(bonds[(0, 0)]);
    }

    #[test]
    fn one_hop_marks_only_directly_bonded_pairs() {
        let adjacency = bonded_adjacency(&linear_chain(), CUTOFF, 1);
        assert!(adjacency[(0, 1)]);
        assert!(!adjacency[(0, 2)]);
        assert!(adjacency[(2, 2)]);
    }

    #[test]
    fn three_hops_reach_atoms_three_bonds_away_but_not_four() {
        let adjacency = bonded_adjacency(&linear_chain(), CUTOFF, 3);
        assert!(adjacency[(0, 3)]);
        assert!(adjacency[(1, 4)]);
        assert!(!adjacency[(0, 4)]);
    }

    #[test]
    fn adjacency_is_symmetric() {
        let adjacency = bonded_adjacency(&linear_chain(), CUTOFF, 2);
        assert_eq!(adjacency, adjacency.transpose());
    }

    #[test]
    fn adjacency_is_monotone_in_hop_limit() {
        let distances = linear_chain();
        let mut previous = bonded_adjacency(&distances, CUTOFF, 1);
        for hops in 2..=5 {
            let current = bonded_adjacency(&distances, CUTOFF, hops);
            for (before, after) in previous.iter().zip(current.iter()) {
                assert!(!before || *after);
            }
            previous = current;
        }
    }

    #[test]
    fn adjacency_matches_boolean_matrix_power() {
        let positions = [
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(1.4, 0.0, 0.0),
            Point3::new(1.4, 1.5, 0.0),
            Point3::new(8.0, 0.0, 0.0),
            Point3::new(9.0, 0.5, 0.0),
            Point3::new(2.5, 2.5, 0.0),
        ];
        let distances = distance_matrix(&positions);
        for hops in 1..=4 {
            assert_eq!(
                bonded_adjacency(&distances, CUTOFF, hops),
                boolean_power(&distances, hops),
                "mismatch at {hops} hops"
            );
        }
    }

    #[test]
    fn disconnected_atoms_are_never_partners() {
        let positions = [Point3::new(0.0, 0.0, 0.0), Point3::new(50.0, 0.0, 0.0)];
        let adjacency = bonded_adjacency(&distance_matrix(&positions), CUTOFF, 10);
        assert!(!adjacency[(0, 1)]);
        assert!(adjacency[(0, 0)]);
    }

    #[test]
    fn zero_hops_behaves_as_one_hop() {
        let distances = linear_chain();
        assert_eq!(
            bonded_adjacency(&distances, CUTOFF, 0),
            bonded_adjacency(&distances, CUTOFF, 1)
        );
    }
}
