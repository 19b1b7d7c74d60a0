use super::adjacency::bonded_adjacency;
use super::config::ContactConfig;
use super::matrix::{distance_matrix, from_entries};
use crate::core::forcefield::params::VdwParams;
use crate::core::forcefield::potentials::{LjParams, coulomb, lennard_jones};
use nalgebra::{DMatrix, Point3};

/// Pairwise Coulomb energies, `K·q_i·q_j / (ε0·d_ij)`, with no distance cutoff.
///
/// The diagonal is NaN.
pub fn electrostatic_matrix(charges: &[f64], distances: &DMatrix<f64>, epsilon0: f64) -> DMatrix<f64> {
    from_entries(charges.len(), |i, j| {
        if i == j {
            f64::NAN
        } else {
            coulomb(distances[(i, j)], charges[i], charges[j], epsilon0)
        }
    })
}

/// Pairwise Lennard-Jones energies with Lorentz-Berthelot combined parameters.
///
/// The diagonal is NaN.
pub fn lennard_jones_matrix(params: &[LjParams], distances: &DMatrix<f64>) -> DMatrix<f64> {
    from_entries(params.len(), |i, j| {
        if i == j {
            f64::NAN
        } else {
            let combined = params[i].combine(&params[j]);
            lennard_jones(distances[(i, j)], combined.sigma, combined.epsilon)
        }
    })
}

/// Takes `intra` wherever `adjacency` is true and `inter` everywhere else.
pub fn blend_vdw(inter: &DMatrix<f64>, intra: &DMatrix<f64>, adjacency: &DMatrix<bool>) -> DMatrix<f64> {
    DMatrix::from_fn(inter.nrows(), inter.ncols(), |i, j| {
        if adjacency[(i, j)] {
            intra[(i, j)]
        } else {
            inter[(i, j)]
        }
    })
}

/// Van der Waals energy matrix: inter-parameter energies, overwritten by intra-parameter
/// energies on bonded-adjacent pairs.
pub fn vdw_matrix(params: &[VdwParams], distances: &DMatrix<f64>, adjacency: &DMatrix<bool>) -> DMatrix<f64> {
    let inter: Vec<LjParams> = params.iter().map(VdwParams::inter).collect();
    let intra: Vec<LjParams> = params.iter().map(VdwParams::intra).collect();

    blend_vdw(
        &lennard_jones_matrix(&inter, distances),
        &lennard_jones_matrix(&intra, distances),
        adjacency,
    )
}

/// Every pairwise matrix of one featurization call, indexed by registry position.
#[derive(Debug, Clone)]
pub struct PairwiseMatrices {
    pub distances: DMatrix<f64>,
    pub adjacency: DMatrix<bool>,
    pub electrostatic: DMatrix<f64>,
    pub vdw: DMatrix<f64>,
}

impl PairwiseMatrices {
    /// The three slices are parallel: entry `i` of each describes atom `i`.
    pub fn compute(
        positions: &[Point3<f64>],
        charges: &[f64],
        vdw_params: &[VdwParams],
        config: &ContactConfig,
    ) -> Self {
        debug_assert_eq!(positions.len(), charges.len());
        debug_assert_eq!(positions.len(), vdw_params.len());

        let distances = distance_matrix(positions);
        let adjacency = bonded_adjacency(&distances, config.covalent_cutoff, config.max_intra_hops);
        let electrostatic = electrostatic_matrix(charges, &distances, config.epsilon0);
        let vdw = vdw_matrix(vdw_params, &distances, &adjacency);

        Self {
            distances,
            adjacency,
            electrostatic,
            vdw,
        }
    }

    pub fn len(&self) -> usize {
        self.distances.nrows()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
