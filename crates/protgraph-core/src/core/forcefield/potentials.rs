/// Coulomb constant in kcal·Å/(mol·e²).
pub const COULOMB_CONSTANT: f64 = 332.0636;

/// Lennard-Jones parameters of a single atom or of a combined atom pair.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct LjParams {
    /// Distance at which the potential crosses zero, in Angstroms.
    pub sigma: f64,
    /// Well depth in kcal/mol.
    pub epsilon: f64,
}

impl LjParams {
    pub fn new(sigma: f64, epsilon: f64) -> Self {
        Self { sigma, epsilon }
    }

    /// Lorentz-Berthelot mixing: arithmetic mean of sigmas, geometric mean of epsilons.
    #[inline]
    pub fn combine(&self, other: &LjParams) -> LjParams {
        LjParams {
            sigma: 0.5 * (self.sigma + other.sigma),
            epsilon: (self.epsilon * other.epsilon).sqrt(),
        }
    }
}

/// 12-6 Lennard-Jones potential in sigma form: `4ε((σ/d)^12 − (σ/d)^6)`.
///
/// Undefined at `dist == 0`; callers never evaluate self-pairs.
#[inline]
pub fn lennard_jones(dist: f64, sigma: f64, epsilon: f64) -> f64 {
    let rho6 = (sigma / dist).powi(6);
    4.0 * epsilon * (rho6 * rho6 - rho6)
}

/// Coulomb energy of two point charges, `K·q1·q2 / (ε0·d)`, without cutoff.
///
/// The charge product is formed first so the result is bit-identical under swapping
/// `q1` and `q2`. Undefined at `dist == 0`; callers never evaluate self-pairs.
#[inline]
pub fn coulomb(dist: f64, q1: f64, q2: f64, epsilon0: f64) -> f64 {
    (q1 * q2) * COULOMB_CONSTANT / (epsilon0 * dist)
}
