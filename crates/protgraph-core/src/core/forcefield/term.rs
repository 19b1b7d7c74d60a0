use std::iter::Sum;
use std::ops::{Add, AddAssign};

/// Non-bonded energy of an atom pair or an aggregate of atom pairs, in kcal/mol.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct EnergyTerm {
    pub vdw: f64,
    pub coulomb: f64,
}

impl EnergyTerm {
    pub fn new(vdw: f64, coulomb: f64) -> Self {
        Self { vdw, coulomb }
    }
}

impl Add for EnergyTerm {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self {
            vdw: self.vdw + rhs.vdw,
            coulomb: self.coulomb + rhs.coulomb,
        }
    }
}

impl AddAssign for EnergyTerm {
    fn add_assign(&mut self, rhs: Self) {
        self.vdw += rhs.vdw;
        self.coulomb += rhs.coulomb;
    }
}

impl Sum for EnergyTerm {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::default(), |acc, term| acc + term)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_sums_each_field_correctly() {
        let result = EnergyTerm::new(1.0, 2.0) + EnergyTerm::new(4.0, -5.0);
        assert_eq!(result, EnergyTerm::new(5.0, -3.0));
    }

    #[test]
    fn add_assign_accumulates_each_field_correctly() {
        let mut a = EnergyTerm::new(1.0, 2.0);
        a += EnergyTerm::new(4.0, 5.0);
        assert_eq!(a, EnergyTerm::new(5.0, 7.0));
    }

    #[test]
    fn sum_of_empty_iterator_is_zero() {
        let total: EnergyTerm = std::iter::empty().sum();
        assert_eq!(total, EnergyTerm::default());
    }

    #[test]
    fn sum_folds_all_terms() {
        let total: EnergyTerm = [
            EnergyTerm::new(1.0, -1.0),
            EnergyTerm::new(0.5, 2.0),
            EnergyTerm::new(-0.25, 0.0),
        ]
        .into_iter()
        .sum();
        assert_eq!(total, EnergyTerm::new(1.25, 1.0));
    }
}
