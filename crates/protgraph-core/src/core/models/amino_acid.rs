use crate::core::utils::identifiers::amino_acid_from_code;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum AminoAcid {
    Alanine,
    Arginine,
    Asparagine,
    AsparticAcid,
    Cysteine,
    Glutamine,
    GlutamicAcid,
    Glycine,
    Histidine,
    Isoleucine,
    Leucine,
    Lysine,
    Methionine,
    Phenylalanine,
    Proline,
    Serine,
    Threonine,
    Tryptophan,
    Tyrosine,
    Valine,
}

/// Side-chain polarity class, encoded one-hot in node features.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Polarity {
    Apolar,
    Polar,
    NegativeCharge,
    PositiveCharge,
}

impl Polarity {
    pub const ALL: [Polarity; 4] = [
        Polarity::Apolar,
        Polarity::Polar,
        Polarity::NegativeCharge,
        Polarity::PositiveCharge,
    ];

    pub fn onehot(&self) -> Vec<f64> {
        Self::ALL
            .iter()
            .map(|p| if p == self { 1.0 } else { 0.0 })
            .collect()
    }
}

/// Physico-chemical properties of a standard amino acid.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AminoAcidProperties {
    /// Formal side-chain charge at neutral pH.
    pub charge: f64,
    pub polarity: Polarity,
    /// Number of heavy atoms in the side chain.
    pub size: u8,
    /// Residue mass in Da (free amino acid minus one water).
    pub mass: f64,
    /// Isoelectric point.
    pub pi: f64,
    /// Side-chain hydrogen bond donors.
    pub hydrogen_bond_donors: u8,
    /// Side-chain hydrogen bond acceptors.
    pub hydrogen_bond_acceptors: u8,
}

const fn props(
    charge: f64,
    polarity: Polarity,
    size: u8,
    mass: f64,
    pi: f64,
    hydrogen_bond_donors: u8,
    hydrogen_bond_acceptors: u8,
) -> AminoAcidProperties {
    AminoAcidProperties {
        charge,
        polarity,
        size,
        mass,
        pi,
        hydrogen_bond_donors,
        hydrogen_bond_acceptors,
    }
}

impl AminoAcid {
    pub const ALL: [AminoAcid; 20] = [
        AminoAcid::Alanine,
        AminoAcid::Arginine,
        AminoAcid::Asparagine,
        AminoAcid::AsparticAcid,
        AminoAcid::Cysteine,
        AminoAcid::Glutamine,
        AminoAcid::GlutamicAcid,
        AminoAcid::Glycine,
        AminoAcid::Histidine,
        AminoAcid::Isoleucine,
        AminoAcid::Leucine,
        AminoAcid::Lysine,
        AminoAcid::Methionine,
        AminoAcid::Phenylalanine,
        AminoAcid::Proline,
        AminoAcid::Serine,
        AminoAcid::Threonine,
        AminoAcid::Tryptophan,
        AminoAcid::Tyrosine,
        AminoAcid::Valine,
    ];

    pub fn three_letter_code(&self) -> &'static str {
        match self {
            AminoAcid::Alanine => "ALA",
            AminoAcid::Arginine => "ARG",
            AminoAcid::Asparagine => "ASN",
            AminoAcid::AsparticAcid => "ASP",
            AminoAcid::Cysteine => "CYS",
            AminoAcid::Glutamine => "GLN",
            AminoAcid::GlutamicAcid => "GLU",
            AminoAcid::Glycine => "GLY",
            AminoAcid::Histidine => "HIS",
            AminoAcid::Isoleucine => "ILE",
            AminoAcid::Leucine => "LEU",
            AminoAcid::Lysine => "LYS",
            AminoAcid::Methionine => "MET",
            AminoAcid::Phenylalanine => "PHE",
            AminoAcid::Proline => "PRO",
            AminoAcid::Serine => "SER",
            AminoAcid::Threonine => "THR",
            AminoAcid::Tryptophan => "TRP",
            AminoAcid::Tyrosine => "TYR",
            AminoAcid::Valine => "VAL",
        }
    }

    pub fn properties(&self) -> AminoAcidProperties {
        use Polarity::*;
        match self {
            AminoAcid::Alanine => props(0.0, Apolar, 1, 71.08, 6.00, 0, 0),
            AminoAcid::Arginine => props(1.0, PositiveCharge, 7, 156.19, 10.76, 5, 0),
            AminoAcid::Asparagine => props(0.0, Polar, 4, 114.10, 5.41, 2, 2),
            AminoAcid::AsparticAcid => props(-1.0, NegativeCharge, 4, 115.09, 2.77, 0, 4),
            AminoAcid::Cysteine => props(0.0, Polar, 2, 103.14, 5.07, 0, 0),
            AminoAcid::Glutamine => props(0.0, Polar, 5, 128.13, 5.65, 2, 2),
            AminoAcid::GlutamicAcid => props(-1.0, NegativeCharge, 5, 129.12, 3.22, 0, 4),
            AminoAcid::Glycine => props(0.0, Apolar, 0, 57.05, 5.97, 0, 0),
            AminoAcid::Histidine => props(0.0, PositiveCharge, 6, 137.14, 7.59, 1, 1),
            AminoAcid::Isoleucine => props(0.0, Apolar, 4, 113.16, 6.02, 0, 0),
            AminoAcid::Leucine => props(0.0, Apolar, 4, 113.16, 5.98, 0, 0),
            AminoAcid::Lysine => props(1.0, PositiveCharge, 5, 128.17, 9.74, 3, 0),
            AminoAcid::Methionine => props(0.0, Apolar, 4, 131.19, 5.74, 0, 0),
            AminoAcid::Phenylalanine => props(0.0, Apolar, 7, 147.18, 5.48, 0, 0),
            AminoAcid::Proline => props(0.0, Apolar, 3, 97.12, 6.30, 0, 0),
            AminoAcid::Serine => props(0.0, Polar, 2, 87.08, 5.68, 1, 2),
            AminoAcid::Threonine => props(0.0, Polar, 3, 101.10, 5.60, 1, 2),
            AminoAcid::Tryptophan => props(0.0, Apolar, 10, 186.21, 5.89, 1, 0),
            AminoAcid::Tyrosine => props(0.0, Polar, 8, 163.18, 5.66, 1, 1),
            AminoAcid::Valine => props(0.0, Apolar, 3, 99.13, 5.96, 0, 0),
        }
    }

    /// Position in [`AminoAcid::ALL`].
    #[inline]
    pub fn index(&self) -> usize {
        *self as usize
    }

    /// One-hot encoding over [`AminoAcid::ALL`].
    pub fn onehot(&self) -> Vec<f64> {
        Self::ALL
            .iter()
            .map(|aa| if aa == self { 1.0 } else { 0.0 })
            .collect()
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("Unrecognized amino acid code: '{0}'")]
pub struct ParseAminoAcidError(pub String);

impl FromStr for AminoAcid {
    type Err = ParseAminoAcidError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        amino_acid_from_code(s).ok_or_else(|| ParseAminoAcidError(s.to_string()))
    }
}

impl fmt::Display for AminoAcid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.three_letter_code())
    }
}
