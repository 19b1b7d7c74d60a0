use super::amino_acid::AminoAcid;

/// Evolutionary conservation of one sequence position, taken from a position-specific
/// scoring matrix.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Conservation {
    /// Per-amino-acid scores, indexed like [`AminoAcid::ALL`].
    pub profile: [f64; 20],
    /// Information content of the position, in bits.
    pub information_content: f64,
}

impl Conservation {
    pub fn new(profile: [f64; 20], information_content: f64) -> Self {
        Self {
            profile,
            information_content,
        }
    }

    /// Profile score of `amino_acid` at this position.
    #[inline]
    pub fn score(&self, amino_acid: AminoAcid) -> f64 {
        self.profile[amino_acid.index()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn score_reads_profile_at_amino_acid_position() {
        let mut profile = [0.0; 20];
        profile[AminoAcid::Tryptophan.index()] = 0.8;
        profile[AminoAcid::Alanine.index()] = 0.1;
        let conservation = Conservation::new(profile, 2.4);

        assert_eq!(conservation.score(AminoAcid::Tryptophan), 0.8);
        assert_eq!(conservation.score(AminoAcid::Alanine), 0.1);
        assert_eq!(conservation.score(AminoAcid::Glycine), 0.0);
        assert_eq!(conservation.information_content, 2.4);
    }
}
