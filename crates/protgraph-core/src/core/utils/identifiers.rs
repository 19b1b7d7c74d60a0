use crate::core::models::amino_acid::AminoAcid;
use crate::core::models::atom::Element;
use phf::{Map, phf_map};

static AMINO_ACID_CODES: Map<&'static str, AminoAcid> = phf_map! {
    "ALA" => AminoAcid::Alanine,
    "ARG" => AminoAcid::Arginine,
    "ASN" => AminoAcid::Asparagine,
    "ASP" => AminoAcid::AsparticAcid,
    "CYS" => AminoAcid::Cysteine, "CYX" => AminoAcid::Cysteine,
    "GLN" => AminoAcid::Glutamine,
    "GLU" => AminoAcid::GlutamicAcid,
    "GLY" => AminoAcid::Glycine,
    "HIS" => AminoAcid::Histidine, "HSE" => AminoAcid::Histidine, "HSD" => AminoAcid::Histidine,
    "HSP" => AminoAcid::Histidine, "HIE" => AminoAcid::Histidine, "HID" => AminoAcid::Histidine,
    "HIP" => AminoAcid::Histidine,
    "ILE" => AminoAcid::Isoleucine,
    "LEU" => AminoAcid::Leucine,
    "LYS" => AminoAcid::Lysine,
    "MET" => AminoAcid::Methionine,
    "PHE" => AminoAcid::Phenylalanine,
    "PRO" => AminoAcid::Proline,
    "SER" => AminoAcid::Serine,
    "THR" => AminoAcid::Threonine,
    "TRP" => AminoAcid::Tryptophan,
    "TYR" => AminoAcid::Tyrosine,
    "VAL" => AminoAcid::Valine,
};

static ELEMENT_PREFIXES: Map<char, Element> = phf_map! {
    'C' => Element::Carbon,
    'N' => Element::Nitrogen,
    'O' => Element::Oxygen,
    'S' => Element::Sulfur,
    'P' => Element::Phosphorus,
    'H' => Element::Hydrogen,
    'D' => Element::Hydrogen,
};

/// Resolves a three-letter residue code (case-insensitive, surrounding whitespace ignored).
pub fn amino_acid_from_code(code: &str) -> Option<AminoAcid> {
    AMINO_ACID_CODES
        .get(code.trim().to_ascii_uppercase().as_str())
        .copied()
}

/// Infers the element of a protein atom from its PDB atom name.
///
/// Leading digits are skipped ("1HB" is a hydrogen); the first letter decides.
pub fn element_from_atom_name(atom_name: &str) -> Element {
    atom_name
        .trim()
        .chars()
        .find(|c| !c.is_ascii_digit())
        .and_then(|c| ELEMENT_PREFIXES.get(&c.to_ascii_uppercase()).copied())
        .unwrap_or_default()
}
