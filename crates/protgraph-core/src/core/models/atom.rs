use super::ids::ResidueId;
use crate::core::utils::identifiers::element_from_atom_name;
use nalgebra::Point3;
use std::fmt;
use std::str::FromStr;

/// Chemical element of an atom, restricted to the elements found in protein structures.
///
/// Anything outside the common protein elements collapses into [`Element::Other`],
/// which encodes as an all-zero one-hot vector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub enum Element {
    Carbon,
    Nitrogen,
    Oxygen,
    Sulfur,
    Phosphorus,
    Hydrogen,
    #[default]
    Other,
}

impl Element {
    /// Elements with a dedicated slot in the one-hot encoding, in slot order.
    pub const ENCODED: [Element; 6] = [
        Element::Carbon,
        Element::Oxygen,
        Element::Nitrogen,
        Element::Sulfur,
        Element::Phosphorus,
        Element::Hydrogen,
    ];

    /// Returns the one-hot encoding of this element over [`Element::ENCODED`].
    pub fn onehot(&self) -> Vec<f64> {
        Self::ENCODED
            .iter()
            .map(|e| if e == self { 1.0 } else { 0.0 })
            .collect()
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            Element::Carbon => "C",
            Element::Nitrogen => "N",
            Element::Oxygen => "O",
            Element::Sulfur => "S",
            Element::Phosphorus => "P",
            Element::Hydrogen => "H",
            Element::Other => "X",
        }
    }
}

impl FromStr for Element {
    type Err = ();

    /// Parses an element symbol. Case-insensitive; unknown symbols are an error.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "C" => Ok(Element::Carbon),
            "N" => Ok(Element::Nitrogen),
            "O" => Ok(Element::Oxygen),
            "S" => Ok(Element::Sulfur),
            "P" => Ok(Element::Phosphorus),
            "H" | "D" => Ok(Element::Hydrogen),
            _ => Err(()),
        }
    }
}

impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// An atom of a protein structure.
///
/// Atoms are owned by a [`MolecularSystem`](super::system::MolecularSystem) and are
/// never mutated by the feature engine; force field quantities (charge, van der Waals
/// parameters) are looked up on demand from the residue and atom names.
#[derive(Debug, Clone, PartialEq)]
pub struct Atom {
    /// The name of the atom (e.g., "CA", "N", "OD1").
    pub name: String,
    /// The chemical element of the atom.
    pub element: Element,
    /// The ID of the parent residue this atom belongs to.
    pub residue_id: ResidueId,
    /// The 3D coordinates of the atom in Angstroms.
    pub position: Point3<f64>,
    /// Crystallographic occupancy, 1.0 unless the structure says otherwise.
    pub occupancy: f64,
}

impl Atom {
    /// Creates a new `Atom` with its element inferred from the atom name and full occupancy.
    ///
    /// # Arguments
    ///
    /// * `name` - The name of the atom.
    /// * `residue_id` - The ID of the residue this atom belongs to.
    /// * `position` - The 3D coordinates of the atom.
    pub fn new(name: &str, residue_id: ResidueId, position: Point3<f64>) -> Self {
        Self {
            name: name.to_string(),
            element: element_from_atom_name(name),
            residue_id,
            position,
            occupancy: 1.0,
        }
    }

    pub fn with_element(mut self, element: Element) -> Self {
        self.element = element;
        self
    }

    pub fn with_occupancy(mut self, occupancy: f64) -> Self {
        self.occupancy = occupancy;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_atom_infers_element_and_defaults_occupancy() {
        let residue_id = ResidueId::default();
        let atom = Atom::new("OD1", residue_id, Point3::new(1.0, 2.0, 3.0));

        assert_eq!(atom.name, "OD1");
        assert_eq!(atom.element, Element::Oxygen);
        assert_eq!(atom.residue_id, residue_id);
        assert_eq!(atom.position, Point3::new(1.0, 2.0, 3.0));
        assert_eq!(atom.occupancy, 1.0);
    }

    #[test]
    fn builder_methods_override_inferred_fields() {
        let atom = Atom::new("X1", ResidueId::default(), Point3::origin())
            .with_element(Element::Sulfur)
            .with_occupancy(0.5);
        assert_eq!(atom.element, Element::Sulfur);
        assert_eq!(atom.occupancy, 0.5);
    }

    #[test]
    fn element_onehot_has_single_hot_slot_for_known_elements() {
        for element in Element::ENCODED {
            let onehot = element.onehot();
            assert_eq!(onehot.len(), Element::ENCODED.len());
            assert_eq!(onehot.iter().sum::<f64>(), 1.0);
        }
        assert_eq!(Element::Oxygen.onehot(), vec![0.0, 1.0, 0.0, 0.0, 0.0, 0.0]);
    }

    #[test]
    fn element_onehot_is_all_zero_for_other() {
        assert!(Element::Other.onehot().iter().all(|&v| v == 0.0));
    }

    #[test]
    fn element_from_str_is_case_insensitive_and_maps_deuterium_to_hydrogen() {
        assert_eq!(Element::from_str("c"), Ok(Element::Carbon));
        assert_eq!(Element::from_str(" N "), Ok(Element::Nitrogen));
        assert_eq!(Element::from_str("D"), Ok(Element::Hydrogen));
        assert_eq!(Element::from_str("Fe"), Err(()));
    }
}
