use std::collections::BTreeMap;

/// Edge feature names written by the contact feature engine.
pub mod edge {
    pub const DISTANCE: &str = "distance";
    pub const COVALENT: &str = "covalent";
    pub const SAME_RESIDUE: &str = "same_res";
    pub const SAME_CHAIN: &str = "same_chain";
    pub const ELECTROSTATIC: &str = "electrostatic";
    pub const VANDERWAALS: &str = "vanderwaals";
}

/// Node feature names written by the node feature task.
pub mod node {
    pub const ATOM_TYPE: &str = "atom_type";
    pub const PDB_OCCUPANCY: &str = "pdb_occupancy";
    pub const ATOM_CHARGE: &str = "atom_charge";
    pub const RES_TYPE: &str = "res_type";
    pub const RES_CHARGE: &str = "res_charge";
    pub const POLARITY: &str = "polarity";
    pub const RES_SIZE: &str = "res_size";
    pub const RES_MASS: &str = "res_mass";
    pub const RES_PI: &str = "res_pI";
    pub const HB_DONORS: &str = "hb_donors";
    pub const HB_ACCEPTORS: &str = "hb_acceptors";
    pub const PSSM: &str = "pssm";
    pub const CONSERVATION: &str = "conservation";
    pub const INFO_CONTENT: &str = "info_content";
    pub const VARIANT_RES: &str = "variant_res";
    pub const DIFF_CHARGE: &str = "diff_charge";
    pub const DIFF_POLARITY: &str = "diff_polarity";
    pub const DIFF_SIZE: &str = "diff_size";
    pub const DIFF_MASS: &str = "diff_mass";
    pub const DIFF_PI: &str = "diff_pI";
    pub const DIFF_HB_DONORS: &str = "diff_hb_donors";
    pub const DIFF_HB_ACCEPTORS: &str = "diff_hb_acceptors";
    pub const DIFF_CONSERVATION: &str = "diff_conservation";
}

#[derive(Debug, Clone, PartialEq)]
pub enum FeatureValue {
    Scalar(f64),
    Vector(Vec<f64>),
}

impl FeatureValue {
    pub fn as_scalar(&self) -> Option<f64> {
        match self {
            FeatureValue::Scalar(v) => Some(*v),
            FeatureValue::Vector(_) => None,
        }
    }

    pub fn as_vector(&self) -> Option<&[f64]> {
        match self {
            FeatureValue::Scalar(_) => None,
            FeatureValue::Vector(v) => Some(v),
        }
    }
}

impl From<f64> for FeatureValue {
    fn from(value: f64) -> Self {
        FeatureValue::Scalar(value)
    }
}

impl From<bool> for FeatureValue {
    fn from(value: bool) -> Self {
        FeatureValue::Scalar(if value { 1.0 } else { 0.0 })
    }
}

impl From<Vec<f64>> for FeatureValue {
    fn from(value: Vec<f64>) -> Self {
        FeatureValue::Vector(value)
    }
}

/// Named features of a node or edge. Keys are unique; writing a key twice replaces it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Features {
    values: BTreeMap<String, FeatureValue>,
}

impl Features {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, name: &str, value: impl Into<FeatureValue>) {
        self.values.insert(name.to_string(), value.into());
    }

    /// Moves every feature of `other` into `self`, replacing keys already present.
    pub fn merge(&mut self, other: Features) {
        self.values.extend(other.values);
    }

    pub fn get(&self, name: &str) -> Option<&FeatureValue> {
        self.values.get(name)
    }

    pub fn scalar(&self, name: &str) -> Option<f64> {
        self.get(name).and_then(FeatureValue::as_scalar)
    }

    pub fn vector(&self, name: &str) -> Option<&[f64]> {
        self.get(name).and_then(FeatureValue::as_vector)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.values.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &FeatureValue)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v))
    }
}
