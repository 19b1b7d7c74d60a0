use super::potentials::LjParams;
use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;
use thiserror::Error;
use tracing::warn;

/// Lennard-Jones parameters of one force field atom type.
///
/// `inter_*` applies to non-bonded pairs, `intra_*` to pairs within a few covalent
/// bonds of each other. All values are non-negative.
#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Default)]
#[serde(deny_unknown_fields)]
pub struct VdwParams {
    pub inter_epsilon: f64,
    pub inter_sigma: f64,
    pub intra_epsilon: f64,
    pub intra_sigma: f64,
}

impl VdwParams {
    pub fn inter(&self) -> LjParams {
        LjParams::new(self.inter_sigma, self.inter_epsilon)
    }

    pub fn intra(&self) -> LjParams {
        LjParams::new(self.intra_sigma, self.intra_epsilon)
    }

    fn first_negative_field(&self) -> Option<&'static str> {
        [
            ("inter_epsilon", self.inter_epsilon),
            ("inter_sigma", self.inter_sigma),
            ("intra_epsilon", self.intra_epsilon),
            ("intra_sigma", self.intra_sigma),
        ]
        .into_iter()
        .find(|(_, value)| *value < 0.0 || value.is_nan())
        .map(|(name, _)| name)
    }
}

/// Per-atom force field assignment: the vdW type name and the partial charge.
#[derive(Debug, Clone, PartialEq)]
pub struct AtomParams {
    pub atom_type: String,
    pub charge: f64,
}

#[derive(Debug, Deserialize)]
struct VdwFile {
    vdw: HashMap<String, VdwParams>,
}

#[derive(Debug, Deserialize)]
struct ChargeRecord {
    residue: String,
    atom: String,
    #[serde(rename = "type")]
    atom_type: String,
    charge: f64,
}

/// Per-residue atom tables: residue name, then atom name.
type AtomTable = HashMap<String, HashMap<String, AtomParams>>;

/// Read-only charge and van der Waals lookup keyed by residue and atom name.
///
/// Built once per process and shared by reference; nothing in the feature engine
/// mutates it.
#[derive(Debug, Clone, Default)]
pub struct Forcefield {
    vdw_types: HashMap<String, VdwParams>,
    atoms: AtomTable,
}

#[derive(Debug, Error)]
pub enum ParamLoadError {
    #[error("File I/O error for '{path}': {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },
    #[error("CSV parsing error for '{path}': {source}")]
    Csv { path: String, source: csv::Error },
    #[error("TOML parsing error for '{path}': {source}")]
    Toml {
        path: String,
        source: toml::de::Error,
    },
    #[error("Invalid parameter in '{path}': '{field}' of type '{atom_type}' must be non-negative")]
    InvalidParameter {
        path: String,
        atom_type: String,
        field: &'static str,
    },
}

impl Forcefield {
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads the vdW type table (TOML) and the per-atom charge/type table (CSV).
    pub fn load(vdw_path: &Path, charge_path: &Path) -> Result<Self, ParamLoadError> {
        let vdw_types = Self::load_vdw_toml(vdw_path)?;
        let atoms = Self::load_charge_csv(charge_path)?;

        Ok(Self { vdw_types, atoms })
    }

    /// Registers (or replaces) a vdW atom type.
    pub fn insert_vdw_type(&mut self, atom_type: &str, params: VdwParams) {
        self.vdw_types.insert(atom_type.to_string(), params);
    }

    /// Registers (or replaces) the type and charge of an atom of a residue.
    pub fn insert_atom(&mut self, residue_name: &str, atom_name: &str, atom_type: &str, charge: f64) {
        self.atoms.entry(residue_name.to_string()).or_default().insert(
            atom_name.to_string(),
            AtomParams {
                atom_type: atom_type.to_string(),
                charge,
            },
        );
    }

    pub fn atom_params(&self, residue_name: &str, atom_name: &str) -> Option<&AtomParams> {
        self.atoms.get(residue_name)?.get(atom_name)
    }

    pub fn vdw_type(&self, atom_type: &str) -> Option<&VdwParams> {
        self.vdw_types.get(atom_type)
    }

    /// Partial charge of an atom; 0.0 (with a warning) when the atom is not in the table.
    pub fn charge(&self, residue_name: &str, atom_name: &str) -> f64 {
        match self.atom_params(residue_name, atom_name) {
            Some(params) => params.charge,
            None => {
                warn!(
                    residue = residue_name,
                    atom = atom_name,
                    "No charge in force field; using 0.0."
                );
                0.0
            }
        }
    }

    /// Van der Waals parameters of an atom; all zero (with a warning) when the atom or
    /// its type is not in the table, so the atom contributes no vdW energy.
    pub fn vdw(&self, residue_name: &str, atom_name: &str) -> VdwParams {
        let Some(atom) = self.atom_params(residue_name, atom_name) else {
            warn!(
                residue = residue_name,
                atom = atom_name,
                "No vdW type in force field; using zero parameters."
            );
            return VdwParams::default();
        };
        match self.vdw_type(&atom.atom_type) {
            Some(params) => *params,
            None => {
                warn!(
                    atom_type = atom.atom_type.as_str(),
                    "Unknown vdW type in force field; using zero parameters."
                );
                VdwParams::default()
            }
        }
    }

    fn load_vdw_toml(path: &Path) -> Result<HashMap<String, VdwParams>, ParamLoadError> {
        let content = std::fs::read_to_string(path).map_err(|e| ParamLoadError::Io {
            path: path.to_string_lossy().to_string(),
            source: e,
        })?;
        let file: VdwFile = toml::from_str(&content).map_err(|e| ParamLoadError::Toml {
            path: path.to_string_lossy().to_string(),
            source: e,
        })?;

        for (atom_type, params) in &file.vdw {
            if let Some(field) = params.first_negative_field() {
                return Err(ParamLoadError::InvalidParameter {
                    path: path.to_string_lossy().to_string(),
                    atom_type: atom_type.clone(),
                    field,
                });
            }
        }
        Ok(file.vdw)
    }

    fn load_charge_csv(path: &Path) -> Result<AtomTable, ParamLoadError> {
        let mut reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_path(path)
            .map_err(|e| ParamLoadError::Csv {
                path: path.to_string_lossy().to_string(),
                source: e,
            })?;

        let mut atoms = AtomTable::new();
        for result in reader.deserialize::<ChargeRecord>() {
            let record = result.map_err(|e| ParamLoadError::Csv {
                path: path.to_string_lossy().to_string(),
                source: e,
            })?;
            atoms.entry(record.residue).or_default().insert(
                record.atom,
                AtomParams {
                    atom_type: record.atom_type,
                    charge: record.charge,
                },
            );
        }
        Ok(atoms)
    }
}
