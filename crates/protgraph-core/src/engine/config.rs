use crate::core::models::amino_acid::AminoAcid;
use crate::core::models::ids::ResidueId;
use serde::Deserialize;
use std::path::Path;
use thiserror::Error;

/// Distance below which two atoms are considered directly covalently bonded, in Angstroms.
pub const DEFAULT_COVALENT_CUTOFF: f64 = 2.1;
/// Covalent-bond hops within which the "intra" van der Waals parameters apply.
pub const DEFAULT_MAX_INTRA_HOPS: usize = 3;
/// Vacuum permittivity; no dielectric screening.
pub const DEFAULT_EPSILON0: f64 = 1.0;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid value for '{name}': {reason}")]
    InvalidParameter { name: &'static str, reason: String },
    #[error("File I/O error for '{path}': {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },
    #[error("TOML parsing error for '{path}': {source}")]
    Toml {
        path: String,
        source: toml::de::Error,
    },
}

/// Parameters of the pairwise contact feature engine.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ContactConfig {
    /// Hop limit of the bonded-adjacency closure; 1 means directly bonded pairs only.
    pub max_intra_hops: usize,
    /// Distance below which a pair counts as one covalent bond, in Angstroms.
    pub covalent_cutoff: f64,
    /// Permittivity used in Coulomb's law.
    pub epsilon0: f64,
}

impl Default for ContactConfig {
    fn default() -> Self {
        Self {
            max_intra_hops: DEFAULT_MAX_INTRA_HOPS,
            covalent_cutoff: DEFAULT_COVALENT_CUTOFF,
            epsilon0: DEFAULT_EPSILON0,
        }
    }
}

impl ContactConfig {
    pub fn builder() -> ContactConfigBuilder {
        ContactConfigBuilder::new()
    }

    /// Loads a config from a TOML file; absent keys keep their defaults.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_string_lossy().to_string(),
            source: e,
        })?;
        let config: ContactConfig = toml::from_str(&content).map_err(|e| ConfigError::Toml {
            path: path.to_string_lossy().to_string(),
            source: e,
        })?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_intra_hops == 0 {
            return Err(ConfigError::InvalidParameter {
                name: "max_intra_hops",
                reason: "must be at least 1".to_string(),
            });
        }
        if !(self.covalent_cutoff > 0.0 && self.covalent_cutoff.is_finite()) {
            return Err(ConfigError::InvalidParameter {
                name: "covalent_cutoff",
                reason: format!("must be a positive distance, got {}", self.covalent_cutoff),
            });
        }
        if !(self.epsilon0 > 0.0 && self.epsilon0.is_finite()) {
            return Err(ConfigError::InvalidParameter {
                name: "epsilon0",
                reason: format!("must be positive, got {}", self.epsilon0),
            });
        }
        Ok(())
    }
}

#[derive(Default)]
pub struct ContactConfigBuilder {
    max_intra_hops: Option<usize>,
    covalent_cutoff: Option<f64>,
    epsilon0: Option<f64>,
}

impl ContactConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn max_intra_hops(mut self, hops: usize) -> Self {
        self.max_intra_hops = Some(hops);
        self
    }
    pub fn covalent_cutoff(mut self, cutoff: f64) -> Self {
        self.covalent_cutoff = Some(cutoff);
        self
    }
    pub fn epsilon0(mut self, epsilon0: f64) -> Self {
        self.epsilon0 = Some(epsilon0);
        self
    }

    pub fn build(self) -> Result<ContactConfig, ConfigError> {
        let defaults = ContactConfig::default();
        let config = ContactConfig {
            max_intra_hops: self.max_intra_hops.unwrap_or(defaults.max_intra_hops),
            covalent_cutoff: self.covalent_cutoff.unwrap_or(defaults.covalent_cutoff),
            epsilon0: self.epsilon0.unwrap_or(defaults.epsilon0),
        };
        config.validate()?;
        Ok(config)
    }
}

/// A single point mutation: `residue` is mutated from `wildtype` to `variant`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResidueVariant {
    pub residue: ResidueId,
    pub wildtype: AminoAcid,
    pub variant: AminoAcid,
}
