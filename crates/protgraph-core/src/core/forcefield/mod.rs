//! # Force Field Module
//!
//! Read-only physical parameters and the pair potentials evaluated by the feature engine.
//!
//! ## Overview
//!
//! - **Electrostatics** using Coulomb's law in vacuum (no dielectric screening, no cutoff)
//! - **Van der Waals interactions** using the 12-6 Lennard-Jones potential with
//!   Lorentz-Berthelot combination rules
//! - **Two van der Waals parameter sets per atom**: "inter" for non-bonded pairs and
//!   "intra" for pairs linked through a short chain of covalent bonds
//!
//! ## Key Components
//!
//! - [`params`] - The [`params::Forcefield`] lookup table and its file loaders
//! - [`potentials`] - Pure pair potential functions and combination rules
//! - [`term`] - Energy term aggregation
//!
//! The force field is loaded once and shared by reference with every featurization call:
//!
//! ```ignore
//! use protgraph::core::forcefield::params::Forcefield;
//!
//! let forcefield = Forcefield::load(Path::new("vdw.toml"), Path::new("charges.csv"))?;
//! let charge = forcefield.charge("LYS", "NZ");
//! ```

pub mod params;
pub mod potentials;
pub mod term;
