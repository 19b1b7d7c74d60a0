//! # Core Models Module
//!
//! Data structures describing a protein structure: atoms, residues, chains and the
//! [`system::MolecularSystem`] that owns them. Atoms are immutable inputs to the
//! feature engine; identity is carried by the generational ids in [`ids`], never by
//! atom values.
//!
//! ```ignore
//! use protgraph::core::models::{system::MolecularSystem, atom::Atom};
//!
//! let mut system = MolecularSystem::new();
//! let chain_id = system.add_chain('A');
//! let residue_id = system.add_residue(chain_id, 1, None, "ALA")?;
//! system.add_atom_to_residue(residue_id, Atom::new("CA", residue_id, Point3::origin()))?;
//! ```

pub mod amino_acid;
pub mod atom;
pub mod chain;
pub mod conservation;
pub mod ids;
pub mod residue;
pub mod system;
