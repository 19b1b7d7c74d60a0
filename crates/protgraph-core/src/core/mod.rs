//! # Core Module
//!
//! Stateless building blocks shared by the feature engine.
//!
//! - **Molecular Representation** ([`models`]) - Atoms, residues, chains, and systems
//! - **Force Field** ([`forcefield`]) - Charge and Lennard-Jones parameter tables and pair potentials
//! - **Contact Graphs** ([`graph`]) - Atom-level and residue-level contact graphs with feature maps
//! - **Lookup Helpers** ([`utils`]) - Compile-time tables for residue codes and element names

pub mod forcefield;
pub mod graph;
pub mod models;
pub mod utils;
