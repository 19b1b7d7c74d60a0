//! # Engine Module
//!
//! The pairwise feature-computation engine. For one graph it registers every atom the
//! edges touch, builds the all-pairs distance matrix, derives the bonded-adjacency
//! closure from it, evaluates electrostatic and van der Waals energies over all pairs,
//! and writes the per-edge features by indexing into those matrices.
//!
//! ## Architecture
//!
//! - **Configuration** ([`config`]) - Covalent cutoff, hop limit, permittivity, residue variants
//! - **Error Handling** ([`error`]) - The feature engine's error taxonomy
//! - **Atom Registry** ([`registry`]) - Dense indices for the atoms referenced by edges
//! - **Matrices** ([`matrix`], [`adjacency`], [`energy`]) - Distance, bonded-adjacency and energy matrices
//! - **Tasks** ([`tasks`]) - Node and edge feature writers
//!
//! All matrices are transient: they live for one featurization call and are dropped
//! once the features are written. With the `parallel` feature enabled, matrix rows are
//! filled on the rayon thread pool; results do not change.

pub mod adjacency;
pub mod config;
pub mod energy;
pub mod error;
pub mod matrix;
pub mod registry;
pub mod tasks;
