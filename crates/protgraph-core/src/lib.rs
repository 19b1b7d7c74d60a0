//! # Protgraph Core Library
//!
//! Builds graph representations of protein structures and decorates them with
//! physico-chemical features for downstream graph neural networks.
//!
//! ## Architectural Philosophy
//!
//! The library follows a three-layer layout:
//!
//! - **[`core`]: The Foundation.** Stateless data models (`MolecularSystem`, `Graph`),
//!   the read-only force field table, and the pure pair potentials.
//!
//! - **[`engine`]: The Feature Engine.** The pairwise computation core: atom registry,
//!   distance matrix, bonded-adjacency closure, electrostatic and van der Waals energy
//!   matrices, and the tasks that write node and edge features.
//!
//! - **[`workflows`]: The Public API.** Runs complete featurization of one graph.

pub mod core;
pub mod engine;
pub mod workflows;
