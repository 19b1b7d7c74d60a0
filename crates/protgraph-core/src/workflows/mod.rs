//! # Workflows Module
//!
//! High-level entry points that tie the [`core`](crate::core) data model and the
//! [`engine`](crate::engine) feature writers together.
//!
//! - **Featurization** ([`featurize`](mod@featurize)) - Fills every node and edge of a
//!   contact graph with its structural, physico-chemical and energy features.

pub mod featurize;

pub use featurize::run as featurize;
