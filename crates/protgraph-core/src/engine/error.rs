use crate::core::graph::contact::ContactKind;
use crate::core::models::ids::{AtomId, ResidueId};
use thiserror::Error;

/// Why a graph's edge collection cannot be dispatched to a single contact kind.
#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum ContactKindError {
    #[error("the graph has no contact edges")]
    Empty,
    #[error("edge {index} is a {found} contact in a graph of {expected} contacts")]
    Mixed {
        index: usize,
        expected: ContactKind,
        found: ContactKind,
    },
}

/// Errors raised while featurizing a graph. Every variant is detected before any
/// feature is written, so a failed call leaves the graph untouched.
#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum FeatureError {
    #[error("Unsupported contact kind: {0}")]
    UnsupportedContactKind(#[from] ContactKindError),

    #[error("Atom with ID {0:?} not found in the system")]
    AtomNotFound(AtomId),

    #[error("Residue with ID {0:?} not found in the system")]
    ResidueNotFound(ResidueId),

    #[error("Residue with ID {0:?} has no atoms")]
    EmptyResidue(ResidueId),

    #[error("Edge {index} connects an entity with itself")]
    SelfContact { index: usize },
}
