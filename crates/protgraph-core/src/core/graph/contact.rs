use crate::core::models::ids::{AtomId, ResidueId};
use std::fmt;

/// Identity of a contact edge: two atoms, or two residues that each expand to their atoms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Contact {
    AtomPair { atom1: AtomId, atom2: AtomId },
    ResiduePair { residue1: ResidueId, residue2: ResidueId },
}

/// Discriminant of [`Contact`]; a graph's edges all share one kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContactKind {
    AtomPair,
    ResiduePair,
}

impl Contact {
    pub fn atoms(atom1: AtomId, atom2: AtomId) -> Self {
        Contact::AtomPair { atom1, atom2 }
    }

    pub fn residues(residue1: ResidueId, residue2: ResidueId) -> Self {
        Contact::ResiduePair { residue1, residue2 }
    }

    pub fn kind(&self) -> ContactKind {
        match self {
            Contact::AtomPair { .. } => ContactKind::AtomPair,
            Contact::ResiduePair { .. } => ContactKind::ResiduePair,
        }
    }

    /// True when both ends of the contact are the same atom or the same residue.
    pub fn is_self_contact(&self) -> bool {
        match *self {
            Contact::AtomPair { atom1, atom2 } => atom1 == atom2,
            Contact::ResiduePair { residue1, residue2 } => residue1 == residue2,
        }
    }
}

impl fmt::Display for ContactKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}",
            match self {
                ContactKind::AtomPair => "atom-pair",
                ContactKind::ResiduePair => "residue-pair",
            }
        )
    }
}
