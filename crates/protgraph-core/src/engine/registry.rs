use super::error::{ContactKindError, FeatureError};
use crate::core::forcefield::params::{Forcefield, VdwParams};
use crate::core::graph::contact::{Contact, ContactKind};
use crate::core::models::atom::Atom;
use crate::core::models::ids::{AtomId, ChainId, ResidueId};
use crate::core::models::residue::Residue;
use crate::core::models::system::MolecularSystem;
use nalgebra::Point3;
use std::collections::HashMap;

/// An atom admitted to the registry, together with its owning residue.
#[derive(Debug, Clone, Copy)]
pub struct RegisteredAtom<'a> {
    pub atom: &'a Atom,
    pub residue: &'a Residue,
}

/// Dense, injective indexing `[0, N)` of the distinct atoms referenced by a set of
/// contacts. Indices follow first appearance; they are only meaningful within one call.
#[derive(Debug, Default)]
pub struct AtomRegistry<'a> {
    entries: Vec<RegisteredAtom<'a>>,
    index: HashMap<AtomId, usize>,
}

impl<'a> AtomRegistry<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the index of `atom_id`, registering it first if it is new.
    pub fn register(
        &mut self,
        system: &'a MolecularSystem,
        atom_id: AtomId,
    ) -> Result<usize, FeatureError> {
        if let Some(i) = self.index_of(atom_id) {
            return Ok(i);
        }

        let atom = system
            .atom(atom_id)
            .ok_or(FeatureError::AtomNotFound(atom_id))?;
        let residue = system
            .residue(atom.residue_id)
            .ok_or(FeatureError::ResidueNotFound(atom.residue_id))?;

        let i = self.entries.len();
        self.entries.push(RegisteredAtom { atom, residue });
        self.index.insert(atom_id, i);
        Ok(i)
    }

    pub fn index_of(&self, atom_id: AtomId) -> Option<usize> {
        self.index.get(&atom_id).copied()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn positions(&self) -> Vec<Point3<f64>> {
        self.entries.iter().map(|e| e.atom.position).collect()
    }

    pub fn charges(&self, forcefield: &Forcefield) -> Vec<f64> {
        self.entries
            .iter()
            .map(|e| forcefield.charge(&e.residue.name, &e.atom.name))
            .collect()
    }

    pub fn vdw_params(&self, forcefield: &Forcefield) -> Vec<VdwParams> {
        self.entries
            .iter()
            .map(|e| forcefield.vdw(&e.residue.name, &e.atom.name))
            .collect()
    }
}

/// A contact expressed in registry indices.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResolvedContact {
    AtomPair {
        i: usize,
        j: usize,
        same_residue: bool,
        same_chain: bool,
    },
    ResiduePair {
        atoms1: Vec<usize>,
        atoms2: Vec<usize>,
        same_chain: bool,
    },
}

/// The registry of one graph plus its contacts, in input order.
#[derive(Debug)]
pub struct ContactIndex<'a> {
    pub kind: ContactKind,
    pub registry: AtomRegistry<'a>,
    pub contacts: Vec<ResolvedContact>,
}

/// The single contact kind shared by every contact, decided by the first one.
pub fn dispatch_kind(contacts: &[Contact]) -> Result<ContactKind, ContactKindError> {
    let expected = contacts.first().ok_or(ContactKindError::Empty)?.kind();
    match contacts.iter().position(|c| c.kind() != expected) {
        Some(index) => Err(ContactKindError::Mixed {
            index,
            expected,
            found: contacts[index].kind(),
        }),
        None => Ok(expected),
    }
}

/// Validates `contacts` and registers every atom they reference.
///
/// Fails on an empty or mixed-kind contact list, on self-contacts, on ids missing from
/// `system`, and on residues without atoms.
pub fn resolve_contacts<'a>(
    system: &'a MolecularSystem,
    contacts: &[Contact],
) -> Result<ContactIndex<'a>, FeatureError> {
    let kind = dispatch_kind(contacts)?;
    if let Some(index) = contacts.iter().position(Contact::is_self_contact) {
        return Err(FeatureError::SelfContact { index });
    }

    let mut registry = AtomRegistry::new();
    let resolved = contacts
        .iter()
        .map(|contact| match *contact {
            Contact::AtomPair { atom1, atom2 } => {
                let i = registry.register(system, atom1)?;
                let j = registry.register(system, atom2)?;
                let (a, b) = (registry.entries[i], registry.entries[j]);
                Ok(ResolvedContact::AtomPair {
                    i,
                    j,
                    same_residue: a.atom.residue_id == b.atom.residue_id,
                    same_chain: a.residue.chain_id == b.residue.chain_id,
                })
            }
            Contact::ResiduePair { residue1, residue2 } => {
                let (atoms1, chain1) = register_residue(&mut registry, system, residue1)?;
                let (atoms2, chain2) = register_residue(&mut registry, system, residue2)?;
                Ok(ResolvedContact::ResiduePair {
                    atoms1,
                    atoms2,
                    same_chain: chain1 == chain2,
                })
            }
        })
        .collect::<Result<Vec<_>, FeatureError>>()?;

    Ok(ContactIndex {
        kind,
        registry,
        contacts: resolved,
    })
}

fn register_residue<'a>(
    registry: &mut AtomRegistry<'a>,
    system: &'a MolecularSystem,
    residue_id: ResidueId,
) -> Result<(Vec<usize>, ChainId), FeatureError> {
    let residue = system
        .residue(residue_id)
        .ok_or(FeatureError::ResidueNotFound(residue_id))?;
    if residue.atoms().is_empty() {
        return Err(FeatureError::EmptyResidue(residue_id));
    }
    let indices = residue
        .atoms()
        .iter()
        .map(|&atom_id| registry.register(system, atom_id))
        .collect::<Result<Vec<_>, _>>()?;
    Ok((indices, residue.chain_id))
}
