use super::atom::Atom;
use super::chain::Chain;
use super::conservation::Conservation;
use super::ids::{AtomId, ChainId, ResidueId};
use super::residue::Residue;
use slotmap::SlotMap;
use std::collections::HashMap;

/// A protein structure: atoms grouped into residues grouped into chains.
///
/// The system owns every atom, residue and chain and hands out stable ids. It is
/// built once upstream of featurization and only read afterwards.
#[derive(Debug, Clone, Default)]
pub struct MolecularSystem {
    atoms: SlotMap<AtomId, Atom>,
    residues: SlotMap<ResidueId, Residue>,
    chains: SlotMap<ChainId, Chain>,
    /// `(chain, residue number, insertion code)` to residue.
    residue_id_map: HashMap<(ChainId, isize, Option<char>), ResidueId>,
    /// PDB chain letter to chain.
    chain_id_map: HashMap<char, ChainId>,
}

impl MolecularSystem {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn atom(&self, id: AtomId) -> Option<&Atom> {
        self.atoms.get(id)
    }

    /// Atoms in slot order, which is insertion order unless atoms were removed.
    pub fn atoms_iter(&self) -> impl Iterator<Item = (AtomId, &Atom)> {
        self.atoms.iter()
    }

    pub fn atom_count(&self) -> usize {
        self.atoms.len()
    }

    pub fn residue(&self, id: ResidueId) -> Option<&Residue> {
        self.residues.get(id)
    }

    pub fn residues_iter(&self) -> impl Iterator<Item = (ResidueId, &Residue)> {
        self.residues.iter()
    }

    pub fn chain(&self, id: ChainId) -> Option<&Chain> {
        self.chains.get(id)
    }

    pub fn chains_iter(&self) -> impl Iterator<Item = (ChainId, &Chain)> {
        self.chains.iter()
    }

    /// Looks a chain up by its PDB chain letter.
    pub fn find_chain_by_id(&self, id: char) -> Option<ChainId> {
        self.chain_id_map.get(&id).copied()
    }

    /// Looks a residue up by its PDB address.
    pub fn find_residue_by_id(
        &self,
        chain_id: ChainId,
        residue_number: isize,
        insertion_code: Option<char>,
    ) -> Option<ResidueId> {
        self.residue_id_map
            .get(&(chain_id, residue_number, insertion_code))
            .copied()
    }

    /// Returns the chain with letter `id`, creating it on first use.
    pub fn add_chain(&mut self, id: char) -> ChainId {
        *self
            .chain_id_map
            .entry(id)
            .or_insert_with(|| self.chains.insert(Chain::new(id)))
    }

    /// Returns the residue at `(chain_id, residue_number, insertion_code)`, creating it on
    /// first use. `None` if the chain does not exist.
    pub fn add_residue(
        &mut self,
        chain_id: ChainId,
        residue_number: isize,
        insertion_code: Option<char>,
        name: &str,
    ) -> Option<ResidueId> {
        let chain = self.chains.get_mut(chain_id)?;
        let key = (chain_id, residue_number, insertion_code);

        let residue_id = *self.residue_id_map.entry(key).or_insert_with(|| {
            let residue = Residue::new(residue_number, insertion_code, name, chain_id);
            self.residues.insert(residue)
        });

        if !chain.residues.contains(&residue_id) {
            chain.residues.push(residue_id);
        }

        Some(residue_id)
    }

    /// Attaches a conservation profile to a residue, replacing any previous one.
    /// `None` if the residue does not exist.
    pub fn set_conservation(
        &mut self,
        residue_id: ResidueId,
        conservation: Conservation,
    ) -> Option<()> {
        self.residues.get_mut(residue_id)?.conservation = Some(conservation);
        Some(())
    }

    /// Stores `atom` under `residue_id`, overwriting `atom.residue_id` so the two agree.
    /// `None` if the residue does not exist.
    pub fn add_atom_to_residue(&mut self, residue_id: ResidueId, mut atom: Atom) -> Option<AtomId> {
        if !self.residues.contains_key(residue_id) {
            return None;
        }

        atom.residue_id = residue_id;
        let name = atom.name.clone();
        let atom_id = self.atoms.insert(atom);

        self.residues.get_mut(residue_id)?.add_atom(&name, atom_id);

        Some(atom_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::Point3;

    #[test]
    fn add_chain_is_idempotent() {
        let mut system = MolecularSystem::new();
        let first = system.add_chain('A');
        let second = system.add_chain('A');
        assert_eq!(first, second);
        assert_eq!(system.chains_iter().count(), 1);
        assert_eq!(system.find_chain_by_id('A'), Some(first));
    }

    #[test]
    fn add_residue_is_idempotent_and_registers_with_chain() {
        let mut system = MolecularSystem::new();
        let chain_id = system.add_chain('A');
        let r1 = system.add_residue(chain_id, 7, None, "SER").unwrap();
        let r2 = system.add_residue(chain_id, 7, None, "SER").unwrap();
        assert_eq!(r1, r2);
        assert_eq!(system.chain(chain_id).unwrap().residues(), &[r1]);
        assert_eq!(system.find_residue_by_id(chain_id, 7, None), Some(r1));
    }

    #[test]
    fn insertion_code_distinguishes_residues_with_same_number() {
        let mut system = MolecularSystem::new();
        let chain_id = system.add_chain('A');
        let plain = system.add_residue(chain_id, 52, None, "GLY").unwrap();
        let inserted = system.add_residue(chain_id, 52, Some('A'), "ALA").unwrap();
        assert_ne!(plain, inserted);
    }

    #[test]
    fn add_residue_fails_for_unknown_chain() {
        let mut system = MolecularSystem::new();
        assert!(
            system
                .add_residue(ChainId::default(), 1, None, "ALA")
                .is_none()
        );
    }

    #[test]
    fn add_atom_to_residue_links_atom_and_residue() {
        let mut system = MolecularSystem::new();
        let chain_id = system.add_chain('B');
        let residue_id = system.add_residue(chain_id, 1, None, "ALA").unwrap();
        let atom = Atom::new("CA", ResidueId::default(), Point3::new(1.0, 0.0, 0.0));
        let atom_id = system.add_atom_to_residue(residue_id, atom).unwrap();

        assert_eq!(system.atom(atom_id).unwrap().residue_id, residue_id);
        assert_eq!(system.residue(residue_id).unwrap().atoms(), &[atom_id]);
        assert_eq!(system.residue(residue_id).unwrap().chain_id, chain_id);
        assert_eq!(system.atom_count(), 1);
    }

    #[test]
    fn set_conservation_attaches_profile_to_existing_residue() {
        let mut system = MolecularSystem::new();
        let chain_id = system.add_chain('A');
        let residue_id = system.add_residue(chain_id, 3, None, "LEU").unwrap();
        let profile = Conservation::new([0.05; 20], 1.2);

        assert_eq!(system.set_conservation(residue_id, profile), Some(()));
        assert_eq!(system.residue(residue_id).unwrap().conservation, Some(profile));
        assert!(
            system
                .set_conservation(ResidueId::default(), profile)
                .is_none()
        );
    }

    #[test]
    fn add_atom_to_residue_fails_for_unknown_residue() {
        let mut system = MolecularSystem::new();
        let atom = Atom::new("CA", ResidueId::default(), Point3::origin());
        assert!(
            system
                .add_atom_to_residue(ResidueId::default(), atom)
                .is_none()
        );
    }
}
