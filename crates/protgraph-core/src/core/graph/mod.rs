//! # Contact Graph Module
//!
//! Graph representations of a protein structure. Nodes are atoms or residues, edges are
//! spatial contacts between two atoms or two residues. Every node and edge carries a
//! named [`features::Features`] map that the feature engine fills in.
//!
//! Edges only identify their endpoints ([`contact::Contact`]); all structural data stays
//! in the [`MolecularSystem`].

pub mod contact;
pub mod features;

use self::contact::Contact;
use self::features::Features;
use crate::core::models::ids::{AtomId, ResidueId};
use crate::core::models::system::MolecularSystem;
use kiddo::{KdTree, SquaredEuclidean};
use std::collections::{BTreeSet, HashSet};
use thiserror::Error;
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeId {
    Atom(AtomId),
    Residue(ResidueId),
}

#[derive(Debug, Clone, PartialEq)]
pub struct Node {
    pub id: NodeId,
    pub features: Features,
}

impl Node {
    pub fn new(id: NodeId) -> Self {
        Self {
            id,
            features: Features::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Edge {
    pub id: Contact,
    pub features: Features,
}

impl Edge {
    pub fn new(id: Contact) -> Self {
        Self {
            id,
            features: Features::new(),
        }
    }
}

#[derive(Debug, Error, PartialEq)]
pub enum GraphBuildError {
    #[error("Atom with ID {0:?} not found in the system")]
    AtomNotFound(AtomId),
    #[error("Residue with ID {0:?} not found in the system")]
    ResidueNotFound(ResidueId),
    #[error("Contact cutoff must be a positive distance, got {0}")]
    InvalidCutoff(f64),
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Graph {
    pub nodes: Vec<Node>,
    pub edges: Vec<Edge>,
}

impl Graph {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_node(&mut self, id: NodeId) {
        self.nodes.push(Node::new(id));
    }

    pub fn add_edge(&mut self, contact: Contact) {
        self.edges.push(Edge::new(contact));
    }

    /// Builds an atom-level graph: one node per distinct atom, one edge per unordered
    /// pair of distinct atoms closer than `cutoff` Angstroms.
    pub fn build_atomic(
        system: &MolecularSystem,
        atoms: &[AtomId],
        cutoff: f64,
    ) -> Result<Self, GraphBuildError> {
        validate_cutoff(cutoff)?;

        let atoms = dedup_preserving_order(atoms);
        let positions = atoms
            .iter()
            .map(|&id| {
                system
                    .atom(id)
                    .map(|atom| [atom.position.x, atom.position.y, atom.position.z])
                    .ok_or(GraphBuildError::AtomNotFound(id))
            })
            .collect::<Result<Vec<_>, _>>()?;

        let mut graph = Graph::new();
        for &atom_id in &atoms {
            graph.add_node(NodeId::Atom(atom_id));
        }
        for (i, j) in pairs_within(&positions, cutoff) {
            graph.add_edge(Contact::atoms(atoms[i], atoms[j]));
        }

        debug!(
            nodes = graph.nodes.len(),
            edges = graph.edges.len(),
            cutoff,
            "Built atomic contact graph."
        );
        Ok(graph)
    }

    /// Builds a residue-level graph: one node per distinct residue, one edge per unordered
    /// pair of distinct residues having at least one atom pair closer than `cutoff`.
    pub fn build_residue(
        system: &MolecularSystem,
        residues: &[ResidueId],
        cutoff: f64,
    ) -> Result<Self, GraphBuildError> {
        validate_cutoff(cutoff)?;

        let residues = dedup_preserving_order(residues);
        let mut positions = Vec::new();
        let mut owners = Vec::new();
        for (residue_index, &residue_id) in residues.iter().enumerate() {
            let residue = system
                .residue(residue_id)
                .ok_or(GraphBuildError::ResidueNotFound(residue_id))?;
            for &atom_id in residue.atoms() {
                let atom = system
                    .atom(atom_id)
                    .ok_or(GraphBuildError::AtomNotFound(atom_id))?;
                positions.push([atom.position.x, atom.position.y, atom.position.z]);
                owners.push(residue_index);
            }
        }

        let residue_pairs: BTreeSet<(usize, usize)> = pairs_within(&positions, cutoff)
            .into_iter()
            .map(|(i, j)| (owners[i], owners[j]))
            .filter(|(a, b)| a != b)
            .map(|(a, b)| (a.min(b), a.max(b)))
            .collect();

        let mut graph = Graph::new();
        for &residue_id in &residues {
            graph.add_node(NodeId::Residue(residue_id));
        }
        for (a, b) in residue_pairs {
            graph.add_edge(Contact::residues(residues[a], residues[b]));
        }

        debug!(
            nodes = graph.nodes.len(),
            edges = graph.edges.len(),
            cutoff,
            "Built residue contact graph."
        );
        Ok(graph)
    }
}

fn validate_cutoff(cutoff: f64) -> Result<(), GraphBuildError> {
    if cutoff > 0.0 && cutoff.is_finite() {
        Ok(())
    } else {
        Err(GraphBuildError::InvalidCutoff(cutoff))
    }
}

fn dedup_preserving_order<T: Copy + Eq + std::hash::Hash>(items: &[T]) -> Vec<T> {
    let mut seen = HashSet::with_capacity(items.len());
    items.iter().copied().filter(|x| seen.insert(*x)).collect()
}

/// Index pairs `(i, j)` with `i < j` whose points lie strictly closer than `cutoff`,
/// in ascending order.
fn pairs_within(positions: &[[f64; 3]], cutoff: f64) -> Vec<(usize, usize)> {
    if positions.len() < 2 {
        return Vec::new();
    }

    let mut kdtree: KdTree<f64, 3> = KdTree::with_capacity(positions.len());
    for (i, position) in positions.iter().enumerate() {
        kdtree.add(position, i as u64);
    }
    let cutoff_sq = cutoff * cutoff;

    let mut pairs = Vec::new();
    for (i, query) in positions.iter().enumerate() {
        let mut neighbours: Vec<usize> = kdtree
            .within_unsorted::<SquaredEuclidean>(query, cutoff_sq)
            .into_iter()
            .map(|neighbour| neighbour.item as usize)
            .filter(|&j| j > i && squared_distance(query, &positions[j]) < cutoff_sq)
            .collect();
        neighbours.sort_unstable();
        pairs.extend(neighbours.into_iter().map(|j| (i, j)));
    }
    pairs
}

#[inline]
fn squared_distance(a: &[f64; 3], b: &[f64; 3]) -> f64 {
    let dx = a[0] - b[0];
    let dy = a[1] - b[1];
    let dz = a[2] - b[2];
    dx * dx + dy * dy + dz * dz
}
