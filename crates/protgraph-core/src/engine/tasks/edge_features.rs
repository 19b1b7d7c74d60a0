use crate::core::forcefield::params::Forcefield;
use crate::core::forcefield::term::EnergyTerm;
use crate::core::graph::Edge;
use crate::core::graph::contact::Contact;
use crate::core::graph::features::{Features, edge};
use crate::core::models::system::MolecularSystem;
use crate::engine::config::ContactConfig;
use crate::engine::energy::PairwiseMatrices;
use crate::engine::error::FeatureError;
use crate::engine::registry::{ResolvedContact, resolve_contacts};
use itertools::Itertools;
use tracing::{debug, instrument};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Writes the distance, covalent, chain/residue membership and energy features onto
/// every edge. On error no edge is modified.
#[instrument(skip_all, name = "edge_features_task")]
pub fn run(
    system: &MolecularSystem,
    forcefield: &Forcefield,
    config: &ContactConfig,
    edges: &mut [Edge],
) -> Result<(), FeatureError> {
    let computed = compute(system, forcefield, config, edges)?;
    for (edge, features) in edges.iter_mut().zip(computed) {
        edge.features.merge(features);
    }
    Ok(())
}

/// Computes one feature set per edge, in edge order, without touching the edges.
pub(crate) fn compute(
    system: &MolecularSystem,
    forcefield: &Forcefield,
    config: &ContactConfig,
    edges: &[Edge],
) -> Result<Vec<Features>, FeatureError> {
    let contacts: Vec<Contact> = edges.iter().map(|edge| edge.id).collect();
    let index = resolve_contacts(system, &contacts)?;

    let matrices = PairwiseMatrices::compute(
        &index.registry.positions(),
        &index.registry.charges(forcefield),
        &index.registry.vdw_params(forcefield),
        config,
    );
    debug!(
        kind = %index.kind,
        edges = edges.len(),
        atoms = matrices.len(),
        "Computed pairwise matrices."
    );

    #[cfg(not(feature = "parallel"))]
    let iterator = index.contacts.iter();

    #[cfg(feature = "parallel")]
    let iterator = index.contacts.par_iter();

    Ok(iterator
        .map(|contact| contact_features(contact, &matrices, config.covalent_cutoff))
        .collect())
}

fn contact_features(
    contact: &ResolvedContact,
    matrices: &PairwiseMatrices,
    covalent_cutoff: f64,
) -> Features {
    let mut features = Features::new();
    match contact {
        &ResolvedContact::AtomPair {
            i,
            j,
            same_residue,
            same_chain,
        } => {
            let distance = matrices.distances[(i, j)];
            features.insert(edge::SAME_RESIDUE, same_residue);
            features.insert(edge::SAME_CHAIN, same_chain);
            features.insert(edge::DISTANCE, distance);
            features.insert(edge::COVALENT, distance < covalent_cutoff);
            features.insert(edge::ELECTROSTATIC, matrices.electrostatic[(i, j)]);
            features.insert(edge::VANDERWAALS, matrices.vdw[(i, j)]);
        }
        ResolvedContact::ResiduePair {
            atoms1,
            atoms2,
            same_chain,
        } => {
            let pairs = atoms1.iter().cartesian_product(atoms2.iter());
            let distance = pairs
                .clone()
                .map(|(&i, &j)| matrices.distances[(i, j)])
                .fold(f64::INFINITY, f64::min);
            let energy: EnergyTerm = pairs
                .map(|(&i, &j)| EnergyTerm::new(matrices.vdw[(i, j)], matrices.electrostatic[(i, j)]))
                .sum();

            features.insert(edge::SAME_CHAIN, *same_chain);
            features.insert(edge::DISTANCE, distance);
            features.insert(edge::COVALENT, distance < covalent_cutoff);
            features.insert(edge::ELECTROSTATIC, energy.coulomb);
            features.insert(edge::VANDERWAALS, energy.vdw);
        }
    }
    features
}
