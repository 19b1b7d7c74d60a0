use crate::core::forcefield::params::Forcefield;
use crate::core::graph::features::{Features, node};
use crate::core::graph::{Node, NodeId};
use crate::core::models::amino_acid::{AminoAcid, AminoAcidProperties, Polarity};
use crate::core::models::ids::ResidueId;
use crate::core::models::residue::Residue;
use crate::core::models::system::MolecularSystem;
use crate::engine::config::ResidueVariant;
use crate::engine::error::FeatureError;
use std::collections::HashMap;
use tracing::{debug, instrument, warn};

/// Writes atom and residue features onto every node. On error no node is modified.
#[instrument(skip_all, name = "node_features_task")]
pub fn run(
    system: &MolecularSystem,
    forcefield: &Forcefield,
    nodes: &mut [Node],
    variant: Option<&ResidueVariant>,
) -> Result<(), FeatureError> {
    let computed = compute(system, forcefield, nodes, variant)?;
    for (node, features) in nodes.iter_mut().zip(computed) {
        node.features.merge(features);
    }
    Ok(())
}

/// Computes one feature set per node, in node order, without touching the nodes.
pub(crate) fn compute(
    system: &MolecularSystem,
    forcefield: &Forcefield,
    nodes: &[Node],
    variant: Option<&ResidueVariant>,
) -> Result<Vec<Features>, FeatureError> {
    if let Some(variant) = variant {
        check_variant(system, variant)?;
    }

    // Atom nodes share their residue's context; compute it once per residue.
    let mut residue_cache: HashMap<ResidueId, Features> = HashMap::new();
    let mut residue_context = |residue_id: ResidueId| -> Result<Features, FeatureError> {
        if let Some(features) = residue_cache.get(&residue_id) {
            return Ok(features.clone());
        }
        let residue = system
            .residue(residue_id)
            .ok_or(FeatureError::ResidueNotFound(residue_id))?;
        let features = residue_features(residue_id, residue, variant);
        residue_cache.insert(residue_id, features.clone());
        Ok(features)
    };

    let computed = nodes
        .iter()
        .map(|n| match n.id {
            NodeId::Atom(atom_id) => {
                let atom = system
                    .atom(atom_id)
                    .ok_or(FeatureError::AtomNotFound(atom_id))?;
                let mut features = residue_context(atom.residue_id)?;
                let residue_name = system
                    .residue(atom.residue_id)
                    .map_or("", |r| r.name.as_str());

                features.insert(node::ATOM_TYPE, atom.element.onehot());
                features.insert(node::PDB_OCCUPANCY, atom.occupancy);
                features.insert(node::ATOM_CHARGE, forcefield.charge(residue_name, &atom.name));
                Ok(features)
            }
            NodeId::Residue(residue_id) => residue_context(residue_id),
        })
        .collect::<Result<Vec<_>, FeatureError>>()?;

    debug!(nodes = nodes.len(), residues = residue_cache.len(), "Computed node features.");
    Ok(computed)
}

fn check_variant(system: &MolecularSystem, variant: &ResidueVariant) -> Result<(), FeatureError> {
    let residue = system
        .residue(variant.residue)
        .ok_or(FeatureError::ResidueNotFound(variant.residue))?;
    if residue.amino_acid != Some(variant.wildtype) {
        warn!(
            residue = residue.name.as_str(),
            number = residue.residue_number,
            wildtype = %variant.wildtype,
            "Variant wildtype does not match the residue in the structure."
        );
    }
    Ok(())
}

fn residue_features(
    residue_id: ResidueId,
    residue: &Residue,
    variant: Option<&ResidueVariant>,
) -> Features {
    let mut features = Features::new();

    match residue.amino_acid {
        Some(amino_acid) => {
            let props = amino_acid.properties();
            features.insert(node::RES_TYPE, amino_acid.onehot());
            features.insert(node::RES_CHARGE, props.charge);
            features.insert(node::POLARITY, props.polarity.onehot());
            features.insert(node::RES_SIZE, f64::from(props.size));
            features.insert(node::RES_MASS, props.mass);
            features.insert(node::RES_PI, props.pi);
            features.insert(node::HB_DONORS, f64::from(props.hydrogen_bond_donors));
            features.insert(node::HB_ACCEPTORS, f64::from(props.hydrogen_bond_acceptors));
        }
        None => {
            warn!(
                residue = residue.name.as_str(),
                number = residue.residue_number,
                "Non-standard residue; writing zero-valued residue features."
            );
            features.insert(node::RES_TYPE, vec![0.0; AminoAcid::ALL.len()]);
            features.insert(node::RES_CHARGE, 0.0);
            features.insert(node::POLARITY, vec![0.0; Polarity::ALL.len()]);
            for name in [
                node::RES_SIZE,
                node::RES_MASS,
                node::RES_PI,
                node::HB_DONORS,
                node::HB_ACCEPTORS,
            ] {
                features.insert(name, 0.0);
            }
        }
    }

    insert_conservation_features(&mut features, residue);

    if let Some(variant) = variant {
        if variant.residue == residue_id {
            insert_variant_features(&mut features, variant);
            let diff = residue.conservation.map_or(0.0, |c| {
                c.score(variant.variant) - c.score(variant.wildtype)
            });
            features.insert(node::DIFF_CONSERVATION, diff);
        } else {
            let own_type = residue
                .amino_acid
                .map_or_else(|| vec![0.0; AminoAcid::ALL.len()], |aa| aa.onehot());
            features.insert(node::VARIANT_RES, own_type);
            features.insert(node::DIFF_POLARITY, vec![0.0; Polarity::ALL.len()]);
            for name in [
                node::DIFF_CHARGE,
                node::DIFF_SIZE,
                node::DIFF_MASS,
                node::DIFF_PI,
                node::DIFF_HB_DONORS,
                node::DIFF_HB_ACCEPTORS,
                node::DIFF_CONSERVATION,
            ] {
                features.insert(name, 0.0);
            }
        }
    }

    features
}

/// Profile, own-type score and information content; zeros when no profile is attached.
fn insert_conservation_features(features: &mut Features, residue: &Residue) {
    match residue.conservation {
        Some(conservation) => {
            let own_score = residue.amino_acid.map_or(0.0, |aa| conservation.score(aa));
            features.insert(node::PSSM, conservation.profile.to_vec());
            features.insert(node::CONSERVATION, own_score);
            features.insert(node::INFO_CONTENT, conservation.information_content);
        }
        None => {
            debug!(
                residue = residue.name.as_str(),
                number = residue.residue_number,
                "No conservation profile; writing zero-valued conservation features."
            );
            features.insert(node::PSSM, vec![0.0; AminoAcid::ALL.len()]);
            features.insert(node::CONSERVATION, 0.0);
            features.insert(node::INFO_CONTENT, 0.0);
        }
    }
}

/// `variant - wildtype` for every property, on the mutated residue.
fn insert_variant_features(features: &mut Features, variant: &ResidueVariant) {
    let var: AminoAcidProperties = variant.variant.properties();
    let wt: AminoAcidProperties = variant.wildtype.properties();

    let polarity_diff = var
        .polarity
        .onehot()
        .into_iter()
        .zip(wt.polarity.onehot())
        .map(|(v, w)| v - w)
        .collect::<Vec<_>>();

    features.insert(node::VARIANT_RES, variant.variant.onehot());
    features.insert(node::DIFF_CHARGE, var.charge - wt.charge);
    features.insert(node::DIFF_POLARITY, polarity_diff);
    features.insert(node::DIFF_SIZE, f64::from(var.size) - f64::from(wt.size));
    features.insert(node::DIFF_MASS, var.mass - wt.mass);
    features.insert(node::DIFF_PI, var.pi - wt.pi);
    features.insert(
        node::DIFF_HB_DONORS,
        f64::from(var.hydrogen_bond_donors) - f64::from(wt.hydrogen_bond_donors),
    );
    features.insert(
        node::DIFF_HB_ACCEPTORS,
        f64::from(var.hydrogen_bond_acceptors) - f64::from(wt.hydrogen_bond_acceptors),
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::atom::{Atom, Element};
    use crate::core::models::conservation::Conservation;
    use crate::core::models::ids::AtomId;
    use nalgebra::Point3;

    const TOLERANCE: f64 = 1e-9;

    fn f64_approx_equal(a: f64, b: f64) -> bool {
        (a - b).abs() < TOLERANCE
    }

    struct Fixture {
        system: MolecularSystem,
        residues: Vec<ResidueId>,
        atoms: Vec<AtomId>,
    }

    /// ASP 1 (CG, OD1) and HOH 2 (O) on chain A.
    fn fixture() -> Fixture {
        let mut system = MolecularSystem::new();
        let chain = system.add_chain('A');
        let asp = system.add_residue(chain, 1, None, "ASP").unwrap();
        let water = system.add_residue(chain, 2, None, "HOH").unwrap();

        let cg = system
            .add_atom_to_residue(asp, Atom::new("CG", asp, Point3::origin()))
            .unwrap();
        let od1 = system
            .add_atom_to_residue(
                asp,
                Atom::new("OD1", asp, Point3::new(1.25, 0.0, 0.0)).with_occupancy(0.5),
            )
            .unwrap();
        let o = system
            .add_atom_to_residue(water, Atom::new("O", water, Point3::new(4.0, 0.0, 0.0)))
            .unwrap();

        Fixture {
            system,
            residues: vec![asp, water],
            atoms: vec![cg, od1, o],
        }
    }

    #[test]
    fn atom_nodes_get_element_occupancy_charge_and_residue_context() {
        let f = fixture();
        let mut forcefield = Forcefield::new();
        forcefield.insert_atom("ASP", "OD1", "OC", -0.6);

        let mut nodes = vec![Node::new(NodeId::Atom(f.atoms[1]))];
        run(&f.system, &forcefield, &mut nodes, None).unwrap();

        let features = &nodes[0].features;
        assert_eq!(
            features.vector(node::ATOM_TYPE),
            Some(Element::Oxygen.onehot().as_slice())
        );
        assert_eq!(features.scalar(node::PDB_OCCUPANCY), Some(0.5));
        assert_eq!(features.scalar(node::ATOM_CHARGE), Some(-0.6));
        assert_eq!(
            features.vector(node::RES_TYPE),
            Some(AminoAcid::AsparticAcid.onehot().as_slice())
        );
        assert_eq!(features.scalar(node::RES_CHARGE), Some(-1.0));
        assert!(!features.contains(node::VARIANT_RES));
    }

    #[test]
    fn residue_nodes_get_amino_acid_properties() {
        let f = fixture();
        let mut nodes = vec![Node::new(NodeId::Residue(f.residues[0]))];
        run(&f.system, &Forcefield::new(), &mut nodes, None).unwrap();

        let features = &nodes[0].features;
        let props = AminoAcid::AsparticAcid.properties();
        assert_eq!(
            features.vector(node::POLARITY),
            Some(Polarity::NegativeCharge.onehot().as_slice())
        );
        assert_eq!(features.scalar(node::RES_SIZE), Some(f64::from(props.size)));
        assert_eq!(features.scalar(node::RES_MASS), Some(props.mass));
        assert_eq!(features.scalar(node::RES_PI), Some(props.pi));
        assert_eq!(
            features.scalar(node::HB_ACCEPTORS),
            Some(f64::from(props.hydrogen_bond_acceptors))
        );
        assert!(!features.contains(node::ATOM_TYPE));
    }

    #[test]
    fn non_standard_residues_get_zero_encodings() {
        let f = fixture();
        let mut nodes = vec![Node::new(NodeId::Residue(f.residues[1]))];
        run(&f.system, &Forcefield::new(), &mut nodes, None).unwrap();

        let features = &nodes[0].features;
        assert_eq!(features.vector(node::RES_TYPE), Some(&[0.0; 20][..]));
        assert_eq!(features.vector(node::POLARITY), Some(&[0.0; 4][..]));
        assert_eq!(features.scalar(node::RES_MASS), Some(0.0));
    }

    #[test]
    fn variant_residue_gets_property_differences() {
        let f = fixture();
        let variant = ResidueVariant {
            residue: f.residues[0],
            wildtype: AminoAcid::AsparticAcid,
            variant: AminoAcid::Lysine,
        };
        let mut nodes = vec![
            Node::new(NodeId::Residue(f.residues[0])),
            Node::new(NodeId::Residue(f.residues[1])),
        ];
        run(&f.system, &Forcefield::new(), &mut nodes, Some(&variant)).unwrap();

        let mutated = &nodes[0].features;
        assert_eq!(
            mutated.vector(node::VARIANT_RES),
            Some(AminoAcid::Lysine.onehot().as_slice())
        );
        assert_eq!(mutated.scalar(node::DIFF_CHARGE), Some(2.0));
        assert_eq!(
            mutated.vector(node::DIFF_POLARITY),
            Some(&[0.0, 0.0, -1.0, 1.0][..])
        );
        let expected_mass =
            AminoAcid::Lysine.properties().mass - AminoAcid::AsparticAcid.properties().mass;
        assert!(f64_approx_equal(
            mutated.scalar(node::DIFF_MASS).unwrap(),
            expected_mass
        ));

        let untouched = &nodes[1].features;
        assert_eq!(untouched.vector(node::VARIANT_RES), Some(&[0.0; 20][..]));
        assert_eq!(untouched.scalar(node::DIFF_CHARGE), Some(0.0));
    }

    /// Scores rise along [`AminoAcid::ALL`]: ALA 0.01, ARG 0.02, ..., VAL 0.20.
    fn ramp_profile() -> Conservation {
        let mut profile = [0.0; 20];
        for (i, score) in profile.iter_mut().enumerate() {
            *score = (i + 1) as f64 / 100.0;
        }
        Conservation::new(profile, 1.75)
    }

    #[test]
    fn residue_and_atom_nodes_share_conservation_features() {
        let mut f = fixture();
        let profile = ramp_profile();
        f.system.set_conservation(f.residues[0], profile).unwrap();

        let mut nodes = vec![
            Node::new(NodeId::Residue(f.residues[0])),
            Node::new(NodeId::Atom(f.atoms[1])),
        ];
        run(&f.system, &Forcefield::new(), &mut nodes, None).unwrap();

        for features in nodes.iter().map(|n| &n.features) {
            assert_eq!(features.vector(node::PSSM), Some(profile.profile.as_slice()));
            assert_eq!(
                features.scalar(node::CONSERVATION),
                Some(profile.score(AminoAcid::AsparticAcid))
            );
            assert_eq!(features.scalar(node::INFO_CONTENT), Some(1.75));
            assert!(!features.contains(node::DIFF_CONSERVATION));
        }
    }

    #[test]
    fn residues_without_profile_get_zero_conservation() {
        let f = fixture();
        let mut nodes = vec![
            Node::new(NodeId::Residue(f.residues[0])),
            Node::new(NodeId::Atom(f.atoms[2])),
        ];
        run(&f.system, &Forcefield::new(), &mut nodes, None).unwrap();

        for features in nodes.iter().map(|n| &n.features) {
            assert_eq!(features.vector(node::PSSM), Some(&[0.0; 20][..]));
            assert_eq!(features.scalar(node::CONSERVATION), Some(0.0));
            assert_eq!(features.scalar(node::INFO_CONTENT), Some(0.0));
        }
    }

    #[test]
    fn diff_conservation_is_variant_minus_wildtype_on_mutated_residue_only() {
        let mut f = fixture();
        let profile = ramp_profile();
        f.system.set_conservation(f.residues[0], profile).unwrap();
        f.system.set_conservation(f.residues[1], profile).unwrap();
        let variant = ResidueVariant {
            residue: f.residues[0],
            wildtype: AminoAcid::AsparticAcid,
            variant: AminoAcid::Lysine,
        };

        let mut nodes = vec![
            Node::new(NodeId::Residue(f.residues[0])),
            Node::new(NodeId::Atom(f.atoms[0])),
            Node::new(NodeId::Residue(f.residues[1])),
            Node::new(NodeId::Atom(f.atoms[2])),
        ];
        run(&f.system, &Forcefield::new(), &mut nodes, Some(&variant)).unwrap();

        // LYS 0.12 minus ASP 0.04.
        for features in nodes[..2].iter().map(|n| &n.features) {
            assert!(f64_approx_equal(
                features.scalar(node::DIFF_CONSERVATION).unwrap(),
                0.08
            ));
        }
        for features in nodes[2..].iter().map(|n| &n.features) {
            assert_eq!(features.scalar(node::DIFF_CONSERVATION), Some(0.0));
            // HOH has a profile but no amino-acid type to score.
            assert_eq!(features.scalar(node::CONSERVATION), Some(0.0));
            assert_eq!(features.scalar(node::INFO_CONTENT), Some(1.75));
        }
    }

    #[test]
    fn unknown_node_ids_leave_every_node_untouched() {
        let f = fixture();
        let mut nodes = vec![
            Node::new(NodeId::Atom(f.atoms[0])),
            Node::new(NodeId::Atom(AtomId::default())),
        ];
        let result = run(&f.system, &Forcefield::new(), &mut nodes, None);

        assert_eq!(result, Err(FeatureError::AtomNotFound(AtomId::default())));
        assert!(nodes.iter().all(|n| n.features.is_empty()));
    }

    #[test]
    fn variant_on_missing_residue_is_rejected() {
        let f = fixture();
        let variant = ResidueVariant {
            residue: ResidueId::default(),
            wildtype: AminoAcid::Alanine,
            variant: AminoAcid::Glycine,
        };
        let mut nodes = vec![Node::new(NodeId::Residue(f.residues[0]))];
        assert_eq!(
            run(&f.system, &Forcefield::new(), &mut nodes, Some(&variant)),
            Err(FeatureError::ResidueNotFound(ResidueId::default()))
        );
    }
}
