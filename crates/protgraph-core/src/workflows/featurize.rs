use crate::core::forcefield::params::Forcefield;
use crate::core::graph::Graph;
use crate::core::models::system::MolecularSystem;
use crate::engine::config::{ContactConfig, ResidueVariant};
use crate::engine::error::FeatureError;
use crate::engine::tasks::{edge_features, node_features};
use tracing::{info, instrument};

/// Computes node features and then edge features for `graph`.
///
/// Both feature sets are computed before anything is written, so on error the graph is
/// left exactly as it was.
#[instrument(skip_all, name = "featurize_workflow")]
pub fn run(
    system: &MolecularSystem,
    graph: &mut Graph,
    forcefield: &Forcefield,
    config: &ContactConfig,
    variant: Option<&ResidueVariant>,
) -> Result<(), FeatureError> {
    info!(
        nodes = graph.nodes.len(),
        edges = graph.edges.len(),
        max_intra_hops = config.max_intra_hops,
        "Featurizing contact graph."
    );

    let node_features = node_features::compute(system, forcefield, &graph.nodes, variant)?;
    let edge_features = edge_features::compute(system, forcefield, config, &graph.edges)?;

    for (node, features) in graph.nodes.iter_mut().zip(node_features) {
        node.features.merge(features);
    }
    for (edge, features) in graph.edges.iter_mut().zip(edge_features) {
        edge.features.merge(features);
    }

    info!("Featurization complete.");
    Ok(())
}
