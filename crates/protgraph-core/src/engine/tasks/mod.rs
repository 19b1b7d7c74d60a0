//! Feature writers for the nodes and edges of a contact graph.
//!
//! Each task first computes the complete feature set for every element it handles,
//! failing before anything is written, and only then merges the results into the graph.

pub mod edge_features;
pub mod node_features;
