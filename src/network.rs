//! The in-memory network representation.

use crate::types::NodeId;
use derive_more::Display;
use log::warn;
use std::collections::HashSet;

#[derive(Debug, Display, PartialEq)]
pub enum NetworkError {
    #[display(
        fmt = "edge ({}, {}) references a node outside [0, {})",
        _0,
        _1,
        _2
    )]
    EdgeOutOfRange(NodeId, NodeId, usize),
}

impl std::error::Error for NetworkError {}

/// An undirected simple graph with labelled nodes.
///
/// Node indices are zero based and stable: index `i` always refers to
/// `labels()[i]`, and the orbit counter emits its `i`-th row for the same
/// node.
#[derive(Debug, Clone, PartialEq)]
pub struct Network {
    labels: Vec<String>,
    edges: Vec<(NodeId, NodeId)>,
}

impl Network {
    /// Builds a network from node labels and raw undirected edges.
    ///
    /// Self-loops and duplicate edges are dropped with a warning (the orbit
    /// counter requires a simple graph); an out-of-range endpoint is an
    /// error.
    pub fn new(
        labels: Vec<String>,
        edges: Vec<(NodeId, NodeId)>,
    ) -> Result<Self, NetworkError> {
        let num_nodes = labels.len();
        let mut seen = HashSet::with_capacity(edges.len());
        let mut kept = Vec::with_capacity(edges.len());
        for (src, dst) in edges {
            if src as usize >= num_nodes || dst as usize >= num_nodes {
                return Err(NetworkError::EdgeOutOfRange(src, dst, num_nodes));
            }
            if src == dst {
                warn!("dropping self-loop on node {}", src);
                continue;
            }
            let key = if src < dst { (src, dst) } else { (dst, src) };
            if !seen.insert(key) {
                warn!("dropping duplicate edge ({}, {})", src, dst);
                continue;
            }
            kept.push((src, dst));
        }
        Ok(Self {
            labels,
            edges: kept,
        })
    }

    pub fn node_count(&self) -> usize {
        self.labels.len()
    }

    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    pub fn edges(&self) -> &[(NodeId, NodeId)] {
        &self.edges
    }

    pub fn into_labels(self) -> Vec<String> {
        self.labels
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn labels(names: &[&str]) -> Vec<String> {
        names.iter().map(|&s| String::from(s)).collect()
    }

    #[test]
    fn test_new() {
        let network = Network::new(labels(&["a", "b", "c"]), vec![(0, 1), (1, 2)]).unwrap();
        assert_eq!(network.node_count(), 3);
        assert_eq!(network.edges(), [(0, 1), (1, 2)]);
    }

    #[test]
    fn test_edge_out_of_range() {
        assert_eq!(
            Network::new(labels(&["a", "b"]), vec![(0, 2)]),
            Err(NetworkError::EdgeOutOfRange(0, 2, 2))
        );
    }

    #[test]
    fn test_self_loop_dropped() {
        let network = Network::new(labels(&["a", "b"]), vec![(0, 0), (0, 1)]).unwrap();
        assert_eq!(network.edges(), [(0, 1)]);
    }

    #[test]
    fn test_duplicate_edge_dropped() {
        let network =
            Network::new(labels(&["a", "b"]), vec![(0, 1), (1, 0), (0, 1)]).unwrap();
        assert_eq!(network.edges(), [(0, 1)]);
    }
}
