//! Tab-separated edge-list reading.

use crate::{
    network::{Network, NetworkError},
    types::NodeId,
};
use derive_more::Display;
use std::collections::HashMap;

#[derive(Debug, Display, PartialEq)]
pub enum EdgeListError {
    #[display(fmt = "line {}: expected two tab-separated fields", _0)]
    ShortLine(usize),
    Network(NetworkError),
}

impl std::error::Error for EdgeListError {}

impl From<NetworkError> for EdgeListError {
    fn from(e: NetworkError) -> Self {
        EdgeListError::Network(e)
    }
}

/// Parses a tab-separated edge list into a network.
///
/// Node indices are assigned in order of first appearance; self-loop lines
/// are skipped.
pub fn parse(input: &str) -> Result<Network, EdgeListError> {
    let mut indexes: HashMap<&str, NodeId> = HashMap::new();
    let mut labels: Vec<String> = vec![];
    let mut edges = vec![];
    for (i, line) in input.lines().enumerate() {
        let line = line.trim_end();
        if line.is_empty() {
            continue;
        }
        let mut fields = line.split('\t');
        let (src, dst) = match (fields.next(), fields.next()) {
            (Some(src), Some(dst)) => (src, dst),
            _ => return Err(EdgeListError::ShortLine(i + 1)),
        };
        if src == dst {
            continue;
        }
        let src = index_of(src, &mut indexes, &mut labels);
        let dst = index_of(dst, &mut indexes, &mut labels);
        edges.push((src, dst));
    }
    Ok(Network::new(labels, edges)?)
}

fn index_of<'a>(
    label: &'a str,
    indexes: &mut HashMap<&'a str, NodeId>,
    labels: &mut Vec<String>,
) -> NodeId {
    *indexes.entry(label).or_insert_with(|| {
        labels.push(String::from(label));
        (labels.len() - 1) as NodeId
    })
}
