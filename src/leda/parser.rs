use super::error::{LedaError, Result};
use crate::{network::Network, types::NodeId};
use pest::Parser;
use pest_derive::Parser;

pub type LedaRule = Rule;

#[derive(Parser)]
#[grammar = "leda/grammar.pest"]
struct LedaParser;

/// Parses a LEDA `.gw` file into a network.
///
/// The 1-based edge endpoints of the file are converted to 0-based node
/// indices; declared node/edge counts are checked against the actual number
/// of lines.
pub fn parse(input: &str) -> Result<Network> {
    let file = LedaParser::parse(Rule::file, input)?.next().unwrap();
    let mut labels: Vec<String> = vec![];
    let mut raw_edges: Vec<(usize, usize)> = vec![];
    let mut num_nodes = None;
    let mut num_edges = None;
    for pair in file.into_inner() {
        match pair.as_rule() {
            Rule::uint => {
                let count = pair.as_str().parse().unwrap();
                if num_nodes.is_none() {
                    num_nodes = Some(count);
                } else {
                    num_edges = Some(count);
                }
            }
            Rule::node_line => {
                labels.push(String::from(pair.into_inner().next().unwrap().as_str()));
            }
            Rule::edge_line => {
                let mut pairs = pair.into_inner();
                let src = pairs.next().unwrap().as_str().parse().unwrap();
                let dst = pairs.next().unwrap().as_str().parse().unwrap();
                raw_edges.push((src, dst));
            }
            Rule::EOI => {}
            _ => unreachable!(),
        }
    }
    let num_nodes = num_nodes.unwrap();
    if labels.len() != num_nodes {
        return Err(LedaError::NodeCount {
            declared: num_nodes,
            found: labels.len(),
        });
    }
    let num_edges = num_edges.unwrap();
    if raw_edges.len() != num_edges {
        return Err(LedaError::EdgeCount {
            declared: num_edges,
            found: raw_edges.len(),
        });
    }
    let mut edges = Vec::with_capacity(raw_edges.len());
    for (src, dst) in raw_edges {
        if src < 1 || src > num_nodes || dst < 1 || dst > num_nodes {
            return Err(LedaError::EdgeIndex {
                src,
                dst,
                num_nodes,
            });
        }
        edges.push(((src - 1) as NodeId, (dst - 1) as NodeId));
    }
    Ok(Network::new(labels, edges)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    const TRIANGLE: &str = "\
LEDA.GRAPH
string
short
-2
3
|{a}|
|{b}|
|{c}|
3
1 2 0 |{}|
2 3 0 |{}|
1 3 0 |{}|
";

    #[test]
    fn test_parse() {
        let network = parse(TRIANGLE).unwrap();
        assert_eq!(network.labels(), ["a", "b", "c"]);
        assert_eq!(network.edges(), [(0, 1), (1, 2), (0, 2)]);
    }

    #[test]
    fn test_parse_without_direction_marker() {
        let network = parse(
            "LEDA.GRAPH\nstring\nshort\n2\n|{a}|\n|{b}|\n1\n1 2 0 |{}|\n",
        )
        .unwrap();
        assert_eq!(network.edges(), [(0, 1)]);
    }

    #[test]
    fn test_parse_leading_comment() {
        let network = parse(
            "# exported network\nLEDA.GRAPH\nstring\nshort\n-2\n1\n|{a}|\n0\n",
        )
        .unwrap();
        assert_eq!(network.node_count(), 1);
        assert!(network.edges().is_empty());
    }

    #[test]
    fn test_parse_structure_error() {
        assert!(matches!(
            parse("GRAPH\n1\n|{a}|\n0\n"),
            Err(LedaError::Parse(_))
        ));
    }

    #[test]
    fn test_node_count_mismatch() {
        assert_eq!(
            parse("LEDA.GRAPH\nstring\nshort\n-2\n2\n|{a}|\n0\n"),
            Err(LedaError::NodeCount {
                declared: 2,
                found: 1,
            })
        );
    }

    #[test]
    fn test_edge_count_mismatch() {
        assert_eq!(
            parse("LEDA.GRAPH\nstring\nshort\n-2\n2\n|{a}|\n|{b}|\n2\n1 2 0 |{}|\n"),
            Err(LedaError::EdgeCount {
                declared: 2,
                found: 1,
            })
        );
    }

    #[test]
    fn test_edge_index_out_of_range() {
        assert_eq!(
            parse("LEDA.GRAPH\nstring\nshort\n-2\n2\n|{a}|\n|{b}|\n1\n1 3 0 |{}|\n"),
            Err(LedaError::EdgeIndex {
                src: 1,
                dst: 3,
                num_nodes: 2,
            })
        );
    }
}
