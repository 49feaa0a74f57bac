use crate::network::Network;
use std::io::{self, Write};

/// Writes a network in the LEDA graph-exchange format, with 1-based edge
/// endpoints and the `-2` undirected marker.
pub fn write<W: Write>(network: &Network, writer: &mut W) -> io::Result<()> {
    writeln!(writer, "LEDA.GRAPH")?;
    writeln!(writer, "string")?;
    writeln!(writer, "short")?;
    writeln!(writer, "-2")?;
    writeln!(writer, "{}", network.node_count())?;
    for label in network.labels() {
        writeln!(writer, "|{{{}}}|", label)?;
    }
    writeln!(writer, "{}", network.edges().len())?;
    for &(src, dst) in network.edges() {
        writeln!(writer, "{} {} 0 |{{}}|", src + 1, dst + 1)?;
    }
    Ok(())
}
