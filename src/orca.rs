//! Invocation of the external ORCA orbit counter.

use crate::{
    network::Network,
    orbits::{FormatError, OrbitMatrix},
};
use derive_more::Display;
use log::info;
use std::{
    fs,
    io::{self, Write},
    path::PathBuf,
    process::{Command, ExitStatus},
};
use tempfile::NamedTempFile;

#[derive(Debug, Display)]
pub enum OrcaError {
    #[display(fmt = "cannot run {:?}: {}", program, source)]
    Spawn { program: PathBuf, source: io::Error },
    #[display(fmt = "{:?} exited with {}: {}", program, status, stderr)]
    Failed {
        program: PathBuf,
        status: ExitStatus,
        stderr: String,
    },
    Output(FormatError),
    #[display(fmt = "orbit counter emitted {} rows for {} nodes", actual, expected)]
    RowCount { expected: usize, actual: usize },
    Io(io::Error),
}

impl std::error::Error for OrcaError {}

/// Computes the per-node orbit-count matrix of a network.
///
/// Implementations must emit one row per node, in node-index order.
pub trait OrbitCounter {
    fn count(&self, network: &Network) -> Result<OrbitMatrix, OrcaError>;
}

/// Runs the ORCA binary (`orca 5 <input> <output>`) as a subprocess, with
/// tempfile-managed scratch files.
pub struct OrcaProcess {
    program: PathBuf,
}

impl OrcaProcess {
    pub fn new<P: Into<PathBuf>>(program: P) -> Self {
        Self {
            program: program.into(),
        }
    }
}

/// Writes the orbit counter's input: a `node_count edge_count` header and
/// one 0-based `src dst` line per edge.
pub fn write_input<W: Write>(network: &Network, writer: &mut W) -> io::Result<()> {
    writeln!(
        writer,
        "{} {}",
        network.node_count(),
        network.edges().len()
    )?;
    for &(src, dst) in network.edges() {
        writeln!(writer, "{} {}", src, dst)?;
    }
    Ok(())
}

impl OrbitCounter for OrcaProcess {
    fn count(&self, network: &Network) -> Result<OrbitMatrix, OrcaError> {
        let mut input = NamedTempFile::new().map_err(OrcaError::Io)?;
        write_input(network, &mut input).map_err(OrcaError::Io)?;
        input.flush().map_err(OrcaError::Io)?;
        let output = NamedTempFile::new().map_err(OrcaError::Io)?;
        info!(
            "running {:?} on {} nodes, {} edges",
            self.program,
            network.node_count(),
            network.edges().len()
        );
        let result = Command::new(&self.program)
            .arg("5")
            .arg(input.path())
            .arg(output.path())
            .output()
            .map_err(|e| OrcaError::Spawn {
                program: self.program.clone(),
                source: e,
            })?;
        if !result.status.success() {
            return Err(OrcaError::Failed {
                program: self.program.clone(),
                status: result.status,
                stderr: String::from_utf8_lossy(&result.stderr).into_owned(),
            });
        }
        let raw = fs::read_to_string(output.path()).map_err(OrcaError::Io)?;
        let matrix = OrbitMatrix::parse(&raw).map_err(OrcaError::Output)?;
        if matrix.node_count() != network.node_count() {
            return Err(OrcaError::RowCount {
                expected: network.node_count(),
                actual: matrix.node_count(),
            });
        }
        Ok(matrix)
    }
}
