//! Pipeline orchestration behind the CLI subcommands.

use crate::{
    edgelist::{self, EdgeListError},
    freq::{self, FreqError},
    leda::{self, error::LedaError},
    network::Network,
    orbits::{AlignmentError, FormatError, Signatures},
    orca::{OrbitCounter, OrcaError},
};
use derive_more::Display;
use log::{error, info};
use rayon::prelude::*;
use std::{
    fs::{self, File},
    io::{self, BufWriter, Write},
    path::{Path, PathBuf},
};

#[derive(Debug, Display)]
pub enum TaskError {
    #[display(fmt = "{:?}: {}", _0, _1)]
    Io(PathBuf, io::Error),
    Leda(LedaError),
    EdgeList(EdgeListError),
    Orca(OrcaError),
    Format(FormatError),
    Alignment(AlignmentError),
    Freq(FreqError),
    #[display(fmt = "{} of {} networks failed", failed, total)]
    Batch { failed: usize, total: usize },
}

impl std::error::Error for TaskError {}

impl From<LedaError> for TaskError {
    fn from(e: LedaError) -> Self {
        TaskError::Leda(e)
    }
}

impl From<EdgeListError> for TaskError {
    fn from(e: EdgeListError) -> Self {
        TaskError::EdgeList(e)
    }
}

impl From<OrcaError> for TaskError {
    fn from(e: OrcaError) -> Self {
        TaskError::Orca(e)
    }
}

impl From<FormatError> for TaskError {
    fn from(e: FormatError) -> Self {
        TaskError::Format(e)
    }
}

impl From<AlignmentError> for TaskError {
    fn from(e: AlignmentError) -> Self {
        TaskError::Alignment(e)
    }
}

impl From<FreqError> for TaskError {
    fn from(e: FreqError) -> Self {
        TaskError::Freq(e)
    }
}

/// Runs the full counting pipeline for one `.gw` network file.
pub struct CountTask<'a> {
    network_file: PathBuf,
    counter: &'a (dyn OrbitCounter + Sync),
}

impl<'a> CountTask<'a> {
    pub fn new<P: Into<PathBuf>>(network_file: P, counter: &'a (dyn OrbitCounter + Sync)) -> Self {
        Self {
            network_file: network_file.into(),
            counter,
        }
    }

    /// Loads the network, counts orbits, writes `<base>.ndump2`, aggregates
    /// and writes `<base>.gr_freq`.
    pub fn run(&self) -> Result<(), TaskError> {
        let network = read_network(&self.network_file)?;
        info!(
            "{:?}: {} nodes, {} edges",
            self.network_file,
            network.node_count(),
            network.edges().len()
        );
        let matrix = self.counter.count(&network)?;
        let signatures = Signatures::pair(network.into_labels(), matrix)?;
        let ndump2 = self.network_file.with_extension("ndump2");
        write_file(&ndump2, |w| signatures.write_ndump2(w))?;
        info!("wrote {:?}", ndump2);
        let counts = freq::graphlet_counts(signatures.matrix().rows())?;
        let gr_freq = self.network_file.with_extension("gr_freq");
        write_file(&gr_freq, |w| freq::write_gr_freq(&counts, w))?;
        info!("wrote {:?}", gr_freq);
        Ok(())
    }
}

/// Converts a tab-separated edge list into a sibling `.gw` file and returns
/// its path.
pub fn convert(edge_list_file: &Path) -> Result<PathBuf, TaskError> {
    let input = fs::read_to_string(edge_list_file)
        .map_err(|e| TaskError::Io(edge_list_file.to_path_buf(), e))?;
    let network = edgelist::parse(&input)?;
    let output = edge_list_file.with_extension("gw");
    write_file(&output, |w| leda::write(&network, w))?;
    Ok(output)
}

/// Recomputes the `.gr_freq` report from an existing `.ndump2` file and
/// returns its path.
pub fn recompute_freq(ndump2_file: &Path) -> Result<PathBuf, TaskError> {
    let input = fs::read_to_string(ndump2_file)
        .map_err(|e| TaskError::Io(ndump2_file.to_path_buf(), e))?;
    let signatures = Signatures::parse_ndump2(&input)?;
    let counts = freq::graphlet_counts(signatures.matrix().rows())?;
    let output = ndump2_file.with_extension("gr_freq");
    write_file(&output, |w| freq::write_gr_freq(&counts, w))?;
    Ok(output)
}

/// Runs the counting pipeline over every `.gw` file in `directory`.
///
/// Networks are independent, so they are processed in parallel; individual
/// failures are logged and tallied instead of aborting the batch.
pub fn batch(
    directory: &Path,
    counter: &(dyn OrbitCounter + Sync),
) -> Result<usize, TaskError> {
    let mut files: Vec<PathBuf> = fs::read_dir(directory)
        .map_err(|e| TaskError::Io(directory.to_path_buf(), e))?
        .filter_map(|entry| entry.ok().map(|entry| entry.path()))
        .filter(|path| path.extension().map_or(false, |ext| ext == "gw"))
        .collect();
    files.sort();
    let failed = files
        .par_iter()
        .filter(|path| {
            if let Err(e) = CountTask::new(path.as_path(), counter).run() {
                error!("{:?}: {}", path, e);
                true
            } else {
                false
            }
        })
        .count();
    if failed > 0 {
        Err(TaskError::Batch {
            failed,
            total: files.len(),
        })
    } else {
        Ok(files.len())
    }
}

fn read_network(path: &Path) -> Result<Network, TaskError> {
    let input =
        fs::read_to_string(path).map_err(|e| TaskError::Io(path.to_path_buf(), e))?;
    Ok(leda::parse(&input)?)
}

fn write_file<F>(path: &Path, write: F) -> Result<(), TaskError>
where
    F: FnOnce(&mut BufWriter<File>) -> io::Result<()>,
{
    let file = File::create(path).map_err(|e| TaskError::Io(path.to_path_buf(), e))?;
    let mut writer = BufWriter::new(file);
    write(&mut writer).map_err(|e| TaskError::Io(path.to_path_buf(), e))?;
    writer
        .flush()
        .map_err(|e| TaskError::Io(path.to_path_buf(), e))
}
