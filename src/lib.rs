//! Graphlet signature counting.
//!
//! Converts between graph file formats and derives per-node and
//! network-level graphlet statistics from the output of the external ORCA
//! orbit counter.

pub mod edgelist;
pub mod freq;
pub mod leda;
pub mod network;
pub mod orbits;
pub mod orca;
pub mod task;
pub mod types;
