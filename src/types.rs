//! Various types shared across the pipeline.

/// The node index type.
pub type NodeId = u32;

/// Number of orbit positions a node can occupy across all connected
/// graphlets of 2-5 nodes.
pub const NUM_ORBITS: usize = 73;

/// Number of distinct connected graphlets with 2-5 nodes.
pub const NUM_GRAPHLETS: usize = 30;
