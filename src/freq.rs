//! Graphlet frequency aggregation.
//!
//! Each of the 30 graphlet types (2-5 nodes) has a representative orbit
//! unique to it. Summing that orbit's column over all nodes counts every
//! occurrence of the graphlet once per automorphism, so dividing the column
//! sum by the automorphism weight yields the network-level frequency.

use crate::types::{NUM_GRAPHLETS, NUM_ORBITS};
use derive_more::Display;
use log::warn;
use std::io::{self, Write};

/// The representative orbit of each graphlet type.
pub const ORBIT_OF_GRAPHLET: [usize; NUM_GRAPHLETS] = [
    0, 2, 3, 5, 7, 8, 9, 12, 14, 17, 18, 23, 25, 27, 33, 34, 35, 39, 44, 45, 50, 52, 55, 56, 61,
    62, 65, 69, 70, 72,
];

/// How many times the representative orbit is occupied per occurrence of
/// its graphlet.
pub const WEIGHT_OF_GRAPHLET: [u32; NUM_GRAPHLETS] = [
    2, 1, 3, 2, 1, 4, 1, 2, 4, 1, 1, 1, 1, 1, 1, 5, 1, 1, 1, 1, 2, 1, 2, 1, 1, 1, 1, 1, 2, 5,
];

#[derive(Debug, Display, PartialEq)]
pub enum FreqError {
    #[display(fmt = "row {}: expected {} orbit counts, found {}", row, expected, found)]
    RowWidth {
        row: usize,
        expected: usize,
        found: usize,
    },
}

impl std::error::Error for FreqError {}

/// Network-level graphlet frequencies, indexed by graphlet type.
#[derive(Debug, Clone, PartialEq)]
pub struct GraphletCounts([f64; NUM_GRAPHLETS]);

impl GraphletCounts {
    pub fn counts(&self) -> &[f64; NUM_GRAPHLETS] {
        &self.0
    }
}

/// Aggregates an orbit-count matrix into total graphlet frequencies.
///
/// For every graphlet type the representative orbit's column is summed over
/// all rows and divided by the automorphism weight. A sum that is not an
/// exact multiple of the weight means the matrix is inconsistent; it is
/// reported with a warning and the fractional value kept (the report writer
/// truncates toward zero).
pub fn graphlet_counts(rows: &[Vec<f64>]) -> Result<GraphletCounts, FreqError> {
    for (i, row) in rows.iter().enumerate() {
        if row.len() != NUM_ORBITS {
            return Err(FreqError::RowWidth {
                row: i + 1,
                expected: NUM_ORBITS,
                found: row.len(),
            });
        }
    }
    let mut counts = [0.0; NUM_GRAPHLETS];
    for (g, (&orbit, &weight)) in ORBIT_OF_GRAPHLET
        .iter()
        .zip(WEIGHT_OF_GRAPHLET.iter())
        .enumerate()
    {
        let sum: f64 = rows.iter().map(|row| row[orbit]).sum();
        if sum % f64::from(weight) != 0.0 {
            warn!(
                "graphlet {}: orbit {} column sum {} is not a multiple of weight {}",
                g, orbit, sum, weight
            );
        }
        counts[g] = sum / f64::from(weight);
    }
    Ok(GraphletCounts(counts))
}

/// Writes the `.gr_freq` report: 30 tab-separated `<type>\t<count>` lines in
/// increasing graphlet-type order, counts truncated toward zero.
pub fn write_gr_freq<W: Write>(counts: &GraphletCounts, writer: &mut W) -> io::Result<()> {
    for (g, count) in counts.0.iter().enumerate() {
        writeln!(writer, "{}\t{}", g, count.trunc() as i64)?;
    }
    Ok(())
}
