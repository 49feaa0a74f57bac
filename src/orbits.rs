//! Per-node orbit signatures.

use crate::types::NUM_ORBITS;
use derive_more::Display;
use itertools::Itertools;
use std::io::{self, Write};

#[derive(Debug, Display, PartialEq)]
pub enum FormatError {
    #[display(fmt = "row {}: expected {} fields, found {}", row, expected, found)]
    RowWidth {
        row: usize,
        expected: usize,
        found: usize,
    },
    #[display(fmt = "row {}: field {:?} is not numeric", row, field)]
    NonNumeric { row: usize, field: String },
}

impl std::error::Error for FormatError {}

#[derive(Debug, Display, PartialEq)]
#[display(fmt = "{} node labels but {} orbit-count rows", labels, rows)]
pub struct AlignmentError {
    pub labels: usize,
    pub rows: usize,
}

impl std::error::Error for AlignmentError {}

/// A per-node orbit-count matrix: one row of 73 counts per node, rows in
/// node-index order.
#[derive(Debug, Clone, PartialEq)]
pub struct OrbitMatrix {
    rows: Vec<Vec<f64>>,
}

impl OrbitMatrix {
    /// Builds a matrix, checking that every row has exactly 73 entries.
    pub fn from_rows(rows: Vec<Vec<f64>>) -> Result<Self, FormatError> {
        for (i, row) in rows.iter().enumerate() {
            if row.len() != NUM_ORBITS {
                return Err(FormatError::RowWidth {
                    row: i + 1,
                    expected: NUM_ORBITS,
                    found: row.len(),
                });
            }
        }
        Ok(Self { rows })
    }

    /// Parses the raw orbit counter output: one whitespace-separated row of
    /// 73 numbers per node.
    pub fn parse(input: &str) -> Result<Self, FormatError> {
        let mut rows = vec![];
        for (i, line) in input.lines().enumerate() {
            if line.trim().is_empty() {
                continue;
            }
            rows.push(parse_row(i + 1, line.split_whitespace())?);
        }
        Ok(Self { rows })
    }

    pub fn node_count(&self) -> usize {
        self.rows.len()
    }

    pub fn rows(&self) -> &[Vec<f64>] {
        &self.rows
    }
}

/// Node labels paired with their orbit-count rows.
///
/// The pairing is length-checked at construction so a label list and a
/// matrix that drifted out of step can never be zipped silently.
#[derive(Debug, Clone, PartialEq)]
pub struct Signatures {
    labels: Vec<String>,
    matrix: OrbitMatrix,
}

impl Signatures {
    pub fn pair(labels: Vec<String>, matrix: OrbitMatrix) -> Result<Self, AlignmentError> {
        if labels.len() != matrix.node_count() {
            return Err(AlignmentError {
                labels: labels.len(),
                rows: matrix.node_count(),
            });
        }
        Ok(Self { labels, matrix })
    }

    /// Re-reads a labelled `.ndump2` file: the first field of each line is
    /// the node label, the remaining 73 are orbit counts.
    pub fn parse_ndump2(input: &str) -> Result<Self, FormatError> {
        let mut labels = vec![];
        let mut rows = vec![];
        for (i, line) in input.lines().enumerate() {
            if line.trim().is_empty() {
                continue;
            }
            let mut fields = line.split_whitespace();
            labels.push(String::from(fields.next().unwrap()));
            rows.push(parse_row(i + 1, fields)?);
        }
        Ok(Self {
            labels,
            matrix: OrbitMatrix { rows },
        })
    }

    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    pub fn matrix(&self) -> &OrbitMatrix {
        &self.matrix
    }

    /// Writes `<label> <73 orbit counts>` per node, in original node order.
    pub fn write_ndump2<W: Write>(&self, writer: &mut W) -> io::Result<()> {
        for (label, row) in self.labels.iter().zip(self.matrix.rows()) {
            writeln!(
                writer,
                "{} {}",
                label,
                row.iter().map(|&count| format_count(count)).join(" ")
            )?;
        }
        Ok(())
    }
}

fn parse_row<'a, I>(row: usize, fields: I) -> Result<Vec<f64>, FormatError>
where
    I: Iterator<Item = &'a str>,
{
    let mut counts = vec![];
    for field in fields {
        counts.push(field.parse::<f64>().map_err(|_| FormatError::NonNumeric {
            row,
            field: String::from(field),
        })?);
    }
    if counts.len() != NUM_ORBITS {
        return Err(FormatError::RowWidth {
            row,
            expected: NUM_ORBITS,
            found: counts.len(),
        });
    }
    Ok(counts)
}

// Integral counts print without a trailing ".0".
fn format_count(count: f64) -> String {
    if count.fract() == 0.0 {
        format!("{}", count as i64)
    } else {
        count.to_string()
    }
}
