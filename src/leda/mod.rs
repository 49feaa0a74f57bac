//! The LEDA graph-exchange text format.

pub use parser::parse;
pub use writer::write;

pub(crate) use parser::LedaRule;

pub mod error;

mod parser;
mod writer;
