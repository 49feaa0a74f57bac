use super::LedaRule;
use crate::network::NetworkError;
use derive_more::Display;

pub type Result<T> = std::result::Result<T, LedaError>;

#[derive(Debug, Display, PartialEq)]
pub enum LedaError {
    Parse(Box<pest::error::Error<LedaRule>>),
    #[display(fmt = "declared {} nodes but found {}", declared, found)]
    NodeCount { declared: usize, found: usize },
    #[display(fmt = "declared {} edges but found {}", declared, found)]
    EdgeCount { declared: usize, found: usize },
    #[display(fmt = "edge ({}, {}) outside [1, {}]", src, dst, num_nodes)]
    EdgeIndex {
        src: usize,
        dst: usize,
        num_nodes: usize,
    },
    Network(NetworkError),
}

impl std::error::Error for LedaError {}

impl From<pest::error::Error<LedaRule>> for LedaError {
    fn from(e: pest::error::Error<LedaRule>) -> Self {
        LedaError::Parse(Box::new(e))
    }
}

impl From<NetworkError> for LedaError {
    fn from(e: NetworkError) -> Self {
        LedaError::Network(e)
    }
}
