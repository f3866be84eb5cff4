//! # Error Types for tape machine programs

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SpecError {
    #[error("Unknown symbol: {0:?}")]
    UnknownSymbol(char),

    #[error("Unmatched '[' at offset {offset}")]
    UnmatchedLoopStart { offset: usize },

    #[error("Unmatched ']' at offset {offset}")]
    UnmatchedLoopEnd { offset: usize },
}

pub type Result<T> = std::result::Result<T, SpecError>;
