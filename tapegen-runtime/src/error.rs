//! Runtime error types

use tapegen_spec::SpecError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RuntimeError {
    #[error("Spec error: {0}")]
    SpecError(#[from] SpecError),

    #[error("Head moved left of cell 0 at PC {pc}")]
    TapeUnderflow { pc: usize },
}

pub type Result<T> = std::result::Result<T, RuntimeError>;
