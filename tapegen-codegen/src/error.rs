//! Code generation errors
//!
//! Every error is a scratch stack discipline violation. Instructions emitted
//! before the failure cannot be unwound, so the generator that raised one must
//! be discarded together with its partial output.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CodegenError {
    #[error("Scratch stack overflow: at most {capacity} slots can be held at once")]
    StackOverflow { capacity: usize },

    #[error("Scratch stack underflow: pop without a matching push")]
    StackUnderflow,

    #[error("Scratch stack is empty")]
    EmptyStack,
}

impl CodegenError {
    /// Check if this error ends the compilation
    ///
    /// Always true: partial output stays in the buffer and there is no way to
    /// roll it back.
    pub fn is_fatal(&self) -> bool {
        matches!(
            self,
            CodegenError::StackOverflow { .. }
                | CodegenError::StackUnderflow
                | CodegenError::EmptyStack
        )
    }
}

pub type Result<T> = std::result::Result<T, CodegenError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = CodegenError::StackOverflow { capacity: 4 };
        assert_eq!(
            err.to_string(),
            "Scratch stack overflow: at most 4 slots can be held at once"
        );

        let err = CodegenError::StackUnderflow;
        assert_eq!(err.to_string(), "Scratch stack underflow: pop without a matching push");

        let err = CodegenError::EmptyStack;
        assert_eq!(err.to_string(), "Scratch stack is empty");
    }

    #[test]
    fn test_is_fatal() {
        assert!(CodegenError::StackOverflow { capacity: 4 }.is_fatal());
        assert!(CodegenError::StackUnderflow.is_fatal());
        assert!(CodegenError::EmptyStack.is_fatal());
    }

    #[test]
    fn test_error_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<CodegenError>();
    }
}
