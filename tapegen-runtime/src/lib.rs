//! # Tape Machine Runtime
//!
//! Reference interpreter for the eight-symbol tape machine, used to check
//! generated programs end to end.
//!
//! ## Features
//!
//! - **Byte cells**: wrapping increment and decrement
//! - **Unbounded tape**: grows to the right; moving left of cell 0 is an error
//! - **Pre-resolved loops**: brackets are matched once at decode time
//! - **Comment tolerant**: every non-symbol byte is skipped
//! - **Configurable EOF**: halt, store zero, or leave the cell unchanged
//!
//! ## Example
//!
//! ```rust
//! use tapegen_runtime::{VM, VMConfig};
//!
//! let vm = VM::new(",>,[-<+>]<.", vec![5, 7], VMConfig::default()).unwrap();
//! let result = vm.run().unwrap();
//! assert_eq!(result.outputs, vec![12]);
//! ```

pub mod error;
pub mod decoder;
pub mod tape;
pub mod io;
pub mod state;
pub mod execute;
pub mod vm;

pub use decoder::{decode, Op, Token};
pub use error::RuntimeError;
pub use io::IOHandler;
pub use state::{HaltReason, VMState};
pub use tape::Tape;
pub use vm::{EofPolicy, ExecutionResult, VMConfig, VM};

/// Simple execution helper
///
/// Runs a program with the given inputs and returns the outputs.
pub fn run(program: impl AsRef<str>, inputs: Vec<u8>) -> Result<Vec<u8>, RuntimeError> {
    let vm = VM::new(program, inputs, VMConfig::default())?;
    Ok(vm.run()?.outputs)
}
