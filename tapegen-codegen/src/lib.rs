//! Tape Machine Code Generator
//!
//! Lower register-transfer operations into programs for the eight-symbol tape
//! machine without tracking the head position or loop nesting by hand.
//!
//! ## Example
//!
//! ```rust
//! use tapegen_codegen::generate;
//!
//! let program = generate(|g| {
//!     let (a, b) = (g.register(0), g.register(1));
//!     g.read_byte_into(a);
//!     g.read_byte_into(b);
//!     g.add(a, b)?;
//!     g.write_byte_from(a);
//!     Ok(())
//! })
//! .unwrap();
//!
//! assert_eq!(program.as_str(), ">>>>>,>,[-<+>]<.");
//! ```

pub mod error;
pub mod buffer;
pub mod cursor;
pub mod stack;
pub mod generator;

pub use error::{CodegenError, Result};
pub use buffer::InstructionBuffer;
pub use cursor::Cursor;
pub use stack::ScratchStack;
pub use generator::Generator;

use tapegen_spec::Program;

/// Run `driver` against a fresh generator and return the compiled program
///
/// On error the partial output is dropped along with the generator.
pub fn generate<F>(driver: F) -> Result<Program>
where
    F: FnOnce(&mut Generator) -> Result<()>,
{
    let mut generator = Generator::new();
    driver(&mut generator)?;
    Ok(generator.program())
}
