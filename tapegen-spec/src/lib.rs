//! # Tape Machine Specification
//!
//! Instruction set and cell layout shared by the generator and the runtime.
//!
//! ## Key Features
//! - Eight single-character instructions: `[ ] > < + - . ,`
//! - Byte cells with wraparound arithmetic
//! - Fixed cell layout: 4 scratch slots, one accumulator, then named registers
//! - Symbol-only [`Program`] text, valid for any standard interpreter

pub mod symbol;
pub mod layout;
pub mod error;
pub mod program;

pub use symbol::{Symbol, SymbolFamily};
pub use layout::{Cell, Region, ACCUMULATOR, REGISTER_BASE, STACK_LAST_INDEX, STACK_SLOTS};
pub use error::SpecError;
pub use program::Program;
