//! # Scratch Stack
//!
//! Four loop-counter slots living in tape cells `0..=3`. Slot addresses are
//! handed out bottom-up, so the slot at depth `d` is always cell `d - 1`.

use crate::error::{CodegenError, Result};
use tapegen_spec::{Cell, STACK_SLOTS};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScratchStack {
    depth: usize,
}

impl ScratchStack {
    pub fn new() -> Self {
        Self::default()
    }

    /// Claim the next slot and return its cell
    pub fn push(&mut self) -> Result<Cell> {
        if self.depth == STACK_SLOTS {
            tracing::warn!(capacity = STACK_SLOTS, "scratch stack overflow");
            return Err(CodegenError::StackOverflow {
                capacity: STACK_SLOTS,
            });
        }
        self.depth += 1;
        let slot = self.depth - 1;
        tracing::debug!(slot, depth = self.depth, "scratch push");
        Ok(slot)
    }

    /// Release the top slot
    pub fn pop(&mut self) -> Result<()> {
        if self.depth == 0 {
            tracing::warn!("scratch stack underflow");
            return Err(CodegenError::StackUnderflow);
        }
        self.depth -= 1;
        tracing::debug!(depth = self.depth, "scratch pop");
        Ok(())
    }

    /// Cell of the top slot
    pub fn top(&self) -> Result<Cell> {
        self.depth.checked_sub(1).ok_or_else(|| {
            tracing::warn!("scratch stack empty");
            CodegenError::EmptyStack
        })
    }

    /// Number of slots currently held
    pub fn depth(&self) -> usize {
        self.depth
    }

    pub fn is_empty(&self) -> bool {
        self.depth == 0
    }
}
