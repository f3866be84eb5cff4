//! VM state for the tape machine

use tapegen_spec::Cell;

/// VM state
#[derive(Debug, Clone, Default)]
pub struct VMState {
    /// Index of the next op
    pub pc: usize,

    /// Cell under the head
    pub head: Cell,

    /// Cycle count
    pub cycles: u64,

    /// Halt reason, once halted
    pub halt_reason: Option<HaltReason>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HaltReason {
    /// Ran past the last op
    Completed,
    /// Out of cycles
    CycleLimit,
    /// `,` with no input left under [`EofPolicy::Halt`](crate::EofPolicy::Halt)
    InputExhausted { pc: usize },
}

impl VMState {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn is_halted(&self) -> bool {
        self.halt_reason.is_some()
    }

    /// Halt execution
    pub fn halt(&mut self, reason: HaltReason) {
        self.halt_reason = Some(reason);
    }

    #[inline]
    pub fn inc_cycles(&mut self) {
        self.cycles += 1;
    }
}
