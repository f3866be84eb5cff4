//! # Tape Cell Layout
//!
//! ```text
//! Cell      Region
//! ─────────────────────────────
//! 0..=3     scratch stack slots
//! 4         accumulator
//! 5 + i     named register i
//! ```
//!
//! The layout is fixed. Register addresses are a formula, not a table, so a
//! register key maps to the same cell for the whole life of a generator.

use serde::{Deserialize, Serialize};

/// Cell index on the tape
pub type Cell = usize;

/// Number of scratch stack slots
pub const STACK_SLOTS: usize = 4;

/// Index of the last scratch stack slot
pub const STACK_LAST_INDEX: Cell = STACK_SLOTS - 1;

/// Accumulator cell, directly after the scratch stack
pub const ACCUMULATOR: Cell = STACK_LAST_INDEX + 1;

/// First named register cell
pub const REGISTER_BASE: Cell = ACCUMULATOR + 1;

/// Accumulator cell index
#[inline]
pub const fn accumulator() -> Cell {
    ACCUMULATOR
}

/// Cell index of named register `key`
#[inline]
pub const fn register(key: usize) -> Cell {
    REGISTER_BASE + key
}

/// Cell index of scratch slot `index`, if it exists
#[inline]
pub const fn scratch_slot(index: usize) -> Option<Cell> {
    if index < STACK_SLOTS {
        Some(index)
    } else {
        None
    }
}

/// Region a cell belongs to
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Region {
    /// Scratch stack slot (slot index)
    Scratch(usize),
    /// The accumulator
    Accumulator,
    /// Named register (register key)
    Register(usize),
}

impl Region {
    /// Classify a cell
    pub const fn of(cell: Cell) -> Self {
        if cell < STACK_SLOTS {
            Region::Scratch(cell)
        } else if cell == ACCUMULATOR {
            Region::Accumulator
        } else {
            Region::Register(cell - REGISTER_BASE)
        }
    }

    /// Cell index of this region entry
    pub const fn cell(self) -> Cell {
        match self {
            Region::Scratch(slot) => slot,
            Region::Accumulator => ACCUMULATOR,
            Region::Register(key) => register(key),
        }
    }

    /// Reserved cells are owned by the generator, not the driver
    pub const fn is_reserved(self) -> bool {
        !matches!(self, Region::Register(_))
    }
}

impl std::fmt::Display for Region {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Region::Scratch(slot) => write!(f, "scratch[{}]", slot),
            Region::Accumulator => write!(f, "acc"),
            Region::Register(key) => write!(f, "r{}", key),
        }
    }
}
