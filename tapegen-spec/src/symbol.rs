//! # Tape Machine Instruction Symbols
//!
//! The tape machine understands exactly eight single-character instructions.
//! Every other character in a program text is ignored by interpreters and is
//! stripped from exported programs.
//!
//! ## Symbol Families
//!
//! - Move: `>` `<` (cursor right, cursor left)
//! - Mutate: `+` `-` (increment, decrement the current cell, wrapping at 256)
//! - Loop: `[` `]` (enter while the current cell is nonzero, jump back while nonzero)
//! - I/O: `,` `.` (read one byte into the current cell, write the current cell)

use serde::{Deserialize, Serialize};

/// Tape machine instruction, stored as its ASCII byte
#[repr(u8)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Symbol {
    /// `>`: move the cursor one cell right
    Right = b'>',
    /// `<`: move the cursor one cell left
    Left = b'<',
    /// `+`: increment the current cell (wrapping)
    Increment = b'+',
    /// `-`: decrement the current cell (wrapping)
    Decrement = b'-',
    /// `[`: skip past the matching `]` if the current cell is zero
    LoopStart = b'[',
    /// `]`: jump back to the matching `[` if the current cell is nonzero
    LoopEnd = b']',
    /// `.`: write the current cell to the output
    Write = b'.',
    /// `,`: read one input byte into the current cell
    Read = b',',
}

/// Symbol family
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SymbolFamily {
    Move,
    Mutate,
    Loop,
    Io,
}

impl Symbol {
    /// All eight symbols, in the order `[ ] > < + - . ,`
    pub const ALL: [Symbol; 8] = [
        Symbol::LoopStart,
        Symbol::LoopEnd,
        Symbol::Right,
        Symbol::Left,
        Symbol::Increment,
        Symbol::Decrement,
        Symbol::Write,
        Symbol::Read,
    ];

    /// Try to convert from a character
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            '>' => Some(Symbol::Right),
            '<' => Some(Symbol::Left),
            '+' => Some(Symbol::Increment),
            '-' => Some(Symbol::Decrement),
            '[' => Some(Symbol::LoopStart),
            ']' => Some(Symbol::LoopEnd),
            '.' => Some(Symbol::Write),
            ',' => Some(Symbol::Read),
            _ => None,
        }
    }

    /// Convert to the ASCII byte
    #[inline]
    pub const fn to_u8(self) -> u8 {
        self as u8
    }

    /// Convert to the instruction character
    #[inline]
    pub const fn to_char(self) -> char {
        self as u8 as char
    }

    /// Check whether a character is one of the eight instructions
    #[inline]
    pub fn is_symbol(c: char) -> bool {
        Self::from_char(c).is_some()
    }

    /// Get the family of this symbol
    pub const fn family(self) -> SymbolFamily {
        match self {
            Symbol::Right | Symbol::Left => SymbolFamily::Move,
            Symbol::Increment | Symbol::Decrement => SymbolFamily::Mutate,
            Symbol::LoopStart | Symbol::LoopEnd => SymbolFamily::Loop,
            Symbol::Write | Symbol::Read => SymbolFamily::Io,
        }
    }

    /// Symbol repeated `count` times, as emitted text
    pub fn repeat(self, count: usize) -> String {
        std::iter::repeat(self.to_char()).take(count).collect()
    }
}

impl std::fmt::Display for Symbol {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_char())
    }
}

impl std::fmt::Display for SymbolFamily {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            SymbolFamily::Move => "move",
            SymbolFamily::Mutate => "mutate",
            SymbolFamily::Loop => "loop",
            SymbolFamily::Io => "io",
        };
        write!(f, "{}", name)
    }
}
