//! # Program Text
//!
//! A [`Program`] holds nothing but the eight instruction symbols, so its text
//! is byte-for-byte valid input for any standard tape machine interpreter.

use crate::error::{Result, SpecError};
use crate::symbol::Symbol;
use std::fmt;

/// Symbol-only program text
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Program {
    text: String,
}

impl Program {
    /// Create an empty program
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a program from arbitrary text, keeping only instruction symbols
    pub fn from_text(text: &str) -> Self {
        Self {
            text: text.chars().filter(|&c| Symbol::is_symbol(c)).collect(),
        }
    }

    /// Build a program from symbols
    pub fn from_symbols<I: IntoIterator<Item = Symbol>>(symbols: I) -> Self {
        Self {
            text: symbols.into_iter().map(Symbol::to_char).collect(),
        }
    }

    /// Parse strict program text; any non-symbol character is rejected
    pub fn parse(text: &str) -> Result<Self> {
        if let Some(c) = text.chars().find(|&c| !Symbol::is_symbol(c)) {
            return Err(SpecError::UnknownSymbol(c));
        }
        Ok(Self {
            text: text.to_string(),
        })
    }

    /// Check that every `[` has a matching `]`
    pub fn validate(&self) -> Result<()> {
        let mut open = Vec::new();
        for (offset, byte) in self.text.bytes().enumerate() {
            match byte {
                b'[' => open.push(offset),
                b']' => {
                    if open.pop().is_none() {
                        return Err(SpecError::UnmatchedLoopEnd { offset });
                    }
                }
                _ => {}
            }
        }
        match open.pop() {
            Some(offset) => Err(SpecError::UnmatchedLoopStart { offset }),
            None => Ok(()),
        }
    }

    /// Iterate over the program's symbols
    pub fn symbols(&self) -> impl Iterator<Item = Symbol> + '_ {
        self.text.chars().filter_map(Symbol::from_char)
    }

    /// Number of symbols
    pub fn len(&self) -> usize {
        self.text.len()
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    pub fn into_string(self) -> String {
        self.text
    }
}

impl fmt::Display for Program {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

impl AsRef<str> for Program {
    fn as_ref(&self) -> &str {
        &self.text
    }
}
