//! # Program Decoder
//!
//! Lexes program text into operations and resolves every loop bracket to its
//! partner, so the interpreter never scans for brackets at run time. Any byte
//! that is not one of the eight symbols is skipped, the same way standard
//! interpreters treat comments.

use crate::error::Result;
use logos::Logos;
use tapegen_spec::SpecError;

/// Tokens of tape machine text
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq)]
#[logos(skip r"[^\[\]<>+\-.,]+")] // Everything else is commentary
pub enum Token {
    #[token(">")]
    Right,

    #[token("<")]
    Left,

    #[token("+")]
    Increment,

    #[token("-")]
    Decrement,

    #[token("[")]
    LoopStart,

    #[token("]")]
    LoopEnd,

    #[token(".")]
    Write,

    #[token(",")]
    Read,
}

/// Decoded operation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Op {
    Right,
    Left,
    Increment,
    Decrement,
    /// `[`: jump past the op at this index when the cell is zero
    JumpIfZero(usize),
    /// `]`: jump back past the op at this index when the cell is nonzero
    JumpUnlessZero(usize),
    Write,
    Read,
}

/// Decode program text into operations with resolved jump targets
pub fn decode(text: &str) -> Result<Vec<Op>> {
    let mut ops = Vec::new();
    // (op index, source offset) of each open bracket
    let mut open: Vec<(usize, usize)> = Vec::new();

    let mut lexer = Token::lexer(text);
    while let Some(token) = lexer.next() {
        let offset = lexer.span().start;
        // The skip pattern covers every non-symbol byte, so lexing cannot fail
        let Ok(token) = token else { continue };
        let op = match token {
            Token::Right => Op::Right,
            Token::Left => Op::Left,
            Token::Increment => Op::Increment,
            Token::Decrement => Op::Decrement,
            Token::Write => Op::Write,
            Token::Read => Op::Read,
            Token::LoopStart => {
                open.push((ops.len(), offset));
                // Patched when the matching `]` arrives
                Op::JumpIfZero(usize::MAX)
            }
            Token::LoopEnd => {
                let (start, _) = open
                    .pop()
                    .ok_or(SpecError::UnmatchedLoopEnd { offset })?;
                let end = ops.len();
                ops[start] = Op::JumpIfZero(end);
                Op::JumpUnlessZero(start)
            }
        };
        ops.push(op);
    }

    if let Some((_, offset)) = open.pop() {
        return Err(SpecError::UnmatchedLoopStart { offset }.into());
    }

    Ok(ops)
}
