//! # Generator
//!
//! One [`Generator`] is one compilation. It owns the cursor, the scratch stack
//! and the instruction buffer, and every primitive below is built from cursor
//! moves plus the single count-down loop form.
//!
//! Loop bodies are closures that receive the generator back. A body runs once
//! at generation time; the emitted loop decides how often it runs on the
//! machine.

use crate::buffer::InstructionBuffer;
use crate::cursor::Cursor;
use crate::error::Result;
use crate::stack::ScratchStack;
use tapegen_spec::{layout, Cell, Program, Symbol};

/// Code generator for the tape machine
#[derive(Debug, Clone, Default)]
pub struct Generator {
    buffer: InstructionBuffer,
    cursor: Cursor,
    stack: ScratchStack,
}

impl Generator {
    pub fn new() -> Self {
        Self::default()
    }

    // ========== Cursor and addressing ==========

    /// Cell the machine's head is at, as far as the generator knows
    pub fn cursor(&self) -> Cell {
        self.cursor.position()
    }

    pub fn accumulator(&self) -> Cell {
        layout::accumulator()
    }

    /// Cell of named register `key`
    pub fn register(&self, key: usize) -> Cell {
        layout::register(key)
    }

    /// Move the head to `target` with the fewest possible moves
    pub fn move_to(&mut self, target: Cell) {
        let moves = self.cursor.seek(target);
        self.buffer.emit(&moves);
    }

    pub fn move_to_accumulator(&mut self) {
        self.move_to(layout::accumulator());
    }

    // ========== Emission ==========

    /// Append raw instruction text at the current indentation
    pub fn emit(&mut self, text: &str) {
        self.buffer.emit(text);
    }

    /// Append a comment line to the debug listing
    pub fn annotate(&mut self, text: &str) {
        self.buffer.annotate(text);
    }

    /// Debug listing with indentation and comments
    pub fn export_full(&self) -> String {
        self.buffer.export_full()
    }

    /// Final program text, instruction symbols only
    pub fn export_program(&self) -> String {
        self.buffer.export_program()
    }

    pub fn program(&self) -> Program {
        Program::from_text(&self.buffer.export_program())
    }

    // ========== Cell primitives ==========

    /// Add `n` to the current cell
    pub fn increment(&mut self, n: usize) {
        self.buffer.emit(&Symbol::Increment.repeat(n));
    }

    /// Subtract `n` from the current cell
    pub fn decrement(&mut self, n: usize) {
        self.buffer.emit(&Symbol::Decrement.repeat(n));
    }

    /// Zero `cell`
    pub fn clear(&mut self, cell: Cell) {
        self.move_to(cell);
        self.buffer.emit("[-]");
    }

    /// Set `cell` to `value`
    pub fn set(&mut self, cell: Cell, value: u8) {
        self.clear(cell);
        self.increment(value as usize);
    }

    pub fn set_accumulator(&mut self, value: u8) {
        self.set(layout::accumulator(), value);
    }

    /// Read one input byte into the current cell
    pub fn read_byte(&mut self) {
        self.buffer.emit(&Symbol::Read.to_string());
    }

    /// Write the current cell to the output
    pub fn write_byte(&mut self) {
        self.buffer.emit(&Symbol::Write.to_string());
    }

    pub fn read_byte_into(&mut self, cell: Cell) {
        self.move_to(cell);
        self.read_byte();
    }

    pub fn write_byte_from(&mut self, cell: Cell) {
        self.move_to(cell);
        self.write_byte();
    }

    // ========== Loops ==========

    /// Run `body` once per unit of `cell`, leaving `cell` at zero
    ///
    /// Emits `[-` at `cell`, the body, a move back to `cell` and `]`.
    pub fn count_down<F>(&mut self, cell: Cell, body: F) -> Result<()>
    where
        F: FnOnce(&mut Self) -> Result<()>,
    {
        self.move_to(cell);
        self.buffer.emit(&Symbol::LoopStart.to_string());
        self.buffer.indent();
        self.decrement(1);
        body(self)?;
        self.move_to(cell);
        self.buffer.dedent();
        self.buffer.emit(&Symbol::LoopEnd.to_string());
        Ok(())
    }

    /// [`count_down`](Self::count_down) on the accumulator
    pub fn count_down_accumulator<F>(&mut self, body: F) -> Result<()>
    where
        F: FnOnce(&mut Self) -> Result<()>,
    {
        self.count_down(layout::accumulator(), body)
    }

    /// Run `body` `n` times, each time starting from the current cursor
    ///
    /// Holds one scratch slot as the counter for the duration of the loop.
    pub fn bounded_repeat<F>(&mut self, n: u8, body: F) -> Result<()>
    where
        F: FnOnce(&mut Self) -> Result<()>,
    {
        let origin = self.cursor();
        let slot = self.push(n)?;
        tracing::debug!(n, slot, origin, "bounded repeat");
        self.count_down(slot, move |g| {
            g.move_to(origin);
            body(g)
        })?;
        self.pop()?;
        self.move_to(origin);
        Ok(())
    }

    // ========== Scratch stack ==========

    /// Claim a scratch slot and set it to `initial_value`
    pub fn push(&mut self, initial_value: u8) -> Result<Cell> {
        let slot = self.stack.push()?;
        self.set(slot, initial_value);
        Ok(slot)
    }

    pub fn pop(&mut self) -> Result<()> {
        self.stack.pop()
    }

    /// Cell of the innermost held scratch slot
    pub fn top(&self) -> Result<Cell> {
        self.stack.top()
    }

    /// Number of scratch slots held
    pub fn depth(&self) -> usize {
        self.stack.depth()
    }

    // ========== Register transfer ==========

    /// Copy `from` into `to`, leaving `from` unchanged
    ///
    /// The value travels through the accumulator, which must be zero on entry
    /// and is zero again on exit. Nesting another accumulator user inside a
    /// copy corrupts both.
    pub fn copy(&mut self, from: Cell, to: Cell) -> Result<()> {
        self.clear(to);
        self.count_down(from, |g| {
            g.move_to_accumulator();
            g.increment(1);
            g.move_to(to);
            g.increment(1);
            Ok(())
        })?;
        self.count_down_accumulator(|g| {
            g.move_to(from);
            g.increment(1);
            Ok(())
        })
    }

    /// `sum += b`, draining `b` to zero
    pub fn add(&mut self, sum: Cell, b: Cell) -> Result<()> {
        self.count_down(b, |g| {
            g.move_to(sum);
            g.increment(1);
            Ok(())
        })
    }

    /// `a -= b`, draining `b` to zero
    pub fn subtract(&mut self, a: Cell, b: Cell) -> Result<()> {
        self.count_down(b, |g| {
            g.move_to(a);
            g.decrement(1);
            Ok(())
        })
    }
}
