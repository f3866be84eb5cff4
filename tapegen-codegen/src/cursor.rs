//! Cursor tracking

use tapegen_spec::{Cell, Symbol};

/// The generator's view of where the machine's head is
///
/// Starts at cell 0, where every interpreter starts its head.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Cursor {
    position: Cell,
}

impl Cursor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn position(&self) -> Cell {
        self.position
    }

    /// Move to `target`, returning the move instructions for the trip
    ///
    /// The returned text holds exactly `|target - position|` symbols.
    pub fn seek(&mut self, target: Cell) -> String {
        let moves = if self.position < target {
            Symbol::Right.repeat(target - self.position)
        } else {
            Symbol::Left.repeat(self.position - target)
        };
        self.position = target;
        moves
    }
}
