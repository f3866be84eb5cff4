//! Tape of byte cells

use tapegen_spec::Cell;

/// Right-unbounded tape; cells past the written end read as zero
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Tape {
    cells: Vec<u8>,
}

impl Tape {
    pub fn new() -> Self {
        Self::default()
    }

    /// Value of `cell`
    pub fn get(&self, cell: Cell) -> u8 {
        self.cells.get(cell).copied().unwrap_or(0)
    }

    pub fn set(&mut self, cell: Cell, value: u8) {
        if cell >= self.cells.len() {
            if value == 0 {
                return;
            }
            self.cells.resize(cell + 1, 0);
        }
        self.cells[cell] = value;
    }

    pub fn increment(&mut self, cell: Cell) {
        let value = self.get(cell).wrapping_add(1);
        self.set(cell, value);
    }

    pub fn decrement(&mut self, cell: Cell) {
        let value = self.get(cell).wrapping_sub(1);
        self.set(cell, value);
    }

    /// Cells written so far, up to the highest nonzero write
    pub fn cells(&self) -> &[u8] {
        &self.cells
    }

    pub fn into_cells(self) -> Vec<u8> {
        self.cells
    }
}
