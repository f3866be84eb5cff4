//! Virtual Machine for the tape machine

use crate::decoder::{decode, Op};
use crate::error::Result;
use crate::execute::execute;
use crate::io::IOHandler;
use crate::state::{HaltReason, VMState};
use crate::tape::Tape;
use tapegen_spec::Cell;

/// What `,` does when the input is exhausted
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum EofPolicy {
    /// Stop the machine with [`HaltReason::InputExhausted`]
    #[default]
    Halt,
    /// Store zero in the current cell
    Zero,
    /// Leave the current cell as it is
    Unchanged,
}

/// VM configuration
#[derive(Debug, Clone)]
pub struct VMConfig {
    /// Maximum number of cycles before halting
    pub max_cycles: u64,

    /// Log every executed op at trace level
    pub trace: bool,

    /// Behaviour of `,` at end of input
    pub eof: EofPolicy,
}

impl Default for VMConfig {
    fn default() -> Self {
        Self {
            max_cycles: 10_000_000,
            trace: false,
            eof: EofPolicy::Halt,
        }
    }
}

/// Execution result
#[derive(Debug, Clone)]
pub struct ExecutionResult {
    /// Number of cycles executed
    pub cycles: u64,

    /// Output bytes
    pub outputs: Vec<u8>,

    /// Reason for halting
    pub halt_reason: HaltReason,

    /// Final tape contents, up to the highest nonzero cell written
    pub tape: Vec<u8>,
}

impl ExecutionResult {
    /// Final value of `cell`
    pub fn cell(&self, cell: Cell) -> u8 {
        self.tape.get(cell).copied().unwrap_or(0)
    }
}

/// Tape machine interpreter
pub struct VM {
    ops: Vec<Op>,
    state: VMState,
    tape: Tape,
    io: IOHandler,
    config: VMConfig,
}

impl VM {
    /// Decode `program` and prepare it to run on `inputs`
    pub fn new(program: impl AsRef<str>, inputs: Vec<u8>, config: VMConfig) -> Result<Self> {
        let ops = decode(program.as_ref())?;
        Ok(Self {
            ops,
            state: VMState::new(),
            tape: Tape::new(),
            io: IOHandler::new(inputs),
            config,
        })
    }

    /// Run the VM until halt
    pub fn run(mut self) -> Result<ExecutionResult> {
        while !self.state.is_halted() {
            let Some(op) = self.ops.get(self.state.pc).copied() else {
                self.state.halt(HaltReason::Completed);
                break;
            };

            if self.state.cycles >= self.config.max_cycles {
                self.state.halt(HaltReason::CycleLimit);
                break;
            }

            if self.config.trace {
                tracing::trace!(
                    cycle = self.state.cycles,
                    pc = self.state.pc,
                    head = self.state.head,
                    cell = self.tape.get(self.state.head),
                    ?op,
                    "step"
                );
            }

            execute(&op, &mut self.state, &mut self.tape, &mut self.io, self.config.eof)?;
            if self.state.is_halted() {
                break;
            }

            self.state.inc_cycles();
        }

        let halt_reason = self.state.halt_reason.clone().unwrap_or(HaltReason::Completed);
        tracing::debug!(cycles = self.state.cycles, ?halt_reason, "halted");

        Ok(ExecutionResult {
            cycles: self.state.cycles,
            outputs: self.io.take_outputs(),
            halt_reason,
            tape: self.tape.into_cells(),
        })
    }

    /// Get current state (for debugging)
    pub fn state(&self) -> &VMState {
        &self.state
    }

    /// Get the tape (for debugging)
    pub fn tape(&self) -> &Tape {
        &self.tape
    }

    /// Number of decoded ops
    pub fn program_len(&self) -> usize {
        self.ops.len()
    }
}
