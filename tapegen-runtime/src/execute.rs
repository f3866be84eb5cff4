//! Op execution

use crate::decoder::Op;
use crate::error::{Result, RuntimeError};
use crate::io::IOHandler;
use crate::state::{HaltReason, VMState};
use crate::tape::Tape;
use crate::vm::EofPolicy;

/// Execute a single op and advance the PC
pub fn execute(
    op: &Op,
    state: &mut VMState,
    tape: &mut Tape,
    io: &mut IOHandler,
    eof: EofPolicy,
) -> Result<()> {
    match *op {
        Op::Right => {
            state.head += 1;
            state.pc += 1;
        }

        Op::Left => {
            state.head = state
                .head
                .checked_sub(1)
                .ok_or(RuntimeError::TapeUnderflow { pc: state.pc })?;
            state.pc += 1;
        }

        Op::Increment => {
            tape.increment(state.head);
            state.pc += 1;
        }

        Op::Decrement => {
            tape.decrement(state.head);
            state.pc += 1;
        }

        Op::JumpIfZero(end) => {
            state.pc = if tape.get(state.head) == 0 { end + 1 } else { state.pc + 1 };
        }

        Op::JumpUnlessZero(start) => {
            state.pc = if tape.get(state.head) != 0 { start + 1 } else { state.pc + 1 };
        }

        Op::Write => {
            io.write(tape.get(state.head));
            state.pc += 1;
        }

        Op::Read => {
            match io.read() {
                Some(byte) => tape.set(state.head, byte),
                None => match eof {
                    EofPolicy::Halt => {
                        state.halt(HaltReason::InputExhausted { pc: state.pc });
                        return Ok(());
                    }
                    EofPolicy::Zero => tape.set(state.head, 0),
                    EofPolicy::Unchanged => {}
                },
            }
            state.pc += 1;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn setup(inputs: Vec<u8>) -> (VMState, Tape, IOHandler) {
        (VMState::new(), Tape::new(), IOHandler::new(inputs))
    }

    #[test]
    fn test_move_and_mutate() {
        let (mut state, mut tape, mut io) = setup(vec![]);
        execute(&Op::Right, &mut state, &mut tape, &mut io, EofPolicy::Halt).unwrap();
        execute(&Op::Increment, &mut state, &mut tape, &mut io, EofPolicy::Halt).unwrap();
        assert_eq!(state.head, 1);
        assert_eq!(state.pc, 2);
        assert_eq!(tape.get(1), 1);
    }

    #[test]
    fn test_left_of_zero() {
        let (mut state, mut tape, mut io) = setup(vec![]);
        let err = execute(&Op::Left, &mut state, &mut tape, &mut io, EofPolicy::Halt).unwrap_err();
        assert!(matches!(err, RuntimeError::TapeUnderflow { pc: 0 }));
    }

    #[test]
    fn test_jump_if_zero_skips_loop() {
        let (mut state, mut tape, mut io) = setup(vec![]);
        execute(&Op::JumpIfZero(4), &mut state, &mut tape, &mut io, EofPolicy::Halt).unwrap();
        assert_eq!(state.pc, 5);
    }

    #[test]
    fn test_jump_unless_zero_loops_back() {
        let (mut state, mut tape, mut io) = setup(vec![]);
        tape.set(0, 1);
        state.pc = 4;
        execute(&Op::JumpUnlessZero(1), &mut state, &mut tape, &mut io, EofPolicy::Halt).unwrap();
        assert_eq!(state.pc, 2);
    }

    #[test]
    fn test_read_eof_policies() {
        let (mut state, mut tape, mut io) = setup(vec![]);
        tape.set(0, 9);
        execute(&Op::Read, &mut state, &mut tape, &mut io, EofPolicy::Unchanged).unwrap();
        assert_eq!(tape.get(0), 9);
        execute(&Op::Read, &mut state, &mut tape, &mut io, EofPolicy::Zero).unwrap();
        assert_eq!(tape.get(0), 0);
        execute(&Op::Read, &mut state, &mut tape, &mut io, EofPolicy::Halt).unwrap();
        assert_eq!(state.halt_reason, Some(HaltReason::InputExhausted { pc: 2 }));
    }
}
