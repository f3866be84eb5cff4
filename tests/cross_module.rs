//! Cross-module tests
//!
//! Tests that the layout, codegen, and runtime crates agree with each other.

use tapegen_codegen::{generate, Generator};
use tapegen_runtime::{decode, Op, VMConfig, VM};
use tapegen_spec::{layout, Program, Region, Symbol, ACCUMULATOR, STACK_SLOTS};

#[test]
fn test_runtime_decodes_every_symbol() {
    let program = Program::from_symbols(Symbol::ALL);
    let ops = decode(program.as_str()).unwrap();
    assert_eq!(ops.len(), Symbol::ALL.len());
    assert_eq!(ops[0], Op::JumpIfZero(1));
    assert_eq!(ops[1], Op::JumpUnlessZero(0));
}

#[test]
fn test_generated_program_decodes() {
    let program = generate(|g| {
        g.bounded_repeat(2, |g| {
            g.copy(g.register(0), g.register(1))?;
            g.subtract(g.register(1), g.register(0))
        })
    })
    .unwrap();

    assert!(program.validate().is_ok());
    let ops = decode(program.as_str()).unwrap();
    assert_eq!(ops.len(), program.len());
}

#[test]
fn test_reserved_cells_are_clean_after_primitives() {
    let (a, b, c) = (layout::register(0), layout::register(1), layout::register(2));
    let program = generate(|g| {
        g.read_byte_into(a);
        g.read_byte_into(b);
        g.copy(a, c)?;
        g.bounded_repeat(2, |g| {
            g.copy(b, c)?;
            g.bounded_repeat(3, |g| {
                g.move_to(a);
                g.increment(1);
                Ok(())
            })
        })?;
        g.subtract(c, b)
    })
    .unwrap();

    let result = VM::new(&program, vec![10, 3], VMConfig::default())
        .unwrap()
        .run()
        .unwrap();

    for (cell, value) in result.tape.iter().enumerate() {
        if Region::of(cell).is_reserved() {
            assert_eq!(*value, 0, "{} left at {}", Region::of(cell), value);
        }
    }
    assert_eq!(result.cell(a), 16);
    assert_eq!(result.cell(b), 0);
    assert_eq!(result.cell(c), 0);
}

#[test]
fn test_generator_and_spec_agree_on_layout() {
    let g = Generator::new();
    assert_eq!(g.accumulator(), ACCUMULATOR);
    assert_eq!(Region::of(g.accumulator()), Region::Accumulator);
    for key in 0..16 {
        assert_eq!(Region::of(g.register(key)), Region::Register(key));
    }
    assert_eq!(layout::scratch_slot(STACK_SLOTS - 1), Some(layout::STACK_LAST_INDEX));
}

#[test]
fn test_export_full_contains_program_symbols_in_order() {
    let mut g = Generator::new();
    g.annotate("prologue");
    g.set(g.register(4), 3);
    g.bounded_repeat(2, |g| {
        g.write_byte();
        Ok(())
    })
    .unwrap();

    let program = g.export_program();
    let listing = g.export_full();
    let mut remaining = listing.chars();
    for symbol in program.chars() {
        assert!(remaining.any(|c| c == symbol), "{} missing from listing", symbol);
    }
}
