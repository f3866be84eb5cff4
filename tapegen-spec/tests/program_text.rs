//! Integration tests for program text and the cell layout

use tapegen_spec::{layout, Program, Region, SpecError, Symbol, SymbolFamily};

// ============================================================================
// Program Text Tests
// ============================================================================

#[test]
fn test_debug_listing_filters_to_program() {
    let listing = r#"
# read r0
>>>>>
,
# add
[
  -
  <
  +
  >
]
"#;
    let program = Program::from_text(listing);
    assert_eq!(program.as_str(), ">>>>>,[-<+>]");
    assert!(program.validate().is_ok());
}

#[test]
fn test_every_symbol_survives_filtering() {
    let program = Program::from_text("[]><+-.,");
    assert_eq!(program.len(), 8);
    let symbols: Vec<Symbol> = program.symbols().collect();
    assert_eq!(symbols, Symbol::ALL.to_vec());
}

#[test]
fn test_non_symbol_bytes_removed() {
    let program = Program::from_text("abc xyz 123 !@#$%^&*() \t\r\n{}");
    assert!(program.is_empty());
}

#[test]
fn test_nested_loops_validate() {
    let program = Program::from_text("++[>++[>+<-]<-]");
    assert!(program.validate().is_ok());
}

#[test]
fn test_unbalanced_loops_report_offset() {
    let err = Program::from_text("[[]").validate().unwrap_err();
    assert_eq!(err, SpecError::UnmatchedLoopStart { offset: 0 });

    let err = Program::from_text("[]]").validate().unwrap_err();
    assert_eq!(err, SpecError::UnmatchedLoopEnd { offset: 2 });
}

#[test]
fn test_families_cover_all_symbols() {
    let moves = Symbol::ALL
        .iter()
        .filter(|s| s.family() == SymbolFamily::Move)
        .count();
    let io = Symbol::ALL
        .iter()
        .filter(|s| s.family() == SymbolFamily::Io)
        .count();
    assert_eq!(moves, 2);
    assert_eq!(io, 2);
}

// ============================================================================
// Layout Tests
// ============================================================================

#[test]
fn test_reserved_region_is_disjoint_from_registers() {
    for slot in 0..layout::STACK_SLOTS {
        assert!(Region::of(slot).is_reserved());
    }
    assert!(Region::of(layout::accumulator()).is_reserved());
    for key in 0..64 {
        assert!(!Region::of(layout::register(key)).is_reserved());
    }
}

#[test]
fn test_register_addresses_are_stable() {
    let first = layout::register(7);
    let second = layout::register(7);
    assert_eq!(first, second);
    assert_eq!(first, 12);
}
