//! Program Assembly Tests.
//!
//! A bad line is reported and skipped without reserving an address, so the
//! instructions after it move down by one.

use minirisc_core::asm::{AsmError, assemble};
use pretty_assertions::assert_eq;

use crate::common::builder::instruction::{add, movi};

#[test]
fn assembles_consecutive_addresses_from_zero() {
    let program = assemble("ADD R1 R2 R3\nMOVI R4 R0 9\n");
    assert_eq!(program.words, [add(1, 2, 3), movi(4, 0, 9)]);
    assert_eq!(program.lines, [1, 2]);
    assert!(program.diagnostics.is_empty());
}

#[test]
fn blank_and_comment_lines_take_no_address() {
    let source = "; setup\n\n   MOVI R1 R0 1 ; one\n\t\nMOVI R2 R0 2\n";
    let program = assemble(source);
    assert_eq!(program.words, [movi(1, 0, 1), movi(2, 0, 2)]);
    assert_eq!(program.lines, [3, 5]);
}

#[test]
fn unknown_mnemonic_is_skipped_and_later_lines_shift_down() {
    let program = assemble("MOVI R1 R0 1\nFOO R1 R2 R3\nMOVI R2 R0 2\n");

    assert_eq!(program.words, [movi(1, 0, 1), movi(2, 0, 2)]);
    assert_eq!(program.lines, [1, 3]);
    assert_eq!(program.diagnostics.len(), 1);

    let diag = &program.diagnostics[0];
    assert_eq!(diag.line, 2);
    assert_eq!(diag.text, "FOO R1 R2 R3");
    assert_eq!(diag.error, AsmError::UnknownMnemonic("FOO".into()));
    assert_eq!(diag.to_string(), "line 2: unknown instruction `FOO`");
}

#[test]
fn every_bad_line_gets_its_own_diagnostic() {
    let program = assemble("ADD R1 R2\nMOVI R40 R0 1\nMOVI R1 R0 1\nJMP -3\n");
    assert_eq!(program.len(), 1);
    let lines: Vec<_> = program.diagnostics.iter().map(|d| d.line).collect();
    assert_eq!(lines, [1, 2, 4]);
}

#[test]
fn empty_source_is_an_empty_program() {
    let program = assemble("");
    assert!(program.is_empty());
    assert!(program.diagnostics.is_empty());
}
