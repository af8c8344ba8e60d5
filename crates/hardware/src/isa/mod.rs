//! Instruction Set Architecture (ISA) Definitions.
//!
//! Contains the opcode table, the 32-bit instruction layout, and the
//! encode/decode/disassemble functions for the twelve-instruction ISA.
//!
//! # Opcode classes
//!
//! * Register: `ADD`, `SUB`, `MUL`, `AND` (`r1 := r2 op r3`).
//! * Shift: `LSL`, `LSR` (`r1 := r2 shifted by a 13-bit amount`).
//! * Immediate: `MOVI`, `JEQ`, `XORI`, `MOVR`, `MOVM` (18-bit signed immediate).
//! * Jump: `JMP` (28-bit absolute target).

/// Instruction decoding and immediate sign extension.
pub mod decode;

/// Instruction disassembler for pipeline tables and tracing.
pub mod disasm;

/// Instruction encoding.
pub mod encode;

/// Decoded instruction record and raw field extraction.
pub mod instruction;

/// Opcode table: numbering, mnemonics, classes and write-back sources.
pub mod opcodes;

pub use decode::{decode, sign_extend};
pub use disasm::disassemble;
pub use encode::encode;
pub use instruction::{Instruction, InstructionBits};
pub use opcodes::{OpClass, Opcode, WbSource};
