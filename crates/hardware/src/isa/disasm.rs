//! Instruction Disassembler.
//!
//! Converts a 32-bit instruction word into the assembler text used by the
//! pipeline table and trace output.
//!
//! # Usage
//!
//! ```
//! use minirisc_core::isa::disasm::disassemble;
//! let text = disassemble(0x3200_0009); // MOVI R4 R0 9
//! assert_eq!(text, "MOVI R4 R0 9");
//! ```

use super::decode::decode;

/// Text shown for words whose opcode field is unassigned.
pub const INVALID: &str = "???";

/// Disassembles an instruction word.
///
/// Words with an invalid opcode render as `???`.
pub fn disassemble(word: u32) -> String {
    decode(word).map_or_else(|_| INVALID.to_string(), |inst| inst.to_string())
}
