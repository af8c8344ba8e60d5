//! Instruction Decoder.
//!
//! Turns a raw 32-bit word into an [`Instruction`]. The opcode field picks the
//! class, and only that class's fields are extracted.

use crate::common::error::Fault;

use super::instruction::{IMM_MASK, IMM_SIGN_BIT, Instruction, InstructionBits};
use super::opcodes::{OpClass, Opcode};

/// Sign-extends an 18-bit immediate to a full-width signed integer.
///
/// Bit 17 is the sign bit. When it is set every higher bit of the result is
/// set as well, so `0x3FFFF` becomes `-1` and `0x20000` becomes `-131072`.
/// Bits above 17 in `value` are ignored.
///
/// # Arguments
///
/// * `value` - The raw immediate field; only bits 17:0 are used.
///
/// # Returns
///
/// The immediate as a signed 32-bit integer in `-131072..=131071`.
pub const fn sign_extend(value: u32) -> i32 {
    let raw = value & IMM_MASK;
    if raw & IMM_SIGN_BIT != 0 {
        (raw | !IMM_MASK) as i32
    } else {
        raw as i32
    }
}

/// Decodes a 32-bit instruction word.
///
/// # Arguments
///
/// * `word` - The encoded instruction.
///
/// # Errors
///
/// [`Fault::InvalidOpcode`] when bits 31:28 hold one of the unassigned
/// values 12-15.
pub fn decode(word: u32) -> Result<Instruction, Fault> {
    let Some(op) = Opcode::from_bits(word.opcode()) else {
        return Err(Fault::InvalidOpcode {
            word,
            opcode: word.opcode(),
        });
    };

    Ok(match op.class() {
        OpClass::Register => Instruction::Register {
            op,
            r1: word.r1(),
            r2: word.r2(),
            r3: word.r3(),
        },
        OpClass::Shift => Instruction::Shift {
            op,
            r1: word.r1(),
            r2: word.r2(),
            shamt: word.shamt(),
        },
        OpClass::Immediate => Instruction::Immediate {
            op,
            r1: word.r1(),
            r2: word.r2(),
            imm: sign_extend(word.imm18()),
        },
        OpClass::Jump => Instruction::Jump {
            target: word.target(),
        },
    })
}
