//! Instruction Encoder.

use super::instruction::{
    IMM_MASK, Instruction, OPCODE_SHIFT, R1_SHIFT, R2_SHIFT, R3_SHIFT, REG_MASK, SHAMT_MASK,
    TARGET_MASK,
};
use super::opcodes::Opcode;

/// Encodes an instruction into its 32-bit word.
///
/// Bits the class does not define are zero. Register indices are truncated to
/// five bits, the shift amount to thirteen, the immediate to eighteen (undoing
/// sign extension) and the jump target to twenty-eight.
pub const fn encode(inst: &Instruction) -> u32 {
    match *inst {
        Instruction::Register { op, r1, r2, r3 } => {
            header(op, r1, r2) | ((r3 as u32 & REG_MASK) << R3_SHIFT)
        }
        Instruction::Shift { op, r1, r2, shamt } => header(op, r1, r2) | (shamt & SHAMT_MASK),
        Instruction::Immediate { op, r1, r2, imm } => header(op, r1, r2) | (imm as u32 & IMM_MASK),
        Instruction::Jump { target } => {
            (Opcode::Jmp.bits() << OPCODE_SHIFT) | (target & TARGET_MASK)
        }
    }
}

const fn header(op: Opcode, r1: usize, r2: usize) -> u32 {
    (op.bits() << OPCODE_SHIFT)
        | ((r1 as u32 & REG_MASK) << R1_SHIFT)
        | ((r2 as u32 & REG_MASK) << R2_SHIFT)
}
