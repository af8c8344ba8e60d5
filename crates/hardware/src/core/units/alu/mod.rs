//! Arithmetic Logic Unit (ALU).
//!
//! This module implements the integer ALU used in the Execute stage.
//! All arithmetic wraps at 32 bits.
//!
//! Operations are organized into submodules by category:
//! - [`arithmetic`]: Add, Sub, Mul
//! - [`logic`]:      And, Xor
//! - [`shifts`]:     Sll, Srl

/// Integer arithmetic operations (add, subtract, multiply).
pub mod arithmetic;

/// Bitwise logical operations (and, xor).
pub mod logic;

/// Shift operations (sll, srl).
pub mod shifts;

use crate::isa::Opcode;

/// Operation selected for the ALU.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AluOp {
    /// `a + b`
    Add,
    /// `a - b`
    Sub,
    /// `a * b`
    Mul,
    /// `a & b`
    And,
    /// `a ^ b`
    Xor,
    /// `a << b`
    Sll,
    /// `a >> b` (logical)
    Srl,
    /// `b` passed through unchanged.
    PassB,
}

impl AluOp {
    /// Maps an opcode to the ALU operation Execute performs for it.
    ///
    /// Loads and stores use [`AluOp::Add`] to form the effective address.
    /// Branches and jumps do not use the ALU and return `None`.
    pub const fn from_opcode(op: Opcode) -> Option<Self> {
        Some(match op {
            Opcode::Add | Opcode::Movr | Opcode::Movm => Self::Add,
            Opcode::Sub => Self::Sub,
            Opcode::Mul => Self::Mul,
            Opcode::And => Self::And,
            Opcode::Xori => Self::Xor,
            Opcode::Lsl => Self::Sll,
            Opcode::Lsr => Self::Srl,
            Opcode::Movi => Self::PassB,
            Opcode::Jeq | Opcode::Jmp => return None,
        })
    }
}

/// Arithmetic Logic Unit (ALU) for integer operations.
#[derive(Debug)]
pub struct Alu;

impl Alu {
    /// Executes an integer ALU operation.
    ///
    /// # Arguments
    ///
    /// * `op` - The ALU operation to perform
    /// * `a`  - First operand
    /// * `b`  - Second operand (also used as shift amount)
    ///
    /// # Examples
    ///
    /// ```
    /// use minirisc_core::core::units::alu::{Alu, AluOp};
    ///
    /// assert_eq!(Alu::execute(AluOp::Add, 4, 5), 9);
    /// assert_eq!(Alu::execute(AluOp::Sub, 0, 1), u32::MAX);
    /// assert_eq!(Alu::execute(AluOp::Sll, 1, 40), 0);
    /// ```
    pub fn execute(op: AluOp, a: u32, b: u32) -> u32 {
        match op {
            AluOp::Add | AluOp::Sub | AluOp::Mul => arithmetic::execute(op, a, b),
            AluOp::And | AluOp::Xor => logic::execute(op, a, b),
            AluOp::Sll | AluOp::Srl => shifts::execute(op, a, b),
            AluOp::PassB => b,
        }
    }
}
