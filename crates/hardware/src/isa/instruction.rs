//! Instruction encoding layout and the decoded instruction record.
//!
//! Provides the bit-field constants, an extraction trait for raw 32-bit
//! words, and the [`Instruction`] enum whose variants carry exactly the
//! fields of one opcode class.

use std::fmt;

use super::opcodes::Opcode;

/// Bit position of the opcode field (bits 31:28).
pub const OPCODE_SHIFT: u32 = 28;
/// Mask for the 4-bit opcode field after shifting.
pub const OPCODE_MASK: u32 = 0xF;
/// Bit position of the `r1` field (bits 27:23).
pub const R1_SHIFT: u32 = 23;
/// Bit position of the `r2` field (bits 22:18).
pub const R2_SHIFT: u32 = 18;
/// Bit position of the `r3` field (bits 17:13).
pub const R3_SHIFT: u32 = 13;
/// Mask for any 5-bit register field after shifting.
pub const REG_MASK: u32 = 0x1F;
/// Mask for the 13-bit shift amount (bits 12:0).
pub const SHAMT_MASK: u32 = 0x1FFF;
/// Mask for the 18-bit immediate (bits 17:0).
pub const IMM_MASK: u32 = 0x3FFFF;
/// Sign bit of the 18-bit immediate.
pub const IMM_SIGN_BIT: u32 = 1 << 17;
/// Mask for the 28-bit jump target (bits 27:0).
pub const TARGET_MASK: u32 = 0x0FFF_FFFF;

/// Smallest value representable by the signed 18-bit immediate.
pub const IMM_MIN: i32 = -(1 << 17);
/// Largest value representable by the signed 18-bit immediate.
pub const IMM_MAX: i32 = (1 << 17) - 1;

/// Trait for extracting raw instruction fields from an encoded word.
///
/// The extractors do not look at the opcode; reading a field that the
/// word's class does not define yields whatever bits occupy that position.
pub trait InstructionBits {
    /// Extracts the opcode field (bits 31:28).
    fn opcode(&self) -> u32;

    /// Extracts the `r1` field (bits 27:23).
    fn r1(&self) -> usize;

    /// Extracts the `r2` field (bits 22:18).
    fn r2(&self) -> usize;

    /// Extracts the `r3` field (bits 17:13).
    fn r3(&self) -> usize;

    /// Extracts the 13-bit shift amount (bits 12:0).
    fn shamt(&self) -> u32;

    /// Extracts the raw, not yet sign-extended, 18-bit immediate (bits 17:0).
    fn imm18(&self) -> u32;

    /// Extracts the 28-bit jump target (bits 27:0).
    fn target(&self) -> u32;
}

impl InstructionBits for u32 {
    #[inline(always)]
    fn opcode(&self) -> u32 {
        (self >> OPCODE_SHIFT) & OPCODE_MASK
    }

    #[inline(always)]
    fn r1(&self) -> usize {
        ((self >> R1_SHIFT) & REG_MASK) as usize
    }

    #[inline(always)]
    fn r2(&self) -> usize {
        ((self >> R2_SHIFT) & REG_MASK) as usize
    }

    #[inline(always)]
    fn r3(&self) -> usize {
        ((self >> R3_SHIFT) & REG_MASK) as usize
    }

    #[inline(always)]
    fn shamt(&self) -> u32 {
        self & SHAMT_MASK
    }

    #[inline(always)]
    fn imm18(&self) -> u32 {
        self & IMM_MASK
    }

    #[inline(always)]
    fn target(&self) -> u32 {
        self & TARGET_MASK
    }
}

/// A decoded instruction.
///
/// One variant per opcode class, so only the fields that class defines can be
/// named. `op` always belongs to the variant's class when the record comes
/// from [`decode`](super::decode::decode) or the assembler.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Instruction {
    /// `ADD`, `SUB`, `MUL`, `AND`.
    Register {
        /// Operation.
        op: Opcode,
        /// Destination register.
        r1: usize,
        /// First source register.
        r2: usize,
        /// Second source register.
        r3: usize,
    },
    /// `LSL`, `LSR`.
    Shift {
        /// Operation.
        op: Opcode,
        /// Destination register.
        r1: usize,
        /// Source register.
        r2: usize,
        /// Shift amount (0-8191).
        shamt: u32,
    },
    /// `MOVI`, `JEQ`, `XORI`, `MOVR`, `MOVM`.
    Immediate {
        /// Operation.
        op: Opcode,
        /// Destination (or compared / stored) register.
        r1: usize,
        /// Source or base register.
        r2: usize,
        /// Sign-extended immediate.
        imm: i32,
    },
    /// `JMP`.
    Jump {
        /// Absolute 28-bit target address.
        target: u32,
    },
}

impl Instruction {
    /// Returns the opcode of this instruction.
    pub const fn opcode(&self) -> Opcode {
        match *self {
            Self::Register { op, .. } | Self::Shift { op, .. } | Self::Immediate { op, .. } => op,
            Self::Jump { .. } => Opcode::Jmp,
        }
    }


    /// Returns the `r1` register, if the class has one.
    pub const fn r1(&self) -> Option<usize> {
        match *self {
            Self::Register { r1, .. } | Self::Shift { r1, .. } | Self::Immediate { r1, .. } => {
                Some(r1)
            }
            Self::Jump { .. } => None,
        }
    }
}

impl fmt::Display for Instruction {
    /// Formats the instruction in assembler syntax with the mnemonic padded
    /// to four columns, e.g. `ADD  R1 R2 R3` or `JMP  12`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let m = self.opcode().mnemonic();
        match *self {
            Self::Register { r1, r2, r3, .. } => write!(f, "{m:<4} R{r1} R{r2} R{r3}"),
            Self::Shift { r1, r2, shamt, .. } => write!(f, "{m:<4} R{r1} R{r2} {shamt}"),
            Self::Immediate { r1, r2, imm, .. } => write!(f, "{m:<4} R{r1} R{r2} {imm}"),
            Self::Jump { target } => write!(f, "{m:<4} {target}"),
        }
    }
}
