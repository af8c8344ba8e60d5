//! Opcode table.
//!
//! Every stage that needs to know what an instruction does asks this table:
//! Decode uses [`Opcode::class`] to pick the field layout, Execute dispatches on
//! the opcode itself, and Write-back uses [`Opcode::writeback`] to decide which
//! result (if any) lands in `r1`.

use std::fmt;

/// The twelve defined opcodes, numbered as encoded in bits 31:28.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Opcode {
    /// `r1 := r2 + r3`
    Add = 0,
    /// `r1 := r2 - r3`
    Sub = 1,
    /// `r1 := r2 * r3`
    Mul = 2,
    /// `r1 := imm`
    Movi = 3,
    /// Branch to `pc + 1 + imm` when `r1 == r2`.
    Jeq = 4,
    /// `r1 := r2 & r3`
    And = 5,
    /// `r1 := r2 ^ imm`
    Xori = 6,
    /// `pc[27:0] := target`
    Jmp = 7,
    /// `r1 := r2 << shamt`
    Lsl = 8,
    /// `r1 := r2 >> shamt` (logical)
    Lsr = 9,
    /// Load: `r1 := mem[r2 + imm]`
    Movr = 10,
    /// Store: `mem[r2 + imm] := r1`
    Movm = 11,
}

/// Bit layout family shared by a group of opcodes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum OpClass {
    /// `op | r1 | r2 | r3 | 0`
    Register,
    /// `op | r1 | r2 | shamt[12:0]`
    Shift,
    /// `op | r1 | r2 | imm[17:0]`
    Immediate,
    /// `op | target[27:0]`
    Jump,
}

/// Which result, if any, Write-back stores into `r1`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum WbSource {
    /// Nothing is written (branches, jumps, stores).
    None,
    /// The value produced by Execute.
    Alu,
    /// The value read by the Memory stage.
    Load,
}

impl Opcode {
    /// Every opcode in numeric order.
    pub const ALL: [Self; 12] = [
        Self::Add,
        Self::Sub,
        Self::Mul,
        Self::Movi,
        Self::Jeq,
        Self::And,
        Self::Xori,
        Self::Jmp,
        Self::Lsl,
        Self::Lsr,
        Self::Movr,
        Self::Movm,
    ];

    /// Looks up an opcode by its 4-bit field value.
    ///
    /// Returns `None` for the four unassigned values (12-15) and anything wider.
    pub fn from_bits(bits: u32) -> Option<Self> {
        Self::ALL.get(bits as usize).copied()
    }

    /// The 4-bit field value of this opcode.
    pub const fn bits(self) -> u32 {
        self as u32
    }

    /// Looks up an opcode by mnemonic, ignoring ASCII case.
    pub fn from_mnemonic(text: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|op| op.mnemonic().eq_ignore_ascii_case(text))
    }

    /// Canonical upper-case mnemonic.
    pub const fn mnemonic(self) -> &'static str {
        match self {
            Self::Add => "ADD",
            Self::Sub => "SUB",
            Self::Mul => "MUL",
            Self::Movi => "MOVI",
            Self::Jeq => "JEQ",
            Self::And => "AND",
            Self::Xori => "XORI",
            Self::Jmp => "JMP",
            Self::Lsl => "LSL",
            Self::Lsr => "LSR",
            Self::Movr => "MOVR",
            Self::Movm => "MOVM",
        }
    }

    /// Bit layout used to encode this opcode's operands.
    pub const fn class(self) -> OpClass {
        match self {
            Self::Add | Self::Sub | Self::Mul | Self::And => OpClass::Register,
            Self::Lsl | Self::Lsr => OpClass::Shift,
            Self::Movi | Self::Jeq | Self::Xori | Self::Movr | Self::Movm => OpClass::Immediate,
            Self::Jmp => OpClass::Jump,
        }
    }

    /// Result written to `r1` at Write-back.
    pub const fn writeback(self) -> WbSource {
        match self {
            Self::Add
            | Self::Sub
            | Self::Mul
            | Self::Movi
            | Self::And
            | Self::Xori
            | Self::Lsl
            | Self::Lsr => WbSource::Alu,
            Self::Movr => WbSource::Load,
            Self::Jeq | Self::Jmp | Self::Movm => WbSource::None,
        }
    }
}

impl fmt::Display for Opcode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.mnemonic())
    }
}
