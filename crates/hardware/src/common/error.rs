//! Fault and simulation error definitions.
//!
//! This module defines the error handling for the simulator. It provides:
//! 1. **Faults:** Low-level conditions raised by the codec and the memory array.
//! 2. **Stage Tags:** Identification of the pipeline stage in which a fault was detected.
//! 3. **Simulation Errors:** The fatal error surfaced to callers, carrying cycle, stage and opcode context.

use std::fmt;
use std::path::PathBuf;

use serde::Serialize;

use super::constants::MEMORY_SIZE;

/// Pipeline stage identifiers, in program order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub enum PipeStage {
    /// Instruction fetch (IF).
    Fetch,
    /// Instruction decode (ID).
    Decode,
    /// Execute (EX).
    Execute,
    /// Memory access (MEM).
    Memory,
    /// Register write-back (WB).
    Writeback,
}

impl PipeStage {
    /// All stages in pipeline order, IF first.
    pub const ALL: [Self; 5] = [
        Self::Fetch,
        Self::Decode,
        Self::Execute,
        Self::Memory,
        Self::Writeback,
    ];

    /// Short stage label as printed in pipeline tables (`IF`, `ID`, ...).
    pub const fn label(self) -> &'static str {
        match self {
            Self::Fetch => "IF",
            Self::Decode => "ID",
            Self::Execute => "EX",
            Self::Memory => "MEM",
            Self::Writeback => "WB",
        }
    }
}

impl fmt::Display for PipeStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A low-level fault raised by the codec or the memory array.
///
/// Faults carry no pipeline context; the stage that observes one wraps it
/// into [`SimError::Fault`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum Fault {
    /// The opcode field (bits 31:28) names none of the twelve defined opcodes.
    #[error("invalid opcode {opcode} in instruction word {word:#010x}")]
    InvalidOpcode {
        /// The full instruction word.
        word: u32,
        /// The opcode field value.
        opcode: u32,
    },

    /// A memory access fell outside `[0, MEMORY_SIZE)`.
    #[error("address {addr} outside memory [0, {size})", size = MEMORY_SIZE)]
    AddressOutOfBounds {
        /// The offending word address.
        addr: u32,
    },
}

/// Fatal simulation error.
///
/// Every variant aborts the run. Re-running the same program with the same
/// configuration fails identically.
#[derive(Debug, thiserror::Error)]
pub enum SimError {
    /// A stage faulted while processing an in-flight instruction.
    #[error("cycle {cycle}: {stage} stage faulted on {mnemonic} at address {pc}: {source}")]
    Fault {
        /// Cycle number in which the fault occurred (1-based).
        cycle: u64,
        /// Stage that detected the fault.
        stage: PipeStage,
        /// Mnemonic of the faulting instruction, `???` when it has no valid opcode.
        mnemonic: &'static str,
        /// Address the faulting instruction was fetched from.
        pc: u32,
        /// The underlying fault.
        source: Fault,
    },

    /// The program source could not be read.
    #[error("failed to read program '{}'", path.display())]
    Io {
        /// Path that was being read.
        path: PathBuf,
        /// The I/O error reported by the OS.
        source: std::io::Error,
    },

    /// The configuration file could not be read.
    #[error("failed to read config '{}'", path.display())]
    ConfigIo {
        /// Path that was being read.
        path: PathBuf,
        /// The I/O error reported by the OS.
        source: std::io::Error,
    },

    /// The program has more instructions than memory has words.
    #[error("program of {len} instructions does not fit in {size}-word memory", size = MEMORY_SIZE)]
    ProgramTooLarge {
        /// Number of instruction words in the program.
        len: usize,
    },

    /// The configuration names a register or address that does not exist.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// The caller-imposed cycle cap was reached before the pipeline drained.
    #[error("cycle limit of {limit} reached before the pipeline drained")]
    CycleLimit {
        /// The configured cap.
        limit: u64,
    },
}
