//! CPU Architectural State.
//!
//! This module defines the `Cpu` structure, the container for all state that
//! persists across cycles. It holds the following:
//! 1. **Registers:** The 32-entry register file and the program counter.
//! 2. **Memory:** The unified instruction/data array and the loaded instruction count.
//! 3. **Statistics:** Counters updated by the pipeline stages.
//!
//! Pipeline latches are not part of this state; they live in
//! [`Pipeline`](crate::core::pipeline::engine::Pipeline).

/// Unified instruction/data memory.
pub mod memory;

use crate::common::RegisterFile;
use crate::common::constants::{MEMORY_SIZE, REGISTER_COUNT};
use crate::common::error::SimError;
use crate::config::InitConfig;
use crate::stats::SimStats;

pub use self::memory::Memory;

/// Architectural state of the machine.
#[derive(Clone, Debug, Default)]
pub struct Cpu {
    /// Integer registers; `R0` is hardwired to zero.
    pub regs: RegisterFile,
    /// Program Counter (word address of the next fetch).
    pub pc: u32,
    /// Unified instruction/data memory.
    pub mem: Memory,
    /// Number of words occupied by the loaded program.
    pub instruction_count: u32,
    /// Performance counters.
    pub stats: SimStats,
}

impl Cpu {
    /// Creates a CPU with zeroed registers and memory and no program.
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads a program at address 0 and resets the PC.
    ///
    /// Registers are left unchanged so callers can preset operands first.
    ///
    /// # Arguments
    ///
    /// * `program` - Encoded instruction words.
    ///
    /// # Errors
    ///
    /// [`SimError::ProgramTooLarge`] when the program does not fit in memory.
    pub fn load_program(&mut self, program: &[u32]) -> Result<(), SimError> {
        self.mem.load_program(program)?;
        self.instruction_count = program.len() as u32;
        self.pc = 0;
        Ok(())
    }

    /// Applies initial register and data-memory values.
    ///
    /// Writes to `R0` are accepted and discarded like any other `R0` write.
    ///
    /// # Errors
    ///
    /// [`SimError::InvalidConfig`] when a register index is not below 32, or a
    /// memory address is outside data space (`instruction_count..MEMORY_SIZE`).
    pub fn apply_init(&mut self, init: &InitConfig) -> Result<(), SimError> {
        for (&idx, &val) in &init.registers {
            if idx >= REGISTER_COUNT {
                return Err(SimError::InvalidConfig(format!(
                    "register R{idx} does not exist (R0-R{})",
                    REGISTER_COUNT - 1
                )));
            }
            self.regs.write(idx, val);
        }

        let data_start = self.instruction_count as usize;
        for (&addr, &val) in &init.memory {
            if !(data_start..MEMORY_SIZE).contains(&addr) {
                return Err(SimError::InvalidConfig(format!(
                    "memory preset M[{addr}] outside data space [{data_start}, {MEMORY_SIZE})"
                )));
            }
            self.mem
                .write(addr as u32, val)
                .map_err(|fault| SimError::InvalidConfig(fault.to_string()))?;
        }
        Ok(())
    }
}
