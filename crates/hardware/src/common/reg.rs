//! Architectural Register File.
//!
//! This module implements the 32-entry integer register file. It performs the following:
//! 1. **Storage:** Maintains 32 unsigned 32-bit registers (`R0`-`R31`).
//! 2. **Invariant Enforcement:** Ensures that register `R0` is hardwired to zero.
//! 3. **Observability:** Exposes the full register array for dumps and snapshots.

use super::constants::REGISTER_COUNT;

/// Integer register file.
///
/// Register `R0` always reads as zero; writes to it are accepted and discarded.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RegisterFile {
    regs: [u32; REGISTER_COUNT],
}

impl RegisterFile {
    /// Creates a new register file with all registers initialized to zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Reads a register value.
    ///
    /// # Arguments
    ///
    /// * `idx` - Register index (0-31).
    ///
    /// # Returns
    ///
    /// The 32-bit value stored in the register. Register `R0` always returns 0.
    pub fn read(&self, idx: usize) -> u32 {
        if idx == 0 { 0 } else { self.regs[idx] }
    }

    /// Writes a register value.
    ///
    /// # Arguments
    ///
    /// * `idx` - Register index (0-31). Writes to `R0` are ignored.
    /// * `val` - The 32-bit value to write.
    pub fn write(&mut self, idx: usize, val: u32) {
        if idx != 0 {
            self.regs[idx] = val;
        }
    }

    /// Returns the whole register array, `R0` first.
    pub const fn as_array(&self) -> &[u32; REGISTER_COUNT] {
        &self.regs
    }
}
