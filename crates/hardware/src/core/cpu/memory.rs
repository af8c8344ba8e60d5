//! Unified instruction/data memory.
//!
//! This module implements the flat word-addressed memory array. It performs the following:
//! 1. **Storage:** Holds `MEMORY_SIZE` 32-bit words, zeroed at creation.
//! 2. **Bounds Checking:** Rejects every access outside `[0, MEMORY_SIZE)` with a fault.
//! 3. **Program Loading:** Lays instruction words down from address 0.

use crate::common::constants::MEMORY_SIZE;
use crate::common::error::{Fault, SimError};

/// Word-addressed memory holding the program followed by data space.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Memory {
    words: Vec<u32>,
}

impl Default for Memory {
    fn default() -> Self {
        Self::new()
    }
}

impl Memory {
    /// Creates a zero-filled memory of `MEMORY_SIZE` words.
    pub fn new() -> Self {
        Self {
            words: vec![0; MEMORY_SIZE],
        }
    }

    /// Reads the word at `addr`.
    ///
    /// # Errors
    ///
    /// [`Fault::AddressOutOfBounds`] when `addr >= MEMORY_SIZE`.
    pub fn read(&self, addr: u32) -> Result<u32, Fault> {
        self.words
            .get(addr as usize)
            .copied()
            .ok_or(Fault::AddressOutOfBounds { addr })
    }

    /// Writes `val` to the word at `addr`.
    ///
    /// # Errors
    ///
    /// [`Fault::AddressOutOfBounds`] when `addr >= MEMORY_SIZE`; memory is left untouched.
    pub fn write(&mut self, addr: u32, val: u32) -> Result<(), Fault> {
        let slot = self
            .words
            .get_mut(addr as usize)
            .ok_or(Fault::AddressOutOfBounds { addr })?;
        *slot = val;
        Ok(())
    }

    /// Clears memory and copies `program` to consecutive addresses from 0.
    ///
    /// # Errors
    ///
    /// [`SimError::ProgramTooLarge`] when the program has more words than memory.
    pub fn load_program(&mut self, program: &[u32]) -> Result<(), SimError> {
        if program.len() > MEMORY_SIZE {
            return Err(SimError::ProgramTooLarge { len: program.len() });
        }
        self.words.fill(0);
        self.words[..program.len()].copy_from_slice(program);
        Ok(())
    }

    /// Returns the whole memory array.
    pub fn as_slice(&self) -> &[u32] {
        &self.words
    }

    /// Iterates over the non-zero words at addresses `start..MEMORY_SIZE`.
    pub fn nonzero_from(&self, start: usize) -> impl Iterator<Item = (usize, u32)> + '_ {
        self.words
            .iter()
            .copied()
            .enumerate()
            .skip(start)
            .filter(|&(_, w)| w != 0)
    }
}
