//! Common types shared by every part of the simulator.
//!
//! This module provides the building blocks used across the codec, the
//! pipeline and the driver loop. It includes:
//! 1. **Constants:** Memory size, register count and the fixed stage latencies.
//! 2. **Error Handling:** Low-level faults, the fatal simulation error and pipeline stage tags.
//! 3. **Register Management:** The 32-entry register file with its hardwired zero register.

/// Common constants used throughout the simulator.
pub mod constants;

/// Error types and pipeline stage tags.
pub mod error;

/// Register file implementation.
pub mod reg;

pub use constants::{MEMORY_SIZE, REGISTER_COUNT};
pub use error::{Fault, PipeStage, SimError};
pub use reg::RegisterFile;
