//! Global System Constants.
//!
//! This module defines the fixed machine parameters. It includes:
//! 1. **Storage Constants:** Memory size in words and the register count.
//! 2. **Timing Constants:** Decode and execute latencies and the branch fetch stall.
//! 3. **Front-end Constants:** The maximum source line length.

/// Number of 32-bit words in the unified instruction/data memory.
pub const MEMORY_SIZE: usize = 2048;

/// Number of architectural registers (`R0`-`R31`).
pub const REGISTER_COUNT: usize = 32;

/// Cycles an instruction spends in ID before it may advance to EX.
pub const DECODE_LATENCY: u8 = 2;

/// Cycles an instruction spends in EX before its result is produced.
pub const EXECUTE_LATENCY: u8 = 2;

/// Fetch attempts suppressed after a taken branch or jump.
pub const BRANCH_FETCH_STALL: u32 = 2;

/// Maximum accepted length, in bytes, of one program source line.
pub const MAX_LINE_LEN: usize = 128;
