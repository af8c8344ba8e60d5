//! Execution units.
//!
//! The only functional unit of this core is the integer ALU used by the
//! Execute stage.

/// Arithmetic Logic Unit for integer operations.
pub mod alu;
