//! Cycle-accurate five-stage pipeline simulator library.
//!
//! This crate simulates a small 32-bit teaching ISA on a classic
//! IF/ID/EX/MEM/WB pipeline with the following:
//! 1. **ISA:** Twelve opcodes in four encoding classes, with encode, decode and disassembly.
//! 2. **Front-end:** A line-oriented assembler that skips and reports bad lines.
//! 3. **Core:** Register file, 2048-word memory, and the pipeline stages with
//!    two-cycle decode and execute latencies, a decode structural stall, and IF/ID
//!    flushing on taken branches.
//! 4. **Simulation:** The driver loop, per-cycle snapshots, configuration, and statistics.
//!
//! # Example
//!
//! ```
//! use minirisc_core::{Config, Simulator, asm};
//!
//! let program = asm::assemble("ADD R1 R2 R3\nMOVI R4 R0 9\n");
//! let mut config = Config::default();
//! config.init.registers.extend([(2, 4), (3, 5)]);
//!
//! let mut sim = Simulator::with_program(&program.words, &config).unwrap();
//! let cycles = sim.run().unwrap();
//! assert_eq!(sim.registers()[1], 9);
//! assert_eq!(sim.registers()[4], 9);
//! assert_eq!(cycles, 10);
//! ```

/// Program front-end (source text to instruction words).
pub mod asm;
/// Common types and constants (registers, faults, stage tags).
pub mod common;
/// Simulator configuration (defaults, general settings, initial state).
pub mod config;
/// CPU core (architectural state, pipeline, ALU).
pub mod core;
/// Instruction set (opcodes, encoding, decoding, disassembly).
pub mod isa;
/// Driver loop and program loading.
pub mod sim;
/// Simulation statistics collection and reporting.
pub mod stats;

/// Root configuration type; use `Config::default()` or `Config::from_json`.
pub use crate::config::Config;
/// Architectural state: registers, PC and memory.
pub use crate::core::Cpu;
/// Fatal simulation error.
pub use crate::common::SimError;
/// Top-level simulator; construct with `Simulator::with_program`.
pub use crate::sim::Simulator;
