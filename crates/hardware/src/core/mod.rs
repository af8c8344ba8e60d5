//! Core processor implementation.
//!
//! This module contains the architectural state, the five-stage pipeline
//! that advances instructions through it, and the ALU used by Execute.

/// Architectural state (registers, PC, memory, statistics).
pub mod cpu;

/// Instruction pipeline implementation (latches, stages, engine, snapshots).
pub mod pipeline;

/// Execution units (ALU).
pub mod units;

pub use self::cpu::Cpu;
