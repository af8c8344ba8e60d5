//! Instruction pipeline implementation.
//!
//! This module contains the implementation of the five-stage instruction pipeline.
//! It includes the following components:
//! 1. **Latches:** The IF/ID/EX/MEM/WB slots, each empty or occupied.
//! 2. **Stages:** Implementation of Fetch, Decode, Execute, Memory, and Writeback.
//! 3. **Engine:** The per-cycle stage ordering, fetch suppression and drain check.
//! 4. **Snapshots:** Read-only per-cycle views for tracing and presentation.

/// Per-cycle stage ordering and drain detection.
pub mod engine;

/// Pipeline stage slots and their entries.
pub mod latches;

/// Serializable per-cycle pipeline views.
pub mod snapshot;

/// Pipeline stage implementations (fetch, decode, execute, memory, writeback).
pub mod stages;

pub use engine::Pipeline;
pub use snapshot::PipelineSnapshot;
