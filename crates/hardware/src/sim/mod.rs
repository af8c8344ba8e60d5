//! Simulation driver and program loading.
//!
//! Provides the cycle loop that drives the pipeline to completion and the
//! helpers that read program source from disk.

/// Program source loading.
pub mod loader;

/// Top-level simulator: architectural state plus pipeline.
pub mod simulator;

pub use simulator::Simulator;
