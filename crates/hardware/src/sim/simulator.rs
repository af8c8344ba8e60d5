//! Simulator: owns both the CPU and the pipeline side-by-side.
//!
//! The driver loop ticks the pipeline once per cycle and stops when every
//! slot is empty, the PC has run past the program, and no fetch suppression
//! is pending. The drain check happens only after a full cycle.

use tracing::debug;

use crate::common::constants::REGISTER_COUNT;
use crate::common::error::{PipeStage, SimError};
use crate::config::Config;
use crate::core::Cpu;
use crate::core::pipeline::{Pipeline, PipelineSnapshot};
use crate::isa::disassemble;
use crate::stats::SimStats;

/// Top-level simulator: CPU architectural state + pipeline.
#[derive(Clone, Debug, Default)]
pub struct Simulator {
    /// CPU architectural state (registers, PC, memory, stats).
    pub cpu: Cpu,
    /// Pipeline slots and fetch control.
    pub pipeline: Pipeline,
    max_cycles: Option<u64>,
    trace: bool,
}

impl Simulator {
    /// Creates a simulator with no program loaded.
    pub fn new(config: &Config) -> Self {
        Self {
            cpu: Cpu::new(),
            pipeline: Pipeline::new(),
            max_cycles: config.general.max_cycles,
            trace: config.general.trace_instructions,
        }
    }

    /// Creates a simulator, loads `program` and applies the configured initial state.
    ///
    /// # Errors
    ///
    /// [`SimError::ProgramTooLarge`] or [`SimError::InvalidConfig`].
    pub fn with_program(program: &[u32], config: &Config) -> Result<Self, SimError> {
        let mut sim = Self::new(config);
        sim.load_program(program)?;
        sim.cpu.apply_init(&config.init)?;
        Ok(sim)
    }

    /// Loads a program at address 0, resetting memory, PC, pipeline and statistics.
    ///
    /// Registers keep their values.
    ///
    /// # Errors
    ///
    /// [`SimError::ProgramTooLarge`] when the program does not fit in memory.
    pub fn load_program(&mut self, program: &[u32]) -> Result<(), SimError> {
        self.cpu.load_program(program)?;
        self.cpu.stats = SimStats::default();
        self.pipeline = Pipeline::new();
        Ok(())
    }

    /// Advances the simulator by one clock cycle.
    ///
    /// # Errors
    ///
    /// The first stage fault raised during the cycle.
    pub fn tick(&mut self) -> Result<(), SimError> {
        self.cpu.stats.cycles += 1;
        self.pipeline.tick(&mut self.cpu)?;
        if self.trace {
            debug!(cycle = self.cycle(), pc = self.cpu.pc, "{}", self.stage_line());
        }
        Ok(())
    }

    /// Returns `true` once the pipeline has drained and no more fetches will happen.
    pub const fn is_finished(&self) -> bool {
        self.pipeline.is_drained() && self.cpu.pc >= self.cpu.instruction_count
    }

    /// Runs until the pipeline drains.
    ///
    /// At least one cycle always runs, so an empty program finishes after cycle 1.
    ///
    /// # Returns
    ///
    /// The total number of cycles.
    ///
    /// # Errors
    ///
    /// The first stage fault, or [`SimError::CycleLimit`] when a cap is configured.
    pub fn run(&mut self) -> Result<u64, SimError> {
        self.run_with(|_| {})
    }

    /// Runs until the pipeline drains, calling `observer` after every cycle.
    ///
    /// # Errors
    ///
    /// See [`Simulator::run`].
    pub fn run_with<F>(&mut self, mut observer: F) -> Result<u64, SimError>
    where
        F: FnMut(&Self),
    {
        loop {
            if let Some(limit) = self.max_cycles.filter(|&limit| self.cycle() >= limit) {
                return Err(SimError::CycleLimit { limit });
            }
            self.tick()?;
            observer(self);
            if self.is_finished() {
                return Ok(self.cycle());
            }
        }
    }

    /// Number of cycles completed so far.
    pub const fn cycle(&self) -> u64 {
        self.cpu.stats.cycles
    }

    /// Current Program Counter.
    pub const fn pc(&self) -> u32 {
        self.cpu.pc
    }

    /// The register file, `R0` first.
    pub const fn registers(&self) -> &[u32; REGISTER_COUNT] {
        self.cpu.regs.as_array()
    }

    /// The whole memory array.
    pub fn memory(&self) -> &[u32] {
        self.cpu.mem.as_slice()
    }

    /// Non-zero words of data space (`instruction_count..MEMORY_SIZE`).
    pub fn data_memory(&self) -> Vec<(usize, u32)> {
        self.cpu
            .mem
            .nonzero_from(self.cpu.instruction_count as usize)
            .collect()
    }

    /// Performance counters.
    pub const fn stats(&self) -> &SimStats {
        &self.cpu.stats
    }

    /// Captures the state at the end of the last cycle.
    pub fn snapshot(&self) -> PipelineSnapshot {
        PipelineSnapshot::capture(&self.cpu, &self.pipeline)
    }

    fn stage_line(&self) -> String {
        PipeStage::ALL
            .into_iter()
            .map(|stage| {
                let text = self
                    .pipeline
                    .latches
                    .occupant(stage)
                    .map_or_else(|| "---".to_string(), |(_, inst)| disassemble(inst));
                format!("{stage}[{text}]")
            })
            .collect::<Vec<_>>()
            .join(" ")
    }
}
