use minirisc_core::asm;
use minirisc_core::common::PipeStage;
use minirisc_core::config::Config;
use minirisc_core::core::pipeline::PipelineSnapshot;
use minirisc_core::{SimError, Simulator};
use tracing_subscriber::EnvFilter;

pub struct TestContext {
    pub sim: Simulator,
}

impl Default for TestContext {
    fn default() -> Self {
        Self::new()
    }
}

impl TestContext {
    pub fn new() -> Self {
        Self::with_config(&Config::default())
    }

    pub fn with_config(config: &Config) -> Self {
        let _ = tracing_subscriber::fmt()
            .with_test_writer()
            .with_env_filter(EnvFilter::from_default_env())
            .try_init();

        Self {
            sim: Simulator::new(config),
        }
    }

    /// Assemble `source` and load it at address 0. Panics on any skipped line.
    pub fn load_source(mut self, source: &str) -> Self {
        let program = asm::assemble(source);
        assert!(
            program.diagnostics.is_empty(),
            "unexpected diagnostics: {:?}",
            program.diagnostics
        );
        self.sim.load_program(&program.words).unwrap();
        self
    }

    /// Load raw instruction words at address 0.
    pub fn load_program(mut self, words: &[u32]) -> Self {
        self.sim.load_program(words).unwrap();
        self
    }

    /// Builder-style register preset.
    pub fn with_reg(mut self, reg: usize, val: u32) -> Self {
        self.set_reg(reg, val);
        self
    }

    pub fn set_reg(&mut self, reg: usize, val: u32) {
        self.sim.cpu.regs.write(reg, val);
    }

    pub fn get_reg(&self, reg: usize) -> u32 {
        self.sim.cpu.regs.read(reg)
    }

    /// Run a fixed number of cycles.
    pub fn run_cycles(&mut self, cycles: u64) {
        for _ in 0..cycles {
            self.sim.tick().unwrap();
        }
    }

    /// Run to completion; returns the total cycle count.
    pub fn run(&mut self) -> u64 {
        self.sim.run().unwrap()
    }

    /// Run to completion, or return the fatal error.
    pub fn try_run(&mut self) -> Result<u64, SimError> {
        self.sim.run()
    }

    /// Run to completion, collecting the snapshot taken after every cycle.
    pub fn run_traced(&mut self) -> Vec<PipelineSnapshot> {
        let mut trace = Vec::new();
        let cycles = self.sim.run_with(|s| trace.push(s.snapshot())).unwrap();
        assert_eq!(cycles as usize, trace.len(), "one snapshot per cycle");
        trace
    }

    /// Address of the instruction in `stage`, if any.
    pub fn occupant_pc(&self, stage: PipeStage) -> Option<u32> {
        self.sim
            .pipeline
            .latches
            .occupant(stage)
            .map(|(pc, _)| pc)
    }
}

/// Address held by `stage` in a snapshot.
pub fn stage_pc(snap: &PipelineSnapshot, stage: PipeStage) -> Option<u32> {
    snap.stage(stage).slot.as_ref().map(|slot| slot.pc)
}
