//! Per-cycle pipeline snapshots.
//!
//! A snapshot is a read-only copy of everything a presentation layer needs to
//! draw one cycle of the trace: the occupant of each stage, the PC and the
//! register file. Snapshots serialize with serde for machine-readable traces.

use serde::Serialize;

use crate::common::constants::REGISTER_COUNT;
use crate::common::error::PipeStage;
use crate::core::Cpu;
use crate::core::pipeline::engine::Pipeline;
use crate::isa::disassemble;

/// The instruction occupying a stage.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct SlotView {
    /// Address the instruction was fetched from.
    pub pc: u32,
    /// Raw instruction word.
    pub word: u32,
    /// Disassembled text, `???` for invalid words.
    pub text: String,
}

/// One stage and its occupant.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct StageView {
    /// The stage.
    pub stage: PipeStage,
    /// The occupant, or `None` when the slot is empty.
    pub slot: Option<SlotView>,
}

/// State of the machine at the end of a cycle.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct PipelineSnapshot {
    /// Cycle number (1-based) the snapshot was taken after.
    pub cycle: u64,
    /// Program Counter.
    pub pc: u32,
    /// Pending fetch suppression.
    pub fetch_stall: u32,
    /// Stages in pipeline order, IF first.
    pub stages: Vec<StageView>,
    /// Register file, `R0` first.
    pub registers: [u32; REGISTER_COUNT],
}

impl PipelineSnapshot {
    /// Captures the current state of `cpu` and `pipeline`.
    pub fn capture(cpu: &Cpu, pipeline: &Pipeline) -> Self {
        let stages = PipeStage::ALL
            .into_iter()
            .map(|stage| StageView {
                stage,
                slot: pipeline
                    .latches
                    .occupant(stage)
                    .map(|(pc, word)| SlotView {
                        pc,
                        word,
                        text: disassemble(word),
                    }),
            })
            .collect();

        Self {
            cycle: cpu.stats.cycles,
            pc: cpu.pc,
            fetch_stall: pipeline.fetch_stall,
            stages,
            registers: *cpu.regs.as_array(),
        }
    }

    /// Returns the view of one stage.
    pub fn stage(&self, stage: PipeStage) -> &StageView {
        &self.stages[stage as usize]
    }
}
