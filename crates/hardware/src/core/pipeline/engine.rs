//! Stage engine.
//!
//! Runs one clock cycle of the pipeline. Stages are evaluated back to front
//! (WB, MEM, EX, ID, IF) so each stage consumes a slot filled on an earlier
//! cycle, followed by the IF-to-ID hand-off. No instruction can move through
//! two stages in one cycle.

use crate::common::constants::BRANCH_FETCH_STALL;
use crate::common::error::SimError;
use crate::core::Cpu;
use crate::core::pipeline::latches::Latches;
use crate::core::pipeline::stages::{
    decode_stage, execute_stage, fetch_stage, if_id_transfer, mem_stage, wb_stage,
};

/// Pipeline state that does not survive the run: slots and fetch control.
#[derive(Clone, Debug, Default)]
pub struct Pipeline {
    /// The five stage slots.
    pub latches: Latches,
    /// Remaining fetch attempts suppressed after a taken branch.
    pub fetch_stall: u32,
    /// Set once the first cycle has completed; gates the IF-to-ID hand-off.
    started: bool,
}

impl Pipeline {
    /// Creates an empty pipeline.
    pub fn new() -> Self {
        Self::default()
    }

    /// Runs one cycle of every stage.
    ///
    /// # Errors
    ///
    /// Propagates the first stage fault. The pipeline is left mid-cycle and
    /// should not be ticked again.
    pub fn tick(&mut self, cpu: &mut Cpu) -> Result<(), SimError> {
        wb_stage(cpu, &mut self.latches);
        mem_stage(cpu, &mut self.latches)?;
        if execute_stage(cpu, &mut self.latches)? {
            self.fetch_stall = BRANCH_FETCH_STALL;
        }
        decode_stage(cpu, &mut self.latches)?;
        fetch_stage(cpu, &mut self.latches, &mut self.fetch_stall)?;
        if self.started {
            if_id_transfer(&mut self.latches);
        }
        self.started = true;
        Ok(())
    }

    /// Returns `true` when every slot is empty and no fetch suppression is pending.
    pub const fn is_drained(&self) -> bool {
        self.latches.is_empty() && self.fetch_stall == 0
    }
}
