//! Instruction Decode (ID) Stage.
//!
//! This module implements the second stage of the instruction pipeline.
//! An instruction waits here for the decode latency, then moves into EX once
//! EX is free. Operands are not read here; Execute reads the register file
//! when it completes.

use tracing::trace;

use super::stage_fault;
use crate::common::constants::EXECUTE_LATENCY;
use crate::common::error::{PipeStage, SimError};
use crate::core::Cpu;
use crate::core::pipeline::latches::{ExEntry, Latches, Slot};
use crate::isa::decode;

/// Executes the instruction decode stage of the pipeline.
///
/// # Arguments
///
/// * `cpu` - Mutable reference to the CPU state
/// * `latches` - The pipeline slots
///
/// # Behavior
///
/// - Counts down the ID occupant's latency, saturating at zero
/// - Stalls while EX is occupied (structural hazard)
/// - Decodes and moves the instruction into EX with a fresh execute latency
///
/// # Errors
///
/// A [`SimError::Fault`] carrying [`crate::common::Fault::InvalidOpcode`] when the word has no valid opcode.
pub fn decode_stage(cpu: &mut Cpu, latches: &mut Latches) -> Result<(), SimError> {
    let Slot::Occupied(entry) = &mut latches.id_slot else {
        return Ok(());
    };

    entry.remaining = entry.remaining.saturating_sub(1);
    if entry.remaining > 0 {
        return Ok(());
    }
    if latches.ex_slot.is_occupied() {
        cpu.stats.stalls_decode += 1;
        trace!("ID  pc={} stalled on EX", entry.pc);
        return Ok(());
    }

    let (pc, inst) = (entry.pc, entry.inst);
    let decoded = decode(inst)
        .map_err(|fault| stage_fault(cpu.stats.cycles, PipeStage::Decode, pc, inst, fault))?;
    trace!("ID  pc={pc} {decoded}");

    latches.id_slot.clear();
    latches.ex_slot = Slot::Occupied(ExEntry {
        pc,
        inst,
        decoded,
        remaining: EXECUTE_LATENCY,
    });
    Ok(())
}
