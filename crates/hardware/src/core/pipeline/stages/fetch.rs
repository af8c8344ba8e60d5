//! Instruction Fetch (IF) Stage.
//!
//! This module implements the first stage of the instruction pipeline.
//! It reads the word at the current Program Counter into the IF slot, and
//! separately hands the IF occupant to ID at the end of each cycle.

use tracing::trace;

use super::stage_fault;
use crate::common::constants::DECODE_LATENCY;
use crate::common::error::{PipeStage, SimError};
use crate::core::Cpu;
use crate::core::pipeline::latches::{IdEntry, IfEntry, Latches, Slot};

/// Executes the instruction fetch stage of the pipeline.
///
/// # Arguments
///
/// * `cpu` - Mutable reference to the CPU state
/// * `latches` - The pipeline slots
/// * `fetch_stall` - Fetch suppression counter armed by a taken branch
///
/// # Behavior
///
/// - While `fetch_stall` is nonzero, decrements it and fetches nothing
/// - Otherwise fetches `mem[pc]` into an empty IF slot while `pc < instruction_count`
/// - Advances the PC by one word per fetch
///
/// # Errors
///
/// A [`SimError::Fault`] if the word at the PC cannot be read.
pub fn fetch_stage(
    cpu: &mut Cpu,
    latches: &mut Latches,
    fetch_stall: &mut u32,
) -> Result<(), SimError> {
    if *fetch_stall > 0 {
        *fetch_stall -= 1;
        cpu.stats.stalls_fetch += 1;
        trace!("IF  suppressed ({} left)", *fetch_stall);
        return Ok(());
    }

    if latches.if_slot.is_occupied() || cpu.pc >= cpu.instruction_count {
        return Ok(());
    }

    let pc = cpu.pc;
    let inst = cpu
        .mem
        .read(pc)
        .map_err(|fault| stage_fault(cpu.stats.cycles, PipeStage::Fetch, pc, 0, fault))?;
    trace!("IF  pc={pc} inst={inst:#010x}");

    latches.if_slot = Slot::Occupied(IfEntry { pc, inst });
    cpu.pc = pc.wrapping_add(1);
    Ok(())
}

/// Moves the IF occupant into an empty ID slot and starts its decode latency.
///
/// The engine skips this hand-off on the very first cycle, so a fetched
/// instruction is always visible in IF for at least one cycle.
pub fn if_id_transfer(latches: &mut Latches) {
    if latches.id_slot.is_occupied() {
        return;
    }
    if let Slot::Occupied(IfEntry { pc, inst }) = latches.if_slot.take() {
        latches.id_slot = Slot::Occupied(IdEntry {
            pc,
            inst,
            remaining: DECODE_LATENCY,
        });
    }
}
