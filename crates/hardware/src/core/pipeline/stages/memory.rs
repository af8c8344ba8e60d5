//! Memory Access (MEM) Stage.
//!
//! This module implements the fourth stage of the instruction pipeline.
//! `MOVR` reads the word at its effective address and `MOVM` stores `r1`
//! there. Every other instruction passes straight through to WB.

use tracing::{debug, trace};

use super::stage_fault;
use crate::common::error::{PipeStage, SimError};
use crate::core::Cpu;
use crate::core::pipeline::latches::{Latches, MemEntry, Slot, WbEntry};
use crate::isa::{Instruction, Opcode};

/// Executes the memory access stage of the pipeline.
///
/// # Arguments
///
/// * `cpu` - Mutable reference to the CPU state
/// * `latches` - The pipeline slots
///
/// # Errors
///
/// A [`SimError::Fault`] when the effective address is outside memory. Nothing
/// is read or written in that case.
pub fn mem_stage(cpu: &mut Cpu, latches: &mut Latches) -> Result<(), SimError> {
    let Slot::Occupied(MemEntry {
        pc,
        inst,
        decoded,
        alu,
    }) = latches.mem_slot.take()
    else {
        return Ok(());
    };

    let cycle = cpu.stats.cycles;
    let mut mem_result = 0;
    match decoded {
        Instruction::Immediate {
            op: Opcode::Movr, ..
        } => {
            mem_result = cpu
                .mem
                .read(alu)
                .map_err(|fault| stage_fault(cycle, PipeStage::Memory, pc, inst, fault))?;
            trace!("MEM pc={pc} M[{alu}] -> {mem_result}");
        }
        Instruction::Immediate {
            op: Opcode::Movm,
            r1,
            ..
        } => {
            let val = cpu.regs.read(r1);
            cpu.mem
                .write(alu, val)
                .map_err(|fault| stage_fault(cycle, PipeStage::Memory, pc, inst, fault))?;
            debug!("MEM: M[{alu}] = {}", val as i32);
        }
        _ => {}
    }

    latches.wb_slot = Slot::Occupied(WbEntry {
        pc,
        inst,
        decoded,
        alu,
        mem_result,
    });
    Ok(())
}
