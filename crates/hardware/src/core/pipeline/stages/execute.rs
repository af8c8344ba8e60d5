//! Execute (EX) Stage.
//!
//! This module implements the third stage of the instruction pipeline.
//! It performs the following:
//! 1. **Latency:** Holds the instruction for the execute latency before producing a result.
//! 2. **ALU:** Computes arithmetic, logic and shift results and load/store addresses.
//! 3. **Control Flow:** Resolves `JEQ` and `JMP`, redirecting the PC and flushing IF/ID when taken.

use tracing::{debug, trace};

use super::stage_fault;
use crate::common::constants::MEMORY_SIZE;
use crate::common::error::{Fault, PipeStage, SimError};
use crate::core::Cpu;
use crate::core::pipeline::latches::{ExEntry, Latches, MemEntry, Slot};
use crate::core::units::alu::{Alu, AluOp};
use crate::isa::instruction::TARGET_MASK;
use crate::isa::{Instruction, Opcode};

/// Executes the execute stage of the pipeline.
///
/// # Arguments
///
/// * `cpu` - Mutable reference to the CPU state
/// * `latches` - The pipeline slots
///
/// # Returns
///
/// `true` when a branch or jump was taken this cycle. IF and ID have already
/// been flushed; the caller arms the fetch suppression.
///
/// # Behavior
///
/// - Counts down the EX occupant's latency; nothing else happens until it reaches zero
/// - `JEQ` compares `r1` and `r2` and, if equal, sets the PC to its own address + 1 + imm
/// - `JMP` replaces PC bits 27:0 with the target
/// - All other opcodes go through the ALU
/// - Moves the instruction into MEM (which the Memory stage has already drained)
///
/// # Errors
///
/// A [`SimError::Fault`] carrying [`Fault::AddressOutOfBounds`] when a taken
/// branch or jump leaves the PC outside memory. A target past the program but
/// inside memory is not an error; fetching simply stops.
pub fn execute_stage(cpu: &mut Cpu, latches: &mut Latches) -> Result<bool, SimError> {
    let ready = latches.ex_slot.as_mut().is_some_and(|entry| {
        entry.remaining = entry.remaining.saturating_sub(1);
        entry.remaining == 0
    });
    if !ready {
        return Ok(false);
    }
    let Slot::Occupied(ExEntry {
        pc, inst, decoded, ..
    }) = latches.ex_slot.take()
    else {
        return Ok(false);
    };

    let mut taken = false;
    let alu = match decoded {
        Instruction::Register { op, r2, r3, .. } => {
            alu_result(op, cpu.regs.read(r2), cpu.regs.read(r3))
        }
        Instruction::Shift { op, r2, shamt, .. } => alu_result(op, cpu.regs.read(r2), shamt),
        Instruction::Immediate {
            op: Opcode::Jeq,
            r1,
            r2,
            imm,
        } => {
            if cpu.regs.read(r1) == cpu.regs.read(r2) {
                cpu.pc = pc.wrapping_add(1).wrapping_add_signed(imm);
                taken = true;
            }
            0
        }
        Instruction::Immediate { op, r2, imm, .. } => {
            alu_result(op, cpu.regs.read(r2), imm as u32)
        }
        Instruction::Jump { target } => {
            cpu.pc = (cpu.pc & !TARGET_MASK) | target;
            taken = true;
            0
        }
    };
    trace!("EX  pc={pc} {decoded} -> {alu}");

    if taken {
        if cpu.pc >= MEMORY_SIZE as u32 {
            let fault = Fault::AddressOutOfBounds { addr: cpu.pc };
            return Err(stage_fault(cpu.stats.cycles, PipeStage::Execute, pc, inst, fault));
        }
        let flushed =
            u64::from(latches.if_slot.is_occupied()) + u64::from(latches.id_slot.is_occupied());
        latches.if_slot.clear();
        latches.id_slot.clear();
        cpu.stats.branches_taken += 1;
        cpu.stats.instructions_flushed += flushed;
        debug!("branch taken, flush IF/ID, PC={}", cpu.pc);
    }

    latches.mem_slot = Slot::Occupied(MemEntry {
        pc,
        inst,
        decoded,
        alu,
    });
    Ok(taken)
}

fn alu_result(op: Opcode, a: u32, b: u32) -> u32 {
    AluOp::from_opcode(op).map_or(0, |alu_op| Alu::execute(alu_op, a, b))
}
