//! Writeback (WB) Stage.
//!
//! This module implements the final stage of the instruction pipeline.
//! It commits results to the register file and retires the instruction,
//! updating the retirement statistics.

use tracing::debug;

use crate::core::Cpu;
use crate::core::pipeline::latches::{Latches, Slot};
use crate::isa::{Opcode, WbSource};

/// Executes the writeback stage of the pipeline.
///
/// # Arguments
///
/// * `cpu` - Mutable reference to the CPU state
/// * `latches` - The pipeline slots
///
/// # Behavior
///
/// - ALU-class opcodes and `MOVI` write the Execute result to `r1`
/// - `MOVR` writes the loaded word to `r1`
/// - `JEQ`, `JMP` and `MOVM` write nothing
/// - Writes to `R0` are discarded by the register file
pub fn wb_stage(cpu: &mut Cpu, latches: &mut Latches) {
    let Slot::Occupied(entry) = latches.wb_slot.take() else {
        return;
    };

    let op = entry.decoded.opcode();
    if let Some(r1) = entry.decoded.r1() {
        match op.writeback() {
            WbSource::Alu => {
                cpu.regs.write(r1, entry.alu);
                debug!("WB: R{r1} = {}", entry.alu as i32);
            }
            WbSource::Load => {
                cpu.regs.write(r1, entry.mem_result);
                debug!("WB: R{r1} loaded {}", entry.mem_result as i32);
            }
            WbSource::None => {}
        }
    }

    let stats = &mut cpu.stats;
    stats.instructions_retired += 1;
    match op {
        Opcode::Movr => stats.inst_load += 1,
        Opcode::Movm => stats.inst_store += 1,
        Opcode::Jeq | Opcode::Jmp => stats.inst_branch += 1,
        _ => stats.inst_alu += 1,
    }
}
