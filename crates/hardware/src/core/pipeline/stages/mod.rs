//! Pipeline stage implementations.
//!
//! This module contains the individual implementations for the five stages of the
//! instruction pipeline. It includes:
//! 1. **Fetch:** Reads the word at the PC into IF and hands it on to ID.
//! 2. **Decode:** Waits out the decode latency and decodes into EX when EX is free.
//! 3. **Execute:** Waits out the execute latency, computes results and resolves branches.
//! 4. **Memory:** Performs loads and stores.
//! 5. **Writeback:** Commits results to the register file.

/// Instruction decode stage implementation.
pub mod decode;

/// Instruction execute stage implementation.
pub mod execute;

/// Instruction fetch stage implementation.
pub mod fetch;

/// Memory access stage implementation.
pub mod memory;

/// Writeback stage implementation.
pub mod writeback;

/// Decode stage entry point (ID stage).
pub use decode::decode_stage;
/// Execute stage entry point (EX stage).
pub use execute::execute_stage;
/// Fetch stage entry points (IF stage and the IF-to-ID hand-off).
pub use fetch::{fetch_stage, if_id_transfer};
/// Memory stage entry point (MEM stage).
pub use memory::mem_stage;
/// Writeback stage entry point (WB stage).
pub use writeback::wb_stage;

use crate::common::error::{Fault, PipeStage, SimError};
use crate::isa::disasm::INVALID;
use crate::isa::{InstructionBits, Opcode};

/// Wraps a fault raised while `stage` processed the word `inst` fetched from `pc`.
fn stage_fault(cycle: u64, stage: PipeStage, pc: u32, inst: u32, source: Fault) -> SimError {
    SimError::Fault {
        cycle,
        stage,
        mnemonic: Opcode::from_bits(inst.opcode()).map_or(INVALID, Opcode::mnemonic),
        pc,
        source,
    }
}
