//! Latch entry builders.
//!
//! Construct entries for a given slot directly from an instruction word, so
//! stage functions can be driven one at a time.

use minirisc_core::core::pipeline::latches::{ExEntry, IdEntry, IfEntry, MemEntry, WbEntry};
use minirisc_core::isa::decode;

pub fn if_entry(pc: u32, inst: u32) -> IfEntry {
    IfEntry { pc, inst }
}

pub fn id_entry(pc: u32, inst: u32, remaining: u8) -> IdEntry {
    IdEntry {
        pc,
        inst,
        remaining,
    }
}

/// EX entry for a valid word. Panics on an invalid opcode.
pub fn ex_entry(pc: u32, inst: u32, remaining: u8) -> ExEntry {
    ExEntry {
        pc,
        inst,
        decoded: decode(inst).unwrap(),
        remaining,
    }
}

pub fn mem_entry(pc: u32, inst: u32, alu: u32) -> MemEntry {
    MemEntry {
        pc,
        inst,
        decoded: decode(inst).unwrap(),
        alu,
    }
}

pub fn wb_entry(pc: u32, inst: u32, alu: u32, mem_result: u32) -> WbEntry {
    WbEntry {
        pc,
        inst,
        decoded: decode(inst).unwrap(),
        alu,
        mem_result,
    }
}
