//! Pipeline latch structures for inter-stage communication.
//!
//! This module defines the five stage slots of the pipeline:
//! IF → ID → EX → MEM → WB.
//!
//! 1. **Slot Tagging:** Each slot is either [`Slot::Empty`] or [`Slot::Occupied`];
//!    the tag is the only hazard signal in the pipeline.
//! 2. **Instruction Flow:** Each entry type carries the instruction's address and
//!    raw word plus whatever the stages it already passed through computed.

use std::mem;

use crate::common::error::PipeStage;
use crate::isa::Instruction;

/// A stage's holding latch.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Slot<T> {
    /// No instruction in this stage.
    Empty,
    /// An in-flight instruction.
    Occupied(T),
}

impl<T> Slot<T> {
    /// Returns `true` when the slot holds no instruction.
    pub const fn is_empty(&self) -> bool {
        matches!(self, Self::Empty)
    }

    /// Returns `true` when the slot holds an instruction.
    pub const fn is_occupied(&self) -> bool {
        matches!(self, Self::Occupied(_))
    }

    /// Moves the entry out, leaving the slot empty.
    pub fn take(&mut self) -> Self {
        mem::replace(self, Self::Empty)
    }

    /// Discards the entry, if any.
    pub fn clear(&mut self) {
        *self = Self::Empty;
    }

    /// Returns a reference to the entry, if any.
    pub const fn as_ref(&self) -> Option<&T> {
        match self {
            Self::Occupied(entry) => Some(entry),
            Self::Empty => None,
        }
    }

    /// Returns a mutable reference to the entry, if any.
    pub fn as_mut(&mut self) -> Option<&mut T> {
        match self {
            Self::Occupied(entry) => Some(entry),
            Self::Empty => None,
        }
    }
}

impl<T> Default for Slot<T> {
    fn default() -> Self {
        Self::Empty
    }
}


/// Entry in the IF slot: a fetched, undecoded word.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct IfEntry {
    /// Address the instruction was fetched from.
    pub pc: u32,
    /// 32-bit instruction encoding.
    pub inst: u32,
}

/// Entry in the ID slot.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct IdEntry {
    /// Address the instruction was fetched from.
    pub pc: u32,
    /// 32-bit instruction encoding.
    pub inst: u32,
    /// Decode cycles still to elapse; saturates at zero while waiting on EX.
    pub remaining: u8,
}

/// Entry in the EX slot.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ExEntry {
    /// Address the instruction was fetched from.
    pub pc: u32,
    /// 32-bit instruction encoding.
    pub inst: u32,
    /// Decoded instruction fields.
    pub decoded: Instruction,
    /// Execute cycles still to elapse.
    pub remaining: u8,
}

/// Entry in the MEM slot.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MemEntry {
    /// Address the instruction was fetched from.
    pub pc: u32,
    /// 32-bit instruction encoding.
    pub inst: u32,
    /// Decoded instruction fields.
    pub decoded: Instruction,
    /// ALU result, or the effective address for `MOVR`/`MOVM`.
    pub alu: u32,
}

/// Entry in the WB slot.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct WbEntry {
    /// Address the instruction was fetched from.
    pub pc: u32,
    /// 32-bit instruction encoding.
    pub inst: u32,
    /// Decoded instruction fields.
    pub decoded: Instruction,
    /// ALU result carried from Execute.
    pub alu: u32,
    /// Word read by the Memory stage (`MOVR` only, zero otherwise).
    pub mem_result: u32,
}

/// The five stage slots.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Latches {
    /// Instruction Fetch.
    pub if_slot: Slot<IfEntry>,
    /// Instruction Decode.
    pub id_slot: Slot<IdEntry>,
    /// Execute.
    pub ex_slot: Slot<ExEntry>,
    /// Memory access.
    pub mem_slot: Slot<MemEntry>,
    /// Write-back.
    pub wb_slot: Slot<WbEntry>,
}

impl Latches {
    /// Returns `true` when all five slots are empty.
    pub const fn is_empty(&self) -> bool {
        self.if_slot.is_empty()
            && self.id_slot.is_empty()
            && self.ex_slot.is_empty()
            && self.mem_slot.is_empty()
            && self.wb_slot.is_empty()
    }

    /// Returns `(pc, inst)` of the instruction held by `stage`, if any.
    pub fn occupant(&self, stage: PipeStage) -> Option<(u32, u32)> {
        match stage {
            PipeStage::Fetch => self.if_slot.as_ref().map(|e| (e.pc, e.inst)),
            PipeStage::Decode => self.id_slot.as_ref().map(|e| (e.pc, e.inst)),
            PipeStage::Execute => self.ex_slot.as_ref().map(|e| (e.pc, e.inst)),
            PipeStage::Memory => self.mem_slot.as_ref().map(|e| (e.pc, e.inst)),
            PipeStage::Writeback => self.wb_slot.as_ref().map(|e| (e.pc, e.inst)),
        }
    }
}
