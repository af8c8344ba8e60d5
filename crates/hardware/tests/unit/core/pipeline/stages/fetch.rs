//! Fetch Stage Tests.

use minirisc_core::Cpu;
use minirisc_core::common::PipeStage;
use minirisc_core::common::constants::DECODE_LATENCY;
use minirisc_core::core::pipeline::latches::{Latches, Slot};
use minirisc_core::core::pipeline::stages::{fetch_stage, if_id_transfer};

use crate::common::builder::instruction::movi;
use crate::common::builder::pipeline_state::{id_entry, if_entry};

fn cpu_with(program: &[u32]) -> Cpu {
    let mut cpu = Cpu::new();
    cpu.load_program(program).unwrap();
    cpu
}

#[test]
fn fetches_word_at_pc_and_advances() {
    let mut cpu = cpu_with(&[movi(1, 0, 1), movi(2, 0, 2)]);
    let mut latches = Latches::default();
    let mut stall = 0;

    fetch_stage(&mut cpu, &mut latches, &mut stall).unwrap();

    assert_eq!(latches.if_slot, Slot::Occupied(if_entry(0, movi(1, 0, 1))));
    assert_eq!(cpu.pc, 1);
}

#[test]
fn occupied_if_blocks_fetch() {
    let mut cpu = cpu_with(&[movi(1, 0, 1), movi(2, 0, 2)]);
    let mut latches = Latches::default();
    let mut stall = 0;

    fetch_stage(&mut cpu, &mut latches, &mut stall).unwrap();
    fetch_stage(&mut cpu, &mut latches, &mut stall).unwrap();

    assert_eq!(cpu.pc, 1, "second fetch must wait for IF to drain");
}

#[test]
fn nothing_fetched_past_the_program() {
    let mut cpu = cpu_with(&[movi(1, 0, 1)]);
    cpu.pc = 1;
    let mut latches = Latches::default();
    let mut stall = 0;

    fetch_stage(&mut cpu, &mut latches, &mut stall).unwrap();

    assert!(latches.if_slot.is_empty());
    assert_eq!(cpu.pc, 1);
}

#[test]
fn suppression_consumes_one_attempt_per_call() {
    let mut cpu = cpu_with(&[movi(1, 0, 1)]);
    let mut latches = Latches::default();
    let mut stall = 2;

    fetch_stage(&mut cpu, &mut latches, &mut stall).unwrap();
    assert_eq!((stall, cpu.pc), (1, 0));
    fetch_stage(&mut cpu, &mut latches, &mut stall).unwrap();
    assert_eq!((stall, cpu.pc), (0, 0));
    assert!(latches.if_slot.is_empty());
    assert_eq!(cpu.stats.stalls_fetch, 2);

    fetch_stage(&mut cpu, &mut latches, &mut stall).unwrap();
    assert!(latches.if_slot.is_occupied());
}

#[test]
fn transfer_moves_into_empty_id_with_fresh_latency() {
    let mut latches = Latches::default();
    latches.if_slot = Slot::Occupied(if_entry(5, movi(1, 0, 1)));

    if_id_transfer(&mut latches);

    assert!(latches.if_slot.is_empty());
    assert_eq!(
        latches.id_slot,
        Slot::Occupied(id_entry(5, movi(1, 0, 1), DECODE_LATENCY))
    );
}

#[test]
fn transfer_waits_for_id() {
    let mut latches = Latches::default();
    latches.if_slot = Slot::Occupied(if_entry(5, movi(1, 0, 1)));
    latches.id_slot = Slot::Occupied(id_entry(4, movi(2, 0, 2), 1));

    if_id_transfer(&mut latches);

    assert_eq!(latches.occupant(PipeStage::Fetch).map(|o| o.0), Some(5));
    assert_eq!(latches.id_slot, Slot::Occupied(id_entry(4, movi(2, 0, 2), 1)));
}
