//! Simulator Tests.
//!
//! Whole programs run through the driver loop, from assembly to the final
//! register file and data memory.

use minirisc_core::common::{Fault, PipeStage};
use minirisc_core::config::Config;
use minirisc_core::{SimError, Simulator, asm};
use pretty_assertions::assert_eq;

use crate::common::harness::TestContext;

// ══════════════════════════════════════════════════════════
// Complete runs
// ══════════════════════════════════════════════════════════

#[test]
fn add_then_movi() {
    let mut config = Config::default();
    config.init.registers.extend([(2, 4), (3, 5)]);
    let program = asm::assemble("ADD R1 R2 R3\nMOVI R4 R0 9\n");

    let mut sim = Simulator::with_program(&program.words, &config).unwrap();

    assert_eq!(sim.run().unwrap(), 10);
    assert_eq!(sim.registers()[1], 9);
    assert_eq!(sim.registers()[4], 9);
    assert_eq!(sim.pc(), 2);
    assert!(sim.is_finished());
}

#[test]
fn store_then_load() {
    let mut ctx = TestContext::new().load_source("MOVI R3 R0 42\nMOVM R3 R0 100\nMOVR R4 R0 100\n");

    assert_eq!(ctx.run(), 12);
    assert_eq!(ctx.get_reg(4), 42);
    assert_eq!(ctx.sim.memory()[100], 42);
    assert_eq!(ctx.sim.data_memory(), [(100, 42)]);

    let stats = ctx.sim.stats();
    assert_eq!((stats.inst_alu, stats.inst_store, stats.inst_load), (1, 1, 1));
}

#[test]
fn last_memory_word_is_usable() {
    let mut ctx =
        TestContext::new().load_source("MOVI R1 R0 9\nMOVM R1 R0 2047\nMOVR R2 R0 2047\n");
    assert_eq!(ctx.run(), 12);
    assert_eq!(ctx.get_reg(2), 9);
}

#[test]
fn skipped_line_does_not_stop_the_run() {
    let program = asm::assemble("MOVI R1 R0 1\nFOO R1 R2 R3\nMOVI R2 R0 2\n");
    let mut sim = Simulator::with_program(&program.words, &Config::default()).unwrap();

    assert_eq!(sim.run().unwrap(), 10);
    assert_eq!(&sim.registers()[1..3], &[1, 2]);
}

#[test]
fn store_may_overwrite_instruction_memory() {
    let mut ctx = TestContext::new().load_source("MOVI R1 R0 5\nMOVM R1 R0 0\n");
    assert_eq!(ctx.run(), 10);
    assert_eq!(ctx.sim.memory()[0], 5);
    assert!(ctx.sim.data_memory().is_empty(), "address 0 is program space");
}

#[test]
fn observer_sees_every_cycle() {
    let mut ctx = TestContext::new().load_source("MOVI R1 R0 1\n");
    let trace = ctx.run_traced();
    let cycles: Vec<_> = trace.iter().map(|snap| snap.cycle).collect();
    assert_eq!(cycles, (1..=8).collect::<Vec<_>>());
}

#[test]
fn reloading_resets_pipeline_and_stats() {
    let mut ctx = TestContext::new().load_source("MOVI R1 R0 1\nMOVI R2 R0 2\n");
    ctx.run_cycles(3);
    ctx.sim.load_program(&asm::assemble("MOVI R3 R0 3\n").words).unwrap();

    assert_eq!(ctx.sim.cycle(), 0);
    assert!(ctx.sim.pipeline.is_drained());
    assert_eq!(ctx.run(), 8);
    assert_eq!(ctx.get_reg(3), 3);
}

// ══════════════════════════════════════════════════════════
// Fatal faults
// ══════════════════════════════════════════════════════════

#[test]
fn load_out_of_bounds_faults_in_mem() {
    let mut ctx = TestContext::new().load_source("MOVR R1 R0 3000\n");

    let err = ctx.try_run().unwrap_err();

    assert!(
        matches!(
            err,
            SimError::Fault {
                cycle: 7,
                stage: PipeStage::Memory,
                mnemonic: "MOVR",
                pc: 0,
                source: Fault::AddressOutOfBounds { addr: 3000 },
            }
        ),
        "got {err:?}"
    );
    assert_eq!(ctx.get_reg(1), 0);
}

#[test]
fn first_past_the_end_address_faults() {
    let mut ctx = TestContext::new().load_source("MOVI R1 R0 9\nMOVM R1 R0 2048\n");
    assert!(matches!(
        ctx.try_run(),
        Err(SimError::Fault {
            source: Fault::AddressOutOfBounds { addr: 2048 },
            ..
        })
    ));
}

#[test]
fn invalid_opcode_faults_in_decode() {
    let mut ctx = TestContext::new().load_program(&[0xC000_0000]);

    let err = ctx.try_run().unwrap_err();

    assert!(
        matches!(
            err,
            SimError::Fault {
                cycle: 4,
                stage: PipeStage::Decode,
                mnemonic: "???",
                pc: 0,
                source: Fault::InvalidOpcode {
                    word: 0xC000_0000,
                    opcode: 12
                },
            }
        ),
        "got {err:?}"
    );
}

#[test]
fn faults_are_deterministic() {
    let run = || {
        TestContext::new()
            .load_source("MOVI R2 R0 1000\nMOVR R1 R2 1500\n")
            .try_run()
            .unwrap_err()
            .to_string()
    };
    assert_eq!(run(), run());
}
