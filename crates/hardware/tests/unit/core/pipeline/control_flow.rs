//! Control Flow Tests.
//!
//! A taken `JEQ` or `JMP` resolves when it completes EX. IF and ID are
//! flushed in that cycle and the next two fetch attempts are suppressed, so
//! the target is fetched two cycles later and handed straight to ID.

use minirisc_core::SimError;
use minirisc_core::common::{Fault, PipeStage};
use minirisc_core::config::Config;
use pretty_assertions::assert_eq;

use crate::common::harness::{TestContext, stage_pc};

const SKIP_TWO: &str = "\
JEQ R1 R2 2
MOVI R3 R0 11
MOVI R4 R0 22
MOVI R5 R0 33
";

#[test]
fn taken_jeq_skips_flushed_instructions() {
    let mut ctx = TestContext::new()
        .load_source(SKIP_TWO)
        .with_reg(1, 7)
        .with_reg(2, 7);

    assert_eq!(ctx.run(), 14);
    assert_eq!((ctx.get_reg(3), ctx.get_reg(4), ctx.get_reg(5)), (0, 0, 33));

    let stats = ctx.sim.stats();
    assert_eq!(stats.branches_taken, 1);
    assert_eq!(stats.instructions_flushed, 2);
    assert_eq!(stats.stalls_fetch, 2);
    assert_eq!(stats.instructions_retired, 2);
    assert_eq!(stats.inst_branch, 1);
}

#[test]
fn flush_and_refetch_cycle_by_cycle() {
    let mut ctx = TestContext::new()
        .load_source(SKIP_TWO)
        .with_reg(1, 7)
        .with_reg(2, 7);
    let trace = ctx.run_traced();

    let after_5 = &trace[4];
    assert_eq!(stage_pc(after_5, PipeStage::Fetch), Some(2));
    assert_eq!(stage_pc(after_5, PipeStage::Decode), Some(1));

    let after_6 = &trace[5];
    assert_eq!(after_6.pc, 3);
    assert_eq!(stage_pc(after_6, PipeStage::Fetch), None);
    assert_eq!(stage_pc(after_6, PipeStage::Decode), None);
    assert_eq!(stage_pc(after_6, PipeStage::Execute), None);
    assert_eq!(stage_pc(after_6, PipeStage::Memory), Some(0));
    assert_eq!(after_6.fetch_stall, 1);

    let after_7 = &trace[6];
    assert_eq!(stage_pc(after_7, PipeStage::Fetch), None, "fetch suppressed");
    assert_eq!(after_7.fetch_stall, 0);

    let after_8 = &trace[7];
    assert_eq!(stage_pc(after_8, PipeStage::Fetch), None);
    assert_eq!(stage_pc(after_8, PipeStage::Decode), Some(3), "target fetched and handed off");
    assert_eq!(after_8.pc, 4);
}

#[test]
fn jeq_target_is_relative_to_its_own_address() {
    let source = "\
JEQ R1 R2 5
MOVI R3 R0 1
MOVI R4 R0 1
MOVI R5 R0 1
MOVI R6 R0 1
MOVI R7 R0 1
MOVI R8 R0 66
MOVI R9 R0 77
";
    let mut ctx = TestContext::new()
        .load_source(source)
        .with_reg(1, 7)
        .with_reg(2, 7);
    let trace = ctx.run_traced();

    assert_eq!(trace[5].pc, 6, "PC after the branch resolves");
    assert_eq!(trace.len(), 16);
    assert!((3..=7).all(|r| ctx.get_reg(r) == 0));
    assert_eq!((ctx.get_reg(8), ctx.get_reg(9)), (66, 77));
}

#[test]
fn untaken_jeq_costs_nothing() {
    let mut ctx = TestContext::new()
        .load_source("JEQ R1 R2 5\nMOVI R3 R0 1\nMOVI R4 R0 2\n")
        .with_reg(1, 1)
        .with_reg(2, 2);

    assert_eq!(ctx.run(), 12);
    assert_eq!((ctx.get_reg(3), ctx.get_reg(4)), (1, 2));
    assert_eq!(ctx.sim.stats().branches_taken, 0);
    assert_eq!(ctx.sim.stats().stalls_fetch, 0);
}

#[test]
fn jmp_to_absolute_target() {
    let mut ctx = TestContext::new()
        .load_source("JMP 3\nMOVI R3 R0 11\nMOVI R4 R0 22\nMOVI R5 R0 33\n");

    assert_eq!(ctx.run(), 14);
    assert_eq!((ctx.get_reg(3), ctx.get_reg(4), ctx.get_reg(5)), (0, 0, 33));
}

#[test]
fn jmp_into_data_space_ends_the_run() {
    let mut ctx = TestContext::new().load_source("JMP 100\nMOVI R1 R0 1\n");

    assert_eq!(ctx.run(), 8);
    assert_eq!(ctx.get_reg(1), 0);
    assert_eq!(ctx.sim.pc(), 100);
    assert_eq!(ctx.sim.stats().instructions_flushed, 1);
}

#[test]
fn jmp_to_last_word_is_in_bounds() {
    let mut ctx = TestContext::new().load_source("JMP 2047\nMOVI R1 R0 1\n");

    assert_eq!(ctx.run(), 8);
    assert_eq!(ctx.sim.pc(), 2047);
}

#[test]
fn jmp_outside_memory_faults_in_execute() {
    for (source, target) in [("JMP 2048\nMOVI R1 R0 1\n", 2048), ("JMP 5000\nMOVI R1 R0 1\n", 5000)] {
        let mut ctx = TestContext::new().load_source(source);

        let err = ctx.try_run().unwrap_err();

        assert!(
            matches!(
                err,
                SimError::Fault {
                    cycle: 6,
                    stage: PipeStage::Execute,
                    mnemonic: "JMP",
                    pc: 0,
                    source: Fault::AddressOutOfBounds { addr },
                } if addr == target
            ),
            "got {err:?}"
        );
        assert_eq!(ctx.get_reg(1), 0);
    }
}

#[test]
fn backward_jeq_below_zero_faults_in_execute() {
    let mut ctx = TestContext::new().load_source("JEQ R0 R0 -10\nMOVI R1 R0 1\n");

    let err = ctx.try_run().unwrap_err();

    assert!(
        matches!(
            err,
            SimError::Fault {
                cycle: 6,
                stage: PipeStage::Execute,
                mnemonic: "JEQ",
                pc: 0,
                source: Fault::AddressOutOfBounds { addr: 0xFFFF_FFF7 },
            }
        ),
        "got {err:?}"
    );
}

#[test]
fn self_loop_hits_the_cycle_cap() {
    let mut config = Config::default();
    config.general.max_cycles = Some(50);
    let mut ctx = TestContext::with_config(&config).load_source("JEQ R0 R0 -1\n");

    let err = ctx.try_run().unwrap_err();
    assert!(matches!(err, SimError::CycleLimit { limit: 50 }));
    assert_eq!(ctx.sim.cycle(), 50);
}
