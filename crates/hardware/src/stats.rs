//! Simulation statistics collection and reporting.
//!
//! This module tracks performance metrics for the pipeline simulator. It provides:
//! 1. **Cycle and IPC:** Total cycles, retired instructions, and derived metrics (CPI, IPC).
//! 2. **Instruction mix:** Counts by category (ALU, load, store, branch).
//! 3. **Control flow:** Taken branches and the instructions they flushed.
//! 4. **Stalls:** Decode stalls on a busy EX and suppressed fetch cycles.

use std::time::Instant;

/// Simulation statistics structure tracking all performance metrics.
#[derive(Clone, Debug)]
pub struct SimStats {
    start_time: Instant,
    /// Total simulator cycles elapsed.
    pub cycles: u64,
    /// Number of instructions that completed write-back.
    pub instructions_retired: u64,

    /// Count of `MOVR` instructions retired.
    pub inst_load: u64,
    /// Count of `MOVM` instructions retired.
    pub inst_store: u64,
    /// Count of `JEQ`/`JMP` instructions retired.
    pub inst_branch: u64,
    /// Count of ALU instructions (including `MOVI`) retired.
    pub inst_alu: u64,

    /// Number of `JEQ`/`JMP` instructions that redirected the PC.
    pub branches_taken: u64,
    /// Number of IF/ID occupants discarded by taken branches.
    pub instructions_flushed: u64,

    /// Cycles an instruction sat in ID with its latency elapsed because EX was busy.
    pub stalls_decode: u64,
    /// Cycles in which fetch was suppressed after a taken branch.
    pub stalls_fetch: u64,
}

impl Default for SimStats {
    fn default() -> Self {
        Self {
            start_time: Instant::now(),
            cycles: 0,
            instructions_retired: 0,
            inst_load: 0,
            inst_store: 0,
            inst_branch: 0,
            inst_alu: 0,
            branches_taken: 0,
            instructions_flushed: 0,
            stalls_decode: 0,
            stalls_fetch: 0,
        }
    }
}

/// Valid section names for [`SimStats::print_sections`].
pub const STATS_SECTIONS: &[&str] = &["summary", "instruction_mix", "control", "stalls"];

impl SimStats {
    /// Cycles per retired instruction, or `0.0` before anything retires.
    pub fn cpi(&self) -> f64 {
        if self.instructions_retired == 0 {
            0.0
        } else {
            self.cycles as f64 / self.instructions_retired as f64
        }
    }

    /// Retired instructions per cycle, or `0.0` before the first cycle.
    pub fn ipc(&self) -> f64 {
        if self.cycles == 0 {
            0.0
        } else {
            self.instructions_retired as f64 / self.cycles as f64
        }
    }

    /// Prints the selected report sections to stdout.
    ///
    /// An empty `sections` list prints everything. See [`STATS_SECTIONS`].
    pub fn print_sections(&self, sections: &[String]) {
        let want = |s: &str| sections.is_empty() || sections.iter().any(|x| x == s);
        let seconds = self.start_time.elapsed().as_secs_f64();
        let cyc = self.cycles.max(1) as f64;
        let instr = self.instructions_retired.max(1) as f64;

        if want("summary") {
            println!("\n==========================================================");
            println!("PIPELINE SIMULATION STATISTICS");
            println!("==========================================================");
            println!("host_seconds             {seconds:.4} s");
            println!("sim_cycles               {}", self.cycles);
            println!("sim_insts                {}", self.instructions_retired);
            println!("sim_ipc                  {:.4}", self.ipc());
            println!("sim_cpi                  {:.4}", self.cpi());
            println!("----------------------------------------------------------");
        }
        if want("instruction_mix") {
            println!("INSTRUCTION MIX");
            for (name, count) in [
                ("op.alu", self.inst_alu),
                ("op.load", self.inst_load),
                ("op.store", self.inst_store),
                ("op.branch", self.inst_branch),
            ] {
                println!(
                    "  {name:<22} {count} ({:.2}%)",
                    (count as f64 / instr) * 100.0
                );
            }
            println!("----------------------------------------------------------");
        }
        if want("control") {
            println!("CONTROL FLOW");
            println!("  branches.taken         {}", self.branches_taken);
            println!("  insts.flushed          {}", self.instructions_flushed);
            println!("----------------------------------------------------------");
        }
        if want("stalls") {
            println!("STALLS");
            println!(
                "  stalls.decode          {} ({:.2}%)",
                self.stalls_decode,
                (self.stalls_decode as f64 / cyc) * 100.0
            );
            println!(
                "  stalls.fetch           {} ({:.2}%)",
                self.stalls_fetch,
                (self.stalls_fetch as f64 / cyc) * 100.0
            );
            println!("==========================================================");
        }
    }
}
