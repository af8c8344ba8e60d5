//! Pipeline simulator CLI.
//!
//! This binary is the command-line front end for `minirisc-core`. It performs:
//! 1. **Run:** Assemble a program, simulate it to completion and print the per-cycle pipeline table,
//!    final registers and non-zero data memory (or JSON lines with `--json`).
//! 2. **Assemble:** Print an address / word / disassembly listing of a program.

mod render;

use std::path::{Path, PathBuf};
use std::process;

use clap::{ArgAction, Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use minirisc_core::asm::AsmError;
use minirisc_core::config::Config;
use minirisc_core::sim::loader;
use minirisc_core::{SimError, Simulator};

#[derive(Parser, Debug)]
#[command(
    name = "minirisc",
    author,
    version,
    about = "Cycle-accurate 5-stage pipeline simulator",
    long_about = "Assemble and run programs for a 12-instruction, 32-bit teaching ISA on an IF/ID/EX/MEM/WB pipeline.\n\nExamples:\n  minirisc run program.txt\n  minirisc run program.txt --reg R2=4 --reg R3=5 --quiet\n  minirisc run program.txt --json > trace.jsonl\n  minirisc asm program.txt"
)]
struct Cli {
    /// Log verbosity: -v for write-back/branch events, -vv for every stage.
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Assemble and simulate a program until the pipeline drains.
    Run {
        /// Program source file.
        file: PathBuf,

        /// JSON configuration file.
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Abort if the pipeline has not drained after this many cycles.
        #[arg(long)]
        max_cycles: Option<u64>,

        /// Initial register value, e.g. `R2=4` (repeatable).
        #[arg(long = "reg", value_parser = parse_reg_assignment)]
        regs: Vec<(usize, u32)>,

        /// Print only the final state, not the per-cycle pipeline table.
        #[arg(short, long)]
        quiet: bool,

        /// Emit one JSON snapshot per cycle and a JSON summary instead of tables.
        #[arg(long)]
        json: bool,

        /// Print the statistics report after the run.
        #[arg(long)]
        stats: bool,
    },

    /// Assemble a program and print its listing.
    Asm {
        /// Program source file.
        file: PathBuf,
    },
}

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Run {
            file,
            config,
            max_cycles,
            regs,
            quiet,
            json,
            stats,
        } => cmd_run(
            &file,
            config,
            max_cycles,
            regs,
            &RunOutput { quiet, json, stats },
            cli.verbose,
        ),
        Commands::Asm { file } => {
            init_logging(cli.verbose);
            cmd_asm(&file)
        }
    };

    if let Err(e) = result {
        eprintln!("\n[!] FATAL: {e}");
        let mut source = std::error::Error::source(&e);
        while let Some(cause) = source {
            eprintln!("    caused by: {cause}");
            source = cause.source();
        }
        process::exit(1);
    }
}

struct RunOutput {
    quiet: bool,
    json: bool,
    stats: bool,
}

fn cmd_run(
    file: &Path,
    config_path: Option<PathBuf>,
    max_cycles: Option<u64>,
    regs: Vec<(usize, u32)>,
    output: &RunOutput,
    verbose: u8,
) -> Result<(), SimError> {
    let mut config = match config_path {
        Some(path) => Config::from_file(path)?,
        None => Config::default(),
    };
    if max_cycles.is_some() {
        config.general.max_cycles = max_cycles;
    }
    config.init.registers.extend(regs);
    init_logging(verbose.max(u8::from(config.general.trace_instructions)));

    let program = loader::load_program(file)?;
    for diag in &program.diagnostics {
        let message = match &diag.error {
            AsmError::UnknownMnemonic(name) => {
                format!("Unknown instruction: {name} (line {})", diag.line)
            }
            _ => format!("Skipped {diag}"),
        };
        if output.json {
            eprintln!("{message}");
        } else {
            println!("{message}");
        }
    }

    let mut sim = Simulator::with_program(&program.words, &config)?;

    if output.json {
        let cycles = sim.run_with(|s| match serde_json::to_string(&s.snapshot()) {
            Ok(line) => println!("{line}"),
            Err(e) => tracing::error!("snapshot serialization failed: {e}"),
        })?;
        let summary = serde_json::json!({
            "cycles": cycles,
            "pc": sim.pc(),
            "registers": sim.registers(),
            "data_memory": sim.data_memory(),
        });
        println!("{summary}");
    } else {
        println!("Instructions loaded into memory.");
        println!("\n=== Starting Pipeline Simulation ===");
        let quiet = output.quiet;
        let cycles = sim.run_with(|s| {
            if !quiet {
                render::print_cycle(&s.snapshot());
            }
        })?;
        println!("\n=== Simulation Complete ({cycles} cycles) ===");
        render::print_registers(sim.registers(), sim.pc());
        render::print_data_memory(&sim.data_memory());
    }

    if output.stats {
        sim.stats().print_sections(&config.general.stats_sections);
    }
    Ok(())
}

fn cmd_asm(file: &Path) -> Result<(), SimError> {
    let program = loader::load_program(file)?;
    render::print_listing(&program);
    for diag in &program.diagnostics {
        eprintln!("{diag}: {}", diag.text);
    }
    Ok(())
}

/// Installs the stderr log subscriber. `RUST_LOG` overrides the verbosity flag.
fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .init();
}

/// Parses `R2=4`, `r2=-1` or `2=4` into a register index and value.
fn parse_reg_assignment(text: &str) -> Result<(usize, u32), String> {
    let (reg, value) = text
        .split_once('=')
        .ok_or_else(|| format!("expected R<n>=<value>, got `{text}`"))?;
    let reg = reg.trim();
    let digits = reg.strip_prefix(['R', 'r']).unwrap_or(reg);
    let idx = digits
        .parse::<usize>()
        .map_err(|e| format!("bad register `{reg}`: {e}"))?;
    let value = value.trim();
    let value = value
        .parse::<u32>()
        .or_else(|_| value.parse::<i32>().map(|v| v as u32))
        .map_err(|e| format!("bad value `{value}`: {e}"))?;
    Ok((idx, value))
}
