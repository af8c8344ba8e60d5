//! Console presentation of simulator state.

use minirisc_core::asm::Program;
use minirisc_core::core::pipeline::PipelineSnapshot;
use minirisc_core::isa::disassemble;

const RULE: &str = "+-------+---------------------------+";

/// Prints the `Clock Cycle N` stage table followed by the register dump.
pub fn print_cycle(snap: &PipelineSnapshot) {
    println!("\nClock Cycle {}", snap.cycle);
    println!("\n{RULE}");
    println!("| Stage | Instruction               |");
    println!("{RULE}");
    for view in &snap.stages {
        let text = view.slot.as_ref().map_or("---", |slot| slot.text.as_str());
        println!("| {:<5} | {text:<25} |", view.stage.label());
    }
    println!("{RULE}");
    print_registers(&snap.registers, snap.pc);
}

/// Prints every register as a signed value, then the PC.
pub fn print_registers(regs: &[u32], pc: u32) {
    println!("\n=== Register Dump ===");
    for (i, &val) in regs.iter().enumerate() {
        println!("R{i:<2} = {}", val as i32);
    }
    println!("PC  = {pc}");
}

/// Prints the non-zero data words, or a note that there are none.
pub fn print_data_memory(entries: &[(usize, u32)]) {
    println!("\n=== Data Memory Dump (non-zero entries) ===");
    if entries.is_empty() {
        println!("(all data memory is 0)");
    }
    for &(addr, val) in entries {
        println!("M[{addr}] = {}", val as i32);
    }
}

/// Prints `address  word  disassembly  ; line N` for every assembled word.
pub fn print_listing(program: &Program) {
    for (addr, (&word, &line)) in program.words.iter().zip(&program.lines).enumerate() {
        println!(
            "{addr:>4}  {word:#010x}  {:<24} ; line {line}",
            disassemble(word)
        );
    }
}
