mod cpu6502;
mod instructions;

use crate::cpu6502::{new_cpu, trace, CPU};

const USAGE: &str = "Usage: emu6502 <image> [load-addr-hex] [entry-hex] [--trace]";

fn parse_hex(arg: &str) -> u16 {
    let digits = arg.trim_start_matches("0x").trim_start_matches('$');
    u16::from_str_radix(digits, 16).expect("addresses are hexadecimal, e.g. 0x0400")
}

fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let with_trace = args.iter().any(|arg| arg == "--trace");
    let mut positional = args.iter().filter(|arg| !arg.starts_with("--"));

    let image = positional.next().expect(USAGE);
    let load_addr = positional.next().map_or(CPU::DEFAULT_PROGRAM_START, |arg| parse_hex(arg));
    let entry = positional.next().map(|arg| parse_hex(arg));

    let mut cpu: CPU = new_cpu();
    cpu.load_program_from_file(image, load_addr)
        .expect("Failed to read program file");
    if let Some(entry) = entry {
        cpu.program_counter = entry;
    }

    let error = if with_trace {
        cpu.run_with_callback(|cpu| {
            println!("{}", trace(cpu));
        })
    } else {
        cpu.run()
    };

    println!("{}", trace(&cpu));
    println!("stopped: {}", error);
}
