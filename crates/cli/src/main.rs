//! Nibble-serial core simulator CLI.
//!
//! This binary runs JSON program images on the slice core. It performs:
//! 1. **Configuration:** Built-in defaults, optionally replaced by a JSON `Config` file.
//! 2. **Execution:** Loads registers, memory and instructions, then runs until the PC leaves the program.
//! 3. **Reporting:** Prints the register file, non-zero memory and statistics.

use std::{fs, process};

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use slicev_core::config::Config;
use slicev_core::sim::{Machine, Program};

#[derive(Parser, Debug)]
#[command(
    name = "slicev",
    author,
    version,
    about = "Nibble-serial RV32 core simulator",
    long_about = "Run a JSON program image on the slice-serial core model.\n\nExamples:\n  slicev run program.json\n  slicev run program.json --config core.json --trace"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Run a program image to completion.
    Run {
        /// Program image (JSON).
        program: String,

        /// Configuration file (JSON); defaults are used when omitted.
        #[arg(short, long)]
        config: Option<String>,

        /// Log every clock (sets the default log level to `trace`).
        #[arg(long)]
        trace: bool,

        /// Skip the memory dump.
        #[arg(long)]
        no_memory: bool,
    },
}

fn main() {
    let cli = Cli::parse();
    match cli.command {
        Commands::Run {
            program,
            config,
            trace,
            no_memory,
        } => {
            init_logging(trace);
            cmd_run(&program, config.as_deref(), trace, no_memory);
        }
    }
}

/// Installs the log subscriber; `RUST_LOG` overrides the default level.
fn init_logging(trace: bool) {
    let default = if trace { "trace" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn read_file(path: &str) -> String {
    fs::read_to_string(path).unwrap_or_else(|e| {
        eprintln!("\n[!] FATAL: Could not read file '{path}': {e}");
        process::exit(1);
    })
}

fn cmd_run(program_path: &str, config_path: Option<&str>, trace: bool, no_memory: bool) {
    let mut config = match config_path {
        Some(path) => Config::from_json(&read_file(path)).unwrap_or_else(|e| {
            eprintln!("\n[!] FATAL: Invalid configuration '{path}': {e}");
            process::exit(1);
        }),
        None => Config::default(),
    };
    config.sim.trace_clocks |= trace;

    let program = Program::from_json(&read_file(program_path)).unwrap_or_else(|e| {
        eprintln!("\n[!] FATAL: Invalid program '{program_path}': {e}");
        process::exit(1);
    });

    let mut machine = Machine::new(&config).unwrap_or_else(|e| {
        eprintln!("\n[!] FATAL: {e}");
        process::exit(1);
    });

    println!("[*] Running {} instructions from {program_path}", program.instructions.len());
    let outcome = program.run(&mut machine);

    println!("\nREGISTERS (pc = {:#010x})", machine.pc());
    for (reg, value) in machine.regs().iter() {
        println!("  {:<4} {value:#010x}  {}", reg.to_string(), value as i32);
    }
    if !no_memory && !machine.memory().is_empty() {
        println!("\nMEMORY");
        for (addr, byte) in machine.memory().iter() {
            println!("  {addr:#09x}: {byte:#04x}");
        }
    }
    println!();
    machine.stats().print();

    if let Err(e) = outcome {
        eprintln!("\n[!] Simulation stopped: {e}");
        process::exit(2);
    }
}
