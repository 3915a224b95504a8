//! RV32I subset interpreter CLI.
//!
//! This binary provides a single entry point for running programs. It
//! performs:
//! 1. **Program run:** Execute a program image (raw little-endian
//!    instruction words) loaded from disk.
//! 2. **Demo run:** Execute a small built-in counted loop, no file needed.
//!
//! A run that finishes by walking off the end of its image exits 0; every
//! other halt (or an exhausted step limit) exits 1 with the reason and the
//! final machine state on stderr/stdout.

use clap::{Parser, Subcommand};
use std::{fs, process};
use tracing_subscriber::EnvFilter;

use rv32vm_core::{Config, Cpu};

/// addi a0, zero, 3; addi a5, a5, 1; bne a5, a0, -4
const DEMO_PROGRAM: [u32; 3] = [0x0030_0513, 0x0017_8793, 0xFEA7_9EE3];

#[derive(Parser, Debug)]
#[command(
    name = "rv32vm",
    version,
    about = "RV32I subset interpreter",
    long_about = "Run a raw RV32I program image, or the built-in demo loop.\n\nA program image is a flat file of little-endian 32-bit instruction words,\nexecuted from the first word. Running off the end of the image is normal\ncompletion.\n\nExamples:\n  rv32vm run -f prog.bin\n  rv32vm run -f prog.bin --trace --limit 100000\n  rv32vm run -f prog.bin --config run.json\n  rv32vm demo --trace"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Run a program image.
    Run {
        /// Program image to execute.
        #[arg(short, long)]
        file: String,

        /// Log every retired instruction (disassembled) to stderr.
        #[arg(long)]
        trace: bool,

        /// Give up after at most this many instructions.
        #[arg(long)]
        limit: Option<u64>,

        /// JSON configuration file; command-line flags override it.
        #[arg(long)]
        config: Option<String>,
    },

    /// Run the built-in counted-loop demo.
    Demo {
        /// Log every retired instruction (disassembled) to stderr.
        #[arg(long)]
        trace: bool,
    },
}

fn main() {
    let cli = Cli::parse();

    match cli.command {
        Commands::Run {
            file,
            trace,
            limit,
            config,
        } => cmd_run(&file, trace, limit, config.as_deref()),
        Commands::Demo { trace } => cmd_demo(trace),
    }
}

/// Loads the run configuration and applies command-line overrides.
fn load_config(path: Option<&str>, trace: bool, limit: Option<u64>) -> Config {
    let mut config = match path {
        Some(path) => {
            let text = fs::read_to_string(path).unwrap_or_else(|e| {
                eprintln!("Error reading config {path}: {e}");
                process::exit(1);
            });
            serde_json::from_str(&text).unwrap_or_else(|e| {
                eprintln!("Error parsing config {path}: {e}");
                process::exit(1);
            })
        }
        None => Config::default(),
    };

    if trace {
        config.general.trace_instructions = true;
    }
    if limit.is_some() {
        config.general.step_limit = limit;
    }
    config
}

/// Installs the global trace subscriber, writing events to stderr.
///
/// `RUST_LOG` takes precedence when set; otherwise instruction tracing
/// selects the per-instruction event stream from the interpreter core.
fn init_tracing(trace: bool) {
    let fallback = if trace { "rv32vm_core=trace" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

/// Runs a program image from disk.
fn cmd_run(file: &str, trace: bool, limit: Option<u64>, config_path: Option<&str>) {
    let config = load_config(config_path, trace, limit);
    init_tracing(config.general.trace_instructions);

    let bytes = fs::read(file).unwrap_or_else(|e| {
        eprintln!("Error reading program {file}: {e}");
        process::exit(1);
    });
    let cpu = Cpu::from_le_bytes(&bytes, &config).unwrap_or_else(|e| {
        eprintln!("Error loading program {file}: {e}");
        process::exit(1);
    });

    println!("[*] Executing: {file} ({} bytes)", bytes.len());
    print_settings(&config);
    execute(cpu, &config);
}

/// Runs the built-in demo loop.
fn cmd_demo(trace: bool) {
    let config = load_config(None, trace, None);
    init_tracing(config.general.trace_instructions);

    println!("[*] Demo: counted loop to 3 ({} words)", DEMO_PROGRAM.len());
    print_settings(&config);
    execute(Cpu::from_words(DEMO_PROGRAM, &config), &config);
}

/// Prints the effective run settings.
fn print_settings(config: &Config) {
    match config.general.step_limit {
        Some(limit) => println!(
            "  Trace: {}  Step limit: {limit}",
            config.general.trace_instructions
        ),
        None => println!(
            "  Trace: {}  Step limit: none",
            config.general.trace_instructions
        ),
    }
    println!();
}

/// Runs the machine to completion and exits the process.
///
/// Exit code 0 is reserved for a program that cleanly ran off the end of
/// its image; any other halt reason, and an exhausted step limit, exit 1.
fn execute(mut cpu: Cpu, config: &Config) -> ! {
    let reason = match config.general.step_limit {
        Some(limit) => cpu.run_for(limit),
        None => Some(cpu.run()),
    };

    match reason {
        Some(reason) if reason.is_program_end() => {
            println!("\n[*] Program complete: {reason}");
            cpu.dump_state();
            cpu.stats().print();
            process::exit(0);
        }
        Some(reason) => {
            eprintln!("\n[!] HALT: {reason}");
            cpu.dump_state();
            cpu.stats().print();
            process::exit(1);
        }
        None => {
            eprintln!(
                "\n[!] Step limit exhausted after {} instructions",
                cpu.stats().retired
            );
            cpu.dump_state();
            cpu.stats().print();
            process::exit(1);
        }
    }
}
