//! RV32I subset interpreter library.
//!
//! This crate implements a software interpreter for a subset of the RV32I
//! base integer instruction set, with the following:
//! 1. **ISA:** Bit-field extraction, the six instruction format views,
//!    classification selectors, and a disassembler.
//! 2. **Core:** Register file, program image, and the fetch-decode-execute
//!    engine with a typed halt taxonomy.
//! 3. **Host Surface:** Configuration, execution statistics, and
//!    per-instruction trace events.
//!
//! The supported subset is the integer computational and control-transfer
//! instructions: immediate and register ALU groups, `lui`/`auipc`,
//! conditional branches, and `jal`/`jalr`. There is no data memory; a
//! program's only observable effects are its final register file and halt
//! reason, which makes the machine a convenient target for instruction-level
//! unit tests.
//!
//! # Example
//!
//! ```
//! use rv32vm_core::{Config, Cpu};
//!
//! // addi x15, x15, 1 -- three times.
//! let program = [0x00178793, 0x00178793, 0x00178793];
//! let mut cpu = Cpu::from_words(program, &Config::default());
//!
//! let reason = cpu.run();
//! assert!(reason.is_program_end());
//! assert_eq!(cpu.read_register(15), 3);
//! ```

/// Common outcome and error types (step results, halt reasons).
pub mod common;
/// Interpreter configuration (defaults and run settings).
pub mod config;
/// Machine state and the execution engine (registers, image, CPU).
pub mod core;
/// Instruction set definitions (formats, selectors, constants, disasm).
pub mod isa;
/// Execution statistics collection and reporting.
pub mod stats;

/// Step outcome and halt taxonomy; what `step()` and `run()` report.
pub use crate::common::{HaltReason, ImageError, StepResult};
/// Root configuration type; use `Config::default()` or deserialize from JSON.
pub use crate::config::Config;
/// Main machine type; owns the register file, program image, and counters.
pub use crate::core::Cpu;
/// Program image type; construct from words or little-endian bytes.
pub use crate::core::image::ProgramImage;
/// Execution statistics; retired/ALU/branch/jump counters.
pub use crate::stats::ExecStats;
