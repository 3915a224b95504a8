//! Machine state and the execution engine.
//!
//! This module contains the interpreter's mutable state and the loop that
//! drives it: the register file, the program image the program counter
//! walks, and the CPU that fetches, decodes, and executes one instruction
//! per step.

/// CPU state and the fetch-decode-execute loop.
pub mod cpu;

/// General-purpose register file.
pub mod gpr;

/// Program image storage and instruction fetch.
pub mod image;

pub use self::cpu::Cpu;
