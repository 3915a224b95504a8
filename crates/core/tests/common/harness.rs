//! Machine construction and execution shortcuts.
//!
//! Most tests build a machine from a handful of words, run it, and assert
//! on the final register file and halt reason; these helpers keep that to
//! one line each.

use rv32vm_core::{Config, Cpu, HaltReason};

/// Builds a machine over `words` with the default configuration.
pub fn cpu(words: &[u32]) -> Cpu {
    Cpu::from_words(words, &Config::default())
}

/// Runs `words` to completion and returns the halted machine with its
/// reason.
pub fn run_to_halt(words: &[u32]) -> (Cpu, HaltReason) {
    let mut machine = cpu(words);
    let reason = machine.run();
    (machine, reason)
}
