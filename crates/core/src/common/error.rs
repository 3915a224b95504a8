//! Step outcome and halt reason definitions.
//!
//! This module defines how the execution engine reports progress and
//! termination. It provides:
//! 1. **Step Outcomes:** `StepResult`, returned by every call to `step()`.
//! 2. **Halt Taxonomy:** `HaltReason`, the terminal conditions with enough
//!    decode context to diagnose the instruction that caused them.
//! 3. **Image Errors:** `ImageError`, raised while building a program image
//!    from a byte buffer.
//!
//! Running off the end of the image is how a straight-line program finishes,
//! so `OutOfBounds` doubles as normal completion; hosts distinguish the two
//! through [`HaltReason::is_program_end`].

use thiserror::Error;

/// Outcome of executing a single instruction.
///
/// A halted machine stays halted: once `step()` has returned
/// [`StepResult::Halted`], every further call returns the same reason.
#[derive(Debug, Clone, PartialEq, Eq)]
#[must_use]
pub enum StepResult {
    /// The instruction retired and the machine can take another step.
    Continue,
    /// The machine reached a terminal condition.
    Halted(HaltReason),
}

/// Terminal condition ending a run.
///
/// Every variant is fatal; none is retried. The variants carry the decode
/// context needed to report *which* instruction stopped the machine, not
/// just that one did.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HaltReason {
    /// The program counter left the program image.
    ///
    /// `pc == len` is the designed way a program that runs off its last
    /// instruction "returns"; any other value means a jump or branch
    /// escaped the image.
    #[error("program counter {pc} outside image of {len} words")]
    OutOfBounds {
        /// Word-granular program counter at the failed fetch.
        pc: u32,
        /// Image length in words.
        len: usize,
    },

    /// No implemented instruction matches the fetched word.
    ///
    /// Carries the full selector breakdown so an unmatched encoding can be
    /// traced back to the exact family/opcode/funct combination.
    #[error(
        "unimplemented instruction {word:#010x} \
         (family {family:#04b}, opcode {opcode:#04x}, funct3 {funct3:#05b}, funct7 {funct7:#09b})"
    )]
    Unimplemented {
        /// The raw instruction encoding.
        word: u32,
        /// Instruction-length family (bits 1-0).
        family: u32,
        /// Major opcode (bits 6-2).
        opcode: u32,
        /// Minor function code (bits 14-12).
        funct3: u32,
        /// Alternate-encoding bits (bits 31-25).
        funct7: u32,
    },

    /// A control transfer decoded successfully but its byte target is not
    /// word-aligned, so it cannot name a slot in the image.
    #[error("illegal control transfer in {word:#010x}: byte target {target:#010x} is not word-aligned")]
    Illegal {
        /// The raw instruction encoding.
        word: u32,
        /// The unaligned byte target the transfer asked for.
        target: u32,
    },
}

impl HaltReason {
    /// Returns `true` when this halt is a clean run off the end of the image.
    ///
    /// Only an [`HaltReason::OutOfBounds`] with the program counter exactly
    /// one slot past the last instruction qualifies; hosts map this to a
    /// successful exit.
    #[must_use]
    pub const fn is_program_end(&self) -> bool {
        matches!(self, Self::OutOfBounds { pc, len } if *pc as usize == *len)
    }
}

/// Failure constructing a program image from raw bytes.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ImageError {
    /// The byte buffer does not divide into whole 32-bit words.
    #[error("byte image length {len} is not a multiple of 4")]
    TruncatedWord {
        /// Length of the rejected byte buffer.
        len: usize,
    },
}
