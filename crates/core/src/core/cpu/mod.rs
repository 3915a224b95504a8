//! CPU core definition and initialization.
//!
//! This module defines the central `Cpu` structure, which holds the entire
//! machine state. It coordinates the following:
//! 1. **State Management:** Registers, program counter, and the halt latch.
//! 2. **Program Access:** The immutable image instructions are fetched from.
//! 3. **Observability:** Statistics, tracing, and state dumps for hosts.

/// Instruction execution: the fetch-decode-execute loop.
pub mod execution;

use crate::common::{HaltReason, ImageError};
use crate::config::Config;
use crate::core::gpr::Gpr;
use crate::core::image::ProgramImage;
use crate::stats::ExecStats;

/// Bytes per instruction slot.
///
/// Converts between slot indices and the byte addresses used by jump link
/// values and control-transfer targets.
pub(crate) const SLOT_BYTES: u32 = 4;

/// Main CPU structure containing all machine state.
///
/// One machine owns its program image and register file exclusively. The
/// program counter is word-granular: it indexes image slots, not bytes.
#[derive(Debug)]
pub struct Cpu {
    /// General-purpose registers.
    pub(super) gpr: Gpr,
    /// Program counter, in image slots.
    pub(super) pc: u32,
    /// The program being executed.
    pub(super) image: ProgramImage,
    /// Terminal condition, once one is reached.
    pub(super) halt: Option<HaltReason>,
    /// Execution statistics, updated as instructions retire.
    pub(super) stats: ExecStats,
    /// Emit a trace event per retired instruction.
    pub(super) trace: bool,
}

impl Cpu {
    /// Creates a new machine over `image` with the given configuration.
    ///
    /// Registers start zeroed and the program counter at slot 0.
    #[must_use]
    pub fn new(image: ProgramImage, config: &Config) -> Self {
        Self {
            gpr: Gpr::new(),
            pc: 0,
            image,
            halt: None,
            stats: ExecStats::default(),
            trace: config.general.trace_instructions,
        }
    }

    /// Creates a new machine from a sequence of instruction words.
    #[must_use]
    pub fn from_words(words: impl Into<Box<[u32]>>, config: &Config) -> Self {
        Self::new(ProgramImage::new(words), config)
    }

    /// Creates a new machine from a little-endian byte buffer.
    ///
    /// # Errors
    ///
    /// Returns [`ImageError::TruncatedWord`] when the buffer length is not
    /// a multiple of four.
    pub fn from_le_bytes(bytes: &[u8], config: &Config) -> Result<Self, ImageError> {
        Ok(Self::new(ProgramImage::from_le_bytes(bytes)?, config))
    }

    /// Reads a general-purpose register for host inspection.
    ///
    /// Register 0 always reads as zero.
    ///
    /// # Arguments
    ///
    /// * `idx` - Register index (0-31).
    #[must_use]
    pub const fn read_register(&self, idx: usize) -> u32 {
        self.gpr.read(idx)
    }

    /// Returns the current program counter, in image slots.
    #[must_use]
    pub const fn pc(&self) -> u32 {
        self.pc
    }

    /// Returns the halt reason if the machine has halted.
    #[must_use]
    pub const fn halted(&self) -> Option<&HaltReason> {
        self.halt.as_ref()
    }

    /// Returns the execution statistics collected so far.
    #[must_use]
    pub const fn stats(&self) -> &ExecStats {
        &self.stats
    }

    /// Dumps the program counter and the full register file to stdout.
    pub fn dump_state(&self) {
        println!(
            "pc ={:#010x} (slot {})",
            self.pc.wrapping_mul(SLOT_BYTES),
            self.pc
        );
        self.gpr.dump();
    }
}
