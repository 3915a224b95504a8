//! RV32I General-Purpose Register File.
//!
//! This module implements the General-Purpose Register (GPR) file for the
//! interpreter. It performs the following:
//! 1. **Storage:** Maintains 32 integer registers (`x0`-`x31`).
//! 2. **Invariant Enforcement:** Ensures that register `x0` reads as zero
//!    and that writes to it are discarded, so no instruction sequence can
//!    observe a nonzero `x0`.
//! 3. **Debugging:** Provides a utility for dumping the complete register
//!    state.

/// General-Purpose Register file.
///
/// Contains 32 general-purpose registers used for integer operations.
/// Register `x0` is hardwired to zero: reads always yield 0 and writes are
/// ignored, which keeps the zero-register invariant without any per-step
/// scrubbing by the execution engine.
#[derive(Debug)]
pub struct Gpr {
    regs: [u32; 32],
}

impl Gpr {
    /// Creates a new general-purpose register file with all registers
    /// initialized to zero.
    #[must_use]
    pub const fn new() -> Self {
        Self { regs: [0; 32] }
    }

    /// Reads a general-purpose register value.
    ///
    /// Register `x0` always returns 0. Indices above 31 panic; the decoder
    /// only produces 5-bit indices, so the execution engine never trips
    /// this.
    ///
    /// # Arguments
    ///
    /// * `idx` - Register index (0-31).
    #[inline]
    #[must_use]
    pub const fn read(&self, idx: usize) -> u32 {
        if idx == 0 { 0 } else { self.regs[idx] }
    }

    /// Writes a value to a general-purpose register.
    ///
    /// Writes to `x0` are discarded.
    ///
    /// # Arguments
    ///
    /// * `idx` - Register index (0-31).
    /// * `val` - The 32-bit value to write.
    #[inline]
    pub const fn write(&mut self, idx: usize, val: u32) {
        if idx != 0 {
            self.regs[idx] = val;
        }
    }

    /// Dumps the contents of all general-purpose registers to stdout.
    ///
    /// Displays registers in pairs with hexadecimal formatting for
    /// debugging purposes.
    pub fn dump(&self) {
        for i in (0..32).step_by(2) {
            println!(
                "x{:<2}={:#010x} x{:<2}={:#010x}",
                i,
                self.read(i),
                i + 1,
                self.read(i + 1)
            );
        }
    }
}

impl Default for Gpr {
    fn default() -> Self {
        Self::new()
    }
}
