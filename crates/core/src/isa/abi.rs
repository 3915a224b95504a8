//! RISC-V Application Binary Interface (ABI) register name constants.
//!
//! Defines the ABI register indices the interpreter and its hosts refer to
//! by name: the hardwired zero register, the link register used by jumps,
//! and the argument registers conventionally used by test programs.

/// Register x0 (zero register, always zero).
pub const REG_ZERO: usize = 0;
/// Register x1 (return address, ra).
pub const REG_RA: usize = 1;
/// Register x2 (stack pointer, sp).
pub const REG_SP: usize = 2;
/// Register x10 (first argument/return value, a0).
pub const REG_A0: usize = 10;
/// Register x15 (sixth argument, a5).
pub const REG_A5: usize = 15;
