//! RV32I function codes (funct7).
//!
//! The `funct7` field (bits 31-25) distinguishes operations that share both
//! an opcode and a funct3 code. For shift-immediate instructions the same
//! bits validate the encoding (only two values are legal).

/// Default operation (ADD, SRL, SLLI, SRLI).
pub const DEFAULT: u32 = 0b0000000;

/// Alternate operation (SUB, SRA).
/// Distinguishes SUB from ADD when funct3 is `ADD_SUB`.
pub const SUB: u32 = 0b0100000;
/// Alias for SUB (used for Shift Right Arithmetic, including SRAI).
pub const SRA: u32 = 0b0100000;
