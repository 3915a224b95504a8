//! RV32I major opcodes.
//!
//! Defines the 5-bit opcode field (bits 6-2) for every operation group the
//! interpreter dispatches on, plus the instruction-length family marker.

/// Instruction-length family for standard 32-bit encodings (bits 1-0).
pub const FAMILY_WIDE: u32 = 0b11;

/// Immediate arithmetic instructions (ADDI, SLTI, ANDI, shifts).
pub const OP_IMM: u32 = 0b00100;

/// Add Upper Immediate to PC (AUIPC).
pub const OP_AUIPC: u32 = 0b00101;

/// Register-register arithmetic (ADD, SUB, SLL, etc.).
pub const OP_REG: u32 = 0b01100;

/// Load Upper Immediate (LUI).
pub const OP_LUI: u32 = 0b01101;

/// Conditional branch instructions (BEQ, BNE, etc.).
pub const OP_BRANCH: u32 = 0b11000;

/// Jump and Link Register (JALR).
pub const OP_JALR: u32 = 0b11001;

/// Jump and Link (JAL).
pub const OP_JAL: u32 = 0b11011;
