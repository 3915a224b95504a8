//! RV32I base integer instruction set constants.
//!
//! Named selector values for every opcode and function code the dispatcher
//! matches on.
//!
//! # Structure
//!
//! - `opcodes`: Major opcodes (OpImm, Auipc, OpReg, Lui, Branch, Jalr, Jal).
//! - `funct3`: Minor codes distinguishing instructions within a major opcode.
//! - `funct7`: Alternate-encoding bits for R-type-shaped instructions.

/// Function code 3 definitions for base integer operations.
pub mod funct3;

/// Function code 7 definitions for base integer operations.
pub mod funct7;

/// Base integer instruction set opcodes.
pub mod opcodes;
