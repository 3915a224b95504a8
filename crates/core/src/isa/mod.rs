//! Instruction Set Architecture (ISA) definitions.
//!
//! Contains the bit-level decoding layer: extraction primitives, the six
//! RV32I format views, routing selectors, named opcode/funct constants, and
//! the disassembler used for traces and diagnostics.
//!
//! # Decode pipeline
//!
//! A fetched word is classified through [`instruction::InstructionBits`]
//! (family and opcode), then interpreted through the matching
//! [`formats`] view. Nothing in this module holds state; every item is a
//! pure projection of the 32-bit word it is given.

/// Application Binary Interface (ABI) register name mappings.
pub mod abi;

/// Bit-field extraction and sign-extension primitives.
pub mod bits;

/// Instruction disassembler for trace output and diagnostics.
pub mod disasm;

/// Stateless views for the six RV32I instruction formats.
pub mod formats;

/// Instruction classification selectors (family, opcode, funct codes).
pub mod instruction;

/// Base integer instruction set constants (32-bit RISC-V subset).
pub mod rv32i;
