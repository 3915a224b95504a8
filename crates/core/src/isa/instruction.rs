//! Instruction classification utilities.
//!
//! Routing an instruction to its handler group uses two selectors derived
//! from the raw word: the `family` (bits 1-0, `0b11` for all standard
//! 32-bit encodings) and the `opcode` (bits 6-2). Finer disambiguation
//! within a group uses `funct3` and, for R-type-shaped encodings, `funct7`.
//! None of these are stored anywhere; they are recomputed from the word.

/// Bit mask for the instruction-length family field (bits 1-0).
pub const FAMILY_MASK: u32 = 0x3;
/// Bit shift for the opcode field above the family bits.
pub const OPCODE_SHIFT: u32 = 2;
/// Bit mask for the 5-bit opcode field (bits 6-2).
pub const OPCODE_MASK: u32 = 0x1F;
/// Bit shift for the funct3 field.
pub const FUNCT3_SHIFT: u32 = 12;
/// Bit mask for the funct3 field (bits 14-12).
pub const FUNCT3_MASK: u32 = 0x7;
/// Bit shift for the funct7 field.
pub const FUNCT7_SHIFT: u32 = 25;
/// Bit mask for the funct7 field (bits 31-25).
pub const FUNCT7_MASK: u32 = 0x7F;

/// Trait for extracting routing selectors from an encoded instruction.
///
/// Implemented on `u32` so any fetched word can be classified without an
/// intermediate decode structure.
pub trait InstructionBits {
    /// Extracts the instruction-length family (bits 1-0).
    ///
    /// `0b11` marks a standard 32-bit encoding; anything else belongs to
    /// the compressed or reserved length encodings, which this interpreter
    /// does not implement.
    fn family(&self) -> u32;

    /// Extracts the 5-bit opcode field (bits 6-2).
    ///
    /// Together with the family, this selects the operation group
    /// (immediate ALU, register ALU, branch, jump, upper-immediate).
    fn opcode(&self) -> u32;

    /// Extracts the funct3 field (bits 14-12).
    ///
    /// Distinguishes operations sharing an opcode (ADDI vs ANDI, BEQ vs BNE).
    fn funct3(&self) -> u32;

    /// Extracts the funct7 field (bits 31-25).
    ///
    /// Distinguishes standard from alternate encodings that share both
    /// opcode and funct3 (ADD vs SUB, SRL vs SRA).
    fn funct7(&self) -> u32;
}

impl InstructionBits for u32 {
    #[inline(always)]
    fn family(&self) -> u32 {
        self & FAMILY_MASK
    }

    #[inline(always)]
    fn opcode(&self) -> u32 {
        (self >> OPCODE_SHIFT) & OPCODE_MASK
    }

    #[inline(always)]
    fn funct3(&self) -> u32 {
        (self >> FUNCT3_SHIFT) & FUNCT3_MASK
    }

    #[inline(always)]
    fn funct7(&self) -> u32 {
        (self >> FUNCT7_SHIFT) & FUNCT7_MASK
    }
}
