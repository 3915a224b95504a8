//! Raw instruction encoders.
//!
//! Constructs 32-bit RV32I encodings from their fields, one function per
//! format. Each takes the 5-bit major opcode (the `rv32i::opcodes`
//! constants) and composes the wide-family marker itself, so tests build
//! instructions out of the same selector constants the dispatcher matches
//! on.

use rv32vm_core::isa::rv32i::opcodes;

/// Builds the low 7 opcode bits from a 5-bit major opcode.
fn full_opcode(opcode: u32) -> u32 {
    (opcode & 0x1F) << 2 | opcodes::FAMILY_WIDE
}

/// Encodes an R-type instruction.
pub fn r_type(opcode: u32, rd: u32, funct3: u32, rs1: u32, rs2: u32, funct7: u32) -> u32 {
    (funct7 & 0x7F) << 25
        | (rs2 & 0x1F) << 20
        | (rs1 & 0x1F) << 15
        | (funct3 & 0x7) << 12
        | (rd & 0x1F) << 7
        | full_opcode(opcode)
}

/// Encodes an I-type instruction.
pub fn i_type(opcode: u32, rd: u32, funct3: u32, rs1: u32, imm: i32) -> u32 {
    let imm_bits = (imm as u32) & 0xFFF;
    imm_bits << 20
        | (rs1 & 0x1F) << 15
        | (funct3 & 0x7) << 12
        | (rd & 0x1F) << 7
        | full_opcode(opcode)
}

/// Encodes an S-type instruction.
pub fn s_type(opcode: u32, funct3: u32, rs1: u32, rs2: u32, imm: i32) -> u32 {
    let v = imm as u32;
    let hi = (v >> 5) & 0x7F;
    let lo = v & 0x1F;
    hi << 25
        | (rs2 & 0x1F) << 20
        | (rs1 & 0x1F) << 15
        | (funct3 & 0x7) << 12
        | lo << 7
        | full_opcode(opcode)
}

/// Encodes a B-type instruction with a byte offset.
pub fn b_type(opcode: u32, funct3: u32, rs1: u32, rs2: u32, imm: i32) -> u32 {
    let v = imm as u32;
    let bit12 = (v >> 12) & 1;
    let bits10_5 = (v >> 5) & 0x3F;
    let bits4_1 = (v >> 1) & 0xF;
    let bit11 = (v >> 11) & 1;
    bit12 << 31
        | bits10_5 << 25
        | (rs2 & 0x1F) << 20
        | (rs1 & 0x1F) << 15
        | (funct3 & 0x7) << 12
        | bits4_1 << 8
        | bit11 << 7
        | full_opcode(opcode)
}

/// Encodes a U-type instruction from the raw 20-bit immediate field.
pub fn u_type(opcode: u32, rd: u32, imm20: u32) -> u32 {
    (imm20 & 0xFFFFF) << 12 | (rd & 0x1F) << 7 | full_opcode(opcode)
}

/// Encodes a J-type instruction with a byte offset.
pub fn j_type(opcode: u32, rd: u32, imm: i32) -> u32 {
    let v = imm as u32;
    let bit20 = (v >> 20) & 1;
    let bits10_1 = (v >> 1) & 0x3FF;
    let bit11 = (v >> 11) & 1;
    let bits19_12 = (v >> 12) & 0xFF;
    bit20 << 31
        | bits10_1 << 21
        | bit11 << 20
        | bits19_12 << 12
        | (rd & 0x1F) << 7
        | full_opcode(opcode)
}
