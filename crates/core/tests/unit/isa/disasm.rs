//! Instruction Disassembler Unit Tests.
//!
//! Verifies that the disassembler converts the supported RV32I encodings
//! to human-readable mnemonics and renders everything else as `unknown`
//! with the raw word.

use rv32vm_core::isa::disasm::disassemble;
use rv32vm_core::isa::rv32i::{funct3, funct7, opcodes};

use crate::common::encode::{b_type, i_type, j_type, r_type, u_type};

// ══════════════════════════════════════════════════════════
// 1. ALU groups
// ══════════════════════════════════════════════════════════

#[test]
fn disasm_add() {
    let inst = r_type(opcodes::OP_REG, 10, funct3::ADD_SUB, 11, 12, funct7::DEFAULT);
    let text = disassemble(inst);
    assert!(text.starts_with("add "), "Expected 'add', got '{}'", text);
    assert!(text.contains("a0"), "Expected a0 (x10) in '{}'", text);
}

#[test]
fn disasm_sub() {
    let inst = r_type(opcodes::OP_REG, 10, funct3::ADD_SUB, 11, 12, funct7::SUB);
    let text = disassemble(inst);
    assert!(text.starts_with("sub "), "Expected 'sub', got '{}'", text);
}

#[test]
fn disasm_addi() {
    // addi a0, zero, 3
    let text = disassemble(0x00300513);
    assert!(text.starts_with("addi "), "Expected 'addi', got '{}'", text);
    assert!(text.contains("zero"), "Expected zero (x0) in '{}'", text);
    assert!(text.contains('3'), "Expected immediate 3 in '{}'", text);
}

#[test]
fn disasm_addi_negative() {
    let inst = i_type(opcodes::OP_IMM, 10, funct3::ADD_SUB, 0, -1);
    let text = disassemble(inst);
    assert!(text.contains("-1"), "Expected immediate -1 in '{}'", text);
}

#[test]
fn disasm_shift_immediates_split_on_funct7() {
    let srli = r_type(opcodes::OP_IMM, 10, funct3::SRL_SRA, 10, 5, funct7::DEFAULT);
    let srai = r_type(opcodes::OP_IMM, 10, funct3::SRL_SRA, 10, 5, funct7::SRA);
    assert!(disassemble(srli).starts_with("srli "));
    assert!(disassemble(srai).starts_with("srai "));
}

// ══════════════════════════════════════════════════════════
// 2. Upper immediates
// ══════════════════════════════════════════════════════════

#[test]
fn disasm_lui() {
    let inst = u_type(opcodes::OP_LUI, 5, 0x12345);
    let text = disassemble(inst);
    assert!(text.starts_with("lui "), "Expected 'lui', got '{}'", text);
    assert!(text.contains("0x12345"), "Expected raw field in '{}'", text);
}

#[test]
fn disasm_auipc() {
    let inst = u_type(opcodes::OP_AUIPC, 5, 0x1);
    assert!(disassemble(inst).starts_with("auipc "));
}

// ══════════════════════════════════════════════════════════
// 3. Control transfer
// ══════════════════════════════════════════════════════════

#[test]
fn disasm_bne_with_negative_offset() {
    let inst = b_type(opcodes::OP_BRANCH, funct3::BNE, 15, 10, -8);
    let text = disassemble(inst);
    assert!(text.starts_with("bne "), "Expected 'bne', got '{}'", text);
    assert!(text.contains("a5"), "Expected a5 (x15) in '{}'", text);
    assert!(text.contains("-8"), "Expected offset -8 in '{}'", text);
}

#[test]
fn disasm_jal() {
    let inst = j_type(opcodes::OP_JAL, 1, 16);
    let text = disassemble(inst);
    assert!(text.starts_with("jal "), "Expected 'jal', got '{}'", text);
    assert!(text.contains("ra"), "Expected ra (x1) in '{}'", text);
}

#[test]
fn disasm_ret() {
    // jalr x0, 0(ra)
    let text = disassemble(0x00008067);
    assert!(text.starts_with("jalr "), "Expected 'jalr', got '{}'", text);
    assert!(text.contains("(ra)"), "Expected base register in '{}'", text);
}

// ══════════════════════════════════════════════════════════
// 4. Unknown encodings
// ══════════════════════════════════════════════════════════

#[test]
fn disasm_unknown_renders_raw_word() {
    // Compressed-family word: family bits are not 0b11.
    let text = disassemble(0x0000_0001);
    assert!(text.starts_with("unknown"), "Expected 'unknown', got '{}'", text);
    assert!(text.contains("0x00000001"), "Expected raw hex in '{}'", text);
}

#[test]
fn disasm_unknown_opcode() {
    // System opcode (0x1C), outside the supported subset.
    let inst = i_type(0b11100, 0, 0, 0, 0);
    assert!(disassemble(inst).starts_with("unknown"));
}

#[test]
fn disasm_unknown_funct() {
    // Branch with reserved funct3 2.
    let inst = b_type(opcodes::OP_BRANCH, 0b010, 1, 2, 8);
    assert!(disassemble(inst).starts_with("unknown"));
}
