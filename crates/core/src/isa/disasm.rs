//! Instruction disassembler for the supported RV32I subset.
//!
//! Converts a 32-bit instruction encoding into a human-readable mnemonic
//! string for trace output, logging, and test diagnostics. Encodings
//! outside the supported subset render as `unknown (0x...)` with their raw
//! value so halted runs stay diagnosable.

use crate::isa::formats::{BType, IType, JType, RType, UType};
use crate::isa::instruction::InstructionBits;
use crate::isa::rv32i::{funct3, funct7, opcodes};

/// ABI register names for x0-x31.
const REG_NAMES: [&str; 32] = [
    "zero", "ra", "sp", "gp", "tp", "t0", "t1", "t2", "s0", "s1", "a0", "a1", "a2", "a3", "a4",
    "a5", "a6", "a7", "s2", "s3", "s4", "s5", "s6", "s7", "s8", "s9", "s10", "s11", "t3", "t4",
    "t5", "t6",
];

/// Returns the ABI name for an integer register index.
#[inline]
fn xreg(idx: usize) -> &'static str {
    REG_NAMES.get(idx).copied().unwrap_or("x??")
}

/// Renders an unrecognised encoding with its raw value.
fn unknown(inst: u32) -> String {
    format!("unknown ({inst:#010x})")
}

/// Disassembles a 32-bit RV32I instruction into a human-readable string.
///
/// Returns a mnemonic like `"add a0, a1, a2"`, or `"unknown (0x...)"` for
/// encodings outside the supported subset.
///
/// # Arguments
///
/// * `inst` - The raw 32-bit instruction encoding.
#[must_use]
pub fn disassemble(inst: u32) -> String {
    if inst.family() != opcodes::FAMILY_WIDE {
        return unknown(inst);
    }

    match inst.opcode() {
        // ── ALU groups ────────────────────────────────────
        opcodes::OP_IMM => disasm_op_imm(inst),
        opcodes::OP_REG => disasm_op_reg(inst),

        // ── Upper immediates ──────────────────────────────
        opcodes::OP_LUI => {
            let u = UType(inst);
            format!("lui {}, {:#x}", xreg(u.rd()), u.imm20())
        }
        opcodes::OP_AUIPC => {
            let u = UType(inst);
            format!("auipc {}, {:#x}", xreg(u.rd()), u.imm20())
        }

        // ── Control transfer ──────────────────────────────
        opcodes::OP_BRANCH => {
            let b = BType(inst);
            let mn = match b.funct3() {
                funct3::BEQ => "beq",
                funct3::BNE => "bne",
                funct3::BLT => "blt",
                funct3::BGE => "bge",
                funct3::BLTU => "bltu",
                funct3::BGEU => "bgeu",
                _ => return unknown(inst),
            };
            format!("{mn} {}, {}, {}", xreg(b.rs1()), xreg(b.rs2()), b.offset())
        }
        opcodes::OP_JAL => {
            let j = JType(inst);
            format!("jal {}, {}", xreg(j.rd()), j.offset())
        }
        opcodes::OP_JALR => {
            let i = IType(inst);
            format!("jalr {}, {}({})", xreg(i.rd()), i.imm(), xreg(i.rs1()))
        }

        _ => unknown(inst),
    }
}

/// Disassembles the immediate ALU group (opcode `OP_IMM`).
fn disasm_op_imm(inst: u32) -> String {
    let i = IType(inst);
    let (rd, rs1) = (xreg(i.rd()), xreg(i.rs1()));

    // Shifts overlap the R-type layout: the shift amount sits in the rs2
    // field and funct7 selects logical vs arithmetic.
    let r = RType(inst);
    let shamt = r.rs2();

    match i.funct3() {
        funct3::ADD_SUB => format!("addi {rd}, {rs1}, {}", i.imm()),
        funct3::SLT => format!("slti {rd}, {rs1}, {}", i.imm()),
        funct3::SLTU => format!("sltiu {rd}, {rs1}, {}", i.imm()),
        funct3::XOR => format!("xori {rd}, {rs1}, {}", i.imm()),
        funct3::OR => format!("ori {rd}, {rs1}, {}", i.imm()),
        funct3::AND => format!("andi {rd}, {rs1}, {}", i.imm()),
        funct3::SLL if r.funct7() == funct7::DEFAULT => format!("slli {rd}, {rs1}, {shamt}"),
        funct3::SRL_SRA if r.funct7() == funct7::DEFAULT => format!("srli {rd}, {rs1}, {shamt}"),
        funct3::SRL_SRA if r.funct7() == funct7::SRA => format!("srai {rd}, {rs1}, {shamt}"),
        _ => unknown(inst),
    }
}

/// Disassembles the register-register ALU group (opcode `OP_REG`).
fn disasm_op_reg(inst: u32) -> String {
    let r = RType(inst);
    let mn = match (r.funct3(), r.funct7()) {
        (funct3::ADD_SUB, funct7::DEFAULT) => "add",
        (funct3::ADD_SUB, funct7::SUB) => "sub",
        (funct3::SLL, funct7::DEFAULT) => "sll",
        (funct3::SLT, funct7::DEFAULT) => "slt",
        (funct3::SLTU, funct7::DEFAULT) => "sltu",
        (funct3::XOR, funct7::DEFAULT) => "xor",
        (funct3::SRL_SRA, funct7::DEFAULT) => "srl",
        (funct3::SRL_SRA, funct7::SRA) => "sra",
        (funct3::OR, funct7::DEFAULT) => "or",
        (funct3::AND, funct7::DEFAULT) => "and",
        _ => return unknown(inst),
    };
    format!("{mn} {}, {}, {}", xreg(r.rd()), xreg(r.rs1()), xreg(r.rs2()))
}
