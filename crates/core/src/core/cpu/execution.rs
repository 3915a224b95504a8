//! Main execution loop.
//!
//! This module implements the fetch-decode-execute cycle of the machine.
//! It performs the following:
//! 1. **Stepping:** Single-instruction execution with bounds checking and
//!    the halt latch.
//! 2. **Dispatch:** Routing by family and opcode, disambiguation by funct3
//!    and funct7.
//! 3. **Semantics:** The RV32I subset (immediate and register ALU, upper
//!    immediates, conditional branches, jumps).
//! 4. **Observability:** Per-instruction trace events and halt diagnostics.

use tracing::{debug, trace};

use super::{Cpu, SLOT_BYTES};
use crate::common::{HaltReason, StepResult};
use crate::isa::abi;
use crate::isa::disasm::disassemble;
use crate::isa::formats::{BType, IType, JType, RType, UType};
use crate::isa::instruction::InstructionBits;
use crate::isa::rv32i::{funct3, funct7, opcodes};

/// Register shifts use only the low five bits of the rs2 value.
const SHIFT_MASK: u32 = 0x1F;

impl Cpu {
    /// Executes a single instruction.
    ///
    /// One step performs, in order:
    /// 1. Returns the stored reason unchanged if the machine has already
    ///    halted.
    /// 2. Halts with [`HaltReason::OutOfBounds`] when the program counter
    ///    is outside the image; landing exactly one slot past the last
    ///    instruction is how a straight-line program finishes.
    /// 3. Forces register `x0` to zero, then advances the program counter
    ///    one slot, before any redirect.
    /// 4. Classifies by family and opcode, disambiguates by funct3 and
    ///    funct7, and executes, writing the register file and/or
    ///    redirecting the program counter.
    ///
    /// Register `x0` cannot be disturbed by any of this: the register file
    /// pins it to zero on both read and write.
    pub fn step(&mut self) -> StepResult {
        if let Some(reason) = &self.halt {
            return StepResult::Halted(reason.clone());
        }

        let slot = self.pc;
        let Some(word) = self.image.fetch(slot) else {
            return self.halt_with(HaltReason::OutOfBounds {
                pc: slot,
                len: self.image.len(),
            });
        };
        // x0 never carries a value into dispatch.
        self.gpr.write(abi::REG_ZERO, 0);
        self.pc = slot.wrapping_add(1);

        match self.dispatch(slot, word) {
            Ok(()) => {
                self.stats.retired += 1;
                if self.trace {
                    trace!(target: "rv32vm_core", slot, "{}", disassemble(word));
                }
                StepResult::Continue
            }
            Err(reason) => self.halt_with(reason),
        }
    }

    /// Steps until the machine halts and returns the reason.
    pub fn run(&mut self) -> HaltReason {
        loop {
            if let StepResult::Halted(reason) = self.step() {
                return reason;
            }
        }
    }

    /// Steps until the machine halts or the budget runs out.
    ///
    /// Returns `None` when `max_steps` instructions retired without a
    /// halt, which is how hosts keep runaway loops diagnosable.
    pub fn run_for(&mut self, max_steps: u64) -> Option<HaltReason> {
        for _ in 0..max_steps {
            if let StepResult::Halted(reason) = self.step() {
                return Some(reason);
            }
        }
        None
    }

    /// Latches a terminal condition and reports it.
    fn halt_with(&mut self, reason: HaltReason) -> StepResult {
        debug!(target: "rv32vm_core", %reason, "halted");
        self.halt = Some(reason.clone());
        StepResult::Halted(reason)
    }

    /// Routes one fetched word to its handler.
    ///
    /// `slot` is the word's own slot, which branch and jump offsets are
    /// relative to; the program counter has already moved past it.
    fn dispatch(&mut self, slot: u32, word: u32) -> Result<(), HaltReason> {
        if word.family() != opcodes::FAMILY_WIDE {
            return Err(Self::unmatched(word));
        }

        match word.opcode() {
            opcodes::OP_IMM => self.exec_op_imm(word),
            opcodes::OP_AUIPC => {
                self.exec_auipc(slot, word);
                Ok(())
            }
            opcodes::OP_REG => self.exec_op_reg(word),
            opcodes::OP_LUI => {
                self.exec_lui(word);
                Ok(())
            }
            opcodes::OP_BRANCH => self.exec_branch(slot, word),
            opcodes::OP_JALR => self.exec_jalr(word),
            opcodes::OP_JAL => self.exec_jal(slot, word),
            _ => Err(Self::unmatched(word)),
        }
    }

    /// Immediate ALU group (addi, slti, sltiu, xori, ori, andi, shifts).
    fn exec_op_imm(&mut self, word: u32) -> Result<(), HaltReason> {
        let i = IType(word);
        let rd = i.rd();
        // A write targeting x0 retires as a nop, before funct validation.
        if rd == abi::REG_ZERO {
            return Ok(());
        }

        let rs1 = self.gpr.read(i.rs1());
        let imm = i.imm();

        // Shift immediates reuse the R layout: the shift amount sits in
        // the rs2 field and funct7 must validate the encoding.
        let r = RType(word);
        let shamt = r.rs2() as u32;

        let value = match i.funct3() {
            funct3::ADD_SUB => rs1.wrapping_add_signed(imm),
            funct3::SLT => u32::from((rs1 as i32) < imm),
            funct3::SLTU => u32::from(rs1 < imm as u32),
            funct3::XOR => rs1 ^ imm as u32,
            funct3::OR => rs1 | imm as u32,
            funct3::AND => rs1 & imm as u32,
            funct3::SLL if r.funct7() == funct7::DEFAULT => rs1 << shamt,
            funct3::SRL_SRA if r.funct7() == funct7::DEFAULT => rs1 >> shamt,
            funct3::SRL_SRA if r.funct7() == funct7::SRA => ((rs1 as i32) >> shamt) as u32,
            _ => return Err(Self::unmatched(word)),
        };

        self.gpr.write(rd, value);
        self.stats.alu += 1;
        Ok(())
    }

    /// Register-register ALU group (add, sub, logic, comparisons, shifts).
    fn exec_op_reg(&mut self, word: u32) -> Result<(), HaltReason> {
        let r = RType(word);
        let rd = r.rd();
        // Same nop short-circuit as the immediate group.
        if rd == abi::REG_ZERO {
            return Ok(());
        }

        let lhs = self.gpr.read(r.rs1());
        let rhs = self.gpr.read(r.rs2());
        let shamt = rhs & SHIFT_MASK;

        let value = match (r.funct3(), r.funct7()) {
            (funct3::ADD_SUB, funct7::DEFAULT) => lhs.wrapping_add(rhs),
            (funct3::ADD_SUB, funct7::SUB) => lhs.wrapping_sub(rhs),
            (funct3::SLL, funct7::DEFAULT) => lhs << shamt,
            (funct3::SLT, funct7::DEFAULT) => u32::from((lhs as i32) < (rhs as i32)),
            (funct3::SLTU, funct7::DEFAULT) => u32::from(lhs < rhs),
            (funct3::XOR, funct7::DEFAULT) => lhs ^ rhs,
            (funct3::SRL_SRA, funct7::DEFAULT) => lhs >> shamt,
            (funct3::SRL_SRA, funct7::SRA) => ((lhs as i32) >> shamt) as u32,
            (funct3::OR, funct7::DEFAULT) => lhs | rhs,
            (funct3::AND, funct7::DEFAULT) => lhs & rhs,
            _ => return Err(Self::unmatched(word)),
        };

        self.gpr.write(rd, value);
        self.stats.alu += 1;
        Ok(())
    }

    /// auipc: rd = this instruction's byte address plus the upper immediate.
    fn exec_auipc(&mut self, slot: u32, word: u32) {
        let u = UType(word);
        let base = slot.wrapping_mul(SLOT_BYTES);
        self.gpr.write(u.rd(), base.wrapping_add(u.imm()));
        self.stats.alu += 1;
    }

    /// lui: rd = the upper immediate, low 12 bits zero.
    fn exec_lui(&mut self, word: u32) {
        let u = UType(word);
        self.gpr.write(u.rd(), u.imm());
        self.stats.alu += 1;
    }

    /// Conditional branch group (beq, bne, blt, bge, bltu, bgeu).
    fn exec_branch(&mut self, slot: u32, word: u32) -> Result<(), HaltReason> {
        let b = BType(word);
        let lhs = self.gpr.read(b.rs1());
        let rhs = self.gpr.read(b.rs2());

        let taken = match b.funct3() {
            funct3::BEQ => lhs == rhs,
            funct3::BNE => lhs != rhs,
            funct3::BLT => (lhs as i32) < (rhs as i32),
            funct3::BGE => (lhs as i32) >= (rhs as i32),
            funct3::BLTU => lhs < rhs,
            funct3::BGEU => lhs >= rhs,
            _ => return Err(Self::unmatched(word)),
        };

        if taken {
            let target = slot.wrapping_mul(SLOT_BYTES).wrapping_add_signed(b.offset());
            self.redirect(word, target)?;
            self.stats.branches_taken += 1;
        }
        self.stats.branches += 1;
        Ok(())
    }

    /// jal: link the next instruction's byte address, redirect by offset.
    fn exec_jal(&mut self, slot: u32, word: u32) -> Result<(), HaltReason> {
        let j = JType(word);
        // The program counter already points one past the jump; its byte
        // address is the link value.
        let link = self.pc.wrapping_mul(SLOT_BYTES);
        let target = slot.wrapping_mul(SLOT_BYTES).wrapping_add_signed(j.offset());
        self.redirect(word, target)?;
        self.gpr.write(j.rd(), link);
        self.stats.jumps += 1;
        Ok(())
    }

    /// jalr: link the next instruction's byte address, redirect through rs1.
    fn exec_jalr(&mut self, word: u32) -> Result<(), HaltReason> {
        let i = IType(word);
        if i.funct3() != funct3::JALR {
            return Err(Self::unmatched(word));
        }

        let base = self.gpr.read(i.rs1());
        let link = self.pc.wrapping_mul(SLOT_BYTES);
        // Byte-addressed target with bit 0 cleared, per the base ISA.
        let target = base.wrapping_add_signed(i.imm()) & !1;
        self.redirect(word, target)?;
        self.gpr.write(i.rd(), link);
        self.stats.jumps += 1;
        Ok(())
    }

    /// Points the program counter at a byte target.
    ///
    /// The image is word-granular, so a target that is not a multiple of
    /// four names no slot and halts the machine. A target past the image
    /// is latched as out-of-bounds by the next fetch instead.
    fn redirect(&mut self, word: u32, target_bytes: u32) -> Result<(), HaltReason> {
        if target_bytes % SLOT_BYTES != 0 {
            return Err(HaltReason::Illegal {
                word,
                target: target_bytes,
            });
        }
        self.pc = target_bytes / SLOT_BYTES;
        Ok(())
    }

    /// Builds the halt reason for a word no handler matches.
    fn unmatched(word: u32) -> HaltReason {
        HaltReason::Unimplemented {
            word,
            family: word.family(),
            opcode: word.opcode(),
            funct3: word.funct3(),
            funct7: word.funct7(),
        }
    }
}
