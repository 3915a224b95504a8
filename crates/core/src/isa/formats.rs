//! RV32I instruction format views.
//!
//! The six encodings (R, I, S, B, U, J) are modeled as stateless views over
//! the same 32-bit word. Constructing a view never fails and never copies or
//! mutates anything; each accessor re-slices the word through
//! [`bit_range`](crate::isa::bits::bit_range). Views sharing a field (the
//! opcode is always bits 6-0, rd always bits 11-7, and so on) therefore
//! agree on it by construction.
//!
//! The B-type and J-type offset reconstruction is the most error-prone part
//! of the decoder: both immediates are scattered across four disjoint bit
//! groups with an implicit zero in bit 0. The views return them as
//! sign-extended *byte* offsets exactly as the ISA defines them (13-bit for
//! B, 21-bit for J); converting to an instruction-slot delta is the
//! executor's business.

use crate::isa::bits::{bit_range, sign_extend};

/// Bit mask for the aligned U-type immediate (bits 31-12 of the result).
pub const U_IMM_MASK: u32 = 0xFFFF_F000;

/// Width of the reconstructed B-type offset in bits.
const B_OFFSET_BITS: u32 = 13;
/// Width of the reconstructed J-type offset in bits.
const J_OFFSET_BITS: u32 = 21;
/// Width of the I-type immediate in bits.
const I_IMM_BITS: u32 = 12;
/// Width of the S-type immediate in bits.
const S_IMM_BITS: u32 = 12;

/// R-type view: register-register operations.
///
/// Layout: `funct7 | rs2 | rs1 | funct3 | rd | opcode`.
///
/// Shift-immediate instructions reuse this layout with the shift amount in
/// the rs2 field, which is why the executor reads their funct7 through an
/// R view.
#[derive(Clone, Copy, Debug)]
pub struct RType(pub u32);

impl RType {
    /// The full 7-bit opcode field (bits 6-0).
    #[inline(always)]
    #[must_use]
    pub const fn opcode(self) -> u32 {
        bit_range(self.0, 0, 6)
    }

    /// Destination register index (bits 11-7).
    #[inline(always)]
    #[must_use]
    pub const fn rd(self) -> usize {
        bit_range(self.0, 7, 11) as usize
    }

    /// The funct3 selector (bits 14-12).
    #[inline(always)]
    #[must_use]
    pub const fn funct3(self) -> u32 {
        bit_range(self.0, 12, 14)
    }

    /// First source register index (bits 19-15).
    #[inline(always)]
    #[must_use]
    pub const fn rs1(self) -> usize {
        bit_range(self.0, 15, 19) as usize
    }

    /// Second source register index (bits 24-20).
    ///
    /// For shift-immediate instructions this field holds the 5-bit shift
    /// amount instead of a register number.
    #[inline(always)]
    #[must_use]
    pub const fn rs2(self) -> usize {
        bit_range(self.0, 20, 24) as usize
    }

    /// The funct7 selector (bits 31-25).
    #[inline(always)]
    #[must_use]
    pub const fn funct7(self) -> u32 {
        bit_range(self.0, 25, 31)
    }
}

/// I-type view: register-immediate operations, loads, and jalr.
///
/// Layout: `imm[11:0] | rs1 | funct3 | rd | opcode`.
#[derive(Clone, Copy, Debug)]
pub struct IType(pub u32);

impl IType {
    /// The full 7-bit opcode field (bits 6-0).
    #[inline(always)]
    #[must_use]
    pub const fn opcode(self) -> u32 {
        bit_range(self.0, 0, 6)
    }

    /// Destination register index (bits 11-7).
    #[inline(always)]
    #[must_use]
    pub const fn rd(self) -> usize {
        bit_range(self.0, 7, 11) as usize
    }

    /// The funct3 selector (bits 14-12).
    #[inline(always)]
    #[must_use]
    pub const fn funct3(self) -> u32 {
        bit_range(self.0, 12, 14)
    }

    /// First source register index (bits 19-15).
    #[inline(always)]
    #[must_use]
    pub const fn rs1(self) -> usize {
        bit_range(self.0, 15, 19) as usize
    }

    /// Sign-extended 12-bit immediate (bits 31-20).
    #[inline(always)]
    #[must_use]
    pub const fn imm(self) -> i32 {
        sign_extend(bit_range(self.0, 20, 31), I_IMM_BITS)
    }
}

/// S-type view: store operations.
///
/// Layout: `imm[11:5] | rs2 | rs1 | funct3 | imm[4:0] | opcode`. The current
/// opcode subset never stores, but the view must still decode correctly so
/// diagnostics and future extensions see the right fields.
#[derive(Clone, Copy, Debug)]
pub struct SType(pub u32);

impl SType {
    /// The full 7-bit opcode field (bits 6-0).
    #[inline(always)]
    #[must_use]
    pub const fn opcode(self) -> u32 {
        bit_range(self.0, 0, 6)
    }

    /// The funct3 selector (bits 14-12).
    #[inline(always)]
    #[must_use]
    pub const fn funct3(self) -> u32 {
        bit_range(self.0, 12, 14)
    }

    /// First source register index (bits 19-15).
    #[inline(always)]
    #[must_use]
    pub const fn rs1(self) -> usize {
        bit_range(self.0, 15, 19) as usize
    }

    /// Second source register index (bits 24-20).
    #[inline(always)]
    #[must_use]
    pub const fn rs2(self) -> usize {
        bit_range(self.0, 20, 24) as usize
    }

    /// Sign-extended 12-bit immediate, reassembled from imm[11:5] | imm[4:0].
    #[inline(always)]
    #[must_use]
    pub const fn imm(self) -> i32 {
        let value = (bit_range(self.0, 25, 31) << 5) | bit_range(self.0, 7, 11);
        sign_extend(value, S_IMM_BITS)
    }
}

/// B-type view: conditional branches.
///
/// Layout: `imm[12] imm[10:5] | rs2 | rs1 | funct3 | imm[4:1] imm[11] | opcode`.
#[derive(Clone, Copy, Debug)]
pub struct BType(pub u32);

impl BType {
    /// The full 7-bit opcode field (bits 6-0).
    #[inline(always)]
    #[must_use]
    pub const fn opcode(self) -> u32 {
        bit_range(self.0, 0, 6)
    }

    /// The funct3 selector (bits 14-12), choosing the comparison.
    #[inline(always)]
    #[must_use]
    pub const fn funct3(self) -> u32 {
        bit_range(self.0, 12, 14)
    }

    /// First source register index (bits 19-15).
    #[inline(always)]
    #[must_use]
    pub const fn rs1(self) -> usize {
        bit_range(self.0, 15, 19) as usize
    }

    /// Second source register index (bits 24-20).
    #[inline(always)]
    #[must_use]
    pub const fn rs2(self) -> usize {
        bit_range(self.0, 20, 24) as usize
    }

    /// Signed branch offset in bytes, relative to the branch instruction.
    ///
    /// Reassembled as `{imm[12], imm[11], imm[10:5], imm[4:1], 0}` and
    /// sign-extended from 13 bits. Always even; bit 0 is implicitly zero.
    #[inline(always)]
    #[must_use]
    pub const fn offset(self) -> i32 {
        let value = (bit_range(self.0, 31, 31) << 12)
            | (bit_range(self.0, 7, 7) << 11)
            | (bit_range(self.0, 25, 30) << 5)
            | (bit_range(self.0, 8, 11) << 1);
        sign_extend(value, B_OFFSET_BITS)
    }
}

/// U-type view: upper-immediate operations (lui, auipc).
///
/// Layout: `imm[31:12] | rd | opcode`.
#[derive(Clone, Copy, Debug)]
pub struct UType(pub u32);

impl UType {
    /// The full 7-bit opcode field (bits 6-0).
    #[inline(always)]
    #[must_use]
    pub const fn opcode(self) -> u32 {
        bit_range(self.0, 0, 6)
    }

    /// Destination register index (bits 11-7).
    #[inline(always)]
    #[must_use]
    pub const fn rd(self) -> usize {
        bit_range(self.0, 7, 11) as usize
    }

    /// The raw 20-bit immediate field (bits 31-12), unshifted.
    #[inline(always)]
    #[must_use]
    pub const fn imm20(self) -> u32 {
        bit_range(self.0, 12, 31)
    }

    /// The aligned immediate: the stored field in result bits 31-12, low
    /// 12 bits zero. The mask already aligns it; no shifting takes place.
    #[inline(always)]
    #[must_use]
    pub const fn imm(self) -> u32 {
        self.0 & U_IMM_MASK
    }
}

/// J-type view: unconditional jumps (jal).
///
/// Layout: `imm[20] imm[10:1] imm[11] imm[19:12] | rd | opcode`.
#[derive(Clone, Copy, Debug)]
pub struct JType(pub u32);

impl JType {
    /// The full 7-bit opcode field (bits 6-0).
    #[inline(always)]
    #[must_use]
    pub const fn opcode(self) -> u32 {
        bit_range(self.0, 0, 6)
    }

    /// Destination register index (bits 11-7), receiving the link address.
    #[inline(always)]
    #[must_use]
    pub const fn rd(self) -> usize {
        bit_range(self.0, 7, 11) as usize
    }

    /// Signed jump offset in bytes, relative to the jump instruction.
    ///
    /// Reassembled as `{imm[20], imm[19:12], imm[11], imm[10:1], 0}` and
    /// sign-extended from 21 bits. Always even; bit 0 is implicitly zero.
    #[inline(always)]
    #[must_use]
    pub const fn offset(self) -> i32 {
        let value = (bit_range(self.0, 31, 31) << 20)
            | (bit_range(self.0, 12, 19) << 12)
            | (bit_range(self.0, 20, 20) << 11)
            | (bit_range(self.0, 21, 30) << 1);
        sign_extend(value, J_OFFSET_BITS)
    }
}
