//! Per-format field extractors for compressed instruction words.
//!
//! Each struct is a pure view over one raw 16-bit word: construction
//! performs the format's bit shuffling once and exposes the named fields
//! (registers, immediate, branch/jump target). The layouts follow the RVC
//! chapter of the RISC-V unprivileged specification, RV32 flavor.
//!
//! Two register conventions appear:
//! - full 5-bit fields index x0-x31 directly;
//! - compressed 3-bit fields (`rd'`/`rs1'`/`rs2'`) index x8-x15 and are
//!   remapped here, so the decoder only ever sees full register indices.

use crate::isa::instruction::CompressedBits;

/// Offset added to a compressed 3-bit register field to reach x8-x15.
const CREG_BASE: u8 = 8;

/// Maps the compressed register field at bits 4:2 into x8-x15.
#[inline]
fn creg_low(word: u16) -> u8 {
    CREG_BASE + word.bits(2, 4) as u8
}

/// Maps the compressed register field at bits 9:7 into x8-x15.
#[inline]
fn creg_high(word: u16) -> u8 {
    CREG_BASE + word.bits(7, 9) as u8
}

/// Extracts the full 5-bit register field at bits 11:7.
#[inline]
fn reg_full(word: u16) -> u8 {
    word.bits(7, 11) as u8
}

/// Raw 6-bit CI-format immediate: bits 6:2 with bit 12 as bit 5.
#[inline]
fn ci_raw(word: u16) -> u32 {
    u32::from(word.bits(2, 6)) | u32::from(word.bits(12, 12)) << 5
}

/// Sign-extends a value from `bits` width to 32 bits.
///
/// The result keeps the two's-complement bit pattern in a `u32`, matching
/// how the descriptor carries immediates.
const fn sign_extend(val: u32, bits: u32) -> u32 {
    let shift = 32 - bits;
    ((val << shift) as i32 >> shift) as u32
}

/// C.ADDI4SPN (CIW format): stack-relative pointer formation.
#[derive(Clone, Copy, Debug)]
pub struct CAddi4spn {
    /// Destination register (x8-x15).
    pub rd: u8,
    /// Zero-extended immediate, scaled by 4 (imm\[5:4|9:6|2|3\]).
    pub imm: u32,
}

impl CAddi4spn {
    /// Extracts the C.ADDI4SPN fields from a raw word.
    pub fn new(word: u16) -> Self {
        let imm = u32::from(word.bits(6, 6)) << 2
            | u32::from(word.bits(5, 5)) << 3
            | u32::from(word.bits(11, 12)) << 4
            | u32::from(word.bits(7, 10)) << 6;
        Self {
            rd: creg_low(word),
            imm,
        }
    }
}

/// C.LW (CL format): word load through a compressed register window.
#[derive(Clone, Copy, Debug)]
pub struct CLw {
    /// Destination register (x8-x15).
    pub rd: u8,
    /// Base register (x8-x15).
    pub rs1: u8,
    /// Zero-extended offset, scaled by 4 (imm\[5:3|2|6\]).
    pub imm: u32,
}

impl CLw {
    /// Extracts the C.LW fields from a raw word.
    pub fn new(word: u16) -> Self {
        Self {
            rd: creg_low(word),
            rs1: creg_high(word),
            imm: cl_cs_word_offset(word),
        }
    }
}

/// C.SW (CS format): word store through a compressed register window.
#[derive(Clone, Copy, Debug)]
pub struct CSw {
    /// Base register (x8-x15).
    pub rs1: u8,
    /// Source register (x8-x15).
    pub rs2: u8,
    /// Zero-extended offset, scaled by 4.
    pub imm: u32,
}

impl CSw {
    /// Extracts the C.SW fields from a raw word.
    pub fn new(word: u16) -> Self {
        Self {
            rs1: creg_high(word),
            rs2: creg_low(word),
            imm: cl_cs_word_offset(word),
        }
    }
}

/// Shared CL/CS word offset: imm\[2\] at bit 6, imm\[5:3\] at bits 12:10,
/// imm\[6\] at bit 5.
#[inline]
fn cl_cs_word_offset(word: u16) -> u32 {
    u32::from(word.bits(6, 6)) << 2
        | u32::from(word.bits(10, 12)) << 3
        | u32::from(word.bits(5, 5)) << 6
}

/// C.ADDI (CI format): add sign-extended immediate in place.
#[derive(Clone, Copy, Debug)]
pub struct CAddi {
    /// Shared destination/source register (x0-x31).
    pub rdrs1: u8,
    /// Sign-extended 6-bit immediate.
    pub imm: u32,
}

impl CAddi {
    /// Extracts the C.ADDI fields from a raw word.
    pub fn new(word: u16) -> Self {
        Self {
            rdrs1: reg_full(word),
            imm: sign_extend(ci_raw(word), 6),
        }
    }
}

/// C.LI (CI format): load sign-extended immediate.
#[derive(Clone, Copy, Debug)]
pub struct CLi {
    /// Destination register (x0-x31).
    pub rdrs1: u8,
    /// Sign-extended 6-bit immediate.
    pub imm: u32,
}

impl CLi {
    /// Extracts the C.LI fields from a raw word.
    pub fn new(word: u16) -> Self {
        Self {
            rdrs1: reg_full(word),
            imm: sign_extend(ci_raw(word), 6),
        }
    }
}

/// C.ADDI16SP (CI format variant): adjust the stack pointer in units of 16.
#[derive(Clone, Copy, Debug)]
pub struct CAddi16sp {
    /// Sign-extended immediate, scaled by 16 (imm\[9|4|6|8:7|5\]).
    pub imm: u32,
}

impl CAddi16sp {
    /// Extracts the C.ADDI16SP immediate from a raw word.
    pub fn new(word: u16) -> Self {
        let raw = u32::from(word.bits(6, 6)) << 4
            | u32::from(word.bits(2, 2)) << 5
            | u32::from(word.bits(5, 5)) << 6
            | u32::from(word.bits(3, 4)) << 7
            | u32::from(word.bits(12, 12)) << 9;
        Self {
            imm: sign_extend(raw, 10),
        }
    }
}

/// C.LUI (CI format variant): load upper immediate.
#[derive(Clone, Copy, Debug)]
pub struct CLui {
    /// Destination register (x0-x31).
    pub rdrs1: u8,
    /// Sign-extended immediate already shifted into bits 17:12.
    pub imm: u32,
}

impl CLui {
    /// Extracts the C.LUI fields from a raw word.
    pub fn new(word: u16) -> Self {
        Self {
            rdrs1: reg_full(word),
            imm: sign_extend(ci_raw(word), 6) << 12,
        }
    }
}

/// C.SRLI / C.SRAI (CB format variant): shift-right immediate in place.
#[derive(Clone, Copy, Debug)]
pub struct CShiftImm {
    /// Shared destination/source register (x8-x15).
    pub rdrs1: u8,
    /// Zero-extended shift amount (bit 12 joins bits 6:2 as shamt\[5\]).
    pub shamt: u32,
}

impl CShiftImm {
    /// Extracts the shift-immediate fields from a raw word.
    pub fn new(word: u16) -> Self {
        Self {
            rdrs1: creg_high(word),
            shamt: ci_raw(word),
        }
    }
}

/// C.ANDI (CB format variant): AND sign-extended immediate in place.
#[derive(Clone, Copy, Debug)]
pub struct CAndi {
    /// Shared destination/source register (x8-x15).
    pub rdrs1: u8,
    /// Sign-extended 6-bit mask.
    pub imm: u32,
}

impl CAndi {
    /// Extracts the C.ANDI fields from a raw word.
    pub fn new(word: u16) -> Self {
        Self {
            rdrs1: creg_high(word),
            imm: sign_extend(ci_raw(word), 6),
        }
    }
}

/// C.SUB / C.XOR / C.OR / C.AND (CA format): register-register arithmetic.
#[derive(Clone, Copy, Debug)]
pub struct CRegArith {
    /// Shared destination/source register (x8-x15).
    pub rdrs1: u8,
    /// Second source register (x8-x15).
    pub rs2: u8,
}

impl CRegArith {
    /// Extracts the CA-format register fields from a raw word.
    pub fn new(word: u16) -> Self {
        Self {
            rdrs1: creg_high(word),
            rs2: creg_low(word),
        }
    }
}

/// C.JAL / C.J (CJ format): PC-relative jump.
#[derive(Clone, Copy, Debug)]
pub struct CJump {
    /// Sign-extended branch target offset
    /// (imm\[11|4|9:8|10|6|7|3:1|5\]), even by construction.
    pub target: u32,
}

impl CJump {
    /// Extracts the CJ-format jump target from a raw word.
    pub fn new(word: u16) -> Self {
        let raw = u32::from(word.bits(3, 5)) << 1
            | u32::from(word.bits(11, 11)) << 4
            | u32::from(word.bits(2, 2)) << 5
            | u32::from(word.bits(7, 7)) << 6
            | u32::from(word.bits(6, 6)) << 7
            | u32::from(word.bits(9, 10)) << 8
            | u32::from(word.bits(8, 8)) << 10
            | u32::from(word.bits(12, 12)) << 11;
        Self {
            target: sign_extend(raw, 12),
        }
    }
}

/// C.BEQZ / C.BNEZ (CB format): compare-against-zero branch.
#[derive(Clone, Copy, Debug)]
pub struct CBranch {
    /// Source register compared against zero (x8-x15).
    pub rs1: u8,
    /// Sign-extended branch offset (imm\[8|4:3|7:6|2:1|5\]).
    pub offset: u32,
}

impl CBranch {
    /// Extracts the CB-format branch fields from a raw word.
    pub fn new(word: u16) -> Self {
        let raw = u32::from(word.bits(3, 4)) << 1
            | u32::from(word.bits(10, 11)) << 3
            | u32::from(word.bits(2, 2)) << 5
            | u32::from(word.bits(5, 6)) << 6
            | u32::from(word.bits(12, 12)) << 8;
        Self {
            rs1: creg_high(word),
            offset: sign_extend(raw, 9),
        }
    }
}

/// C.SLLI (CI format): shift-left immediate in place.
#[derive(Clone, Copy, Debug)]
pub struct CSlli {
    /// Shared destination/source register (x0-x31).
    pub rdrs1: u8,
    /// Zero-extended shift amount.
    pub shamt: u32,
}

impl CSlli {
    /// Extracts the C.SLLI fields from a raw word.
    pub fn new(word: u16) -> Self {
        Self {
            rdrs1: reg_full(word),
            shamt: ci_raw(word),
        }
    }
}

/// C.LWSP (CI format variant): stack-relative word load.
#[derive(Clone, Copy, Debug)]
pub struct CLwsp {
    /// Destination register (x0-x31).
    pub rdrs1: u8,
    /// Zero-extended offset, scaled by 4 (imm\[5|4:2|7:6\]).
    pub imm: u32,
}

impl CLwsp {
    /// Extracts the C.LWSP fields from a raw word.
    pub fn new(word: u16) -> Self {
        let imm = u32::from(word.bits(4, 6)) << 2
            | u32::from(word.bits(12, 12)) << 5
            | u32::from(word.bits(2, 3)) << 6;
        Self {
            rdrs1: reg_full(word),
            imm,
        }
    }
}

/// C.SWSP (CSS format): stack-relative word store.
#[derive(Clone, Copy, Debug)]
pub struct CSwsp {
    /// Source register (x0-x31).
    pub rs2: u8,
    /// Zero-extended offset, scaled by 4 (imm\[5:2|7:6\]).
    pub imm: u32,
}

impl CSwsp {
    /// Extracts the C.SWSP fields from a raw word.
    pub fn new(word: u16) -> Self {
        let imm = u32::from(word.bits(9, 12)) << 2 | u32::from(word.bits(7, 8)) << 6;
        Self {
            rs2: word.bits(2, 6) as u8,
            imm,
        }
    }
}

/// C.JR / C.MV / C.JALR / C.ADD (CR format): two full register fields.
#[derive(Clone, Copy, Debug)]
pub struct Cr {
    /// First register field, bits 11:7 (base or shared rd/rs1).
    pub rdrs1: u8,
    /// Second register field, bits 6:2.
    pub rs2: u8,
}

impl Cr {
    /// Extracts the CR-format register fields from a raw word.
    pub fn new(word: u16) -> Self {
        Self {
            rdrs1: reg_full(word),
            rs2: word.bits(2, 6) as u8,
        }
    }
}
