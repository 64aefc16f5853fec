//! Compressed-Instruction Disassembler.
//!
//! Converts a 16-bit RVC encoding into a human-readable mnemonic string
//! for debug tracing, logging, and test diagnostics.
//!
//! # Usage
//!
//! ```
//! use rvdec_core::isa::disasm::disassemble;
//! let text = disassemble(0x9002); // C.EBREAK
//! assert_eq!(text, "c.ebreak");
//! ```

use crate::isa::instruction::CompressedBits;
use crate::isa::rvc::constants::{QUADRANT_0, QUADRANT_1, QUADRANT_2, arith, arith_no_imm, q0, q1, q2};
use crate::isa::rvc::formats::{
    CAddi, CAddi4spn, CAddi16sp, CAndi, CBranch, CJump, CLi, CLui, CLw, CLwsp, CRegArith,
    CShiftImm, CSlli, CSw, CSwsp, Cr,
};

/// ABI register names for x0-x31.
const REG_NAMES: [&str; 32] = [
    "zero", "ra", "sp", "gp", "tp", "t0", "t1", "t2", "s0", "s1", "a0", "a1", "a2", "a3", "a4",
    "a5", "a6", "a7", "s2", "s3", "s4", "s5", "s6", "s7", "s8", "s9", "s10", "s11", "t3", "t4",
    "t5", "t6",
];

/// Returns the ABI name for an integer register index.
#[inline]
fn xreg(idx: u8) -> &'static str {
    REG_NAMES.get(usize::from(idx)).copied().unwrap_or("x??")
}

/// Signed view of a sign-extended immediate bit pattern.
#[inline]
const fn simm(imm: u32) -> i32 {
    imm as i32
}

/// Disassembles a 16-bit compressed instruction into a mnemonic string.
///
/// Returns a mnemonic like `"c.addi a0, -3"` or `"unknown"` for reserved
/// and unsupported encodings (including all floating-point RVC forms).
///
/// # Arguments
///
/// * `word` - The raw 16-bit instruction encoding.
pub fn disassemble(word: u16) -> String {
    if word == 0 {
        return "unknown".to_string();
    }
    match word.quadrant() {
        QUADRANT_0 => disasm_quad0(word),
        QUADRANT_1 => disasm_quad1(word),
        QUADRANT_2 => disasm_quad2(word),
        _ => "unknown".to_string(),
    }
}

/// Quadrant 0 mnemonics.
fn disasm_quad0(word: u16) -> String {
    match word.group() {
        q0::C_ADDI4SPN => {
            let isn = CAddi4spn::new(word);
            format!("c.addi4spn {}, sp, {}", xreg(isn.rd), isn.imm)
        }
        q0::C_LW => {
            let isn = CLw::new(word);
            format!("c.lw {}, {}({})", xreg(isn.rd), isn.imm, xreg(isn.rs1))
        }
        q0::C_SW => {
            let isn = CSw::new(word);
            format!("c.sw {}, {}({})", xreg(isn.rs2), isn.imm, xreg(isn.rs1))
        }
        _ => "unknown".to_string(),
    }
}

/// Quadrant 1 mnemonics.
fn disasm_quad1(word: u16) -> String {
    match word.group() {
        q1::C_ADDI => {
            let isn = CAddi::new(word);
            format!("c.addi {}, {}", xreg(isn.rdrs1), simm(isn.imm))
        }
        q1::C_JAL => {
            let isn = CJump::new(word);
            format!("c.jal {}", simm(isn.target))
        }
        q1::C_LI => {
            let isn = CLi::new(word);
            format!("c.li {}, {}", xreg(isn.rdrs1), simm(isn.imm))
        }
        q1::C_LUI_ADDI16SP => {
            if word.bits(7, 11) == 2 {
                let isn = CAddi16sp::new(word);
                format!("c.addi16sp sp, {}", simm(isn.imm))
            } else {
                let isn = CLui::new(word);
                format!("c.lui {}, {:#x}", xreg(isn.rdrs1), isn.imm >> 12)
            }
        }
        q1::C_ARITH => disasm_quad1_arith(word),
        q1::C_J => {
            let isn = CJump::new(word);
            format!("c.j {}", simm(isn.target))
        }
        q1::C_BEQZ => {
            let isn = CBranch::new(word);
            format!("c.beqz {}, {}", xreg(isn.rs1), simm(isn.offset))
        }
        q1::C_BNEZ => {
            let isn = CBranch::new(word);
            format!("c.bnez {}, {}", xreg(isn.rs1), simm(isn.offset))
        }
        _ => "unknown".to_string(),
    }
}

/// Quadrant-1 arithmetic group mnemonics.
fn disasm_quad1_arith(word: u16) -> String {
    match word.bits(10, 11) {
        arith::C_SRLI => {
            let isn = CShiftImm::new(word);
            format!("c.srli {}, {}", xreg(isn.rdrs1), isn.shamt)
        }
        arith::C_SRAI => {
            let isn = CShiftImm::new(word);
            format!("c.srai {}, {}", xreg(isn.rdrs1), isn.shamt)
        }
        arith::C_ANDI => {
            let isn = CAndi::new(word);
            format!("c.andi {}, {}", xreg(isn.rdrs1), simm(isn.imm))
        }
        arith::NO_IMM => {
            let isn = CRegArith::new(word);
            let mnemonic = match word.bits(5, 6) {
                arith_no_imm::C_SUB => "c.sub",
                arith_no_imm::C_XOR => "c.xor",
                arith_no_imm::C_OR => "c.or",
                arith_no_imm::C_AND => "c.and",
                _ => return "unknown".to_string(),
            };
            format!("{mnemonic} {}, {}", xreg(isn.rdrs1), xreg(isn.rs2))
        }
        _ => "unknown".to_string(),
    }
}

/// Quadrant 2 mnemonics.
fn disasm_quad2(word: u16) -> String {
    match word.group() {
        q2::C_SLLI => {
            let isn = CSlli::new(word);
            format!("c.slli {}, {}", xreg(isn.rdrs1), isn.shamt)
        }
        q2::C_LWSP => {
            let isn = CLwsp::new(word);
            format!("c.lwsp {}, {}(sp)", xreg(isn.rdrs1), isn.imm)
        }
        q2::OTHER => disasm_quad2_other(word),
        q2::C_SWSP => {
            let isn = CSwsp::new(word);
            format!("c.swsp {}, {}(sp)", xreg(isn.rs2), isn.imm)
        }
        // Floating-point xSP variants.
        _ => "unknown".to_string(),
    }
}

/// Quadrant-2 OTHER group mnemonics.
fn disasm_quad2_other(word: u16) -> String {
    let bit_12 = word.bits(12, 12);
    let isn = Cr::new(word);
    match (bit_12, isn.rs2 == 0, isn.rdrs1 == 0) {
        (0, true, false) => format!("c.jr {}", xreg(isn.rdrs1)),
        (0, false, false) => format!("c.mv {}, {}", xreg(isn.rdrs1), xreg(isn.rs2)),
        (1, true, true) => "c.ebreak".to_string(),
        (1, true, false) => format!("c.jalr {}", xreg(isn.rdrs1)),
        (1, false, false) => format!("c.add {}, {}", xreg(isn.rdrs1), xreg(isn.rs2)),
        _ => "unknown".to_string(),
    }
}
