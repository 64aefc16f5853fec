//! Compressed Instruction Decoding.
//!
//! Classifies a raw 16-bit word by quadrant (bits 1:0), then by group
//! selector (bits 15:13), then where required by a nested sub-selector,
//! and constructs the canonical [`Op`] descriptor. The function is total:
//! every one of the 65,536 possible words maps to exactly one descriptor,
//! with reserved and unsupported encodings mapping to the illegal
//! sentinel. Every dispatch level carries an explicit fallback arm so a
//! future encoding cannot silently land in an unreachable branch.

use tracing::trace;

use crate::common::op::Op;
use crate::isa::abi::{REG_RA, REG_SP, REG_ZERO};
use crate::isa::instruction::CompressedBits;
use crate::isa::op_type::{OpKind, Target};

use super::constants::{QUADRANT_0, QUADRANT_1, QUADRANT_2, arith, arith_no_imm, q0, q1, q2};
use super::formats::{
    CAddi, CAddi4spn, CAddi16sp, CAndi, CBranch, CJump, CLi, CLui, CLw, CLwsp, CRegArith,
    CShiftImm, CSlli, CSw, CSwsp, Cr,
};

/// Template for every descriptor this decoder emits: compressed flag set,
/// everything else zeroed. Arms override only the fields they use.
const COMPRESSED: Op = Op {
    imm: 0,
    kind: OpKind::None,
    target: Target::None,
    rd: 0,
    rs1: 0,
    rs2: 0,
    has_imm: false,
    use_pc: false,
    is_compressed: true,
};

/// Decodes a 16-bit compressed instruction word into an [`Op`] descriptor.
///
/// Total over all inputs and a pure function of the word alone: reserved,
/// floating-point, and quadrant-3 encodings yield the illegal descriptor
/// rather than an error. Every returned descriptor has `is_compressed`
/// set, including illegal ones.
///
/// # Arguments
///
/// * `word` - The raw 16-bit instruction encoding.
pub fn decode(word: u16) -> Op {
    // The all-zero word is reserved and must not reach quadrant 0, where
    // it would alias C.ADDI4SPN.
    let op = if word == 0 {
        Op::illegal(true)
    } else {
        match word.quadrant() {
            QUADRANT_0 => decode_quad0(word),
            QUADRANT_1 => decode_quad1(word),
            QUADRANT_2 => decode_quad2(word),
            // Quadrant 3 marks a 32-bit-or-wider instruction.
            _ => Op::illegal(true),
        }
    };
    trace!(
        word = u32::from(word),
        kind = ?op.kind,
        target = ?op.target,
        "decoded compressed word"
    );
    op
}

/// Quadrant 0: stack-relative allocation and word load/store through the
/// compressed register window.
fn decode_quad0(word: u16) -> Op {
    match word.group() {
        q0::C_ADDI4SPN => {
            let isn = CAddi4spn::new(word);
            Op {
                imm: isn.imm,
                kind: OpKind::Add,
                target: Target::Alu,
                rd: isn.rd,
                rs1: REG_SP,
                has_imm: true,
                ..COMPRESSED
            }
        }
        q0::C_LW => {
            let isn = CLw::new(word);
            Op {
                imm: isn.imm,
                kind: OpKind::Lw,
                target: Target::Load,
                rd: isn.rd,
                rs1: isn.rs1,
                has_imm: true,
                ..COMPRESSED
            }
        }
        q0::C_SW => {
            let isn = CSw::new(word);
            Op {
                imm: isn.imm,
                kind: OpKind::Sw,
                target: Target::Store,
                rs1: isn.rs1,
                rs2: isn.rs2,
                has_imm: true,
                ..COMPRESSED
            }
        }
        // C.FLD / C.FLW / C.FSD / C.FSW and the reserved group.
        _ => Op::illegal(true),
    }
}

/// Quadrant 1: immediate arithmetic, jumps, load-immediate, the nested
/// arithmetic group, and conditional branches.
fn decode_quad1(word: u16) -> Op {
    match word.group() {
        q1::C_ADDI => {
            let isn = CAddi::new(word);
            Op {
                imm: isn.imm,
                kind: OpKind::Add,
                target: Target::Alu,
                rd: isn.rdrs1,
                rs1: isn.rdrs1,
                has_imm: true,
                ..COMPRESSED
            }
        }
        q1::C_JAL => {
            let isn = CJump::new(word);
            Op {
                imm: isn.target,
                kind: OpKind::Jal,
                target: Target::Alu,
                rd: REG_RA,
                has_imm: true,
                use_pc: true,
                ..COMPRESSED
            }
        }
        q1::C_LI => {
            let isn = CLi::new(word);
            Op {
                imm: isn.imm,
                kind: OpKind::Add,
                target: Target::Alu,
                rd: isn.rdrs1,
                has_imm: true,
                ..COMPRESSED
            }
        }
        q1::C_LUI_ADDI16SP => {
            // rd field == sp selects C.ADDI16SP, anything else C.LUI.
            if word.bits(7, 11) == u16::from(REG_SP) {
                let isn = CAddi16sp::new(word);
                Op {
                    imm: isn.imm,
                    kind: OpKind::Add,
                    target: Target::Alu,
                    rd: REG_SP,
                    rs1: REG_SP,
                    has_imm: true,
                    ..COMPRESSED
                }
            } else {
                let isn = CLui::new(word);
                Op {
                    imm: isn.imm,
                    kind: OpKind::Add,
                    target: Target::Alu,
                    rd: isn.rdrs1,
                    has_imm: true,
                    ..COMPRESSED
                }
            }
        }
        q1::C_ARITH => decode_quad1_arith(word),
        q1::C_J => {
            let isn = CJump::new(word);
            Op {
                imm: isn.target,
                kind: OpKind::Jal,
                target: Target::Alu,
                rd: REG_ZERO,
                has_imm: true,
                use_pc: true,
                ..COMPRESSED
            }
        }
        q1::C_BEQZ => {
            let isn = CBranch::new(word);
            Op {
                imm: isn.offset,
                kind: OpKind::Beq,
                target: Target::Branch,
                rs1: isn.rs1,
                has_imm: true,
                ..COMPRESSED
            }
        }
        q1::C_BNEZ => {
            let isn = CBranch::new(word);
            Op {
                imm: isn.offset,
                kind: OpKind::Bne,
                target: Target::Branch,
                rs1: isn.rs1,
                has_imm: true,
                ..COMPRESSED
            }
        }
        // Unreachable for a 3-bit selector, required for exhaustiveness.
        _ => Op::illegal(true),
    }
}

/// Quadrant-1 arithmetic group: bits 11:10 select the shift/mask
/// immediates; 0b11 selects the register-register sub-group on bits 6:5.
fn decode_quad1_arith(word: u16) -> Op {
    match word.bits(10, 11) {
        arith::C_SRLI => {
            let isn = CShiftImm::new(word);
            Op {
                imm: isn.shamt,
                kind: OpKind::Srl,
                target: Target::Alu,
                rd: isn.rdrs1,
                rs1: isn.rdrs1,
                has_imm: true,
                ..COMPRESSED
            }
        }
        arith::C_SRAI => {
            let isn = CShiftImm::new(word);
            Op {
                imm: isn.shamt,
                kind: OpKind::Sra,
                target: Target::Alu,
                rd: isn.rdrs1,
                rs1: isn.rdrs1,
                has_imm: true,
                ..COMPRESSED
            }
        }
        arith::C_ANDI => {
            let isn = CAndi::new(word);
            Op {
                imm: isn.imm,
                kind: OpKind::And,
                target: Target::Alu,
                rd: isn.rdrs1,
                rs1: isn.rdrs1,
                has_imm: true,
                ..COMPRESSED
            }
        }
        arith::NO_IMM => {
            let isn = CRegArith::new(word);
            let kind = match word.bits(5, 6) {
                arith_no_imm::C_SUB => OpKind::Sub,
                arith_no_imm::C_XOR => OpKind::Xor,
                arith_no_imm::C_OR => OpKind::Or,
                arith_no_imm::C_AND => OpKind::And,
                _ => return Op::illegal(true),
            };
            Op {
                kind,
                target: Target::Alu,
                rd: isn.rdrs1,
                rs1: isn.rdrs1,
                rs2: isn.rs2,
                ..COMPRESSED
            }
        }
        _ => Op::illegal(true),
    }
}

/// Quadrant 2: shift-left, stack-relative load/store, and the OTHER group.
fn decode_quad2(word: u16) -> Op {
    match word.group() {
        q2::C_SLLI => {
            let isn = CSlli::new(word);
            Op {
                imm: isn.shamt,
                kind: OpKind::Sll,
                target: Target::Alu,
                rd: isn.rdrs1,
                rs1: isn.rdrs1,
                rs2: isn.rdrs1,
                has_imm: true,
                ..COMPRESSED
            }
        }
        // Floating-point RVC for RV32 is unsupported.
        q2::C_FLDSP | q2::C_FLWSP | q2::C_FSDSP | q2::C_FSWSP => Op::illegal(true),
        q2::C_LWSP => {
            let isn = CLwsp::new(word);
            Op {
                imm: isn.imm,
                kind: OpKind::Lw,
                target: Target::Load,
                rd: isn.rdrs1,
                rs1: REG_SP,
                has_imm: true,
                ..COMPRESSED
            }
        }
        q2::OTHER => decode_quad2_other(word),
        q2::C_SWSP => {
            let isn = CSwsp::new(word);
            Op {
                imm: isn.imm,
                kind: OpKind::Sw,
                target: Target::Store,
                rs1: REG_SP,
                rs2: isn.rs2,
                has_imm: true,
                ..COMPRESSED
            }
        }
        _ => Op::illegal(true),
    }
}

/// Quadrant-2 OTHER group: disambiguates C.JR, C.MV, C.EBREAK, C.JALR,
/// and C.ADD from bit 12 and the two register fields.
///
/// A zero bits 11:7 field means "no register" in the operand slots that
/// require one, so those combinations (other than C.EBREAK) are reserved.
fn decode_quad2_other(word: u16) -> Op {
    let bit_12 = word.bits(12, 12);
    let rs2_field = word.bits(2, 6);
    let rs1_field = word.bits(7, 11);
    let isn = Cr::new(word);

    match (bit_12, rs2_field == 0, rs1_field == 0) {
        // C.JR: jump register, no link.
        (0, true, false) => Op {
            kind: OpKind::Jalr,
            target: Target::Alu,
            rd: REG_ZERO,
            rs1: isn.rdrs1,
            rs2: isn.rs2,
            ..COMPRESSED
        },
        // C.MV: copy rs2 into rd via an add against x0.
        (0, false, false) => Op {
            kind: OpKind::Add,
            target: Target::Alu,
            rd: isn.rdrs1,
            rs2: isn.rs2,
            ..COMPRESSED
        },
        // C.EBREAK: breakpoint trap, no operands.
        (1, true, true) => Op {
            target: Target::Ebreak,
            ..COMPRESSED
        },
        // C.JALR: jump register, link into ra.
        (1, true, false) => Op {
            kind: OpKind::Jalr,
            target: Target::Alu,
            rd: REG_RA,
            rs1: isn.rdrs1,
            rs2: isn.rs2,
            ..COMPRESSED
        },
        // C.ADD: register-register add in place.
        (1, false, false) => Op {
            kind: OpKind::Add,
            target: Target::Alu,
            rd: isn.rdrs1,
            rs1: isn.rdrs1,
            rs2: isn.rs2,
            ..COMPRESSED
        },
        _ => Op::illegal(true),
    }
}
