//! Compressed Instruction (RVC) Descriptor Mapping Tests.
//!
//! Verifies that every recognized compressed instruction decodes to the
//! correct canonical descriptor. Tests cover all three quadrants (Q0, Q1,
//! Q2) and check register mappings (including the compressed x8-x15
//! window), immediate reconstruction with sign extension, the fixed
//! sp/ra registers, and every reserved/illegal branch.

use pretty_assertions::assert_eq;
use rstest::rstest;

use rvdec_core::isa::op_type::{OpKind, Target};
use rvdec_core::{Op, decode};

// ══════════════════════════════════════════════════════════
// Quadrant 0 (bits 1:0 = 00)
// ══════════════════════════════════════════════════════════

#[test]
fn c_addi4spn() {
    // C.ADDI4SPN rd', nzuimm → add rd'+8, sp, nzuimm
    // bits: [12:11]=imm[5:4], [10:7]=imm[9:6], [6]=imm[2], [5]=imm[3],
    //       [4:2]=rd', [1:0]=00. nzuimm=16, rd'=0 → x8.
    let op = decode(0b000_01000000_000_00);
    assert_eq!(op.kind, OpKind::Add);
    assert_eq!(op.target, Target::Alu);
    assert_eq!(op.rd, 8, "rd' = 0 maps to x8");
    assert_eq!(op.rs1, 2, "base must be sp");
    assert_eq!(op.imm, 16);
    assert!(op.has_imm);
    assert!(!op.use_pc);
}

#[test]
fn c_lw() {
    // C.LW rd', offset(rs1') → load word, compressed register window
    // bits: [12:10]=imm[5:3], [9:7]=rs1', [6]=imm[2], [5]=imm[6], [4:2]=rd'
    // rs1'=0(x8), rd'=1(x9), offset=4.
    let op = decode(0b010_000_000_10_001_00);
    assert_eq!(op.kind, OpKind::Lw);
    assert_eq!(op.target, Target::Load);
    assert_eq!(op.rd, 9);
    assert_eq!(op.rs1, 8, "base register remapped into 8..=15");
    assert_eq!(op.imm, 4);
    assert!(op.has_imm);
}

#[test]
fn c_sw() {
    // C.SW rs2', offset(rs1') → store word; no destination register
    // rs1'=0(x8), rs2'=0(x8), offset bit 6 set → 64.
    let op = decode(0b110_000_000_01_000_00);
    assert_eq!(op.kind, OpKind::Sw);
    assert_eq!(op.target, Target::Store);
    assert_eq!(op.rd, 0);
    assert_eq!(op.rs1, 8);
    assert_eq!(op.rs2, 8);
    assert_eq!(op.imm, 64);
    assert!(op.has_imm);
}

// ══════════════════════════════════════════════════════════
// Quadrant 1 (bits 1:0 = 01)
// ══════════════════════════════════════════════════════════

#[test]
fn c_addi() {
    // C.ADDI rd, nzimm: rd and rs1 share bits 11:7.
    // rd=a0(x10), imm=3.
    let op = decode(0b000_0_01010_00011_01);
    assert_eq!(op.kind, OpKind::Add);
    assert_eq!(op.target, Target::Alu);
    assert_eq!(op.rd, 10);
    assert_eq!(op.rs1, 10, "rd and rs1 alias one field");
    assert_eq!(op.imm, 3);
    assert!(op.has_imm);
}

#[test]
fn c_addi_sign_extends() {
    // imm[5]=1 (bit 12), imm[4:0]=11111 → -1.
    let op = decode(0b000_1_01010_11111_01);
    assert_eq!(op.imm, 0xFFFF_FFFF);
}

#[test]
fn c_jal() {
    // C.JAL offset → PC-relative jump linking into ra (RV32 only).
    // Offset scatter [11|4|9:8|10|6|7|3:1|5]; bits 5:3 = 001 → offset 2.
    let op = decode(0b001_0_0_00_0_0_0_001_0_01);
    assert_eq!(op.kind, OpKind::Jal);
    assert_eq!(op.target, Target::Alu);
    assert_eq!(op.rd, 1, "link register fixed to ra");
    assert_eq!(op.imm, 2);
    assert!(op.has_imm);
    assert!(op.use_pc);
}

#[test]
fn c_li() {
    // C.LI rd, imm → add rd, x0, imm.
    let op = decode(0b010_0_01010_00101_01);
    assert_eq!(op.kind, OpKind::Add);
    assert_eq!(op.rd, 10);
    assert_eq!(op.rs1, 0, "load-immediate adds against zero");
    assert_eq!(op.imm, 5);
    assert!(op.has_imm);
}

#[test]
fn c_addi16sp() {
    // Group 011 with rd field == 2 → C.ADDI16SP.
    // imm scatter [9|4|6|8:7|5]; bit 6 = imm[4] → +16.
    let op = decode(0b011_0_00010_10000_01);
    assert_eq!(op.kind, OpKind::Add);
    assert_eq!(op.rd, 2, "destination fixed to sp");
    assert_eq!(op.rs1, 2, "base fixed to sp");
    assert_eq!(op.imm, 16);
    assert!(op.has_imm);
}

#[test]
fn c_addi16sp_negative() {
    // All immediate bits set → -16 after sign extension.
    let op = decode(0b011_1_00010_11111_01);
    assert_eq!(op.imm, (-16_i32) as u32);
}

#[test]
fn c_lui() {
    // Group 011 with rd field != 2 → C.LUI; immediate lands in bits 17:12.
    let op = decode(0b011_0_01010_00001_01);
    assert_eq!(op.kind, OpKind::Add);
    assert_eq!(op.rd, 10);
    assert_eq!(op.rs1, 0);
    assert_eq!(op.imm, 0x1000);
    assert!(op.has_imm);
}

#[test]
fn c_lui_sign_extends() {
    // Raw immediate 100000 → -32 → 0xFFFE_0000 after the shift.
    let op = decode(0b011_1_01010_00000_01);
    assert_eq!(op.imm, 0xFFFE_0000);
}

// ── Arithmetic group (selector 100, bits 11:10) ───────────

#[test]
fn c_srli() {
    // bits 11:10 = 00, rs1'=1(x9), shamt=3.
    let op = decode(0b100_0_00_001_00011_01);
    assert_eq!(op.kind, OpKind::Srl);
    assert_eq!(op.rd, 9);
    assert_eq!(op.rs1, 9);
    assert_eq!(op.imm, 3);
    assert!(op.has_imm);
}

#[test]
fn c_srai() {
    // bits 11:10 = 01.
    let op = decode(0b100_0_01_001_00011_01);
    assert_eq!(op.kind, OpKind::Sra);
    assert_eq!(op.rd, 9);
    assert_eq!(op.imm, 3);
    assert!(op.has_imm);
}

#[test]
fn c_andi() {
    // bits 11:10 = 10; mask sign-extends.
    let op = decode(0b100_1_10_001_11111_01);
    assert_eq!(op.kind, OpKind::And);
    assert_eq!(op.rd, 9);
    assert_eq!(op.imm, 0xFFFF_FFFF);
    assert!(op.has_imm);
}

#[test]
fn c_sub() {
    // bits 11:10 = 11, bits 6:5 = 00 → subtract, no immediate.
    // rdrs1'=1(x9), rs2'=2(x10).
    let op = decode(0b100_0_11_001_00_010_01);
    assert_eq!(op.kind, OpKind::Sub);
    assert_eq!(op.target, Target::Alu);
    assert_eq!(op.rd, 9);
    assert_eq!(op.rs1, 9);
    assert_eq!(op.rs2, 10);
    assert!(!op.has_imm);
}

#[rstest]
#[case::c_xor(0b100_0_11_001_01_010_01, OpKind::Xor)]
#[case::c_or(0b100_0_11_001_10_010_01, OpKind::Or)]
#[case::c_and(0b100_0_11_001_11_010_01, OpKind::And)]
fn c_reg_arith(#[case] word: u16, #[case] kind: OpKind) {
    let op = decode(word);
    assert_eq!(op.kind, kind);
    assert_eq!(op.target, Target::Alu);
    assert_eq!(op.rd, 9);
    assert_eq!(op.rs1, 9);
    assert_eq!(op.rs2, 10);
    assert!(!op.has_imm);
}

#[test]
fn c_j() {
    // C.J: same target scatter as C.JAL, no link register update.
    let op = decode(0b101_0_0_00_0_0_0_001_0_01);
    assert_eq!(op.kind, OpKind::Jal);
    assert_eq!(op.rd, 0, "no link register");
    assert_eq!(op.imm, 2);
    assert!(op.has_imm);
    assert!(op.use_pc);
    assert!(op.is_compressed);
}

#[test]
fn c_beqz() {
    // Offset scatter [8|4:3|7:6|2:1|5]; bits 4:3 = 01 → offset 2.
    let op = decode(0b110_0_00_000_00_01_0_01);
    assert_eq!(op.kind, OpKind::Beq);
    assert_eq!(op.target, Target::Branch);
    assert_eq!(op.rd, 0);
    assert_eq!(op.rs1, 8);
    assert_eq!(op.imm, 2);
    assert!(op.has_imm);
}

#[test]
fn c_bnez_negative_offset() {
    // bit 12 = offset[8] alone → -256 after sign extension.
    let op = decode(0b111_1_00_000_00_00_0_01);
    assert_eq!(op.kind, OpKind::Bne);
    assert_eq!(op.target, Target::Branch);
    assert_eq!(op.rs1, 8);
    assert_eq!(op.imm, (-256_i32) as u32);
}

// ══════════════════════════════════════════════════════════
// Quadrant 2 (bits 1:0 = 10)
// ══════════════════════════════════════════════════════════

#[test]
fn c_slli() {
    // All three register slots alias bits 11:7.
    let op = decode(0b000_0_01010_00100_10);
    assert_eq!(op.kind, OpKind::Sll);
    assert_eq!(op.rd, 10);
    assert_eq!(op.rs1, 10);
    assert_eq!(op.rs2, 10);
    assert_eq!(op.imm, 4);
    assert!(op.has_imm);
}

#[test]
fn c_lwsp() {
    // imm scatter [5|4:2|7:6]; bits 6:4 = 001 → offset 4.
    let op = decode(0b010_0_01010_00100_10);
    assert_eq!(op.kind, OpKind::Lw);
    assert_eq!(op.target, Target::Load);
    assert_eq!(op.rd, 10);
    assert_eq!(op.rs1, 2, "base fixed to sp");
    assert_eq!(op.imm, 4);
    assert!(op.has_imm);
}

#[test]
fn c_lwsp_high_offset_bits() {
    // bits 3:2 = imm[7:6]; bit 2 set → +64.
    let op = decode(0b010_0_01010_00001_10);
    assert_eq!(op.imm, 64);
}

#[test]
fn c_swsp() {
    // imm scatter [5:2|7:6]; bits 12:9 = 0001 → offset 4. rs2=a0.
    let op = decode(0b110_0001_00_01010_10);
    assert_eq!(op.kind, OpKind::Sw);
    assert_eq!(op.target, Target::Store);
    assert_eq!(op.rd, 0);
    assert_eq!(op.rs1, 2, "base fixed to sp");
    assert_eq!(op.rs2, 10);
    assert_eq!(op.imm, 4);
    assert!(op.has_imm);
}

// ── OTHER group (selector 100) ────────────────────────────

#[test]
fn c_jr() {
    // bit 12 = 0, rs2 field = 0, rs1 field != 0.
    let op = decode(0b100_0_01010_00000_10);
    assert_eq!(op.kind, OpKind::Jalr);
    assert_eq!(op.target, Target::Alu);
    assert_eq!(op.rd, 0, "no link register");
    assert_eq!(op.rs1, 10);
    assert!(!op.has_imm);
    assert!(!op.use_pc);
}

#[test]
fn c_mv() {
    // bit 12 = 0, both register fields nonzero.
    let op = decode(0b100_0_01010_01011_10);
    assert_eq!(op.kind, OpKind::Add);
    assert_eq!(op.rd, 10);
    assert_eq!(op.rs1, 0, "move adds rs2 against zero");
    assert_eq!(op.rs2, 11);
    assert!(!op.has_imm);
}

#[test]
fn c_ebreak() {
    // bit 12 = 1, both register fields zero.
    let op = decode(0b100_1_00000_00000_10);
    assert_eq!(op.kind, OpKind::None);
    assert_eq!(op.target, Target::Ebreak);
    assert_eq!(op.rd, 0);
    assert_eq!(op.rs1, 0);
    assert_eq!(op.rs2, 0);
    assert!(!op.has_imm);
    assert!(op.is_compressed);
}

#[test]
fn c_jalr() {
    // bit 12 = 1, rs2 field = 0, rs1 field != 0.
    let op = decode(0b100_1_01010_00000_10);
    assert_eq!(op.kind, OpKind::Jalr);
    assert_eq!(op.rd, 1, "link register fixed to ra");
    assert_eq!(op.rs1, 10);
    assert!(!op.has_imm);
}

#[test]
fn c_add() {
    // bit 12 = 1, both register fields nonzero.
    let op = decode(0b100_1_01010_01011_10);
    assert_eq!(op.kind, OpKind::Add);
    assert_eq!(op.rd, 10);
    assert_eq!(op.rs1, 10);
    assert_eq!(op.rs2, 11);
    assert!(!op.has_imm);
}

// ══════════════════════════════════════════════════════════
// Reserved and unsupported encodings
// ══════════════════════════════════════════════════════════

#[rstest]
#[case::q0_c_fld(0b001_000_000_00_000_00)]
#[case::q0_c_flw(0b011_000_000_00_000_00)]
#[case::q0_reserved(0b100_000_000_00_000_00)]
#[case::q0_c_fsd(0b101_000_000_00_000_00)]
#[case::q0_c_fsw(0b111_000_000_00_000_00)]
#[case::q2_c_fldsp(0b001_0_00000_00000_10)]
#[case::q2_c_flwsp(0b011_0_00000_00000_10)]
#[case::q2_c_fsdsp(0b101_0_00000_00000_10)]
#[case::q2_c_fswsp(0b111_0_00000_00000_10)]
fn fp_and_reserved_groups_are_illegal(#[case] word: u16) {
    assert_eq!(decode(word), Op::illegal(true));
}

#[rstest]
#[case::jr_without_base(0b100_0_00000_00000_10)]
#[case::mv_to_x0(0b100_0_00000_01011_10)]
#[case::add_to_x0(0b100_1_00000_01011_10)]
fn other_group_zero_register_slots_are_illegal(#[case] word: u16) {
    // A zero bits 11:7 field means "no register" in these operand slots.
    assert_eq!(decode(word), Op::illegal(true));
}
