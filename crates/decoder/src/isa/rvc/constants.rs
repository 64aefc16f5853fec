//! RISC-V Compressed (C) Extension Constants, RV32 flavor.
//!
//! Defines the quadrants and group selectors for 16-bit compressed
//! instructions. Compressed instructions are divided into three quadrants
//! (0, 1, 2) based on the lowest 2 bits of the word; quadrant 3 marks a
//! 32-bit-or-wider instruction and is never a valid 16-bit encoding.

/// Quadrant 0 (bits 1:0 = 00).
pub const QUADRANT_0: u16 = 0b00;
/// Quadrant 1 (bits 1:0 = 01).
pub const QUADRANT_1: u16 = 0b01;
/// Quadrant 2 (bits 1:0 = 10).
pub const QUADRANT_2: u16 = 0b10;
/// Quadrant 3 (bits 1:0 = 11): a wider instruction, always illegal here.
pub const QUADRANT_3: u16 = 0b11;

/// Group selectors (bits 15:13) in Quadrant 0.
pub mod q0 {
    /// Compressed Add Immediate, scaled by 4, to Stack Pointer (C.ADDI4SPN).
    pub const C_ADDI4SPN: u16 = 0b000;
    /// Compressed Floating-point Load Double (C.FLD, unsupported).
    pub const C_FLD: u16 = 0b001;
    /// Compressed Load Word (C.LW).
    pub const C_LW: u16 = 0b010;
    /// Compressed Floating-point Load Word (C.FLW, unsupported).
    pub const C_FLW: u16 = 0b011;
    /// Reserved group.
    pub const C_RESERVED: u16 = 0b100;
    /// Compressed Floating-point Store Double (C.FSD, unsupported).
    pub const C_FSD: u16 = 0b101;
    /// Compressed Store Word (C.SW).
    pub const C_SW: u16 = 0b110;
    /// Compressed Floating-point Store Word (C.FSW, unsupported).
    pub const C_FSW: u16 = 0b111;
}

/// Group selectors (bits 15:13) in Quadrant 1.
pub mod q1 {
    /// Compressed Add Immediate (C.ADDI).
    pub const C_ADDI: u16 = 0b000;
    /// Compressed Jump And Link (C.JAL, RV32 only).
    pub const C_JAL: u16 = 0b001;
    /// Compressed Load Immediate (C.LI).
    pub const C_LI: u16 = 0b010;
    /// Compressed Load Upper Immediate / Add Immediate 16 to SP
    /// (C.LUI / C.ADDI16SP, disambiguated by the rd field).
    pub const C_LUI_ADDI16SP: u16 = 0b011;
    /// Arithmetic group (C.SRLI, C.SRAI, C.ANDI, C.SUB, C.XOR, C.OR, C.AND).
    pub const C_ARITH: u16 = 0b100;
    /// Compressed Jump (C.J).
    pub const C_J: u16 = 0b101;
    /// Compressed Branch Equal Zero (C.BEQZ).
    pub const C_BEQZ: u16 = 0b110;
    /// Compressed Branch Not Equal Zero (C.BNEZ).
    pub const C_BNEZ: u16 = 0b111;
}

/// Sub-selectors (bits 11:10) within the quadrant-1 arithmetic group.
pub mod arith {
    /// Compressed Shift Right Logical Immediate (C.SRLI).
    pub const C_SRLI: u16 = 0b00;
    /// Compressed Shift Right Arithmetic Immediate (C.SRAI).
    pub const C_SRAI: u16 = 0b01;
    /// Compressed AND Immediate (C.ANDI).
    pub const C_ANDI: u16 = 0b10;
    /// Register-register operations (C.SUB, C.XOR, C.OR, C.AND),
    /// further selected by bits 6:5.
    pub const NO_IMM: u16 = 0b11;
}

/// Sub-selectors (bits 6:5) within the no-immediate arithmetic group.
pub mod arith_no_imm {
    /// Compressed Subtract (C.SUB).
    pub const C_SUB: u16 = 0b00;
    /// Compressed XOR (C.XOR).
    pub const C_XOR: u16 = 0b01;
    /// Compressed OR (C.OR).
    pub const C_OR: u16 = 0b10;
    /// Compressed AND (C.AND).
    pub const C_AND: u16 = 0b11;
}

/// Group selectors (bits 15:13) in Quadrant 2.
pub mod q2 {
    /// Compressed Shift Left Logical Immediate (C.SLLI).
    pub const C_SLLI: u16 = 0b000;
    /// Compressed Floating-point Load Double from SP (C.FLDSP, unsupported).
    pub const C_FLDSP: u16 = 0b001;
    /// Compressed Load Word from SP (C.LWSP).
    pub const C_LWSP: u16 = 0b010;
    /// Compressed Floating-point Load Word from SP (C.FLWSP, unsupported).
    pub const C_FLWSP: u16 = 0b011;
    /// Four-way group (C.JR, C.MV, C.EBREAK, C.JALR, C.ADD),
    /// disambiguated by bit 12 and the two register fields.
    pub const OTHER: u16 = 0b100;
    /// Compressed Floating-point Store Double to SP (C.FSDSP, unsupported).
    pub const C_FSDSP: u16 = 0b101;
    /// Compressed Store Word to SP (C.SWSP).
    pub const C_SWSP: u16 = 0b110;
    /// Compressed Floating-point Store Word to SP (C.FSWSP, unsupported).
    pub const C_FSWSP: u16 = 0b111;
}
