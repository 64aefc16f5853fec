//! Canonical decoded-operation descriptor.
//!
//! Every 16-bit word the decoder classifies, legal or not, becomes exactly
//! one [`Op`] value. The descriptor pairs an operation kind with the
//! execution unit that consumes it, the register operands, and the decoded
//! immediate. "Illegal instruction" is a first-class descriptor (the
//! [`Op::illegal`] sentinel), not an error path: the caller's pipeline
//! interprets it as a trap condition for the emulated hart.

use serde::{Deserialize, Serialize};

use crate::isa::op_type::{OpKind, Target};

/// Canonical decoded-operation descriptor.
///
/// Constructed fresh per decode call and owned by the caller. Fields that
/// a given operation does not use are zeroed (`imm`, register indices) or
/// cleared (`has_imm`, `use_pc`).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Op {
    /// Immediate or offset value; zero when the operation carries none.
    ///
    /// Sign-extended immediates are stored as their 32-bit two's-complement
    /// bit pattern.
    pub imm: u32,
    /// Concrete operation kind (ALU sub-op, access-size mask, or branch
    /// comparison mask).
    pub kind: OpKind,
    /// Downstream execution unit that consumes this operation.
    pub target: Target,
    /// Destination register index (0-31); zero when unused.
    pub rd: u8,
    /// First source register index (0-31); zero when unused.
    pub rs1: u8,
    /// Second source register index (0-31); zero when unused.
    pub rs2: u8,
    /// Whether `imm` is semantically meaningful for this operation.
    pub has_imm: bool,
    /// Whether the effective target/result is computed PC-relative.
    pub use_pc: bool,
    /// Whether the source encoding occupied 2 bytes rather than 4.
    ///
    /// Always true for descriptors produced by the compressed decoder,
    /// including illegal ones; callers use it to advance the PC.
    pub is_compressed: bool,
}

impl Op {
    /// Creates the illegal-instruction sentinel descriptor.
    ///
    /// The sentinel carries no operation ([`OpKind::None`]), no target
    /// unit ([`Target::None`]), and no operands; only the compressed flag
    /// is meaningful.
    ///
    /// # Arguments
    ///
    /// * `is_compressed` - Whether the rejected encoding was a 16-bit word.
    #[inline]
    pub const fn illegal(is_compressed: bool) -> Self {
        Self {
            imm: 0,
            kind: OpKind::None,
            target: Target::None,
            rd: 0,
            rs1: 0,
            rs2: 0,
            has_imm: false,
            use_pc: false,
            is_compressed,
        }
    }

    /// Returns true if this descriptor is the illegal-instruction sentinel.
    #[inline]
    pub const fn is_illegal(self) -> bool {
        matches!(self.target, Target::None)
    }
}
