//! Operation-kind and execution-unit target enumerations.
//!
//! Both enumerations are deliberately closed sets rather than open-ended
//! integers so that downstream execution-unit dispatch is itself
//! exhaustively checked by the compiler.

use serde::{Deserialize, Serialize};

/// Concrete operation kind carried by a decoded descriptor.
///
/// Covers the ALU sub-operations, the memory access-size masks, and the
/// branch comparison masks reachable from the compressed encodings.
/// [`OpKind::None`] is the empty value used by control operations with no
/// ALU sub-op (breakpoint) and by the illegal sentinel.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum OpKind {
    /// No operation kind (breakpoint trap, illegal sentinel).
    #[default]
    None,
    /// Integer addition (also register moves and load-immediate).
    Add,
    /// Integer subtraction.
    Sub,
    /// Logical left shift.
    Sll,
    /// Logical right shift.
    Srl,
    /// Arithmetic right shift.
    Sra,
    /// Bitwise AND.
    And,
    /// Bitwise OR.
    Or,
    /// Bitwise XOR.
    Xor,
    /// PC-relative jump-and-link.
    Jal,
    /// Register-indirect jump-and-link.
    Jalr,
    /// Load word (32-bit access-size mask).
    Lw,
    /// Store word (32-bit access-size mask).
    Sw,
    /// Branch if equal (compare-against-zero in the compressed forms).
    Beq,
    /// Branch if not equal.
    Bne,
}

/// Downstream execution unit that consumes a decoded operation.
///
/// [`Target::None`] is the none-meaningful sentinel identifying the
/// illegal descriptor.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Target {
    /// No execution unit: the illegal-instruction sentinel.
    #[default]
    None,
    /// Arithmetic-logic unit (arithmetic, shifts, jumps).
    Alu,
    /// Load unit.
    Load,
    /// Store unit.
    Store,
    /// Branch unit.
    Branch,
    /// Breakpoint trap.
    Ebreak,
}
