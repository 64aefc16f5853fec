//! Compressed Decode Properties.
//!
//! Verifies the whole-domain guarantees of `decode()`: totality over all
//! 65,536 sixteen-bit inputs, the compressed-flag invariant, the
//! zero-word and quadrant-3 sentinels, and determinism across repeated
//! calls.

use proptest::prelude::*;

use rvdec_core::isa::op_type::Target;
use rvdec_core::{Op, decode};

#[test]
fn decode_is_total_and_always_compressed() {
    // Every possible word must produce a descriptor without panicking,
    // and every descriptor must carry the compressed flag.
    for word in 0..=u16::MAX {
        let op = decode(word);
        assert!(op.is_compressed, "word {word:#06x} lost the compressed flag");
    }
}

#[test]
fn zero_word_is_illegal() {
    // The all-zero word is reserved; it must not alias C.ADDI4SPN.
    assert_eq!(decode(0x0000), Op::illegal(true));
}

#[test]
fn quadrant_3_is_illegal_exhaustively() {
    // Bits 1:0 = 11 signals a 32-bit-or-wider instruction.
    for word in (0..=u16::MAX).filter(|w| w & 0b11 == 0b11) {
        assert_eq!(decode(word), Op::illegal(true), "word {word:#06x}");
    }
}

#[test]
fn illegal_sentinel_shape() {
    // The sentinel carries no target unit, no kind, and no operands.
    let op = Op::illegal(true);
    assert_eq!(op.target, Target::None);
    assert!(op.is_illegal());
    assert_eq!((op.rd, op.rs1, op.rs2), (0, 0, 0));
    assert_eq!(op.imm, 0);
    assert!(!op.has_imm);
    assert!(!op.use_pc);
}

proptest! {
    /// Decoding is a pure function of the word alone: repeated calls on
    /// the same input produce identical descriptors.
    #[test]
    fn decode_is_deterministic(word in any::<u16>()) {
        prop_assert_eq!(decode(word), decode(word));
    }

    /// Every legal descriptor names a real execution unit; everything
    /// else is exactly the illegal sentinel. No third outcome exists.
    #[test]
    fn classification_is_binary(word in any::<u16>()) {
        let op = decode(word);
        if op.is_illegal() {
            prop_assert_eq!(op, Op::illegal(true));
        } else {
            prop_assert!(matches!(
                op.target,
                Target::Alu | Target::Load | Target::Store | Target::Branch | Target::Ebreak
            ));
        }
    }
}
