//! RISC-V RV32 compressed-instruction (RVC) decoder.
//!
//! This crate decodes every 16-bit RVC word into a single canonical
//! [`Op`] descriptor consumed by an emulation/execution pipeline:
//! 1. **Common:** The operation descriptor all decode paths converge on.
//! 2. **ISA:** Operation-kind and target-unit vocabularies, bit-field
//!    extraction, per-format field extractors, and the quadrant decoders.
//!
//! Decoding is a total, pure function: all 65,536 possible words map to
//! exactly one descriptor. Reserved and unsupported encodings (the zero
//! word, quadrant 3, floating-point RVC) map to the illegal descriptor
//! rather than an error.
//!
//! ```
//! use rvdec_core::decode;
//! use rvdec_core::isa::op_type::Target;
//!
//! // C.EBREAK
//! let op = decode(0x9002);
//! assert_eq!(op.target, Target::Ebreak);
//! assert!(op.is_compressed);
//! ```

/// Common types (the canonical operation descriptor).
pub mod common;
/// Instruction set (operation vocabulary, bit extraction, RVC decode).
pub mod isa;

/// Canonical decoded-operation descriptor; every decode path produces one.
pub use crate::common::op::Op;
/// Top-level entry point; decodes a 16-bit word into an [`Op`].
pub use crate::isa::rvc::decode::decode;
