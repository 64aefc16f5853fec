//! RISC-V Compressed Extension (C), RV32 flavor.
//!
//! The C extension packs common instructions into 16-bit words using
//! quadrant bits, 3-bit and 4-bit sub-opcodes, and overlapping bit
//! positions whose meaning depends on the enclosing group.
//!
//! # Structure
//!
//! - `constants`: Quadrant and group-selector definitions.
//! - `formats`: Per-format field extractors (registers, immediates,
//!   branch/jump targets).
//! - `decode`: The quadrant dispatch tree producing canonical descriptors.

/// Quadrant and group-selector constants for compressed instructions.
pub mod constants;

/// Quadrant dispatch tree decoding a word into an operation descriptor.
pub mod decode;

/// Per-format field extractors for compressed instruction words.
pub mod formats;
