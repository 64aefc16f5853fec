//! Instruction Set Architecture (ISA) Definitions.
//!
//! Contains the shared operation vocabulary, bit-field extraction
//! utilities, and the compressed-instruction decode logic.
//!
//! # Modules
//!
//! * `abi`: Register indices fixed by the calling convention (zero, ra, sp).
//! * `op_type`: Closed-set operation-kind and target-unit enumerations.
//! * `instruction`: Bit-range extraction over raw 16-bit words.
//! * `rvc`: Standard Extension for Compressed Instructions (decode).
//! * `disasm`: Compressed-instruction disassembler for diagnostics.

/// Application Binary Interface (ABI) register index constants.
pub mod abi;

/// Compressed-instruction disassembler for debug tracing and diagnostics.
pub mod disasm;

/// Bit extraction utilities over raw 16-bit instruction words.
pub mod instruction;

/// Operation-kind and execution-unit target enumerations.
pub mod op_type;

/// Compressed instruction extension (16-bit instruction decoding).
pub mod rvc;
