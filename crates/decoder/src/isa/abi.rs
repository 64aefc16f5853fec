//! RISC-V Application Binary Interface (ABI) register index constants.
//!
//! The compressed encodings hard-code a handful of registers rather than
//! carrying a field for them: the link register for `C.JAL`/`C.JALR` and
//! the stack pointer for the `sp`-relative forms.

/// Register x0 (zero register, always zero).
pub const REG_ZERO: u8 = 0;
/// Register x1 (return address, ra).
pub const REG_RA: u8 = 1;
/// Register x2 (stack pointer, sp).
pub const REG_SP: u8 = 2;
