//! Bit extraction utilities over raw 16-bit instruction words.
//!
//! Compressed encodings are classified along two axes: the quadrant in
//! bits 1:0 and the group selector in bits 15:13. Beyond those, individual
//! formats read arbitrary inclusive bit ranges whose meaning changes with
//! the enclosing group; `bits` is the single primitive all of them use.

/// Bit mask for extracting the quadrant field (bits 0-1).
pub const QUADRANT_MASK: u16 = 0x3;
/// Bit shift for extracting the group selector field (bits 13-15).
pub const GROUP_SHIFT: u32 = 13;
/// Bit mask for the group selector field (3 bits).
pub const GROUP_MASK: u16 = 0x7;

/// Trait for extracting fields from 16-bit compressed instruction words.
pub trait CompressedBits {
    /// Extracts the unsigned value of the inclusive bit range `hi:lo`.
    ///
    /// `lo` and `hi` are bit positions within the word (`hi >= lo`,
    /// both < 16). The extracted value is right-aligned.
    fn bits(self, lo: u32, hi: u32) -> u16;

    /// Extracts the quadrant field (bits 1:0), the first classification
    /// axis of the compressed encoding.
    fn quadrant(self) -> u16;

    /// Extracts the group selector field (bits 15:13), the second
    /// classification axis within a quadrant.
    fn group(self) -> u16;
}

impl CompressedBits for u16 {
    #[inline(always)]
    fn bits(self, lo: u32, hi: u32) -> u16 {
        debug_assert!(lo <= hi && hi < 16);
        let width = hi - lo + 1;
        ((u32::from(self) >> lo) & ((1 << width) - 1)) as u16
    }

    #[inline(always)]
    fn quadrant(self) -> u16 {
        self & QUADRANT_MASK
    }

    #[inline(always)]
    fn group(self) -> u16 {
        (self >> GROUP_SHIFT) & GROUP_MASK
    }
}
