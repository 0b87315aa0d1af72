//! Slice-level data types.
//!
//! This module defines the small strongly-typed quantities the core moves around
//! every clock. It provides:
//! 1. **Nibble:** A 4-bit slice of a 32-bit value.
//! 2. **SubCycle:** Which slice of the current sweep is active (0..=7).
//! 3. **Phase:** Which sweep of a multi-sweep instruction is active (0..=7, saturating).

use std::fmt;

use super::constants::{LAST_SUB_CYCLE, MAX_PHASE, SLICE_BITS, SLICE_MASK, SLICES_PER_WORD};

/// A 4-bit slice of a 32-bit value.
///
/// The upper four bits of the backing byte are always zero.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Nibble(u8);

impl Nibble {
    /// The all-zero slice.
    pub const ZERO: Self = Self(0);

    /// The all-ones slice (`0xF`).
    pub const ONES: Self = Self(SLICE_MASK);

    /// Creates a slice from the low four bits of `value`.
    #[inline(always)]
    pub const fn new(value: u8) -> Self {
        Self(value & SLICE_MASK)
    }

    /// Returns the raw 4-bit value.
    #[inline(always)]
    pub const fn val(self) -> u8 {
        self.0
    }

    /// Returns bit `index` (0..=3) of the slice.
    #[inline(always)]
    pub const fn bit(self, index: u32) -> bool {
        (self.0 >> index) & 1 != 0
    }

    /// Returns a slice with all four bits equal to `bit`.
    ///
    /// Used for sign extension of loaded values.
    #[inline(always)]
    pub const fn splat(bit: bool) -> Self {
        if bit { Self::ONES } else { Self::ZERO }
    }

    /// Returns a slice holding `bit` zero-extended to four bits.
    #[inline(always)]
    pub const fn from_bit(bit: bool) -> Self {
        Self(bit as u8)
    }

    /// Extracts the slice of `word` selected by `counter`.
    ///
    /// Slice 0 is the least-significant nibble.
    #[inline(always)]
    pub const fn of_word(word: u32, counter: SubCycle) -> Self {
        Self::new((word >> (counter.val() as u32 * SLICE_BITS)) as u8)
    }

    /// Returns `word` with the slice at `counter` replaced by `self`.
    #[inline(always)]
    pub const fn insert_into(self, word: u32, counter: SubCycle) -> u32 {
        let shift = counter.val() as u32 * SLICE_BITS;
        (word & !((SLICE_MASK as u32) << shift)) | ((self.0 as u32) << shift)
    }
}

impl fmt::Display for Nibble {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:x}", self.0)
    }
}

/// Index of the slice active in the current clock (0..=7).
///
/// Supplied by the upstream driver; it increments every clock and wraps.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SubCycle(u8);

impl SubCycle {
    /// The first slice of a sweep.
    pub const FIRST: Self = Self(0);

    /// The last slice of a sweep.
    pub const LAST: Self = Self(LAST_SUB_CYCLE);

    /// Creates a sub-cycle index, wrapping values above 7.
    #[inline(always)]
    pub const fn new(value: u8) -> Self {
        Self(value % SLICES_PER_WORD)
    }

    /// Returns the raw index.
    #[inline(always)]
    pub const fn val(self) -> u8 {
        self.0
    }

    /// Whether this is sub-cycle 0.
    #[inline(always)]
    pub const fn is_first(self) -> bool {
        self.0 == 0
    }

    /// Whether this is sub-cycle 7.
    #[inline(always)]
    pub const fn is_last(self) -> bool {
        self.0 == LAST_SUB_CYCLE
    }

    /// Returns the following sub-cycle, wrapping 7 to 0.
    #[inline(always)]
    pub const fn next(self) -> Self {
        Self::new(self.0 + 1)
    }

    /// Iterates over one full sweep, 0 through 7.
    pub fn sweep() -> impl Iterator<Item = Self> {
        (0..SLICES_PER_WORD).map(SubCycle)
    }
}

impl fmt::Display for SubCycle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Index of the active sweep within a multi-sweep instruction (0..=7).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Phase(u8);

impl Phase {
    /// The first phase of every instruction.
    pub const ZERO: Self = Self(0);

    /// The second phase (branch target computation, set-less-than / shift writeback).
    pub const ONE: Self = Self(1);

    /// The saturation value.
    pub const MAX: Self = Self(MAX_PHASE);

    /// Creates a phase, clamping values above 7.
    #[inline(always)]
    pub const fn new(value: u8) -> Self {
        if value > MAX_PHASE { Self::MAX } else { Self(value) }
    }

    /// Returns the raw index.
    #[inline(always)]
    pub const fn val(self) -> u8 {
        self.0
    }

    /// Whether this is phase 0.
    #[inline(always)]
    pub const fn is_zero(self) -> bool {
        self.0 == 0
    }

    /// Returns the next phase, saturating at 7.
    #[inline(always)]
    pub const fn saturating_next(self) -> Self {
        Self::new(self.0.saturating_add(1))
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
