//! Global Datapath Constants.
//!
//! This module defines the widths that every component of the core agrees on. It includes:
//! 1. **Slice Geometry:** Bits per slice and slices per 32-bit word.
//! 2. **Sequencing Limits:** Bounds of the sub-cycle and phase counters.
//! 3. **Address Space:** Width of the address exposed to the memory system.

/// Number of bits processed per clock.
pub const SLICE_BITS: u32 = 4;

/// Mask selecting one slice from the bottom of a wider value.
pub const SLICE_MASK: u8 = 0xF;

/// Number of slices in a 32-bit word (one full sweep).
pub const SLICES_PER_WORD: u8 = 8;

/// Highest sub-cycle index; the sweep ends on this clock.
pub const LAST_SUB_CYCLE: u8 = SLICES_PER_WORD - 1;

/// Highest phase index; the phase counter saturates here.
pub const MAX_PHASE: u8 = 7;

/// Width of the address driven on `addr_out`.
///
/// The accumulator exposes its top 28 bits, which at the end of a sweep hold
/// the low 28 bits of the assembled value.
pub const ADDRESS_BITS: u32 = 28;

/// Mask for a 28-bit address.
pub const ADDRESS_MASK: u32 = (1 << ADDRESS_BITS) - 1;

/// Size of one instruction in bytes; the next-PC slice stream is `pc + 4`.
pub const INSTRUCTION_BYTES: u32 = 4;
