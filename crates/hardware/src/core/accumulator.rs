//! Slice Accumulator.
//!
//! A 32-bit shift register that rebuilds full-width values from slices. Each
//! shift places the incoming slice at bits [31:28] and moves the rest down by
//! four, so a value fed least-significant slice first is fully assembled after
//! eight shifts. The register serves three consumers:
//! 1. **Address:** bits [31:4], valid at the last sub-cycle of the sweep that built it.
//! 2. **Shift Operand:** the whole word, held while the shift unit reads it back.
//! 3. **Store Data:** bits [3:0], streaming the previously assembled value out one slice per clock.

use crate::common::constants::{ADDRESS_BITS, SLICE_BITS};
use crate::common::{Nibble, Phase, SubCycle};
use crate::core::signals::{AluOp, InstrClass, MemOp};

/// The accumulator register.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SliceAccumulator {
    value: u32,
}

impl SliceAccumulator {
    /// Creates a cleared accumulator.
    pub const fn new() -> Self {
        Self { value: 0 }
    }

    /// Creates an accumulator already holding `value`.
    pub const fn with_value(value: u32) -> Self {
        Self { value }
    }

    /// The full 32-bit contents.
    #[inline(always)]
    pub const fn value(&self) -> u32 {
        self.value
    }

    /// The top 28 bits, driven on `addr_out`.
    #[inline(always)]
    pub const fn address(&self) -> u32 {
        self.value >> (32 - ADDRESS_BITS)
    }

    /// The bottom slice.
    #[inline(always)]
    pub const fn low_slice(&self) -> Nibble {
        Nibble::new(self.value as u8)
    }

    /// The store-data slice for `counter`.
    ///
    /// Forced to zero past the access width so nothing beyond the byte or
    /// half-word is driven toward memory.
    pub const fn store_data(&self, counter: SubCycle, mem_op: MemOp) -> Nibble {
        if mem_op.width().is_exhausted_at(counter) {
            Nibble::ZERO
        } else {
            self.low_slice()
        }
    }

    /// Shifts `slice` in at the most-significant end.
    #[inline(always)]
    pub const fn shift_in(&mut self, slice: Nibble) {
        self.value = (self.value >> SLICE_BITS) | ((slice.val() as u32) << (32 - SLICE_BITS));
    }

    /// Clears the register.
    pub const fn clear(&mut self) {
        self.value = 0;
    }
}

/// The slices the accumulator can choose from in one clock.
#[derive(Clone, Copy, Debug, Default)]
pub struct AccumulatorSources {
    /// First register operand slice.
    pub rs1: Nibble,
    /// Second register operand slice.
    pub rs2: Nibble,
    /// Arithmetic unit output slice.
    pub alu_out: Nibble,
}

/// Whether the current instruction is a shift operation.
#[inline(always)]
fn is_shift(class: Option<InstrClass>, op: AluOp) -> bool {
    class.is_some_and(InstrClass::is_alu) && op.is_shift()
}

/// Chooses the slice to shift in this clock.
///
/// Shifts build their operand from `rs1` in phase 0; phase 0 of anything else
/// and every branch phase capture the arithmetic result; later phases take `rs2`.
pub fn input_slice(class: Option<InstrClass>, op: AluOp, phase: Phase, src: &AccumulatorSources) -> Nibble {
    if is_shift(class, op) && phase.is_zero() {
        src.rs1
    } else if phase.is_zero() || class == Some(InstrClass::Branch) {
        src.alu_out
    } else {
        src.rs2
    }
}

/// Whether the accumulator shifts this clock.
///
/// During the writeback phase of a shift the assembled operand is held so the
/// shift unit can index it; the hold covers the final slice as well.
pub fn shift_enabled(class: Option<InstrClass>, op: AluOp, phase: Phase) -> bool {
    !(is_shift(class, op) && phase == Phase::ONE)
}
