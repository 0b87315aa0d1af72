//! Carry / Compare Latch.
//!
//! Threads the arithmetic unit's carry-out and compare-out from one slice to the
//! next. At sub-cycle 0 the unit is fed seeds instead of the latched bits: the
//! carry seed is set for operations that add the complement of `b`, and the
//! compare seed is `true` so equality can be AND-reduced across the sweep.

use crate::common::{Nibble, SubCycle};
use crate::core::signals::AluOp;
use crate::core::units::alu::{ChainIn, NibbleAlu, SliceResult};

/// The two-bit latch register.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CarryCompareLatch {
    carry: bool,
    compare: bool,
}

impl CarryCompareLatch {
    /// Creates a cleared latch.
    pub const fn new() -> Self {
        Self {
            carry: false,
            compare: false,
        }
    }

    /// Latched carry from the previous clock.
    #[inline(always)]
    pub const fn carry(&self) -> bool {
        self.carry
    }

    /// Latched comparison from the previous clock.
    #[inline(always)]
    pub const fn compare(&self) -> bool {
        self.compare
    }

    /// The chain inputs for the arithmetic unit this clock.
    pub const fn chain_in(&self, counter: SubCycle, op: AluOp) -> ChainIn {
        if counter.is_first() {
            ChainIn {
                carry: op.complements_b(),
                compare: true,
            }
        } else {
            ChainIn {
                carry: self.carry,
                compare: self.compare,
            }
        }
    }

    /// Registers the arithmetic unit's outputs at the end of the clock.
    pub const fn latch(&mut self, result: &SliceResult) {
        self.carry = result.carry;
        self.compare = result.compare;
    }

    /// Clears both bits.
    pub const fn clear(&mut self) {
        *self = Self::new();
    }
}

/// Outcome of rippling one operation across all eight slices.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Ripple {
    /// Assembled 32-bit arithmetic output.
    pub value: u32,
    /// Carry out of the top slice.
    pub carry: bool,
    /// Comparison after the top slice.
    pub compare: bool,
}

/// Folds `op` over the eight slices of `a` and `b` exactly as the core does one clock at a time.
///
/// # Examples
///
/// ```
/// use slicev_core::core::latch::ripple;
/// use slicev_core::core::signals::AluOp;
///
/// assert_eq!(ripple(AluOp::Sub, 5, 7).value, 5u32.wrapping_sub(7));
/// assert!(ripple(AluOp::Slt, (-3i32) as u32, 2).compare);
/// assert!(ripple(AluOp::Sub, 42, 42).compare);
/// ```
pub fn ripple(op: AluOp, a: u32, b: u32) -> Ripple {
    let (latch, value) = SubCycle::sweep().fold(
        (CarryCompareLatch::new(), 0u32),
        |(mut latch, value), counter| {
            let chain = latch.chain_in(counter, op);
            let slice = NibbleAlu::execute(op, Nibble::of_word(a, counter), Nibble::of_word(b, counter), chain);
            latch.latch(&slice);
            (latch, slice.out.insert_into(value, counter))
        },
    );
    Ripple {
        value,
        carry: latch.carry(),
        compare: latch.compare(),
    }
}
