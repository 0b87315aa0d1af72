//! Slice adder.
//!
//! Computes `a + b + carry_in` on one slice, complementing `b` for subtract and
//! the set-less-than comparisons. The carry chain across slices is closed by the
//! core's carry latch.

use crate::common::Nibble;
use crate::common::constants::SLICE_MASK;
use crate::core::signals::AluOp;

/// Sum slice and carry out.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SliceSum {
    /// Low four bits of the sum.
    pub out: Nibble,
    /// Carry out of bit 3.
    pub carry: bool,
}

/// Adds one slice.
///
/// # Arguments
///
/// * `op`       - Selects whether `b` is complemented
/// * `a`        - First operand slice
/// * `b`        - Second operand slice
/// * `carry_in` - Carry from the previous slice, or the seed at sub-cycle 0
pub fn add(op: AluOp, a: Nibble, b: Nibble, carry_in: bool) -> SliceSum {
    let b = if op.complements_b() { !b.val() & SLICE_MASK } else { b.val() };
    let total = a.val() + b + carry_in as u8;
    SliceSum {
        out: Nibble::new(total),
        carry: total > SLICE_MASK,
    }
}
