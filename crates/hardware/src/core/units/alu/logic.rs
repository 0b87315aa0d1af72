//! Slice logical and comparison operations.
//!
//! Bitwise results are independent per slice. Comparisons are carried in the
//! compare bit: equality is AND-reduced over the sweep, while signed and unsigned
//! less-than are settled by the top slice from the adder's carry.

use crate::common::Nibble;
use crate::core::signals::AluOp;

/// Bitwise operation on one slice. Returns zero for non-bitwise opcodes.
pub fn bitwise(op: AluOp, a: Nibble, b: Nibble) -> Nibble {
    match op {
        AluOp::Xor => Nibble::new(a.val() ^ b.val()),
        AluOp::Or => Nibble::new(a.val() | b.val()),
        AluOp::And => Nibble::new(a.val() & b.val()),
        _ => Nibble::ZERO,
    }
}

/// Compare bit after this slice.
///
/// # Arguments
///
/// * `op`         - Selects signed, unsigned or equality comparison
/// * `a`          - First operand slice
/// * `b`          - Second operand slice
/// * `carry_out`  - Carry out of the slice adder computing `a - b`
/// * `compare_in` - Running comparison from the lower slices
///
/// For the less-than opcodes only the value produced on the top slice is meaningful.
pub fn compare(op: AluOp, a: Nibble, b: Nibble, carry_out: bool, compare_in: bool) -> bool {
    match op {
        AluOp::Slt => {
            if a.bit(3) == b.bit(3) {
                !carry_out
            } else {
                a.bit(3)
            }
        }
        AluOp::Sltu => !carry_out,
        _ => compare_in && a == b,
    }
}
