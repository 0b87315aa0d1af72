//! Slice shift unit.
//!
//! Produces one slice of `operand` shifted by a 5-bit amount. The core holds the
//! operand stable in its accumulator for the whole writeback sweep, so the unit
//! indexes it directly by sub-cycle.

use crate::common::{Nibble, SubCycle};
use crate::core::signals::AluOp;

/// Bit mask for the 5-bit shift amount (0-31).
const SHAMT_MASK: u8 = 0x1f;

/// Slice shift unit.
#[derive(Clone, Copy, Debug, Default)]
pub struct NibbleShifter;

impl NibbleShifter {
    /// Returns slice `counter` of the shifted operand.
    ///
    /// # Arguments
    ///
    /// * `op`      - Shift opcode (`Sll`, `Srl`, `Sra`); other opcodes yield zero
    /// * `counter` - Slice to produce
    /// * `operand` - The full 32-bit value being shifted
    /// * `amount`  - Shift amount; only the low five bits are used
    pub fn execute(op: AluOp, counter: SubCycle, operand: u32, amount: u8) -> Nibble {
        let amount = u32::from(amount & SHAMT_MASK);
        let shifted = match op {
            AluOp::Sll => operand << amount,
            AluOp::Srl => operand >> amount,
            AluOp::Sra => ((operand as i32) >> amount) as u32,
            _ => 0,
        };
        Nibble::of_word(shifted, counter)
    }
}
