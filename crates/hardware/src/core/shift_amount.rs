//! Shift Amount Capture.
//!
//! Assembles the 5-bit shift amount from the first two slices of the amount
//! source during phase 0: bits [3:0] at sub-cycle 0, then bit 4 from bit 0 of
//! the sub-cycle 1 slice. The register is left alone afterwards so the amount
//! stays stable through the writeback sweep.

use crate::common::{Nibble, Phase, SubCycle};
use crate::core::signals::InstrClass;

/// The 5-bit shift amount register.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ShiftAmount(u8);

impl ShiftAmount {
    /// Creates a cleared register.
    pub const fn new() -> Self {
        Self(0)
    }

    /// The captured amount (0..=31).
    #[inline(always)]
    pub const fn get(self) -> u8 {
        self.0
    }

    /// Selects the amount source: the immediate for register-immediate forms, `rs2` otherwise.
    pub fn source(class: Option<InstrClass>, imm: Nibble, rs2: Nibble) -> Nibble {
        if class == Some(InstrClass::AluImm) { imm } else { rs2 }
    }

    /// Updates the register at the end of the clock.
    pub const fn capture(&mut self, phase: Phase, counter: SubCycle, source: Nibble) {
        if !phase.is_zero() {
            return;
        }
        match counter.val() {
            0 => self.0 = (self.0 & 0x10) | source.val(),
            1 => self.0 = (self.0 & 0x0f) | ((source.val() & 1) << 4),
            _ => {}
        }
    }

    /// Clears the register.
    pub const fn clear(&mut self) {
        self.0 = 0;
    }
}
