//! Writeback Selector.
//!
//! Chooses the enable and slice for the register write port every clock, and
//! owns the two small load registers: `load_done`, sampled from the memory's
//! ready flag at sub-cycle 0, and `load_top_bit`, the sign bit sampled at the
//! access-width boundary and replicated into every later slice.

use crate::common::{Nibble, Phase, SubCycle};
use crate::core::signals::{AluOp, InstrClass, MemOp};

/// Load handshake registers.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct LoadLatches {
    done: bool,
    top_bit: bool,
}

impl LoadLatches {
    /// Creates cleared latches.
    pub const fn new() -> Self {
        Self {
            done: false,
            top_bit: false,
        }
    }

    /// Whether load data is flowing this clock.
    ///
    /// At sub-cycle 0 the register has not been written yet, so the live ready
    /// flag is used directly.
    #[inline(always)]
    pub const fn done(&self, counter: SubCycle, load_data_ready: bool) -> bool {
        if counter.is_first() { load_data_ready } else { self.done }
    }

    /// The latched sign bit.
    #[inline(always)]
    pub const fn top_bit(&self) -> bool {
        self.top_bit
    }

    /// The register-bound load slice: raw data within the access width, the
    /// latched sign (or zero for unsigned loads) beyond it.
    pub const fn extend(&self, counter: SubCycle, mem_op: MemOp, data_in: Nibble) -> Nibble {
        if mem_op.width().is_exhausted_at(counter) {
            Nibble::splat(self.top_bit)
        } else {
            data_in
        }
    }

    /// Updates both registers at the end of the clock.
    pub const fn update(&mut self, counter: SubCycle, mem_op: MemOp, load_data_ready: bool, data_in: Nibble) {
        if counter.is_first() {
            self.done = load_data_ready;
        }
        if let Some(last) = mem_op.width().last_slice() {
            if counter.val() == last.val() {
                self.top_bit = !mem_op.is_unsigned() && data_in.bit(3);
            }
        }
    }

    /// Clears both registers.
    pub const fn clear(&mut self) {
        *self = Self::new();
    }
}

/// Candidate writeback slices for one clock.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct WritebackSources {
    /// Arithmetic unit output.
    pub alu_out: Nibble,
    /// Shift unit output.
    pub shift_out: Nibble,
    /// Comparison registered at the end of the previous sweep.
    pub compare: bool,
    /// Immediate slice.
    pub imm: Nibble,
    /// Next-PC slice.
    pub next_pc: Nibble,
    /// Load slice after sign extension.
    pub load: Nibble,
    /// Load data is flowing this clock.
    pub load_done: bool,
}

/// Writeback selection logic.
#[derive(Clone, Copy, Debug, Default)]
pub struct WritebackSelector;

impl WritebackSelector {
    /// Returns the slice to write, or `None` when the write port is disabled.
    ///
    /// # Arguments
    ///
    /// * `class`   - Resolved instruction class
    /// * `op`      - Decoded (not routed) arithmetic opcode
    /// * `phase`   - Current phase
    /// * `counter` - Current sub-cycle
    /// * `src`     - Candidate slices
    pub fn select(
        class: Option<InstrClass>,
        op: AluOp,
        phase: Phase,
        counter: SubCycle,
        src: &WritebackSources,
    ) -> Option<Nibble> {
        match class? {
            InstrClass::AluImm | InstrClass::AluReg | InstrClass::Auipc => {
                let is_alu = class.is_some_and(InstrClass::is_alu);
                let extra_phase = phase == Phase::ONE;
                Some(if is_alu && op.is_set_less_than() && extra_phase && counter.is_first() {
                    Nibble::from_bit(src.compare)
                } else if is_alu && op.is_shift() && extra_phase {
                    src.shift_out
                } else {
                    src.alu_out
                })
            }
            InstrClass::Load => src.load_done.then_some(src.load),
            InstrClass::Lui => Some(src.imm),
            InstrClass::Jal | InstrClass::Jalr => Some(src.next_pc),
            InstrClass::Store | InstrClass::Branch | InstrClass::System | InstrClass::Stall => None,
        }
    }
}
