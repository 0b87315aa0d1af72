//! Core Definition and Initialization.
//!
//! This module defines [`SliceCore`], the container for every register of the
//! execution-control core. It coordinates the following:
//! 1. **Sequencing:** The phase register and its completion rules.
//! 2. **Slice Threading:** The carry/compare latch and shift amount.
//! 3. **Value Assembly:** The 32-bit accumulator used for addresses, shift operands and store data.
//! 4. **Load Handshake:** The load-done and sign-bit registers.
//!
//! The external register file is passed in on each clock; see [`execution`].

/// Per-clock evaluation.
pub mod execution;

use crate::common::Phase;
use crate::core::accumulator::SliceAccumulator;
use crate::core::latch::CarryCompareLatch;
use crate::core::sequencer::Sequencer;
use crate::core::shift_amount::ShiftAmount;
use crate::core::writeback::LoadLatches;

/// The execution-control core.
///
/// Only one instruction is ever resident. The upstream driver must keep an
/// instruction's inputs asserted from sub-cycle 0 of its first sweep until the
/// clock on which `instr_complete` is reported.
#[derive(Clone, Debug, Default)]
pub struct SliceCore {
    pub(crate) sequencer: Sequencer,
    pub(crate) latch: CarryCompareLatch,
    pub(crate) shift_amount: ShiftAmount,
    pub(crate) accumulator: SliceAccumulator,
    pub(crate) load: LoadLatches,
}

impl SliceCore {
    /// Creates a core in its reset state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Synchronous reset.
    ///
    /// Clears the phase and, as a documented policy, every other register too.
    pub fn reset(&mut self) {
        self.sequencer.reset();
        self.latch.clear();
        self.shift_amount.clear();
        self.accumulator.clear();
        self.load.clear();
    }

    /// Current phase.
    pub const fn phase(&self) -> Phase {
        self.sequencer.phase()
    }

    /// The accumulator register.
    pub const fn accumulator(&self) -> &SliceAccumulator {
        &self.accumulator
    }

    /// The carry/compare latch.
    pub const fn latch(&self) -> &CarryCompareLatch {
        &self.latch
    }

    /// The captured shift amount.
    pub const fn shift_amount(&self) -> u8 {
        self.shift_amount.get()
    }

    /// The load handshake registers.
    pub const fn load_latches(&self) -> &LoadLatches {
        &self.load
    }
}
