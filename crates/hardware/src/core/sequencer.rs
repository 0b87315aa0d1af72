//! Instruction Sequencer.
//!
//! The core runs two nested counters: the sub-cycle (0..=7, advanced by the
//! upstream driver every clock) and the phase (0..=7, owned here). At the last
//! sub-cycle of every sweep the asserted class's [`CompletionRule`] decides
//! whether the instruction retires; if it does, the phase returns to 0,
//! otherwise it advances and saturates at 7.
//!
//! Completion rules live in a table keyed by class so each one can be checked
//! on its own:
//!
//! | Class                               | Rule                                    |
//! |-------------------------------------|-----------------------------------------|
//! | alu-imm, alu-reg                    | phase == extra phases of the opcode     |
//! | auipc, lui, store, jal, jalr, stall | always                                  |
//! | load                                | load data arrived this sweep            |
//! | branch                              | not taken in phase 0, or any later phase|
//! | system                              | unhandled                               |

use crate::common::{Phase, SubCycle};
use crate::core::signals::{AluOp, InstrClass};

/// How an instruction class decides that it is done.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CompletionRule {
    /// Retires at the end of its first sweep.
    Always,
    /// Retires at the end of the given phase.
    AtPhase(Phase),
    /// Retires once the memory system has delivered load data.
    OnLoadData,
    /// Retires in phase 0 when not taken, otherwise after the target sweep.
    Branch,
    /// No class is asserted; the core idles.
    Idle,
    /// The class is recognised but has no rule. The hardware hangs here.
    Unhandled,
}

impl CompletionRule {
    /// Looks up the rule for a class.
    pub const fn for_class(class: Option<InstrClass>, op: AluOp) -> Self {
        match class {
            None => Self::Idle,
            Some(InstrClass::AluImm | InstrClass::AluReg) => Self::AtPhase(Phase::new(op.extra_phases())),
            Some(
                InstrClass::Auipc
                | InstrClass::Lui
                | InstrClass::Store
                | InstrClass::Jal
                | InstrClass::Jalr
                | InstrClass::Stall,
            ) => Self::Always,
            Some(InstrClass::Load) => Self::OnLoadData,
            Some(InstrClass::Branch) => Self::Branch,
            Some(InstrClass::System) => Self::Unhandled,
        }
    }

    /// Evaluates the rule at the end of a sweep.
    pub const fn evaluate(self, ctx: &SweepStatus) -> Completion {
        let done = match self {
            Self::Always => true,
            Self::AtPhase(phase) => ctx.phase.val() == phase.val(),
            Self::OnLoadData => ctx.load_done,
            Self::Branch => !ctx.phase.is_zero() || !ctx.branch_taken,
            Self::Idle => false,
            Self::Unhandled => return Completion::Unhandled,
        };
        if done { Completion::Complete } else { Completion::Pending }
    }
}

/// Facts a completion rule may consult.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SweepStatus {
    /// Phase of the sweep that is ending.
    pub phase: Phase,
    /// Load data was ready at the start of this sweep.
    pub load_done: bool,
    /// The branch condition holds (only meaningful in phase 0).
    pub branch_taken: bool,
}

/// Result of a completion check.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Completion {
    /// The instruction retires this clock.
    Complete,
    /// Another sweep is needed (or this is not the last sub-cycle).
    Pending,
    /// The class has no rule; the core will never complete it.
    Unhandled,
}

/// The phase register and its update logic.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Sequencer {
    phase: Phase,
}

impl Sequencer {
    /// Creates a sequencer in phase 0.
    pub const fn new() -> Self {
        Self { phase: Phase::ZERO }
    }

    /// The current phase.
    #[inline(always)]
    pub const fn phase(&self) -> Phase {
        self.phase
    }

    /// Synchronous reset.
    pub const fn reset(&mut self) {
        self.phase = Phase::ZERO;
    }

    /// Completion check for this clock; only the last sub-cycle can complete.
    pub const fn completion(&self, counter: SubCycle, rule: CompletionRule, ctx: &SweepStatus) -> Completion {
        if counter.is_last() {
            rule.evaluate(ctx)
        } else {
            Completion::Pending
        }
    }

    /// Whether the accumulated address is valid for the memory system this clock.
    pub fn address_ready(&self, counter: SubCycle, class: Option<InstrClass>) -> bool {
        counter.is_last() && self.phase.is_zero() && class.is_some_and(InstrClass::is_memory)
    }

    /// Updates the phase register at the end of the clock.
    pub const fn advance(&mut self, counter: SubCycle, completion: Completion) {
        if !counter.is_last() {
            return;
        }
        self.phase = match completion {
            Completion::Complete => Phase::ZERO,
            Completion::Pending | Completion::Unhandled => self.phase.saturating_next(),
        };
    }
}
