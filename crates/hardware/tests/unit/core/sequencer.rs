//! # Sequencer Tests
//!
//! Completion rule table, phase advance and address-ready timing.

use rstest::rstest;
use slicev_core::common::{Phase, SubCycle};
use slicev_core::core::sequencer::{Completion, CompletionRule, Sequencer, SweepStatus};
use slicev_core::core::signals::{AluOp, InstrClass};

fn status(phase: u8, load_done: bool, branch_taken: bool) -> SweepStatus {
    SweepStatus {
        phase: Phase::new(phase),
        load_done,
        branch_taken,
    }
}

#[rstest]
#[case(InstrClass::Auipc)]
#[case(InstrClass::Lui)]
#[case(InstrClass::Store)]
#[case(InstrClass::Jal)]
#[case(InstrClass::Jalr)]
#[case(InstrClass::Stall)]
fn single_sweep_classes_always_complete(#[case] class: InstrClass) {
    let rule = CompletionRule::for_class(Some(class), AluOp::Add);
    assert_eq!(rule, CompletionRule::Always);
    assert_eq!(rule.evaluate(&status(0, false, false)), Completion::Complete);
}

#[rstest]
#[case(AluOp::Add, 0)]
#[case(AluOp::Sub, 0)]
#[case(AluOp::Xor, 0)]
#[case(AluOp::Slt, 1)]
#[case(AluOp::Sltu, 1)]
#[case(AluOp::Sll, 1)]
#[case(AluOp::Srl, 1)]
#[case(AluOp::Sra, 1)]
fn alu_completes_at_its_extra_phase(#[case] op: AluOp, #[case] phase: u8) {
    for class in [InstrClass::AluImm, InstrClass::AluReg] {
        let rule = CompletionRule::for_class(Some(class), op);
        assert_eq!(rule, CompletionRule::AtPhase(Phase::new(phase)));
        assert_eq!(rule.evaluate(&status(phase, false, false)), Completion::Complete);
        if phase > 0 {
            assert_eq!(rule.evaluate(&status(0, false, false)), Completion::Pending);
        }
    }
}

#[test]
fn load_waits_for_data() {
    let rule = CompletionRule::for_class(Some(InstrClass::Load), AluOp::Add);
    assert_eq!(rule.evaluate(&status(0, false, false)), Completion::Pending);
    assert_eq!(rule.evaluate(&status(3, false, false)), Completion::Pending);
    assert_eq!(rule.evaluate(&status(3, true, false)), Completion::Complete);
}

#[rstest]
#[case(0, false, Completion::Complete)]
#[case(0, true, Completion::Pending)]
#[case(1, true, Completion::Complete)]
#[case(1, false, Completion::Complete)]
fn branch_rule(#[case] phase: u8, #[case] taken: bool, #[case] expected: Completion) {
    let rule = CompletionRule::for_class(Some(InstrClass::Branch), AluOp::Sub);
    assert_eq!(rule.evaluate(&status(phase, false, taken)), expected);
}

#[test]
fn idle_never_completes_and_is_not_unhandled() {
    let rule = CompletionRule::for_class(None, AluOp::Add);
    assert_eq!(rule, CompletionRule::Idle);
    assert_eq!(rule.evaluate(&status(0, true, true)), Completion::Pending);
}

#[test]
fn system_is_unhandled() {
    let rule = CompletionRule::for_class(Some(InstrClass::System), AluOp::Add);
    assert_eq!(rule.evaluate(&status(0, true, true)), Completion::Unhandled);
}

#[test]
fn completion_only_on_last_sub_cycle() {
    let seq = Sequencer::new();
    for counter in 0..7 {
        assert_eq!(
            seq.completion(SubCycle::new(counter), CompletionRule::Always, &SweepStatus::default()),
            Completion::Pending
        );
    }
    assert_eq!(
        seq.completion(SubCycle::LAST, CompletionRule::Always, &SweepStatus::default()),
        Completion::Complete
    );
}

#[test]
fn unhandled_still_advances_phase() {
    let mut seq = Sequencer::new();
    seq.advance(SubCycle::LAST, Completion::Unhandled);
    assert_eq!(seq.phase(), Phase::ONE);
    seq.reset();
    assert_eq!(seq.phase(), Phase::ZERO);
}

#[rstest]
#[case(Some(InstrClass::Load), true)]
#[case(Some(InstrClass::Store), true)]
#[case(Some(InstrClass::AluImm), false)]
#[case(Some(InstrClass::Jalr), false)]
#[case(None, false)]
fn address_ready_only_for_memory_classes(#[case] class: Option<InstrClass>, #[case] expected: bool) {
    let seq = Sequencer::new();
    assert_eq!(seq.address_ready(SubCycle::LAST, class), expected);
    assert!(!seq.address_ready(SubCycle::new(6), class));
}

#[test]
fn address_ready_only_in_phase_zero() {
    let mut seq = Sequencer::new();
    seq.advance(SubCycle::LAST, Completion::Pending);
    assert!(!seq.address_ready(SubCycle::LAST, Some(InstrClass::Load)));
}
