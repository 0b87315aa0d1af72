//! # Slice Accumulator Tests
//!
//! Shift-in order, the address and store-data views, and input selection.

use proptest::prelude::*;
use rstest::rstest;
use slicev_core::common::{Nibble, Phase, SubCycle};
use slicev_core::core::accumulator::{self, AccumulatorSources, SliceAccumulator};
use slicev_core::core::signals::{AccessWidth, AluOp, InstrClass, MemOp};

const SOURCES: AccumulatorSources = AccumulatorSources {
    rs1: Nibble::new(1),
    rs2: Nibble::new(2),
    alu_out: Nibble::new(3),
};

#[test]
fn shift_in_enters_at_top() {
    let mut acc = SliceAccumulator::new();
    acc.shift_in(Nibble::new(0xA));
    assert_eq!(acc.value(), 0xA000_0000);
    acc.shift_in(Nibble::new(0x5));
    assert_eq!(acc.value(), 0x5A00_0000);
}

#[test]
fn address_after_seven_shifts_is_low_28_bits() {
    let word = 0xFEDC_BA98;
    let mut acc = SliceAccumulator::with_value(0x1111_1111);
    for counter in SubCycle::sweep().take(7) {
        acc.shift_in(Nibble::of_word(word, counter));
    }
    assert_eq!(acc.address(), word & 0x0FFF_FFFF);
}

#[rstest]
#[case(AccessWidth::Byte, 0x0000_0021)]
#[case(AccessWidth::Half, 0x0000_4321)]
#[case(AccessWidth::Word, 0x8765_4321)]
fn store_data_streams_within_width(#[case] width: AccessWidth, #[case] expected: u32) {
    let mut acc = SliceAccumulator::with_value(0x8765_4321);
    let mem_op = MemOp::access(width, false);
    let mut streamed = 0u32;
    for counter in SubCycle::sweep() {
        streamed = acc.store_data(counter, mem_op).insert_into(streamed, counter);
        acc.shift_in(Nibble::ZERO);
    }
    assert_eq!(streamed, expected);
}

#[rstest]
#[case(Some(InstrClass::AluReg), AluOp::Sll, 0, 1)]
#[case(Some(InstrClass::AluImm), AluOp::Sra, 0, 1)]
#[case(Some(InstrClass::AluReg), AluOp::Add, 0, 3)]
#[case(Some(InstrClass::Load), AluOp::Add, 0, 3)]
#[case(Some(InstrClass::Branch), AluOp::Sub, 0, 3)]
#[case(Some(InstrClass::Branch), AluOp::Add, 1, 3)]
#[case(Some(InstrClass::AluReg), AluOp::Slt, 1, 2)]
#[case(Some(InstrClass::Load), AluOp::Add, 2, 2)]
fn input_selection(#[case] class: Option<InstrClass>, #[case] op: AluOp, #[case] phase: u8, #[case] expected: u8) {
    assert_eq!(
        accumulator::input_slice(class, op, Phase::new(phase), &SOURCES),
        Nibble::new(expected)
    );
}

#[test]
fn shift_operand_held_through_writeback_phase() {
    assert!(accumulator::shift_enabled(Some(InstrClass::AluReg), AluOp::Sll, Phase::ZERO));
    assert!(!accumulator::shift_enabled(Some(InstrClass::AluReg), AluOp::Sll, Phase::ONE));
    assert!(!accumulator::shift_enabled(Some(InstrClass::AluImm), AluOp::Srl, Phase::ONE));
    assert!(accumulator::shift_enabled(Some(InstrClass::AluReg), AluOp::Slt, Phase::ONE));
    // A branch reuses Sub/Slt opcodes, never a shift.
    assert!(accumulator::shift_enabled(Some(InstrClass::Branch), AluOp::Add, Phase::ONE));
}

proptest! {
    #[test]
    fn eight_shifts_round_trip(start in any::<u32>(), word in any::<u32>()) {
        let mut acc = SliceAccumulator::with_value(start);
        for counter in SubCycle::sweep() {
            acc.shift_in(Nibble::of_word(word, counter));
        }
        prop_assert_eq!(acc.value(), word);
    }
}
