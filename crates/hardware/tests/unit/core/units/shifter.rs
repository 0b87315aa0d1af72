//! # Slice Shifter Tests

use proptest::prelude::*;
use rstest::rstest;
use slicev_core::common::{Nibble, SubCycle};
use slicev_core::core::signals::AluOp;
use slicev_core::core::units::shifter::NibbleShifter;

fn assemble(op: AluOp, operand: u32, amount: u8) -> u32 {
    SubCycle::sweep().fold(0, |word, counter| {
        NibbleShifter::execute(op, counter, operand, amount).insert_into(word, counter)
    })
}

#[rstest]
#[case(AluOp::Sll, 0x1234_5678, 4, 0x2345_6780)]
#[case(AluOp::Srl, 0x8000_0000, 31, 1)]
#[case(AluOp::Sra, 0x8000_0000, 31, 0xFFFF_FFFF)]
#[case(AluOp::Sra, 0x4000_0000, 30, 1)]
#[case(AluOp::Sll, 1, 0, 1)]
#[case(AluOp::Sll, 1, 33, 2)]
fn shifts(#[case] op: AluOp, #[case] operand: u32, #[case] amount: u8, #[case] expected: u32) {
    assert_eq!(assemble(op, operand, amount), expected);
}

#[test]
fn non_shift_opcodes_yield_zero() {
    assert_eq!(NibbleShifter::execute(AluOp::Add, SubCycle::FIRST, 0xF, 0), Nibble::ZERO);
}

proptest! {
    #[test]
    fn matches_native_shifts(operand in any::<u32>(), amount in 0u8..32) {
        prop_assert_eq!(assemble(AluOp::Sll, operand, amount), operand << amount);
        prop_assert_eq!(assemble(AluOp::Srl, operand, amount), operand >> amount);
        prop_assert_eq!(assemble(AluOp::Sra, operand, amount), ((operand as i32) >> amount) as u32);
    }
}
