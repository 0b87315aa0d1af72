//! # Writeback Selector Tests
//!
//! Write enables and values per class, and the load extension registers.

use rstest::rstest;
use slicev_core::common::{Nibble, Phase, SubCycle};
use slicev_core::core::signals::{AccessWidth, AluOp, InstrClass, MemOp};
use slicev_core::core::writeback::{LoadLatches, WritebackSelector, WritebackSources};

const SOURCES: WritebackSources = WritebackSources {
    alu_out: Nibble::new(0xA),
    shift_out: Nibble::new(0x5),
    compare: true,
    imm: Nibble::new(0x1),
    next_pc: Nibble::new(0x4),
    load: Nibble::new(0xC),
    load_done: true,
};

fn select(class: InstrClass, op: AluOp, phase: u8, counter: u8) -> Option<Nibble> {
    WritebackSelector::select(Some(class), op, Phase::new(phase), SubCycle::new(counter), &SOURCES)
}

#[rstest]
#[case(InstrClass::AluReg, AluOp::Add, 0, 3, Some(0xA))]
#[case(InstrClass::AluImm, AluOp::Slt, 0, 0, Some(0xA))]
#[case(InstrClass::AluImm, AluOp::Slt, 1, 0, Some(0x1))]
#[case(InstrClass::AluReg, AluOp::Sltu, 1, 1, Some(0xA))]
#[case(InstrClass::AluReg, AluOp::Sll, 0, 2, Some(0xA))]
#[case(InstrClass::AluReg, AluOp::Sra, 1, 2, Some(0x5))]
#[case(InstrClass::Auipc, AluOp::Add, 0, 7, Some(0xA))]
#[case(InstrClass::Lui, AluOp::Add, 0, 4, Some(0x1))]
#[case(InstrClass::Jal, AluOp::Add, 0, 4, Some(0x4))]
#[case(InstrClass::Jalr, AluOp::Add, 0, 4, Some(0x4))]
#[case(InstrClass::Load, AluOp::Add, 1, 4, Some(0xC))]
#[case(InstrClass::Store, AluOp::Add, 0, 4, None)]
#[case(InstrClass::Branch, AluOp::Sub, 1, 4, None)]
#[case(InstrClass::System, AluOp::Add, 0, 4, None)]
#[case(InstrClass::Stall, AluOp::Add, 0, 4, None)]
fn selection(
    #[case] class: InstrClass,
    #[case] op: AluOp,
    #[case] phase: u8,
    #[case] counter: u8,
    #[case] expected: Option<u8>,
) {
    assert_eq!(select(class, op, phase, counter), expected.map(Nibble::new));
}

#[test]
fn auipc_ignores_set_less_than_opcode() {
    // The compare override only applies to the arithmetic classes.
    assert_eq!(select(InstrClass::Auipc, AluOp::Slt, 1, 0), Some(Nibble::new(0xA)));
}

#[test]
fn load_write_disabled_until_data_arrives() {
    let src = WritebackSources {
        load_done: false,
        ..SOURCES
    };
    assert_eq!(
        WritebackSelector::select(Some(InstrClass::Load), AluOp::Add, Phase::ONE, SubCycle::FIRST, &src),
        None
    );
}

#[test]
fn idle_never_writes() {
    assert_eq!(
        WritebackSelector::select(None, AluOp::Add, Phase::ZERO, SubCycle::FIRST, &SOURCES),
        None
    );
}

#[rstest]
#[case(AccessWidth::Byte, false, 0x8, 1, 0xF)]
#[case(AccessWidth::Byte, true, 0x8, 1, 0x0)]
#[case(AccessWidth::Byte, false, 0x7, 1, 0x0)]
#[case(AccessWidth::Half, false, 0x9, 3, 0xF)]
#[case(AccessWidth::Half, true, 0x9, 3, 0x0)]
fn sign_bit_captured_at_width_boundary(
    #[case] width: AccessWidth,
    #[case] unsigned: bool,
    #[case] top: u8,
    #[case] boundary: u8,
    #[case] fill: u8,
) {
    let mem_op = MemOp::access(width, unsigned);
    let mut latches = LoadLatches::new();
    latches.update(SubCycle::new(boundary), mem_op, false, Nibble::new(top));
    let next = SubCycle::new(boundary + 1);
    assert_eq!(latches.extend(next, mem_op, Nibble::new(0x3)), Nibble::new(fill));
    assert_eq!(latches.extend(SubCycle::new(boundary), mem_op, Nibble::new(0x3)), Nibble::new(0x3));
}

#[test]
fn word_loads_pass_every_slice() {
    let mem_op = MemOp::access(AccessWidth::Word, false);
    let latches = LoadLatches::new();
    for counter in SubCycle::sweep() {
        assert_eq!(latches.extend(counter, mem_op, Nibble::new(0x9)), Nibble::new(0x9));
    }
}

#[test]
fn done_register_samples_at_first_sub_cycle_only() {
    let mem_op = MemOp::access(AccessWidth::Word, false);
    let mut latches = LoadLatches::new();
    latches.update(SubCycle::FIRST, mem_op, true, Nibble::ZERO);
    assert!(latches.done(SubCycle::new(4), false));
    latches.update(SubCycle::new(4), mem_op, false, Nibble::ZERO);
    assert!(latches.done(SubCycle::new(5), false));
    latches.update(SubCycle::FIRST, mem_op, false, Nibble::ZERO);
    assert!(!latches.done(SubCycle::new(1), true));
}
