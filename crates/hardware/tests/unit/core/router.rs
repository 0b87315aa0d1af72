//! # Operand Router Tests
//!
//! Per-class selection of the operation and both operand slices.

use pretty_assertions::assert_eq;
use rstest::rstest;
use slicev_core::common::{Nibble, Phase};
use slicev_core::core::router::{AluRequest, OperandRouter};
use slicev_core::core::signals::{AluOp, CoreInputs, InstrClass};

const RS1: Nibble = Nibble::new(0x1);
const RS2: Nibble = Nibble::new(0x2);
const IMM: Nibble = Nibble::new(0x3);
const PC: Nibble = Nibble::new(0x4);

fn inputs(op: AluOp) -> CoreInputs {
    CoreInputs {
        alu_op: op,
        imm: IMM,
        pc: PC,
        ..CoreInputs::default()
    }
}

#[rstest]
#[case(InstrClass::AluReg, 0, AluOp::Sub, AluOp::Sub, RS1, RS2)]
#[case(InstrClass::AluImm, 0, AluOp::Xor, AluOp::Xor, RS1, IMM)]
#[case(InstrClass::Load, 0, AluOp::Add, AluOp::Add, RS1, IMM)]
#[case(InstrClass::Store, 0, AluOp::Add, AluOp::Add, RS1, IMM)]
#[case(InstrClass::Jalr, 0, AluOp::Add, AluOp::Add, RS1, IMM)]
#[case(InstrClass::Auipc, 0, AluOp::Add, AluOp::Add, PC, IMM)]
#[case(InstrClass::Jal, 0, AluOp::Add, AluOp::Add, PC, IMM)]
#[case(InstrClass::Branch, 0, AluOp::Slt, AluOp::Slt, RS1, RS2)]
#[case(InstrClass::Branch, 1, AluOp::Slt, AluOp::Add, PC, IMM)]
#[case(InstrClass::Branch, 5, AluOp::Sub, AluOp::Add, PC, IMM)]
fn routing(
    #[case] class: InstrClass,
    #[case] phase: u8,
    #[case] decoded: AluOp,
    #[case] op: AluOp,
    #[case] a: Nibble,
    #[case] b: Nibble,
) {
    let req = OperandRouter::route(Some(class), Phase::new(phase), &inputs(decoded), RS1, RS2);
    assert_eq!(req, AluRequest { op, a, b });
}

#[test]
fn idle_routes_rs1_and_immediate() {
    let req = OperandRouter::route(None, Phase::ZERO, &inputs(AluOp::Or), RS1, RS2);
    assert_eq!(
        req,
        AluRequest {
            op: AluOp::Or,
            a: RS1,
            b: IMM
        }
    );
}
