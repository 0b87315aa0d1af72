//! Instruction Disassembler.
//!
//! Renders an [`Instruction`] in RV32-style assembly for debug tracing,
//! logging, and test diagnostics. Descriptors that no real instruction could
//! produce (for example a branch with an arithmetic opcode) are rendered with
//! their raw fields.

use std::fmt;

use super::instruction::Instruction;
use crate::core::signals::{AccessWidth, AluOp, InstrClass};

/// Base mnemonic for an arithmetic opcode.
const fn alu_mnemonic(op: AluOp) -> &'static str {
    match op {
        AluOp::Add => "add",
        AluOp::Sub => "sub",
        AluOp::Sll => "sll",
        AluOp::Slt => "slt",
        AluOp::Sltu => "sltu",
        AluOp::Xor => "xor",
        AluOp::Srl => "srl",
        AluOp::Sra => "sra",
        AluOp::Or => "or",
        AluOp::And => "and",
    }
}

/// Width suffix for loads and stores.
const fn width_suffix(width: AccessWidth) -> &'static str {
    match width {
        AccessWidth::Byte => "b",
        AccessWidth::Half => "h",
        AccessWidth::Word => "w",
    }
}

impl fmt::Display for Instruction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Self {
            class,
            op,
            mem_op,
            rd,
            rs1,
            rs2,
            imm,
        } = *self;
        match class {
            InstrClass::AluReg => write!(f, "{} {rd}, {rs1}, {rs2}", alu_mnemonic(op)),
            InstrClass::AluImm if op.is_shift() => {
                write!(f, "{}i {rd}, {rs1}, {}", alu_mnemonic(op), imm & 0x1f)
            }
            InstrClass::AluImm => write!(f, "{}i {rd}, {rs1}, {imm}", alu_mnemonic(op)),
            InstrClass::Lui => write!(f, "lui {rd}, {:#x}", (imm as u32) >> 12),
            InstrClass::Auipc => write!(f, "auipc {rd}, {:#x}", (imm as u32) >> 12),
            InstrClass::Load => {
                let unsigned = if mem_op.is_unsigned() && mem_op.width() != AccessWidth::Word {
                    "u"
                } else {
                    ""
                };
                write!(f, "l{}{unsigned} {rd}, {imm}({rs1})", width_suffix(mem_op.width()))
            }
            InstrClass::Store => write!(f, "s{} {rs2}, {imm}({rs1})", width_suffix(mem_op.width())),
            InstrClass::Branch => match self.branch_cond() {
                Some(cond) => write!(f, "{} {rs1}, {rs2}, {imm}", cond.mnemonic()),
                None => write!(f, "branch.{op:?} {rs1}, {rs2}, {imm} (mem_op {:#05b})", mem_op.bits()),
            },
            InstrClass::Jal => write!(f, "jal {rd}, {imm}"),
            InstrClass::Jalr => write!(f, "jalr {rd}, {imm}({rs1})"),
            InstrClass::System => f.write_str("system"),
            InstrClass::Stall => f.write_str("stall"),
        }
    }
}
