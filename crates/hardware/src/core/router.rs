//! Operand Router.
//!
//! Combinational multiplexers in front of the arithmetic unit. Re-evaluated
//! every clock with no state of its own:
//! - op: forced to `Add` while a branch computes its target (phase 1 onward)
//! - a:  the PC slice for AUIPC, JAL and branch target computation, else `rs1`
//! - b:  `rs2` for register-register arithmetic and branch comparison, else the immediate

use crate::common::{Nibble, Phase};
use crate::core::signals::{AluOp, CoreInputs, InstrClass};

/// Operation and operands presented to the arithmetic unit.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct AluRequest {
    /// Routed operation.
    pub op: AluOp,
    /// First operand slice.
    pub a: Nibble,
    /// Second operand slice.
    pub b: Nibble,
}

/// Operand routing logic.
#[derive(Clone, Copy, Debug, Default)]
pub struct OperandRouter;

impl OperandRouter {
    /// Routes one clock's operands.
    ///
    /// # Arguments
    ///
    /// * `class`  - Resolved instruction class (`None` when idle)
    /// * `phase`  - Current phase
    /// * `inputs` - This clock's inputs (opcode, immediate and PC slices)
    /// * `rs1`    - First register read port
    /// * `rs2`    - Second register read port
    pub fn route(
        class: Option<InstrClass>,
        phase: Phase,
        inputs: &CoreInputs,
        rs1: Nibble,
        rs2: Nibble,
    ) -> AluRequest {
        let is_branch = class == Some(InstrClass::Branch);
        let branch_target = is_branch && !phase.is_zero();
        let branch_compare = is_branch && phase.is_zero();

        let op = if branch_target { AluOp::Add } else { inputs.alu_op };
        let a = match class {
            Some(InstrClass::Auipc | InstrClass::Jal) => inputs.pc,
            _ if branch_target => inputs.pc,
            _ => rs1,
        };
        let b = if class == Some(InstrClass::AluReg) || branch_compare {
            rs2
        } else {
            inputs.imm
        };
        AluRequest { op, a, b }
    }
}
