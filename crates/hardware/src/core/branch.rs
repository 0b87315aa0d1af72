//! Branch Resolver.
//!
//! A branch compares its operands during phase 0. The comparison left after the
//! eighth slice, XORed with the inversion bit in `mem_op[0]`, decides whether the
//! branch is taken. Taken branches spend phase 1 adding the offset to the PC.
//! The `branch` output tells the fetch side to load the PC from `addr_out`.

use crate::common::{Phase, SubCycle};
use crate::core::signals::{InstrClass, MemOp};

/// Branch resolution logic.
#[derive(Clone, Copy, Debug, Default)]
pub struct BranchResolver;

impl BranchResolver {
    /// Whether the branch condition holds.
    ///
    /// `compare` must be the comparison after the top slice, i.e. the arithmetic
    /// unit's compare output at sub-cycle 7 of phase 0.
    #[inline(always)]
    pub const fn taken(compare: bool, mem_op: MemOp) -> bool {
        compare ^ mem_op.inverts_branch()
    }

    /// Whether `addr_out` holds a jump or branch target this clock.
    pub fn redirect(class: Option<InstrClass>, phase: Phase, counter: SubCycle) -> bool {
        if !counter.is_last() {
            return false;
        }
        match class {
            Some(InstrClass::Jal | InstrClass::Jalr) => phase.is_zero(),
            Some(InstrClass::Branch) => phase == Phase::ONE,
            _ => false,
        }
    }
}
