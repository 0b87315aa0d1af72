//! Slice Arithmetic Logic Unit.
//!
//! This module implements the 4-bit arithmetic unit the core feeds every clock.
//! It is purely combinational: one call computes one slice of the result plus
//! the carry and compare bits the latch threads into the next slice.
//!
//! Operations are organized into submodules by category:
//! - [`arithmetic`]: the slice adder shared by add, sub and the comparisons
//! - [`logic`]:      xor, or, and, and the running comparison

/// Slice adder.
pub mod arithmetic;

/// Bitwise operations and comparison threading.
pub mod logic;

use crate::common::Nibble;
use crate::core::signals::AluOp;

/// Carry and compare bits fed into the arithmetic unit.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ChainIn {
    /// Carry into the slice adder.
    pub carry: bool,
    /// Running comparison.
    pub compare: bool,
}

/// One slice of arithmetic unit output.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SliceResult {
    /// Result slice. Zero for set-less-than and shift opcodes.
    pub out: Nibble,
    /// Carry out of the slice adder.
    pub carry: bool,
    /// Comparison after this slice.
    pub compare: bool,
}

/// Slice arithmetic unit.
#[derive(Clone, Copy, Debug, Default)]
pub struct NibbleAlu;

impl NibbleAlu {
    /// Executes one slice of an ALU operation.
    ///
    /// # Arguments
    ///
    /// * `op`    - The routed operation
    /// * `a`     - First operand slice
    /// * `b`     - Second operand slice
    /// * `chain` - Carry and compare from the previous slice (or the seeds)
    ///
    /// # Examples
    ///
    /// ```
    /// use slicev_core::common::Nibble;
    /// use slicev_core::core::signals::AluOp;
    /// use slicev_core::core::units::alu::{ChainIn, NibbleAlu};
    ///
    /// // 0xF + 0x1 overflows the slice
    /// let r = NibbleAlu::execute(AluOp::Add, Nibble::new(0xF), Nibble::new(1), ChainIn::default());
    /// assert_eq!(r.out, Nibble::ZERO);
    /// assert!(r.carry);
    /// ```
    pub fn execute(op: AluOp, a: Nibble, b: Nibble, chain: ChainIn) -> SliceResult {
        let sum = arithmetic::add(op, a, b, chain.carry);
        let out = match op {
            AluOp::Add | AluOp::Sub => sum.out,
            AluOp::Xor | AluOp::Or | AluOp::And => logic::bitwise(op, a, b),
            // The comparison result leaves through `compare`; shifts go through the shift unit.
            AluOp::Slt | AluOp::Sltu | AluOp::Sll | AluOp::Srl | AluOp::Sra => Nibble::ZERO,
        };
        SliceResult {
            out,
            carry: sum.carry,
            compare: logic::compare(op, a, b, sum.carry, chain.compare),
        }
    }
}
