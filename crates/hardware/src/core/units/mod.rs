//! Execution units driven by the core.
//!
//! Both units are pure combinational functions of the current clock's inputs:
//! the core supplies routed operands and latched chain bits, and registers
//! whatever it needs from their outputs.

/// Slice arithmetic logic unit.
pub mod alu;

/// Slice shift unit.
pub mod shifter;
