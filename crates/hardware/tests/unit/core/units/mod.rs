//! Tests for the reference per-slice units.


/// Slice shift unit.
pub mod shifter;
