//! Tests for the execution-control core.

/// Accumulator shifting, address and store-data views.
pub mod accumulator;





/// Operand routing.
pub mod router;

/// Completion rules and phase sequencing.
pub mod sequencer;


/// Reference per-slice units.
pub mod units;

/// Writeback selection and load extension.
pub mod writeback;
