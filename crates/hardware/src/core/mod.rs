//! Execution-control core.
//!
//! This module contains the nibble-serial core: the per-clock composition in
//! [`cpu`], the registers and control blocks it is built from, and the
//! reference arithmetic and shift units it drives.

/// Slice accumulator register and its input selection.
pub mod accumulator;

/// Branch condition and redirect logic.
pub mod branch;

/// Core composition and per-clock evaluation.
pub mod cpu;

/// Carry / compare threading between slices.
pub mod latch;

/// Operand and operation routing for the arithmetic unit.
pub mod router;

/// Phase register and per-class completion rules.
pub mod sequencer;

/// Shift amount capture.
pub mod shift_amount;

/// Control signals, opcodes and port bundles.
pub mod signals;

/// Per-slice arithmetic and shift units.
pub mod units;

/// Writeback selection and load handshake registers.
pub mod writeback;

pub use self::cpu::SliceCore;
