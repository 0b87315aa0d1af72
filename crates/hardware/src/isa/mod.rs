//! Instruction Descriptors.
//!
//! The decoder's bit-level mapping sits outside the core. What the core sees
//! each clock is a class flag, an opcode, a memory-operation field, register
//! ids and a stream of immediate slices. This module models that pre-decoded
//! form so programs can be written directly, in Rust or as JSON.
//!
//! * `instruction`: The [`Instruction`] descriptor, its constructors, and branch conditions.
//! * `disasm`: Assembly-style rendering for logs and diagnostics.

/// Assembly-style rendering of instruction descriptors.
pub mod disasm;

/// Pre-decoded instruction descriptors.
pub mod instruction;

pub use instruction::{BranchCond, Instruction};
