//! Nibble-serial RV32 execution-control core.
//!
//! This crate models the control core of a minimal-area processor that runs a
//! 32-bit instruction set on a 4-bit datapath, one slice per clock:
//! 1. **Core:** Sequencer, operand routing, carry/compare threading, shift amount capture,
//!    the slice accumulator, writeback selection and branch resolution.
//! 2. **Units:** Reference per-slice arithmetic and shift units and a slice-addressed register file.
//! 3. **ISA:** Pre-decoded instruction descriptors with JSON support and a disassembler.
//! 4. **Simulation:** A clock-driving harness with data memory, program images and statistics.
//!
//! # Examples
//!
//! ```
//! use slicev_core::common::RegId;
//! use slicev_core::core::signals::AluOp;
//! use slicev_core::isa::Instruction;
//! use slicev_core::{Config, Machine};
//!
//! let mut machine = Machine::new(&Config::default()).unwrap();
//! machine.regs_mut().set(RegId(1), 40).unwrap();
//! let retired = machine.step(&Instruction::alu_imm(AluOp::Add, RegId(2), RegId(1), 2)).unwrap();
//! assert_eq!(retired.sweeps, 1);
//! assert_eq!(machine.reg(RegId(2)).unwrap(), 42);
//! ```

/// Common types and constants (slices, counters, registers, errors).
pub mod common;
/// Configuration (defaults, sizing, harness limits).
pub mod config;
/// Execution-control core and its reference units.
pub mod core;
/// Instruction descriptors and disassembly.
pub mod isa;
/// Machine harness, data memory and program images.
pub mod sim;
/// Simulation statistics collection and reporting.
pub mod stats;

/// Root configuration type; use `Config::default()` or `Config::from_json`.
pub use crate::config::Config;
/// The execution-control core; drive it with `SliceCore::clock`.
pub use crate::core::SliceCore;
/// Instruction-level harness around the core.
pub use crate::sim::Machine;
