//! Simulation harness.
//!
//! Drives the core the way its surrounding hardware would: a free-running
//! sub-cycle counter, PC and next-PC slice streams, a register file and a
//! little-endian data memory. It provides:
//! 1. **Machine:** Clock-by-clock execution of single instructions or whole programs.
//! 2. **Memory:** Sparse byte storage behind the load/store handshake.
//! 3. **Programs:** JSON program images (registers, memory words, instructions).

/// Instruction-level driver around the core.
pub mod machine;

/// Sparse data memory.
pub mod memory;

/// JSON program images.
pub mod program;

pub use machine::{Machine, Retired};
pub use memory::DataMemory;
pub use program::Program;
