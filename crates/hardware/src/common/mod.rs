//! Common utilities and types used throughout the slice-serial core model.
//!
//! This module provides fundamental building blocks that are shared across all components
//! of the simulator. It includes:
//! 1. **Constants:** Slice geometry, counter bounds, and address width.
//! 2. **Slice Data:** Strong types for 4-bit slices, sub-cycles, and phases.
//! 3. **Error Handling:** Configuration and harness error types.
//! 4. **Register Storage:** The per-slice register port interface and its reference file.

/// Datapath-wide constants.
pub mod constants;

/// Slice, sub-cycle, and phase types.
pub mod data;

/// Error types.
pub mod error;

/// Register file interface and implementation.
pub mod reg;

pub use data::{Nibble, Phase, SubCycle};
pub use error::{ConfigError, SimError};
pub use reg::{RegId, RegisterPorts, SliceRegisterFile};
