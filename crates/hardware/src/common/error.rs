//! Configuration and simulation error definitions.
//!
//! The core itself has no failure path: like the hardware it models, an instruction
//! that never satisfies its completion rule simply stalls. This module defines the
//! errors raised around it:
//! 1. **Configuration Errors:** Invalid sizing parameters or malformed JSON.
//! 2. **Simulation Errors:** Conditions the harness turns into loud failures instead
//!    of hanging (unhandled classes, stalls, bad register ids, misaligned accesses).

use thiserror::Error;

use crate::core::signals::{AccessWidth, InstrClass};

/// Errors raised while building or validating a [`Config`](crate::config::Config).
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The register file must contain at least one register.
    #[error("register count must be non-zero")]
    NoRegisters,

    /// More registers were requested than the address width can select.
    #[error("{num_regs} registers do not fit in {reg_addr_bits} address bits")]
    TooManyRegisters {
        /// Requested register count.
        num_regs: usize,
        /// Configured register address width.
        reg_addr_bits: u32,
    },

    /// The register address width must be between 1 and 5 bits.
    #[error("register address width {0} is outside 1..=5")]
    AddressWidth(u32),

    /// A zero sweep budget would fail every instruction.
    #[error("max_sweeps must be non-zero")]
    ZeroSweepLimit,

    /// The configuration document could not be parsed.
    #[error("invalid configuration JSON: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Errors raised by the [`Machine`](crate::sim::Machine) harness.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum SimError {
    /// An instruction class with no completion rule reached the end of a sweep.
    ///
    /// The hardware would stall here forever.
    #[error("{class:?} instruction at pc {pc:#x} has no completion rule")]
    UnhandledClass {
        /// The class that was asserted.
        class: InstrClass,
        /// Address of the offending instruction.
        pc: u32,
    },

    /// The instruction did not complete within the configured sweep budget.
    #[error("instruction at pc {pc:#x} did not complete after {sweeps} sweeps")]
    StallTimeout {
        /// Address of the stalled instruction.
        pc: u32,
        /// Number of sweeps run before giving up.
        sweeps: u32,
    },

    /// A register id outside the configured register file.
    #[error("register x{reg} is outside the {num_regs}-entry register file")]
    InvalidRegister {
        /// The offending register id.
        reg: u8,
        /// Configured register count.
        num_regs: usize,
    },

    /// A load or store address not aligned to its access width.
    #[error("{width:?} access at {addr:#x} is misaligned")]
    MisalignedAccess {
        /// The computed address.
        addr: u32,
        /// The access width.
        width: AccessWidth,
    },

    /// A program ran for more instructions than the configured limit.
    #[error("instruction limit of {0} reached")]
    InstructionLimit(u64),
}
