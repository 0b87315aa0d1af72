//! Configuration system for the slice-serial core model.
//!
//! This module defines all configuration structures used to parameterize the
//! simulator. It provides:
//! 1. **Defaults:** Baseline sizing (16 registers, 4 address bits) and harness limits.
//! 2. **Structures:** Core sizing and harness settings.
//! 3. **Validation:** Rejection of sizes the register file cannot address.
//!
//! Configuration is supplied as JSON (for example via the CLI's `--config`) or
//! built with `Config::default()`.

use serde::Deserialize;

use crate::common::error::ConfigError;

/// Default configuration constants for the simulator.
mod defaults {
    /// Number of architectural registers (RV32E-sized file).
    pub const NUM_REGS: usize = 16;

    /// Width of the `rs1` / `rs2` / `rd` register identifiers.
    pub const REG_ADDR_BITS: u32 = 4;

    /// Sweeps the harness allows one instruction before reporting a stall.
    pub const MAX_SWEEPS: u32 = 64;

    /// Whole sweeps between a load's address-ready pulse and data availability.
    pub const LOAD_LATENCY_SWEEPS: u32 = 0;

    /// Instructions a program run may retire before the harness gives up.
    pub const MAX_INSTRUCTIONS: u64 = 100_000;
}

/// Root configuration structure containing all simulator settings.
///
/// # Examples
///
/// ```
/// use slicev_core::config::Config;
///
/// let config = Config::default();
/// assert_eq!(config.core.num_regs, 16);
/// assert_eq!(config.sim.load_latency_sweeps, 0);
/// ```
///
/// Deserializing from JSON, with omitted fields taking their defaults:
///
/// ```
/// use slicev_core::config::Config;
///
/// let config = Config::from_json(r#"{
///     "core": { "num_regs": 32, "reg_addr_bits": 5 },
///     "sim": { "load_latency_sweeps": 2 }
/// }"#).unwrap();
/// assert_eq!(config.core.num_regs, 32);
/// assert_eq!(config.sim.load_latency_sweeps, 2);
/// assert_eq!(config.sim.max_sweeps, 64);
/// ```
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Register file sizing.
    pub core: CoreConfig,
    /// Harness limits and memory timing.
    pub sim: SimConfig,
}

impl Config {
    /// Parses and validates a JSON configuration document.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] for malformed JSON, or any error from
    /// [`Config::validate`].
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Checks every section.
    ///
    /// # Errors
    ///
    /// Returns the first [`ConfigError`] found.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.core.validate()?;
        self.sim.validate()
    }
}

/// Sizing parameters of the core's register storage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct CoreConfig {
    /// Number of registers, including the hardwired-zero `x0`.
    pub num_regs: usize,
    /// Width in bits of register identifiers.
    pub reg_addr_bits: u32,
}

impl CoreConfig {
    /// Checks that the register count is addressable.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::AddressWidth`], [`ConfigError::NoRegisters`] or
    /// [`ConfigError::TooManyRegisters`].
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(1..=5).contains(&self.reg_addr_bits) {
            return Err(ConfigError::AddressWidth(self.reg_addr_bits));
        }
        if self.num_regs == 0 {
            return Err(ConfigError::NoRegisters);
        }
        if self.num_regs > 1 << self.reg_addr_bits {
            return Err(ConfigError::TooManyRegisters {
                num_regs: self.num_regs,
                reg_addr_bits: self.reg_addr_bits,
            });
        }
        Ok(())
    }
}

impl Default for CoreConfig {
    fn default() -> Self {
        Self {
            num_regs: defaults::NUM_REGS,
            reg_addr_bits: defaults::REG_ADDR_BITS,
        }
    }
}

/// Settings for the [`Machine`](crate::sim::Machine) harness.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    /// Sweeps one instruction may take before [`SimError::StallTimeout`](crate::common::SimError::StallTimeout).
    pub max_sweeps: u32,
    /// Extra sweeps a load waits after its address is sampled.
    pub load_latency_sweeps: u32,
    /// Instructions a program run may retire.
    pub max_instructions: u64,
    /// Emit one `info` event per clock with the core's outputs.
    pub trace_clocks: bool,
}

impl SimConfig {
    /// Checks the harness limits.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::ZeroSweepLimit`] if `max_sweeps` is zero.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_sweeps == 0 {
            return Err(ConfigError::ZeroSweepLimit);
        }
        Ok(())
    }
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            max_sweeps: defaults::MAX_SWEEPS,
            load_latency_sweeps: defaults::LOAD_LATENCY_SWEEPS,
            max_instructions: defaults::MAX_INSTRUCTIONS,
            trace_clocks: false,
        }
    }
}
