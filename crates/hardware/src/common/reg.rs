//! Slice-addressed Register File.
//!
//! This module provides the register storage unit the core drives each clock. It provides:
//! 1. **Port Interface:** The [`RegisterPorts`] trait (two read ports, one write port, per slice).
//! 2. **Reference Storage:** [`SliceRegisterFile`], sized by [`CoreConfig`](crate::config::CoreConfig).
//! 3. **Observability:** Whole-word accessors used by the harness and tests.

use std::fmt;

use serde::Deserialize;

use super::data::{Nibble, SubCycle};
use super::error::{ConfigError, SimError};
use crate::config::CoreConfig;

/// A register identifier as presented on the `rs1` / `rs2` / `rd` inputs.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Deserialize)]
#[serde(transparent)]
pub struct RegId(pub u8);

impl RegId {
    /// The hardwired-zero register.
    pub const ZERO: Self = Self(0);

    /// Returns the raw register number.
    #[inline(always)]
    pub const fn val(self) -> u8 {
        self.0
    }
}

impl fmt::Display for RegId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "x{}", self.0)
    }
}

/// Per-slice access to register storage.
///
/// Reads are combinational for the current clock; a write issued in the same
/// clock takes effect for later clocks only, so reading and writing the same
/// register in one clock returns the old slice.
pub trait RegisterPorts {
    /// Reads slice `counter` of `rs1` and `rs2`.
    fn read(&self, rs1: RegId, rs2: RegId, counter: SubCycle) -> (Nibble, Nibble);

    /// Writes slice `counter` of `rd`.
    fn write(&mut self, rd: RegId, counter: SubCycle, value: Nibble);
}

/// Register file storing full 32-bit words, accessed one slice at a time.
///
/// Register 0 always reads as zero.
///
/// The two access paths treat ids differently. The slice ports model the
/// hardware and truncate ids to the configured address width; ids that land
/// beyond the register count read as zero and ignore writes. The whole-word
/// accessors ([`get`](Self::get), [`set`](Self::set)) take the id as given and
/// reject anything outside the file, so `RegId(0x12)` is an error there even
/// though the ports alias it onto `x2` with a 4-bit address.
#[derive(Clone, Debug)]
pub struct SliceRegisterFile {
    regs: Vec<u32>,
    addr_mask: u8,
}

impl SliceRegisterFile {
    /// Creates a register file with every register cleared.
    ///
    /// # Errors
    ///
    /// Returns any [`ConfigError`] from [`CoreConfig::validate`].
    pub fn new(config: &CoreConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            regs: vec![0; config.num_regs],
            addr_mask: ((1u16 << config.reg_addr_bits) - 1) as u8,
        })
    }

    /// Number of registers, including `x0`.
    pub fn len(&self) -> usize {
        self.regs.len()
    }

    /// Always false; a validated configuration has at least one register.
    pub fn is_empty(&self) -> bool {
        self.regs.is_empty()
    }

    /// Reads a whole register. The id is not truncated.
    ///
    /// # Errors
    ///
    /// Returns [`SimError::InvalidRegister`] if `reg` is not in the file.
    pub fn get(&self, reg: RegId) -> Result<u32, SimError> {
        self.regs
            .get(reg.val() as usize)
            .copied()
            .ok_or(SimError::InvalidRegister {
                reg: reg.val(),
                num_regs: self.regs.len(),
            })
    }

    /// Writes a whole register. Writes to `x0` are ignored and the id is not truncated.
    ///
    /// # Errors
    ///
    /// Returns [`SimError::InvalidRegister`] if `reg` is not in the file.
    pub fn set(&mut self, reg: RegId, value: u32) -> Result<(), SimError> {
        let num_regs = self.regs.len();
        let slot = self
            .regs
            .get_mut(reg.val() as usize)
            .ok_or(SimError::InvalidRegister {
                reg: reg.val(),
                num_regs,
            })?;
        if reg != RegId::ZERO {
            *slot = value;
        }
        Ok(())
    }

    /// Returns `(id, value)` for every register.
    pub fn iter(&self) -> impl Iterator<Item = (RegId, u32)> + '_ {
        self.regs
            .iter()
            .enumerate()
            .map(|(i, &v)| (RegId(i as u8), v))
    }

    fn slot(&self, reg: RegId) -> Option<usize> {
        let idx = (reg.val() & self.addr_mask) as usize;
        (idx != 0 && idx < self.regs.len()).then_some(idx)
    }
}

impl RegisterPorts for SliceRegisterFile {
    fn read(&self, rs1: RegId, rs2: RegId, counter: SubCycle) -> (Nibble, Nibble) {
        let slice = |reg| {
            self.slot(reg)
                .map_or(Nibble::ZERO, |idx| Nibble::of_word(self.regs[idx], counter))
        };
        (slice(rs1), slice(rs2))
    }

    fn write(&mut self, rd: RegId, counter: SubCycle, value: Nibble) {
        if let Some(idx) = self.slot(rd) {
            self.regs[idx] = value.insert_into(self.regs[idx], counter);
        }
    }
}
