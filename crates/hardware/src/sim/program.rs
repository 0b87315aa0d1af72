//! JSON Program Images.
//!
//! A program image bundles the initial register values, initial memory words
//! and the instruction list the CLI executes:
//!
//! ```json
//! {
//!   "registers": { "1": 10 },
//!   "memory": [ { "addr": 256, "value": 3735928559 } ],
//!   "instructions": [
//!     { "class": "alu_imm", "op": "add", "rd": 2, "rs1": 1, "imm": 5 },
//!     { "class": "store", "width": "word", "rs1": 0, "rs2": 2, "imm": 256 }
//!   ]
//! }
//! ```

use std::collections::BTreeMap;

use serde::Deserialize;

use crate::common::{RegId, SimError};
use crate::isa::Instruction;
use crate::sim::machine::Machine;

/// One initial memory word.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
pub struct MemoryWord {
    /// Byte address of the word.
    pub addr: u32,
    /// Little-endian value stored there.
    pub value: u32,
}

/// A complete program image.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Program {
    /// Initial PC.
    pub entry: u32,
    /// Initial register values, keyed by register number.
    pub registers: BTreeMap<u8, u32>,
    /// Initial memory contents.
    pub memory: Vec<MemoryWord>,
    /// Instructions, placed at address 0 one word apart.
    pub instructions: Vec<Instruction>,
}

impl Program {
    /// Parses a program image.
    ///
    /// # Errors
    ///
    /// Returns the parser error for malformed JSON or unknown fields.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Writes the initial registers, memory and PC into `machine`.
    ///
    /// # Errors
    ///
    /// Returns [`SimError::InvalidRegister`] for a register outside the file.
    pub fn load_into(&self, machine: &mut Machine) -> Result<(), SimError> {
        for (&reg, &value) in &self.registers {
            machine.regs_mut().set(RegId(reg), value)?;
        }
        for word in &self.memory {
            machine.memory_mut().write_word(word.addr, word.value);
        }
        machine.set_pc(self.entry);
        Ok(())
    }

    /// Loads the image into `machine` and runs it to completion.
    ///
    /// # Errors
    ///
    /// Any error from [`Program::load_into`] or [`Machine::run`].
    pub fn run(&self, machine: &mut Machine) -> Result<u64, SimError> {
        self.load_into(machine)?;
        machine.run(&self.instructions)
    }
}
