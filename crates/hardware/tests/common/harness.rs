//! Clock-level Bench.
//!
//! Drives a [`SliceCore`] directly, without the machine harness, so tests can
//! observe every output pin on every clock.

use slicev_core::SliceCore;
use slicev_core::common::{Nibble, RegId, SliceRegisterFile, SubCycle};
use slicev_core::config::CoreConfig;
use slicev_core::core::signals::{CoreInputs, CoreOutputs};
use slicev_core::isa::Instruction;
use tracing_subscriber::EnvFilter;

/// Installs a test-writer subscriber once; later calls are no-ops.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_test_writer()
        .with_env_filter(EnvFilter::from_default_env())
        .try_init();
}

/// A core, its register file and a fixed PC.
#[derive(Debug)]
pub struct CoreBench {
    /// The device under test.
    pub core: SliceCore,
    /// Register storage.
    pub regs: SliceRegisterFile,
    /// PC presented on the `pc` slice input.
    pub pc: u32,
}

impl Default for CoreBench {
    fn default() -> Self {
        Self::new()
    }
}

impl CoreBench {
    /// Creates a bench with default sizing and PC 0.
    pub fn new() -> Self {
        init_tracing();
        Self {
            core: SliceCore::new(),
            regs: SliceRegisterFile::new(&CoreConfig::default()).unwrap(),
            pc: 0,
        }
    }

    /// Sets a register.
    pub fn with_reg(mut self, reg: u8, value: u32) -> Self {
        self.regs.set(RegId(reg), value).unwrap();
        self
    }

    /// Sets the PC.
    pub const fn with_pc(mut self, pc: u32) -> Self {
        self.pc = pc;
        self
    }

    /// Reads a register.
    pub fn reg(&self, reg: u8) -> u32 {
        self.regs.get(RegId(reg)).unwrap()
    }

    /// Builds the inputs the surrounding hardware would present at `counter`.
    pub fn inputs(&self, instr: &Instruction, counter: SubCycle, load: Option<u32>) -> CoreInputs {
        CoreInputs {
            flags: instr.flags(),
            alu_op: instr.op,
            mem_op: instr.mem_op,
            rs1: instr.rs1,
            rs2: instr.rs2,
            rd: instr.rd,
            counter,
            imm: instr.imm_slice(counter),
            pc: Nibble::of_word(self.pc, counter),
            next_pc: Nibble::of_word(self.pc.wrapping_add(4), counter),
            data_in: load.map_or(Nibble::ZERO, |w| Nibble::of_word(w, counter)),
            load_data_ready: load.is_some(),
        }
    }

    /// Clocks one full sweep and returns the eight output bundles.
    pub fn sweep(&mut self, instr: &Instruction, load: Option<u32>) -> Vec<CoreOutputs> {
        let mut outs = Vec::with_capacity(8);
        for counter in SubCycle::sweep() {
            let inputs = self.inputs(instr, counter, load);
            outs.push(self.core.clock(&inputs, &mut self.regs));
        }
        outs
    }

    /// Clocks sweeps until `instr_complete`, giving up after `max_sweeps`.
    ///
    /// `load` supplies the load word for a given sweep index.
    pub fn run_with(
        &mut self,
        instr: &Instruction,
        max_sweeps: usize,
        load: impl Fn(usize) -> Option<u32>,
    ) -> Vec<Vec<CoreOutputs>> {
        let mut sweeps = Vec::new();
        for i in 0..max_sweeps {
            let outs = self.sweep(instr, load(i));
            let done = outs.iter().any(|o| o.instr_complete);
            sweeps.push(outs);
            if done {
                break;
            }
        }
        sweeps
    }

    /// Clocks sweeps until `instr_complete` with no load data.
    pub fn run(&mut self, instr: &Instruction) -> Vec<Vec<CoreOutputs>> {
        self.run_with(instr, 8, |_| None)
    }
}

/// `(sweep, sub-cycle)` of every clock that reported `instr_complete`.
pub fn completions(sweeps: &[Vec<CoreOutputs>]) -> Vec<(usize, usize)> {
    sweeps
        .iter()
        .enumerate()
        .flat_map(|(s, outs)| {
            outs.iter()
                .enumerate()
                .filter(|(_, o)| o.instr_complete)
                .map(move |(c, _)| (s, c))
        })
        .collect()
}
