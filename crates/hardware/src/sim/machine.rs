//! Instruction-level Driver.
//!
//! [`Machine`] owns a [`SliceCore`] and everything around it, and runs one
//! instruction at a time by clocking whole sweeps until the core reports
//! completion. It performs:
//! 1. **Input Streaming:** Immediate, PC, next-PC and load data slices for every sub-cycle.
//! 2. **Load Handshake:** Samples the address on `address_ready` and serves the word after the configured latency.
//! 3. **Store Handshake:** Samples the address, then assembles the store data in the accumulator with a
//!    pass-through sweep and collects it from `data_out` during a stall sweep.
//! 4. **Redirects:** Loads the PC from `addr_out` on a `branch` pulse.
//! 5. **Guarding:** Turns unhandled classes and stalls that never end into [`SimError`]s.

use tracing::{debug, info, warn};

use crate::common::constants::{INSTRUCTION_BYTES, SLICES_PER_WORD};
use crate::common::{ConfigError, Nibble, RegId, SimError, SliceRegisterFile, SubCycle};
use crate::config::{Config, SimConfig};
use crate::core::SliceCore;
use crate::core::signals::{AluOp, CoreInputs, InstrClass};
use crate::isa::Instruction;
use crate::sim::memory::DataMemory;
use crate::stats::SimStats;

/// Summary of one retired instruction.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Retired {
    /// Address of the instruction.
    pub pc: u32,
    /// Address of the next instruction.
    pub next_pc: u32,
    /// Class of the instruction.
    pub class: InstrClass,
    /// Sweeps the core spent on it, excluding store-data sweeps.
    pub sweeps: u32,
    /// The PC was loaded from `addr_out`.
    pub redirected: bool,
}

/// What the harness saw during one sweep.
#[derive(Clone, Copy, Debug, Default)]
struct SweepOutcome {
    complete: bool,
    unhandled: bool,
    address: Option<u32>,
    redirect: Option<u32>,
    data_out: u32,
}

/// A load waiting for its data.
#[derive(Clone, Copy, Debug)]
struct PendingLoad {
    addr: u32,
    wait: u32,
}

/// The core, its register file and data memory, and a program counter.
#[derive(Clone, Debug)]
pub struct Machine {
    core: SliceCore,
    regs: SliceRegisterFile,
    memory: DataMemory,
    pc: u32,
    config: SimConfig,
    stats: SimStats,
}

impl Machine {
    /// Builds a machine from a validated configuration.
    ///
    /// # Errors
    ///
    /// Returns any [`ConfigError`] from [`Config::validate`].
    pub fn new(config: &Config) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            core: SliceCore::new(),
            regs: SliceRegisterFile::new(&config.core)?,
            memory: DataMemory::new(),
            pc: 0,
            config: config.sim,
            stats: SimStats::default(),
        })
    }

    /// The core.
    pub const fn core(&self) -> &SliceCore {
        &self.core
    }

    /// The register file.
    pub const fn regs(&self) -> &SliceRegisterFile {
        &self.regs
    }

    /// Mutable access to the register file.
    pub const fn regs_mut(&mut self) -> &mut SliceRegisterFile {
        &mut self.regs
    }

    /// Reads one register.
    ///
    /// # Errors
    ///
    /// Returns [`SimError::InvalidRegister`] for ids outside the file.
    pub fn reg(&self, reg: RegId) -> Result<u32, SimError> {
        self.regs.get(reg)
    }

    /// The data memory.
    pub const fn memory(&self) -> &DataMemory {
        &self.memory
    }

    /// Mutable access to the data memory.
    pub const fn memory_mut(&mut self) -> &mut DataMemory {
        &mut self.memory
    }

    /// Current program counter.
    pub const fn pc(&self) -> u32 {
        self.pc
    }

    /// Sets the program counter.
    pub const fn set_pc(&mut self, pc: u32) {
        self.pc = pc;
    }

    /// Statistics gathered so far.
    pub const fn stats(&self) -> &SimStats {
        &self.stats
    }

    /// Executes one instruction at the current PC.
    ///
    /// On error the core is reset so the machine can keep being used.
    ///
    /// # Errors
    ///
    /// * [`SimError::UnhandledClass`] - the class has no completion rule
    /// * [`SimError::StallTimeout`] - no completion within `max_sweeps`
    /// * [`SimError::MisalignedAccess`] - a load or store address is not width-aligned
    pub fn step(&mut self, instr: &Instruction) -> Result<Retired, SimError> {
        match self.execute(instr) {
            Ok(retired) => Ok(retired),
            Err(e) => {
                warn!(pc = self.pc, %instr, error = %e, "instruction aborted");
                self.core.reset();
                Err(e)
            }
        }
    }

    /// Runs `program`, placed at address 0, from the current PC.
    ///
    /// Stops when the PC leaves the program or is not instruction-aligned and
    /// returns the number of instructions retired.
    ///
    /// # Errors
    ///
    /// Any error from [`Machine::step`], or [`SimError::InstructionLimit`] once
    /// `max_instructions` have retired without the program ending.
    pub fn run(&mut self, program: &[Instruction]) -> Result<u64, SimError> {
        let mut retired = 0u64;
        loop {
            if self.pc % INSTRUCTION_BYTES != 0 {
                break;
            }
            let Some(instr) = program.get((self.pc / INSTRUCTION_BYTES) as usize) else {
                break;
            };
            if retired >= self.config.max_instructions {
                return Err(SimError::InstructionLimit(self.config.max_instructions));
            }
            let _ = self.step(instr)?;
            retired += 1;
        }
        debug!(retired, pc = self.pc, "program halted");
        Ok(retired)
    }

    fn execute(&mut self, instr: &Instruction) -> Result<Retired, SimError> {
        let pc = self.pc;
        let mut redirect = None;
        let mut store_addr = None;
        let mut load: Option<PendingLoad> = None;
        let mut sweeps = 0;

        loop {
            if sweeps == self.config.max_sweeps {
                return Err(SimError::StallTimeout { pc, sweeps });
            }
            let load_word = match load.as_mut() {
                Some(req) if req.wait == 0 => Some(self.memory.read_word(req.addr)),
                Some(req) => {
                    req.wait -= 1;
                    self.stats.load_wait_sweeps += 1;
                    None
                }
                None => None,
            };

            let outcome = self.sweep(instr, pc, load_word);
            sweeps += 1;

            if outcome.unhandled {
                return Err(SimError::UnhandledClass { class: instr.class, pc });
            }
            if let Some(addr) = outcome.address {
                let width = instr.mem_op.width();
                if addr % width.bytes() != 0 {
                    return Err(SimError::MisalignedAccess { addr, width });
                }
                match instr.class {
                    InstrClass::Load => {
                        load = Some(PendingLoad {
                            addr,
                            wait: self.config.load_latency_sweeps,
                        });
                    }
                    InstrClass::Store => store_addr = Some(addr),
                    _ => {}
                }
            }
            if outcome.redirect.is_some() {
                redirect = outcome.redirect;
            }
            if outcome.complete {
                break;
            }
        }

        if let Some(addr) = store_addr {
            self.drain_store(instr, pc, addr);
        }

        let next_pc = match (redirect, instr.class) {
            (Some(target), InstrClass::Jalr) => target & !1,
            (Some(target), _) => target,
            (None, _) => pc.wrapping_add(INSTRUCTION_BYTES),
        };
        self.pc = next_pc;
        self.stats.record_retire(instr.class);
        if instr.class == InstrClass::Branch && redirect.is_some() {
            self.stats.branches_taken += 1;
        }
        debug!(pc, next_pc, sweeps, %instr, "retired");

        Ok(Retired {
            pc,
            next_pc,
            class: instr.class,
            sweeps,
            redirected: redirect.is_some(),
        })
    }

    /// Streams a completed store's data to memory.
    fn drain_store(&mut self, instr: &Instruction, pc: u32, addr: u32) {
        let pass = Instruction::alu_imm(AluOp::Add, RegId::ZERO, instr.rs2, 0);
        let _ = self.sweep(&pass, pc, None);
        let drain = Instruction {
            mem_op: instr.mem_op,
            ..Instruction::stall()
        };
        let data = self.sweep(&drain, pc, None).data_out;
        self.memory.write(addr, data, instr.mem_op.width());
        self.stats.store_data_sweeps += 2;
        debug!(addr, data, width = ?instr.mem_op.width(), "store committed");
    }

    /// Clocks the core through sub-cycles 0 to 7 with `instr` asserted.
    fn sweep(&mut self, instr: &Instruction, pc: u32, load_word: Option<u32>) -> SweepOutcome {
        let next_pc = pc.wrapping_add(INSTRUCTION_BYTES);
        let flags = instr.flags();
        let mut outcome = SweepOutcome::default();

        for counter in SubCycle::sweep() {
            let inputs = CoreInputs {
                flags,
                alu_op: instr.op,
                mem_op: instr.mem_op,
                rs1: instr.rs1,
                rs2: instr.rs2,
                rd: instr.rd,
                counter,
                imm: instr.imm_slice(counter),
                pc: Nibble::of_word(pc, counter),
                next_pc: Nibble::of_word(next_pc, counter),
                data_in: load_word.map_or(Nibble::ZERO, |w| Nibble::of_word(w, counter)),
                load_data_ready: load_word.is_some(),
            };
            let phase = self.core.phase();
            let out = self.core.clock(&inputs, &mut self.regs);
            if self.config.trace_clocks {
                info!(
                    counter = counter.val(),
                    phase = phase.val(),
                    addr = out.addr_out,
                    data_out = out.data_out.val(),
                    write = ?out.write,
                    complete = out.instr_complete,
                    "clock"
                );
            }

            outcome.data_out = out.data_out.insert_into(outcome.data_out, counter);
            if out.address_ready {
                outcome.address = Some(out.addr_out);
            }
            if out.branch {
                outcome.redirect = Some(out.addr_out);
            }
            outcome.complete |= out.instr_complete;
            outcome.unhandled |= out.unhandled;
        }

        self.stats.clocks += u64::from(SLICES_PER_WORD);
        self.stats.sweeps += 1;
        outcome
    }
}
