//! Simulation statistics collection and reporting.
//!
//! This module tracks what the harness observed while driving the core. It provides:
//! 1. **Timing:** Clocks, sweeps, and retired instructions with the derived clocks per instruction.
//! 2. **Instruction mix:** Counts by class group (ALU, load, store, branch, jump, upper-immediate, stall).
//! 3. **Control flow:** Conditional branches that redirected the PC.
//! 4. **Memory:** Sweeps spent waiting on load data and sweeps spent streaming store data.

use std::fmt;

use crate::core::signals::InstrClass;

/// Simulation statistics structure tracking harness-level metrics.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SimStats {
    /// Total clocks the core was driven.
    pub clocks: u64,
    /// Total sweeps (eight clocks each).
    pub sweeps: u64,
    /// Number of instructions retired.
    pub instructions_retired: u64,

    /// Register-register and register-immediate arithmetic retired.
    pub inst_alu: u64,
    /// Loads retired.
    pub inst_load: u64,
    /// Stores retired.
    pub inst_store: u64,
    /// Conditional branches retired.
    pub inst_branch: u64,
    /// `jal` / `jalr` retired.
    pub inst_jump: u64,
    /// `lui` / `auipc` retired.
    pub inst_upper: u64,
    /// Explicit stalls retired.
    pub inst_stall: u64,

    /// Conditional branches that were taken.
    pub branches_taken: u64,
    /// Sweeps between a load's address and its data.
    pub load_wait_sweeps: u64,
    /// Extra sweeps used to stream store data to memory.
    pub store_data_sweeps: u64,
}

impl SimStats {
    /// Records one retired instruction of `class`.
    pub const fn record_retire(&mut self, class: InstrClass) {
        self.instructions_retired += 1;
        match class {
            InstrClass::AluImm | InstrClass::AluReg => self.inst_alu += 1,
            InstrClass::Load => self.inst_load += 1,
            InstrClass::Store => self.inst_store += 1,
            InstrClass::Branch => self.inst_branch += 1,
            InstrClass::Jal | InstrClass::Jalr => self.inst_jump += 1,
            InstrClass::Lui | InstrClass::Auipc => self.inst_upper += 1,
            InstrClass::Stall | InstrClass::System => self.inst_stall += 1,
        }
    }

    /// Clocks per retired instruction, or 0 before anything retires.
    pub fn cpi(&self) -> f64 {
        if self.instructions_retired == 0 {
            0.0
        } else {
            self.clocks as f64 / self.instructions_retired as f64
        }
    }

    /// Prints the summary to stdout.
    pub fn print(&self) {
        println!("{self}");
    }
}

impl fmt::Display for SimStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let instr = self.instructions_retired.max(1) as f64;
        let pct = |n: u64| (n as f64 / instr) * 100.0;
        writeln!(f, "==========================================================")?;
        writeln!(f, "SLICE CORE SIMULATION STATISTICS")?;
        writeln!(f, "==========================================================")?;
        writeln!(f, "sim_clocks               {}", self.clocks)?;
        writeln!(f, "sim_sweeps               {}", self.sweeps)?;
        writeln!(f, "sim_insts                {}", self.instructions_retired)?;
        writeln!(f, "sim_cpi                  {:.4}", self.cpi())?;
        writeln!(f, "----------------------------------------------------------")?;
        writeln!(f, "INSTRUCTION MIX")?;
        for (name, n) in [
            ("op.alu", self.inst_alu),
            ("op.load", self.inst_load),
            ("op.store", self.inst_store),
            ("op.branch", self.inst_branch),
            ("op.jump", self.inst_jump),
            ("op.upper", self.inst_upper),
            ("op.stall", self.inst_stall),
        ] {
            writeln!(f, "  {name:<22} {n} ({:.2}%)", pct(n))?;
        }
        writeln!(f, "----------------------------------------------------------")?;
        writeln!(f, "CONTROL AND MEMORY")?;
        writeln!(f, "  branches.taken         {}", self.branches_taken)?;
        writeln!(f, "  load.wait_sweeps       {}", self.load_wait_sweeps)?;
        writeln!(f, "  store.data_sweeps      {}", self.store_data_sweeps)?;
        write!(f, "==========================================================")
    }
}
