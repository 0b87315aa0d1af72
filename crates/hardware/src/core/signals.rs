//! Core control signals and operation types.
//!
//! This module defines the wires that cross the core boundary every clock. It performs:
//! 1. **Instruction Classification:** The eleven one-hot class flags and their priority resolution.
//! 2. **Operation Selection:** The 4-bit arithmetic opcode and the 3-bit memory/condition field.
//! 3. **Port Bundles:** The per-clock input and output bundles of the core.

use serde::Deserialize;

use crate::common::{Nibble, RegId, SubCycle};

/// Instruction class, resolved from the decoder's one-hot flags.
///
/// Variants are listed in flag declaration order, which is also the priority
/// order used when more than one flag is asserted.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InstrClass {
    /// Load from memory.
    Load,
    /// Register-immediate arithmetic.
    AluImm,
    /// Add upper immediate to PC.
    Auipc,
    /// Store to memory.
    Store,
    /// Register-register arithmetic.
    AluReg,
    /// Load upper immediate.
    Lui,
    /// Conditional branch.
    Branch,
    /// Jump and link register.
    Jalr,
    /// Jump and link.
    Jal,
    /// System / privileged instruction (flagged, never executed).
    System,
    /// Explicit stall requested by the upstream driver.
    Stall,
}

impl InstrClass {
    /// Every class, in priority order.
    pub const ALL: [Self; 11] = [
        Self::Load,
        Self::AluImm,
        Self::Auipc,
        Self::Store,
        Self::AluReg,
        Self::Lui,
        Self::Branch,
        Self::Jalr,
        Self::Jal,
        Self::System,
        Self::Stall,
    ];

    /// Whether this is one of the two arithmetic classes.
    #[inline(always)]
    pub const fn is_alu(self) -> bool {
        matches!(self, Self::AluImm | Self::AluReg)
    }

    /// Whether this class uses the memory address handshake.
    #[inline(always)]
    pub const fn is_memory(self) -> bool {
        matches!(self, Self::Load | Self::Store)
    }

    /// Whether this class links the return address into `rd`.
    #[inline(always)]
    pub const fn is_jump(self) -> bool {
        matches!(self, Self::Jal | Self::Jalr)
    }
}

/// The decoder's class flags, one wire per class.
///
/// Intended to be one-hot. When several flags are asserted the lowest-numbered
/// class in [`InstrClass::ALL`] wins; see [`ClassFlags::class`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ClassFlags {
    /// Load.
    pub is_load: bool,
    /// Register-immediate arithmetic.
    pub is_alu_imm: bool,
    /// Add upper immediate to PC.
    pub is_auipc: bool,
    /// Store.
    pub is_store: bool,
    /// Register-register arithmetic.
    pub is_alu_reg: bool,
    /// Load upper immediate.
    pub is_lui: bool,
    /// Branch.
    pub is_branch: bool,
    /// Jump and link register.
    pub is_jalr: bool,
    /// Jump and link.
    pub is_jal: bool,
    /// System.
    pub is_system: bool,
    /// Stall.
    pub is_stall: bool,
}

impl ClassFlags {
    /// Flags with no class asserted (the core idles).
    pub const IDLE: Self = Self {
        is_load: false,
        is_alu_imm: false,
        is_auipc: false,
        is_store: false,
        is_alu_reg: false,
        is_lui: false,
        is_branch: false,
        is_jalr: false,
        is_jal: false,
        is_system: false,
        is_stall: false,
    };

    const fn wires(&self) -> [bool; 11] {
        [
            self.is_load,
            self.is_alu_imm,
            self.is_auipc,
            self.is_store,
            self.is_alu_reg,
            self.is_lui,
            self.is_branch,
            self.is_jalr,
            self.is_jal,
            self.is_system,
            self.is_stall,
        ]
    }

    /// Resolves the asserted class, honouring declaration-order priority.
    ///
    /// Returns `None` when no flag is asserted.
    pub fn class(&self) -> Option<InstrClass> {
        self.wires()
            .iter()
            .zip(InstrClass::ALL)
            .find_map(|(&set, class)| set.then_some(class))
    }

    /// Number of asserted flags; anything other than 0 or 1 is malformed.
    pub fn asserted(&self) -> usize {
        self.wires().iter().filter(|&&set| set).count()
    }
}

impl From<InstrClass> for ClassFlags {
    fn from(class: InstrClass) -> Self {
        let mut flags = Self::IDLE;
        let wire = match class {
            InstrClass::Load => &mut flags.is_load,
            InstrClass::AluImm => &mut flags.is_alu_imm,
            InstrClass::Auipc => &mut flags.is_auipc,
            InstrClass::Store => &mut flags.is_store,
            InstrClass::AluReg => &mut flags.is_alu_reg,
            InstrClass::Lui => &mut flags.is_lui,
            InstrClass::Branch => &mut flags.is_branch,
            InstrClass::Jalr => &mut flags.is_jalr,
            InstrClass::Jal => &mut flags.is_jal,
            InstrClass::System => &mut flags.is_system,
            InstrClass::Stall => &mut flags.is_stall,
        };
        *wire = true;
        flags
    }
}

/// Arithmetic unit operation, decoded from the 4-bit `alu_op` field.
///
/// Bits [2:0] follow the RISC-V `funct3` encoding; bit 3 selects subtract
/// (for `000`) and arithmetic right shift (for `101`).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AluOp {
    /// Addition.
    #[default]
    Add,
    /// Shift left logical.
    Sll,
    /// Set less than (signed).
    Slt,
    /// Set less than (unsigned).
    Sltu,
    /// Bitwise XOR.
    Xor,
    /// Shift right logical.
    Srl,
    /// Bitwise OR.
    Or,
    /// Bitwise AND.
    And,
    /// Subtraction.
    Sub,
    /// Shift right arithmetic.
    Sra,
}

impl AluOp {
    /// Decodes the 4-bit opcode field. Bit 3 is ignored except for add/sub and srl/sra.
    pub const fn from_bits(bits: u8) -> Self {
        let alt = bits & 0b1000 != 0;
        match bits & 0b111 {
            0b000 if alt => Self::Sub,
            0b000 => Self::Add,
            0b001 => Self::Sll,
            0b010 => Self::Slt,
            0b011 => Self::Sltu,
            0b100 => Self::Xor,
            0b101 if alt => Self::Sra,
            0b101 => Self::Srl,
            0b110 => Self::Or,
            _ => Self::And,
        }
    }

    /// Returns the canonical 4-bit encoding.
    pub const fn bits(self) -> u8 {
        match self {
            Self::Add => 0b0000,
            Self::Sll => 0b0001,
            Self::Slt => 0b0010,
            Self::Sltu => 0b0011,
            Self::Xor => 0b0100,
            Self::Srl => 0b0101,
            Self::Or => 0b0110,
            Self::And => 0b0111,
            Self::Sub => 0b1000,
            Self::Sra => 0b1101,
        }
    }

    /// Whether the adder computes `a + !b + 1`.
    ///
    /// This is what seeds the carry latch at sub-cycle 0.
    #[inline(always)]
    pub const fn complements_b(self) -> bool {
        matches!(self, Self::Sub | Self::Slt | Self::Sltu)
    }

    /// Whether this is a set-less-than comparison.
    #[inline(always)]
    pub const fn is_set_less_than(self) -> bool {
        matches!(self, Self::Slt | Self::Sltu)
    }

    /// Whether the result comes from the shift unit.
    #[inline(always)]
    pub const fn is_shift(self) -> bool {
        matches!(self, Self::Sll | Self::Srl | Self::Sra)
    }

    /// Sweeps needed after the raw result before writeback is final.
    ///
    /// Set-less-than and shifts need one; everything else retires in phase 0.
    #[inline(always)]
    pub const fn extra_phases(self) -> u8 {
        if self.is_set_less_than() || self.is_shift() { 1 } else { 0 }
    }
}

/// Width of a memory access, from bits [1:0] of the memory-operation field.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AccessWidth {
    /// One byte (slices 0..=1).
    Byte,
    /// Two bytes (slices 0..=3).
    Half,
    /// Four bytes (all slices).
    Word,
}

impl AccessWidth {
    /// Last sub-cycle that still carries data for this width, or `None` for a full word.
    pub const fn last_slice(self) -> Option<SubCycle> {
        match self {
            Self::Byte => Some(SubCycle::new(1)),
            Self::Half => Some(SubCycle::new(3)),
            Self::Word => None,
        }
    }

    /// Whether `counter` lies beyond the access width.
    pub const fn is_exhausted_at(self, counter: SubCycle) -> bool {
        match self.last_slice() {
            Some(last) => counter.val() > last.val(),
            None => false,
        }
    }

    /// Number of bytes moved.
    pub const fn bytes(self) -> u32 {
        match self {
            Self::Byte => 1,
            Self::Half => 2,
            Self::Word => 4,
        }
    }
}

/// The 3-bit memory-operation field.
///
/// For loads and stores it carries the access width (bits [1:0]) and the
/// unsigned flag (bit 2). Branches reuse bit 0 as the condition-inversion bit.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Deserialize)]
#[serde(transparent)]
pub struct MemOp(u8);

impl MemOp {
    /// Creates the field from the low three bits of `bits`.
    pub const fn new(bits: u8) -> Self {
        Self(bits & 0b111)
    }

    /// Builds the field for a load or store.
    pub const fn access(width: AccessWidth, unsigned: bool) -> Self {
        let w = match width {
            AccessWidth::Byte => 0b00,
            AccessWidth::Half => 0b01,
            AccessWidth::Word => 0b10,
        };
        Self::new(w | ((unsigned as u8) << 2))
    }

    /// Returns the raw 3-bit value.
    pub const fn bits(self) -> u8 {
        self.0 & 0b111
    }

    /// Access width encoded in bits [1:0]. `0b11` is treated as a word.
    pub const fn width(self) -> AccessWidth {
        match self.0 & 0b11 {
            0b00 => AccessWidth::Byte,
            0b01 => AccessWidth::Half,
            _ => AccessWidth::Word,
        }
    }

    /// Whether a load zero-extends instead of sign-extending.
    pub const fn is_unsigned(self) -> bool {
        self.0 & 0b100 != 0
    }

    /// Whether a branch takes on a false comparison.
    pub const fn inverts_branch(self) -> bool {
        self.0 & 0b001 != 0
    }
}

/// Everything the core samples in one clock.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CoreInputs {
    /// Decoded class flags.
    pub flags: ClassFlags,
    /// Arithmetic opcode.
    pub alu_op: AluOp,
    /// Memory width / sign / branch polarity.
    pub mem_op: MemOp,
    /// First source register.
    pub rs1: RegId,
    /// Second source register.
    pub rs2: RegId,
    /// Destination register.
    pub rd: RegId,
    /// Active slice index.
    pub counter: SubCycle,
    /// Immediate slice.
    pub imm: Nibble,
    /// Program counter slice.
    pub pc: Nibble,
    /// Next program counter slice (`pc + 4`), used for link writeback.
    pub next_pc: Nibble,
    /// Incoming load data slice.
    pub data_in: Nibble,
    /// Memory has load data for the sweep that starts this clock.
    pub load_data_ready: bool,
}

/// A register write requested for the current clock.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RegWrite {
    /// Destination register.
    pub rd: RegId,
    /// Slice index written.
    pub counter: SubCycle,
    /// Slice value.
    pub value: Nibble,
}

/// Everything the core drives in one clock.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CoreOutputs {
    /// Outgoing store data slice.
    pub data_out: Nibble,
    /// Accumulated 28-bit address.
    pub addr_out: u32,
    /// `addr_out` is a load/store address this clock.
    pub address_ready: bool,
    /// The current instruction retires this clock.
    pub instr_complete: bool,
    /// Load the program counter from `addr_out`.
    pub branch: bool,
    /// Register write issued this clock, if enabled.
    pub write: Option<RegWrite>,
    /// The asserted class has no completion rule (diagnostic, not a hardware wire).
    pub unhandled: bool,
}
