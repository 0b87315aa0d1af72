//! Pre-decoded instruction descriptors.
//!
//! An [`Instruction`] holds exactly the per-instruction inputs of the core: the
//! class, the 4-bit arithmetic opcode, the 3-bit memory-operation field, three
//! register ids and the full 32-bit immediate. The harness turns the immediate
//! into one slice per clock with [`Instruction::imm_slice`].

use serde::Deserialize;

use crate::common::{Nibble, RegId, SubCycle};
use crate::core::signals::{AccessWidth, AluOp, ClassFlags, InstrClass, MemOp};

/// Conditional branch comparison.
///
/// Each condition is an arithmetic opcode whose compare output is tested,
/// plus the inversion bit carried in `mem_op[0]`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BranchCond {
    /// Equal.
    Eq,
    /// Not equal.
    Ne,
    /// Signed less than.
    Lt,
    /// Signed greater or equal.
    Ge,
    /// Unsigned less than.
    Ltu,
    /// Unsigned greater or equal.
    Geu,
}

impl BranchCond {
    /// Opcode whose compare output decides the branch.
    pub const fn op(self) -> AluOp {
        match self {
            Self::Eq | Self::Ne => AluOp::Sub,
            Self::Lt | Self::Ge => AluOp::Slt,
            Self::Ltu | Self::Geu => AluOp::Sltu,
        }
    }

    /// The memory-operation field presented with the branch.
    pub const fn mem_op(self) -> MemOp {
        MemOp::new(match self {
            Self::Eq => 0b000,
            Self::Ne => 0b001,
            Self::Lt => 0b100,
            Self::Ge => 0b101,
            Self::Ltu => 0b110,
            Self::Geu => 0b111,
        })
    }

    /// Evaluates the condition on whole words.
    pub const fn holds(self, a: u32, b: u32) -> bool {
        match self {
            Self::Eq => a == b,
            Self::Ne => a != b,
            Self::Lt => (a as i32) < (b as i32),
            Self::Ge => (a as i32) >= (b as i32),
            Self::Ltu => a < b,
            Self::Geu => a >= b,
        }
    }

    /// Assembly mnemonic.
    pub const fn mnemonic(self) -> &'static str {
        match self {
            Self::Eq => "beq",
            Self::Ne => "bne",
            Self::Lt => "blt",
            Self::Ge => "bge",
            Self::Ltu => "bltu",
            Self::Geu => "bgeu",
        }
    }

    /// Recovers the condition from a branch's opcode and memory-operation field.
    pub const fn from_fields(op: AluOp, mem_op: MemOp) -> Option<Self> {
        let inverted = mem_op.inverts_branch();
        match (op, inverted) {
            (AluOp::Sub, false) => Some(Self::Eq),
            (AluOp::Sub, true) => Some(Self::Ne),
            (AluOp::Slt, false) => Some(Self::Lt),
            (AluOp::Slt, true) => Some(Self::Ge),
            (AluOp::Sltu, false) => Some(Self::Ltu),
            (AluOp::Sltu, true) => Some(Self::Geu),
            _ => None,
        }
    }
}

/// One pre-decoded instruction.
///
/// # Examples
///
/// ```
/// use slicev_core::common::RegId;
/// use slicev_core::core::signals::AluOp;
/// use slicev_core::isa::Instruction;
///
/// let addi = Instruction::alu_imm(AluOp::Add, RegId(1), RegId(2), -4);
/// assert_eq!(addi.to_string(), "addi x1, x2, -4");
///
/// let json = r#"{ "class": "alu_imm", "op": "add", "rd": 1, "rs1": 2, "imm": -4 }"#;
/// let parsed: Instruction = serde_json::from_str(json).unwrap();
/// assert_eq!(parsed, addi);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
#[serde(from = "InstructionDesc")]
pub struct Instruction {
    /// Instruction class.
    pub class: InstrClass,
    /// Arithmetic opcode.
    pub op: AluOp,
    /// Memory width / sign / branch polarity.
    pub mem_op: MemOp,
    /// Destination register.
    pub rd: RegId,
    /// First source register.
    pub rs1: RegId,
    /// Second source register.
    pub rs2: RegId,
    /// Immediate, already positioned (upper immediates carry their low 12 zero bits).
    pub imm: i32,
}

impl Instruction {
    const fn new(class: InstrClass) -> Self {
        Self {
            class,
            op: AluOp::Add,
            mem_op: MemOp::new(0),
            rd: RegId::ZERO,
            rs1: RegId::ZERO,
            rs2: RegId::ZERO,
            imm: 0,
        }
    }

    /// Register-register arithmetic: `rd = rs1 op rs2`.
    pub const fn alu_reg(op: AluOp, rd: RegId, rs1: RegId, rs2: RegId) -> Self {
        Self {
            op,
            rd,
            rs1,
            rs2,
            ..Self::new(InstrClass::AluReg)
        }
    }

    /// Register-immediate arithmetic: `rd = rs1 op imm`.
    pub const fn alu_imm(op: AluOp, rd: RegId, rs1: RegId, imm: i32) -> Self {
        Self {
            op,
            rd,
            rs1,
            imm,
            ..Self::new(InstrClass::AluImm)
        }
    }

    /// Load upper immediate: `rd = imm`.
    pub const fn lui(rd: RegId, imm: i32) -> Self {
        Self {
            rd,
            imm,
            ..Self::new(InstrClass::Lui)
        }
    }

    /// Add upper immediate to PC: `rd = pc + imm`.
    pub const fn auipc(rd: RegId, imm: i32) -> Self {
        Self {
            rd,
            imm,
            ..Self::new(InstrClass::Auipc)
        }
    }

    /// Load: `rd = mem[rs1 + offset]`, sign- or zero-extended from `width`.
    pub const fn load(width: AccessWidth, unsigned: bool, rd: RegId, rs1: RegId, offset: i32) -> Self {
        Self {
            mem_op: MemOp::access(width, unsigned),
            rd,
            rs1,
            imm: offset,
            ..Self::new(InstrClass::Load)
        }
    }

    /// Store: `mem[rs1 + offset] = rs2`, truncated to `width`.
    pub const fn store(width: AccessWidth, rs1: RegId, rs2: RegId, offset: i32) -> Self {
        Self {
            mem_op: MemOp::access(width, false),
            rs1,
            rs2,
            imm: offset,
            ..Self::new(InstrClass::Store)
        }
    }

    /// Conditional branch to `pc + offset`.
    pub const fn branch(cond: BranchCond, rs1: RegId, rs2: RegId, offset: i32) -> Self {
        Self {
            op: cond.op(),
            mem_op: cond.mem_op(),
            rs1,
            rs2,
            imm: offset,
            ..Self::new(InstrClass::Branch)
        }
    }

    /// Jump and link: `rd = pc + 4; pc = pc + offset`.
    pub const fn jal(rd: RegId, offset: i32) -> Self {
        Self {
            rd,
            imm: offset,
            ..Self::new(InstrClass::Jal)
        }
    }

    /// Jump and link register: `rd = pc + 4; pc = (rs1 + offset) & !1`.
    pub const fn jalr(rd: RegId, rs1: RegId, offset: i32) -> Self {
        Self {
            rd,
            rs1,
            imm: offset,
            ..Self::new(InstrClass::Jalr)
        }
    }

    /// Explicit stall; retires after one sweep without side effects.
    pub const fn stall() -> Self {
        Self::new(InstrClass::Stall)
    }

    /// A system instruction. The core flags these but never executes them.
    pub const fn system() -> Self {
        Self::new(InstrClass::System)
    }

    /// The decoder's class flags for this instruction.
    pub fn flags(&self) -> ClassFlags {
        ClassFlags::from(self.class)
    }

    /// Immediate slice presented at `counter`.
    #[inline(always)]
    pub const fn imm_slice(&self, counter: SubCycle) -> Nibble {
        Nibble::of_word(self.imm as u32, counter)
    }

    /// Branch condition, if this is a well-formed branch.
    pub const fn branch_cond(&self) -> Option<BranchCond> {
        match self.class {
            InstrClass::Branch => BranchCond::from_fields(self.op, self.mem_op),
            _ => None,
        }
    }

    /// Registers this instruction reads.
    pub const fn sources(&self) -> [RegId; 2] {
        [self.rs1, self.rs2]
    }
}

/// JSON form of an [`Instruction`].
///
/// Branches may name a `cond` instead of spelling out `op` and `mem_op`;
/// loads and stores may give `width` (and `unsigned`) instead of `mem_op`.
#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct InstructionDesc {
    class: InstrClass,
    #[serde(default)]
    op: AluOp,
    #[serde(default)]
    mem_op: MemOp,
    #[serde(default)]
    cond: Option<BranchCond>,
    #[serde(default)]
    width: Option<AccessWidth>,
    #[serde(default)]
    unsigned: bool,
    #[serde(default)]
    rd: RegId,
    #[serde(default)]
    rs1: RegId,
    #[serde(default)]
    rs2: RegId,
    #[serde(default)]
    imm: i32,
}

impl From<InstructionDesc> for Instruction {
    fn from(desc: InstructionDesc) -> Self {
        let (op, mem_op) = match (desc.cond, desc.width) {
            (Some(cond), _) => (cond.op(), cond.mem_op()),
            (None, Some(width)) => (desc.op, MemOp::access(width, desc.unsigned)),
            (None, None) => (desc.op, desc.mem_op),
        };
        Self {
            class: desc.class,
            op,
            mem_op,
            rd: desc.rd,
            rs1: desc.rs1,
            rs2: desc.rs2,
            imm: desc.imm,
        }
    }
}
