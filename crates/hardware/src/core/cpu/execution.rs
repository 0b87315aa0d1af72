//! Per-clock Evaluation.
//!
//! One call to [`SliceCore::clock`] is one rising edge. It performs:
//! 1. **Combinational Pass:** Register reads, operand routing, the arithmetic and
//!    shift units, completion, writeback selection, and the output pins, all from
//!    register values at the start of the clock.
//! 2. **Register Update:** Latch, shift amount, accumulator, load registers, phase
//!    and the register-file write, all at the end of the clock.

use tracing::{debug, trace, warn};

use super::SliceCore;
use crate::common::RegisterPorts;
use crate::core::accumulator::{self, AccumulatorSources};
use crate::core::branch::BranchResolver;
use crate::core::router::OperandRouter;
use crate::core::sequencer::{Completion, CompletionRule, SweepStatus};
use crate::core::shift_amount::ShiftAmount;
use crate::core::signals::{CoreInputs, CoreOutputs, RegWrite};
use crate::core::units::alu::NibbleAlu;
use crate::core::units::shifter::NibbleShifter;
use crate::core::writeback::{WritebackSelector, WritebackSources};

impl SliceCore {
    /// Advances the core by one clock.
    ///
    /// # Arguments
    ///
    /// * `inputs` - Everything the decoder, PC logic and memory present this clock
    /// * `regs`   - The register storage unit; read combinationally, written at the end of the clock
    ///
    /// # Returns
    ///
    /// The output pins for this clock, including the register write that was applied.
    pub fn clock<R: RegisterPorts>(&mut self, inputs: &CoreInputs, regs: &mut R) -> CoreOutputs {
        let counter = inputs.counter;
        let phase = self.sequencer.phase();
        let class = inputs.flags.class();
        let op = inputs.alu_op;
        trace!(counter = counter.val(), phase = phase.val(), ?class, "clock");

        let (rs1, rs2) = regs.read(inputs.rs1, inputs.rs2, counter);

        let request = OperandRouter::route(class, phase, inputs, rs1, rs2);
        let chain = self.latch.chain_in(counter, request.op);
        let alu = NibbleAlu::execute(request.op, request.a, request.b, chain);
        let shift_out = NibbleShifter::execute(op, counter, self.accumulator.value(), self.shift_amount.get());

        let load_done = self.load.done(counter, inputs.load_data_ready);
        let status = SweepStatus {
            phase,
            load_done,
            branch_taken: BranchResolver::taken(alu.compare, inputs.mem_op),
        };
        let rule = CompletionRule::for_class(class, op);
        let completion = self.sequencer.completion(counter, rule, &status);

        let sources = WritebackSources {
            alu_out: alu.out,
            shift_out,
            compare: self.latch.compare(),
            imm: inputs.imm,
            next_pc: inputs.next_pc,
            load: self.load.extend(counter, inputs.mem_op, inputs.data_in),
            load_done,
        };
        let write = WritebackSelector::select(class, op, phase, counter, &sources).map(|value| RegWrite {
            rd: inputs.rd,
            counter,
            value,
        });

        let outputs = CoreOutputs {
            data_out: self.accumulator.store_data(counter, inputs.mem_op),
            addr_out: self.accumulator.address(),
            address_ready: self.sequencer.address_ready(counter, class),
            instr_complete: completion == Completion::Complete,
            branch: BranchResolver::redirect(class, phase, counter),
            write,
            unhandled: completion == Completion::Unhandled,
        };

        if outputs.address_ready {
            debug!(addr = outputs.addr_out, ?class, "address ready");
        }
        if outputs.branch {
            debug!(target = outputs.addr_out, ?class, "branch");
        }
        if outputs.instr_complete {
            debug!(?class, phase = phase.val(), "instruction complete");
        }
        if outputs.unhandled {
            warn!(?class, phase = phase.val(), "class has no completion rule; core stalls");
        }

        // Clock edge.
        self.latch.latch(&alu);
        self.shift_amount
            .capture(phase, counter, ShiftAmount::source(class, inputs.imm, rs2));
        if accumulator::shift_enabled(class, op, phase) {
            let src = AccumulatorSources {
                rs1,
                rs2,
                alu_out: alu.out,
            };
            self.accumulator
                .shift_in(accumulator::input_slice(class, op, phase, &src));
        }
        self.load
            .update(counter, inputs.mem_op, inputs.load_data_ready, inputs.data_in);
        self.sequencer.advance(counter, completion);
        if let Some(w) = write {
            regs.write(w.rd, w.counter, w.value);
        }

        outputs
    }
}

