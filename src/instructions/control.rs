//! # Control Flow Instructions
//!
//! JMP, JSR, RTS, RTI, and BRK. JSR pushes the address of its own last
//! operand byte, which is the following instruction minus one; RTS
//! pulls it back without adjustment and the pre-increment fetch does
//! the rest. Interrupt returns adjust by one because the interrupt
//! sequence pushes the true next-instruction address.

use crate::addressing::AddressingMode;
use crate::cpu::Cpu;
use crate::memory::MemoryBus;
use crate::ADDR_IRQ_VECTOR;

/// Executes the JMP (Jump) instruction, absolute or indirect.
pub(crate) fn execute_jmp<M: MemoryBus>(cpu: &mut Cpu<M>, mode: AddressingMode) {
    let mut address = cpu.fetch16();
    if mode == AddressingMode::Indirect {
        address = cpu.mem.read16(address);
    }
    cpu.pc = address.wrapping_sub(1);
}

/// Executes the JSR (Jump to Subroutine) instruction.
pub(crate) fn execute_jsr<M: MemoryBus>(cpu: &mut Cpu<M>) {
    let address = cpu.fetch16();
    cpu.push16(cpu.pc);
    cpu.pc = address.wrapping_sub(1);
}

/// Executes the RTS (Return from Subroutine) instruction.
pub(crate) fn execute_rts<M: MemoryBus>(cpu: &mut Cpu<M>) {
    cpu.pc = cpu.pull16();
}

/// Executes the RTI (Return from Interrupt) instruction.
pub(crate) fn execute_rti<M: MemoryBus>(cpu: &mut Cpu<M>) {
    let status = cpu.pull();
    cpu.set_status(status);
    cpu.pc = cpu.pull16().wrapping_sub(1);
}

/// Executes the BRK (Force Interrupt) instruction.
///
/// Sets the Break flag and consumes the padding byte after the opcode.
/// When `stop_on_break` is set that is all: the run loop sees the flag
/// and returns control to the caller. Otherwise BRK runs the full
/// interrupt sequence through the IRQ vector, with B set in the pushed
/// status byte.
pub(crate) fn execute_brk<M: MemoryBus>(cpu: &mut Cpu<M>) {
    cpu.flag_b = true;
    cpu.fetch();
    if cpu.stop_on_break {
        return;
    }
    cpu.push16(cpu.pc.wrapping_add(1));
    cpu.push(cpu.status());
    cpu.flag_i = true;
    cpu.pc = cpu.mem.read16(ADDR_IRQ_VECTOR).wrapping_sub(1);
}
