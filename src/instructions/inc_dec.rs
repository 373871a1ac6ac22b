//! # Increment and Decrement Instructions
//!
//! INC and DEC are read-modify-write on memory; INX, INY, DEX, DEY act
//! on the index registers. All of them wrap at the byte boundary and
//! update Z and N.

use crate::addressing::AddressingMode;
use crate::cpu::Cpu;
use crate::memory::MemoryBus;

/// Executes the INC (Increment Memory) instruction.
pub(crate) fn execute_inc<M: MemoryBus>(cpu: &mut Cpu<M>, mode: AddressingMode) {
    let (value, target) = cpu.operand_target(mode);
    let value = value.wrapping_add(1);
    cpu.set_flags_nz(value);
    cpu.store_target(target, value);
}

/// Executes the DEC (Decrement Memory) instruction.
pub(crate) fn execute_dec<M: MemoryBus>(cpu: &mut Cpu<M>, mode: AddressingMode) {
    let (value, target) = cpu.operand_target(mode);
    let value = value.wrapping_sub(1);
    cpu.set_flags_nz(value);
    cpu.store_target(target, value);
}

pub(crate) fn execute_inx<M: MemoryBus>(cpu: &mut Cpu<M>) {
    cpu.x = cpu.x.wrapping_add(1);
    cpu.set_flags_nz(cpu.x);
}

pub(crate) fn execute_iny<M: MemoryBus>(cpu: &mut Cpu<M>) {
    cpu.y = cpu.y.wrapping_add(1);
    cpu.set_flags_nz(cpu.y);
}

pub(crate) fn execute_dex<M: MemoryBus>(cpu: &mut Cpu<M>) {
    cpu.x = cpu.x.wrapping_sub(1);
    cpu.set_flags_nz(cpu.x);
}

pub(crate) fn execute_dey<M: MemoryBus>(cpu: &mut Cpu<M>) {
    cpu.y = cpu.y.wrapping_sub(1);
    cpu.set_flags_nz(cpu.y);
}
