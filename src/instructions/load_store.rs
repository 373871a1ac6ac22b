//! # Load and Store Instructions
//!
//! LDA, LDX, LDY set Z and N from the loaded value; STA, STX, STY
//! write a register to memory and leave the flags alone.

use crate::addressing::AddressingMode;
use crate::cpu::Cpu;
use crate::memory::MemoryBus;

/// Executes the LDA (Load Accumulator) instruction.
pub(crate) fn execute_lda<M: MemoryBus>(cpu: &mut Cpu<M>, mode: AddressingMode) {
    let value = cpu.operand(mode);
    cpu.a = value;
    cpu.set_flags_nz(value);
}

/// Executes the LDX (Load X Register) instruction.
pub(crate) fn execute_ldx<M: MemoryBus>(cpu: &mut Cpu<M>, mode: AddressingMode) {
    let value = cpu.operand(mode);
    cpu.x = value;
    cpu.set_flags_nz(value);
}

/// Executes the LDY (Load Y Register) instruction.
pub(crate) fn execute_ldy<M: MemoryBus>(cpu: &mut Cpu<M>, mode: AddressingMode) {
    let value = cpu.operand(mode);
    cpu.y = value;
    cpu.set_flags_nz(value);
}

/// Executes the STA (Store Accumulator) instruction.
pub(crate) fn execute_sta<M: MemoryBus>(cpu: &mut Cpu<M>, mode: AddressingMode) {
    let target = cpu.resolve(mode);
    cpu.store_target(target, cpu.a);
}

/// Executes the STX (Store X Register) instruction.
pub(crate) fn execute_stx<M: MemoryBus>(cpu: &mut Cpu<M>, mode: AddressingMode) {
    let target = cpu.resolve(mode);
    cpu.store_target(target, cpu.x);
}

/// Executes the STY (Store Y Register) instruction.
pub(crate) fn execute_sty<M: MemoryBus>(cpu: &mut Cpu<M>, mode: AddressingMode) {
    let target = cpu.resolve(mode);
    cpu.store_target(target, cpu.y);
}
