//! # Shift and Rotate Instructions
//!
//! ASL, LSR, ROL, ROR. Each works on the accumulator or a memory
//! location depending on the addressing mode; the bit shifted out lands
//! in the carry flag, and the rotates shift the old carry in at the
//! other end.

use crate::addressing::AddressingMode;
use crate::cpu::Cpu;
use crate::memory::MemoryBus;

/// Executes the ASL (Arithmetic Shift Left) instruction.
pub(crate) fn execute_asl<M: MemoryBus>(cpu: &mut Cpu<M>, mode: AddressingMode) {
    let (value, target) = cpu.operand_target(mode);
    cpu.flag_c = value & 0x80 != 0;
    let value = value << 1;
    cpu.set_flags_nz(value);
    cpu.store_target(target, value);
}

/// Executes the LSR (Logical Shift Right) instruction.
pub(crate) fn execute_lsr<M: MemoryBus>(cpu: &mut Cpu<M>, mode: AddressingMode) {
    let (value, target) = cpu.operand_target(mode);
    cpu.flag_c = value & 0x01 != 0;
    let value = value >> 1;
    cpu.set_flags_nz(value);
    cpu.store_target(target, value);
}

/// Executes the ROL (Rotate Left) instruction.
pub(crate) fn execute_rol<M: MemoryBus>(cpu: &mut Cpu<M>, mode: AddressingMode) {
    let (value, target) = cpu.operand_target(mode);
    let rotate = if cpu.flag_c { 1 } else { 0 };
    cpu.flag_c = value & 0x80 != 0;
    let value = (value << 1) | rotate;
    cpu.set_flags_nz(value);
    cpu.store_target(target, value);
}

/// Executes the ROR (Rotate Right) instruction.
pub(crate) fn execute_ror<M: MemoryBus>(cpu: &mut Cpu<M>, mode: AddressingMode) {
    let (value, target) = cpu.operand_target(mode);
    let rotate = if cpu.flag_c { 0x80 } else { 0 };
    cpu.flag_c = value & 0x01 != 0;
    let value = (value >> 1) | rotate;
    cpu.set_flags_nz(value);
    cpu.store_target(target, value);
}
