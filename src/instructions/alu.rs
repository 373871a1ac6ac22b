//! # ALU (Arithmetic Logic Unit) Instructions
//!
//! Arithmetic and logical operations: ADC, SBC, AND, ORA, EOR, CMP,
//! CPX, CPY, BIT. ADC and SBC honor the decimal flag and operate on
//! binary-coded decimal values when it is set.

use crate::addressing::AddressingMode;
use crate::bcd;
use crate::cpu::Cpu;
use crate::memory::MemoryBus;

/// Executes the ADC (Add with Carry) instruction.
///
/// Adds the operand plus the carry flag to the accumulator. In binary
/// mode sets C on unsigned overflow and V on signed overflow; in
/// decimal mode both operands are treated as BCD, C is set when the sum
/// exceeds 99, and V is left unchanged.
///
/// # Arguments
///
/// * `cpu` - Mutable reference to the CPU
/// * `mode` - Addressing mode of the operand
pub(crate) fn execute_adc<M: MemoryBus>(cpu: &mut Cpu<M>, mode: AddressingMode) {
    let value = cpu.operand(mode);
    let mut v1 = cpu.a;
    let mut v2 = value;
    if cpu.flag_d {
        v1 = bcd::from_bcd(v1);
        v2 = bcd::from_bcd(v2);
    }
    let mut utotal = v1 as u16 + v2 as u16;
    let mut total = v1 as i8 as i16 + v2 as i8 as i16;
    if cpu.flag_c {
        utotal += 1;
        total += 1;
    }
    if cpu.flag_d {
        cpu.flag_c = utotal > 99;
        cpu.a = bcd::to_bcd(utotal as u8);
    } else {
        cpu.flag_c = utotal > 0xff;
        cpu.flag_v = !(-128..=127).contains(&total);
        cpu.a = utotal as u8;
    }
    cpu.set_flags_nz(cpu.a);
}

/// Executes the SBC (Subtract with Carry) instruction.
///
/// Subtracts the operand from the accumulator, borrowing when the carry
/// flag is clear. C is left set when no borrow occurred. In decimal
/// mode both operands are treated as BCD and V is left unchanged.
///
/// # Arguments
///
/// * `cpu` - Mutable reference to the CPU
/// * `mode` - Addressing mode of the operand
pub(crate) fn execute_sbc<M: MemoryBus>(cpu: &mut Cpu<M>, mode: AddressingMode) {
    let value = cpu.operand(mode);
    let mut v1 = cpu.a;
    let mut v2 = value;
    if cpu.flag_d {
        v1 = bcd::from_bcd(v1);
        v2 = bcd::from_bcd(v2);
    }
    let mut utotal = v1.wrapping_sub(v2);
    let mut total = v1 as i8 as i16 - v2 as i8 as i16;
    let mut borrow = v1 < v2;
    if !cpu.flag_c {
        if total == 0 {
            borrow = true;
        }
        utotal = utotal.wrapping_sub(1);
        total -= 1;
    }
    cpu.flag_c = !borrow;
    if cpu.flag_d {
        if total < 0 {
            total += 100;
        }
        cpu.a = bcd::to_bcd(total as u8);
    } else {
        cpu.flag_v = !(-128..=127).contains(&total);
        cpu.a = utotal;
    }
    cpu.set_flags_nz(cpu.a);
}

/// Executes the AND (Logical AND) instruction.
pub(crate) fn execute_and<M: MemoryBus>(cpu: &mut Cpu<M>, mode: AddressingMode) {
    let value = cpu.operand(mode);
    cpu.a &= value;
    cpu.set_flags_nz(cpu.a);
}

/// Executes the ORA (Logical Inclusive OR) instruction.
pub(crate) fn execute_ora<M: MemoryBus>(cpu: &mut Cpu<M>, mode: AddressingMode) {
    let value = cpu.operand(mode);
    cpu.a |= value;
    cpu.set_flags_nz(cpu.a);
}

/// Executes the EOR (Exclusive OR) instruction.
pub(crate) fn execute_eor<M: MemoryBus>(cpu: &mut Cpu<M>, mode: AddressingMode) {
    let value = cpu.operand(mode);
    cpu.a ^= value;
    cpu.set_flags_nz(cpu.a);
}

/// Executes the BIT (Bit Test) instruction.
///
/// Z reflects the AND of the accumulator and the operand; N and V are
/// copied from bits 7 and 6 of the operand itself. The accumulator is
/// not modified.
pub(crate) fn execute_bit<M: MemoryBus>(cpu: &mut Cpu<M>, mode: AddressingMode) {
    let value = cpu.operand(mode);
    cpu.flag_z = cpu.a & value == 0;
    cpu.flag_n = value & (1 << 7) != 0;
    cpu.flag_v = value & (1 << 6) != 0;
}

/// Compares `register` against the operand as if subtracting. C is set
/// unless a borrow would occur; Z and N reflect the difference.
fn compare<M: MemoryBus>(cpu: &mut Cpu<M>, register: u8, mode: AddressingMode) {
    let value = cpu.operand(mode);
    let result = register as i16 - value as i16;
    cpu.flag_c = result >= 0;
    cpu.set_flags_nz(result as u8);
}

/// Executes the CMP (Compare Accumulator) instruction.
pub(crate) fn execute_cmp<M: MemoryBus>(cpu: &mut Cpu<M>, mode: AddressingMode) {
    compare(cpu, cpu.a, mode);
}

/// Executes the CPX (Compare X Register) instruction.
pub(crate) fn execute_cpx<M: MemoryBus>(cpu: &mut Cpu<M>, mode: AddressingMode) {
    compare(cpu, cpu.x, mode);
}

/// Executes the CPY (Compare Y Register) instruction.
pub(crate) fn execute_cpy<M: MemoryBus>(cpu: &mut Cpu<M>, mode: AddressingMode) {
    compare(cpu, cpu.y, mode);
}
