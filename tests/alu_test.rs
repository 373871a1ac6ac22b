//! Tests for the arithmetic and logic instructions.
//!
//! Tests cover:
//! - ADC and SBC in binary and decimal mode, with and without carry
//! - Carry and overflow flag behavior
//! - AND, ORA, EOR, BIT
//! - CMP, CPX, CPY borrow semantics

use lib6510::{Cpu, FlatMemory, MemoryBus};

/// Helper to create a CPU with the program counter positioned so the
/// next fetch reads address 0x0200.
fn setup_cpu() -> Cpu<FlatMemory> {
    let mut cpu = Cpu::new(FlatMemory::new());
    cpu.set_pc(0x01ff);
    cpu
}

fn load_program(cpu: &mut Cpu<FlatMemory>, bytes: &[u8]) {
    cpu.memory_mut().import(0x0200, bytes);
}

// ========== ADC ==========

#[test]
fn adc_immediate() {
    let mut cpu = setup_cpu();
    load_program(&mut cpu, &[0x69, 0x03]); // adc #$03
    cpu.set_a(0x02);
    cpu.next();
    assert_eq!(cpu.a(), 0x05);
    assert!(!cpu.flag_c());
    assert!(!cpu.flag_v());
    assert_eq!(cpu.pc(), 0x0201);
}

#[test]
fn adc_with_carry_in() {
    let mut cpu = setup_cpu();
    load_program(&mut cpu, &[0x69, 0x03]);
    cpu.set_a(0x02);
    cpu.set_flag_c(true);
    cpu.next();
    assert_eq!(cpu.a(), 0x06);
    assert!(!cpu.flag_c());
}

#[test]
fn adc_carry_out() {
    let mut cpu = setup_cpu();
    load_program(&mut cpu, &[0x69, 0x02]);
    cpu.set_a(0xff);
    cpu.next();
    assert_eq!(cpu.a(), 0x01);
    assert!(cpu.flag_c());
    assert!(!cpu.flag_v());
}

#[test]
fn adc_signed_overflow() {
    let mut cpu = setup_cpu();
    load_program(&mut cpu, &[0x69, 0x01]);
    cpu.set_a(0x7f);
    cpu.next();
    assert_eq!(cpu.a(), 0x80);
    assert!(cpu.flag_v());
    assert!(cpu.flag_n());
    assert!(!cpu.flag_c());
}

#[test]
fn adc_zero_result() {
    let mut cpu = setup_cpu();
    load_program(&mut cpu, &[0x69, 0x01]);
    cpu.set_a(0xff);
    cpu.next();
    assert_eq!(cpu.a(), 0x00);
    assert!(cpu.flag_z());
    assert!(cpu.flag_c());
}

#[test]
fn adc_decimal() {
    let mut cpu = setup_cpu();
    load_program(&mut cpu, &[0x69, 0x03]);
    cpu.set_flag_d(true);
    cpu.set_a(0x19);
    cpu.next();
    assert_eq!(cpu.a(), 0x22);
    assert!(!cpu.flag_c());
}

#[test]
fn adc_decimal_carry_out() {
    let mut cpu = setup_cpu();
    load_program(&mut cpu, &[0x69, 0x02]);
    cpu.set_flag_d(true);
    cpu.set_a(0x99);
    cpu.next();
    // 99 + 2 = 101, kept modulo 100 with carry out
    assert_eq!(cpu.a(), 0x01);
    assert!(cpu.flag_c());
}

#[test]
fn adc_absolute() {
    let mut cpu = setup_cpu();
    load_program(&mut cpu, &[0x6d, 0x00, 0x03]); // adc $0300
    cpu.memory_mut().write(0x0300, 0x40);
    cpu.set_a(0x02);
    cpu.next();
    assert_eq!(cpu.a(), 0x42);
    assert_eq!(cpu.pc(), 0x0202);
}

// ========== SBC ==========

#[test]
fn sbc_immediate() {
    let mut cpu = setup_cpu();
    load_program(&mut cpu, &[0xe9, 0x03]); // sbc #$03
    cpu.set_a(0x05);
    cpu.set_flag_c(true);
    cpu.next();
    assert_eq!(cpu.a(), 0x02);
    assert!(cpu.flag_c());
}

#[test]
fn sbc_borrow() {
    let mut cpu = setup_cpu();
    load_program(&mut cpu, &[0xe9, 0x05]);
    cpu.set_a(0x03);
    cpu.set_flag_c(true);
    cpu.next();
    assert_eq!(cpu.a(), 0xfe);
    assert!(!cpu.flag_c());
    assert!(cpu.flag_n());
}

#[test]
fn sbc_with_carry_clear() {
    let mut cpu = setup_cpu();
    load_program(&mut cpu, &[0xe9, 0x03]);
    cpu.set_a(0x05);
    cpu.next();
    // carry clear borrows one more
    assert_eq!(cpu.a(), 0x01);
    assert!(cpu.flag_c());
}

#[test]
fn sbc_decimal() {
    let mut cpu = setup_cpu();
    load_program(&mut cpu, &[0xe9, 0x03]);
    cpu.set_flag_d(true);
    cpu.set_flag_c(true);
    cpu.set_a(0x22);
    cpu.next();
    assert_eq!(cpu.a(), 0x19);
    assert!(cpu.flag_c());
}

#[test]
fn sbc_decimal_borrow() {
    let mut cpu = setup_cpu();
    load_program(&mut cpu, &[0xe9, 0x05]);
    cpu.set_flag_d(true);
    cpu.set_flag_c(true);
    cpu.set_a(0x03);
    cpu.next();
    // 3 - 5 wraps to 98 with borrow out
    assert_eq!(cpu.a(), 0x98);
    assert!(!cpu.flag_c());
}

// ========== Logic ==========

#[test]
fn and_immediate() {
    let mut cpu = setup_cpu();
    load_program(&mut cpu, &[0x29, 0xf0]); // and #$f0
    cpu.set_a(0x3c);
    cpu.next();
    assert_eq!(cpu.a(), 0x30);
    assert!(!cpu.flag_z());
    assert!(!cpu.flag_n());
}

#[test]
fn and_zero_result() {
    let mut cpu = setup_cpu();
    load_program(&mut cpu, &[0x29, 0x0f]);
    cpu.set_a(0xf0);
    cpu.next();
    assert_eq!(cpu.a(), 0x00);
    assert!(cpu.flag_z());
}

#[test]
fn ora_immediate() {
    let mut cpu = setup_cpu();
    load_program(&mut cpu, &[0x09, 0x0f]); // ora #$0f
    cpu.set_a(0xf0);
    cpu.next();
    assert_eq!(cpu.a(), 0xff);
    assert!(cpu.flag_n());
}

#[test]
fn eor_immediate() {
    let mut cpu = setup_cpu();
    load_program(&mut cpu, &[0x49, 0xff]); // eor #$ff
    cpu.set_a(0x0f);
    cpu.next();
    assert_eq!(cpu.a(), 0xf0);
    assert!(cpu.flag_n());
}

#[test]
fn bit_copies_high_bits() {
    let mut cpu = setup_cpu();
    load_program(&mut cpu, &[0x24, 0x10]); // bit $10
    cpu.memory_mut().write(0x0010, 0xc0);
    cpu.set_a(0x0f);
    cpu.next();
    assert!(cpu.flag_z());
    assert!(cpu.flag_n());
    assert!(cpu.flag_v());
    assert_eq!(cpu.a(), 0x0f);
}

#[test]
fn bit_nonzero() {
    let mut cpu = setup_cpu();
    load_program(&mut cpu, &[0x2c, 0x00, 0x03]); // bit $0300
    cpu.memory_mut().write(0x0300, 0x01);
    cpu.set_a(0x01);
    cpu.next();
    assert!(!cpu.flag_z());
    assert!(!cpu.flag_n());
    assert!(!cpu.flag_v());
}

// ========== Compares ==========

#[test]
fn cmp_equal() {
    let mut cpu = setup_cpu();
    load_program(&mut cpu, &[0xc9, 0x10]); // cmp #$10
    cpu.set_a(0x10);
    cpu.next();
    assert!(cpu.flag_z());
    assert!(cpu.flag_c());
    assert!(!cpu.flag_n());
}

#[test]
fn cmp_less_than_borrows() {
    let mut cpu = setup_cpu();
    load_program(&mut cpu, &[0xc9, 0x20]);
    cpu.set_a(0x10);
    cpu.next();
    assert!(!cpu.flag_z());
    assert!(!cpu.flag_c());
    assert!(cpu.flag_n());
}

#[test]
fn cmp_greater_than() {
    let mut cpu = setup_cpu();
    load_program(&mut cpu, &[0xc9, 0x10]);
    cpu.set_a(0x20);
    cpu.next();
    assert!(!cpu.flag_z());
    assert!(cpu.flag_c());
}

#[test]
fn cpx_immediate() {
    let mut cpu = setup_cpu();
    load_program(&mut cpu, &[0xe0, 0x10]); // cpx #$10
    cpu.set_x(0x10);
    cpu.next();
    assert!(cpu.flag_z());
    assert!(cpu.flag_c());
}

#[test]
fn cpy_immediate() {
    let mut cpu = setup_cpu();
    load_program(&mut cpu, &[0xc0, 0x10]); // cpy #$10
    cpu.set_y(0x08);
    cpu.next();
    assert!(!cpu.flag_z());
    assert!(!cpu.flag_c());
}
