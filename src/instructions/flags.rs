//! # Flag Instructions
//!
//! Status flag manipulation: CLC, SEC, CLI, SEI, CLD, SED, CLV. There
//! is no SEV; the overflow flag can only be set by arithmetic or BIT.

use crate::cpu::Cpu;
use crate::memory::MemoryBus;

pub(crate) fn execute_clc<M: MemoryBus>(cpu: &mut Cpu<M>) {
    cpu.flag_c = false;
}

pub(crate) fn execute_sec<M: MemoryBus>(cpu: &mut Cpu<M>) {
    cpu.flag_c = true;
}

pub(crate) fn execute_cli<M: MemoryBus>(cpu: &mut Cpu<M>) {
    cpu.flag_i = false;
}

pub(crate) fn execute_sei<M: MemoryBus>(cpu: &mut Cpu<M>) {
    cpu.flag_i = true;
}

pub(crate) fn execute_cld<M: MemoryBus>(cpu: &mut Cpu<M>) {
    cpu.flag_d = false;
}

pub(crate) fn execute_sed<M: MemoryBus>(cpu: &mut Cpu<M>) {
    cpu.flag_d = true;
}

pub(crate) fn execute_clv<M: MemoryBus>(cpu: &mut Cpu<M>) {
    cpu.flag_v = false;
}
