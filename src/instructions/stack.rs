//! # Stack Instructions
//!
//! PHA, PHP, PLA, PLP. PHP always pushes with the Break bit set, a
//! quirk shared with BRK; PLP restores every flag except B.

use crate::cpu::Cpu;
use crate::memory::MemoryBus;

pub(crate) fn execute_pha<M: MemoryBus>(cpu: &mut Cpu<M>) {
    cpu.push(cpu.a);
}

pub(crate) fn execute_php<M: MemoryBus>(cpu: &mut Cpu<M>) {
    // https://wiki.nesdev.com/w/index.php/Status_flags
    let status = cpu.status() | 1 << 4;
    cpu.push(status);
}

pub(crate) fn execute_pla<M: MemoryBus>(cpu: &mut Cpu<M>) {
    cpu.a = cpu.pull();
    cpu.set_flags_nz(cpu.a);
}

pub(crate) fn execute_plp<M: MemoryBus>(cpu: &mut Cpu<M>) {
    let status = cpu.pull();
    cpu.set_status(status);
}
