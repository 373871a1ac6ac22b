//! # Branch Instructions
//!
//! All eight conditional branches share one implementation; the
//! dispatcher evaluates the flag condition and passes the result in.
//! The displacement byte is consumed whether or not the branch is
//! taken.

use crate::cpu::Cpu;
use crate::memory::MemoryBus;

/// Executes a conditional branch (BCC, BCS, BEQ, BNE, BMI, BPL, BVC,
/// BVS).
///
/// The operand is a signed 8-bit displacement relative to the PC at the
/// displacement byte. With the PC convention used here that addition
/// lands exactly on the target address minus one.
///
/// # Arguments
///
/// * `cpu` - Mutable reference to the CPU
/// * `taken` - Result of the branch's flag condition
pub(crate) fn execute_branch<M: MemoryBus>(cpu: &mut Cpu<M>, taken: bool) {
    let displacement = cpu.fetch() as i8;
    if taken {
        cpu.pc = cpu.pc.wrapping_add(displacement as i16 as u16);
    }
}
