//! # 6502 Disassembler Module
//!
//! Converts binary machine code back into assembly listings, one
//! instruction at a time. The disassembler reads through a `MemoryBus`
//! with the same pre-increment program counter convention the CPU uses,
//! so a tracing monitor can point it at the CPU's PC and decode the
//! instruction about to execute.

pub mod decoder;
pub mod formatter;

use crate::addressing::AddressingMode;
use crate::memory::MemoryBus;
use crate::opcodes::Mnemonic;

/// A single disassembled instruction.
///
/// For relative-mode branches `operand` holds the resolved absolute
/// target, not the raw displacement byte. For an illegal opcode the
/// mnemonic is [`Mnemonic::Illegal`] and `bytes` holds the single
/// undecodable byte.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Operation {
    /// Memory address of the opcode byte
    pub address: u16,

    /// Instruction mnemonic
    pub mnemonic: Mnemonic,

    /// Addressing mode used by this instruction
    pub mode: AddressingMode,

    /// Operand value, zero-extended to 16 bits
    pub operand: u16,

    /// Raw instruction bytes, opcode first (1-3 bytes)
    pub bytes: Vec<u8>,
}

/// Decodes successive instructions from a memory bus.
///
/// # Examples
///
/// ```
/// use lib6510::{Disassembler, FlatMemory, MemoryBus};
///
/// let mut mem = FlatMemory::new();
/// mem.import(0x0200, &[0xa9, 0x12]); // lda #$12
/// let mut dasm = Disassembler::new(&mem);
/// dasm.set_pc(0x0200);
/// assert_eq!(dasm.next().to_string(), "$0200: a9 12    lda #$12");
/// ```
pub struct Disassembler<'a, M: MemoryBus> {
    pc: u16,
    mem: &'a M,
}

impl<'a, M: MemoryBus> Disassembler<'a, M> {
    /// Creates a disassembler positioned so the first [`next`] call
    /// decodes address zero.
    ///
    /// [`next`]: Disassembler::next
    pub fn new(mem: &'a M) -> Self {
        Self { pc: 0xffff, mem }
    }

    /// Positions the disassembler so the next instruction is decoded at
    /// `addr`.
    pub fn set_pc(&mut self, addr: u16) {
        self.pc = addr.wrapping_sub(1);
    }

    /// Address the next [`next`] call will decode at.
    ///
    /// [`next`]: Disassembler::next
    pub fn pc(&self) -> u16 {
        self.pc.wrapping_add(1)
    }

    /// Decodes one instruction and advances past it. An opcode byte
    /// with no table entry decodes as a one-byte illegal operation.
    pub fn next(&mut self) -> Operation {
        decoder::decode(self.mem, &mut self.pc)
    }
}
