//! Instruction decoder for the 6502 disassembler

use crate::addressing::AddressingMode;
use crate::disassembler::Operation;
use crate::memory::MemoryBus;
use crate::opcodes::{Mnemonic, OPCODE_TABLE};

/// Decodes one instruction, advancing `pc` over its bytes. Like the
/// CPU's fetch, `pc` points one byte before the next read.
pub(crate) fn decode<M: MemoryBus>(mem: &M, pc: &mut u16) -> Operation {
    *pc = pc.wrapping_add(1);
    let address = *pc;
    let opcode = mem.read(address);

    let op = match OPCODE_TABLE[opcode as usize] {
        Some(op) => op,
        None => {
            return Operation {
                address,
                mnemonic: Mnemonic::Illegal,
                mode: AddressingMode::Implied,
                operand: opcode as u16,
                bytes: vec![opcode],
            }
        }
    };

    let mut bytes = vec![opcode];
    let mut operand = 0u16;
    match op.mode.operand_length() {
        1 => {
            *pc = pc.wrapping_add(1);
            let b = mem.read(*pc);
            operand = b as u16;
            bytes.push(b);
        }
        2 => {
            *pc = pc.wrapping_add(1);
            let lo = mem.read(*pc);
            *pc = pc.wrapping_add(1);
            let hi = mem.read(*pc);
            operand = (hi as u16) << 8 | lo as u16;
            bytes.push(lo);
            bytes.push(hi);
        }
        _ => {}
    }

    // Branch displacements read better as their absolute target.
    if op.mode == AddressingMode::Relative {
        let displacement = operand as u8 as i8;
        operand = address
            .wrapping_add(2)
            .wrapping_add(displacement as i16 as u16);
    }

    Operation {
        address,
        mnemonic: op.mnemonic,
        mode: op.mode,
        operand,
        bytes,
    }
}
