//! Listing formatter for disassembled operations.
//!
//! One line per instruction, fixed columns so listings align:
//!
//! ```text
//! $0200: a9 12    lda #$12
//! $0202: 8d 00 d0 sta $d000
//! $0205: ea       nop
//! ```

use std::fmt;

use crate::addressing::AddressingMode;
use crate::disassembler::Operation;

fn operand_text(mode: AddressingMode, operand: u16) -> Option<String> {
    use AddressingMode::*;
    let text = match mode {
        Absolute => format!("${:04x}", operand),
        AbsoluteX => format!("${:04x},x", operand),
        AbsoluteY => format!("${:04x},y", operand),
        Accumulator => "a".to_string(),
        Immediate => format!("#${:02x}", operand),
        Indirect => format!("(${:04x})", operand),
        IndirectX => format!("(${:02x},x)", operand),
        IndirectY => format!("(${:02x}),y", operand),
        Relative => format!("${:04x}", operand),
        ZeroPage => format!("${:02x}", operand),
        ZeroPageX => format!("${:02x},x", operand),
        ZeroPageY => format!("${:02x},y", operand),
        Implied => return None,
    };
    Some(text)
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let hex = |i: usize| match self.bytes.get(i) {
            Some(b) => format!("{:02x}", b),
            None => "  ".to_string(),
        };
        write!(
            f,
            "${:04x}: {} {} {} {}",
            self.address,
            hex(0),
            hex(1),
            hex(2),
            self.mnemonic
        )?;
        if let Some(operand) = operand_text(self.mode, self.operand) {
            write!(f, " {}", operand)?;
        }
        Ok(())
    }
}
