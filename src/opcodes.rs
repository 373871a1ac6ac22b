//! # Opcode Table
//!
//! The static 256-entry decode table: opcode byte to mnemonic and
//! addressing mode. It is the single source of truth shared by the
//! execution engine and the disassembler.
//!
//! Only the 151 documented NMOS opcodes are populated. The remaining
//! byte values decode to `None` and are treated by the engine as
//! one-byte no-ops (see `Cpu::next`); they never crash the machine.

use crate::addressing::AddressingMode;
use std::fmt;

/// Instruction mnemonic.
///
/// `Illegal` never appears in the opcode table; it is the decode result
/// the disassembler reports for unpopulated byte values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mnemonic {
    Illegal,
    Adc, // add with carry
    And, // bitwise and with accumulator
    Asl, // arithmetic shift left
    Bcc, // branch on carry clear
    Bcs, // branch on carry set
    Beq, // branch on equal
    Bit, // test bits
    Bmi, // branch on minus
    Bne, // branch on not equal
    Bpl, // branch on plus
    Brk, // break
    Bvc, // branch on overflow clear
    Bvs, // branch on overflow set
    Clc, // clear carry
    Cld, // clear decimal mode
    Cli, // clear interrupt disable
    Clv, // clear overflow
    Cmp, // compare accumulator
    Cpx, // compare x register
    Cpy, // compare y register
    Dec, // decrement memory
    Dex, // decrement x
    Dey, // decrement y
    Eor, // bitwise exclusive or
    Inc, // increment memory
    Inx, // increment x
    Iny, // increment y
    Jmp, // jump
    Jsr, // jump to subroutine
    Lda, // load accumulator
    Ldx, // load x register
    Ldy, // load y register
    Lsr, // logical shift right
    Nop, // no operation
    Ora, // bitwise or with accumulator
    Pha, // push accumulator
    Php, // push processor status
    Pla, // pull accumulator
    Plp, // pull processor status
    Rol, // rotate left
    Ror, // rotate right
    Rti, // return from interrupt
    Rts, // return from subroutine
    Sbc, // subtract with carry
    Sec, // set carry
    Sed, // set decimal mode
    Sei, // set interrupt disable
    Sta, // store accumulator
    Stx, // store x register
    Sty, // store y register
    Tax, // transfer a to x
    Tay, // transfer a to y
    Tsx, // transfer stack pointer to x
    Txa, // transfer x to a
    Txs, // transfer x to stack pointer
    Tya, // transfer y to a
}

impl Mnemonic {
    /// Lowercase assembly spelling, `"???"` for `Illegal`.
    pub const fn as_str(self) -> &'static str {
        use Mnemonic::*;
        match self {
            Illegal => "???",
            Adc => "adc",
            And => "and",
            Asl => "asl",
            Bcc => "bcc",
            Bcs => "bcs",
            Beq => "beq",
            Bit => "bit",
            Bmi => "bmi",
            Bne => "bne",
            Bpl => "bpl",
            Brk => "brk",
            Bvc => "bvc",
            Bvs => "bvs",
            Clc => "clc",
            Cld => "cld",
            Cli => "cli",
            Clv => "clv",
            Cmp => "cmp",
            Cpx => "cpx",
            Cpy => "cpy",
            Dec => "dec",
            Dex => "dex",
            Dey => "dey",
            Eor => "eor",
            Inc => "inc",
            Inx => "inx",
            Iny => "iny",
            Jmp => "jmp",
            Jsr => "jsr",
            Lda => "lda",
            Ldx => "ldx",
            Ldy => "ldy",
            Lsr => "lsr",
            Nop => "nop",
            Ora => "ora",
            Pha => "pha",
            Php => "php",
            Pla => "pla",
            Plp => "plp",
            Rol => "rol",
            Ror => "ror",
            Rti => "rti",
            Rts => "rts",
            Sbc => "sbc",
            Sec => "sec",
            Sed => "sed",
            Sei => "sei",
            Sta => "sta",
            Stx => "stx",
            Sty => "sty",
            Tax => "tax",
            Tay => "tay",
            Tsx => "tsx",
            Txa => "txa",
            Txs => "txs",
            Tya => "tya",
        }
    }
}

impl fmt::Display for Mnemonic {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One decode-table entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Opcode {
    pub mnemonic: Mnemonic,
    pub mode: AddressingMode,
}

const fn op(mnemonic: Mnemonic, mode: AddressingMode) -> Option<Opcode> {
    Some(Opcode { mnemonic, mode })
}

const fn build_table() -> [Option<Opcode>; 256] {
    use AddressingMode::*;
    use Mnemonic::*;

    let mut t: [Option<Opcode>; 256] = [None; 256];

    t[0x00] = op(Brk, Implied);
    t[0x01] = op(Ora, IndirectX);
    t[0x05] = op(Ora, ZeroPage);
    t[0x06] = op(Asl, ZeroPage);
    t[0x08] = op(Php, Implied);
    t[0x09] = op(Ora, Immediate);
    t[0x0a] = op(Asl, Accumulator);
    t[0x0d] = op(Ora, Absolute);
    t[0x0e] = op(Asl, Absolute);

    t[0x10] = op(Bpl, Relative);
    t[0x11] = op(Ora, IndirectY);
    t[0x15] = op(Ora, ZeroPageX);
    t[0x16] = op(Asl, ZeroPageX);
    t[0x18] = op(Clc, Implied);
    t[0x19] = op(Ora, AbsoluteY);
    t[0x1d] = op(Ora, AbsoluteX);
    t[0x1e] = op(Asl, AbsoluteX);

    t[0x20] = op(Jsr, Absolute);
    t[0x21] = op(And, IndirectX);
    t[0x24] = op(Bit, ZeroPage);
    t[0x25] = op(And, ZeroPage);
    t[0x26] = op(Rol, ZeroPage);
    t[0x28] = op(Plp, Implied);
    t[0x29] = op(And, Immediate);
    t[0x2a] = op(Rol, Accumulator);
    t[0x2c] = op(Bit, Absolute);
    t[0x2d] = op(And, Absolute);
    t[0x2e] = op(Rol, Absolute);

    t[0x30] = op(Bmi, Relative);
    t[0x31] = op(And, IndirectY);
    t[0x35] = op(And, ZeroPageX);
    t[0x36] = op(Rol, ZeroPageX);
    t[0x38] = op(Sec, Implied);
    t[0x39] = op(And, AbsoluteY);
    t[0x3d] = op(And, AbsoluteX);
    t[0x3e] = op(Rol, AbsoluteX);

    t[0x40] = op(Rti, Implied);
    t[0x41] = op(Eor, IndirectX);
    t[0x45] = op(Eor, ZeroPage);
    t[0x46] = op(Lsr, ZeroPage);
    t[0x48] = op(Pha, Implied);
    t[0x49] = op(Eor, Immediate);
    t[0x4a] = op(Lsr, Accumulator);
    t[0x4c] = op(Jmp, Absolute);
    t[0x4d] = op(Eor, Absolute);
    t[0x4e] = op(Lsr, Absolute);

    t[0x50] = op(Bvc, Relative);
    t[0x51] = op(Eor, IndirectY);
    t[0x55] = op(Eor, ZeroPageX);
    t[0x56] = op(Lsr, ZeroPageX);
    t[0x58] = op(Cli, Implied);
    t[0x59] = op(Eor, AbsoluteY);
    t[0x5d] = op(Eor, AbsoluteX);
    t[0x5e] = op(Lsr, AbsoluteX);

    t[0x60] = op(Rts, Implied);
    t[0x61] = op(Adc, IndirectX);
    t[0x65] = op(Adc, ZeroPage);
    t[0x66] = op(Ror, ZeroPage);
    t[0x68] = op(Pla, Implied);
    t[0x69] = op(Adc, Immediate);
    t[0x6a] = op(Ror, Accumulator);
    t[0x6c] = op(Jmp, Indirect);
    t[0x6d] = op(Adc, Absolute);
    t[0x6e] = op(Ror, Absolute);

    t[0x70] = op(Bvs, Relative);
    t[0x71] = op(Adc, IndirectY);
    t[0x75] = op(Adc, ZeroPageX);
    t[0x76] = op(Ror, ZeroPageX);
    t[0x78] = op(Sei, Implied);
    t[0x79] = op(Adc, AbsoluteY);
    t[0x7d] = op(Adc, AbsoluteX);
    t[0x7e] = op(Ror, AbsoluteX);

    t[0x81] = op(Sta, IndirectX);
    t[0x84] = op(Sty, ZeroPage);
    t[0x85] = op(Sta, ZeroPage);
    t[0x86] = op(Stx, ZeroPage);
    t[0x88] = op(Dey, Implied);
    t[0x8a] = op(Txa, Implied);
    t[0x8c] = op(Sty, Absolute);
    t[0x8d] = op(Sta, Absolute);
    t[0x8e] = op(Stx, Absolute);

    t[0x90] = op(Bcc, Relative);
    t[0x91] = op(Sta, IndirectY);
    t[0x94] = op(Sty, ZeroPageX);
    t[0x95] = op(Sta, ZeroPageX);
    t[0x96] = op(Stx, ZeroPageY);
    t[0x98] = op(Tya, Implied);
    t[0x99] = op(Sta, AbsoluteY);
    t[0x9a] = op(Txs, Implied);
    t[0x9d] = op(Sta, AbsoluteX);

    t[0xa0] = op(Ldy, Immediate);
    t[0xa1] = op(Lda, IndirectX);
    t[0xa2] = op(Ldx, Immediate);
    t[0xa4] = op(Ldy, ZeroPage);
    t[0xa5] = op(Lda, ZeroPage);
    t[0xa6] = op(Ldx, ZeroPage);
    t[0xa8] = op(Tay, Implied);
    t[0xa9] = op(Lda, Immediate);
    t[0xaa] = op(Tax, Implied);
    t[0xac] = op(Ldy, Absolute);
    t[0xad] = op(Lda, Absolute);
    t[0xae] = op(Ldx, Absolute);

    t[0xb0] = op(Bcs, Relative);
    t[0xb1] = op(Lda, IndirectY);
    t[0xb4] = op(Ldy, ZeroPageX);
    t[0xb5] = op(Lda, ZeroPageX);
    t[0xb6] = op(Ldx, ZeroPageY);
    t[0xb8] = op(Clv, Implied);
    t[0xb9] = op(Lda, AbsoluteY);
    t[0xba] = op(Tsx, Implied);
    t[0xbc] = op(Ldy, AbsoluteX);
    t[0xbd] = op(Lda, AbsoluteX);
    t[0xbe] = op(Ldx, AbsoluteY);

    t[0xc0] = op(Cpy, Immediate);
    t[0xc1] = op(Cmp, IndirectX);
    t[0xc4] = op(Cpy, ZeroPage);
    t[0xc5] = op(Cmp, ZeroPage);
    t[0xc6] = op(Dec, ZeroPage);
    t[0xc8] = op(Iny, Implied);
    t[0xc9] = op(Cmp, Immediate);
    t[0xca] = op(Dex, Implied);
    t[0xcc] = op(Cpy, Absolute);
    t[0xcd] = op(Cmp, Absolute);
    t[0xce] = op(Dec, Absolute);

    t[0xd0] = op(Bne, Relative);
    t[0xd1] = op(Cmp, IndirectY);
    t[0xd5] = op(Cmp, ZeroPageX);
    t[0xd6] = op(Dec, ZeroPageX);
    t[0xd8] = op(Cld, Implied);
    t[0xd9] = op(Cmp, AbsoluteY);
    t[0xdd] = op(Cmp, AbsoluteX);
    t[0xde] = op(Dec, AbsoluteX);

    t[0xe0] = op(Cpx, Immediate);
    t[0xe1] = op(Sbc, IndirectX);
    t[0xe4] = op(Cpx, ZeroPage);
    t[0xe5] = op(Sbc, ZeroPage);
    t[0xe6] = op(Inc, ZeroPage);
    t[0xe8] = op(Inx, Implied);
    t[0xe9] = op(Sbc, Immediate);
    t[0xea] = op(Nop, Implied);
    t[0xec] = op(Cpx, Absolute);
    t[0xed] = op(Sbc, Absolute);
    t[0xee] = op(Inc, Absolute);

    t[0xf0] = op(Beq, Relative);
    t[0xf1] = op(Sbc, IndirectY);
    t[0xf5] = op(Sbc, ZeroPageX);
    t[0xf6] = op(Inc, ZeroPageX);
    t[0xf8] = op(Sed, Implied);
    t[0xf9] = op(Sbc, AbsoluteY);
    t[0xfd] = op(Sbc, AbsoluteX);
    t[0xfe] = op(Inc, AbsoluteX);

    t
}

/// Decode table indexed by opcode byte. `None` marks an
/// undocumented/illegal opcode.
pub static OPCODE_TABLE: [Option<Opcode>; 256] = build_table();

#[cfg(test)]
mod tests {
    use super::*;
    use crate::addressing::AddressingMode;

    #[test]
    fn documented_count() {
        let n = OPCODE_TABLE.iter().filter(|e| e.is_some()).count();
        assert_eq!(n, 151);
    }

    #[test]
    fn spot_checks() {
        let lda = OPCODE_TABLE[0xa9].unwrap();
        assert_eq!(lda.mnemonic, Mnemonic::Lda);
        assert_eq!(lda.mode, AddressingMode::Immediate);

        let jmp = OPCODE_TABLE[0x6c].unwrap();
        assert_eq!(jmp.mnemonic, Mnemonic::Jmp);
        assert_eq!(jmp.mode, AddressingMode::Indirect);

        assert!(OPCODE_TABLE[0x02].is_none());
    }

    #[test]
    fn mnemonic_strings() {
        assert_eq!(Mnemonic::Lda.to_string(), "lda");
        assert_eq!(Mnemonic::Illegal.to_string(), "???");
    }
}
