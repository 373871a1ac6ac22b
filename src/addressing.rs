//! # Addressing Modes
//!
//! The thirteen addressing modes of the 6510. Each mode determines how
//! many operand bytes follow the opcode and how the effective address
//! or value is derived from them. The operand-length table here is
//! shared between the execution engine and the disassembler.

/// 6510 addressing mode enumeration.
///
/// # Operand sizes
///
/// - **0 bytes**: `Implied`, `Accumulator`
/// - **1 byte**: `Immediate`, `ZeroPage`, `ZeroPageX`, `ZeroPageY`,
///   `Relative`, `IndirectX`, `IndirectY`
/// - **2 bytes**: `Absolute`, `AbsoluteX`, `AbsoluteY`, `Indirect`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AddressingMode {
    /// Full 16-bit address, e.g. `jmp $1234`.
    Absolute,
    /// 16-bit address indexed by X, e.g. `lda $1234,x`.
    AbsoluteX,
    /// 16-bit address indexed by Y, e.g. `lda $1234,y`.
    AbsoluteY,
    /// Operates on the accumulator register, e.g. `asl a`.
    Accumulator,
    /// 8-bit constant embedded in the instruction, e.g. `lda #$10`.
    Immediate,
    /// No operand; the operation is implied, e.g. `clc`, `rts`.
    Implied,
    /// 16-bit pointer dereferenced for the jump target, e.g.
    /// `jmp ($fffc)`. Used only by the jump instruction.
    Indirect,
    /// Pointer in page zero at `(operand + X) mod 256`, e.g.
    /// `lda ($40,x)`.
    IndirectX,
    /// Pointer in page zero at `operand`, with Y added to the loaded
    /// pointer, e.g. `lda ($40),y`.
    IndirectY,
    /// Signed 8-bit displacement for branches, taken relative to the
    /// address after the full instruction.
    Relative,
    /// 8-bit address in page zero, e.g. `lda $80`.
    ZeroPage,
    /// Page-zero address indexed by X, wrapping within the page.
    ZeroPageX,
    /// Page-zero address indexed by Y, wrapping within the page.
    ZeroPageY,
}

impl AddressingMode {
    /// Number of operand bytes that follow the opcode.
    pub const fn operand_length(self) -> u8 {
        match self {
            AddressingMode::Accumulator | AddressingMode::Implied => 0,
            AddressingMode::Immediate
            | AddressingMode::IndirectX
            | AddressingMode::IndirectY
            | AddressingMode::Relative
            | AddressingMode::ZeroPage
            | AddressingMode::ZeroPageX
            | AddressingMode::ZeroPageY => 1,
            AddressingMode::Absolute
            | AddressingMode::AbsoluteX
            | AddressingMode::AbsoluteY
            | AddressingMode::Indirect => 2,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::AddressingMode::*;

    #[test]
    fn operand_lengths() {
        assert_eq!(Implied.operand_length(), 0);
        assert_eq!(Accumulator.operand_length(), 0);
        assert_eq!(Immediate.operand_length(), 1);
        assert_eq!(ZeroPage.operand_length(), 1);
        assert_eq!(ZeroPageX.operand_length(), 1);
        assert_eq!(ZeroPageY.operand_length(), 1);
        assert_eq!(Relative.operand_length(), 1);
        assert_eq!(IndirectX.operand_length(), 1);
        assert_eq!(IndirectY.operand_length(), 1);
        assert_eq!(Absolute.operand_length(), 2);
        assert_eq!(AbsoluteX.operand_length(), 2);
        assert_eq!(AbsoluteY.operand_length(), 2);
        assert_eq!(Indirect.operand_length(), 2);
    }
}
