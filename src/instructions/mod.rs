//! # 6502 Instruction Implementations
//!
//! This module contains the implementations of all documented 6502
//! instructions, organized by category. Each instruction is a
//! standalone function taking a mutable reference to the CPU and, where
//! relevant, the addressing mode from the opcode table entry.
//!
//! ## Categories
//!
//! - **alu**: Arithmetic and logic operations (ADC, SBC, AND, ORA, EOR, CMP, CPX, CPY, BIT)
//! - **branches**: Conditional branch instructions (BCC, BCS, BEQ, BNE, BMI, BPL, BVC, BVS)
//! - **shifts**: Shift and rotate operations (ASL, LSR, ROL, ROR)
//! - **load_store**: Load and store instructions (LDA, LDX, LDY, STA, STX, STY)
//! - **inc_dec**: Increment and decrement operations (INC, DEC, INX, INY, DEX, DEY)
//! - **control**: Control flow instructions (JMP, JSR, RTS, RTI, BRK, NOP)
//! - **stack**: Stack operations (PHA, PHP, PLA, PLP)
//! - **flags**: Status flag manipulation (CLC, SEC, CLI, SEI, CLD, SED, CLV)
//! - **transfer**: Register transfer operations (TAX, TAY, TXA, TYA, TSX, TXS)

pub mod alu;
pub mod branches;
pub mod control;
pub mod flags;
pub mod inc_dec;
pub mod load_store;
pub mod shifts;
pub mod stack;
pub mod transfer;

use crate::cpu::Cpu;
use crate::memory::MemoryBus;
use crate::opcodes::{Mnemonic, Opcode};

/// Dispatches a decoded opcode to its implementation. The opcode byte
/// has already been fetched; the PC sits on it, and each implementation
/// consumes its own operand bytes.
pub(crate) fn execute<M: MemoryBus>(cpu: &mut Cpu<M>, op: Opcode) {
    use Mnemonic::*;
    match op.mnemonic {
        Adc => alu::execute_adc(cpu, op.mode),
        And => alu::execute_and(cpu, op.mode),
        Asl => shifts::execute_asl(cpu, op.mode),
        Bcc => branches::execute_branch(cpu, !cpu.flag_c),
        Bcs => branches::execute_branch(cpu, cpu.flag_c),
        Beq => branches::execute_branch(cpu, cpu.flag_z),
        Bit => alu::execute_bit(cpu, op.mode),
        Bmi => branches::execute_branch(cpu, cpu.flag_n),
        Bne => branches::execute_branch(cpu, !cpu.flag_z),
        Bpl => branches::execute_branch(cpu, !cpu.flag_n),
        Brk => control::execute_brk(cpu),
        Bvc => branches::execute_branch(cpu, !cpu.flag_v),
        Bvs => branches::execute_branch(cpu, cpu.flag_v),
        Clc => flags::execute_clc(cpu),
        Cld => flags::execute_cld(cpu),
        Cli => flags::execute_cli(cpu),
        Clv => flags::execute_clv(cpu),
        Cmp => alu::execute_cmp(cpu, op.mode),
        Cpx => alu::execute_cpx(cpu, op.mode),
        Cpy => alu::execute_cpy(cpu, op.mode),
        Dec => inc_dec::execute_dec(cpu, op.mode),
        Dex => inc_dec::execute_dex(cpu),
        Dey => inc_dec::execute_dey(cpu),
        Eor => alu::execute_eor(cpu, op.mode),
        Inc => inc_dec::execute_inc(cpu, op.mode),
        Inx => inc_dec::execute_inx(cpu),
        Iny => inc_dec::execute_iny(cpu),
        Jmp => control::execute_jmp(cpu, op.mode),
        Jsr => control::execute_jsr(cpu),
        Lda => load_store::execute_lda(cpu, op.mode),
        Ldx => load_store::execute_ldx(cpu, op.mode),
        Ldy => load_store::execute_ldy(cpu, op.mode),
        Lsr => shifts::execute_lsr(cpu, op.mode),
        Nop => (),
        Ora => alu::execute_ora(cpu, op.mode),
        Pha => stack::execute_pha(cpu),
        Php => stack::execute_php(cpu),
        Pla => stack::execute_pla(cpu),
        Plp => stack::execute_plp(cpu),
        Rol => shifts::execute_rol(cpu, op.mode),
        Ror => shifts::execute_ror(cpu, op.mode),
        Rti => control::execute_rti(cpu),
        Rts => control::execute_rts(cpu),
        Sbc => alu::execute_sbc(cpu, op.mode),
        Sec => flags::execute_sec(cpu),
        Sed => flags::execute_sed(cpu),
        Sei => flags::execute_sei(cpu),
        Sta => load_store::execute_sta(cpu, op.mode),
        Stx => load_store::execute_stx(cpu, op.mode),
        Sty => load_store::execute_sty(cpu, op.mode),
        Tax => transfer::execute_tax(cpu),
        Tay => transfer::execute_tay(cpu),
        Tsx => transfer::execute_tsx(cpu),
        Txa => transfer::execute_txa(cpu),
        Txs => transfer::execute_txs(cpu),
        Tya => transfer::execute_tya(cpu),
        Illegal => (),
    }
}
