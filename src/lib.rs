//! # 6510 CPU Emulator Core
//!
//! An instruction-set emulator for the MOS Technology 6510 (the 6502
//! variant used in the Commodore 64), designed for use by a debugger or
//! monitor front end.
//!
//! The engine executes whole instructions atomically; it is not
//! cycle-accurate. It reproduces the documented flag semantics of the
//! processor, including packed-BCD decimal arithmetic, and delivers at
//! most one pending interrupt per instruction step.
//!
//! ## Quick Start
//!
//! ```rust
//! use lib6510::{Cpu, FlatMemory, MemoryBus};
//!
//! let mut mem = FlatMemory::new();
//! mem.import(0x0200, &[0xa9, 0x12]); // lda #$12
//!
//! let mut cpu = Cpu::new(mem);
//! cpu.set_pc(0x01ff);
//! cpu.next();
//!
//! assert_eq!(cpu.a(), 0x12);
//! ```
//!
//! ## Design
//!
//! - **One convention everywhere**: the program counter points one byte
//!   *before* the next fetch; every fetch pre-increments. Vectors are
//!   therefore loaded minus one and the pushed interrupt return address
//!   is `PC + 1`.
//! - **No fatal errors**: illegal opcodes are logged and skipped as
//!   one-byte no-ops, stack pointer arithmetic wraps, and unmapped
//!   reads return whatever the bus supplies. `next()` never fails.
//! - **Table-driven decode**: a static 256-entry table maps each opcode
//!   byte to a mnemonic and addressing mode; execution dispatches on
//!   the mnemonic.
//!
//! ## Modules
//!
//! - `cpu` - processor state and the fetch/decode/execute step
//! - `memory` - the `MemoryBus` trait and a flat 64KB implementation
//! - `opcodes` - the static opcode table
//! - `addressing` - addressing mode enumeration and operand lengths
//! - `disassembler` - one-instruction decode and text rendering

pub mod addressing;
pub mod bcd;
pub mod cpu;
pub mod disassembler;
pub mod memory;
pub mod opcodes;

// Instruction executors, dispatched from Cpu::next (not public API).
mod instructions;

pub use addressing::AddressingMode;
pub use cpu::{Cpu, IrqLine};
pub use disassembler::{Disassembler, Operation};
pub use memory::{FlatMemory, MemoryBus};
pub use opcodes::{Mnemonic, Opcode, OPCODE_TABLE};

/// Bottom of the fixed stack page ($0100-$01FF).
pub const ADDR_STACK: u16 = 0x0100;

/// Hardware reset vector; holds the address execution starts from.
pub const ADDR_RESET_VECTOR: u16 = 0xfffc;

/// Hardware IRQ/BRK vector; holds the interrupt service routine address.
pub const ADDR_IRQ_VECTOR: u16 = 0xfffe;
