//! # CPU State and Execution
//!
//! The `Cpu` struct holds the 6510 register file and flag set and runs
//! the fetch/decode/execute loop, one whole instruction per call to
//! [`Cpu::next`]. It is generic over the memory system via the
//! `MemoryBus` trait so the same core drives flat test RAM and the
//! bank-switched C64 bus alike.
//!
//! ## Program counter convention
//!
//! The PC always points one byte *before* the next byte to fetch;
//! `fetch` increments first and reads second. Everything else follows
//! from that one rule: `reset` loads the reset vector minus one, an
//! interrupt pushes `PC + 1` as the return address and enters the
//! service routine at the vector minus one, and a taken branch adds the
//! displacement directly to the PC sitting at the last operand byte.
//!
//! ## Interrupts
//!
//! [`IrqLine`] is a cloneable handle around an atomic flag. Devices on
//! other threads may call [`IrqLine::raise`] at any time without
//! blocking; repeated raises coalesce into a single pending request.
//! The CPU observes the line exactly once per instruction, at the end
//! of `next`, and only consumes the request when the interrupt-disable
//! flag allows delivery — a masked interrupt stays pending.

use std::fmt;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use crate::addressing::AddressingMode;
use crate::instructions;
use crate::memory::MemoryBus;
use crate::opcodes::OPCODE_TABLE;
use crate::{ADDR_IRQ_VECTOR, ADDR_RESET_VECTOR, ADDR_STACK};

const FLAG_C: u8 = 1 << 0;
const FLAG_Z: u8 = 1 << 1;
const FLAG_I: u8 = 1 << 2;
const FLAG_D: u8 = 1 << 3;
const FLAG_B: u8 = 1 << 4;
const FLAG_5: u8 = 1 << 5;
const FLAG_V: u8 = 1 << 6;
const FLAG_N: u8 = 1 << 7;

/// Shared interrupt-request line.
///
/// Cloning yields another handle to the same line. `raise` is safe to
/// call from any thread and never blocks; duplicate raises collapse to
/// a single pending interrupt, which the CPU drains at the next
/// instruction boundary where the interrupt-disable flag is clear.
#[derive(Clone, Debug, Default)]
pub struct IrqLine(Arc<AtomicBool>);

impl IrqLine {
    /// Signals an interrupt request.
    pub fn raise(&self) {
        self.0.store(true, Ordering::Release);
    }

    /// True while a request is latched and not yet delivered.
    pub fn pending(&self) -> bool {
        self.0.load(Ordering::Acquire)
    }

    pub(crate) fn acknowledge(&self) {
        self.0.store(false, Ordering::Release);
    }
}

/// Where a resolved operand lives, replacing the store-back closures a
/// garbage-collected implementation would use: instructions load and
/// store through the tag instead of capturing mutable state.
#[derive(Debug, Clone, Copy)]
pub(crate) enum Target {
    Accumulator,
    Memory(u16),
}

/// MOS 6510 processor state and execution context.
pub struct Cpu<M: MemoryBus> {
    pub(crate) pc: u16,
    pub(crate) a: u8,
    pub(crate) x: u8,
    pub(crate) y: u8,
    pub(crate) sp: u8,

    pub(crate) flag_c: bool,
    pub(crate) flag_z: bool,
    pub(crate) flag_i: bool,
    pub(crate) flag_d: bool,
    pub(crate) flag_b: bool,
    pub(crate) flag_v: bool,
    pub(crate) flag_n: bool,

    /// When set, BRK stops after raising the Break flag instead of
    /// running the interrupt sequence. Used by monitors to regain
    /// control at a software breakpoint.
    pub(crate) stop_on_break: bool,

    pub(crate) in_isr: bool,
    irq: IrqLine,

    pub(crate) mem: M,
}

impl<M: MemoryBus> Cpu<M> {
    /// Creates a CPU owning `mem`, with all registers cleared, the
    /// stack pointer at the top of the stack page, and no flags set.
    /// Call [`Cpu::reset`] to start execution at the reset vector.
    pub fn new(mem: M) -> Self {
        Self {
            pc: 0,
            a: 0,
            x: 0,
            y: 0,
            sp: 0xff,
            flag_c: false,
            flag_z: false,
            flag_i: false,
            flag_d: false,
            flag_b: false,
            flag_v: false,
            flag_n: false,
            stop_on_break: false,
            in_isr: false,
            irq: IrqLine::default(),
            mem,
        }
    }

    /// Loads the PC from the reset vector. The vector holds the actual
    /// start address, so the PC is set one byte behind it.
    pub fn reset(&mut self) {
        self.pc = self.mem.read16(ADDR_RESET_VECTOR).wrapping_sub(1);
    }

    /// Executes one instruction, then delivers at most one pending
    /// interrupt.
    ///
    /// An opcode byte with no table entry is reported through the `log`
    /// facade and skipped as a one-byte no-op; no operand bytes are
    /// consumed and the engine carries on. This call never fails.
    pub fn next(&mut self) {
        let opcode = self.fetch();
        match OPCODE_TABLE[opcode as usize] {
            Some(op) => instructions::execute(self, op),
            None => log::warn!("${:04x}: illegal opcode: ${:02x}", self.pc, opcode),
        }
        if opcode == 0x40 {
            // rti: leaving the interrupt service routine
            self.in_isr = false;
        }
        if self.irq.pending() && !self.flag_i {
            self.irq.acknowledge();
            // Unlike RTS, the return address pushed for an interrupt is
            // the actual next instruction address, not address-1.
            self.push16(self.pc.wrapping_add(1));
            self.push(self.status());
            self.pc = self.mem.read16(ADDR_IRQ_VECTOR).wrapping_sub(1);
            self.in_isr = true;
        }
    }

    /// A handle for raising interrupts, safe to hand to devices on
    /// other threads.
    pub fn irq_line(&self) -> IrqLine {
        self.irq.clone()
    }

    /// Raises an interrupt request on this CPU's line.
    pub fn raise_irq(&self) {
        self.irq.raise();
    }

    // ---- fetch and stack primitives ------------------------------------

    pub(crate) fn fetch(&mut self) -> u8 {
        self.pc = self.pc.wrapping_add(1);
        self.mem.read(self.pc)
    }

    pub(crate) fn fetch16(&mut self) -> u16 {
        let lo = self.fetch() as u16;
        let hi = self.fetch() as u16;
        hi << 8 | lo
    }

    pub fn push(&mut self, value: u8) {
        self.mem.write(ADDR_STACK + self.sp as u16, value);
        self.sp = self.sp.wrapping_sub(1);
    }

    pub fn push16(&mut self, value: u16) {
        self.push((value >> 8) as u8);
        self.push(value as u8);
    }

    pub fn pull(&mut self) -> u8 {
        self.sp = self.sp.wrapping_add(1);
        self.mem.read(ADDR_STACK + self.sp as u16)
    }

    pub fn pull16(&mut self) -> u16 {
        let lo = self.pull() as u16;
        let hi = self.pull() as u16;
        hi << 8 | lo
    }

    // ---- operand resolution --------------------------------------------

    /// Consumes the operand bytes for `mode` and resolves the location
    /// the instruction acts on.
    pub(crate) fn resolve(&mut self, mode: AddressingMode) -> Target {
        use AddressingMode::*;
        match mode {
            Accumulator => Target::Accumulator,
            ZeroPage => Target::Memory(self.fetch() as u16),
            ZeroPageX => {
                let addr = self.fetch().wrapping_add(self.x);
                Target::Memory(addr as u16)
            }
            ZeroPageY => {
                let addr = self.fetch().wrapping_add(self.y);
                Target::Memory(addr as u16)
            }
            Absolute => Target::Memory(self.fetch16()),
            AbsoluteX => Target::Memory(self.fetch16().wrapping_add(self.x as u16)),
            AbsoluteY => Target::Memory(self.fetch16().wrapping_add(self.y as u16)),
            IndirectX => {
                let zp = self.fetch().wrapping_add(self.x);
                Target::Memory(self.mem.read16(zp as u16))
            }
            IndirectY => {
                let zp = self.fetch();
                let base = self.mem.read16(zp as u16);
                Target::Memory(base.wrapping_add(self.y as u16))
            }
            // The opcode table never pairs these modes with an
            // instruction that resolves a location.
            Implied | Immediate | Relative | Indirect => Target::Accumulator,
        }
    }

    pub(crate) fn load_target(&mut self, target: Target) -> u8 {
        match target {
            Target::Accumulator => self.a,
            Target::Memory(addr) => self.mem.read(addr),
        }
    }

    pub(crate) fn store_target(&mut self, target: Target, value: u8) {
        match target {
            Target::Accumulator => self.a = value,
            Target::Memory(addr) => self.mem.write(addr, value),
        }
    }

    /// Fetches the operand value for a read-only instruction.
    pub(crate) fn operand(&mut self, mode: AddressingMode) -> u8 {
        if mode == AddressingMode::Immediate {
            return self.fetch();
        }
        let target = self.resolve(mode);
        self.load_target(target)
    }

    /// Fetches the operand value along with its location, for
    /// read-modify-write instructions.
    pub(crate) fn operand_target(&mut self, mode: AddressingMode) -> (u8, Target) {
        let target = self.resolve(mode);
        (self.load_target(target), target)
    }

    pub(crate) fn set_flags_nz(&mut self, value: u8) {
        self.flag_z = value == 0;
        self.flag_n = value & (1 << 7) != 0;
    }

    // ---- status register -----------------------------------------------

    /// Packs the flags into the status register byte (NV-BDIZC). Bit 5
    /// always reads as 1.
    pub fn status(&self) -> u8 {
        let bit = |v: bool, mask: u8| if v { mask } else { 0 };
        bit(self.flag_c, FLAG_C)
            | bit(self.flag_z, FLAG_Z)
            | bit(self.flag_i, FLAG_I)
            | bit(self.flag_d, FLAG_D)
            | bit(self.flag_b, FLAG_B)
            | FLAG_5
            | bit(self.flag_v, FLAG_V)
            | bit(self.flag_n, FLAG_N)
    }

    /// Unpacks a status register byte into the flags. The Break flag
    /// and bit 5 are not stored; B changes only through BRK or the
    /// explicit setter.
    pub fn set_status(&mut self, value: u8) {
        self.flag_c = value & FLAG_C != 0;
        self.flag_z = value & FLAG_Z != 0;
        self.flag_i = value & FLAG_I != 0;
        self.flag_d = value & FLAG_D != 0;
        self.flag_v = value & FLAG_V != 0;
        self.flag_n = value & FLAG_N != 0;
    }

    // ---- register and flag access --------------------------------------

    pub fn pc(&self) -> u16 {
        self.pc
    }

    pub fn a(&self) -> u8 {
        self.a
    }

    pub fn x(&self) -> u8 {
        self.x
    }

    pub fn y(&self) -> u8 {
        self.y
    }

    pub fn sp(&self) -> u8 {
        self.sp
    }

    pub fn set_pc(&mut self, pc: u16) {
        self.pc = pc;
    }

    pub fn set_a(&mut self, a: u8) {
        self.a = a;
    }

    pub fn set_x(&mut self, x: u8) {
        self.x = x;
    }

    pub fn set_y(&mut self, y: u8) {
        self.y = y;
    }

    pub fn set_sp(&mut self, sp: u8) {
        self.sp = sp;
    }

    pub fn flag_c(&self) -> bool {
        self.flag_c
    }

    pub fn flag_z(&self) -> bool {
        self.flag_z
    }

    pub fn flag_i(&self) -> bool {
        self.flag_i
    }

    pub fn flag_d(&self) -> bool {
        self.flag_d
    }

    pub fn flag_b(&self) -> bool {
        self.flag_b
    }

    pub fn flag_v(&self) -> bool {
        self.flag_v
    }

    pub fn flag_n(&self) -> bool {
        self.flag_n
    }

    pub fn set_flag_c(&mut self, v: bool) {
        self.flag_c = v;
    }

    pub fn set_flag_z(&mut self, v: bool) {
        self.flag_z = v;
    }

    pub fn set_flag_i(&mut self, v: bool) {
        self.flag_i = v;
    }

    pub fn set_flag_d(&mut self, v: bool) {
        self.flag_d = v;
    }

    pub fn set_flag_b(&mut self, v: bool) {
        self.flag_b = v;
    }

    pub fn set_flag_v(&mut self, v: bool) {
        self.flag_v = v;
    }

    pub fn set_flag_n(&mut self, v: bool) {
        self.flag_n = v;
    }

    /// True between interrupt entry and the matching RTI.
    pub fn in_isr(&self) -> bool {
        self.in_isr
    }

    pub fn stop_on_break(&self) -> bool {
        self.stop_on_break
    }

    pub fn set_stop_on_break(&mut self, v: bool) {
        self.stop_on_break = v;
    }

    /// Direct access to the memory bus, for a monitor's peek command.
    pub fn memory(&self) -> &M {
        &self.mem
    }

    /// Mutable access to the memory bus, for a monitor's poke command.
    /// Never call concurrently with [`Cpu::next`].
    pub fn memory_mut(&mut self) -> &mut M {
        &mut self.mem
    }
}

impl<M: MemoryBus> fmt::Display for Cpu<M> {
    /// Monitor-style register snapshot:
    ///
    /// ```text
    ///  pc  sr ac xr yr sp  n v - b d i z c
    /// 1234 20 00 00 00 00  . . * . . . . .
    /// ```
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let dot = |v: bool| if v { "*" } else { "." };
        write!(
            f,
            " pc  sr ac xr yr sp  n v - b d i z c\n\
             {:04x} {:02x} {:02x} {:02x} {:02x} {:02x}  {} {} {} {} {} {} {} {}",
            self.pc,
            self.status(),
            self.a,
            self.x,
            self.y,
            self.sp,
            dot(self.flag_n),
            dot(self.flag_v),
            dot(true),
            dot(self.flag_b),
            dot(self.flag_d),
            dot(self.flag_i),
            dot(self.flag_z),
            dot(self.flag_c),
        )
    }
}
