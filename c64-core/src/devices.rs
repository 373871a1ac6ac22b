//! # Background Devices
//!
//! The standard devices serviced by the machine loop: the jiffy clock
//! that drives the 60Hz timer interrupt, and a watchdog that traps
//! programs stuck on a single instruction.

use std::time::{Duration, Instant};

use lib6510::{Cpu, IrqLine};

use crate::banked::BankedMemory;
use crate::error::Trap;
use crate::machine::Device;

/// One jiffy on an NTSC machine, 16.8ms.
/// <https://www.c64-wiki.com/wiki/Jiffy_Clock>
const JIFFY: Duration = Duration::from_micros(16_800);

/// Raises a timer interrupt once per jiffy of wall-clock time.
pub struct JiffyClock {
    irq: IrqLine,
    last_update: Instant,
}

impl JiffyClock {
    /// Creates a clock driving `irq`, normally the line obtained from
    /// [`Cpu::irq_line`].
    pub fn new(irq: IrqLine) -> Self {
        Self {
            irq,
            last_update: Instant::now(),
        }
    }
}

impl Device for JiffyClock {
    fn service(&mut self, _cpu: &Cpu<BankedMemory>) -> Result<(), Trap> {
        let now = Instant::now();
        if now.duration_since(self.last_update) < JIFFY {
            return Ok(());
        }
        self.last_update = now;
        self.irq.raise();
        Ok(())
    }
}

/// Traps when the program counter sits on the same address for three
/// consecutive services, the signature of a `jmp *` style spin.
#[derive(Default)]
pub struct Watchdog {
    last_pc: u16,
    pc_repeat: u8,
}

impl Watchdog {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Device for Watchdog {
    fn service(&mut self, cpu: &Cpu<BankedMemory>) -> Result<(), Trap> {
        if self.last_pc == cpu.pc() {
            self.pc_repeat += 1;
            if self.pc_repeat == 3 {
                return Err(Trap::Loop(cpu.pc().wrapping_add(1)));
            }
        } else {
            self.pc_repeat = 0;
        }
        self.last_pc = cpu.pc();
        Ok(())
    }
}
