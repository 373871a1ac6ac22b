//! # Machine Run Loop
//!
//! Ties the CPU, the bank-switched memory, and the background devices
//! into a runnable machine. The loop executes one instruction per
//! cycle, services every device after it, and stops on a breakpoint,
//! on BRK, on a trap from a device, or when a [`StopHandle`] fires
//! from another thread.

use std::collections::HashSet;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use lib6510::{Cpu, Disassembler, MemoryBus, Operation};

use crate::banked::BankedMemory;
use crate::error::Trap;

/// A background device serviced once per executed instruction.
///
/// Devices observe the CPU; they change machine state through side
/// channels such as the interrupt line or memory handles captured at
/// construction. Returning a [`Trap`] stops the run loop.
pub trait Device {
    fn service(&mut self, cpu: &Cpu<BankedMemory>) -> Result<(), Trap>;
}

/// A cloneable handle that stops a running machine from another
/// thread. The request is edge-triggered: it stops one `run` call and
/// clears itself.
#[derive(Clone, Debug)]
pub struct StopHandle(Arc<AtomicBool>);

impl StopHandle {
    /// Requests that the current (or next) `run` call return.
    pub fn stop(&self) {
        self.0.store(true, Ordering::Release);
    }
}

/// A Commodore 64 built from a 6510 and the bank-switched memory map.
pub struct Machine {
    /// Addresses the run loop halts at before executing.
    pub breakpoints: HashSet<u16>,
    cpu: Cpu<BankedMemory>,
    devices: Vec<Box<dyn Device>>,
    trace: Option<Box<dyn FnMut(Operation)>>,
    stop: Arc<AtomicBool>,
}

impl Machine {
    /// Creates a machine with power-on memory (mode 31, no ROMs
    /// installed), no devices, and BRK configured to stop the run loop.
    pub fn new() -> Self {
        let mut cpu = Cpu::new(BankedMemory::new());
        cpu.set_stop_on_break(true);
        Self {
            breakpoints: HashSet::new(),
            cpu,
            devices: Vec::new(),
            trace: None,
            stop: Arc::new(AtomicBool::new(false)),
        }
    }

    pub fn cpu(&self) -> &Cpu<BankedMemory> {
        &self.cpu
    }

    pub fn cpu_mut(&mut self) -> &mut Cpu<BankedMemory> {
        &mut self.cpu
    }

    /// Registers a device to be serviced after every instruction.
    pub fn add_device(&mut self, device: Box<dyn Device>) {
        self.devices.push(device);
    }

    /// Installs a callback invoked with the disassembly of each
    /// instruction just before it executes.
    pub fn set_trace(&mut self, trace: impl FnMut(Operation) + 'static) {
        self.trace = Some(Box::new(trace));
    }

    pub fn clear_trace(&mut self) {
        self.trace = None;
    }

    /// A handle for stopping the run loop, safe to move to another
    /// thread.
    pub fn stop_handle(&self) -> StopHandle {
        StopHandle(self.stop.clone())
    }

    /// Runs until a breakpoint, a BRK, a stop request, or a device
    /// trap. The Break flag is cleared on entry so the loop can be
    /// resumed after stopping at a BRK.
    pub fn run(&mut self) -> Result<(), Trap> {
        self.cpu.set_flag_b(false);
        loop {
            let next_pc = self.cpu.pc().wrapping_add(1);
            if self.breakpoints.contains(&next_pc) {
                log::debug!("stopped at breakpoint ${:04x}", next_pc);
                return Ok(());
            }
            if self.cpu.flag_b() {
                return Ok(());
            }
            if self.stop.swap(false, Ordering::AcqRel) {
                return Ok(());
            }
            self.step()?;
        }
    }

    /// Executes one instruction and services every device.
    pub fn step(&mut self) -> Result<(), Trap> {
        if let Some(trace) = &mut self.trace {
            let mut dasm = Disassembler::new(self.cpu.memory());
            dasm.set_pc(self.cpu.pc().wrapping_add(1));
            trace(dasm.next());
        }
        self.cpu.next();
        for device in &mut self.devices {
            if let Err(trap) = device.service(&self.cpu) {
                log::error!("{}", trap);
                return Err(trap);
            }
        }
        Ok(())
    }

    /// Resets the CPU through the reset vector and runs.
    pub fn reset(&mut self) -> Result<(), Trap> {
        self.cpu.reset();
        self.run()
    }

    /// Reads memory as the CPU currently sees it.
    pub fn peek(&self, addr: u16) -> u8 {
        self.cpu.memory().read(addr)
    }

    /// Writes memory with the usual write-through-to-RAM routing.
    pub fn poke(&mut self, addr: u16, value: u8) {
        self.cpu.memory_mut().write(addr, value);
    }
}

impl Default for Machine {
    fn default() -> Self {
        Self::new()
    }
}
