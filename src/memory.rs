//! # Memory Bus Abstraction
//!
//! The `MemoryBus` trait decouples the CPU from the memory system
//! behind it: flat RAM, a bank-switched mapping unit, ROM overlays, or
//! a debugging wrapper all look the same to the processor.
//!
//! The trait follows 6502-family hardware behavior: there are no bus
//! errors. Reads always yield a byte (unmapped regions return whatever
//! the implementation chooses) and writes to read-only regions are free
//! to be redirected or dropped.

/// Byte-addressed load/store interface the CPU drives.
///
/// - `read(&self)` takes a shared reference; reads have no side effects
///   in this engine.
/// - `write(&mut self)` makes mutation explicit.
/// - Neither returns an error: the hardware has no bus fault mechanism.
pub trait MemoryBus {
    /// Reads the byte at `addr`. Must never panic.
    fn read(&self, addr: u16) -> u8;

    /// Writes `value` to `addr`. Must never panic; implementations may
    /// ignore or redirect writes to read-only regions.
    fn write(&mut self, addr: u16, value: u8);

    /// Reads a little-endian 16-bit value from `addr` and `addr + 1`.
    fn read16(&self, addr: u16) -> u16 {
        let lo = self.read(addr) as u16;
        let hi = self.read(addr.wrapping_add(1)) as u16;
        hi << 8 | lo
    }

    /// Writes a 16-bit value little-endian at `addr` and `addr + 1`.
    fn write16(&mut self, addr: u16, value: u16) {
        self.write(addr, value as u8);
        self.write(addr.wrapping_add(1), (value >> 8) as u8);
    }

    /// Copies `data` into memory starting at `addr`, one write per
    /// byte so mapping rules apply. Used to load programs and ROM
    /// images before execution.
    fn import(&mut self, addr: u16, data: &[u8]) {
        for (i, &value) in data.iter().enumerate() {
            self.write(addr.wrapping_add(i as u16), value);
        }
    }
}

/// A flat 64KB RAM with every address writable.
///
/// This is the memory used by the test suites and by callers that do
/// not need ROM overlays or bank switching.
pub struct FlatMemory {
    data: Box<[u8; 0x10000]>,
}

impl FlatMemory {
    /// Creates a flat memory with all bytes zeroed.
    pub fn new() -> Self {
        Self {
            data: Box::new([0; 0x10000]),
        }
    }
}

impl Default for FlatMemory {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryBus for FlatMemory {
    fn read(&self, addr: u16) -> u8 {
        self.data[addr as usize]
    }

    fn write(&mut self, addr: u16, value: u8) {
        self.data[addr as usize] = value;
    }
}
