//! # Bank-Switched Memory
//!
//! The C64 maps 14 memory chunks into the 64KB address space under
//! control of the PLA. The low three bits of the processor port at
//! $0001 combine with the cartridge GAME and EXROM pins into a 5-bit
//! mode that selects which chunk answers reads in each of seven address
//! zones. See <https://www.c64-wiki.com/wiki/Bank_Switching>.
//!
//! Writes ignore the mode entirely: they always land in the RAM chunk
//! under the zone, even while a ROM is banked in over it. Open chunks
//! (un-mapped address space, and ROM slots with nothing installed)
//! read as zero and swallow writes.

use lib6510::MemoryBus;

use crate::error::RomError;

/// The processor port register at $0001; its low three bits select the
/// banking mode.
pub const ADDR_PORT: u16 = 0x0001;

/// Identifies one of the 14 mappable chunks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChunkId {
    Ram0,
    Ram1,
    Ram2,
    Ram3,
    Ram4,
    Ram5,
    Ram6,
    Basic,
    Kernal,
    CharGen,
    CartLo,
    CartHi,
    Io,
    Open,
}

/// Backing storage for a chunk. ROM slots start out `Open` until an
/// image is installed.
enum Chunk {
    Ram(Vec<u8>),
    Rom(Vec<u8>),
    Open,
}

impl Chunk {
    fn read(&self, offset: u16) -> u8 {
        match self {
            Chunk::Ram(bytes) | Chunk::Rom(bytes) => bytes[offset as usize],
            Chunk::Open => 0,
        }
    }

    fn write(&mut self, offset: u16, value: u8) {
        if let Chunk::Ram(bytes) = self {
            bytes[offset as usize] = value;
        }
    }
}

/// Zone base addresses; a chunk is always addressed relative to the
/// base of the zone it is mapped under.
const ZONE_BASES: [u16; 7] = [0x0000, 0x1000, 0x8000, 0xa000, 0xc000, 0xd000, 0xe000];

/// Zone index for each 4KB page of the address space.
const ZONE_MAP: [usize; 16] = [0, 1, 1, 1, 1, 1, 1, 1, 2, 2, 3, 3, 4, 5, 6, 6];

use ChunkId::*;

/// Read routing for each of the 32 banking modes.
const MODES: [[ChunkId; 7]; 32] = [
    /* 00 */ [Ram0, Ram1, Ram2, Ram3, Ram4, Ram5, Ram6],
    /* 01 */ [Ram0, Ram1, Ram2, Ram3, Ram4, Ram5, Ram6],
    /* 02 */ [Ram0, Ram1, Ram2, CartHi, Ram4, CharGen, Kernal],
    /* 03 */ [Ram0, Ram1, CartLo, CartHi, Ram4, CharGen, Kernal],
    /* 04 */ [Ram0, Ram1, Ram2, Ram3, Ram4, Ram5, Ram6],
    /* 05 */ [Ram0, Ram1, Ram2, Ram3, Ram4, Io, Ram6],
    /* 06 */ [Ram0, Ram1, Ram2, CartHi, Ram4, Io, Kernal],
    /* 07 */ [Ram0, Ram1, CartLo, CartHi, Ram4, Io, Kernal],
    /* 08 */ [Ram0, Ram1, Ram2, Ram3, Ram4, Ram5, Ram6],
    /* 09 */ [Ram0, Ram1, Ram2, Ram3, Ram4, CharGen, Ram6],
    /* 10 */ [Ram0, Ram1, Ram2, Ram3, Ram4, CharGen, Kernal],
    /* 11 */ [Ram0, Ram1, CartLo, Basic, Ram4, CharGen, Kernal],
    /* 12 */ [Ram0, Ram1, Ram2, Ram3, Ram4, Ram5, Ram6],
    /* 13 */ [Ram0, Ram1, Ram2, Ram3, Ram4, Io, Ram6],
    /* 14 */ [Ram0, Ram1, Ram2, Ram3, Ram4, Io, Kernal],
    /* 15 */ [Ram0, Ram1, CartLo, Basic, Ram4, Io, Kernal],
    /* 16 */ [Ram0, Open, CartLo, Open, Open, Io, CartHi],
    /* 17 */ [Ram0, Open, CartLo, Open, Open, Io, CartHi],
    /* 18 */ [Ram0, Open, CartLo, Open, Open, Io, CartHi],
    /* 19 */ [Ram0, Open, CartLo, Open, Open, Io, CartHi],
    /* 20 */ [Ram0, Open, CartLo, Open, Open, Io, CartHi],
    /* 21 */ [Ram0, Open, CartLo, Open, Open, Io, CartHi],
    /* 22 */ [Ram0, Open, CartLo, Open, Open, Io, CartHi],
    /* 23 */ [Ram0, Open, CartLo, Open, Open, Io, CartHi],
    /* 24 */ [Ram0, Ram1, Ram2, Ram3, Ram4, Ram5, Ram6],
    /* 25 */ [Ram0, Ram1, Ram2, Ram3, Ram4, CharGen, Ram6],
    /* 26 */ [Ram0, Ram1, Ram2, Ram3, Ram4, CharGen, Kernal],
    /* 27 */ [Ram0, Ram1, Ram2, Basic, Ram4, CharGen, Kernal],
    /* 28 */ [Ram0, Ram1, Ram2, Ram3, Ram4, Ram5, Ram6],
    /* 29 */ [Ram0, Ram1, Ram2, Ram3, Ram4, Io, Ram6],
    /* 30 */ [Ram0, Ram1, Ram2, Ram3, Ram4, Io, Kernal],
    /* 31 */ [Ram0, Ram1, Ram2, Basic, Ram4, Io, Kernal],
];

const SIZE_BASIC: usize = 0x2000;
const SIZE_KERNAL: usize = 0x2000;
const SIZE_CHARGEN: usize = 0x1000;
const SIZE_CART: usize = 0x2000;

/// The C64 memory map.
///
/// Implements `MemoryBus`, so a `Cpu<BankedMemory>` sees the machine
/// exactly as the 6510 does: reads routed by the current banking mode,
/// writes always through to RAM.
pub struct BankedMemory {
    chunks: [Chunk; 14],
    game: bool,
    exrom: bool,
}

impl BankedMemory {
    /// Creates the memory map with all RAM chunks zeroed, no ROMs
    /// installed, and the mode set to 31 (BASIC, I/O and KERNAL banked
    /// in), the state of a stock machine at power-on.
    pub fn new() -> Self {
        let mut mem = Self {
            chunks: [
                Chunk::Ram(vec![0; 0x1000]), // $0000 - $0fff
                Chunk::Ram(vec![0; 0x7000]), // $1000 - $7fff
                Chunk::Ram(vec![0; 0x2000]), // $8000 - $9fff
                Chunk::Ram(vec![0; 0x2000]), // $a000 - $bfff
                Chunk::Ram(vec![0; 0x1000]), // $c000 - $cfff
                Chunk::Ram(vec![0; 0x1000]), // $d000 - $dfff
                Chunk::Ram(vec![0; 0x2000]), // $e000 - $ffff
                Chunk::Open,                 // basic
                Chunk::Open,                 // kernal
                Chunk::Open,                 // chargen
                Chunk::Open,                 // cart lo
                Chunk::Open,                 // cart hi
                Chunk::Ram(vec![0; 0x1000]), // io, $d000 - $dfff
                Chunk::Open,
            ],
            game: false,
            exrom: false,
        };
        mem.set_mode(31);
        mem
    }

    /// The current 5-bit banking mode: port bits 0-2, GAME at bit 3,
    /// EXROM at bit 4.
    pub fn mode(&self) -> u8 {
        let mut mode = self.chunks[Ram0 as usize].read(ADDR_PORT) & 0x07;
        if self.game {
            mode |= 0x08;
        }
        if self.exrom {
            mode |= 0x10;
        }
        mode
    }

    /// Sets the banking mode. The low three bits land in the port
    /// register at $0001 without disturbing its other bits; bits 3 and
    /// 4 drive the GAME and EXROM pins.
    pub fn set_mode(&mut self, value: u8) {
        let prev = self.chunks[Ram0 as usize].read(ADDR_PORT);
        let next = (prev & 0xf8) | (value & 0x07);
        self.chunks[Ram0 as usize].write(ADDR_PORT, next);
        self.game = value & 0x08 != 0;
        self.exrom = value & 0x10 != 0;
    }

    /// State of the cartridge GAME pin (mode bit 3).
    pub fn game(&self) -> bool {
        self.game
    }

    pub fn set_game(&mut self, v: bool) {
        self.game = v;
    }

    /// State of the cartridge EXROM pin (mode bit 4).
    pub fn exrom(&self) -> bool {
        self.exrom
    }

    pub fn set_exrom(&mut self, v: bool) {
        self.exrom = v;
    }

    fn install(
        &mut self,
        id: ChunkId,
        name: &'static str,
        want: usize,
        data: Vec<u8>,
    ) -> Result<(), RomError> {
        if data.len() != want {
            return Err(RomError::InvalidSize {
                rom: name,
                have: data.len(),
                want,
            });
        }
        self.chunks[id as usize] = Chunk::Rom(data);
        Ok(())
    }

    /// Installs the 8KB BASIC ROM image.
    pub fn install_basic(&mut self, data: Vec<u8>) -> Result<(), RomError> {
        self.install(Basic, "basic", SIZE_BASIC, data)
    }

    /// Installs the 8KB KERNAL ROM image.
    pub fn install_kernal(&mut self, data: Vec<u8>) -> Result<(), RomError> {
        self.install(Kernal, "kernal", SIZE_KERNAL, data)
    }

    /// Installs the 4KB character generator ROM image.
    pub fn install_chargen(&mut self, data: Vec<u8>) -> Result<(), RomError> {
        self.install(CharGen, "chargen", SIZE_CHARGEN, data)
    }

    /// Installs the 8KB cartridge low ROM image.
    pub fn install_cart_lo(&mut self, data: Vec<u8>) -> Result<(), RomError> {
        self.install(CartLo, "cart lo", SIZE_CART, data)
    }

    /// Installs the 8KB cartridge high ROM image.
    pub fn install_cart_hi(&mut self, data: Vec<u8>) -> Result<(), RomError> {
        self.install(CartHi, "cart hi", SIZE_CART, data)
    }

    /// Reads directly from a chunk, bypassing the mode routing.
    pub fn chunk_read(&self, id: ChunkId, offset: u16) -> u8 {
        self.chunks[id as usize].read(offset)
    }

    /// Writes directly into a chunk, bypassing the mode routing and
    /// the write-through rule. Device emulation uses this to back the
    /// I/O registers, which the bus itself never writes.
    pub fn chunk_write(&mut self, id: ChunkId, offset: u16, value: u8) {
        self.chunks[id as usize].write(offset, value);
    }
}

impl Default for BankedMemory {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryBus for BankedMemory {
    fn read(&self, addr: u16) -> u8 {
        let zone = ZONE_MAP[(addr >> 12) as usize];
        let id = MODES[self.mode() as usize][zone];
        self.chunks[id as usize].read(addr - ZONE_BASES[zone])
    }

    /// Writes always go to the RAM chunk under the zone, whatever is
    /// currently banked in for reads.
    fn write(&mut self, addr: u16, value: u8) {
        let zone = ZONE_MAP[(addr >> 12) as usize];
        let id = MODES[0][zone];
        self.chunks[id as usize].write(addr - ZONE_BASES[zone], value);
    }
}
