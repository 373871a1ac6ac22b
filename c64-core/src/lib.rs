//! # Commodore 64 Machine Core
//!
//! Builds a runnable C64 around the `lib6510` CPU: the bank-switched
//! memory map with its 32 PLA modes, ROM installation, a machine run
//! loop with breakpoints and tracing, and the standard background
//! devices (jiffy clock, watchdog).
//!
//! ## Quick Start
//!
//! ```
//! use c64_core::Machine;
//! use lib6510::MemoryBus;
//!
//! let mut machine = Machine::new();
//! // lda #$12; brk
//! machine.cpu_mut().memory_mut().import(0x0200, &[0xa9, 0x12, 0x00]);
//! machine.cpu_mut().set_pc(0x01ff);
//! machine.run().unwrap();
//! assert_eq!(machine.cpu().a(), 0x12);
//! ```

pub mod banked;
pub mod devices;
pub mod error;
pub mod machine;

pub use banked::{BankedMemory, ChunkId};
pub use devices::{JiffyClock, Watchdog};
pub use error::{RomError, Trap};
pub use machine::{Device, Machine, StopHandle};
