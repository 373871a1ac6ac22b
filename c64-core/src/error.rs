//! Error types for the machine core.

use thiserror::Error;

/// Failure to install a ROM image.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RomError {
    #[error("{rom} rom: invalid size {have}, expected {want}")]
    InvalidSize {
        rom: &'static str,
        have: usize,
        want: usize,
    },
}

/// A condition raised by a device that stops the run loop.
///
/// The CPU itself never fails; traps come from devices watching the
/// machine, and the run loop returns them to the caller with the
/// machine state intact for inspection.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum Trap {
    /// The program counter stopped advancing; the program is spinning
    /// on a single instruction.
    #[error("loop detected at ${0:04x}")]
    Loop(u16),
}
