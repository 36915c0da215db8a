//! Error related data structures.

use std::fmt::{self, Display, Formatter};

/// Top level enum for error handling within the core.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// The cartridge data handed to [`crate::rom::Cartridge::from_data`] is
    /// not exactly 32 KiB, the only size this core's flat bus supports.
    RomSize,

    /// The decoder reached an opcode byte with no defined instruction.
    /// Carries the raw opcode and the program counter it was fetched from,
    /// for diagnostics.
    UnsupportedOpcode { opcode: u8, pc: u16 },

    /// An address computed outside the 0x0000..=0xffff range was handed to
    /// the bus. The 16-bit address space makes this unreachable through
    /// normal CPU operation; it exists for callers that build addresses
    /// from wider integers.
    BusOutOfRange(u32),

    /// `IME` was set and `IE & IF` was non-zero, yet no entry in the fixed
    /// priority table matched any raised bit. Only reachable if a caller
    /// writes non-standard bits directly into `IE`/`IF`.
    ImpossibleInterruptState { ie: u8, iflags: u8 },

    /// Escape hatch for a more detailed, ad-hoc message.
    CustomError(String),
}

impl Error {
    pub fn description(&self) -> String {
        match self {
            Error::RomSize => String::from("Invalid ROM size, expected exactly 32768 bytes"),
            Error::UnsupportedOpcode { opcode, pc } => {
                format!("Unsupported opcode 0x{:02x} at PC=0x{:04x}", opcode, pc)
            }
            Error::BusOutOfRange(addr) => format!("Bus address 0x{:08x} is out of range", addr),
            Error::ImpossibleInterruptState { ie, iflags } => format!(
                "No priority entry matches IE=0x{:02x} IF=0x{:02x} with pending bits set",
                ie, iflags
            ),
            Error::CustomError(message) => message.clone(),
        }
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.description())
    }
}
