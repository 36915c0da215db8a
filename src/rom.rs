//! Cartridge (ROM) loading.
//!
//! No bank switching is modelled: the only accepted cartridges are exactly
//! 32 KiB, which maps directly onto the fixed ROM bank 0 / bank N window
//! of the bus.

use crate::{debugln, error::Error, mmu::ROM_SIZE};

/// An in-memory cartridge image, validated to fit the core's flat ROM
/// window.
#[derive(Debug)]
pub struct Cartridge {
    data: Vec<u8>,
}

impl Cartridge {
    /// Validates and wraps a cartridge image.
    ///
    /// The only accepted size is exactly [`ROM_SIZE`] (32768) bytes.
    pub fn from_data(data: &[u8]) -> Result<Self, Error> {
        if data.len() != ROM_SIZE {
            return Err(Error::RomSize);
        }
        debugln!("Loaded cartridge with {} bytes", data.len());
        Ok(Self {
            data: data.to_vec(),
        })
    }

    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Title stored at the fixed 0x0134..0x0144 header window, trimmed of
    /// trailing NUL padding.
    pub fn title(&self) -> String {
        let raw = &self.data[0x0134..0x0144];
        let end = raw.iter().position(|&b| b == 0x00).unwrap_or(raw.len());
        String::from_utf8_lossy(&raw[..end]).into_owned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_wrong_size() {
        assert_eq!(Cartridge::from_data(&[0u8; 100]).unwrap_err(), Error::RomSize);
    }

    #[test]
    fn test_accepts_exact_size() {
        let data = vec![0u8; ROM_SIZE];
        assert!(Cartridge::from_data(&data).is_ok());
    }

    #[test]
    fn test_title_trims_nul_padding() {
        let mut data = vec![0u8; ROM_SIZE];
        data[0x0134..0x0134 + 5].copy_from_slice(b"TETRI");
        let cart = Cartridge::from_data(&data).unwrap();
        assert_eq!(cart.title(), "TETRI");
    }
}
