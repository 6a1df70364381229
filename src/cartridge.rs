use std::fs;
use std::path::Path;

use log::debug;

use crate::errors::CartridgeError;
use crate::hardware::{
    CHR_ROM_BANK_SIZE, INES_HEADER_SIZE, INES_TRAINER_SIZE, PGR_ROM_BANK_SIZE,
};
use crate::utils::bv;

const INES_MAGIC: [u8; 4] = [0x4E, 0x45, 0x53, 0x1A]; // "NES" + MS-DOS EOF

/// Immutable cartridge contents decoded from an iNES file
pub struct Cartridge {
    name: String,
    header: CartridgeHeader,

    // Program memory, exposed read-only to the mapper
    program_rom: Vec<u8>,

    // Character memory, stores patterns and graphics for the PPU
    character_rom: Vec<u8>,
}

impl Cartridge {
    /// Create a new cartridge loading the contents from an iNES file.
    ///
    /// Read more about iNES ROM file format in:
    /// https://www.nesdev.org/wiki/INES
    ///
    /// NES2.0 file format is not implemented and header flags 8 to 10 are
    /// ignored.
    pub fn new<P: AsRef<Path>>(path: P) -> Result<Self, CartridgeError> {
        let path = path.as_ref();
        let name = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());

        let contents = fs::read(path)?;
        Self::from_bytes(name, &contents)
    }

    /// Decode an iNES image already in memory
    pub fn from_bytes(name: impl Into<String>, contents: &[u8]) -> Result<Self, CartridgeError> {
        let header_bytes = take(contents, 0, INES_HEADER_SIZE, "header")?;
        let header = CartridgeHeader::parse(header_bytes)?;
        debug!("Header: {header:#?}");

        let mut offset = INES_HEADER_SIZE;

        // Trainer content is ignored
        if header.trainer {
            take(contents, offset, INES_TRAINER_SIZE, "trainer")?;
            offset += INES_TRAINER_SIZE;
        }

        let program_rom = take(contents, offset, header.pgr_rom_size, "PGR ROM")?.to_vec();
        offset += header.pgr_rom_size;

        let character_rom = take(contents, offset, header.chr_rom_size, "CHR ROM")?.to_vec();
        offset += header.chr_rom_size;

        if offset < contents.len() {
            debug!(
                "Ignoring {} trailing bytes after CHR ROM",
                contents.len() - offset
            );
        }

        Ok(Self {
            name: name.into(),
            header,
            program_rom,
            character_rom,
        })
    }

    pub fn program_rom(&self) -> &[u8] {
        &self.program_rom
    }

    pub fn character_rom(&self) -> &[u8] {
        &self.character_rom
    }

    /// Whether the PGR ROM fills the whole $8000-$FFFF window. A single 16 kB
    /// bank has to be mirrored.
    pub fn is_extended(&self) -> bool {
        self.program_rom.len() >= 2 * PGR_ROM_BANK_SIZE
    }

    pub fn mapper_number(&self) -> u8 {
        self.header.mapper
    }

    pub fn mirroring(&self) -> Mirroring {
        self.header.mirroring
    }
}

impl std::fmt::Display for Cartridge {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name)
    }
}

fn take<'a>(
    contents: &'a [u8],
    offset: usize,
    size: usize,
    section: &'static str,
) -> Result<&'a [u8], CartridgeError> {
    contents
        .get(offset..offset + size)
        .ok_or(CartridgeError::Truncated {
            section,
            expected: size,
            found: contents.len().saturating_sub(offset),
        })
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Mirroring {
    /// Vertical arrangement (CIRAM A10 = PPU A11)
    Horizontal,

    /// Horizontal arrangement (CIRAM A10 = PPU A10)
    Vertical,
}

#[derive(Debug)]
struct CartridgeHeader {
    pgr_rom_size: usize,
    chr_rom_size: usize,
    mirroring: Mirroring,

    // 512-byte trainer at 0x7000-0x71FF (stored before PGR data)
    trainer: bool,

    mapper: u8,
}

impl CartridgeHeader {
    fn parse(header: &[u8]) -> Result<Self, CartridgeError> {
        // (bytes 0-3) - NES cartridges start with ASCII "NES" and MS-DOS
        // end-of-file (0x1A)
        if header[0..4] != INES_MAGIC {
            return Err(CartridgeError::InvalidHeader(format!(
                "bad magic number {:02X?}",
                &header[0..4]
            )));
        }

        // (byte 4) - Size of PGR ROM in 16 KB units
        let pgr_rom_size = (header[4] as usize) * PGR_ROM_BANK_SIZE;
        if pgr_rom_size == 0 {
            return Err(CartridgeError::InvalidHeader(
                "cartridge without PGR ROM".to_string(),
            ));
        }

        // (byte 5) - Size of CHR ROM in 8 KB units (0 means CHR RAM)
        let chr_rom_size = (header[5] as usize) * CHR_ROM_BANK_SIZE;

        // (byte 6) - Mapper, mirroring, battery, trainer
        let mirroring = if bv(header[6], 0) == 0 {
            Mirroring::Horizontal
        } else {
            Mirroring::Vertical
        };

        let trainer = bv(header[6], 2) != 0;

        // (byte 7) - Upper nibble of the mapper number
        let mapper = (header[7] & 0xF0) | ((header[6] & 0xF0) >> 4);
        debug!("Cartridge mapper: {mapper}");

        Ok(Self {
            pgr_rom_size,
            chr_rom_size,
            mirroring,
            trainer,
            mapper,
        })
    }
}
