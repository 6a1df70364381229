use log::debug;

use crate::cartridge::Cartridge;
use crate::errors::MapperError;
use crate::hardware::{CARTRIDGE_ROM_START, OPEN_BUS_VALUE, PGR_ROM_BANK_SIZE};
use crate::mappers::Mapper;

const MAPPER_NAME: &str = "NROM";

/// Mapper 0 (NROM)
///
/// PGR ROM is attached to CPU address bus $8000 - $FFFF. Cartridges with a
/// single 16 kB bank see it mirrored at $C000 - $FFFF. The mapper has no
/// registers and program memory is read-only.
///
/// See https://www.nesdev.org/wiki/NROM
pub struct Nrom<'a> {
    cartridge: &'a Cartridge,
}

impl<'a> Nrom<'a> {
    pub fn new(cartridge: &'a Cartridge) -> Self {
        Self { cartridge }
    }

    fn program_offset(&self, address: u16) -> usize {
        let offset = (address - CARTRIDGE_ROM_START) as usize;
        if self.cartridge.is_extended() {
            offset
        } else {
            offset % PGR_ROM_BANK_SIZE
        }
    }
}

impl Mapper for Nrom<'_> {
    fn read_prg(&self, address: u16) -> u8 {
        if address < CARTRIDGE_ROM_START {
            // No PGR RAM on this board
            return OPEN_BUS_VALUE;
        }

        self.cartridge
            .program_rom()
            .get(self.program_offset(address))
            .copied()
            .unwrap_or(OPEN_BUS_VALUE)
    }

    fn write_prg(&mut self, address: u16, data: u8) -> Result<(), MapperError> {
        debug!("{MAPPER_NAME} program memory is read-only, ignoring write ${data:0>2X} to ${address:0>4X}");
        Err(MapperError::WriteRejected {
            mapper: MAPPER_NAME,
            address,
            data,
        })
    }
}
