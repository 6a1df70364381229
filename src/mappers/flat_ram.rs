use crate::errors::MapperError;
use crate::hardware::{CARTRIDGE_SPACE_END, CARTRIDGE_SPACE_START, OPEN_BUS_VALUE};
use crate::mappers::Mapper;
use crate::processor::memory::{Memory, Ram};

/// Read/write RAM over the whole cartridge space. Not a real board, it lets
/// tests place programs and interrupt vectors anywhere above $4020.
pub struct FlatRamMapper {
    ram: Ram,
}

impl FlatRamMapper {
    pub fn new() -> Self {
        Self {
            ram: Ram::new((CARTRIDGE_SPACE_END - CARTRIDGE_SPACE_START) as usize + 1),
        }
    }
}

impl Default for FlatRamMapper {
    fn default() -> Self {
        Self::new()
    }
}

impl Mapper for FlatRamMapper {
    fn read_prg(&self, address: u16) -> u8 {
        match address.checked_sub(CARTRIDGE_SPACE_START) {
            Some(offset) => self.ram.read(offset),
            None => OPEN_BUS_VALUE,
        }
    }

    /// Writes below cartridge space never reach the board and are dropped
    fn write_prg(&mut self, address: u16, data: u8) -> Result<(), MapperError> {
        if let Some(offset) = address.checked_sub(CARTRIDGE_SPACE_START) {
            self.ram.write(offset, data);
        }
        Ok(())
    }
}
