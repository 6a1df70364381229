use log::{debug, warn};

use crate::errors::MapperError;
use crate::hardware::{
    APU_AND_IO_REGISTERS_END, APU_AND_IO_REGISTERS_START, CARTRIDGE_SPACE_END,
    CARTRIDGE_SPACE_START, OPEN_BUS_VALUE, PPU_REGISTERS_END, PPU_REGISTERS_START, RAM_END,
    RAM_SIZE, RAM_START,
};
use crate::mappers::Mapper;
use crate::utils;

use super::memory::{Memory, MirroredMemory, Ram};

/// CPU main bus
///
/// Owns the 2 kB internal RAM and the cartridge mapper and routes every CPU
/// address to one of them. PPU and APU registers are not emulated: reads
/// return the open bus value and writes are dropped.
///
/// See https://www.nesdev.org/wiki/CPU_memory_map for further reference
pub struct Bus<'a> {
    ram: MirroredMemory<Ram>,
    mapper: Box<dyn Mapper + 'a>,
}

impl<'a> Bus<'a> {
    pub fn new(mapper: Box<dyn Mapper + 'a>) -> Self {
        let mirrors = (RAM_END - RAM_START + 1) / RAM_SIZE - 1;
        let ram = MirroredMemory::new(Ram::new(RAM_SIZE.into()), mirrors.into());

        Self { ram, mapper }
    }

    pub fn read(&self, address: u16) -> u8 {
        match address {
            RAM_START..=RAM_END => self.ram.read(address - RAM_START),

            PPU_REGISTERS_START..=PPU_REGISTERS_END => {
                debug!("Bus (CPU) read from PPU register ${address:0>4X} (not emulated)");
                OPEN_BUS_VALUE
            }

            APU_AND_IO_REGISTERS_START..=APU_AND_IO_REGISTERS_END => {
                debug!("Bus (CPU) read from APU/IO register ${address:0>4X} (not emulated)");
                OPEN_BUS_VALUE
            }

            CARTRIDGE_SPACE_START..=CARTRIDGE_SPACE_END => {
                let data = self.mapper.read_prg(address);
                debug!("Bus (CPU) read from: {address:0>4X} <- {data:0>2X}");
                data
            }
        }
    }

    /// Write a byte. A mapper rejecting the write is logged and ignored.
    pub fn write(&mut self, address: u16, data: u8) {
        if let Err(error) = self.try_write(address, data) {
            warn!("{error}");
        }
    }

    /// Write a byte, surfacing the mapper's answer for cartridge space
    pub fn try_write(&mut self, address: u16, data: u8) -> Result<(), MapperError> {
        match address {
            RAM_START..=RAM_END => {
                self.ram.write(address - RAM_START, data);
                Ok(())
            }

            PPU_REGISTERS_START..=PPU_REGISTERS_END => {
                debug!("Bus (CPU) write to PPU register ${address:0>4X} <- {data:0>2X} (not emulated)");
                Ok(())
            }

            APU_AND_IO_REGISTERS_START..=APU_AND_IO_REGISTERS_END => {
                debug!("Bus (CPU) write to APU/IO register ${address:0>4X} <- {data:0>2X} (not emulated)");
                Ok(())
            }

            CARTRIDGE_SPACE_START..=CARTRIDGE_SPACE_END => {
                debug!("Bus (CPU) write to: {address:0>4X} <- {data:0>2X}");
                self.mapper.write_prg(address, data)
            }
        }
    }

    /// Read a little-endian word at `address`, `address + 1`
    pub fn read_word(&self, address: u16) -> u16 {
        let low = self.read(address);
        let high = self.read(address.wrapping_add(1));
        utils::word(low, high)
    }

    /// Write `data` starting at `address`, byte after byte
    pub fn load(&mut self, address: u16, data: &[u8]) {
        for (offset, byte) in data.iter().enumerate() {
            self.write(address.wrapping_add(offset as u16), *byte);
        }
    }

    /// Hex dump of the range `start..=end`, 16 bytes per line
    pub fn dump(&self, start: u16, end: u16) -> String {
        let mut dump = String::new();
        let end = end as u32;
        let mut row = start as u32;

        while row <= end {
            dump.push_str(&format!("{row:0>4X}:"));
            for (column, address) in (row..=end.min(row + 15)).enumerate() {
                if column == 8 {
                    dump.push(' ');
                }
                dump.push_str(&format!(" {:0>2X}", self.read(address as u16)));
            }
            dump.push('\n');
            row += 16;
        }

        dump
    }
}
