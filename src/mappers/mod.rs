//! Mappers
//!
//! NES mappers are circuits and hardware found in cartridges that allow
//! extending the capabilities and bypass some NES limitations.
//!
//! Every access the CPU makes to cartridge space ($4020-$FFFF) goes through
//! exactly one mapper. The mapper translates the address into an offset inside
//! the cartridge storage it has been bound to.

mod flat_ram;
mod mapper_000;

use log::debug;

use crate::cartridge::Cartridge;
use crate::errors::MapperError;

pub use flat_ram::FlatRamMapper;
pub use mapper_000::Nrom;

pub trait Mapper {
    /// Read a byte of program memory at CPU `address`
    fn read_prg(&self, address: u16) -> u8;

    /// Write a byte of program memory at CPU `address`. Read-only mappers
    /// reject it.
    fn write_prg(&mut self, address: u16, data: u8) -> Result<(), MapperError>;
}

/// Build the mapper a cartridge declares in its header
pub fn mapper_for(cartridge: &Cartridge) -> Result<Box<dyn Mapper + '_>, MapperError> {
    let mapper = cartridge.mapper_number();
    debug!("Selecting mapper {mapper} for '{cartridge}'");

    match mapper {
        0 => Ok(Box::new(Nrom::new(cartridge))),
        _ => Err(MapperError::Unsupported(mapper)),
    }
}
