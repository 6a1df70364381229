//! NES hardware constants

// Main bus
// --------
//
// Main address space for the NES. CPU, RAM and registers are mapped to this
// space.
//
// Cartridge PGR ROM is mapped to the upper part of this space through a mapper

// Memory - 2kB RAM mirrored 3 times (used by the CPU)
pub const RAM_START: u16 = 0x0000;
pub const RAM_END: u16 = 0x1FFF;
pub const RAM_SIZE: u16 = 0x0800;

// Stack page lives inside the internal RAM
pub const STACK_PAGE_START: u16 = 0x0100;

// PPU registers - 8 registers mirrored 1023 times. Not emulated, reads are 0
pub const PPU_REGISTERS_START: u16 = 0x2000;
pub const PPU_REGISTERS_END: u16 = 0x3FFF;

// APU and I/O registers. Not emulated, reads are 0
pub const APU_AND_IO_REGISTERS_START: u16 = 0x4000;
pub const APU_AND_IO_REGISTERS_END: u16 = 0x401F;

// Cartridge space, every access is delegated to the mapper
pub const CARTRIDGE_SPACE_START: u16 = 0x4020;
pub const CARTRIDGE_SPACE_END: u16 = 0xFFFF;

pub const CARTRIDGE_ROM_START: u16 = 0x8000;

// Value returned by unmapped or stubbed devices
pub const OPEN_BUS_VALUE: u8 = 0x00;

// Interrupt vectors (little-endian words)
pub const NMI_VECTOR: u16 = 0xFFFA;
pub const RESET_VECTOR: u16 = 0xFFFC;
pub const IRQ_VECTOR: u16 = 0xFFFE;

// Processor
// ---------

pub const STACK_POINTER_POWER_ON: u8 = 0xFD;

// Cartridge
// ---------

// PGR ROM banks are 16 kB, CHR ROM banks 8 kB
pub const PGR_ROM_BANK_SIZE: usize = 16 * 1024;
pub const CHR_ROM_BANK_SIZE: usize = 8 * 1024;
pub const INES_HEADER_SIZE: usize = 16;
pub const INES_TRAINER_SIZE: usize = 512;
