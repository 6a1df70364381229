//! Emulator errors
//!
//! All errors the CPU, its bus and the cartridge side can produce. CPU faults
//! are never fatal: the processor is left on the next instruction boundary and
//! can keep running.

use thiserror::Error;

use crate::processor::instruction::AddressingMode;

/// CPU execution faults
///
/// Returned by `Cpu::step`. After any of them the program counter already
/// points past the faulting instruction.
#[derive(Debug, Error)]
pub enum CpuError {
    #[error("Invalid write: {mode:?} addressing has no writable address (operand at ${address:0>4X})")]
    InvalidWrite { mode: AddressingMode, address: u16 },

    #[error("Unimplemented opcode ${opcode:0>2X} at ${address:0>4X}")]
    UnimplementedOpcode { opcode: u8, address: u16 },

    #[error("Mapper error: {0}")]
    Mapper(#[from] MapperError),
}

/// Mapper errors
#[derive(Debug, Error)]
pub enum MapperError {
    #[error("Mapper '{mapper}' rejected write of ${data:0>2X} to ${address:0>4X}")]
    WriteRejected {
        mapper: &'static str,
        address: u16,
        data: u8,
    },

    #[error("Mapper {0} not implemented")]
    Unsupported(u8),
}

/// Cartridge (iNES file) errors
#[derive(Debug, Error)]
pub enum CartridgeError {
    #[error("Can't read cartridge: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid iNES header: {0}")]
    InvalidHeader(String),

    #[error("Cartridge {section} truncated: expected {expected} bytes but found {found}")]
    Truncated {
        section: &'static str,
        expected: usize,
        found: usize,
    },
}

/// Mini-assembler errors
#[derive(Debug, Error, PartialEq, Eq)]
pub enum AssemblerError {
    #[error("Unknown mnemonic '{0}'")]
    UnknownMnemonic(String),

    #[error("Invalid operand '{operand}' in line '{line}'")]
    InvalidOperand { line: String, operand: String },

    #[error("{mnemonic} doesn't support {mode:?} addressing")]
    UnsupportedAddressing {
        mnemonic: String,
        mode: AddressingMode,
    },
}

/// Command line settings errors
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SettingsError {
    #[error("Missing cartridge path. Usage: nes-cpu <rom.nes> [--steps N] [--dump START:END] [--metrics-every N]")]
    MissingRomPath,

    #[error("Option '{0}' expects a value")]
    MissingValue(String),

    #[error("Invalid value '{value}' for option '{option}'")]
    InvalidValue { option: String, value: String },

    #[error("Unknown option '{0}'")]
    UnknownOption(String),
}
