//! NES CPU emulator: MOS 6502 core, CPU bus and cartridge mappers

pub mod assembler;
pub mod cartridge;
pub mod errors;
pub mod hardware;
pub mod mappers;
pub mod metrics;
pub mod processor;
pub mod settings;
mod utils;

pub use cartridge::Cartridge;
pub use processor::bus::Bus;
pub use processor::cpu::{Cpu, Interrupt};
