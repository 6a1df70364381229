use std::fmt;

use crate::hardware::STACK_POINTER_POWER_ON;
use crate::processor::status_register::StatusRegister;

/// Programmer visible state of the 6502
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Registers {
    pub acc: u8,   // Accumulator
    pub x_reg: u8, // X register
    pub y_reg: u8, // Y register
    pub sp: u8,    // Stack Pointer (offset inside page 1)
    pub pc: u16,   // Program Counter
    pub sr: StatusRegister,
}

impl Default for Registers {
    /// Power-on state
    fn default() -> Self {
        Self {
            acc: 0,
            x_reg: 0,
            y_reg: 0,
            sp: STACK_POINTER_POWER_ON,
            pc: 0,
            sr: StatusRegister::power_on(),
        }
    }
}

impl fmt::Display for Registers {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "A=${:0>2X} X=${:0>2X} Y=${:0>2X} PC=${:0>4X} SP=${:0>2X} P=%{:0>8b}",
            self.acc,
            self.x_reg,
            self.y_reg,
            self.pc,
            self.sp,
            self.sr.pack()
        )
    }
}
