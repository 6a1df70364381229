use bitflags::bitflags;

use crate::utils;

bitflags! {
    /// Processor status register (P), NV-BDIZC from bit 7 to bit 0.
    ///
    /// Only the seven real flags are ever stored. Bit 5 is unused and is
    /// always read as 1 when the register is packed to be pushed.
    #[derive(Default)]
    pub struct StatusRegister: u8 {
        const CARRY = 1 << 0;
        const ZERO = 1 << 1;
        const INTERRUPT_DISABLE = 1 << 2;
        const DECIMAL = 1 << 3; // unused in the NES
        const BREAK = 1 << 4;
        const UNUSED = 1 << 5;
        const OVERFLOW = 1 << 6;
        const NEGATIVE = 1 << 7;
    }
}

impl StatusRegister {
    /// Status register value after power-on and reset
    pub fn power_on() -> Self {
        Self::INTERRUPT_DISABLE
    }

    /// Set Zero and Negative flags from an 8-bit result
    pub fn auto_set_zn(&mut self, value: u8) {
        self.set(Self::ZERO, value == 0);
        self.set(Self::NEGATIVE, utils::bv(value, 7) != 0);
    }

    /// Pack the flags into the byte pushed to the stack. The unused bit
    /// always reads as 1.
    pub fn pack(&self) -> u8 {
        (*self | Self::UNUSED).bits()
    }

    /// Inverse of `pack`. Break and the unused bit don't exist as flip-flops
    /// on the real chip, so both are discarded when pulled from the stack.
    pub fn unpack(value: u8) -> Self {
        Self::from_bits_truncate(value) - Self::BREAK - Self::UNUSED
    }
}
