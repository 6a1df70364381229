/// Return the bit value for `value` at bit position `bit`
pub fn bv(value: u8, bit: u8) -> u8 {
    (value >> bit) & 1
}

/// Return the value from `value` between bit positions `major_bit` and
/// `minor_bit`
pub fn bvs(value: u8, major_bit: u8, minor_bit: u8) -> u8 {
    (value >> minor_bit) & ((1 << (major_bit - minor_bit + 1)) - 1)
}

/// Build a 16-bit word from its low and high bytes (6502 is little-endian)
pub fn word(low: u8, high: u8) -> u16 {
    ((high as u16) << 8) | low as u16
}

/// Split a 16-bit word into its (low, high) bytes
pub fn split_word(word: u16) -> (u8, u8) {
    ((word & 0x00FF) as u8, (word >> 8) as u8)
}
