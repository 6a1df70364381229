use crate::processor::registers::Registers;
use crate::processor::status_register::StatusRegister;

pub type Opcode = u8;

/// Decoded instruction: what to execute and how to reach its operand
#[derive(Clone, Copy)]
pub struct Instruction {
    pub opcode: Opcode,
    pub name: &'static str,
    pub instruction: InstructionKind,
    pub addressing_mode: AddressingMode,
}

#[derive(Clone, Copy)]
pub enum InstructionKind {
    SingleByte(fn(&mut Registers)),
    InternalExecOnMemoryData(fn(&mut Registers, u8)),
    StoreOp(fn(&Registers) -> u8),
    ReadModifyWrite(fn(&mut Registers, u8) -> u8),
    Misc(MiscInstructionKind),
}

#[derive(Clone, Copy)]
pub enum MiscInstructionKind {
    Push(fn(&Registers) -> u8),
    Pull(fn(&mut Registers, u8)),
    Jump,
    Branch(fn(&StatusRegister) -> bool),
    Call,
    Return,
    Break,
    ReturnFromInterrupt,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AddressingMode {
    Implied,          // Implied Addressing
    Accumulator,      // Accumulator Addressing
    Immediate,        // Immediate Addressing
    ZeroPage,         // Zero Page Addressing
    ZeroPageX,        // Zero Page Indexed Addressing (X)
    ZeroPageY,        // Zero Page Indexed Addressing (Y)
    Absolute,         // Absolute Addressing
    AbsoluteX,        // Absolute Indexed Addressing (X)
    AbsoluteY,        // Absolute Indexed Addressing (Y)
    IndirectX,        // Zero Page Indexed Indirect Addressing (X)
    IndirectY,        // Zero Page Indirect Indexed Addressing (Y)
    AbsoluteIndirect, // Indirect Addressing (jump operations)
    Relative,         // Relative Addressing (branch operations)
}

impl AddressingMode {
    /// Number of operand bytes following the opcode
    pub fn operand_bytes(&self) -> u16 {
        use AddressingMode::*;

        match self {
            Implied | Accumulator => 0,
            Immediate | ZeroPage | ZeroPageX | ZeroPageY | IndirectX | IndirectY | Relative => 1,
            Absolute | AbsoluteX | AbsoluteY | AbsoluteIndirect => 2,
        }
    }
}
