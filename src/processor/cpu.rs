#[cfg(test)]
mod tests;

use log::{debug, trace, warn};

use crate::errors::CpuError;
use crate::hardware::{IRQ_VECTOR, NMI_VECTOR, RESET_VECTOR, STACK_PAGE_START};
use crate::utils;

use super::bus::Bus;
use super::instruction::{AddressingMode, InstructionKind, MiscInstructionKind};
use super::instruction_set::InstructionSet;
use super::registers::Registers;
use super::status_register::StatusRegister;

use AddressingMode::*;
use InstructionKind::*;
use MiscInstructionKind::*;

/// Hardware interrupt lines
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Interrupt {
    /// Non-maskable interrupt
    Nmi,
    /// Interrupt request, ignored while interrupts are disabled
    Irq,
}

/// MOS 6502 processor emulator.
///
/// CPU abstraction is connected to a `Bus` to perform read and write
/// operations on it.
///
/// This implementation uses the legal opcode instruction set. Illegal
/// instructions are not implemented and are reported as such. Execution is
/// instruction-stepped, cycles are not emulated.
pub struct Cpu<'a> {
    regs: Registers,
    bus: Bus<'a>,
    instruction_set: &'static InstructionSet,
}

impl<'a> Cpu<'a> {
    /// Create a new CPU connected to `bus` and reset it
    pub fn new(bus: Bus<'a>) -> Self {
        let mut new = Self {
            regs: Registers::default(),
            bus,
            instruction_set: InstructionSet::legal(),
        };
        new.reset();
        new
    }

    /// Load the program counter from the reset vector and restore the
    /// power-on status register. RAM, stack pointer and data registers are
    /// left untouched.
    pub fn reset(&mut self) {
        self.regs.pc = self.bus.read_word(RESET_VECTOR);
        self.regs.sr = StatusRegister::power_on();
        debug!("CPU reset, starting at ${:0>4X}", self.regs.pc);
    }

    pub fn registers(&self) -> &Registers {
        &self.regs
    }

    pub fn registers_mut(&mut self) -> &mut Registers {
        &mut self.regs
    }

    pub fn bus(&self) -> &Bus<'a> {
        &self.bus
    }

    pub fn bus_mut(&mut self) -> &mut Bus<'a> {
        &mut self.bus
    }

    /// Fetch the instruction pointed by the program counter from memory and
    /// execute it atomically.
    ///
    /// Errors are never fatal. Whatever happens, the program counter is left
    /// at the next instruction boundary and the CPU can keep stepping.
    pub fn step(&mut self) -> Result<(), CpuError> {
        let address = self.regs.pc;
        let opcode = self.bus.read(address);
        self.regs.pc = self.regs.pc.wrapping_add(1);

        let instruction_set = self.instruction_set;
        let Some(instruction) = instruction_set.decode(opcode) else {
            let error = CpuError::UnimplementedOpcode { opcode, address };
            warn!("{error}");
            return Err(error);
        };

        trace!(
            "${address:0>4X}: {opcode:0>2X} {} {:?} | {}",
            instruction.name,
            instruction.addressing_mode,
            self.regs
        );

        self.exec(instruction.instruction, instruction.addressing_mode)
            .map_err(|error| {
                warn!("{} at ${address:0>4X}: {error}", instruction.name);
                error
            })
    }

    /// Execute `n` instructions in order. Faults don't stop the run, they are
    /// collected and returned.
    pub fn step_n(&mut self, n: usize) -> Vec<CpuError> {
        (0..n).filter_map(|_| self.step().err()).collect()
    }

    /// Service a hardware interrupt: push PC and status register and jump
    /// through the interrupt vector
    pub fn interrupt(&mut self, interrupt: Interrupt) {
        let vector = match interrupt {
            Interrupt::Irq if self.regs.sr.contains(StatusRegister::INTERRUPT_DISABLE) => {
                debug!("IRQ ignored, interrupts are disabled");
                return;
            }
            Interrupt::Irq => IRQ_VECTOR,
            Interrupt::Nmi => NMI_VECTOR,
        };
        trace!("{interrupt:?} at ${:0>4X}", self.regs.pc);

        // Hardware interrupts push the status register with break clear
        let status = (self.regs.sr - StatusRegister::BREAK).pack();
        self.enter_interrupt(vector, status);
    }

    /// Effective address for `mode` with the program counter at the operand.
    /// The program counter doesn't move.
    ///
    /// Immediate and Relative resolve to the operand byte itself. Implied and
    /// Accumulator have no operand and resolve to the program counter.
    pub fn peek_address(&self, mode: AddressingMode) -> u16 {
        let pc = self.regs.pc;
        let x = self.regs.x_reg as u16;
        let y = self.regs.y_reg as u16;

        match mode {
            Implied | Accumulator | Immediate | Relative => pc,

            // Effective address is 00, ADL
            ZeroPage => self.bus.read(pc) as u16,
            ZeroPageX => (self.bus.read(pc) as u16).wrapping_add(x),
            ZeroPageY => (self.bus.read(pc) as u16).wrapping_add(y),

            // Effective address is ADH, ADL
            Absolute => self.bus.read_word(pc),
            AbsoluteX => self.bus.read_word(pc).wrapping_add(x),
            AbsoluteY => self.bus.read_word(pc).wrapping_add(y),

            IndirectX => {
                let pointer = (self.bus.read(pc) as u16).wrapping_add(x);
                self.bus.read_word(pointer)
            }
            IndirectY => {
                let pointer = self.bus.read(pc) as u16;
                self.bus.read_word(pointer).wrapping_add(y)
            }
            AbsoluteIndirect => {
                let pointer = self.bus.read_word(pc);
                self.bus.read_word(pointer)
            }
        }
    }

    /// Effective address for `mode`, leaving the program counter past the
    /// operand bytes
    fn fetch_address(&mut self, mode: AddressingMode) -> u16 {
        let address = self.peek_address(mode);
        self.regs.pc = self.regs.pc.wrapping_add(mode.operand_bytes());
        address
    }

    /// Fetch the operand value for `mode`
    fn load(&mut self, mode: AddressingMode) -> u8 {
        match mode {
            Accumulator => self.regs.acc,
            _ => {
                let address = self.fetch_address(mode);
                self.bus.read(address)
            }
        }
    }

    /// Write `data` to the effective address of `mode`
    fn store(&mut self, mode: AddressingMode, data: u8) -> Result<(), CpuError> {
        if matches!(mode, Immediate | Implied | Accumulator | Relative) {
            let address = self.regs.pc;
            self.regs.pc = self.regs.pc.wrapping_add(mode.operand_bytes());
            return Err(CpuError::InvalidWrite { mode, address });
        }

        let address = self.fetch_address(mode);
        self.bus.try_write(address, data)?;
        Ok(())
    }

    fn exec(&mut self, instruction: InstructionKind, mode: AddressingMode) -> Result<(), CpuError> {
        match instruction {
            SingleByte(fun) => {
                fun(&mut self.regs);
            }
            InternalExecOnMemoryData(fun) => {
                let data = self.load(mode);
                fun(&mut self.regs, data);
            }
            StoreOp(fun) => {
                let data = fun(&self.regs);
                self.store(mode, data)?;
            }
            ReadModifyWrite(fun) => {
                if mode == Accumulator {
                    let data = self.regs.acc;
                    self.regs.acc = fun(&mut self.regs, data);
                } else {
                    // Address is resolved once and used for both accesses
                    let address = self.fetch_address(mode);
                    let data = self.bus.read(address);
                    let result = fun(&mut self.regs, data);
                    self.bus.try_write(address, result)?;
                }
            }
            Misc(kind) => match kind {
                Push(fun) => {
                    let data = fun(&self.regs);
                    self.push(data);
                }
                Pull(fun) => {
                    let data = self.pull();
                    fun(&mut self.regs, data);
                }
                Jump => self.jmp(mode),
                Branch(condition) => self.branch(condition),
                Call => self.jsr(mode),
                Return => self.rts(),
                Break => self.brk(),
                ReturnFromInterrupt => self.rti(),
            },
        }
        Ok(())
    }

    // Stack

    fn push(&mut self, data: u8) {
        self.bus.write(STACK_PAGE_START + self.regs.sp as u16, data);
        self.regs.sp = self.regs.sp.wrapping_sub(1);
    }

    fn pull(&mut self) -> u8 {
        self.regs.sp = self.regs.sp.wrapping_add(1);
        self.bus.read(STACK_PAGE_START + self.regs.sp as u16)
    }

    fn push_word(&mut self, word: u16) {
        let (low, high) = utils::split_word(word);
        self.push(high);
        self.push(low);
    }

    fn pull_word(&mut self) -> u16 {
        let low = self.pull();
        let high = self.pull();
        utils::word(low, high)
    }

    fn enter_interrupt(&mut self, vector: u16, status: u8) {
        self.push_word(self.regs.pc);
        self.push(status);
        self.regs.sr.insert(StatusRegister::INTERRUPT_DISABLE);
        self.regs.pc = self.bus.read_word(vector);
    }

    // Conditional branch

    /// Relative jump when `condition` holds for the status register. The
    /// offset is relative to the next instruction.
    fn branch(&mut self, condition: fn(&StatusRegister) -> bool) {
        let offset = self.load(Relative) as i8;
        if condition(&self.regs.sr) {
            self.regs.pc = self.regs.pc.wrapping_add_signed(offset as i16);
        }
    }

    // Jumps and subroutines

    /// JMP - Jump to New Location
    ///
    /// Operation:
    /// (PC+1) -> PCL
    /// (PC+2) -> PCH
    ///
    /// Status Register:
    /// N Z C I D V
    /// - - - - - -
    fn jmp(&mut self, mode: AddressingMode) {
        self.regs.pc = self.fetch_address(mode);
    }

    /// JSR - Jump to New Location Saving Return Address
    ///
    /// The pushed return address points to the last byte of the JSR
    /// instruction.
    ///
    /// Operation:
    /// push (PC+2)
    /// (PC+1) -> PCL
    /// (PC+2) -> PCH
    ///
    /// Status Register:
    /// N Z C I D V
    /// - - - - - -
    fn jsr(&mut self, mode: AddressingMode) {
        let address = self.fetch_address(mode);
        self.push_word(self.regs.pc.wrapping_sub(1));
        self.regs.pc = address;
    }

    /// RTS - Return from subroutine
    ///
    /// Operation:
    /// pull PC, PC+1 -> PC
    ///
    /// Status Register:
    /// N Z C I D V
    /// - - - - - -
    fn rts(&mut self) {
        self.regs.pc = self.pull_word().wrapping_add(1);
    }

    // Interrupts

    /// BRK - Force Break
    ///
    /// BRK initiates a software interrupt similar to a hardware
    /// interrupt (IRQ). The return address pushed to the stack is
    /// PC+2, providing an extra byte of spacing for a break mark
    /// (identifying a reason for the break.)
    ///
    /// The status register will be pushed to the stack with the break
    /// flag set to 1. However, when retrieved during RTI or by a PLP
    /// instruction, the break flag will be ignored.
    ///
    /// Operation:
    /// interrupt, push PC+2, push SR
    ///
    /// Status Register:
    /// N Z C I D V
    /// - - - 1 - -
    fn brk(&mut self) {
        self.regs.pc = self.regs.pc.wrapping_add(1);
        let status = (self.regs.sr | StatusRegister::BREAK).pack();
        self.enter_interrupt(IRQ_VECTOR, status);
    }

    /// RTI - Return from Interrupt
    ///
    /// The status register is pulled with the break flag and bit 5
    /// ignored. Then PC is pulled from stack.
    ///
    /// Operation:
    /// pull SR, pull PC
    ///
    /// Status Register:
    ///  N Z C I D V
    ///  from stack
    fn rti(&mut self) {
        let status = self.pull();
        self.regs.sr = StatusRegister::unpack(status);
        self.regs.pc = self.pull_word();
    }
}
