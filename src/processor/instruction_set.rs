//! Legal 6502 instruction set
//!
//! Opcodes are decoded as the bit vector `aaabbbcc`: `aaa` selects the
//! instruction group, `bbb` the addressing mode and `cc` the category. Each
//! category has its own (group, mode) table. Category `11` holds no legal
//! instruction.
//!
//! See https://www.masswerk.at/6502/6502_instruction_set.html

use once_cell::sync::Lazy;

use crate::processor::instruction::{
    AddressingMode, Instruction, InstructionKind, MiscInstructionKind, Opcode,
};
use crate::processor::registers::Registers;
use crate::processor::status_register::StatusRegister;
use crate::utils::{self, bv};

use AddressingMode::*;
use InstructionKind::*;
use MiscInstructionKind::*;

const CATEGORIES: usize = 3;

static LEGAL_OPCODE_SET: Lazy<InstructionSet> = Lazy::new(InstructionSet::new_legal_opcode_set);

/// Addressing modes of category `01`, indexed by the mode selector
const ALU_ADDRESSING_MODES: [AddressingMode; 8] = [
    IndirectX, ZeroPage, Immediate, Absolute, IndirectY, ZeroPageX, AbsoluteY, AbsoluteX,
];

type ReadModifyWriteFn = fn(&mut Registers, u8) -> u8;

pub struct InstructionSet {
    // indexed by [category][group][mode]
    tables: [[[Option<Instruction>; 8]; 8]; CATEGORIES],
}

/// Split an opcode into its (group, mode, category) bit fields
pub fn decompose(opcode: Opcode) -> (u8, u8, u8) {
    (
        utils::bvs(opcode, 7, 5),
        utils::bvs(opcode, 4, 2),
        utils::bvs(opcode, 1, 0),
    )
}

fn compose(group: u8, mode: u8, category: u8) -> Opcode {
    (group << 5) | (mode << 2) | category
}

impl InstructionSet {
    /// Process-wide legal opcode set, built on first use
    pub fn legal() -> &'static Self {
        &LEGAL_OPCODE_SET
    }

    /// Decode `opcode`. `None` means the opcode is not implemented.
    pub fn decode(&self, opcode: Opcode) -> Option<&Instruction> {
        let (group, mode, category) = decompose(opcode);
        self.tables
            .get(category as usize)
            .and_then(|table| table[group as usize][mode as usize].as_ref())
    }

    /// All implemented instructions
    pub fn iter(&self) -> impl Iterator<Item = &Instruction> {
        self.tables
            .iter()
            .flatten()
            .flatten()
            .filter_map(|instruction| instruction.as_ref())
    }

    fn insert(
        &mut self,
        group: u8,
        mode: u8,
        category: u8,
        name: &'static str,
        instruction: InstructionKind,
        addressing_mode: AddressingMode,
    ) {
        self.tables[category as usize][group as usize][mode as usize] = Some(Instruction {
            opcode: compose(group, mode, category),
            name,
            instruction,
            addressing_mode,
        });
    }

    #[rustfmt::skip]
    fn new_legal_opcode_set() -> Self {
        let mut set = Self {
            tables: [[[None; 8]; 8]; CATEGORIES],
        };

        // Category 00: control flow, stack, flags and Y register
        // --------------------------------------------------------------------

        set.insert(0, 0, 0b00, "BRK", Misc(Break), Implied);
        set.insert(1, 0, 0b00, "JSR", Misc(Call), Absolute);
        set.insert(2, 0, 0b00, "RTI", Misc(ReturnFromInterrupt), Implied);
        set.insert(3, 0, 0b00, "RTS", Misc(Return), Implied);
        set.insert(5, 0, 0b00, "LDY", InternalExecOnMemoryData(ldy), Immediate);
        set.insert(6, 0, 0b00, "CPY", InternalExecOnMemoryData(cpy), Immediate);
        set.insert(7, 0, 0b00, "CPX", InternalExecOnMemoryData(cpx), Immediate);

        for (mode, addressing_mode) in [(1, ZeroPage), (3, Absolute)] {
            set.insert(1, mode, 0b00, "BIT", InternalExecOnMemoryData(bit), addressing_mode);
            set.insert(4, mode, 0b00, "STY", StoreOp(sty), addressing_mode);
            set.insert(5, mode, 0b00, "LDY", InternalExecOnMemoryData(ldy), addressing_mode);
            set.insert(6, mode, 0b00, "CPY", InternalExecOnMemoryData(cpy), addressing_mode);
            set.insert(7, mode, 0b00, "CPX", InternalExecOnMemoryData(cpx), addressing_mode);
        }
        set.insert(2, 3, 0b00, "JMP", Misc(Jump), Absolute);
        set.insert(3, 3, 0b00, "JMP", Misc(Jump), AbsoluteIndirect);

        set.insert(0, 2, 0b00, "PHP", Misc(Push(php)), Implied);
        set.insert(1, 2, 0b00, "PLP", Misc(Pull(plp)), Implied);
        set.insert(2, 2, 0b00, "PHA", Misc(Push(pha)), Implied);
        set.insert(3, 2, 0b00, "PLA", Misc(Pull(pla)), Implied);
        set.insert(4, 2, 0b00, "DEY", SingleByte(dey), Implied);
        set.insert(5, 2, 0b00, "TAY", SingleByte(tay), Implied);
        set.insert(6, 2, 0b00, "INY", SingleByte(iny), Implied);
        set.insert(7, 2, 0b00, "INX", SingleByte(inx), Implied);

        set.insert(0, 4, 0b00, "BPL", Misc(Branch(bpl)), Relative);
        set.insert(1, 4, 0b00, "BMI", Misc(Branch(bmi)), Relative);
        set.insert(2, 4, 0b00, "BVC", Misc(Branch(bvc)), Relative);
        set.insert(3, 4, 0b00, "BVS", Misc(Branch(bvs)), Relative);
        set.insert(4, 4, 0b00, "BCC", Misc(Branch(bcc)), Relative);
        set.insert(5, 4, 0b00, "BCS", Misc(Branch(bcs)), Relative);
        set.insert(6, 4, 0b00, "BNE", Misc(Branch(bne)), Relative);
        set.insert(7, 4, 0b00, "BEQ", Misc(Branch(beq)), Relative);

        set.insert(4, 5, 0b00, "STY", StoreOp(sty), ZeroPageX);
        set.insert(5, 5, 0b00, "LDY", InternalExecOnMemoryData(ldy), ZeroPageX);

        set.insert(0, 6, 0b00, "CLC", SingleByte(clc), Implied);
        set.insert(1, 6, 0b00, "SEC", SingleByte(sec), Implied);
        set.insert(2, 6, 0b00, "CLI", SingleByte(cli), Implied);
        set.insert(3, 6, 0b00, "SEI", SingleByte(sei), Implied);
        set.insert(4, 6, 0b00, "TYA", SingleByte(tya), Implied);
        set.insert(5, 6, 0b00, "CLV", SingleByte(clv), Implied);
        set.insert(6, 6, 0b00, "CLD", SingleByte(cld), Implied);
        set.insert(7, 6, 0b00, "SED", SingleByte(sed), Implied);

        set.insert(5, 7, 0b00, "LDY", InternalExecOnMemoryData(ldy), AbsoluteX);

        // Category 01: accumulator and memory, every group supports the eight
        // addressing modes. STA immediate decodes but can't be executed.
        // --------------------------------------------------------------------

        let alu = [
            ("ORA", InternalExecOnMemoryData(ora)),
            ("AND", InternalExecOnMemoryData(and)),
            ("EOR", InternalExecOnMemoryData(eor)),
            ("ADC", InternalExecOnMemoryData(adc)),
            ("STA", StoreOp(sta)),
            ("LDA", InternalExecOnMemoryData(lda)),
            ("CMP", InternalExecOnMemoryData(cmp)),
            ("SBC", InternalExecOnMemoryData(sbc)),
        ];
        for (group, (name, instruction)) in alu.into_iter().enumerate() {
            for (mode, addressing_mode) in ALU_ADDRESSING_MODES.into_iter().enumerate() {
                set.insert(group as u8, mode as u8, 0b01, name, instruction, addressing_mode);
            }
        }

        // Category 10: shifts, rotations, X register and memory increments
        // --------------------------------------------------------------------

        let shifts: [(&'static str, ReadModifyWriteFn); 4] = [
            ("ASL", asl),
            ("ROL", rol),
            ("LSR", lsr),
            ("ROR", ror),
        ];
        for (group, (name, fun)) in shifts.into_iter().enumerate() {
            for (mode, addressing_mode) in [(1, ZeroPage), (2, Accumulator), (3, Absolute), (5, ZeroPageX), (7, AbsoluteX)] {
                set.insert(group as u8, mode, 0b10, name, ReadModifyWrite(fun), addressing_mode);
            }
        }

        let increments: [(u8, &'static str, ReadModifyWriteFn); 2] = [(6, "DEC", dec), (7, "INC", inc)];
        for (group, name, fun) in increments {
            for (mode, addressing_mode) in [(1, ZeroPage), (3, Absolute), (5, ZeroPageX), (7, AbsoluteX)] {
                set.insert(group, mode, 0b10, name, ReadModifyWrite(fun), addressing_mode);
            }
        }

        // X register instructions index with Y
        set.insert(4, 1, 0b10, "STX", StoreOp(stx), ZeroPage);
        set.insert(4, 3, 0b10, "STX", StoreOp(stx), Absolute);
        set.insert(4, 5, 0b10, "STX", StoreOp(stx), ZeroPageY);

        set.insert(5, 0, 0b10, "LDX", InternalExecOnMemoryData(ldx), Immediate);
        set.insert(5, 1, 0b10, "LDX", InternalExecOnMemoryData(ldx), ZeroPage);
        set.insert(5, 3, 0b10, "LDX", InternalExecOnMemoryData(ldx), Absolute);
        set.insert(5, 5, 0b10, "LDX", InternalExecOnMemoryData(ldx), ZeroPageY);
        set.insert(5, 7, 0b10, "LDX", InternalExecOnMemoryData(ldx), AbsoluteY);

        set.insert(4, 2, 0b10, "TXA", SingleByte(txa), Implied);
        set.insert(5, 2, 0b10, "TAX", SingleByte(tax), Implied);
        set.insert(6, 2, 0b10, "DEX", SingleByte(dex), Implied);
        set.insert(7, 2, 0b10, "NOP", SingleByte(nop), Implied);

        set.insert(4, 6, 0b10, "TXS", SingleByte(txs), Implied);
        set.insert(5, 6, 0b10, "TSX", SingleByte(tsx), Implied);

        set
    }
}

// Transfer instructions

/// LDA - Load Accumulator with Memory
///
/// Operation:
/// M -> A
///
/// Status Register
/// N Z C I D V
/// + + - - - -
pub fn lda(cpu: &mut Registers, operand: u8) {
    cpu.acc = operand;
    cpu.sr.auto_set_zn(cpu.acc);
}

/// LDX - Load Index X with Memory
///
/// Operation:
/// M -> X
///
/// Status Register
/// N Z C I D V
/// + + - - - -
pub fn ldx(cpu: &mut Registers, operand: u8) {
    cpu.x_reg = operand;
    cpu.sr.auto_set_zn(cpu.x_reg);
}

/// LDY - Load Index Y with Memory
///
/// Operation:
/// M -> Y
///
/// Status Register
/// N Z C I D V
/// + + - - - -
pub fn ldy(cpu: &mut Registers, operand: u8) {
    cpu.y_reg = operand;
    cpu.sr.auto_set_zn(cpu.y_reg);
}

/// STA - Store Accumulator in Memory
pub fn sta(cpu: &Registers) -> u8 {
    cpu.acc
}

/// STX - Store Index X in Memory
pub fn stx(cpu: &Registers) -> u8 {
    cpu.x_reg
}

/// STY - Store Index Y in Memory
pub fn sty(cpu: &Registers) -> u8 {
    cpu.y_reg
}

/// TAX - Transfer Accumulator to Index X
///
/// Status Register:
/// N Z C I D V
/// + + - - - -
pub fn tax(cpu: &mut Registers) {
    cpu.x_reg = cpu.acc;
    cpu.sr.auto_set_zn(cpu.x_reg);
}

/// TAY - Transfer Accumulator to Index Y
///
/// Status Register:
/// N Z C I D V
/// + + - - - -
pub fn tay(cpu: &mut Registers) {
    cpu.y_reg = cpu.acc;
    cpu.sr.auto_set_zn(cpu.y_reg);
}

/// TSX - Transfer Stack Pointer to Index X
///
/// Status Register:
/// N Z C I D V
/// + + - - - -
pub fn tsx(cpu: &mut Registers) {
    cpu.x_reg = cpu.sp;
    cpu.sr.auto_set_zn(cpu.x_reg);
}

/// TXA - Transfer Index X to Accumulator
///
/// Status Register:
/// N Z C I D V
/// + + - - - -
pub fn txa(cpu: &mut Registers) {
    cpu.acc = cpu.x_reg;
    cpu.sr.auto_set_zn(cpu.acc);
}

/// TXS - Transfer Index X to Stack Pointer
///
/// Status Register:
/// N Z C I D V
/// - - - - - -
pub fn txs(cpu: &mut Registers) {
    cpu.sp = cpu.x_reg;
}

/// TYA - Transfer Index Y to Accumulator
///
/// Status Register:
/// N Z C I D V
/// + + - - - -
pub fn tya(cpu: &mut Registers) {
    cpu.acc = cpu.y_reg;
    cpu.sr.auto_set_zn(cpu.acc);
}

// Stack instructions. The CPU does the actual push and pull, these only
// produce or consume the byte.

/// PHA - Push Accumulator on Stack
pub fn pha(cpu: &Registers) -> u8 {
    cpu.acc
}

/// PHP - Push Processor Status on Stack
///
/// The status register will be pushed with the break flag and bit
/// 5 set to 1.
pub fn php(cpu: &Registers) -> u8 {
    (cpu.sr | StatusRegister::BREAK).pack()
}

/// PLA - Pull Accumulator from Stack
///
/// Status Register
/// N Z C I D V
/// + + - - - -
pub fn pla(cpu: &mut Registers, data: u8) {
    cpu.acc = data;
    cpu.sr.auto_set_zn(cpu.acc);
}

/// PLP - Pull Processor Status from Stack
///
/// The status register will be pulled with the break flag and bit
/// 5 ignored.
pub fn plp(cpu: &mut Registers, data: u8) {
    cpu.sr = StatusRegister::unpack(data);
}

// Decrements and increments

/// DEC - Decrement Memory by One
///
/// Operation:
/// M - 1 -> M
///
/// Status Register
/// N Z C I D V
/// + + - - - -
pub fn dec(cpu: &mut Registers, operand: u8) -> u8 {
    let res = operand.wrapping_sub(1);
    cpu.sr.auto_set_zn(res);
    res
}

/// DEX - Decrement Index X by One
pub fn dex(cpu: &mut Registers) {
    cpu.x_reg = cpu.x_reg.wrapping_sub(1);
    cpu.sr.auto_set_zn(cpu.x_reg);
}

/// DEY - Decrement Index Y by One
pub fn dey(cpu: &mut Registers) {
    cpu.y_reg = cpu.y_reg.wrapping_sub(1);
    cpu.sr.auto_set_zn(cpu.y_reg);
}

/// INC - Increment Memory by One
///
/// Operation:
/// M + 1 -> M
///
/// Status Register
/// N Z C I D V
/// + + - - - -
pub fn inc(cpu: &mut Registers, operand: u8) -> u8 {
    let res = operand.wrapping_add(1);
    cpu.sr.auto_set_zn(res);
    res
}

/// INX - Increment Index X by One
pub fn inx(cpu: &mut Registers) {
    cpu.x_reg = cpu.x_reg.wrapping_add(1);
    cpu.sr.auto_set_zn(cpu.x_reg);
}

/// INY - Increment Index Y by One
pub fn iny(cpu: &mut Registers) {
    cpu.y_reg = cpu.y_reg.wrapping_add(1);
    cpu.sr.auto_set_zn(cpu.y_reg);
}

// Arithmetic operations

/// ADC - Add Memory to Accumulator
///
/// The incoming carry is not added, only the carry out is produced.
///
/// Operation:
/// A + M -> A, C
///
/// Status Register:
/// N Z C I D V
/// + + + - - +
pub fn adc(cpu: &mut Registers, operand: u8) {
    let sum = cpu.acc as u16 + operand as u16;
    let res = sum as u8;
    let overflow = bv(cpu.acc, 7) == bv(operand, 7) && bv(operand, 7) != bv(res, 7);

    cpu.acc = res;
    cpu.sr.auto_set_zn(cpu.acc);
    cpu.sr.set(StatusRegister::CARRY, sum > 0xFF);
    cpu.sr.set(StatusRegister::OVERFLOW, overflow);
}

/// SBC - Subtract Memory from Accumulator
///
/// The incoming carry (borrow) is not subtracted. Carry is set when the
/// subtraction didn't borrow. Overflow is set when a negative subtrahend
/// flips the sign of the accumulator, or a negative accumulator and
/// subtrahend give a positive difference.
///
/// Operation:
/// A - M -> A
///
/// Status Register:
/// N Z C I D V
/// + + + - - +
pub fn sbc(cpu: &mut Registers, operand: u8) {
    let res = cpu.acc.wrapping_sub(operand);
    let no_borrow = cpu.acc >= operand;
    let (a7, m7, r7) = (bv(cpu.acc, 7), bv(operand, 7), bv(res, 7));
    let overflow = (a7 == 1 && m7 == 1 && r7 == 0) || (a7 == 0 && m7 == 1 && r7 == 1);

    cpu.acc = res;
    cpu.sr.auto_set_zn(cpu.acc);
    cpu.sr.set(StatusRegister::CARRY, no_borrow);
    cpu.sr.set(StatusRegister::OVERFLOW, overflow);
}

// Logic operations

/// AND - AND Memory with Accumulator
///
/// Operation:
/// A AND M -> A
///
/// Status Register:
/// N Z C I D V
/// + + - - - -
pub fn and(cpu: &mut Registers, operand: u8) {
    cpu.acc &= operand;
    cpu.sr.auto_set_zn(cpu.acc);
}

/// EOR - Exclusive-OR Memory with Accumulator
///
/// Operation:
/// A EOR M -> A
///
/// Status Register:
/// N Z C I D V
/// + + - - - -
pub fn eor(cpu: &mut Registers, operand: u8) {
    cpu.acc ^= operand;
    cpu.sr.auto_set_zn(cpu.acc);
}

/// ORA - OR Memory with Accumulator
///
/// Operation:
/// A OR M -> A
///
/// Status Register:
/// N Z C I D V
/// + + - - - -
pub fn ora(cpu: &mut Registers, operand: u8) {
    cpu.acc |= operand;
    cpu.sr.auto_set_zn(cpu.acc);
}

// Shift & Rotate instructions. All of them work on memory or on the
// accumulator, the CPU decides where the result goes.

/// ASL - Shift Left One Bit (Memory or Accumulator)
///
/// Operation:
/// C <- [76543210] <- 0
///
/// Status Register:
/// N Z C I D V
/// + + + - - -
pub fn asl(cpu: &mut Registers, operand: u8) -> u8 {
    let res = operand << 1;
    cpu.sr.auto_set_zn(res);
    cpu.sr.set(StatusRegister::CARRY, bv(operand, 7) != 0);
    res
}

/// LSR - Shift One Bit Right (Memory or Accumulator)
///
/// Operation:
/// 0 -> [76543210] -> C
///
/// Status Register:
/// N Z C I D V
/// 0 + + - - -
pub fn lsr(cpu: &mut Registers, operand: u8) -> u8 {
    let res = operand >> 1;
    cpu.sr.auto_set_zn(res);
    cpu.sr.set(StatusRegister::CARRY, bv(operand, 0) != 0);
    res
}

/// ROL - Rotate One Bit Left (Memory or Accumulator)
///
/// Operation:
/// C <- [76543210] <- C
///
/// Status Register:
/// N Z C I D V
/// + + + - - -
pub fn rol(cpu: &mut Registers, operand: u8) -> u8 {
    let carry = cpu.sr.contains(StatusRegister::CARRY) as u8;
    let res = (operand << 1) | carry;
    cpu.sr.auto_set_zn(res);
    cpu.sr.set(StatusRegister::CARRY, bv(operand, 7) != 0);
    res
}

/// ROR - Rotate One Bit Right (Memory or Accumulator)
///
/// Operation:
/// C -> [76543210] -> C
///
/// Status Register:
/// N Z C I D V
/// + + + - - -
pub fn ror(cpu: &mut Registers, operand: u8) -> u8 {
    let carry = cpu.sr.contains(StatusRegister::CARRY) as u8;
    let res = (operand >> 1) | (carry << 7);
    cpu.sr.auto_set_zn(res);
    cpu.sr.set(StatusRegister::CARRY, bv(operand, 0) != 0);
    res
}

// Flag instructions

/// CLC - Clear Carry Flag
pub fn clc(cpu: &mut Registers) {
    cpu.sr.remove(StatusRegister::CARRY);
}

/// CLD - Clear Decimal Mode
pub fn cld(cpu: &mut Registers) {
    cpu.sr.remove(StatusRegister::DECIMAL);
}

/// CLI - Clear Interrupt Disable Bit
pub fn cli(cpu: &mut Registers) {
    cpu.sr.remove(StatusRegister::INTERRUPT_DISABLE);
}

/// CLV - Clear Overflow Flag
pub fn clv(cpu: &mut Registers) {
    cpu.sr.remove(StatusRegister::OVERFLOW);
}

/// SEC - Set Carry Flag
pub fn sec(cpu: &mut Registers) {
    cpu.sr.insert(StatusRegister::CARRY);
}

/// SED - Set Decimal Flag
pub fn sed(cpu: &mut Registers) {
    cpu.sr.insert(StatusRegister::DECIMAL);
}

/// SEI - Set Interrupt Disable Status
pub fn sei(cpu: &mut Registers) {
    cpu.sr.insert(StatusRegister::INTERRUPT_DISABLE);
}

// Comparisons

fn generic_cmp(sr: &mut StatusRegister, a: u8, b: u8) {
    sr.auto_set_zn(a.wrapping_sub(b));
    sr.set(StatusRegister::CARRY, a >= b);
}

/// CMP - Compare Memory with Accumulator
///
/// Unlike CPX and CPY, the negative flag is taken from the accumulator
/// itself and not from the difference.
///
/// Operation:
/// A - M
///
/// Status Register:
/// N Z C I D V
/// + + + - - -
pub fn cmp(cpu: &mut Registers, operand: u8) {
    cpu.sr.set(StatusRegister::CARRY, cpu.acc >= operand);
    cpu.sr.set(StatusRegister::ZERO, cpu.acc == operand);
    cpu.sr.set(StatusRegister::NEGATIVE, bv(cpu.acc, 7) != 0);
}

/// CPX - Compare Memory and Index X
///
/// Operation:
/// X - M
///
/// Status Register:
/// N Z C I D V
/// + + + - - -
pub fn cpx(cpu: &mut Registers, operand: u8) {
    generic_cmp(&mut cpu.sr, cpu.x_reg, operand);
}

/// CPY - Compare Memory and Index Y
///
/// Operation:
/// Y - M
///
/// Status Register:
/// N Z C I D V
/// + + + - - -
pub fn cpy(cpu: &mut Registers, operand: u8) {
    generic_cmp(&mut cpu.sr, cpu.y_reg, operand);
}

// Conditional branches. They only evaluate the condition, the relative jump
// is done by the CPU.

/// BCC - Branch on Carry Clear
pub fn bcc(sr: &StatusRegister) -> bool {
    !sr.contains(StatusRegister::CARRY)
}

/// BCS - Branch on Carry Set
pub fn bcs(sr: &StatusRegister) -> bool {
    sr.contains(StatusRegister::CARRY)
}

/// BEQ - Branch on Result Zero
pub fn beq(sr: &StatusRegister) -> bool {
    sr.contains(StatusRegister::ZERO)
}

/// BMI - Branch on Result Minus
pub fn bmi(sr: &StatusRegister) -> bool {
    sr.contains(StatusRegister::NEGATIVE)
}

/// BNE - Branch on Result not Zero
pub fn bne(sr: &StatusRegister) -> bool {
    !sr.contains(StatusRegister::ZERO)
}

/// BPL - Branch on Result Plus
pub fn bpl(sr: &StatusRegister) -> bool {
    !sr.contains(StatusRegister::NEGATIVE)
}

/// BVC - Branch on Overflow Clear
pub fn bvc(sr: &StatusRegister) -> bool {
    !sr.contains(StatusRegister::OVERFLOW)
}

/// BVS - Branch on Overflow Set
pub fn bvs(sr: &StatusRegister) -> bool {
    sr.contains(StatusRegister::OVERFLOW)
}

// Other

/// BIT - Test Bits in Memory with Accumulator
///
/// bits 7 and 6 of operand are transfered to bit 7 and 6 of SR
/// (N,V); the zero-flag is set to the result of operand AND
/// accumulator.
///
/// Operation:
/// A AND M, M7 -> N, M6 -> V
///
/// Status Register:
///  N Z C I D V
/// M7 + - - - M6
pub fn bit(cpu: &mut Registers, operand: u8) {
    cpu.sr.set(StatusRegister::ZERO, cpu.acc & operand == 0);
    cpu.sr.set(StatusRegister::NEGATIVE, bv(operand, 7) != 0);
    cpu.sr.set(StatusRegister::OVERFLOW, bv(operand, 6) != 0);
}

/// NOP - No Operation
pub fn nop(_: &mut Registers) {}
