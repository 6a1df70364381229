#![allow(non_snake_case)]

use super::*;
use crate::assembler::assemble;
use crate::mappers::FlatRamMapper;

const PROGRAM_START: u16 = 0x8000;

const CARRY: StatusRegister = StatusRegister::CARRY;
const ZERO: StatusRegister = StatusRegister::ZERO;
const INTERRUPT_DISABLE: StatusRegister = StatusRegister::INTERRUPT_DISABLE;
const OVERFLOW: StatusRegister = StatusRegister::OVERFLOW;
const NEGATIVE: StatusRegister = StatusRegister::NEGATIVE;

// Get a CPU on a flat RAM cartridge with `program` loaded at $8000 and the
// reset vector pointing to it
fn test_cpu_with_program(program: &[&str]) -> Cpu<'static> {
    let program = assemble(program).unwrap();
    test_cpu_with_bytes(&program)
}

fn test_cpu_with_bytes(program: &[u8]) -> Cpu<'static> {
    let mut bus = Bus::new(Box::new(FlatRamMapper::new()));
    bus.load(PROGRAM_START, program);
    bus.load(RESET_VECTOR, &[0x00, 0x80]);
    Cpu::new(bus)
}

fn run(cpu: &mut Cpu, steps: usize) {
    for _ in 0..steps {
        cpu.step().unwrap();
    }
}

//////////////////////////////////////////////////////////////////////
// RESET AND DECODING
//////////////////////////////////////////////////////////////////////

#[test]
fn test_power_on_state() {
    let cpu = test_cpu_with_program(&[]);
    let regs = cpu.registers();

    assert_eq!(regs.pc, PROGRAM_START);
    assert_eq!(regs.sp, 0xFD);
    assert_eq!(regs.acc, 0);
    assert_eq!(regs.sr.pack(), 0b0010_0100);
}

#[test]
fn test_reset_vector() {
    let mut cpu = test_cpu_with_program(&[]);

    for vector in [0x0000, 0x1234, 0x8000, 0xC5F0, 0xFFFF] {
        let (low, high) = utils::split_word(vector);
        cpu.bus_mut().load(RESET_VECTOR, &[low, high]);
        cpu.reset();
        assert_eq!(cpu.registers().pc, vector);
    }
}

#[test]
fn test_reset_keeps_memory_and_stack() {
    let mut cpu = test_cpu_with_program(&["LDA #$42", "PHA", "STA $0200", "SEC"]);
    run(&mut cpu, 4);

    cpu.reset();

    let regs = cpu.registers();
    assert_eq!(regs.pc, PROGRAM_START);
    assert_eq!(regs.sp, 0xFC);
    assert_eq!(regs.acc, 0x42);
    assert_eq!(regs.sr, StatusRegister::power_on());
    assert_eq!(cpu.bus().read(0x0200), 0x42);
    assert_eq!(cpu.bus().read(0x01FD), 0x42);
}

#[test]
fn test_unimplemented_opcodes() {
    for opcode in [0x02, 0x03, 0x80, 0x9E, 0xFF] {
        let mut cpu = test_cpu_with_bytes(&[opcode, 0xA9, 0x01]);
        let before = cpu.registers().clone();

        let result = cpu.step();
        assert!(matches!(
            result,
            Err(CpuError::UnimplementedOpcode { opcode: op, address: PROGRAM_START }) if op == opcode
        ));

        // Only PC moves, past the opcode byte
        let expected = Registers {
            pc: PROGRAM_START + 1,
            ..before
        };
        assert_eq!(cpu.registers(), &expected);

        // and the CPU keeps running
        cpu.step().unwrap();
        assert_eq!(cpu.registers().acc, 0x01);
    }
}

#[test]
fn test_step_n_collects_faults() {
    let mut cpu = test_cpu_with_bytes(&[0x02, 0xA9, 0x01, 0xFF, 0xE8]);

    let faults = cpu.step_n(4);
    assert_eq!(faults.len(), 2);
    assert_eq!(cpu.registers().acc, 0x01);
    assert_eq!(cpu.registers().x_reg, 0x01);
    assert_eq!(cpu.registers().pc, PROGRAM_START + 5);
}

//////////////////////////////////////////////////////////////////////
// PROGRAMS
//////////////////////////////////////////////////////////////////////

#[test]
fn test_program_LDA_sequence() {
    let mut cpu = test_cpu_with_program(&["LDA #$0A", "LDA #$FE", "LDA #$00"]);

    cpu.step().unwrap();
    assert_eq!(cpu.registers().acc, 0x0A);
    assert!(!cpu.registers().sr.contains(NEGATIVE));
    assert!(!cpu.registers().sr.contains(ZERO));

    cpu.step().unwrap();
    assert_eq!(cpu.registers().acc, 0xFE);
    assert!(cpu.registers().sr.contains(NEGATIVE));
    assert!(!cpu.registers().sr.contains(ZERO));

    cpu.step().unwrap();
    assert_eq!(cpu.registers().acc, 0x00);
    assert!(!cpu.registers().sr.contains(NEGATIVE));
    assert!(cpu.registers().sr.contains(ZERO));

    assert_eq!(cpu.registers().pc, PROGRAM_START + 6);
}

#[test]
fn test_program_load_immediate_flags() {
    for value in 0..=u8::MAX {
        let mut cpu = test_cpu_with_bytes(&[0xA9, value]);
        cpu.step().unwrap();

        let sr = cpu.registers().sr;
        assert_eq!(sr.contains(NEGATIVE), value & 0x80 != 0);
        assert_eq!(sr.contains(ZERO), value == 0);
    }
}

#[test]
fn test_program_ADC() {
    let mut cpu = test_cpu_with_program(&[
        "LDA #%10100110",
        "STA $20",
        "LDA #%11001100",
        "ADC $20",
    ]);
    run(&mut cpu, 4);

    let regs = cpu.registers();
    assert_eq!(regs.acc, 0b0111_0010);
    assert!(regs.sr.contains(CARRY));
    assert!(regs.sr.contains(OVERFLOW));
    assert!(!regs.sr.contains(NEGATIVE));
    assert!(!regs.sr.contains(ZERO));
}

#[test]
fn test_program_SBC() {
    let mut cpu = test_cpu_with_program(&["LDA #$50", "SBC #$B0"]);
    run(&mut cpu, 2);

    let regs = cpu.registers();
    assert_eq!(regs.acc, 0xA0);
    assert!(!regs.sr.contains(CARRY));
    assert!(regs.sr.contains(OVERFLOW));
    assert!(regs.sr.contains(NEGATIVE));
}

#[test]
fn test_program_CMP() {
    // equal
    let mut cpu = test_cpu_with_program(&["LDA #$3E", "STA $20", "CMP $20"]);
    run(&mut cpu, 3);
    assert!(cpu.registers().sr.contains(ZERO));
    assert!(cpu.registers().sr.contains(CARRY));

    // memory lower than accumulator
    let mut cpu = test_cpu_with_program(&["LDA #$3D", "STA $20", "LDA #$3E", "CMP $20"]);
    run(&mut cpu, 4);
    assert!(!cpu.registers().sr.contains(ZERO));
    assert!(cpu.registers().sr.contains(CARRY));

    // memory greater than accumulator
    let mut cpu = test_cpu_with_program(&["LDA #$3F", "STA $20", "LDA #$3E", "CMP $20"]);
    run(&mut cpu, 4);
    assert!(!cpu.registers().sr.contains(ZERO));
    assert!(!cpu.registers().sr.contains(CARRY));
}

#[test]
fn test_program_ASL_accumulator() {
    let mut cpu = test_cpu_with_program(&["LDA #%10100110", "ASL"]);
    run(&mut cpu, 2);

    let regs = cpu.registers();
    assert_eq!(regs.acc, 0b0100_1100);
    assert!(regs.sr.contains(CARRY));
    assert!(!regs.sr.contains(NEGATIVE));
    assert!(!regs.sr.contains(ZERO));
    assert_eq!(regs.pc, PROGRAM_START + 3);
}

#[test]
fn test_program_rotate_memory_with_carry() {
    let mut cpu = test_cpu_with_program(&["LDA #$80", "STA $20", "SEC", "ROL $20", "ROR $20"]);

    run(&mut cpu, 4);
    assert_eq!(cpu.bus().read(0x0020), 0x01);
    assert!(cpu.registers().sr.contains(CARRY));

    run(&mut cpu, 1);
    assert_eq!(cpu.bus().read(0x0020), 0x80);
    assert!(cpu.registers().sr.contains(CARRY));
    assert!(cpu.registers().sr.contains(NEGATIVE));
}

#[test]
fn test_program_branch_not_taken() {
    let mut cpu = test_cpu_with_program(&["SEC", "BCC $04"]);
    run(&mut cpu, 2);
    assert_eq!(cpu.registers().pc, PROGRAM_START + 1 + 2);

    let mut cpu = test_cpu_with_program(&["LDA #$01", "BEQ %11111100"]);
    run(&mut cpu, 2);
    assert_eq!(cpu.registers().pc, PROGRAM_START + 2 + 2);
}

#[test]
fn test_program_branch_taken() {
    let mut cpu = test_cpu_with_program(&["CLC", "BCC $04"]);
    run(&mut cpu, 2);
    assert_eq!(cpu.registers().pc, PROGRAM_START + 1 + 2 + 4);

    let mut cpu = test_cpu_with_program(&["CLC", "BCC %11111100"]);
    run(&mut cpu, 2);
    assert_eq!(cpu.registers().pc, PROGRAM_START + 1 + 2 - 4);
}

#[test]
fn test_program_countdown_loop() {
    // Y = 5 + 4 + 3 + 2 + 1 through a backwards branch
    let mut cpu = test_cpu_with_program(&[
        "LDX #$05", // $8000
        "LDY #$00", // $8002
        "STX $10",  // $8004
        "TYA",      // $8006
        "CLC",      // $8007
        "ADC $10",  // $8008
        "TAY",      // $800A
        "DEX",      // $800B
        "BNE %11110110", // $800C, back to $8004
        "NOP",      // $800E
    ]);

    while cpu.registers().pc != 0x800E {
        cpu.step().unwrap();
    }

    assert_eq!(cpu.registers().y_reg, 15);
    assert_eq!(cpu.registers().x_reg, 0);
    assert!(cpu.registers().sr.contains(ZERO));
}

#[test]
fn test_program_indexed_addressing() {
    let mut cpu = test_cpu_with_program(&[
        "LDA #$11",
        "STA $0234",
        "LDA #$22",
        "STA $15",
        "LDX #$04",
        "LDY #$04",
        "LDA $0230,X",
        "STA $0300",
        "LDA $0230,Y",
        "STA $0301",
        "LDA $11,X",
        "STA $0302",
        "LDX $11,Y",
    ]);
    run(&mut cpu, 13);

    assert_eq!(cpu.bus().read(0x0300), 0x11);
    assert_eq!(cpu.bus().read(0x0301), 0x11);
    assert_eq!(cpu.bus().read(0x0302), 0x22);
    assert_eq!(cpu.registers().x_reg, 0x22);
}

#[test]
fn test_program_indirect_addressing() {
    let mut cpu = test_cpu_with_program(&[
        // pointer at $10 -> $0300
        "LDA #$00",
        "STA $10",
        "LDA #$03",
        "STA $11",
        "LDA #$AB",
        "STA $0302",
        "LDX #$04",
        "LDY #$02",
        "LDA ($0C,X)", // pointer at $0C + 4
        "STA $20",
        "LDA ($10),Y", // ($0300) + 2
        "STA $21",
    ]);
    run(&mut cpu, 12);

    assert_eq!(cpu.bus().read(0x0020), 0x00);
    assert_eq!(cpu.bus().read(0x0021), 0xAB);

    // IndirectX reads the byte at $0300 itself
    cpu.bus_mut().write(0x0300, 0x5A);
    cpu.registers_mut().pc = PROGRAM_START + 0x11;
    run(&mut cpu, 1);
    assert_eq!(cpu.registers().acc, 0x5A);
}

#[test]
fn test_program_stack() {
    let mut cpu = test_cpu_with_program(&["LDA #$80", "PHA", "LDA #$00", "PLA", "PHP", "PLP"]);

    run(&mut cpu, 2);
    assert_eq!(cpu.registers().sp, 0xFC);
    assert_eq!(cpu.bus().read(0x01FD), 0x80);

    run(&mut cpu, 2);
    assert_eq!(cpu.registers().acc, 0x80);
    assert_eq!(cpu.registers().sp, 0xFD);
    assert!(cpu.registers().sr.contains(NEGATIVE));

    let sr = cpu.registers().sr;
    run(&mut cpu, 1);
    // pushed with break and bit 5 set
    assert_eq!(cpu.bus().read(0x01FD), sr.pack() | 0b0001_0000);

    run(&mut cpu, 1);
    assert_eq!(cpu.registers().sr, sr);
    assert_eq!(cpu.registers().sp, 0xFD);
}

#[test]
fn test_program_stack_pointer_wraps() {
    let mut cpu = test_cpu_with_program(&["LDX #$00", "TXS", "PHA", "PLA"]);

    run(&mut cpu, 3);
    assert_eq!(cpu.registers().sp, 0xFF);

    run(&mut cpu, 1);
    assert_eq!(cpu.registers().sp, 0x00);
}

#[test]
fn test_program_JSR_RTS() {
    let mut cpu = test_cpu_with_program(&[
        "JSR $8006", // $8000
        "LDX #$01",  // $8003
        "NOP",       // $8005
        "LDA #$42",  // $8006
        "RTS",       // $8008
    ]);

    run(&mut cpu, 1);
    assert_eq!(cpu.registers().pc, 0x8006);
    assert_eq!(cpu.registers().sp, 0xFB);
    // return address is the last byte of JSR
    assert_eq!(cpu.bus().read(0x01FD), 0x80);
    assert_eq!(cpu.bus().read(0x01FC), 0x02);

    run(&mut cpu, 2);
    assert_eq!(cpu.registers().pc, 0x8003);
    assert_eq!(cpu.registers().sp, 0xFD);

    run(&mut cpu, 1);
    assert_eq!(cpu.registers().acc, 0x42);
    assert_eq!(cpu.registers().x_reg, 0x01);
}

#[test]
fn test_program_JMP() {
    let mut cpu = test_cpu_with_program(&["JMP $9000"]);
    run(&mut cpu, 1);
    assert_eq!(cpu.registers().pc, 0x9000);

    let mut cpu = test_cpu_with_program(&["LDA #$34", "STA $0200", "LDA #$12", "STA $0201", "JMP ($0200)"]);
    run(&mut cpu, 5);
    assert_eq!(cpu.registers().pc, 0x1234);
}

#[test]
fn test_program_BRK_RTI() {
    let mut cpu = test_cpu_with_program(&[
        "SEC",      // $8000
        "BRK",      // $8001
        "NOP",      // $8002, padding byte
        "LDA #$01", // $8003
    ]);
    cpu.bus_mut().load(IRQ_VECTOR, &[0x00, 0x90]);
    cpu.bus_mut().load(0x9000, &assemble(&["CLC", "RTI"]).unwrap());

    run(&mut cpu, 2);
    let regs = cpu.registers();
    assert_eq!(regs.pc, 0x9000);
    assert_eq!(regs.sp, 0xFA);
    assert!(regs.sr.contains(INTERRUPT_DISABLE));
    assert_eq!(cpu.bus().read(0x01FD), 0x80);
    assert_eq!(cpu.bus().read(0x01FC), 0x03);
    // I, C, break and bit 5
    assert_eq!(cpu.bus().read(0x01FB), 0b0011_0101);

    run(&mut cpu, 2);
    let regs = cpu.registers();
    assert_eq!(regs.pc, 0x8003);
    assert_eq!(regs.sp, 0xFD);
    assert_eq!(regs.sr, INTERRUPT_DISABLE | CARRY);

    run(&mut cpu, 1);
    assert_eq!(cpu.registers().acc, 0x01);
}

#[test]
fn test_program_BIT() {
    let mut cpu = test_cpu_with_program(&["LDA #$C0", "STA $20", "LDA #$01", "BIT $20"]);
    run(&mut cpu, 4);

    let regs = cpu.registers();
    assert!(regs.sr.contains(ZERO | NEGATIVE | OVERFLOW));
    assert_eq!(regs.acc, 0x01);
}

//////////////////////////////////////////////////////////////////////
// ADDRESSING AND WRITES
//////////////////////////////////////////////////////////////////////

#[test]
fn test_read_modify_write_address_round_trip() {
    let cases: [(&str, u16); 6] = [
        ("INC $20", 0x0020),
        ("DEC $20,X", 0x0025),
        ("ASL $0300", 0x0300),
        ("LSR $0300,X", 0x0305),
        ("ROL $20", 0x0020),
        ("ROR $0300,X", 0x0305),
    ];

    for (line, address) in cases {
        let mut cpu = test_cpu_with_program(&["LDX #$05", line]);
        cpu.bus_mut().write(address, 0b0000_0110);
        run(&mut cpu, 1);

        let pc = cpu.registers().pc;
        let opcode = cpu.bus().read(pc);
        let mode = InstructionSet::legal().decode(opcode).unwrap().addressing_mode;

        // address the instruction will use for both read and write
        cpu.registers_mut().pc = pc + 1;
        let peeked = cpu.peek_address(mode);
        assert_eq!(peeked, address, "{line}");
        assert_eq!(cpu.registers().pc, pc + 1);
        cpu.registers_mut().pc = pc;

        run(&mut cpu, 1);
        assert_ne!(cpu.bus().read(address), 0b0000_0110, "{line}");
        assert_eq!(cpu.registers().pc, pc + 1 + mode.operand_bytes());
    }
}

#[test]
fn test_read_modify_write_results() {
    let mut cpu = test_cpu_with_program(&["LDX #$01", "INC $20,X", "DEC $0300", "ASL $21"]);
    cpu.bus_mut().write(0x0021, 0xFF);
    cpu.bus_mut().write(0x0300, 0x00);
    run(&mut cpu, 3);

    assert_eq!(cpu.bus().read(0x0021), 0x00);
    assert_eq!(cpu.bus().read(0x0300), 0xFF);
    assert!(cpu.registers().sr.contains(NEGATIVE));

    run(&mut cpu, 1);
    assert_eq!(cpu.bus().read(0x0021), 0x00);
    assert!(cpu.registers().sr.contains(ZERO));
    assert!(!cpu.registers().sr.contains(CARRY));
}

#[test]
fn test_store_through_immediate_is_invalid() {
    let mut cpu = test_cpu_with_program(&["LDA #$42", "STA #$10", "LDX #$01"]);
    run(&mut cpu, 1);

    let result = cpu.step();
    assert!(matches!(
        result,
        Err(CpuError::InvalidWrite {
            mode: Immediate,
            address: 0x8003
        })
    ));

    // PC skips the operand, nothing is written anywhere
    assert_eq!(cpu.registers().pc, PROGRAM_START + 4);
    assert_eq!(cpu.bus().read(0x0010), 0x00);
    assert_eq!(cpu.bus().read(0x8003), 0x10);

    run(&mut cpu, 1);
    assert_eq!(cpu.registers().x_reg, 0x01);
}

#[test]
fn test_store_instructions() {
    let mut cpu = test_cpu_with_program(&[
        "LDA #$01",
        "LDX #$02",
        "LDY #$03",
        "STA $0400",
        "STX $41",
        "STY $42,X",
        "STX $40,Y",
    ]);
    run(&mut cpu, 7);

    assert_eq!(cpu.bus().read(0x0400), 0x01);
    assert_eq!(cpu.bus().read(0x0041), 0x02);
    assert_eq!(cpu.bus().read(0x0044), 0x03);
    assert_eq!(cpu.bus().read(0x0043), 0x02);
}

//////////////////////////////////////////////////////////////////////
// INTERRUPTS
//////////////////////////////////////////////////////////////////////

#[test]
fn test_interrupt_NMI() {
    let mut cpu = test_cpu_with_program(&["SEC"]);
    cpu.bus_mut().load(NMI_VECTOR, &[0x00, 0xA0]);
    run(&mut cpu, 1);

    cpu.interrupt(Interrupt::Nmi);

    let regs = cpu.registers();
    assert_eq!(regs.pc, 0xA000);
    assert_eq!(regs.sp, 0xFA);
    assert!(regs.sr.contains(INTERRUPT_DISABLE));
    assert_eq!(cpu.bus().read(0x01FD), 0x80);
    assert_eq!(cpu.bus().read(0x01FC), 0x01);
    // break clear, bit 5 set
    assert_eq!(cpu.bus().read(0x01FB), 0b0010_0101);
}

#[test]
fn test_interrupt_IRQ_masked() {
    let mut cpu = test_cpu_with_program(&["CLI", "NOP"]);
    cpu.bus_mut().load(IRQ_VECTOR, &[0x00, 0xB0]);

    // interrupts are disabled after reset
    cpu.interrupt(Interrupt::Irq);
    assert_eq!(cpu.registers().pc, PROGRAM_START);
    assert_eq!(cpu.registers().sp, 0xFD);

    run(&mut cpu, 1);
    cpu.interrupt(Interrupt::Irq);
    assert_eq!(cpu.registers().pc, 0xB000);
    assert!(cpu.registers().sr.contains(INTERRUPT_DISABLE));
    assert_eq!(cpu.bus().read(0x01FB), 0b0010_0000);
}
