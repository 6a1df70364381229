//! Line assembler for the legal 6502 instruction set
//!
//! Small enough to write test programs and demos by mnemonic. There are no
//! labels or directives: each line is one instruction (or empty, or a
//! `;` comment) and assembles to its encoded bytes.
//!
//! Operand syntax:
//!
//! | Operand   | Addressing mode                            |
//! |-----------|--------------------------------------------|
//! | (none)    | implied, or accumulator                    |
//! | `A`       | accumulator                                |
//! | `#v`      | immediate                                  |
//! | `v`       | zero page or absolute (relative on branch) |
//! | `v,X`     | zero page or absolute indexed by X         |
//! | `v,Y`     | zero page or absolute indexed by Y         |
//! | `(v,X)`   | indexed indirect                           |
//! | `(v),Y`   | indirect indexed                           |
//! | `(v)`     | absolute indirect                          |
//!
//! Numbers are `$hex`, `%binary` or decimal. Values written with at most two
//! hex digits (or below 256) select the zero page form when the instruction
//! has one.

use std::collections::HashMap;

use once_cell::sync::Lazy;

use crate::errors::AssemblerError;
use crate::processor::instruction::{AddressingMode, Opcode};
use crate::processor::instruction_set::InstructionSet;
use crate::utils;

use AddressingMode::*;

/// (mnemonic, addressing mode) -> opcode, derived from the decoding tables
static OPCODES: Lazy<HashMap<(&'static str, AddressingMode), Opcode>> = Lazy::new(|| {
    InstructionSet::legal()
        .iter()
        .map(|instruction| {
            (
                (instruction.name, instruction.addressing_mode),
                instruction.opcode,
            )
        })
        .collect()
});

struct Number {
    value: u16,
    short: bool,
}

struct Operand {
    // Candidate modes in order of preference
    modes: Vec<AddressingMode>,
    value: u16,
}

/// Assemble a whole program, one instruction per line
pub fn assemble(lines: &[&str]) -> Result<Vec<u8>, AssemblerError> {
    let mut program = Vec::new();
    for line in lines {
        program.extend(assemble_line(line)?);
    }
    Ok(program)
}

/// Assemble a single line. Empty and comment-only lines produce no bytes.
pub fn assemble_line(line: &str) -> Result<Vec<u8>, AssemblerError> {
    let code = line
        .split_once(';')
        .map_or(line, |(code, _comment)| code)
        .trim();
    if code.is_empty() {
        return Ok(Vec::new());
    }

    // Mnemonics are always three letters, the operand may follow without
    // any space (`LDA#$10`)
    let (mnemonic, operand) = match (code.get(..3), code.get(3..)) {
        (Some(mnemonic), Some(operand)) => (mnemonic.to_ascii_uppercase(), operand),
        _ => return Err(AssemblerError::UnknownMnemonic(code.to_string())),
    };
    if !OPCODES.keys().any(|(name, _)| *name == mnemonic) {
        return Err(AssemblerError::UnknownMnemonic(mnemonic));
    }

    let operand: String = operand
        .chars()
        .filter(|c| !c.is_whitespace())
        .collect::<String>()
        .to_ascii_uppercase();
    let Operand { modes, value } = parse_operand(line, &operand)?;

    let Some((mode, opcode)) = modes.iter().find_map(|mode| {
        OPCODES
            .get(&(mnemonic.as_str(), *mode))
            .map(|opcode| (*mode, *opcode))
    }) else {
        return Err(AssemblerError::UnsupportedAddressing {
            mnemonic,
            mode: modes[0],
        });
    };

    let mut bytes = vec![opcode];
    match mode.operand_bytes() {
        0 => {}
        1 => {
            let byte = u8::try_from(value).map_err(|_| AssemblerError::InvalidOperand {
                line: line.to_string(),
                operand: operand.clone(),
            })?;
            bytes.push(byte);
        }
        _ => {
            let (low, high) = utils::split_word(value);
            bytes.extend([low, high]);
        }
    }

    Ok(bytes)
}

fn parse_operand(line: &str, operand: &str) -> Result<Operand, AssemblerError> {
    let number = |text: &str| parse_number(text).ok_or_else(|| invalid_operand(line, operand));

    if operand.is_empty() {
        return Ok(Operand {
            modes: vec![Implied, Accumulator],
            value: 0,
        });
    }

    if operand == "A" {
        return Ok(Operand {
            modes: vec![Accumulator],
            value: 0,
        });
    }

    if let Some(value) = operand.strip_prefix('#') {
        return Ok(Operand {
            modes: vec![Immediate],
            value: number(value)?.value,
        });
    }

    if let Some(inner) = operand.strip_prefix('(') {
        let (mode, pointer) = if let Some(pointer) = inner.strip_suffix(",X)") {
            (IndirectX, pointer)
        } else if let Some(pointer) = inner.strip_suffix("),Y") {
            (IndirectY, pointer)
        } else if let Some(pointer) = inner.strip_suffix(')') {
            (AbsoluteIndirect, pointer)
        } else {
            return Err(invalid_operand(line, operand));
        };

        return Ok(Operand {
            modes: vec![mode],
            value: number(pointer)?.value,
        });
    }

    let (text, zero_page, absolute) = if let Some(base) = operand.strip_suffix(",X") {
        (base, ZeroPageX, AbsoluteX)
    } else if let Some(base) = operand.strip_suffix(",Y") {
        (base, ZeroPageY, AbsoluteY)
    } else {
        (operand, ZeroPage, Absolute)
    };

    let Number { value, short } = number(text)?;
    let modes = match (short, zero_page) {
        // branches only have a relative form and take the raw offset
        (true, ZeroPage) => vec![Relative, ZeroPage, Absolute],
        (true, _) => vec![zero_page, absolute],
        (false, _) => vec![absolute],
    };

    Ok(Operand { modes, value })
}

/// Parse `$hex`, `%binary` or decimal numbers
fn parse_number(text: &str) -> Option<Number> {
    let (digits, radix) = if let Some(hex) = text.strip_prefix('$') {
        (hex, 16)
    } else if let Some(binary) = text.strip_prefix('%') {
        (binary, 2)
    } else {
        (text, 10)
    };

    let value = u16::from_str_radix(digits, radix).ok()?;
    let short = match radix {
        16 => digits.len() <= 2,
        _ => value <= 0xFF,
    };

    Some(Number { value, short })
}

fn invalid_operand(line: &str, operand: &str) -> AssemblerError {
    AssemblerError::InvalidOperand {
        line: line.to_string(),
        operand: operand.to_string(),
    }
}
