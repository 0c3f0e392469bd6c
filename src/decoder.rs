use std::fmt;
use std::ops::Range;
use std::str::FromStr;

use bitvec::prelude::*;
use serde::{Deserialize, Serialize};

use crate::codec::{hex_to_bin, sign_extend};
use crate::error::DecodeError;
use crate::instructions::Op;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum InstructionKind {
    R,
    I,
}

impl InstructionKind {
    /// Name of the field that selects the operation for this kind.
    pub fn selector(self) -> &'static str {
        match self {
            InstructionKind::R => "function code",
            InstructionKind::I => "opcode",
        }
    }
}

/// Opcode 0 is R-format, opcodes above 3 are I-format. 1..=3 belong to
/// neither and are rejected.
pub fn classify(opcode: u8) -> Result<InstructionKind, DecodeError> {
    match opcode {
        0x00 => Ok(InstructionKind::R),
        0x01..=0x03 => Err(DecodeError::UnsupportedOpcode { opcode }),
        _ => Ok(InstructionKind::I),
    }
}

/// One 32-bit instruction word. Bit 0 is the most significant bit, so field
/// ranges read left to right the way the binary text is written.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Instruction {
    bits: BitArr!(for 32, in u32, Msb0),
}

impl Instruction {
    pub const WIDTH: usize = 32;

    pub const OPCODE: Range<usize> = 0..6;
    pub const RS: Range<usize> = 6..11;
    pub const RT: Range<usize> = 11..16;
    pub const RD: Range<usize> = 16..21;
    pub const SHAMT: Range<usize> = 21..26;
    pub const FUNCT: Range<usize> = 26..32;
    pub const IMM: Range<usize> = 16..32;

    pub fn from_word(word: u32) -> Self {
        Self { bits: BitArray::new([word]) }
    }

    /// Parse one hex-encoded instruction (no prefix) into its 32-bit form.
    pub fn from_hex(hex: &str) -> Result<Self, DecodeError> {
        hex_to_bin(hex, Self::WIDTH)?.parse()
    }

    pub fn word(&self) -> u32 {
        self.bits.load_be::<u32>()
    }

    /// Unsigned value of the bits in `range`.
    pub fn field(&self, range: Range<usize>) -> u32 {
        self.bits[range].load_be::<u32>()
    }

    pub fn opcode(&self) -> u8 {
        self.field(Self::OPCODE) as u8
    }

    /// The word as 8 uppercase hex digits, used in diagnostics.
    pub fn to_hex(&self) -> String {
        format!("{:08X}", self.word())
    }
}

impl FromStr for Instruction {
    type Err = DecodeError;

    fn from_str(text: &str) -> Result<Self, Self::Err> {
        if text.len() != Self::WIDTH {
            return Err(DecodeError::malformed(text, "instruction must be exactly 32 bits"));
        }
        let mut word = 0u32;
        for c in text.chars() {
            let bit = match c {
                '0' => 0,
                '1' => 1,
                _ => return Err(DecodeError::malformed(text, "instruction may only contain '0' and '1'")),
            };
            word = (word << 1) | bit;
        }
        Ok(Self::from_word(word))
    }
}

impl fmt::Display for Instruction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:032b}", self.word())
    }
}

impl fmt::Debug for Instruction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Instruction({:#010x})", self.word())
    }
}

/// Register-register layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RInstruction {
    pub opcode: u8,
    pub rs: u8,
    pub rt: u8,
    pub rd: u8,
    pub shamt: u8,
    pub funct: u8,
}

impl From<&Instruction> for RInstruction {
    fn from(insn: &Instruction) -> Self {
        Self {
            opcode: insn.opcode(),
            rs: insn.field(Instruction::RS) as u8,
            rt: insn.field(Instruction::RT) as u8,
            rd: insn.field(Instruction::RD) as u8,
            shamt: insn.field(Instruction::SHAMT) as u8,
            funct: insn.field(Instruction::FUNCT) as u8,
        }
    }
}

/// Register-immediate layout; `imm` is sign extended from 16 bits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct IInstruction {
    pub opcode: u8,
    pub rs: u8,
    pub rt: u8,
    pub imm: i32,
}

impl From<&Instruction> for IInstruction {
    fn from(insn: &Instruction) -> Self {
        Self {
            opcode: insn.opcode(),
            rs: insn.field(Instruction::RS) as u8,
            rt: insn.field(Instruction::RT) as u8,
            imm: sign_extend(insn.field(Instruction::IMM) as u64, 16) as i32,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Decoded {
    pub op: Op,
    pub kind: InstructionKind,
    /// Rendered assembly, without indentation.
    pub text: String,
    /// Absolute instruction index a branch transfers to.
    pub target: Option<usize>,
}

pub trait Decoder {
    /// Decode `insn`, which sits at position `index` in a program of `len`
    /// instructions.
    fn decode(&self, insn: &Instruction, index: usize, len: usize) -> Result<Decoded, DecodeError>;
}
