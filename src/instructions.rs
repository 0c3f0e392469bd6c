use serde::{Deserialize, Serialize};

use crate::decoder::{classify, InstructionKind};
use crate::error::DecodeError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Op {
    // R-format, selected by funct
    Add,
    Addu,
    And,
    Nor,
    Or,
    Slt,
    Sltu,
    Sll,
    Srl,
    Sub,
    Subu,
    // I-format, selected by opcode
    Addi,
    Addiu,
    Andi,
    Beq,
    Bne,
    Lbu,
    Lhu,
    Ll,
    Lui,
    Lw,
    Ori,
    Slti,
    Sltiu,
    Sb,
    Sc,
    Sh,
    Sw,
}

/// How the operands of an instruction are laid out in text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OperandForm {
    /// `rd, rs, rt`
    RegReg,
    /// `rd, rt, shamt`
    Shift,
    /// `rt, rs, imm`
    RegImm,
    /// `rt, imm(rs)`
    Memory,
    /// `rt, imm`
    Upper,
    /// `rs, rt, label`
    Branch,
}

#[derive(Debug, Clone, Copy)]
pub struct InstrDesc {
    pub op: Op,
    pub mnemonic: &'static str,
    /// funct for R-format entries, opcode for I-format entries
    pub code: u8,
    pub form: OperandForm,
}

const fn desc(op: Op, mnemonic: &'static str, code: u8, form: OperandForm) -> InstrDesc {
    InstrDesc { op, mnemonic, code, form }
}

pub const R_TABLE: &[InstrDesc] = &[
    desc(Op::Add, "add", 0x20, OperandForm::RegReg),
    desc(Op::Addu, "addu", 0x21, OperandForm::RegReg),
    desc(Op::And, "and", 0x24, OperandForm::RegReg),
    desc(Op::Nor, "nor", 0x27, OperandForm::RegReg),
    desc(Op::Or, "or", 0x25, OperandForm::RegReg),
    desc(Op::Slt, "slt", 0x2A, OperandForm::RegReg),
    desc(Op::Sltu, "sltu", 0x2B, OperandForm::RegReg),
    desc(Op::Sll, "sll", 0x00, OperandForm::Shift),
    desc(Op::Srl, "srl", 0x02, OperandForm::Shift),
    desc(Op::Sub, "sub", 0x22, OperandForm::RegReg),
    desc(Op::Subu, "subu", 0x23, OperandForm::RegReg),
];

pub const I_TABLE: &[InstrDesc] = &[
    desc(Op::Addi, "addi", 0x08, OperandForm::RegImm),
    desc(Op::Addiu, "addiu", 0x09, OperandForm::RegImm),
    desc(Op::Andi, "andi", 0x0C, OperandForm::RegImm),
    desc(Op::Beq, "beq", 0x04, OperandForm::Branch),
    desc(Op::Bne, "bne", 0x05, OperandForm::Branch),
    desc(Op::Lbu, "lbu", 0x24, OperandForm::Memory),
    desc(Op::Lhu, "lhu", 0x25, OperandForm::Memory),
    desc(Op::Ll, "ll", 0x30, OperandForm::Memory),
    desc(Op::Lui, "lui", 0x0F, OperandForm::Upper),
    desc(Op::Lw, "lw", 0x23, OperandForm::Memory),
    desc(Op::Ori, "ori", 0x0D, OperandForm::RegImm),
    desc(Op::Slti, "slti", 0x0A, OperandForm::RegImm),
    desc(Op::Sltiu, "sltiu", 0x0B, OperandForm::RegImm),
    desc(Op::Sb, "sb", 0x28, OperandForm::Memory),
    desc(Op::Sc, "sc", 0x38, OperandForm::Memory),
    desc(Op::Sh, "sh", 0x29, OperandForm::Memory),
    desc(Op::Sw, "sw", 0x2B, OperandForm::Memory),
];

pub fn lookup_funct(funct: u8) -> Result<&'static InstrDesc, DecodeError> {
    R_TABLE
        .iter()
        .find(|d| d.code == funct)
        .ok_or(DecodeError::UnknownMnemonic { kind: InstructionKind::R, code: funct })
}

pub fn lookup_opcode(opcode: u8) -> Result<&'static InstrDesc, DecodeError> {
    I_TABLE
        .iter()
        .find(|d| d.code == opcode)
        .ok_or(DecodeError::UnknownMnemonic { kind: InstructionKind::I, code: opcode })
}

/// Mnemonic for `opcode`, consulting `funct` when the opcode is R-format.
pub fn operation_name(opcode: u8, funct: Option<u8>) -> Result<&'static str, DecodeError> {
    let desc = match classify(opcode)? {
        InstructionKind::R => {
            // a missing funct can never name an R-format operation
            let funct = funct.ok_or(DecodeError::UnknownMnemonic { kind: InstructionKind::R, code: opcode })?;
            lookup_funct(funct)?
        }
        InstructionKind::I => lookup_opcode(opcode)?,
    };
    Ok(desc.mnemonic)
}

impl Op {
    pub fn is_branch(self) -> bool {
        matches!(self, Op::Beq | Op::Bne)
    }
}
