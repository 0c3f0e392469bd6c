use crate::decoder::{classify, Decoded, Decoder, IInstruction, Instruction, InstructionKind, RInstruction};
use crate::disasm::{fmt_i, fmt_r};
use crate::error::DecodeError;
use crate::instructions::{lookup_funct, lookup_opcode};

/// Decoder for the R/I subset of MIPS32: eleven ALU/shift operations under
/// opcode 0 and seventeen immediate, memory and branch operations.
#[derive(Debug, Default, Clone, Copy)]
pub struct Mips32Decoder;

impl Mips32Decoder {
    pub fn new() -> Self {
        Self
    }
}

pub fn decode_r(insn: &Instruction) -> Result<Decoded, DecodeError> {
    let r = RInstruction::from(insn);
    let desc = lookup_funct(r.funct)?;
    Ok(Decoded { op: desc.op, kind: InstructionKind::R, text: fmt_r(desc, &r)?, target: None })
}

pub fn decode_i(insn: &Instruction, index: usize, len: usize) -> Result<Decoded, DecodeError> {
    let i = IInstruction::from(insn);
    let desc = lookup_opcode(i.opcode)?;
    let (text, target) = fmt_i(desc, &i, index, len)?;
    Ok(Decoded { op: desc.op, kind: InstructionKind::I, text, target })
}

impl Decoder for Mips32Decoder {
    fn decode(&self, insn: &Instruction, index: usize, len: usize) -> Result<Decoded, DecodeError> {
        match classify(insn.opcode())? {
            InstructionKind::R => decode_r(insn),
            InstructionKind::I => decode_i(insn, index, len),
        }
    }
}
