use crate::codec::int_to_hex;
use crate::decoder::{IInstruction, RInstruction};
use crate::error::DecodeError;
use crate::instructions::{InstrDesc, OperandForm};
use crate::registers::register_name as reg;

/// Label for instruction `index`, named after its byte address.
pub fn branch_label(index: usize) -> Result<String, DecodeError> {
    let addr = (index as u64)
        .checked_mul(4)
        .ok_or_else(|| DecodeError::too_wide(index, "hex", 4))?;
    Ok(format!("Addr_{}", int_to_hex(addr, 4)?))
}

/// Absolute index reached by a branch at `index` with offset `imm`, in a
/// program of `len` instructions. `len` itself is a valid target (the label
/// follows the last instruction).
pub fn branch_target(index: usize, imm: i32, len: usize) -> Result<usize, DecodeError> {
    let target = index as i64 + 1 + i64::from(imm);
    usize::try_from(target)
        .ok()
        .filter(|&t| t <= len)
        .ok_or(DecodeError::BranchOutOfRange { target })
}

pub fn fmt_r(desc: &InstrDesc, r: &RInstruction) -> Result<String, DecodeError> {
    let mn = desc.mnemonic;
    match desc.form {
        // shamt occupies the bits other forms use for a register
        OperandForm::Shift => Ok(format!("{mn} {}, {}, {}", reg(r.rd.into())?, reg(r.rt.into())?, r.shamt)),
        _ => Ok(format!(
            "{mn} {}, {}, {}",
            reg(r.rd.into())?,
            reg(r.rs.into())?,
            reg(r.rt.into())?
        )),
    }
}

/// Render an I-format instruction at position `index` of a `len`-instruction
/// program. Branches also report the index they target.
pub fn fmt_i(
    desc: &InstrDesc,
    i: &IInstruction,
    index: usize,
    len: usize,
) -> Result<(String, Option<usize>), DecodeError> {
    let mn = desc.mnemonic;
    let text = match desc.form {
        OperandForm::Memory => format!("{mn} {}, {}({})", reg(i.rt.into())?, i.imm, reg(i.rs.into())?),
        OperandForm::Upper => format!("{mn} {}, {}", reg(i.rt.into())?, i.imm),
        OperandForm::Branch => {
            let target = branch_target(index, i.imm, len)?;
            let text = format!(
                "{mn} {}, {}, {}",
                reg(i.rs.into())?,
                reg(i.rt.into())?,
                branch_label(target)?
            );
            return Ok((text, Some(target)));
        }
        _ => format!("{mn} {}, {}, {}", reg(i.rt.into())?, reg(i.rs.into())?, i.imm),
    };
    Ok((text, None))
}
