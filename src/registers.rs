use crate::error::DecodeError;

/// Symbolic names for the 32 general purpose registers, indexed by code.
pub static REGISTER_NAMES: [&str; 32] = [
    "$zero", "$at", "$v0", "$v1", "$a0", "$a1", "$a2", "$a3", "$t0", "$t1", "$t2", "$t3",
    "$t4", "$t5", "$t6", "$t7", "$s0", "$s1", "$s2", "$s3", "$s4", "$s5", "$s6", "$s7",
    "$t8", "$t9", "$k0", "$k1", "$gp", "$sp", "$fp", "$ra",
];

pub fn register_name(code: u32) -> Result<&'static str, DecodeError> {
    usize::try_from(code)
        .ok()
        .and_then(|i| REGISTER_NAMES.get(i))
        .copied()
        .ok_or(DecodeError::UnknownRegister { code })
}

/// Resolve a register given as a two-digit hex code ("00".."1F").
pub fn register_name_hex(hex: &str) -> Result<&'static str, DecodeError> {
    if hex.len() != 2 || !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(DecodeError::malformed(hex, "expected two hex digits"));
    }
    let code = u32::from_str_radix(hex, 16)
        .map_err(|_| DecodeError::malformed(hex, "expected two hex digits"))?;
    register_name(code)
}
