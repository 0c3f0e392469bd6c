//! Conversions between fixed-width binary strings, hex strings and integers.
//!
//! Widths are digit counts of the rendered output: `hex_to_bin(_, 32)` yields
//! exactly 32 characters, `bin_to_hex(_, 8)` exactly 8. A value that needs
//! more digits than requested is rejected with [`DecodeError::FieldTooWide`].

use std::num::IntErrorKind;

use crate::error::DecodeError;

fn check_digits(text: &str, radix: u32) -> Result<(), DecodeError> {
    if text.is_empty() {
        return Err(DecodeError::malformed(text, "empty field"));
    }
    // from_str_radix alone would accept a leading '+'
    if !text.chars().all(|c| c.is_digit(radix)) {
        let reason = if radix == 2 { "expected binary digits" } else { "expected hex digits" };
        return Err(DecodeError::malformed(text, reason));
    }
    Ok(())
}

fn parse_radix(text: &str, radix: u32) -> Result<u64, DecodeError> {
    check_digits(text, radix)?;
    u64::from_str_radix(text, radix).map_err(|e| match e.kind() {
        IntErrorKind::PosOverflow => DecodeError::too_wide(text, "u64", 64),
        _ => DecodeError::malformed(text, "unparsable integer"),
    })
}

/// Decode `hex` as an unsigned integer and render it as `width` binary digits.
pub fn hex_to_bin(hex: &str, width: usize) -> Result<String, DecodeError> {
    let value = parse_radix(hex, 16)?;
    let out = format!("{value:0width$b}");
    if out.len() > width {
        return Err(DecodeError::too_wide(hex, "binary", width));
    }
    Ok(out)
}

/// Decode `bin` as an unsigned integer and render it as `width` uppercase hex digits.
pub fn bin_to_hex(bin: &str, width: usize) -> Result<String, DecodeError> {
    let value = parse_radix(bin, 2)?;
    let out = format!("{value:0width$X}");
    if out.len() > width {
        return Err(DecodeError::too_wide(bin, "hex", width));
    }
    Ok(out)
}

/// Decode `bin` as an integer; when `signed`, a leading `1` means two's complement
/// over the string's own length.
pub fn bin_to_int(bin: &str, signed: bool) -> Result<i64, DecodeError> {
    check_digits(bin, 2)?;
    if bin.len() > 64 {
        return Err(DecodeError::too_wide(bin, "i64", 64));
    }
    let value = parse_radix(bin, 2)?;
    if signed {
        Ok(sign_extend(value, bin.len() as u32))
    } else {
        i64::try_from(value).map_err(|_| DecodeError::too_wide(bin, "i64", 63))
    }
}

/// Render a non-negative integer as `width` uppercase hex digits.
pub fn int_to_hex(value: u64, width: usize) -> Result<String, DecodeError> {
    let out = format!("{value:0width$X}");
    if out.len() > width {
        return Err(DecodeError::too_wide(value, "hex", width));
    }
    Ok(out)
}

/// Interpret the low `bits` bits of `value` as a two's complement number.
/// `bits` is clamped to 1..=64.
#[inline]
pub fn sign_extend(value: u64, bits: u32) -> i64 {
    let s = 64 - bits.clamp(1, 64);
    ((value << s) as i64) >> s
}
