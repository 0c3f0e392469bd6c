//! Error types for decoding and disassembly.

use thiserror::Error;

use crate::decoder::InstructionKind;

/// Failure local to a single instruction (or a single codec call).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DecodeError {
    /// Input text is not a well-formed binary/hex field.
    #[error("malformed input {text:?}: {reason}")]
    MalformedInput { text: String, reason: &'static str },

    /// Opcode falls between the R and I ranges (0x01..=0x03).
    #[error("unsupported opcode {opcode:02X}")]
    UnsupportedOpcode { opcode: u8 },

    /// Funct (R-format) or opcode (I-format) has no table entry.
    #[error("{sel} {code:02X} is not in range for {kind:?}-type instruction", sel = .kind.selector())]
    UnknownMnemonic { kind: InstructionKind, code: u8 },

    /// Register code outside 00..=1F.
    #[error("register code {code:02X} not defined")]
    UnknownRegister { code: u32 },

    /// A value does not fit the requested number of digits.
    #[error("value {value} too large for {radix} field of width {width}")]
    FieldTooWide { value: String, radix: &'static str, width: usize },

    /// Branch target lies outside the program.
    #[error("branch target {target} lies outside the program")]
    BranchOutOfRange { target: i64 },
}

impl DecodeError {
    pub fn malformed(text: impl Into<String>, reason: &'static str) -> Self {
        Self::MalformedInput { text: text.into(), reason }
    }

    pub fn too_wide(value: impl ToString, radix: &'static str, width: usize) -> Self {
        Self::FieldTooWide { value: value.to_string(), radix, width }
    }
}

/// Fatal failure of a disassembly run, pinned to the offending source line.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("cannot disassemble {word} at line number {line}: {source}")]
pub struct DisasmError {
    /// 1-based line number.
    pub line: usize,
    /// Instruction as 8 hex digits, or the raw text if it never parsed.
    pub word: String,
    #[source]
    pub source: DecodeError,
}

impl DisasmError {
    pub fn new(line: usize, word: impl Into<String>, source: DecodeError) -> Self {
        Self { line, word: word.into(), source }
    }

    pub fn kind(&self) -> &DecodeError {
        &self.source
    }
}
