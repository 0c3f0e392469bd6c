//! Whole-program disassembly.
//!
//! Decoding happens in one pass over the program, collecting every branch
//! target. Label lines are then inserted in descending target order, so each
//! insertion lands at an index that still refers to the original ordering.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::decoder::{Decoded, Decoder, Instruction};
use crate::disasm::branch_label;
use crate::error::{DecodeError, DisasmError};
use crate::isa::mips32::Mips32Decoder;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Line {
    /// `Addr_XXXX:` marker for a branch destination.
    Label { index: usize, name: String },
    /// A decoded instruction and its position in the original program.
    Insn { index: usize, decoded: Decoded },
}

impl Line {
    /// Line text without indentation.
    pub fn text(&self) -> String {
        match self {
            Line::Label { name, .. } => format!("{name}:"),
            Line::Insn { decoded, .. } => decoded.text.clone(),
        }
    }

    pub fn is_label(&self) -> bool {
        matches!(self, Line::Label { .. })
    }
}

impl fmt::Display for Line {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderConfig {
    /// Prefix for instruction lines; labels stay flush left.
    pub indent: String,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self { indent: "\t".to_string() }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Listing {
    pub lines: Vec<Line>,
}

impl Listing {
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn labels(&self) -> impl Iterator<Item = (usize, &str)> {
        self.lines.iter().filter_map(|l| match l {
            Line::Label { index, name } => Some((*index, name.as_str())),
            Line::Insn { .. } => None,
        })
    }

    pub fn instruction_count(&self) -> usize {
        self.lines.iter().filter(|l| !l.is_label()).count()
    }

    pub fn render(&self, cfg: &RenderConfig) -> Vec<String> {
        self.lines
            .iter()
            .map(|l| match l {
                Line::Label { .. } => l.text(),
                Line::Insn { decoded, .. } => format!("{}{}", cfg.indent, decoded.text),
            })
            .collect()
    }
}

/// Disassemble `program` with the default decoder.
pub fn disassemble(program: &[Instruction]) -> Result<Listing, DisasmError> {
    disassemble_with(&Mips32Decoder::new(), program)
}

/// Parse 32-character binary strings, then disassemble them.
pub fn disassemble_bin<S: AsRef<str>>(program: &[S]) -> Result<Listing, DisasmError> {
    let insns = program
        .iter()
        .enumerate()
        .map(|(i, s)| {
            let s = s.as_ref();
            s.parse::<Instruction>().map_err(|e| DisasmError::new(i + 1, s, e))
        })
        .collect::<Result<Vec<_>, _>>()?;
    disassemble(&insns)
}

pub fn disassemble_with<D: Decoder>(dec: &D, program: &[Instruction]) -> Result<Listing, DisasmError> {
    let n = program.len();
    debug!(instructions = n, "decoding program");

    let mut decoded = Vec::with_capacity(n);
    // target index -> label name; ordered and deduplicated
    let mut targets: BTreeMap<usize, String> = BTreeMap::new();
    for (index, insn) in program.iter().enumerate() {
        let at = |source: DecodeError| DisasmError::new(index + 1, insn.to_hex(), source);
        let d = dec.decode(insn, index, n).map_err(at)?;
        if let Some(target) = d.target {
            if !targets.contains_key(&target) {
                targets.insert(target, branch_label(target).map_err(at)?);
            }
        }
        trace!(index, word = %insn.to_hex(), text = %d.text, "decoded");
        decoded.push(d);
    }

    let mut lines: Vec<Line> = decoded
        .into_iter()
        .enumerate()
        .map(|(index, decoded)| Line::Insn { index, decoded })
        .collect();
    for (index, name) in targets.into_iter().rev() {
        trace!(index, %name, "inserting label");
        lines.insert(index, Line::Label { index, name });
    }

    let listing = Listing { lines };
    debug!(lines = listing.len(), labels = listing.len() - n, "disassembly complete");
    Ok(listing)
}
