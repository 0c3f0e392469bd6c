use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

use mips_rs::{DisasmError, Instruction};

/// Load an object file: one hex-encoded instruction per line.
pub fn read_obj(path: &Path) -> Result<Vec<Instruction>> {
    anyhow::ensure!(
        path.is_file(),
        "No object file found at {}, ensure that your path is correct",
        path.display()
    );
    let text = std::fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
    Ok(parse_obj(&text)?)
}

pub fn parse_obj(text: &str) -> Result<Vec<Instruction>, DisasmError> {
    text.lines()
        .enumerate()
        .map(|(i, raw)| {
            let line = raw.trim();
            let hex = line.strip_prefix("0x").or_else(|| line.strip_prefix("0X")).unwrap_or(line);
            Instruction::from_hex(hex).map_err(|e| DisasmError::new(i + 1, line, e))
        })
        .collect()
}

/// `foo.obj` -> `foo.s`; any other name gets `.s` appended.
pub fn asm_path(obj: &Path) -> PathBuf {
    with_suffix(obj, "s")
}

pub fn json_path(obj: &Path) -> PathBuf {
    with_suffix(obj, "json")
}

fn with_suffix(obj: &Path, ext: &str) -> PathBuf {
    if obj.extension().is_some_and(|e| e == "obj") {
        obj.with_extension(ext)
    } else {
        let mut name = obj.as_os_str().to_owned();
        name.push(".");
        name.push(ext);
        PathBuf::from(name)
    }
}

fn ensure_parent(dest: &Path) -> Result<()> {
    match dest.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => anyhow::ensure!(
            dir.is_dir(),
            "Path to {} does not exist, cannot save assembly instructions",
            dest.display()
        ),
        _ => {}
    }
    Ok(())
}

/// Write one line per entry, each newline-terminated.
pub fn save_asm<S: AsRef<str>>(lines: &[S], dest: &Path) -> Result<()> {
    ensure_parent(dest)?;
    let mut buf = String::new();
    for l in lines {
        buf.push_str(l.as_ref());
        buf.push('\n');
    }
    std::fs::write(dest, buf).with_context(|| format!("writing {}", dest.display()))?;
    Ok(())
}

pub fn save_json(json: &str, dest: &Path) -> Result<()> {
    ensure_parent(dest)?;
    std::fs::write(dest, json).with_context(|| format!("writing {}", dest.display()))?;
    Ok(())
}
