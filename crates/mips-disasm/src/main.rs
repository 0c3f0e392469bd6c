use anyhow::Result;
use clap::{Parser, ValueEnum};
use tracing::info;
use tracing_subscriber::EnvFilter;

use std::path::PathBuf;

use mips_disasm::{asm_path, json_path, read_obj, save_asm, save_json, Report};
use mips_rs::{disassemble, RenderConfig};

#[derive(Parser, Debug)]
#[command(author, version, about = "Disassemble a MIPS object file into assembly", long_about=None)]
struct Cli {
    /// Object file: one hex-encoded instruction per line
    #[arg(value_name = "OBJFILE")]
    input: PathBuf,
    /// Write output here instead of next to OBJFILE
    #[arg(long, value_name = "FILE")]
    out: Option<PathBuf>,
    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,
    /// Indent instructions with N spaces instead of a tab
    #[arg(long, value_name = "N")]
    indent: Option<usize>,
    /// Print to stdout instead of writing a file
    #[arg(long)]
    stdout: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat { Text, Json }

fn render_config(indent: Option<usize>) -> RenderConfig {
    match indent {
        Some(n) => RenderConfig { indent: " ".repeat(n) },
        None => RenderConfig::default(),
    }
}

fn destination(cli: &Cli) -> PathBuf {
    match (&cli.out, cli.format) {
        (Some(p), _) => p.clone(),
        (None, OutputFormat::Text) => asm_path(&cli.input),
        (None, OutputFormat::Json) => json_path(&cli.input),
    }
}

fn run(cli: &Cli) -> Result<()> {
    let program = read_obj(&cli.input)?;
    let listing = disassemble(&program)?;
    let cfg = render_config(cli.indent);
    let dest = destination(cli);

    match cli.format {
        OutputFormat::Text => {
            let lines = listing.render(&cfg);
            if cli.stdout {
                for l in &lines { println!("{l}"); }
            } else {
                save_asm(&lines, &dest)?;
                info!(dest = %dest.display(), lines = lines.len(), "wrote assembly");
            }
        }
        OutputFormat::Json => {
            let report = Report::new(cli.input.display().to_string(), &listing, &cfg);
            let json = serde_json::to_string_pretty(&report)?;
            if cli.stdout {
                println!("{json}");
            } else {
                save_json(&json, &dest)?;
                info!(dest = %dest.display(), "wrote report");
            }
        }
    }
    Ok(())
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    run(&cli)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::path::Path;

    fn scratch(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("mips_disasm_main_{}_{name}", std::process::id()))
    }

    #[test]
    fn cli_defaults_and_flags() {
        let cli = Cli::try_parse_from(["mips-disasm", "prog.obj"]).unwrap();
        assert_eq!(cli.format, OutputFormat::Text);
        assert_eq!(destination(&cli), PathBuf::from("prog.s"));

        let cli = Cli::try_parse_from(["mips-disasm", "prog.obj", "--format", "json", "--indent", "4"]).unwrap();
        assert_eq!(destination(&cli), PathBuf::from("prog.json"));
        assert_eq!(render_config(cli.indent).indent, "    ");

        assert!(Cli::try_parse_from(["mips-disasm"]).is_err());
    }

    #[test]
    fn run_writes_listing_next_to_input() {
        let obj = scratch("loop.obj");
        // 0: add $t2, $t0, $t1
        // 1: beq $t0, $t1, -2  -> index 0
        std::fs::write(&obj, "01095020\n1109FFFE\n").unwrap();
        let cli = Cli::try_parse_from(["mips-disasm", obj.to_str().unwrap()]).unwrap();
        run(&cli).unwrap();

        let out = asm_path(&obj);
        let text = std::fs::read_to_string(&out).unwrap();
        assert_eq!(text, "Addr_0000:\n\tadd $t2, $t0, $t1\n\tbeq $t0, $t1, Addr_0000\n");
        let _ = std::fs::remove_file(&obj);
        let _ = std::fs::remove_file(&out);
    }

    #[test]
    fn run_fails_without_writing_on_decode_error() {
        let obj = scratch("bad.obj");
        // second word has funct 0x3F
        std::fs::write(&obj, "01095020\n0109503F\n").unwrap();
        let cli = Cli::try_parse_from(["mips-disasm", obj.to_str().unwrap()]).unwrap();
        let err = run(&cli).unwrap_err();
        assert!(err.to_string().contains("line number 2"));
        assert!(!Path::new(&asm_path(&obj)).exists());
        let _ = std::fs::remove_file(&obj);
    }
}
