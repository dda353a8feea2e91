use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;

use redstone8::instructions::TABLE;
use redstone8::listing::{fmt_columns, fmt_desc};
use redstone8::{Assembler, Encoder, Rs8Encoder};
use redstone8_asm::{load_config, load_source, render, write_output, OutputFormat};

#[derive(Parser, Debug)]
#[command(author, version, about = "Encoder for redstone8 programs", long_about = None)]
struct Cli {
    /// JSON program config (keep_listing, section_words)
    #[arg(long, value_name = "FILE", global = true)]
    config: Option<PathBuf>,
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Encode a program file ("-" for stdin)
    Encode {
        #[arg(value_name = "FILE")]
        input: PathBuf,
        #[arg(long, value_enum, default_value_t = OutputFormat::Stream)]
        format: OutputFormat,
        /// Write output to file instead of stdout
        #[arg(long, value_name = "FILE")]
        out: Option<PathBuf>,
        /// Encode every line and report all failures instead of stopping at the first
        #[arg(long)]
        lenient: bool,
    },
    /// Encode one instruction, e.g. `rs8asm line li '$0' 3`
    Line {
        #[arg(required = true, num_args = 1.., allow_hyphen_values = true)]
        tokens: Vec<String>,
    },
    /// Draw the program as bit columns, one section per storage unit
    Columns {
        #[arg(value_name = "FILE")]
        input: PathBuf,
        /// Words per section (defaults to the config value)
        #[arg(long)]
        section_words: Option<usize>,
    },
    /// List every mnemonic with its bit template
    Table,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let mut cfg = load_config(cli.config.as_deref())?;

    match cli.cmd {
        Command::Encode {
            input,
            format,
            out,
            lenient,
        } => {
            info!(input = %input.display(), ?format, lenient, "encoding program");
            let text = load_source(&input)?;
            cfg.keep_listing |= format.needs_listing();
            let asm = Assembler::new(cfg);
            if lenient {
                let result = asm.assemble_lenient(&text);
                for e in &result.errors {
                    eprintln!("error: {e}");
                }
                write_output(out.as_deref(), &render(&result.program, &result.errors, format)?)?;
                if !result.is_ok() {
                    bail!("{} line(s) failed to encode", result.errors.len());
                }
            } else {
                let program = asm
                    .assemble(&text)
                    .with_context(|| format!("encoding {}", input.display()))?;
                write_output(out.as_deref(), &render(&program, &[], format)?)?;
            }
        }
        Command::Line { tokens } => {
            let line = tokens.join(" ");
            info!(%line, "encoding line");
            match Rs8Encoder::new().encode(&line)? {
                Some(word) => println!("{word}"),
                None => bail!("nothing to encode"),
            }
        }
        Command::Columns {
            input,
            section_words,
        } => {
            let text = load_source(&input)?;
            let words = section_words.unwrap_or(cfg.section_words);
            anyhow::ensure!(words > 0, "--section-words must be at least 1");
            info!(input = %input.display(), section_words = words, "drawing columns");
            let program = Assembler::new(cfg)
                .assemble(&text)
                .with_context(|| format!("encoding {}", input.display()))?;
            print!("{}", fmt_columns(&program, words));
        }
        Command::Table => {
            for d in TABLE {
                println!("{}", fmt_desc(d));
            }
        }
    }

    Ok(())
}
