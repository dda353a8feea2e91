use anyhow::Result;
use clap::ValueEnum;
use serde::Serialize;

use redstone8::listing::fmt_listing;
use redstone8::{ListingEntry, Program, ProgramError, Word};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Bit stream, no separators
    Stream,
    /// One word per line
    Words,
    /// Words next to their source lines
    Listing,
    /// JSON document with stream, words and listing
    Json,
    /// Raw bytes, one per word
    Bin,
}

impl OutputFormat {
    pub fn needs_listing(self) -> bool {
        matches!(self, OutputFormat::Listing | OutputFormat::Json)
    }
}

#[derive(Debug, Serialize)]
struct Document<'a> {
    stream: String,
    words: Vec<Word>,
    listing: &'a [ListingEntry],
    errors: Vec<String>,
}

pub fn render(program: &Program, errors: &[ProgramError], format: OutputFormat) -> Result<Vec<u8>> {
    let bytes = match format {
        OutputFormat::Stream => {
            let mut s = program.bitstream();
            s.push('\n');
            s.into_bytes()
        }
        OutputFormat::Words => program
            .words()
            .map(|w| format!("{w}\n"))
            .collect::<String>()
            .into_bytes(),
        OutputFormat::Listing => fmt_listing(program.listing()).into_bytes(),
        OutputFormat::Json => {
            let doc = Document {
                stream: program.bitstream(),
                words: program.words().collect(),
                listing: program.listing(),
                errors: errors.iter().map(|e| e.to_string()).collect(),
            };
            let mut v = serde_json::to_vec_pretty(&doc)?;
            v.push(b'\n');
            v
        }
        OutputFormat::Bin => program.to_bytes(),
    };
    Ok(bytes)
}
