use bitvec::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::encoder::{Encoder, Word};
use crate::error::ProgramError;
use crate::instructions::WORD_BITS;
use crate::isa::rs8::Rs8Encoder;

/// Words per storage unit in the column layout.
pub const DEFAULT_SECTION_WORDS: usize = 16;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProgramConfig {
    /// Keep a (word, source) row for every line, blank lines included.
    pub keep_listing: bool,
    /// Words per storage unit when the stream is split into sections.
    pub section_words: usize,
}

impl Default for ProgramConfig {
    fn default() -> Self {
        Self {
            keep_listing: false,
            section_words: DEFAULT_SECTION_WORDS,
        }
    }
}

/// One source line next to what it encoded to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListingEntry {
    /// 1-based line number.
    pub line: usize,
    pub word: Option<Word>,
    pub source: String,
}

/// The linear program image: words in source order, packed MSB first.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Program {
    bits: BitVec<u8, Msb0>,
    listing: Vec<ListingEntry>,
}

impl Program {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, word: Word) {
        let byte = word.bits();
        self.bits.extend_from_bitslice(byte.view_bits::<Msb0>());
    }

    pub fn bits(&self) -> &BitSlice<u8, Msb0> {
        &self.bits
    }

    /// The stream as '0'/'1' characters with no separators.
    pub fn bitstream(&self) -> String {
        self.bits.iter().map(|b| if *b { '1' } else { '0' }).collect()
    }

    pub fn words(&self) -> impl Iterator<Item = Word> + '_ {
        self.bits.as_raw_slice().iter().map(|&b| Word::new(b))
    }

    pub fn len_words(&self) -> usize {
        self.bits.len() / WORD_BITS
    }

    pub fn is_empty(&self) -> bool {
        self.bits.is_empty()
    }

    /// One byte per word, program order.
    pub fn to_bytes(&self) -> Vec<u8> {
        self.bits.as_raw_slice().to_vec()
    }

    /// Empty unless the program was encoded with `keep_listing`.
    pub fn listing(&self) -> &[ListingEntry] {
        &self.listing
    }

    /// Splits the stream into storage units of `words` words; the last unit
    /// may be short. A zero size is treated as one.
    pub fn sections(&self, words: usize) -> impl Iterator<Item = &BitSlice<u8, Msb0>> + '_ {
        self.bits.chunks(words.max(1) * WORD_BITS)
    }
}

/// Result of a lenient encode: everything that encoded, plus every failure.
#[derive(Debug, Clone, Default)]
pub struct Assembly {
    pub program: Program,
    pub errors: Vec<ProgramError>,
}

impl Assembly {
    pub fn is_ok(&self) -> bool {
        self.errors.is_empty()
    }
}

/// Drives an [`Encoder`] over whole programs, line by line in source order.
#[derive(Debug, Clone, Default)]
pub struct Assembler<E = Rs8Encoder> {
    encoder: E,
    config: ProgramConfig,
}

impl Assembler<Rs8Encoder> {
    pub fn new(config: ProgramConfig) -> Self {
        Self::with_encoder(Rs8Encoder::new(), config)
    }
}

impl<E: Encoder> Assembler<E> {
    pub fn with_encoder(encoder: E, config: ProgramConfig) -> Self {
        Self { encoder, config }
    }

    pub fn config(&self) -> &ProgramConfig {
        &self.config
    }

    /// All-or-nothing: the first failing line aborts the whole program.
    pub fn assemble(&self, source: &str) -> Result<Program, ProgramError> {
        let mut program = Program::new();
        for (idx, text) in source.lines().enumerate() {
            let line = idx + 1;
            let word = self
                .encoder
                .encode(text)
                .map_err(|source| ProgramError { line, source })?;
            self.record(&mut program, line, word, text);
        }
        debug!(words = program.len_words(), "program encoded");
        Ok(program)
    }

    /// Encodes every line, collecting failures instead of stopping. Failed
    /// lines contribute no word but keep their listing row.
    pub fn assemble_lenient(&self, source: &str) -> Assembly {
        let mut out = Assembly::default();
        for (idx, text) in source.lines().enumerate() {
            let line = idx + 1;
            match self.encoder.encode(text) {
                Ok(word) => self.record(&mut out.program, line, word, text),
                Err(source) => {
                    warn!(line, error = %source, "skipping line");
                    out.errors.push(ProgramError { line, source });
                    self.record(&mut out.program, line, None, text);
                }
            }
        }
        debug!(
            words = out.program.len_words(),
            errors = out.errors.len(),
            "program encoded leniently"
        );
        out
    }

    fn record(&self, program: &mut Program, line: usize, word: Option<Word>, text: &str) {
        if let Some(w) = word {
            debug!(line, word = %w, source = text.trim(), "encoded");
            program.push(w);
        }
        if self.config.keep_listing {
            program.listing.push(ListingEntry {
                line,
                word,
                source: text.to_string(),
            });
        }
    }
}
