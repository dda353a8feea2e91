use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::EncodeError;

/// Starts a comment that runs to the end of the line.
pub const COMMENT_MARKER: char = '#';

/// One encoded instruction. Displays and serializes as 8 binary digits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub struct Word(u8);

impl Word {
    pub const fn new(bits: u8) -> Self {
        Self(bits)
    }

    pub const fn bits(self) -> u8 {
        self.0
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:08b}", self.0)
    }
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[error("`{0}` is not an 8-digit binary word")]
pub struct ParseWordError(String);

impl FromStr for Word {
    type Err = ParseWordError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.len() != 8 || !s.bytes().all(|b| b == b'0' || b == b'1') {
            return Err(ParseWordError(s.to_string()));
        }
        u8::from_str_radix(s, 2)
            .map(Word)
            .map_err(|_| ParseWordError(s.to_string()))
    }
}

impl From<Word> for String {
    fn from(w: Word) -> Self {
        w.to_string()
    }
}

impl TryFrom<String> for Word {
    type Error = ParseWordError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

/// Turns one source line into at most one word.
pub trait Encoder {
    /// `Ok(None)` for a blank or comment-only line.
    fn encode(&self, line: &str) -> Result<Option<Word>, EncodeError>;
}

/// Splits a line into mnemonic and operand tokens after dropping the
/// trailing comment. Returns `None` when nothing is left.
pub fn tokenize(line: &str) -> Option<(&str, Vec<&str>)> {
    let code = match line.find(COMMENT_MARKER) {
        Some(p) => &line[..p],
        None => line,
    };
    let mut parts = code.split_whitespace();
    let mnemonic = parts.next()?;
    Some((mnemonic, parts.collect()))
}
