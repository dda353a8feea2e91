//! Operand field encoders.
//!
//! Each encoder turns one operand token into a fixed-width bit field or
//! rejects it. Nothing is ever truncated or wrapped into range.

use std::fmt;
use std::num::IntErrorKind;

use tracing::trace;

use crate::error::FieldError;

/// Width of the backward-branch offset field.
pub const BRANCH_WIDTH: u8 = 4;
/// Most negative branch displacement.
pub const BRANCH_MIN: i64 = -16;
/// Width of the skip-count field.
pub const SKIP_WIDTH: u8 = 2;

/// A contiguous group of bits ready to be packed into a word.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Field {
    value: u8,
    width: u8,
}

impl Field {
    pub fn value(self) -> u8 {
        self.value
    }

    pub fn width(self) -> u8 {
        self.width
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:0width$b}", self.value, width = self.width as usize)
    }
}

/// What a template slot expects from its operand.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// `$0` or `$1`, one bit.
    Register,
    /// Unsigned decimal of the given bit width.
    Unsigned(u8),
    /// Backward branch displacement, -16..=-1, stored biased by 16.
    Branch,
    /// Skip count, 0..=3.
    Skip,
}

impl FieldKind {
    pub const fn width(self) -> u8 {
        match self {
            FieldKind::Register => 1,
            FieldKind::Unsigned(w) => w,
            FieldKind::Branch => BRANCH_WIDTH,
            FieldKind::Skip => SKIP_WIDTH,
        }
    }

    pub fn encode(self, token: &str) -> Result<Field, FieldError> {
        let field = match self {
            FieldKind::Register => encode_register(token),
            FieldKind::Unsigned(w) => encode_unsigned(token, w),
            FieldKind::Branch => encode_branch(token),
            FieldKind::Skip => encode_skip(token),
        }?;
        trace!(kind = ?self, token, field = %field, "encoded field");
        Ok(field)
    }

    /// Short template notation, e.g. `r`, `u4`, `b4`, `s2`.
    pub fn notation(self) -> String {
        match self {
            FieldKind::Register => "r".to_string(),
            FieldKind::Unsigned(w) => format!("u{w}"),
            FieldKind::Branch => format!("b{BRANCH_WIDTH}"),
            FieldKind::Skip => format!("s{SKIP_WIDTH}"),
        }
    }
}

/// Register selector: `$0` -> `0`, `$1` -> `1`.
pub fn encode_register(token: &str) -> Result<Field, FieldError> {
    let value = match token {
        "$0" => 0,
        "$1" => 1,
        _ => {
            return Err(FieldError::InvalidOperand {
                token: token.to_string(),
                reason: "expected register $0 or $1",
            })
        }
    };
    Ok(Field { value, width: 1 })
}

/// Unsigned field of `width` bits, zero padded. Widths outside `1..=8`
/// cannot be packed into a word and are rejected.
pub fn encode_unsigned(token: &str, width: u8) -> Result<Field, FieldError> {
    if !(1..=8).contains(&width) {
        return Err(FieldError::Width { width });
    }
    let max = (1i64 << width) - 1;
    let value = parse_in_range(token, 0, max)?;
    Ok(Field { value: value as u8, width })
}

/// Backward branch offset. Only -16..=-1 is representable; the field holds
/// `16 + n`, so -16 is `0000` and -1 is `1111`.
pub fn encode_branch(token: &str) -> Result<Field, FieldError> {
    let n = parse_in_range(token, BRANCH_MIN, -1)?;
    Ok(Field {
        value: (n - BRANCH_MIN) as u8,
        width: BRANCH_WIDTH,
    })
}

/// Skip count, always rendered as two digits.
pub fn encode_skip(token: &str) -> Result<Field, FieldError> {
    let max = (1i64 << SKIP_WIDTH) - 1;
    let value = parse_in_range(token, 0, max)?;
    Ok(Field {
        value: value as u8,
        width: SKIP_WIDTH,
    })
}

fn parse_in_range(token: &str, min: i64, max: i64) -> Result<i64, FieldError> {
    let out_of_range = || FieldError::OutOfRange {
        token: token.to_string(),
        min,
        max,
    };
    let value = token.parse::<i64>().map_err(|e| match e.kind() {
        IntErrorKind::PosOverflow | IntErrorKind::NegOverflow => out_of_range(),
        _ => FieldError::InvalidOperand {
            token: token.to_string(),
            reason: "expected a base-10 integer",
        },
    })?;
    if value < min || value > max {
        return Err(out_of_range());
    }
    Ok(value)
}
