/// Coarse classification shared by every encode failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    UnknownInstruction,
    InvalidOperand,
    OutOfRange,
    NotImplemented,
}

/// Failure of a single field encoder.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum FieldError {
    #[error("invalid operand `{token}`: {reason}")]
    InvalidOperand { token: String, reason: &'static str },
    #[error("operand `{token}` out of range, expected {min}..={max}")]
    OutOfRange { token: String, min: i64, max: i64 },
    #[error("field width {width} does not fit an 8-bit word")]
    Width { width: u8 },
}

impl FieldError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            FieldError::InvalidOperand { .. } => ErrorKind::InvalidOperand,
            FieldError::OutOfRange { .. } | FieldError::Width { .. } => ErrorKind::OutOfRange,
        }
    }
}

/// Failure to encode one instruction line. Every variant keeps the line text.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum EncodeError {
    #[error("unknown instruction `{mnemonic}` in `{line}`")]
    UnknownInstruction { mnemonic: String, line: String },
    #[error("instruction `{mnemonic}` is not implemented (`{line}`)")]
    NotImplemented { mnemonic: String, line: String },
    #[error("`{mnemonic}` takes {expected} operand(s), found {found} in `{line}`")]
    OperandCount {
        mnemonic: String,
        expected: usize,
        found: usize,
        line: String,
    },
    #[error("operand {index} of `{line}`: {source}")]
    Operand {
        index: usize,
        line: String,
        #[source]
        source: FieldError,
    },
}

impl EncodeError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            EncodeError::UnknownInstruction { .. } => ErrorKind::UnknownInstruction,
            EncodeError::NotImplemented { .. } => ErrorKind::NotImplemented,
            EncodeError::OperandCount { .. } => ErrorKind::InvalidOperand,
            EncodeError::Operand { source, .. } => source.kind(),
        }
    }

    /// Source text of the failing line.
    pub fn line(&self) -> &str {
        match self {
            EncodeError::UnknownInstruction { line, .. }
            | EncodeError::NotImplemented { line, .. }
            | EncodeError::OperandCount { line, .. }
            | EncodeError::Operand { line, .. } => line,
        }
    }
}

/// An instruction error located in a program.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[error("line {line}: {source}")]
pub struct ProgramError {
    /// 1-based source line number.
    pub line: usize,
    #[source]
    pub source: EncodeError,
}

impl ProgramError {
    pub fn kind(&self) -> ErrorKind {
        self.source.kind()
    }
}
