pub mod encoder;
pub mod error;
pub mod field;
pub mod instructions;
pub mod listing;
pub mod program;

pub mod isa {
    pub mod rs8; // two-register redstone CPU, 8-bit words
}

pub use encoder::{Encoder, Word};
pub use error::{EncodeError, ErrorKind, FieldError, ProgramError};
pub use isa::rs8::Rs8Encoder;
pub use program::{Assembler, Assembly, ListingEntry, Program, ProgramConfig};

/// Encodes a single line with the default encoder.
pub fn encode_line(line: &str) -> Result<Option<Word>, EncodeError> {
    Rs8Encoder::new().encode(line)
}

/// Encodes a whole program with the default configuration.
pub fn encode_program(source: &str) -> Result<Program, ProgramError> {
    Assembler::new(ProgramConfig::default()).assemble(source)
}
