use tracing::trace;

use crate::encoder::{tokenize, Encoder, Word};
use crate::error::EncodeError;
use crate::instructions::{self, InstrDesc, WORD_BITS};

/// Table-driven encoder for the two-register redstone CPU.
#[derive(Debug, Clone, Copy, Default)]
pub struct Rs8Encoder;

impl Rs8Encoder {
    pub fn new() -> Self {
        Self
    }

    /// Fills `desc`'s template from already split operand tokens.
    pub fn encode_with(
        &self,
        desc: &InstrDesc,
        operands: &[&str],
        line: &str,
    ) -> Result<Word, EncodeError> {
        if !desc.implemented {
            return Err(EncodeError::NotImplemented {
                mnemonic: desc.mnemonic.to_string(),
                line: line.to_string(),
            });
        }
        if operands.len() != desc.arity() {
            return Err(EncodeError::OperandCount {
                mnemonic: desc.mnemonic.to_string(),
                expected: desc.arity(),
                found: operands.len(),
                line: line.to_string(),
            });
        }

        let mut bits = desc.fixed_bits();
        let mut width = desc.fixed.len();
        for slot in desc.slots {
            let field = slot
                .kind
                .encode(operands[slot.operand])
                .map_err(|source| EncodeError::Operand {
                    index: slot.operand,
                    line: line.to_string(),
                    source,
                })?;
            bits = (bits << field.width()) | u16::from(field.value());
            width += field.width() as usize;
        }
        debug_assert_eq!(width, WORD_BITS, "template for `{}`", desc.mnemonic);

        let word = Word::new(bits as u8);
        trace!(mnemonic = desc.mnemonic, %word, "filled template");
        Ok(word)
    }
}

impl Encoder for Rs8Encoder {
    fn encode(&self, line: &str) -> Result<Option<Word>, EncodeError> {
        let Some((mnemonic, operands)) = tokenize(line) else {
            return Ok(None);
        };
        let desc = instructions::lookup(mnemonic).ok_or_else(|| EncodeError::UnknownInstruction {
            mnemonic: mnemonic.to_string(),
            line: line.to_string(),
        })?;
        self.encode_with(desc, &operands, line).map(Some)
    }
}
