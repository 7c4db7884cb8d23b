use log::debug;
use crate::error::types::{MakebinError, Result};
use crate::fs::ByteSequence;

/// A whitespace-delimited piece of the listing and the 1-based line it came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token<'a> {
    pub text: &'a str,
    pub line: usize,
}

impl<'a> Token<'a> {
    /// Decode the token as an unsigned base-16 value no wider than 16 bits.
    ///
    /// Only `[0-9a-fA-F]` is accepted, so sign and `0x` prefixes are rejected.
    /// Leading zeros are allowed; anything above `0xFFFF` is out of range.
    pub fn decode(&self) -> Result<u16> {
        if self.text.is_empty() || !self.text.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(MakebinError::InvalidHexToken {
                token: self.text.to_string(),
                line: self.line,
            });
        }

        u16::from_str_radix(self.text, 16).map_err(|_| MakebinError::ValueOutOfRange {
            token: self.text.to_string(),
            line: self.line,
        })
    }
}

/// Split a listing into tokens, keeping input order across lines.
pub fn tokenize(text: &str) -> impl Iterator<Item = Token<'_>> {
    text.lines().enumerate().flat_map(|(idx, line)| {
        line.split_whitespace().map(move |text| Token { text, line: idx + 1 })
    })
}

/// Encode every token of `text` as a big-endian word. Stops at the first bad token.
pub fn encode(text: &str) -> Result<ByteSequence> {
    let mut bytes = ByteSequence::new();
    for token in tokenize(text) {
        bytes.push_word(token.decode()?);
    }
    debug!("Encoded {} words", bytes.word_count());
    Ok(bytes)
}
