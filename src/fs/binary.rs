use std::fs::File;
use std::io::{Read, Write};
use std::path::Path;
use log::debug;
use crate::error::types::Result;
use crate::fs_err;

const UTF8_BOM: [u8; 3] = [0xEF, 0xBB, 0xBF];

/// Flat output buffer of big-endian words, in input order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ByteSequence(Vec<u8>);

impl ByteSequence {
    pub fn new() -> Self {
        Self(Vec::new())
    }

    pub fn with_capacity(words: usize) -> Self {
        Self(Vec::with_capacity(words * 2))
    }

    /// Append one 16-bit value, most-significant byte first.
    pub fn push_word(&mut self, value: u16) {
        self.0.push((value >> 8) as u8);
        self.0.push((value & 0xFF) as u8);
    }

    /// Create or truncate `path` and write the whole buffer in one call.
    pub fn write_to_file(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let mut file = File::create(path).map_err(fs_err!(write, path))?;
        file.write_all(&self.0).map_err(fs_err!(write, path))?;
        file.flush().map_err(fs_err!(write, path))?;
        debug!("Wrote {} bytes to {}", self.0.len(), path.display());
        Ok(())
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    pub fn into_vec(self) -> Vec<u8> {
        self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn word_count(&self) -> usize {
        self.0.len() / 2
    }
}

impl AsRef<[u8]> for ByteSequence {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl From<ByteSequence> for Vec<u8> {
    fn from(seq: ByteSequence) -> Self {
        seq.0
    }
}

/// Read a hex listing as text.
///
/// A leading UTF-8 BOM is dropped. Invalid UTF-8 is replaced rather than
/// rejected so that the offending bytes surface later as a bad token with a
/// line number.
pub fn read_listing(path: impl AsRef<Path>) -> Result<String> {
    let path = path.as_ref();
    let mut raw = Vec::new();
    File::open(path)
        .and_then(|mut file| file.read_to_end(&mut raw))
        .map_err(fs_err!(read, path))?;
    debug!("Read {} bytes from {}", raw.len(), path.display());

    let body = raw.strip_prefix(&UTF8_BOM[..]).unwrap_or(&raw[..]);
    Ok(String::from_utf8_lossy(body).into_owned())
}
