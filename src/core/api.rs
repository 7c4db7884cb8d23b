use std::path::{Path, PathBuf};
use log::{debug, info};
use crate::error::types::Result;
use crate::fs::{read_listing, ByteSequence};
use super::config::ConvertConfig;
use super::constants::WORD_BYTES;
use super::hex;

/// Operations the command line drives.
///
/// # Examples
///
/// ```no_run
/// use makebin::core::{ConvertOps, HexToBinConverter};
/// use std::path::Path;
///
/// let converter = HexToBinConverter::new();
/// let summary = converter
///     .convert(Path::new("boot.hex"), Path::new("boot.bin"))
///     .unwrap();
/// println!("{} words written", summary.tokens);
/// ```
pub trait ConvertOps {
    /// Convert `input` and write the image to `output`, replacing any existing file.
    fn convert(&self, input: &Path, output: &Path) -> Result<ConvertSummary>;

    /// Resolve the output path from `config`, then convert.
    fn run(&self, config: &ConvertConfig) -> Result<ConvertSummary>;
}

/// What a finished conversion produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConvertSummary {
    pub input: PathBuf,
    pub output: PathBuf,
    pub tokens: usize,
    pub bytes: ByteSequence,
}

impl ConvertSummary {
    pub fn byte_len(&self) -> usize {
        self.bytes.len()
    }
}

/// Turns a listing of 16-bit hex words into a big-endian binary image.
///
/// The whole input is parsed before the output is opened, so a bad token
/// never leaves a fresh output file behind.
#[derive(Debug, Clone, Default)]
pub struct HexToBinConverter;

impl HexToBinConverter {
    pub fn new() -> Self {
        Self
    }

    /// In-memory conversion, no I/O.
    pub fn encode_str(&self, text: &str) -> Result<ByteSequence> {
        hex::encode(text)
    }
}

impl ConvertOps for HexToBinConverter {
    fn convert(&self, input: &Path, output: &Path) -> Result<ConvertSummary> {
        debug!("Converting {} -> {}", input.display(), output.display());
        let text = read_listing(input)?;
        let bytes = self.encode_str(&text)?;
        bytes.write_to_file(output)?;

        let tokens = bytes.len() / WORD_BYTES;
        info!(
            "Wrote {} words ({} bytes) to {}",
            tokens,
            bytes.len(),
            output.display()
        );

        Ok(ConvertSummary {
            input: input.to_path_buf(),
            output: output.to_path_buf(),
            tokens,
            bytes,
        })
    }

    fn run(&self, config: &ConvertConfig) -> Result<ConvertSummary> {
        let output = config.output_path()?;
        self.convert(config.input(), &output)
    }
}
