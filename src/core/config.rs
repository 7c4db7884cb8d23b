use std::path::{Path, PathBuf};
use crate::error::types::{MakebinError, Result};
use super::constants::EXTENSION_SEPARATOR;

/// Where the binary image goes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutputTarget {
    /// Write to exactly this path.
    Explicit(PathBuf),
    /// Drop everything from the first `.` of the input file name:
    /// `firmware.hex` becomes `firmware` next to the input.
    StripExtension,
}

impl OutputTarget {
    pub fn resolve(&self, input: &Path) -> Result<PathBuf> {
        match self {
            OutputTarget::Explicit(path) => Ok(path.clone()),
            OutputTarget::StripExtension => {
                let invalid = || MakebinError::InvalidPath(input.to_path_buf());
                let name = input
                    .file_name()
                    .and_then(|n| n.to_str())
                    .ok_or_else(invalid)?;

                // No separator would map the input onto itself
                let (stem, _) = name.split_once(EXTENSION_SEPARATOR).ok_or_else(invalid)?;
                if stem.is_empty() {
                    return Err(invalid());
                }
                Ok(input.with_file_name(stem))
            }
        }
    }
}

impl Default for OutputTarget {
    fn default() -> Self {
        OutputTarget::StripExtension
    }
}

#[derive(Debug, Clone)]
pub struct ConvertConfig {
    input: PathBuf,
    output: OutputTarget,
}

impl ConvertConfig {
    pub fn builder() -> ConvertConfigBuilder {
        ConvertConfigBuilder::new()
    }

    pub fn input(&self) -> &Path {
        &self.input
    }

    pub fn output_target(&self) -> &OutputTarget {
        &self.output
    }

    pub fn output_path(&self) -> Result<PathBuf> {
        self.output.resolve(&self.input)
    }
}

#[derive(Default)]
pub struct ConvertConfigBuilder {
    input: PathBuf,
    output: OutputTarget,
}

impl ConvertConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn input(mut self, path: impl Into<PathBuf>) -> Self {
        self.input = path.into();
        self
    }

    pub fn output(mut self, path: impl Into<PathBuf>) -> Self {
        self.output = OutputTarget::Explicit(path.into());
        self
    }

    pub fn output_target(mut self, target: OutputTarget) -> Self {
        self.output = target;
        self
    }

    pub fn build(self) -> ConvertConfig {
        ConvertConfig {
            input: self.input,
            output: self.output,
        }
    }
}

impl Default for ConvertConfig {
    fn default() -> Self {
        Self::builder().build()
    }
}
