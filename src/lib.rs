pub mod cli;
pub mod core;
pub mod error;
pub mod fs;

pub use crate::core::api::{ConvertOps, ConvertSummary, HexToBinConverter};
pub use crate::core::config::{ConvertConfig, OutputTarget};
pub use crate::error::types::{FileSystemError, MakebinError, Result};
pub use crate::fs::ByteSequence;

/// Version of the library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
