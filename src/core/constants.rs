/// Bytes emitted per token.
pub const WORD_BYTES: usize = 2;

pub const DEFAULT_LOG_FILTER: &str = "warn";
pub const VERBOSE_LOG_FILTER: &str = "debug";

/// Separator used when deriving an output name from the input file name.
pub const EXTENSION_SEPARATOR: char = '.';
