use std::path::PathBuf;
use clap::Parser;

/// Convert a listing of whitespace-separated 16-bit hex words into a raw
/// big-endian binary image.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Text file of hex words
    pub input: PathBuf,

    /// Binary output; derived from the input name when omitted
    /// (`firmware.hex` -> `firmware`)
    pub output: Option<PathBuf>,

    /// Print the produced bytes to stdout
    #[arg(long)]
    pub dump: bool,

    /// Enable debug logging
    #[arg(short, long)]
    pub verbose: bool,
}
