pub mod args;
pub mod commands;

use std::ffi::OsString;
use clap::error::ErrorKind;
use clap::Parser;
use log::debug;
use crate::core::api::{ConvertSummary, HexToBinConverter};
use crate::core::config::{ConvertConfig, OutputTarget};
use crate::error::types::{MakebinError, Result};
use self::args::Cli;

/// Parse command-line arguments.
///
/// `Ok(None)` means `--help` or `--version` was requested and has already
/// been printed. Anything else clap rejects becomes a `Usage` error.
pub fn parse_args<I, T>(args: I) -> Result<Option<Cli>>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    match Cli::try_parse_from(args) {
        Ok(cli) => Ok(Some(cli)),
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            print!("{}", e.render());
            Ok(None)
        }
        Err(e) => Err(MakebinError::Usage(e.render().to_string().trim_end().to_string())),
    }
}

pub struct CliProcessor {
    converter: HexToBinConverter,
}

impl CliProcessor {
    pub fn new() -> Self {
        debug!("Creating new CliProcessor");
        Self {
            converter: HexToBinConverter::new(),
        }
    }

    pub fn config_for(cli: &Cli) -> ConvertConfig {
        let builder = ConvertConfig::builder().input(&cli.input);
        let builder = match &cli.output {
            Some(output) => builder.output(output),
            None => builder.output_target(OutputTarget::StripExtension),
        };
        builder.build()
    }

    pub fn process(&self, cli: &Cli) -> Result<ConvertSummary> {
        debug!("Processing command: {:?}", cli);
        let config = Self::config_for(cli);
        commands::convert(&self.converter, &config, cli.dump)
    }
}

impl Default for CliProcessor {
    fn default() -> Self {
        Self::new()
    }
}
