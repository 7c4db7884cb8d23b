use std::process;
use env_logger::Env;
use log::{debug, error};
use makebin::cli::{parse_args, CliProcessor};
use makebin::core::constants::{DEFAULT_LOG_FILTER, VERBOSE_LOG_FILTER};

fn main() {
    let cli = match parse_args(std::env::args_os()) {
        Ok(Some(cli)) => cli,
        Ok(None) => return,
        Err(e) => {
            eprintln!("{}", e);
            process::exit(1);
        }
    };

    let filter = if cli.verbose { VERBOSE_LOG_FILTER } else { DEFAULT_LOG_FILTER };
    env_logger::Builder::from_env(Env::default().default_filter_or(filter)).init();

    let processor = CliProcessor::new();
    match processor.process(&cli) {
        Ok(summary) => debug!("Done: {} bytes", summary.byte_len()),
        Err(e) => {
            error!("Conversion of {} failed", cli.input.display());
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    }
}
