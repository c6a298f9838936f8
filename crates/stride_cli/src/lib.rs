//! Command-line front end for `stride_core`.
//!
//! # Modules
//!
//! - [`services`]: steps-only and training entry points over one user's biometrics
//! - [`render`]: text and JSON renderings of a computed summary
//! - [`batch`]: line-by-line processing with log-and-skip on bad records
//! - [`cli`]: argument parsing
//! - [`logging`]: tracing subscriber setup

use std::fs::File;
use std::io::{self, BufReader, Write};

pub mod batch;
pub mod cli;
pub mod error;
pub mod logging;
pub mod render;
pub mod services;

pub use batch::{BatchOptions, BatchReport, process_lines};
pub use cli::{Args, Mode};
pub use error::{CliError, CliResult};
pub use render::OutputFormat;
pub use services::ActivityService;

use stride_core::{Calculator, CalculatorConfig};

/// Run a batch described by `args`, writing summaries to `writer`.
pub fn run<W: Write>(args: &Args, config: CalculatorConfig, writer: W) -> CliResult<BatchReport> {
    config.validate()?;
    let service = ActivityService::new(Calculator::new(config), args.biometrics()?);
    let options = args.batch_options();

    match &args.input {
        Some(path) => {
            let file = File::open(path)?;
            process_lines(&service, BufReader::new(file), writer, &options)
        }
        None => process_lines(&service, io::stdin().lock(), writer, &options),
    }
}
