use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use stride_core::{Biometrics, RecordMode};

use crate::batch::BatchOptions;
use crate::render::OutputFormat;
use crate::{CliError, CliResult};

/// Shape of the input records.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum Mode {
    /// `<steps>,<duration>`, treated as walking
    Steps,
    /// `<steps>,<activity>,<duration>`
    Training,
}

impl From<Mode> for RecordMode {
    fn from(mode: Mode) -> Self {
        match mode {
            Mode::Steps => RecordMode::StepsOnly,
            Mode::Training => RecordMode::Full,
        }
    }
}

/// Summarize step-counter records as distance, speed and calories burned.
#[derive(Parser, Debug)]
#[command(name = "stride", version, about)]
pub struct Args {
    /// Body weight in kilograms
    #[arg(long, env = "STRIDE_WEIGHT_KG")]
    pub weight: f64,

    /// Body height in meters
    #[arg(long, env = "STRIDE_HEIGHT_M")]
    pub height: f64,

    #[arg(long, value_enum, default_value_t = Mode::Training)]
    pub mode: Mode,

    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Fail on the first rejected record instead of skipping it
    #[arg(long)]
    pub strict: bool,

    /// Record file, one record per line (default: stdin)
    pub input: Option<PathBuf>,
}

impl Args {
    pub fn biometrics(&self) -> CliResult<Biometrics> {
        if self.weight.is_nan() || self.weight <= 0.0 {
            return Err(CliError::Validation(format!(
                "weight = {}, expected a positive number of kilograms",
                self.weight
            )));
        }
        if self.height.is_nan() || self.height <= 0.0 {
            return Err(CliError::Validation(format!(
                "height = {}, expected a positive number of meters",
                self.height
            )));
        }
        Ok(Biometrics::new(self.weight, self.height))
    }

    pub fn batch_options(&self) -> BatchOptions {
        BatchOptions {
            mode: self.mode.into(),
            format: self.format,
            strict: self.strict,
        }
    }
}
