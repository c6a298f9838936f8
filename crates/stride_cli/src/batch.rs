//! Line-oriented processing of record streams.
//!
//! Each non-blank line is one record. Rejected records, including lines that
//! are not valid UTF-8, are logged and skipped unless `strict` is set, in which
//! case the first rejection aborts the run.

use std::io::{BufRead, Write};

use stride_core::RecordMode;
use tracing::{info, warn};

use crate::render::{OutputFormat, render_json};
use crate::services::ActivityService;
use crate::{CliError, CliResult};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BatchOptions {
    pub mode: RecordMode,
    pub format: OutputFormat,
    pub strict: bool,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct BatchReport {
    pub processed: usize,
    pub rejected: usize,
}

pub fn process_lines<R, W>(
    service: &ActivityService,
    mut reader: R,
    mut writer: W,
    options: &BatchOptions,
) -> CliResult<BatchReport>
where
    R: BufRead,
    W: Write,
{
    let mut report = BatchReport::default();
    let mut buf = Vec::new();
    let mut line_no = 0usize;

    loop {
        buf.clear();
        if reader.read_until(b'\n', &mut buf)? == 0 {
            break;
        }
        line_no += 1;

        let line = match std::str::from_utf8(&buf) {
            Ok(line) => line.trim_end_matches(['\n', '\r']),
            Err(e) if options.strict => {
                warn!(line = line_no, error = %e, "record rejected, aborting");
                return Err(CliError::Validation(format!(
                    "line {line_no} is not valid UTF-8: {e}"
                )));
            }
            Err(e) => {
                warn!(line = line_no, error = %e, "record skipped");
                report.rejected += 1;
                continue;
            }
        };
        if line.trim().is_empty() {
            continue;
        }

        let rendered = match options.format {
            OutputFormat::Text => service.info(line, options.mode),
            OutputFormat::Json => service
                .summarize(line, options.mode)
                .and_then(|result| render_json(&result)),
        };

        match rendered {
            Ok(rendered) => {
                match options.format {
                    OutputFormat::Text if report.processed > 0 => {
                        writeln!(writer)?;
                        write!(writer, "{rendered}")?;
                    }
                    OutputFormat::Text => write!(writer, "{rendered}")?,
                    OutputFormat::Json => writeln!(writer, "{rendered}")?,
                }
                report.processed += 1;
            }
            Err(e) if options.strict => {
                warn!(line = line_no, error = %e, "record rejected, aborting");
                return Err(e);
            }
            Err(CliError::Activity(e)) => {
                warn!(line = line_no, field = ?e.field(), error = %e, "record skipped");
                report.rejected += 1;
            }
            Err(e) => return Err(e),
        }
    }

    writer.flush()?;
    info!(
        processed = report.processed,
        rejected = report.rejected,
        "batch complete"
    );
    Ok(report)
}
