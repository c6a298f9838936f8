use anyhow::Context;
use clap::Parser;
use stride_cli::Args;
use stride_core::CalculatorConfig;

fn main() -> anyhow::Result<()> {
    let log_env = stride_cli::logging::init();
    tracing::debug!("stride: log filter: {}", log_env);

    let args = Args::parse();
    let config = CalculatorConfig::from_env().context("loading calculator coefficients")?;
    tracing::debug!(?config, mode = ?args.mode, format = ?args.format, "stride: starting");

    let report = stride_cli::run(&args, config, std::io::stdout().lock())?;
    if report.rejected > 0 {
        tracing::info!(rejected = report.rejected, "stride: some records were skipped");
    }

    Ok(())
}
