use std::time::Instant;

use stride_core::{ActivityResult, Biometrics, Calculator, RecordMode, parse_record};
use tracing::debug;

use crate::CliResult;
use crate::render::{render_day_summary, render_training_summary};

/// Entry points that turn raw record lines into summaries for one user.
#[derive(Clone, Copy, Debug)]
pub struct ActivityService {
    calculator: Calculator,
    biometrics: Biometrics,
}

impl ActivityService {
    pub fn new(calculator: Calculator, biometrics: Biometrics) -> Self {
        Self {
            calculator,
            biometrics,
        }
    }

    /// Parse and compute a record of the given shape.
    pub fn summarize(&self, raw: &str, mode: RecordMode) -> CliResult<ActivityResult> {
        let start = Instant::now();
        let result = parse_record(raw, mode)
            .and_then(|parsed| self.calculator.summarize(&parsed, self.biometrics));
        match &result {
            Ok(_) => debug!(record = raw, ?mode, elapsed = ?start.elapsed(), "record summarized"),
            Err(e) => debug!(record = raw, ?mode, error = %e, "record rejected"),
        }
        Ok(result?)
    }

    /// Steps-only message for `"<steps>,<duration>"`.
    pub fn day_action_info(&self, raw: &str) -> CliResult<String> {
        let result = self.summarize(raw, RecordMode::StepsOnly)?;
        Ok(render_day_summary(&result))
    }

    /// Training message for `"<steps>,<activity>,<duration>"`.
    pub fn training_info(&self, raw: &str) -> CliResult<String> {
        let result = self.summarize(raw, RecordMode::Full)?;
        Ok(render_training_summary(&result))
    }

    /// Text message for a record of the given shape. The caller decides
    /// whether a failure skips the record or aborts.
    pub fn info(&self, raw: &str, mode: RecordMode) -> CliResult<String> {
        match mode {
            RecordMode::StepsOnly => self.day_action_info(raw),
            RecordMode::Full => self.training_info(raw),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::CliError;
    use stride_core::{ActivityError, ActivityKind};

    fn service() -> ActivityService {
        ActivityService::new(Calculator::default(), Biometrics::new(75.0, 1.75))
    }

    #[test]
    fn day_action_info_renders_three_lines() {
        let text = service().day_action_info("678,0h50m").unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], "Steps: 678.");
        // 678 * 0.65 / 1000
        assert_eq!(lines[1], "Distance: 0.44 km.");
        assert!(lines[2].starts_with("Calories burned: "));
    }

    #[test]
    fn day_action_info_returns_errors() {
        let err = service().day_action_info("678").unwrap_err();
        assert!(matches!(
            err,
            CliError::Activity(ActivityError::MalformedRecord { .. })
        ));
        let err = service().day_action_info("0,0h50m").unwrap_err();
        assert!(matches!(
            err,
            CliError::Activity(ActivityError::OutOfRange { .. })
        ));
        let err = service().day_action_info("678,soon").unwrap_err();
        assert!(matches!(
            err,
            CliError::Activity(ActivityError::InvalidDuration { .. })
        ));
    }

    #[test]
    fn info_dispatches_on_mode() {
        let svc = service();
        assert_eq!(
            svc.info("678,0h50m", RecordMode::StepsOnly).unwrap(),
            svc.day_action_info("678,0h50m").unwrap()
        );
        assert_eq!(
            svc.info("3456,Walking,3h00m", RecordMode::Full).unwrap(),
            svc.training_info("3456,Walking,3h00m").unwrap()
        );
        assert!(svc.info("3456,Walking,3h00m", RecordMode::StepsOnly).is_err());
    }

    #[test]
    fn training_info_renders_duration() {
        let text = service().training_info("3456,Walking,3h00m").unwrap();
        assert!(text.starts_with("Activity type: Walking\n"));
        assert!(text.contains("Duration: 3.00 h.\n"));
    }

    #[test]
    fn training_info_returns_errors() {
        let err = service().training_info("3456,Dancing,3h00m").unwrap_err();
        assert!(matches!(
            err,
            CliError::Activity(ActivityError::UnknownActivity { .. })
        ));
        let err = service().training_info("3456,Walking").unwrap_err();
        assert!(matches!(
            err,
            CliError::Activity(ActivityError::MalformedRecord { .. })
        ));
    }

    #[test]
    fn summarize_by_mode() {
        let r = service().summarize("678,0h50m", RecordMode::StepsOnly).unwrap();
        assert_eq!(r.activity, ActivityKind::Walking);
        let r = service()
            .summarize("100,Running,10m", RecordMode::Full)
            .unwrap();
        assert_eq!(r.activity, ActivityKind::Running);
    }
}
