//! Activity record parsing and physiology calculations for walking and running.
//!
//! A record is one comma-delimited line such as `"678,0h50m"` (steps-only) or
//! `"3456,Walking,3h00m"` (full). [`parser`] turns it into a [`ParsedActivity`],
//! [`calculator::Calculator`] turns that plus [`Biometrics`] into an
//! [`ActivityResult`].

use std::fmt;
use std::num::ParseIntError;
use std::time::Duration;

use serde::Serialize;
use thiserror::Error;

pub mod calculator;
pub mod config;
pub mod duration;
pub mod parser;

pub use calculator::{ActivityKind, Calculator, CalorieModel, METERS_PER_KM, MINUTES_PER_HOUR};
pub use config::CalculatorConfig;
pub use duration::{DurationSyntaxError, SignedDuration, parse_duration};
pub use parser::{RawRecord, RecordMode, parse_record, parse_steps_record, parse_training_record};

/// Input field a validation failure refers to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Field {
    Steps,
    Activity,
    Duration,
    Weight,
    Height,
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Field::Steps => "steps",
            Field::Activity => "activity",
            Field::Duration => "duration",
            Field::Weight => "weight",
            Field::Height => "height",
        };
        f.write_str(name)
    }
}

#[derive(Clone, Debug, Error, PartialEq)]
pub enum ActivityError {
    #[error("malformed record {record:?}: split into {actual} fields, expected {expected}")]
    MalformedRecord {
        record: String,
        expected: usize,
        actual: usize,
    },
    #[error("invalid step count {value:?}: {source}")]
    InvalidNumber {
        value: String,
        #[source]
        source: ParseIntError,
    },
    #[error("invalid duration {value:?}: {source}")]
    InvalidDuration {
        value: String,
        #[source]
        source: DurationSyntaxError,
    },
    #[error("{field} must be set")]
    EmptyField { field: Field },
    #[error("{field} = {value}, expected a positive non-zero {field}")]
    OutOfRange { field: Field, value: String },
    #[error("unknown activity type {label:?}, expected one of {expected:?}")]
    UnknownActivity {
        label: String,
        expected: Vec<&'static str>,
    },
    #[error("configuration error: {0}")]
    Config(String),
}

impl ActivityError {
    pub(crate) fn out_of_range(field: Field, value: impl fmt::Display) -> Self {
        ActivityError::OutOfRange {
            field,
            value: value.to_string(),
        }
    }

    /// The input field the failure is attributed to, if any.
    pub fn field(&self) -> Option<Field> {
        match self {
            ActivityError::InvalidNumber { .. } => Some(Field::Steps),
            ActivityError::InvalidDuration { .. } => Some(Field::Duration),
            ActivityError::EmptyField { field } | ActivityError::OutOfRange { field, .. } => {
                Some(*field)
            }
            ActivityError::UnknownActivity { .. } => Some(Field::Activity),
            ActivityError::MalformedRecord { .. } | ActivityError::Config(_) => None,
        }
    }
}

/// A record after field-level validation.
///
/// `steps` and `duration` are always strictly positive. `activity_label` is
/// `Some` only for records parsed in [`RecordMode::Full`] and is trimmed and
/// non-empty, but not yet checked against the recognized activity types.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParsedActivity {
    pub steps: u64,
    pub activity_label: Option<String>,
    pub duration: Duration,
}

/// User body measurements supplied alongside each record.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct Biometrics {
    pub weight_kg: f64,
    pub height_m: f64,
}

impl Biometrics {
    pub fn new(weight_kg: f64, height_m: f64) -> Self {
        Self {
            weight_kg,
            height_m,
        }
    }
}

/// Computed summary for one activity record.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ActivityResult {
    pub activity: ActivityKind,
    pub mode: RecordMode,
    pub steps: u64,
    pub distance_km: f64,
    #[serde(serialize_with = "serialize_hours", rename = "duration_hours")]
    pub duration: Duration,
    /// Speed from the height-derived stride. In steps-only mode `distance_km`
    /// uses the average stride instead, so the two need not agree.
    pub mean_speed_kmh: f64,
    pub calories: f64,
}

impl ActivityResult {
    pub fn duration_hours(&self) -> f64 {
        self.duration.as_secs_f64() / 3600.0
    }
}

fn serialize_hours<S>(duration: &Duration, serializer: S) -> Result<S::Ok, S::Error>
where
    S: serde::Serializer,
{
    serializer.serialize_f64(duration.as_secs_f64() / 3600.0)
}
