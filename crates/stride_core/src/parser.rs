//! Record decomposition and field-level validation.
//!
//! Only the activity label is trimmed. Steps and duration must be written
//! without surrounding whitespace, so `"678, 0h50m"` is rejected.

use serde::Serialize;

use crate::duration::parse_duration;
use crate::{ActivityError, Field, ParsedActivity};

pub const FIELD_DELIMITER: char = ',';

/// Shape of a record line.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RecordMode {
    /// `<steps>,<duration>`, activity implied to be walking.
    StepsOnly,
    /// `<steps>,<activity>,<duration>`.
    Full,
}

impl RecordMode {
    pub fn arity(self) -> usize {
        match self {
            RecordMode::StepsOnly => 2,
            RecordMode::Full => 3,
        }
    }
}

/// Fields of one record, split but not yet validated.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RawRecord<'a> {
    mode: RecordMode,
    fields: Vec<&'a str>,
}

impl<'a> RawRecord<'a> {
    pub fn split(raw: &'a str, mode: RecordMode) -> Result<Self, ActivityError> {
        let fields: Vec<&str> = raw.split(FIELD_DELIMITER).collect();
        if fields.len() != mode.arity() {
            return Err(ActivityError::MalformedRecord {
                record: raw.to_string(),
                expected: mode.arity(),
                actual: fields.len(),
            });
        }
        Ok(Self { mode, fields })
    }

    pub fn steps(&self) -> &'a str {
        self.fields[0]
    }

    pub fn activity(&self) -> Option<&'a str> {
        match self.mode {
            RecordMode::StepsOnly => None,
            RecordMode::Full => Some(self.fields[1]),
        }
    }

    pub fn duration(&self) -> &'a str {
        self.fields[self.fields.len() - 1]
    }

    pub fn into_parsed(self) -> Result<ParsedActivity, ActivityError> {
        let steps = parse_steps(self.steps())?;
        let activity_label = self.activity().map(parse_activity_label).transpose()?;
        let duration = parse_duration_field(self.duration())?;
        Ok(ParsedActivity {
            steps,
            activity_label,
            duration,
        })
    }
}

fn parse_steps(field: &str) -> Result<u64, ActivityError> {
    let steps: i64 = field
        .parse()
        .map_err(|source| ActivityError::InvalidNumber {
            value: field.to_string(),
            source,
        })?;
    if steps <= 0 {
        return Err(ActivityError::out_of_range(Field::Steps, steps));
    }
    Ok(steps.unsigned_abs())
}

fn parse_activity_label(field: &str) -> Result<String, ActivityError> {
    let label = field.trim();
    if label.is_empty() {
        return Err(ActivityError::EmptyField {
            field: Field::Activity,
        });
    }
    Ok(label.to_string())
}

fn parse_duration_field(field: &str) -> Result<std::time::Duration, ActivityError> {
    let span = parse_duration(field).map_err(|source| ActivityError::InvalidDuration {
        value: field.to_string(),
        source,
    })?;
    span.to_positive()
        .ok_or_else(|| ActivityError::out_of_range(Field::Duration, span))
}

/// Parse a record of the given shape.
pub fn parse_record(raw: &str, mode: RecordMode) -> Result<ParsedActivity, ActivityError> {
    RawRecord::split(raw, mode)?.into_parsed()
}

/// Parse a `"<steps>,<duration>"` record such as `"678,0h50m"`.
pub fn parse_steps_record(raw: &str) -> Result<ParsedActivity, ActivityError> {
    parse_record(raw, RecordMode::StepsOnly)
}

/// Parse a `"<steps>,<activity>,<duration>"` record such as `"3456,Walking,3h00m"`.
pub fn parse_training_record(raw: &str) -> Result<ParsedActivity, ActivityError> {
    parse_record(raw, RecordMode::Full)
}
