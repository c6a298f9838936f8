//! Distance, speed and calorie formulas for walking and running.
//!
//! Running calories are `weight * mean_speed * minutes / MINUTES_PER_HOUR`.
//! Walking calories are the running figure scaled by
//! [`CalculatorConfig::walking_calories_coefficient`]; any activity modelled as
//! a fraction of running belongs under [`CalorieModel::ScaledRunning`].

use std::fmt;
use std::str::FromStr;
use std::time::Duration;

use serde::Serialize;
use tracing::debug;

use crate::{
    ActivityError, ActivityResult, Biometrics, CalculatorConfig, Field, ParsedActivity,
    RecordMode,
};

pub const METERS_PER_KM: f64 = 1000.0;
pub const MINUTES_PER_HOUR: f64 = 60.0;
const SECONDS_PER_MINUTE: f64 = 60.0;
const SECONDS_PER_HOUR: f64 = SECONDS_PER_MINUTE * MINUTES_PER_HOUR;

/// Recognized activity types.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub enum ActivityKind {
    Walking,
    Running,
}

/// How calories are derived for an activity type.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CalorieModel {
    Running,
    ScaledRunning,
}

impl ActivityKind {
    pub const ALL: [ActivityKind; 2] = [ActivityKind::Walking, ActivityKind::Running];

    pub fn label(self) -> &'static str {
        match self {
            ActivityKind::Walking => "Walking",
            ActivityKind::Running => "Running",
        }
    }

    pub fn recognized_labels() -> Vec<&'static str> {
        Self::ALL.iter().map(|kind| kind.label()).collect()
    }

    pub fn calorie_model(self) -> CalorieModel {
        match self {
            ActivityKind::Walking => CalorieModel::ScaledRunning,
            ActivityKind::Running => CalorieModel::Running,
        }
    }
}

impl fmt::Display for ActivityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for ActivityKind {
    type Err = ActivityError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.label() == s)
            .ok_or_else(|| ActivityError::UnknownActivity {
                label: s.to_string(),
                expected: Self::recognized_labels(),
            })
    }
}

fn hours(duration: Duration) -> f64 {
    duration.as_secs_f64() / SECONDS_PER_HOUR
}

fn minutes(duration: Duration) -> f64 {
    duration.as_secs_f64() / SECONDS_PER_MINUTE
}

/// Stateless formula engine over a fixed set of coefficients.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Calculator {
    config: CalculatorConfig,
}

impl Calculator {
    pub fn new(config: CalculatorConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &CalculatorConfig {
        &self.config
    }

    /// Stride length in meters derived from body height.
    pub fn stride_length_m(&self, height_m: f64) -> f64 {
        height_m * self.config.step_length_height_coefficient
    }

    /// Distance in kilometers using the height-derived stride.
    pub fn distance_km(&self, steps: u64, height_m: f64) -> f64 {
        steps as f64 * self.stride_length_m(height_m) / METERS_PER_KM
    }

    /// Distance in kilometers using the fixed average stride.
    pub fn average_distance_km(&self, steps: u64) -> f64 {
        steps as f64 * self.config.average_step_length_m / METERS_PER_KM
    }

    /// Mean speed in km/h. Zero, not an error, when there are no steps or no time.
    pub fn mean_speed(&self, steps: u64, height_m: f64, duration: Duration) -> f64 {
        if steps == 0 {
            return 0.0;
        }
        let hours = hours(duration);
        if hours <= 0.0 {
            return 0.0;
        }
        self.distance_km(steps, height_m) / hours
    }

    pub fn running_calories(
        &self,
        steps: u64,
        biometrics: Biometrics,
        duration: Duration,
    ) -> Result<f64, ActivityError> {
        if steps == 0 {
            return Err(ActivityError::out_of_range(Field::Steps, steps));
        }
        if biometrics.weight_kg.is_nan() || biometrics.weight_kg <= 0.0 {
            return Err(ActivityError::out_of_range(
                Field::Weight,
                biometrics.weight_kg,
            ));
        }
        if biometrics.height_m.is_nan() || biometrics.height_m <= 0.0 {
            return Err(ActivityError::out_of_range(
                Field::Height,
                biometrics.height_m,
            ));
        }
        if duration.is_zero() {
            return Err(ActivityError::out_of_range(
                Field::Duration,
                format!("{duration:?}"),
            ));
        }

        let speed = self.mean_speed(steps, biometrics.height_m, duration);
        Ok(biometrics.weight_kg * speed * minutes(duration) / MINUTES_PER_HOUR)
    }

    pub fn walking_calories(
        &self,
        steps: u64,
        biometrics: Biometrics,
        duration: Duration,
    ) -> Result<f64, ActivityError> {
        let running = self.running_calories(steps, biometrics, duration)?;
        Ok(running * self.config.walking_calories_coefficient)
    }

    pub fn calories(
        &self,
        kind: ActivityKind,
        steps: u64,
        biometrics: Biometrics,
        duration: Duration,
    ) -> Result<f64, ActivityError> {
        match kind.calorie_model() {
            CalorieModel::Running => self.running_calories(steps, biometrics, duration),
            CalorieModel::ScaledRunning => self.walking_calories(steps, biometrics, duration),
        }
    }

    /// Summarize a record; labelled records go through the activity dispatch,
    /// unlabelled ones are treated as steps-only walks.
    pub fn summarize(
        &self,
        parsed: &ParsedActivity,
        biometrics: Biometrics,
    ) -> Result<ActivityResult, ActivityError> {
        match parsed.activity_label {
            Some(_) => self.summarize_training(parsed, biometrics),
            None => self.summarize_steps(parsed, biometrics),
        }
    }

    /// Steps-only summary. Distance uses the average stride; calories and
    /// speed use the height-derived stride of the walking formula.
    pub fn summarize_steps(
        &self,
        parsed: &ParsedActivity,
        biometrics: Biometrics,
    ) -> Result<ActivityResult, ActivityError> {
        let calories = self
            .walking_calories(parsed.steps, biometrics, parsed.duration)
            .inspect_err(|e| debug!(error = %e, field = ?e.field(), "steps record rejected"))?;

        Ok(ActivityResult {
            activity: ActivityKind::Walking,
            mode: RecordMode::StepsOnly,
            steps: parsed.steps,
            distance_km: self.average_distance_km(parsed.steps),
            duration: parsed.duration,
            mean_speed_kmh: self.mean_speed(parsed.steps, biometrics.height_m, parsed.duration),
            calories,
        })
    }

    /// Full summary for a labelled record.
    pub fn summarize_training(
        &self,
        parsed: &ParsedActivity,
        biometrics: Biometrics,
    ) -> Result<ActivityResult, ActivityError> {
        let label = parsed
            .activity_label
            .as_deref()
            .ok_or(ActivityError::EmptyField {
                field: Field::Activity,
            })?;
        let kind: ActivityKind = label
            .parse()
            .inspect_err(|e| debug!(error = %e, "training record rejected"))?;
        let calories = self
            .calories(kind, parsed.steps, biometrics, parsed.duration)
            .inspect_err(|e| debug!(error = %e, field = ?e.field(), "training record rejected"))?;

        Ok(ActivityResult {
            activity: kind,
            mode: RecordMode::Full,
            steps: parsed.steps,
            distance_km: self.distance_km(parsed.steps, biometrics.height_m),
            duration: parsed.duration,
            mean_speed_kmh: self.mean_speed(parsed.steps, biometrics.height_m, parsed.duration),
            calories,
        })
    }
}
