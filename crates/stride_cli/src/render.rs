//! Human-readable and JSON renderings of an [`ActivityResult`].

use clap::ValueEnum;
use stride_core::ActivityResult;

use crate::CliResult;

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

/// Message for a steps-only record.
pub fn render_day_summary(result: &ActivityResult) -> String {
    format!(
        "Steps: {}.\nDistance: {:.2} km.\nCalories burned: {:.2} kcal.\n",
        result.steps, result.distance_km, result.calories
    )
}

/// Message for a labelled training record.
pub fn render_training_summary(result: &ActivityResult) -> String {
    format!(
        "Activity type: {}\nDuration: {:.2} h.\nDistance: {:.2} km.\nSpeed: {:.2} km/h\nCalories burned: {:.2}\n",
        result.activity,
        result.duration_hours(),
        result.distance_km,
        result.mean_speed_kmh,
        result.calories
    )
}

pub fn render_json(result: &ActivityResult) -> CliResult<String> {
    Ok(serde_json::to_string(result)?)
}
