use crate::ActivityError;

pub const DEFAULT_AVERAGE_STEP_LENGTH_M: f64 = 0.65;
pub const DEFAULT_STEP_LENGTH_HEIGHT_COEFFICIENT: f64 = 0.45;
pub const DEFAULT_WALKING_CALORIES_COEFFICIENT: f64 = 0.5;

/// Coefficients used by [`Calculator`](crate::Calculator).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CalculatorConfig {
    /// Stride length used when only steps are known, in meters.
    pub average_step_length_m: f64,
    /// Stride length as a fraction of body height.
    pub step_length_height_coefficient: f64,
    /// Share of the running calorie burn attributed to walking.
    pub walking_calories_coefficient: f64,
}

impl Default for CalculatorConfig {
    fn default() -> Self {
        Self {
            average_step_length_m: DEFAULT_AVERAGE_STEP_LENGTH_M,
            step_length_height_coefficient: DEFAULT_STEP_LENGTH_HEIGHT_COEFFICIENT,
            walking_calories_coefficient: DEFAULT_WALKING_CALORIES_COEFFICIENT,
        }
    }
}

impl CalculatorConfig {
    pub fn from_env() -> Result<Self, ActivityError> {
        Self::from_env_with(|k| std::env::var(k).ok())
    }

    /// Testable helper that reads configuration values using the provided
    /// function. Every key is optional and falls back to its default.
    pub fn from_env_with<F>(mut get: F) -> Result<Self, ActivityError>
    where
        F: FnMut(&str) -> Option<String>,
    {
        let defaults = Self::default();
        let mut read = |key: &str, default: f64| -> Result<f64, ActivityError> {
            match get(key) {
                None => Ok(default),
                Some(raw) => raw.trim().parse::<f64>().map_err(|_| {
                    ActivityError::Config(format!("{key} = {raw:?} is not a number"))
                }),
            }
        };

        let config = Self {
            average_step_length_m: read(
                "STRIDE_AVERAGE_STEP_LENGTH_M",
                defaults.average_step_length_m,
            )?,
            step_length_height_coefficient: read(
                "STRIDE_STEP_LENGTH_HEIGHT_COEFFICIENT",
                defaults.step_length_height_coefficient,
            )?,
            walking_calories_coefficient: read(
                "STRIDE_WALKING_CALORIES_COEFFICIENT",
                defaults.walking_calories_coefficient,
            )?,
        };
        config.validate()?;
        Ok(config)
    }

    /// All coefficients must be finite and positive; walking must burn less than running.
    pub fn validate(&self) -> Result<(), ActivityError> {
        let checks = [
            ("average_step_length_m", self.average_step_length_m),
            (
                "step_length_height_coefficient",
                self.step_length_height_coefficient,
            ),
            (
                "walking_calories_coefficient",
                self.walking_calories_coefficient,
            ),
        ];
        for (name, value) in checks {
            if !value.is_finite() || value <= 0.0 {
                return Err(ActivityError::Config(format!(
                    "{name} = {value}, expected a positive finite number"
                )));
            }
        }
        if self.walking_calories_coefficient >= 1.0 {
            return Err(ActivityError::Config(format!(
                "walking_calories_coefficient = {}, expected a value below 1",
                self.walking_calories_coefficient
            )));
        }
        Ok(())
    }
}
