use serde::{Deserialize, Deserializer, Serialize};

use crate::error::AppError;

/// Upper bound of the 70-hour/8-day hours-of-service cycle.
pub const MAX_CYCLE_HOURS: f64 = 70.0;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TripRequest {
    pub current_location: String,
    pub pickup_location: String,
    pub dropoff_location: String,
    #[serde(default = "missing_hours", deserialize_with = "lenient_hours")]
    pub cycle_hours_used: f64,
}

impl TripRequest {
    pub fn validate(&self) -> Result<(), AppError> {
        let fields = [
            ("current_location", &self.current_location),
            ("pickup_location", &self.pickup_location),
            ("dropoff_location", &self.dropoff_location),
        ];
        for (name, value) in fields {
            if value.trim().is_empty() {
                return Err(AppError::Validation(format!("{name} cannot be empty")));
            }
        }

        if !self.cycle_hours_used.is_finite() {
            return Err(AppError::Validation(
                "cycle_hours_used must be a number".to_string(),
            ));
        }

        if !(0.0..=MAX_CYCLE_HOURS).contains(&self.cycle_hours_used) {
            return Err(AppError::Validation(format!(
                "cycle_hours_used must be between 0 and {MAX_CYCLE_HOURS}"
            )));
        }

        Ok(())
    }

    /// True when the driver is already at the dropoff (trimmed, case-insensitive).
    pub fn is_at_dropoff(&self) -> bool {
        same_place(&self.current_location, &self.dropoff_location)
    }
}

pub fn same_place(a: &str, b: &str) -> bool {
    a.trim().to_lowercase() == b.trim().to_lowercase()
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawHours {
    Number(f64),
    Text(String),
}

fn missing_hours() -> f64 {
    f64::NAN
}

// Form fields arrive as strings; anything unparseable becomes NaN and is
// rejected by `validate`.
fn lenient_hours<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    let hours = match Option::<RawHours>::deserialize(deserializer)? {
        Some(RawHours::Number(value)) => value,
        Some(RawHours::Text(raw)) => raw.trim().parse::<f64>().unwrap_or(f64::NAN),
        None => f64::NAN,
    };
    Ok(hours)
}
