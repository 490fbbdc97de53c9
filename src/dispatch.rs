//! Activity code dispatch
//!
//! Maps a sensor package's three-letter code to its activity variant and
//! binds the package's positional values to the variant's named fields.

use crate::error::{Result, TrackerError};
use crate::models::ActivityKind;
use crate::running::Running;
use crate::swimming::Swimming;
use crate::training::Activity;
use crate::walking::SportsWalking;
use tracing::debug;

const SWIMMING_FIELDS: &[&str] = &[
    "action_count",
    "duration_hours",
    "weight_kg",
    "pool_length_m",
    "pool_laps",
];
const RUNNING_FIELDS: &[&str] = &["action_count", "duration_hours", "weight_kg"];
const WALKING_FIELDS: &[&str] = &["action_count", "duration_hours", "weight_kg", "height_cm"];

impl ActivityKind {
    /// Field names, in the order a sensor package lists their values
    pub fn field_names(&self) -> &'static [&'static str] {
        match self {
            ActivityKind::Swimming => SWIMMING_FIELDS,
            ActivityKind::Running => RUNNING_FIELDS,
            ActivityKind::SportsWalking => WALKING_FIELDS,
        }
    }
}

/// Look up the activity variant for a sensor package code.
///
/// Codes are matched exactly; `"run"` is not `"RUN"`.
pub fn resolve(code: &str) -> Result<ActivityKind> {
    ActivityKind::ALL
        .into_iter()
        .find(|kind| kind.code() == code)
        .ok_or_else(|| TrackerError::UnknownActivityCode {
            code: code.to_string(),
        })
}

/// Build an activity from a code and its positional sensor values.
pub fn build(code: &str, values: &[f64]) -> Result<Activity> {
    let kind = resolve(code)?;
    let fields = kind.field_names();

    if values.len() != fields.len() {
        return Err(TrackerError::ArityMismatch {
            code: code.to_string(),
            expected: fields.len(),
            actual: values.len(),
        });
    }

    debug!(code, ?kind, ?values, "Binding sensor values");

    let activity = match kind {
        ActivityKind::Swimming => Swimming::new(
            count_field("action_count", values[0])?,
            values[1],
            values[2],
            values[3],
            count_field("pool_laps", values[4])?,
        )
        .into(),
        ActivityKind::Running => {
            Running::new(count_field("action_count", values[0])?, values[1], values[2]).into()
        }
        ActivityKind::SportsWalking => SportsWalking::new(
            count_field("action_count", values[0])?,
            values[1],
            values[2],
            values[3],
        )
        .into(),
    };

    Ok(activity)
}

/// Convert a raw reading into a whole, non-negative count.
fn count_field(field: &'static str, value: f64) -> Result<u32> {
    if value.is_finite() && value >= 0.0 && value.fract() == 0.0 && value <= f64::from(u32::MAX) {
        Ok(value as u32)
    } else {
        Err(TrackerError::InvalidField { field, value })
    }
}
