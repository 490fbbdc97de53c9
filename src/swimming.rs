//! Pool swimming workouts
//!
//! Swimming measures strokes instead of steps, so the per-action length
//! differs from running and walking, and the mean speed is taken from pool
//! geometry rather than from the stroke-based distance.

use crate::formulas::constants::{METERS_PER_KM, STEP_LENGTH_SWIM, SWIM_SPEED_OFFSET};
use crate::formulas::{checked_div, ensure_finite, FormulaResult};
use crate::models::{ActivityKind, WorkoutBase};
use crate::training::Training;

/// Pool swimming session
#[derive(Debug, Clone, PartialEq)]
pub struct Swimming {
    pub base: WorkoutBase,

    /// Pool length in meters
    pub pool_length_m: f64,

    /// Number of pool lengths swum
    pub pool_laps: u32,
}

impl Swimming {
    pub fn new(
        action_count: u32,
        duration_hours: f64,
        weight_kg: f64,
        pool_length_m: f64,
        pool_laps: u32,
    ) -> Self {
        Self {
            base: WorkoutBase::new(action_count, duration_hours, weight_kg),
            pool_length_m,
            pool_laps,
        }
    }

    /// Distance from pool geometry, in kilometers
    pub fn pool_distance_km(&self) -> f64 {
        self.pool_length_m * f64::from(self.pool_laps) / METERS_PER_KM
    }
}

impl Training for Swimming {
    fn kind(&self) -> ActivityKind {
        ActivityKind::Swimming
    }

    fn base(&self) -> &WorkoutBase {
        &self.base
    }

    fn step_length_m(&self) -> f64 {
        STEP_LENGTH_SWIM
    }

    fn mean_speed_km_h(&self) -> FormulaResult<f64> {
        checked_div(
            self.pool_distance_km(),
            self.base.duration_hours,
            "swimming mean speed",
        )
    }

    fn spent_calories(&self) -> FormulaResult<f64> {
        let speed = self.mean_speed_km_h()?;
        ensure_finite(
            (speed + SWIM_SPEED_OFFSET) * 2.0 * self.base.weight_kg,
            "swimming calories",
        )
    }
}
