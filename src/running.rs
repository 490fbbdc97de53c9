//! Running workouts

use crate::formulas::constants::{
    METERS_PER_KM, MINUTES_PER_HOUR, RUN_COEFF_1, RUN_COEFF_2, STEP_LENGTH_RUN_WALK,
};
use crate::formulas::{checked_div, ensure_finite, FormulaResult};
use crate::models::{ActivityKind, WorkoutBase};
use crate::training::Training;

/// Running session measured by step count
#[derive(Debug, Clone, PartialEq)]
pub struct Running {
    pub base: WorkoutBase,
}

impl Running {
    pub fn new(action_count: u32, duration_hours: f64, weight_kg: f64) -> Self {
        Self {
            base: WorkoutBase::new(action_count, duration_hours, weight_kg),
        }
    }
}

impl Training for Running {
    fn kind(&self) -> ActivityKind {
        ActivityKind::Running
    }

    fn base(&self) -> &WorkoutBase {
        &self.base
    }

    fn step_length_m(&self) -> f64 {
        STEP_LENGTH_RUN_WALK
    }

    fn mean_speed_km_h(&self) -> FormulaResult<f64> {
        checked_div(self.distance_km(), self.base.duration_hours, "running mean speed")
    }

    fn spent_calories(&self) -> FormulaResult<f64> {
        let speed = self.mean_speed_km_h()?;
        let calories = (RUN_COEFF_1 * speed - RUN_COEFF_2) * self.base.weight_kg / METERS_PER_KM
            * self.base.duration_hours
            * MINUTES_PER_HOUR;
        ensure_finite(calories, "running calories")
    }
}
