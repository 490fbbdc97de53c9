//! Sports walking workouts

use crate::formulas::constants::{
    MINUTES_PER_HOUR, STEP_LENGTH_RUN_WALK, WALK_COEFF_1, WALK_COEFF_2,
};
use crate::formulas::{checked_div, ensure_finite, floor_div, FormulaResult};
use crate::models::{ActivityKind, WorkoutBase};
use crate::training::Training;

/// Sports walking session; calories depend on the walker's height
#[derive(Debug, Clone, PartialEq)]
pub struct SportsWalking {
    pub base: WorkoutBase,

    /// Walker height in centimeters
    pub height_cm: f64,
}

impl SportsWalking {
    pub fn new(action_count: u32, duration_hours: f64, weight_kg: f64, height_cm: f64) -> Self {
        Self {
            base: WorkoutBase::new(action_count, duration_hours, weight_kg),
            height_cm,
        }
    }
}

impl Training for SportsWalking {
    fn kind(&self) -> ActivityKind {
        ActivityKind::SportsWalking
    }

    fn base(&self) -> &WorkoutBase {
        &self.base
    }

    fn step_length_m(&self) -> f64 {
        STEP_LENGTH_RUN_WALK
    }

    fn mean_speed_km_h(&self) -> FormulaResult<f64> {
        checked_div(self.distance_km(), self.base.duration_hours, "walking mean speed")
    }

    fn spent_calories(&self) -> FormulaResult<f64> {
        let speed = self.mean_speed_km_h()?;
        // speed² is floor-divided by height, not divided
        let height_term = floor_div(speed.powi(2), self.height_cm, "walking calories")?;
        let weight = self.base.weight_kg;
        let calories = (WALK_COEFF_1 * weight + height_term * WALK_COEFF_2 * weight)
            * self.base.duration_hours
            * MINUTES_PER_HOUR;
        ensure_finite(calories, "walking calories")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CalculationError;

    #[test]
    fn test_walking_reference_values() {
        let walking = SportsWalking::new(9000, 1.0, 75.0, 180.0);

        assert!((walking.distance_km() - 5.85).abs() < 1e-9);
        assert!((walking.mean_speed_km_h().unwrap() - 5.85).abs() < 1e-9);
        // floor(5.85² / 180) == 0, so only the weight term remains
        assert!((walking.spent_calories().unwrap() - 157.5).abs() < 1e-9);
    }

    #[test]
    fn test_walking_height_term_is_floored() {
        // 30000 steps in 1h -> 19.5 km/h, 19.5² = 380.25, 380.25 // 180 = 2
        let walking = SportsWalking::new(30000, 1.0, 70.0, 180.0);
        let expected = (0.035 * 70.0 + 2.0 * 0.029 * 70.0) * 60.0;
        assert!((walking.spent_calories().unwrap() - expected).abs() < 1e-9);
    }

    #[test]
    fn test_walking_zero_height() {
        let walking = SportsWalking::new(9000, 1.0, 75.0, 0.0);
        assert_eq!(
            walking.spent_calories(),
            Err(CalculationError::DivisionByZero {
                calculation: "walking calories"
            })
        );
        // speed itself does not depend on height
        assert!(walking.mean_speed_km_h().is_ok());
    }

    #[test]
    fn test_walking_zero_duration() {
        let walking = SportsWalking::new(9000, 0.0, 75.0, 180.0);
        assert!(matches!(
            walking.mean_speed_km_h(),
            Err(CalculationError::DivisionByZero { .. })
        ));
    }
}
