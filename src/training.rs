//! Activity model shared by all workout variants
//!
//! Each variant implements [`Training`]; the closed [`Activity`] enum is what
//! the dispatcher hands out and what the batch processor consumes.

use crate::error::Result;
use crate::formulas::{constants::METERS_PER_KM, FormulaResult};
use crate::models::{ActivityKind, Summary, WorkoutBase};
use crate::running::Running;
use crate::swimming::Swimming;
use crate::walking::SportsWalking;

/// Capability set every activity variant provides
pub trait Training {
    /// Which variant this is
    fn kind(&self) -> ActivityKind;

    /// Readings common to all variants
    fn base(&self) -> &WorkoutBase;

    /// Meters covered per action (step or stroke)
    fn step_length_m(&self) -> f64;

    /// Mean speed in km/h
    fn mean_speed_km_h(&self) -> FormulaResult<f64>;

    /// Calories burned over the whole workout
    fn spent_calories(&self) -> FormulaResult<f64>;

    /// Distance in kilometers
    fn distance_km(&self) -> f64 {
        f64::from(self.base().action_count) * self.step_length_m() / METERS_PER_KM
    }

    /// Collect the derived statistics into a [`Summary`]
    fn summarize(&self) -> Result<Summary> {
        Ok(Summary {
            training_type: self.kind().display_name().to_string(),
            duration_hours: self.base().duration_hours,
            distance_km: self.distance_km(),
            mean_speed_km_h: self.mean_speed_km_h()?,
            calories: self.spent_calories()?,
        })
    }
}

/// One workout of any supported type
#[derive(Debug, Clone, PartialEq)]
pub enum Activity {
    Running(Running),
    SportsWalking(SportsWalking),
    Swimming(Swimming),
}

impl Activity {
    fn as_training(&self) -> &dyn Training {
        match self {
            Activity::Running(running) => running,
            Activity::SportsWalking(walking) => walking,
            Activity::Swimming(swimming) => swimming,
        }
    }
}

impl Training for Activity {
    fn kind(&self) -> ActivityKind {
        self.as_training().kind()
    }

    fn base(&self) -> &WorkoutBase {
        self.as_training().base()
    }

    fn step_length_m(&self) -> f64 {
        self.as_training().step_length_m()
    }

    fn mean_speed_km_h(&self) -> FormulaResult<f64> {
        self.as_training().mean_speed_km_h()
    }

    fn spent_calories(&self) -> FormulaResult<f64> {
        self.as_training().spent_calories()
    }
}

impl From<Running> for Activity {
    fn from(running: Running) -> Self {
        Activity::Running(running)
    }
}

impl From<SportsWalking> for Activity {
    fn from(walking: SportsWalking) -> Self {
        Activity::SportsWalking(walking)
    }
}

impl From<Swimming> for Activity {
    fn from(swimming: Swimming) -> Self {
        Activity::Swimming(swimming)
    }
}
