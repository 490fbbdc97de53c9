use serde::{Deserialize, Serialize};
use std::fmt;

/// Activity types supported by the tracker
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ActivityKind {
    Running,
    SportsWalking,
    Swimming,
}

impl ActivityKind {
    /// All recognized kinds, in dispatch-table order
    pub const ALL: [ActivityKind; 3] = [
        ActivityKind::Swimming,
        ActivityKind::Running,
        ActivityKind::SportsWalking,
    ];

    /// Three-letter code used by sensor packages
    pub fn code(&self) -> &'static str {
        match self {
            ActivityKind::Running => "RUN",
            ActivityKind::SportsWalking => "WLK",
            ActivityKind::Swimming => "SWM",
        }
    }

    /// Name shown in the training summary
    pub fn display_name(&self) -> &'static str {
        match self {
            ActivityKind::Running => "Running",
            ActivityKind::SportsWalking => "SportsWalking",
            ActivityKind::Swimming => "Swimming",
        }
    }
}

impl fmt::Display for ActivityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/// Readings every activity carries
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WorkoutBase {
    /// Steps taken, or strokes for swimming
    pub action_count: u32,

    /// Workout duration in hours
    pub duration_hours: f64,

    /// Athlete weight in kilograms
    pub weight_kg: f64,
}

impl WorkoutBase {
    pub fn new(action_count: u32, duration_hours: f64, weight_kg: f64) -> Self {
        Self {
            action_count,
            duration_hours,
            weight_kg,
        }
    }
}

/// Computed statistics for one workout
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Summary {
    /// Activity type name, e.g. "Running"
    pub training_type: String,

    /// Duration in hours
    pub duration_hours: f64,

    /// Distance in kilometers
    pub distance_km: f64,

    /// Mean speed in km/h
    pub mean_speed_km_h: f64,

    /// Calories burned
    pub calories: f64,
}

impl Summary {
    /// Render the single-line training report
    pub fn message(&self) -> String {
        format!(
            "Тип тренировки: {}; Длительность: {:.3} ч.; Дистанция: {:.3} км; Ср. скорость: {:.3} км/ч; Потрачено ккал: {:.3}.",
            self.training_type,
            self.duration_hours,
            self.distance_km,
            self.mean_speed_km_h,
            self.calories
        )
    }
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message())
    }
}
