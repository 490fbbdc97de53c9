// Library interface for the fitness tracker
// The binary and the integration tests both go through these modules

pub mod config;
pub mod dispatch;
pub mod error;
pub mod export;
pub mod formulas;
pub mod import;
pub mod logging;
pub mod models;
pub mod processing;
pub mod running;
pub mod swimming;
pub mod training;
pub mod walking;

// Re-export commonly used types for convenience
pub use dispatch::{build, resolve};
pub use error::{CalculationError, Result, TrackerError};
pub use export::OutputFormat;
pub use import::{demo_packages, Package};
pub use logging::{LogConfig, LogFormat, LogLevel};
pub use models::{ActivityKind, Summary, WorkoutBase};
pub use processing::{BatchProcessor, BatchReport, ErrorPolicy, ProcessingOptions};
pub use running::Running;
pub use swimming::Swimming;
pub use training::{Activity, Training};
pub use walking::SportsWalking;
