//! Batch processing of sensor packages
//!
//! Turns an ordered list of packages into summaries. Output order always
//! follows input order, whether records are evaluated sequentially or on the
//! rayon thread pool.

use crate::dispatch;
use crate::error::{Result, TrackerError};
use crate::import::Package;
use crate::models::Summary;
use crate::training::Training;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, info_span};

/// What to do when a record fails
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ErrorPolicy {
    /// Stop at the first failing record
    #[default]
    Stop,
    /// Report the failure and move on to the next record
    Continue,
}

impl std::str::FromStr for ErrorPolicy {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "stop" => Ok(ErrorPolicy::Stop),
            "continue" => Ok(ErrorPolicy::Continue),
            _ => Err(format!("Invalid error policy: {}", s)),
        }
    }
}

/// Batch processing options
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProcessingOptions {
    /// Failure handling
    pub error_policy: ErrorPolicy,

    /// Evaluate records on the rayon thread pool
    pub parallel: bool,
}

/// Result for a single package
#[derive(Debug)]
pub struct RecordOutcome {
    /// Position of the package in the input
    pub index: usize,

    /// Activity code as given in the package
    pub code: String,

    pub result: Result<Summary>,
}

/// Outcome of a whole batch
#[derive(Debug)]
pub struct BatchReport {
    /// Number of packages handed to the processor
    pub total: usize,

    /// Outcomes in input order; shorter than `total` if processing stopped
    pub outcomes: Vec<RecordOutcome>,
}

impl BatchReport {
    /// Successfully computed summaries, in input order
    pub fn summaries(&self) -> Vec<Summary> {
        self.outcomes
            .iter()
            .filter_map(|outcome| outcome.result.as_ref().ok().cloned())
            .collect()
    }

    /// Failed records, in input order
    pub fn failures(&self) -> impl Iterator<Item = (&RecordOutcome, &TrackerError)> {
        self.outcomes
            .iter()
            .filter_map(|outcome| outcome.result.as_ref().err().map(|err| (outcome, err)))
    }

    pub fn succeeded(&self) -> usize {
        self.outcomes.iter().filter(|o| o.result.is_ok()).count()
    }

    pub fn failed(&self) -> usize {
        self.outcomes.len() - self.succeeded()
    }

    /// Packages never evaluated because processing stopped early
    pub fn skipped(&self) -> usize {
        self.total - self.outcomes.len()
    }

    pub fn is_success(&self) -> bool {
        self.failed() == 0 && self.skipped() == 0
    }
}

/// Compute the summary for one package
pub fn process_package(package: &Package) -> Result<Summary> {
    let activity = dispatch::build(&package.code, &package.values)?;
    activity.summarize()
}

/// Processor for ordered batches of sensor packages
pub struct BatchProcessor {
    options: ProcessingOptions,
}

impl BatchProcessor {
    pub fn new(options: ProcessingOptions) -> Self {
        Self { options }
    }

    /// Process all packages
    pub fn process(&self, packages: &[Package]) -> BatchReport {
        info!(
            packages = packages.len(),
            parallel = self.options.parallel,
            policy = ?self.options.error_policy,
            "Processing sensor packages"
        );

        let outcomes = if self.options.parallel {
            self.process_parallel(packages)
        } else {
            self.process_sequential(packages)
        };

        // only records that made it into the report are logged
        outcomes.iter().for_each(Self::log_outcome);

        let report = BatchReport {
            total: packages.len(),
            outcomes,
        };

        info!(
            succeeded = report.succeeded(),
            failed = report.failed(),
            skipped = report.skipped(),
            "Batch complete"
        );
        report
    }

    fn process_sequential(&self, packages: &[Package]) -> Vec<RecordOutcome> {
        let mut outcomes = Vec::with_capacity(packages.len());

        for (index, package) in packages.iter().enumerate() {
            let outcome = Self::evaluate(index, package);
            let failed = outcome.result.is_err();
            outcomes.push(outcome);

            if failed && self.options.error_policy == ErrorPolicy::Stop {
                break;
            }
        }

        outcomes
    }

    fn process_parallel(&self, packages: &[Package]) -> Vec<RecordOutcome> {
        let mut outcomes: Vec<RecordOutcome> = packages
            .par_iter()
            .enumerate()
            .map(|(index, package)| Self::evaluate(index, package))
            .collect();

        if self.options.error_policy == ErrorPolicy::Stop {
            if let Some(first_failure) = outcomes.iter().position(|o| o.result.is_err()) {
                outcomes.truncate(first_failure + 1);
            }
        }

        outcomes
    }

    fn evaluate(index: usize, package: &Package) -> RecordOutcome {
        RecordOutcome {
            index,
            code: package.code.clone(),
            result: process_package(package),
        }
    }

    fn log_outcome(outcome: &RecordOutcome) {
        let span = info_span!("record", index = outcome.index, code = %outcome.code);
        let _guard = span.enter();

        // failures are surfaced to the user by the caller; keep them at debug here
        match &outcome.result {
            Ok(summary) => debug!(calories = summary.calories, "Record processed"),
            Err(err) => debug!(error = %err, "Record failed"),
        }
    }
}

impl Default for BatchProcessor {
    fn default() -> Self {
        Self::new(ProcessingOptions::default())
    }
}
