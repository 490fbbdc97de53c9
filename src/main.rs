use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use std::io::Write;
use std::path::PathBuf;

use fitness_tracker::config::AppConfig;
use fitness_tracker::error::ErrorSeverity;
use fitness_tracker::export::{self, OutputFormat};
use fitness_tracker::import;
use fitness_tracker::logging::{init_logging, LogLevel};
use fitness_tracker::processing::{BatchProcessor, BatchReport, ErrorPolicy};
use fitness_tracker::ActivityKind;

/// Fitness Tracker - workout statistics from raw sensor packages
///
/// Computes distance, mean speed and calories for running, sports walking
/// and swimming sessions. Without an input file the built-in sample
/// packages are processed.
#[derive(Parser)]
#[command(name = "fitness-tracker")]
#[command(version)]
#[command(about = "Workout statistics from sensor packages", long_about = None)]
struct Cli {
    /// Sets a custom config file
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Sensor packages to process (CSV or JSON)
    #[arg(short, long, value_name = "FILE")]
    input: Option<PathBuf>,

    /// Output format (text, json, csv, table)
    #[arg(short = 'f', long)]
    format: Option<OutputFormat>,

    /// Write summaries to a file instead of stdout
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,

    /// Keep going after a record fails
    #[arg(long)]
    continue_on_error: bool,

    /// Evaluate records in parallel (output order is preserved)
    #[arg(long)]
    parallel: bool,

    /// Increase verbosity of diagnostics on stderr
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// List recognized activity codes and their value order
    Codes,

    /// Write a default configuration file
    InitConfig {
        /// Destination (defaults to the user config directory)
        #[arg(short, long)]
        path: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => AppConfig::load_from_file(path)?,
        None => AppConfig::load_or_default()?,
    };
    apply_overrides(&mut config, &cli);

    init_logging(&config.logging)?;

    match cli.command {
        Some(Commands::Codes) => {
            for kind in ActivityKind::ALL {
                println!(
                    "{}  {:<14} {}",
                    kind.code().bold(),
                    kind.display_name(),
                    kind.field_names().join(", ")
                );
            }
            Ok(())
        }
        Some(Commands::InitConfig { path }) => {
            let path = path.unwrap_or_else(AppConfig::default_config_path);
            AppConfig::default().save_to_file(&path)?;
            eprintln!("{} {}", "✓ Configuration written to".green(), path.display());
            Ok(())
        }
        None => run(&config, cli.input.as_deref()),
    }
}

fn apply_overrides(config: &mut AppConfig, cli: &Cli) {
    if cli.verbose > 0 {
        config.logging.level = LogLevel::from_verbosity(cli.verbose);
    }
    if let Some(format) = cli.format {
        config.output.format = format;
    }
    if let Some(output) = &cli.output {
        config.output.path = Some(output.clone());
    }
    if cli.continue_on_error {
        config.processing.error_policy = ErrorPolicy::Continue;
    }
    if cli.parallel {
        config.processing.parallel = true;
    }
}

fn run(config: &AppConfig, input: Option<&std::path::Path>) -> Result<()> {
    let packages = match input {
        Some(path) => import::load_packages(path)
            .with_context(|| format!("Failed to load sensor packages from {}", path.display()))?,
        None => import::demo_packages(),
    };

    let processor = BatchProcessor::new(config.processing.clone());
    let report = processor.process(&packages);

    write_summaries(config, &report)?;
    report_failures(&report);

    if report.is_success() {
        Ok(())
    } else {
        anyhow::bail!(
            "{} of {} records failed{}",
            report.failed(),
            report.total,
            if report.skipped() > 0 {
                format!(", {} not processed", report.skipped())
            } else {
                String::new()
            }
        )
    }
}

fn write_summaries(config: &AppConfig, report: &BatchReport) -> Result<()> {
    let summaries = report.summaries();

    match &config.output.path {
        Some(path) => {
            export::write_to_file(&summaries, config.output.format, path)?;
            eprintln!(
                "{} {} summaries to {}",
                "✓ Wrote".green(),
                summaries.len(),
                path.display()
            );
        }
        None => {
            let rendered = export::render(&summaries, config.output.format)?;
            let mut stdout = std::io::stdout().lock();
            stdout.write_all(rendered.as_bytes())?;
            stdout.flush()?;
        }
    }

    Ok(())
}

fn report_failures(report: &BatchReport) {
    for (outcome, err) in report.failures() {
        let label = match err.severity() {
            ErrorSeverity::Warning => "warning".yellow().bold(),
            _ => "error".red().bold(),
        };
        eprintln!(
            "{}: record {} ({}): {}",
            label,
            outcome.index + 1,
            outcome.code,
            err.user_message()
        );
    }
}
