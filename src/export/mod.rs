use crate::error::{ExportError, Result};
use crate::models::Summary;
use serde::{Deserialize, Serialize};
use std::io::Write;
use std::path::Path;

pub mod csv;
pub mod json;
pub mod table;
pub mod text;

/// Output format types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// One training message per line
    #[default]
    Text,
    Json,
    Csv,
    /// Bordered terminal table
    Table,
}

impl std::str::FromStr for OutputFormat {
    type Err = ExportError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" | "txt" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            "csv" => Ok(OutputFormat::Csv),
            "table" => Ok(OutputFormat::Table),
            _ => Err(ExportError::UnsupportedFormat(s.to_string())),
        }
    }
}

/// Render summaries in the requested format
pub fn render(summaries: &[Summary], format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(text::render(summaries)),
        OutputFormat::Json => json::render(summaries),
        OutputFormat::Csv => csv::render(summaries),
        OutputFormat::Table => Ok(table::render(summaries)),
    }
}

/// Render summaries and write them to a file
pub fn write_to_file<P: AsRef<Path>>(
    summaries: &[Summary],
    format: OutputFormat,
    output_path: P,
) -> Result<()> {
    let rendered = render(summaries, format)?;
    let mut file = std::fs::File::create(output_path)?;
    file.write_all(rendered.as_bytes())?;
    Ok(())
}

#[cfg(test)]
pub(crate) fn sample_summaries() -> Vec<Summary> {
    vec![
        Summary {
            training_type: "Swimming".to_string(),
            duration_hours: 1.0,
            distance_km: 0.9936,
            mean_speed_km_h: 1.0,
            calories: 336.0,
        },
        Summary {
            training_type: "Running".to_string(),
            duration_hours: 1.0,
            distance_km: 9.75,
            mean_speed_km_h: 9.75,
            calories: 699.75,
        },
    ]
}
