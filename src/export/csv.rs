use crate::error::{ExportError, Result};
use crate::models::Summary;

const HEADER: [&str; 5] = [
    "training_type",
    "duration_hours",
    "distance_km",
    "mean_speed_km_h",
    "calories",
];

/// Render summaries as CSV with three-decimal numbers
pub fn render(summaries: &[Summary]) -> Result<String> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    writer.write_record(HEADER).map_err(serialization_error)?;

    for summary in summaries {
        writer
            .write_record([
                summary.training_type.clone(),
                format!("{:.3}", summary.duration_hours),
                format!("{:.3}", summary.distance_km),
                format!("{:.3}", summary.mean_speed_km_h),
                format!("{:.3}", summary.calories),
            ])
            .map_err(serialization_error)?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|e| ExportError::Serialization(e.to_string()))?;
    String::from_utf8(bytes).map_err(|e| ExportError::Serialization(e.to_string()).into())
}

fn serialization_error(error: csv::Error) -> ExportError {
    ExportError::Serialization(error.to_string())
}
