use crate::error::{ExportError, Result};
use crate::models::Summary;

/// Render summaries as a pretty-printed JSON array
pub fn render(summaries: &[Summary]) -> Result<String> {
    let mut json_data = serde_json::to_string_pretty(summaries)
        .map_err(|e| ExportError::Serialization(e.to_string()))?;
    json_data.push('\n');
    Ok(json_data)
}
