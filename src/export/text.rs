use crate::models::Summary;

/// Render summaries as training messages, one per line
pub fn render(summaries: &[Summary]) -> String {
    summaries
        .iter()
        .map(|summary| format!("{}\n", summary.message()))
        .collect()
}
