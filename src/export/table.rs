use crate::models::Summary;
use tabled::{settings::Style, Table, Tabled};

#[derive(Tabled)]
struct SummaryRow {
    #[tabled(rename = "Training")]
    training_type: String,
    #[tabled(rename = "Duration (h)")]
    duration: String,
    #[tabled(rename = "Distance (km)")]
    distance: String,
    #[tabled(rename = "Speed (km/h)")]
    speed: String,
    #[tabled(rename = "Calories")]
    calories: String,
}

impl From<&Summary> for SummaryRow {
    fn from(summary: &Summary) -> Self {
        Self {
            training_type: summary.training_type.clone(),
            duration: format!("{:.3}", summary.duration_hours),
            distance: format!("{:.3}", summary.distance_km),
            speed: format!("{:.3}", summary.mean_speed_km_h),
            calories: format!("{:.3}", summary.calories),
        }
    }
}

/// Render summaries as a terminal table
pub fn render(summaries: &[Summary]) -> String {
    let rows: Vec<SummaryRow> = summaries.iter().map(SummaryRow::from).collect();
    let mut table = Table::new(rows);
    table.with(Style::rounded());
    format!("{}\n", table)
}
