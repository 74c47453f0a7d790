use crate::ScenarioComparison;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// An exported report, ready for document rendering
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportRecord {
    pub timestamp: DateTime<Utc>,
    pub scenario_data: ScenarioComparison,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ai_summary: Option<String>,
    /// `CFO-<unix millis>`
    pub export_id: String,
}
