use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Persisted usage counters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UsageLedger {
    pub scenarios_tested: u64,
    pub reports_exported: u64,
    /// Last time either counter changed
    #[serde(default = "Utc::now")]
    pub timestamp: DateTime<Utc>,
}

impl UsageLedger {
    pub fn new() -> Self {
        Self {
            scenarios_tested: 0,
            reports_exported: 0,
            timestamp: Utc::now(),
        }
    }

    /// Count one scenario run
    pub fn record_scenario_run(&mut self) {
        self.scenarios_tested = self.scenarios_tested.saturating_add(1);
        self.timestamp = Utc::now();
    }

    /// Count one report export
    pub fn record_report_export(&mut self) {
        self.reports_exported = self.reports_exported.saturating_add(1);
        self.timestamp = Utc::now();
    }
}

impl Default for UsageLedger {
    fn default() -> Self {
        Self::new()
    }
}
