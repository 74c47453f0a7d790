//! Report export coordination
//!
//! Stamps an exported comparison with an id and timestamp and counts the
//! export in the usage ledger. Turning the record into a document is left to
//! the caller (see [`crate::render`]).

use crate::ledger::LedgerStore;
use cfo_types::{ReportRecord, ScenarioComparison};
use chrono::Utc;
use std::sync::atomic::{AtomicI64, Ordering};
use tracing::info;

/// Prefix of every export id
pub const EXPORT_ID_PREFIX: &str = "CFO-";

/// Issues export ids and records exports
#[derive(Debug, Default)]
pub struct ReportCoordinator {
    last_id_millis: AtomicI64,
}

impl ReportCoordinator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Next `CFO-<unix millis>` id, strictly increasing within this coordinator
    pub fn next_export_id(&self) -> String {
        let now = Utc::now().timestamp_millis();
        let previous = self
            .last_id_millis
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |last| {
                Some(now.max(last + 1))
            })
            .unwrap_or_else(|last| last);
        format!("{}{}", EXPORT_ID_PREFIX, now.max(previous + 1))
    }

    /// Assemble the export record and count it
    pub async fn export(
        &self,
        scenario_data: ScenarioComparison,
        ai_summary: Option<String>,
        ledger: &LedgerStore,
    ) -> ReportRecord {
        let record = ReportRecord {
            timestamp: Utc::now(),
            scenario_data,
            ai_summary,
            export_id: self.next_export_id(),
        };
        ledger.record_report_export().await;
        info!(export_id = %record.export_id, "Report exported");
        record
    }
}
