use cfo_core::{AdvisoryGateway, LedgerStore, ReportCoordinator, SnapshotStore};
use cfo_types::ScenarioComparison;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Shared state handed to every handler
#[derive(Clone)]
pub struct ApiState {
    pub snapshot: Arc<SnapshotStore>,
    pub ledger: Arc<LedgerStore>,
    pub advisor: AdvisoryGateway,
    pub reports: Arc<ReportCoordinator>,
}

impl ApiState {
    pub fn new(snapshot: SnapshotStore, ledger: LedgerStore, advisor: AdvisoryGateway) -> Self {
        Self {
            snapshot: Arc::new(snapshot),
            ledger: Arc::new(ledger),
            advisor,
            reports: Arc::new(ReportCoordinator::new()),
        }
    }
}

/// Health check response
#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: String,
    pub version: String,
}

/// Body of `POST /api/ai-assistant`; both fields may be omitted
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssistantRequest {
    #[serde(default)]
    pub question: String,
    /// Left untyped: only `current.*` is read, leniently
    #[serde(default)]
    pub scenario_data: Option<serde_json::Value>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct AssistantResponse {
    pub response: String,
}

/// Body of `POST /api/export-report`
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportRequest {
    pub scenario_data: ScenarioComparison,
    #[serde(default)]
    pub ai_summary: Option<String>,
}
