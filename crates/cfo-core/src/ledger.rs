//! Persisted usage counters
//!
//! The ledger lives in memory and is written wholesale to a JSON file after
//! every increment. Writes go to a sibling temp file first and are renamed
//! into place so a crash never leaves a truncated ledger behind.
//!
//! Persistence failures are logged and swallowed: the in-memory increment
//! stands even when the disk write fails.

use crate::error::LedgerError;
use cfo_types::UsageLedger;
use std::path::{Path, PathBuf};
use tokio::sync::Mutex;
use tracing::{debug, error, info};

/// Owns the process-wide [`UsageLedger`] and its backing file
#[derive(Debug)]
pub struct LedgerStore {
    path: PathBuf,
    ledger: Mutex<UsageLedger>,
}

impl LedgerStore {
    /// Open the ledger at `path`.
    ///
    /// A missing file leaves the zeroed default in place. An unreadable or
    /// corrupt file is logged and also falls back to the default.
    pub async fn load(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let ledger = match read_ledger(&path).await {
            Ok(Some(ledger)) => {
                info!(
                    "Loaded usage ledger from {}: {} scenarios, {} reports",
                    path.display(),
                    ledger.scenarios_tested,
                    ledger.reports_exported
                );
                ledger
            }
            Ok(None) => {
                debug!("No usage ledger at {}, starting from zero", path.display());
                UsageLedger::default()
            }
            Err(e) => {
                error!("Error loading usage data from {}: {}", path.display(), e);
                UsageLedger::default()
            }
        };

        Self {
            path,
            ledger: Mutex::new(ledger),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Snapshot of the current in-memory counters
    pub async fn read(&self) -> UsageLedger {
        self.ledger.lock().await.clone()
    }

    /// Increment `scenariosTested` by one and persist
    pub async fn record_scenario_run(&self) -> UsageLedger {
        self.update(UsageLedger::record_scenario_run).await
    }

    /// Increment `reportsExported` by one and persist
    pub async fn record_report_export(&self) -> UsageLedger {
        self.update(UsageLedger::record_report_export).await
    }

    // The lock is held across the write so the file always reflects the
    // latest in-memory state.
    async fn update(&self, apply: fn(&mut UsageLedger)) -> UsageLedger {
        let mut ledger = self.ledger.lock().await;
        apply(&mut *ledger);
        if let Err(e) = write_ledger(&self.path, &ledger).await {
            error!("Error saving usage data to {}: {}", self.path.display(), e);
        }
        ledger.clone()
    }
}

async fn read_ledger(path: &Path) -> Result<Option<UsageLedger>, LedgerError> {
    match tokio::fs::read_to_string(path).await {
        Ok(content) => Ok(Some(serde_json::from_str(&content)?)),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
        Err(e) => Err(e.into()),
    }
}

async fn write_ledger(path: &Path, ledger: &UsageLedger) -> Result<(), LedgerError> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            tokio::fs::create_dir_all(parent).await?;
        }
    }

    let json = serde_json::to_string_pretty(ledger)?;
    let temp_path = path.with_extension("json.tmp");
    tokio::fs::write(&temp_path, json.as_bytes()).await?;
    tokio::fs::rename(&temp_path, path).await?;
    Ok(())
}
