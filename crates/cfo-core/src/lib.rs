//! Domain services for the CFO scenario calculator

pub mod advisory;
pub mod config;
pub mod error;
pub mod ledger;
pub mod render;
pub mod report;
pub mod scenario;
pub mod snapshot;

pub use advisory::{AdvisoryGateway, GeminiClient, TextGenerator, FALLBACK_RESPONSE};
pub use config::AppConfig;
pub use error::{ConfigError, LedgerError, ScenarioError, ServiceError};
pub use ledger::LedgerStore;
pub use report::ReportCoordinator;
pub use scenario::{compute_scenario, run_scenario};
pub use snapshot::SnapshotStore;
