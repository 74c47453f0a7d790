use crate::error::ConfigError;
use cfo_types::FinancialSnapshot;
use std::path::Path;
use tracing::info;

/// Holds the process-wide financial snapshot.
///
/// There is no update operation; the snapshot is fixed for the lifetime of
/// the process and replaced only by a restart.
#[derive(Debug, Clone)]
pub struct SnapshotStore {
    snapshot: FinancialSnapshot,
}

impl SnapshotStore {
    pub fn new(snapshot: FinancialSnapshot) -> Self {
        Self { snapshot }
    }

    /// Store seeded with the built-in mock company
    pub fn mock() -> Self {
        Self::new(FinancialSnapshot::mock())
    }

    /// Load a snapshot from a JSON file
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let shown = path.display().to_string();
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::SnapshotRead {
            path: shown.clone(),
            source,
        })?;
        let snapshot: FinancialSnapshot =
            serde_json::from_str(&content).map_err(|source| ConfigError::SnapshotParse {
                path: shown.clone(),
                source,
            })?;
        info!("Loaded financial snapshot from {}", shown);
        Ok(Self::new(snapshot))
    }

    /// Use the file when given, the mock company otherwise
    pub fn from_optional_file(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::from_file(path),
            None => Ok(Self::mock()),
        }
    }

    pub fn get(&self) -> &FinancialSnapshot {
        &self.snapshot
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{"revenue":50000,"expenses":40000,"cashBalance":120000,"monthlyBurn":40000,
                "employees":4,"marketingSpend":5000,"productPrice":250}}"#
        )
        .unwrap();

        let store = SnapshotStore::from_file(file.path()).unwrap();
        assert_eq!(store.get().employees, 4);
        assert_eq!(store.get().cash_balance, 120_000.0);
        assert_eq!(store.get().monthly_burn, 40_000.0);
    }

    #[test]
    fn test_from_file_errors() {
        let missing = SnapshotStore::from_file(Path::new("/definitely/not/here.json"));
        assert!(matches!(missing, Err(ConfigError::SnapshotRead { .. })));

        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "not json").unwrap();
        let invalid = SnapshotStore::from_file(file.path());
        assert!(matches!(invalid, Err(ConfigError::SnapshotParse { .. })));
    }

    #[test]
    fn test_from_optional_file_defaults_to_mock() {
        let store = SnapshotStore::from_optional_file(None).unwrap();
        assert_eq!(store.get().revenue, 100_000.0);
    }
}
