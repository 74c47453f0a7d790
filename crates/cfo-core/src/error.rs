use thiserror::Error;

/// Errors produced while computing a scenario
#[derive(Debug, Error)]
pub enum ScenarioError {
    /// An input value was NaN or infinite
    #[error("Invalid scenario input: {0}")]
    InvalidInput(&'static str),

    /// A derived figure was NaN or infinite
    #[error("Scenario produced a non-finite {0}")]
    NonFinite(&'static str),

    /// Headcount arithmetic overflowed
    #[error("Headcount overflow")]
    Overflow,
}

/// Errors produced while loading or saving the usage ledger
#[derive(Debug, Error)]
pub enum LedgerError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Errors produced by the external text-generation service
#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("GEMINI_API_KEY is not set")]
    MissingApiKey,

    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Service returned {status}: {body}")]
    Status { status: u16, body: String },

    #[error("Malformed response: {0}")]
    MalformedResponse(String),

    #[error("Service returned an empty response")]
    EmptyResponse,
}

/// Errors produced while reading startup configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read snapshot file {path}: {source}")]
    SnapshotRead {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse snapshot file {path}: {source}")]
    SnapshotParse {
        path: String,
        #[source]
        source: serde_json::Error,
    },
}
