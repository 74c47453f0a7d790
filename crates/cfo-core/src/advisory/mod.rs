//! Advisory gateway
//!
//! Forwards a templated CFO prompt to a hosted text-generation service and
//! masks every failure behind a static fallback answer.

pub mod gateway;
pub mod gemini_client;
pub mod prompt_templates;

pub use gateway::{AdvisoryGateway, FALLBACK_RESPONSE};
pub use gemini_client::GeminiClient;
pub use prompt_templates::{AdvisoryContext, AdvisoryPromptTemplate};

use crate::error::ServiceError;

/// Capability of turning a text prompt into a text completion
#[async_trait::async_trait]
pub trait TextGenerator: Send + Sync {
    async fn generate(&self, prompt: &str) -> Result<String, ServiceError>;
}
