use super::prompt_templates::{AdvisoryContext, AdvisoryPromptTemplate};
use super::TextGenerator;
use cfo_types::FinancialSnapshot;
use serde_json::Value;
use std::sync::Arc;
use tracing::{error, info};

/// Answer returned whenever the text-generation service cannot be used
pub const FALLBACK_RESPONSE: &str = "I'm currently unable to access the Gemini AI service. However, based on typical financial scenarios, I'd recommend focusing on cash flow optimization and monitoring your burn rate closely.";

/// Best-effort advisor: one attempt, failures become [`FALLBACK_RESPONSE`]
#[derive(Clone)]
pub struct AdvisoryGateway {
    generator: Arc<dyn TextGenerator>,
}

impl AdvisoryGateway {
    pub fn new(generator: Arc<dyn TextGenerator>) -> Self {
        Self { generator }
    }

    /// Ask `question` in the context of `scenario_data` (or the live
    /// snapshot when absent). Never fails.
    pub async fn ask(
        &self,
        question: &str,
        scenario_data: Option<&Value>,
        snapshot: &FinancialSnapshot,
    ) -> String {
        let context = AdvisoryContext::resolve(scenario_data, snapshot);
        let prompt = AdvisoryPromptTemplate::build_prompt(&context, question);

        match self.generator.generate(&prompt).await {
            Ok(response) => {
                let preview: String = response.chars().take(100).collect();
                info!(question, response = %preview, "AI response generated");
                response
            }
            Err(e) => {
                error!("Error calling Gemini AI assistant: {}", e);
                FALLBACK_RESPONSE.to_string()
            }
        }
    }
}
