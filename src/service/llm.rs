//! Shared LLM client and the text-generation seam
//!
//! Wraps the OpenAI provider behind a [`TextGenerator`] trait so services can
//! be exercised without the network. Provider failures are classified here —
//! and only here — into a typed error; callers match on the variant, never on
//! message text.

use async_trait::async_trait;
use rig::client::CompletionClient;
use rig::completion::Prompt;
use rig::providers::openai;

/// Classified failure of a text-generation call
#[derive(Debug, thiserror::Error)]
pub enum LlmError {
    /// Quota or rate limit exhausted at the provider
    #[error("generation quota exhausted: {0}")]
    QuotaExhausted(String),

    /// Any other provider failure
    #[error("text generation failed: {0}")]
    GenerationFailed(String),
}

impl LlmError {
    /// Classify a provider error message at the collaborator boundary
    fn classify(message: String) -> Self {
        let lower = message.to_lowercase();
        if lower.contains("quota")
            || lower.contains("rate limit")
            || lower.contains("rate_limit")
            || lower.contains("429")
        {
            LlmError::QuotaExhausted(message)
        } else {
            LlmError::GenerationFailed(message)
        }
    }
}

/// Single-shot text generation: one prompt string in, raw text out.
///
/// No retries and no timeout logic beyond what the provider enforces; a
/// failure routes the caller to its fallback path.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    async fn generate(&self, model: &str, prompt: &str) -> Result<String, LlmError>;
}

/// Shared LLM client over the OpenAI provider
#[derive(Clone)]
pub struct LlmClient {
    client: openai::Client,
}

impl LlmClient {
    /// Create a new LLM client with the provided API key
    pub fn new(api_key: &str) -> Result<Self, String> {
        let client = openai::Client::new(api_key);

        Ok(Self { client })
    }
}

#[async_trait]
impl TextGenerator for LlmClient {
    async fn generate(&self, model: &str, prompt: &str) -> Result<String, LlmError> {
        let start_time = std::time::Instant::now();

        let agent = self.client.agent(model).build();

        match agent.prompt(prompt).await {
            Ok(text) => {
                tracing::debug!(
                    model = %model,
                    elapsed_ms = start_time.elapsed().as_millis(),
                    prompt_length = prompt.len(),
                    response_length = text.len(),
                    "Text generation completed"
                );
                Ok(text)
            }
            Err(e) => {
                let error = LlmError::classify(e.to_string());
                tracing::error!(
                    model = %model,
                    elapsed_ms = start_time.elapsed().as_millis(),
                    prompt_length = prompt.len(),
                    error = %error,
                    "Text generation failed"
                );
                Err(error)
            }
        }
    }
}
