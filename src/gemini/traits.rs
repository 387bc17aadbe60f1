//! Trait abstraction for the Gemini client to enable mocking in tests

use super::client::{GeminiClient, GenerateError};
use async_trait::async_trait;

/// Trait for text-generation requests, enabling mocking in tests
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait GenerateClientTrait: Send + Sync {
    /// Whether an API key is configured (used for the status indicator)
    fn is_configured(&self) -> bool;

    /// Send one instruction to the model and return the generated text
    async fn generate(&self, instruction: String) -> Result<String, GenerateError>;
}

#[async_trait]
impl GenerateClientTrait for GeminiClient {
    fn is_configured(&self) -> bool {
        self.has_api_key()
    }

    async fn generate(&self, instruction: String) -> Result<String, GenerateError> {
        GeminiClient::generate(self, &instruction).await
    }
}
