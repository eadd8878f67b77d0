use async_trait::async_trait;

use crate::error::Result;

/// A chat-style text generation service: one system instruction, one user
/// message, one text reply.
#[async_trait]
pub trait LLMProvider: Send + Sync {
    async fn complete(&self, system: &str, prompt: &str) -> Result<String>;
    fn model(&self) -> &str;
    fn name(&self) -> &str;
}
