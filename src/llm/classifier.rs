use std::sync::Arc;

use crate::error::Result;
use crate::llm::parser::parse_classification_reply;
use crate::llm::prompts::{ClassificationRequest, SYSTEM_PROMPT};
use crate::llm::provider::LLMProvider;
use crate::models::ClassificationResult;

/// Performs a single oracle exchange for one item and parses the reply. No
/// retries: a failed call is returned as an error for the caller to record.
#[derive(Clone)]
pub struct Classifier {
    llm: Arc<dyn LLMProvider>,
}

impl Classifier {
    pub fn new(llm: Arc<dyn LLMProvider>) -> Self {
        Self { llm }
    }

    pub async fn classify(&self, request: &ClassificationRequest) -> Result<ClassificationResult> {
        let prompt = request.to_prompt();
        let reply = self.llm.complete(SYSTEM_PROMPT, &prompt).await?;
        tracing::debug!("{} replied with {} chars", self.llm.name(), reply.len());
        Ok(parse_classification_reply(&reply))
    }

    /// Classifies one item, folding every outcome into a result row: blank
    /// items skip the oracle, failed calls become the error sentinel.
    pub async fn classify_item(
        &self,
        item_text: &str,
        taxonomy_block: &Arc<str>,
    ) -> ClassificationResult {
        let Some(request) = ClassificationRequest::for_item(item_text, taxonomy_block) else {
            return ClassificationResult::blank();
        };

        match self.classify(&request).await {
            Ok(result) => result,
            Err(e) => {
                tracing::warn!("Classification failed for '{}': {}", request.item_text, e);
                ClassificationResult::error(e.to_string())
            }
        }
    }

    pub fn provider(&self) -> &dyn LLMProvider {
        self.llm.as_ref()
    }
}
