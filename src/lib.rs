pub mod config;
pub mod error;
pub mod models;
pub mod sheets;
pub mod taxonomy;
pub mod llm;
pub mod classify;
pub mod export;

#[cfg(test)]
pub(crate) mod testing;

pub use config::{Config, PipelineConfig};
pub use error::{Error, Result};
pub use llm::{Classifier, LLMProvider, OpenAIProvider};
pub use classify::{ClassificationPipeline, ProgressSink};
pub use taxonomy::TaxonomyCache;
