pub mod provider;
pub mod openai;
pub mod prompts;
pub mod parser;
pub mod classifier;

pub use provider::LLMProvider;
pub use openai::OpenAIProvider;
pub use prompts::{render_request, render_taxonomy_block, ClassificationRequest, SYSTEM_PROMPT};
pub use parser::parse_classification_reply;
pub use classifier::Classifier;
