use std::sync::Arc;

use crate::classify::progress::ProgressSink;
use crate::config::PipelineConfig;
use crate::error::{Error, Result};
use crate::llm::{render_taxonomy_block, Classifier, LLMProvider};
use crate::models::{BatchResult, ClassificationResult, TaxonomyTable};

/// Runs the classifier over a list of items, one oracle call at a time.
pub struct ClassificationPipeline {
    classifier: Classifier,
    config: PipelineConfig,
}

impl ClassificationPipeline {
    pub fn new(llm: impl LLMProvider + 'static, config: PipelineConfig) -> Self {
        Self::from_shared(Arc::new(llm), config)
    }

    pub fn from_shared(llm: Arc<dyn LLMProvider>, config: PipelineConfig) -> Self {
        Self {
            classifier: Classifier::new(llm),
            config,
        }
    }

    /// Rejects oversized batches before any oracle call is made.
    pub fn check_item_count(&self, count: usize) -> Result<()> {
        if count > self.config.max_items {
            return Err(Error::RowLimitExceeded {
                count,
                limit: self.config.max_items,
            });
        }
        Ok(())
    }

    /// Classifies every item against a pre-rendered taxonomy block.
    ///
    /// The result is index-aligned with `items`. Blank items map to empty rows
    /// and per-item oracle failures map to error rows; only the row-limit check
    /// can fail the run.
    pub async fn run(
        &self,
        taxonomy_block: &Arc<str>,
        items: &[String],
        progress: &dyn ProgressSink,
    ) -> Result<BatchResult> {
        self.check_item_count(items.len())?;

        let total = items.len();
        tracing::info!(
            "Classifying {} items with {} ({})",
            total,
            self.classifier.provider().name(),
            self.classifier.provider().model()
        );

        let mut results = BatchResult::with_capacity(total);
        for (i, item) in items.iter().enumerate() {
            tracing::debug!("Item {}/{}: {}", i + 1, total, item.trim());
            let result = self.classifier.classify_item(item, taxonomy_block).await;
            results.push(result);
            progress.report_progress((i + 1) as f64 / total as f64);
        }

        let summary = results.summary();
        tracing::info!(
            "Classification complete: {} classified, {} unclassified, {} blank, {} errors",
            summary.classified,
            summary.unclassified,
            summary.blank,
            summary.errors
        );

        Ok(results)
    }

    /// Renders the block from `table` and runs the batch.
    pub async fn run_with_table(
        &self,
        table: &TaxonomyTable,
        items: &[String],
        progress: &dyn ProgressSink,
    ) -> Result<BatchResult> {
        self.check_item_count(items.len())?;
        let block: Arc<str> = render_taxonomy_block(table).into();
        self.run(&block, items, progress).await
    }

    pub async fn classify_one(
        &self,
        taxonomy_block: &Arc<str>,
        item_text: &str,
    ) -> ClassificationResult {
        self.classifier.classify_item(item_text, taxonomy_block).await
    }
}
