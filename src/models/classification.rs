use serde::{Deserialize, Serialize};

/// Written into `lv1_code` when the oracle call itself failed.
pub const ERROR_MARKER: &str = "エラー";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassificationResult {
    pub lv1_code: String,
    pub lv1_name: String,
    pub lv2_code: String,
    pub lv2_name: String,
    pub reason: String,
}

impl ClassificationResult {
    /// All-empty result for blank items.
    pub fn blank() -> Self {
        Self::default()
    }

    pub fn matched(
        lv1_code: impl Into<String>,
        lv1_name: impl Into<String>,
        lv2_code: impl Into<String>,
        lv2_name: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        Self {
            lv1_code: lv1_code.into(),
            lv1_name: lv1_name.into(),
            lv2_code: lv2_code.into(),
            lv2_name: lv2_name.into(),
            reason: reason.into(),
        }
    }

    /// The oracle answered but no taxonomy leaf could be read from the reply.
    pub fn unclassified(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
            ..Self::default()
        }
    }

    /// Sentinel row for a failed oracle call.
    pub fn error(detail: impl Into<String>) -> Self {
        Self {
            lv1_code: ERROR_MARKER.to_string(),
            reason: detail.into(),
            ..Self::default()
        }
    }

    pub fn is_error(&self) -> bool {
        self.lv1_code == ERROR_MARKER && self.lv2_code.is_empty()
    }

    pub fn is_classified(&self) -> bool {
        !self.is_error() && !self.lv1_code.is_empty()
    }

    pub fn is_blank(&self) -> bool {
        self.fields().iter().all(|f| f.is_empty())
    }

    pub fn fields(&self) -> [&str; 5] {
        [
            &self.lv1_code,
            &self.lv1_name,
            &self.lv2_code,
            &self.lv2_name,
            &self.reason,
        ]
    }
}

/// Results of one run, index-aligned with the input items.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BatchResult {
    results: Vec<ClassificationResult>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct BatchSummary {
    pub total: usize,
    pub classified: usize,
    pub unclassified: usize,
    pub blank: usize,
    pub errors: usize,
}

impl BatchResult {
    pub fn new(results: Vec<ClassificationResult>) -> Self {
        Self { results }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            results: Vec::with_capacity(capacity),
        }
    }

    pub fn push(&mut self, result: ClassificationResult) {
        self.results.push(result);
    }

    pub fn results(&self) -> &[ClassificationResult] {
        &self.results
    }

    pub fn into_results(self) -> Vec<ClassificationResult> {
        self.results
    }

    pub fn len(&self) -> usize {
        self.results.len()
    }

    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ClassificationResult> {
        self.results.iter()
    }

    pub fn summary(&self) -> BatchSummary {
        let mut summary = BatchSummary {
            total: self.results.len(),
            ..Default::default()
        };
        for result in &self.results {
            if result.is_error() {
                summary.errors += 1;
            } else if result.is_classified() {
                summary.classified += 1;
            } else if result.is_blank() {
                summary.blank += 1;
            } else {
                summary.unclassified += 1;
            }
        }
        summary
    }
}
