use serde::{Deserialize, Serialize};

/// One leaf of the two-level cost taxonomy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxonomyRow {
    pub lv1_code: String,
    pub lv1_name: String,
    pub lv2_code: String,
    pub lv2_name: String,
    pub description: String,
}

impl TaxonomyRow {
    pub fn new(
        lv1_code: impl Into<String>,
        lv1_name: impl Into<String>,
        lv2_code: impl Into<String>,
        lv2_name: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            lv1_code: lv1_code.into(),
            lv1_name: lv1_name.into(),
            lv2_code: lv2_code.into(),
            lv2_name: lv2_name.into(),
            description: description.into(),
        }
    }

    pub fn fields(&self) -> [&str; 5] {
        [
            &self.lv1_code,
            &self.lv1_name,
            &self.lv2_code,
            &self.lv2_name,
            &self.description,
        ]
    }
}

/// Taxonomy rows in source order. Duplicates are kept.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxonomyTable {
    rows: Vec<TaxonomyRow>,
}

impl TaxonomyTable {
    pub fn new(rows: Vec<TaxonomyRow>) -> Self {
        Self { rows }
    }

    pub fn rows(&self) -> &[TaxonomyRow] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, TaxonomyRow> {
        self.rows.iter()
    }
}

impl FromIterator<TaxonomyRow> for TaxonomyTable {
    fn from_iter<I: IntoIterator<Item = TaxonomyRow>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}
