use std::sync::Arc;

use crate::models::TaxonomyTable;

pub const SYSTEM_PROMPT: &str = "あなたはコスト分類に長けた優秀な業務プロフェッショナルです。";

const TAXONOMY_HEADER: &str = "分類表:\n    Lv1#;Lv1name;Lv2#;Lv2name;説明";
const FIELD_DELIMITER: &str = ";";
const ROW_INDENT: &str = "    ";

/// Renders the taxonomy as the block embedded in every request: a header line
/// followed by one `;`-joined line per row, in table order.
pub fn render_taxonomy_block(table: &TaxonomyTable) -> String {
    let mut block = String::from(TAXONOMY_HEADER);
    block.push('\n');

    let rows: Vec<String> = table
        .iter()
        .map(|row| format!("{}{}", ROW_INDENT, row.fields().join(FIELD_DELIMITER)))
        .collect();
    block.push_str(&rows.join("\n"));
    block
}

/// Fills the instruction template with one item and the taxonomy block.
pub fn render_request(item_text: &str, taxonomy_block: &str) -> String {
    format!(
        r#"
以下の情報を基にコスト費目を分類してください：

概要: {}

{}

指示:
* 上記の分類表の中から該当するものを選んでください。
* 出力形式は以下としてください：
  分類: Lv1#,Lv1name,Lv2#,Lv2name
  理由: <分類の根拠（任意）>
"#,
        item_text.trim(),
        taxonomy_block
    )
}

#[derive(Debug, Clone)]
pub struct ClassificationRequest {
    pub item_text: String,
    pub taxonomy_block: Arc<str>,
}

impl ClassificationRequest {
    /// Returns `None` for blank items, which are never sent to the oracle.
    pub fn for_item(item_text: &str, taxonomy_block: &Arc<str>) -> Option<Self> {
        let trimmed = item_text.trim();
        if trimmed.is_empty() {
            return None;
        }

        Some(Self {
            item_text: trimmed.to_string(),
            taxonomy_block: Arc::clone(taxonomy_block),
        })
    }

    pub fn to_prompt(&self) -> String {
        render_request(&self.item_text, &self.taxonomy_block)
    }
}
