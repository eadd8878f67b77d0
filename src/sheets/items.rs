use crate::error::Result;
use crate::sheets::reader::{cell_at, read_first_sheet};

/// Reads the item descriptions from column A of the first worksheet. There is
/// no header row. Blank cells inside the column are kept so the output stays
/// aligned with the sheet; trailing blank rows are dropped.
pub fn load_items(bytes: &[u8]) -> Result<Vec<String>> {
    let range = read_first_sheet(bytes)?;

    let Some((end_row, _)) = range.end() else {
        tracing::debug!("Item sheet is empty");
        return Ok(Vec::new());
    };

    let mut items: Vec<String> = (0..=end_row).map(|row| cell_at(&range, row, 0)).collect();
    while items.last().is_some_and(|s| s.is_empty()) {
        items.pop();
    }

    tracing::debug!("Loaded {} items from column A", items.len());
    Ok(items)
}
