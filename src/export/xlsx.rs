use std::fmt::Display;
use std::path::Path;

use chrono::{DateTime, TimeZone};
use rust_xlsxwriter::{Format, Workbook};

use crate::error::{Error, Result};
use crate::models::BatchResult;

pub const EXPORT_HEADERS: [&str; 6] = ["テキスト", "Lv1#", "Lv1name", "Lv2#", "Lv2name", "理由"];
pub const COLUMN_WIDTHS: [f64; 6] = [40.0, 6.0, 12.0, 6.0, 18.0, 80.0];
/// Excel's per-cell text limit, in characters.
pub const MAX_CELL_CHARS: usize = 32_767;

/// One output line: the item text followed by its classification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportRow(pub [String; 6]);

impl ExportRow {
    pub fn cells(&self) -> &[String; 6] {
        &self.0
    }
}

/// Joins the original item texts with their results in export column order.
pub fn build_rows(items: &[String], results: &BatchResult) -> Result<Vec<ExportRow>> {
    if items.len() != results.len() {
        return Err(Error::Export(format!(
            "{} items but {} results",
            items.len(),
            results.len()
        )));
    }

    Ok(items
        .iter()
        .zip(results.iter())
        .map(|(item, result)| {
            let [lv1_code, lv1_name, lv2_code, lv2_name, reason] = result.fields();
            ExportRow([
                item.clone(),
                lv1_code.to_string(),
                lv1_name.to_string(),
                lv2_code.to_string(),
                lv2_name.to_string(),
                reason.to_string(),
            ])
        })
        .collect())
}

/// Writes the header and rows into a single-sheet workbook with fixed column widths.
pub fn write_workbook(rows: &[ExportRow]) -> Result<Vec<u8>> {
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    let header_format = Format::new().set_bold();

    for (col, header) in EXPORT_HEADERS.iter().enumerate() {
        worksheet.write_string_with_format(0, col as u16, *header, &header_format)?;
    }

    for (i, row) in rows.iter().enumerate() {
        let row_num = (i + 1) as u32;
        for (col, value) in row.cells().iter().enumerate() {
            if !value.is_empty() {
                worksheet.write_string(row_num, col as u16, fit_cell(value))?;
            }
        }
    }

    for (col, width) in COLUMN_WIDTHS.iter().enumerate() {
        worksheet.set_column_width(col as u16, *width)?;
    }

    Ok(workbook.save_to_buffer()?)
}

fn fit_cell(value: &str) -> &str {
    match value.char_indices().nth(MAX_CELL_CHARS) {
        Some((idx, _)) => {
            tracing::warn!(
                "Cell text of {} chars truncated to {}",
                value.chars().count(),
                MAX_CELL_CHARS
            );
            &value[..idx]
        }
        None => value,
    }
}

pub fn export_file_name<Tz>(at: &DateTime<Tz>) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    format!("classified_trial_balance_{}.xlsx", at.format("%Y%m%d_%H%M"))
}

pub fn save_workbook(path: &Path, bytes: &[u8]) -> Result<()> {
    std::fs::write(path, bytes)?;
    tracing::info!("Wrote {} bytes to {}", bytes.len(), path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ClassificationResult;
    use crate::sheets::{cell_at, read_first_sheet};
    use chrono::{FixedOffset, TimeZone};

    #[test]
    fn test_build_rows_column_order() {
        let items = vec!["flight ticket".to_string(), " ".to_string()];
        let results = BatchResult::new(vec![
            ClassificationResult::matched("100", "Travel", "110", "Airfare", "matches travel"),
            ClassificationResult::blank(),
        ]);

        let rows = build_rows(&items, &results).unwrap();
        assert_eq!(
            rows[0].cells(),
            &["flight ticket", "100", "Travel", "110", "Airfare", "matches travel"].map(String::from)
        );
        assert_eq!(rows[1].cells(), &[" ", "", "", "", "", ""].map(String::from));
    }

    #[test]
    fn test_build_rows_length_mismatch() {
        let err = build_rows(&["a".to_string()], &BatchResult::default()).unwrap_err();
        assert!(matches!(err, Error::Export(_)));
    }

    #[test]
    fn test_written_workbook_reads_back() {
        let rows = vec![
            ExportRow(["flight ticket", "100", "Travel", "110", "Airfare", "matches travel"].map(String::from)),
            ExportRow(["taxi", "エラー", "", "", "", "timeout"].map(String::from)),
        ];

        let bytes = write_workbook(&rows).unwrap();
        let range = read_first_sheet(&bytes).unwrap();

        for (col, header) in EXPORT_HEADERS.iter().enumerate() {
            assert_eq!(cell_at(&range, 0, col as u32), *header);
        }
        assert_eq!(cell_at(&range, 1, 0), "flight ticket");
        assert_eq!(cell_at(&range, 1, 5), "matches travel");
        assert_eq!(cell_at(&range, 2, 1), "エラー");
        assert_eq!(cell_at(&range, 2, 2), "");
        assert_eq!(cell_at(&range, 2, 5), "timeout");
    }

    #[test]
    fn test_oversized_reason_is_truncated() {
        let long_reason = "あ".repeat(40_000);
        let rows = vec![
            ExportRow(["verbose", "100", "Travel", "110", "Airfare", long_reason.as_str()].map(String::from)),
            ExportRow(["after", "100", "Travel", "120", "Hotel", "short"].map(String::from)),
        ];

        let bytes = write_workbook(&rows).unwrap();
        let range = read_first_sheet(&bytes).unwrap();

        let reason = cell_at(&range, 1, 5);
        assert_eq!(reason.chars().count(), MAX_CELL_CHARS);
        assert!(reason.chars().all(|c| c == 'あ'));
        assert_eq!(cell_at(&range, 1, 0), "verbose");
        assert_eq!(cell_at(&range, 2, 5), "short");
    }

    #[test]
    fn test_fit_cell_keeps_short_text() {
        assert_eq!(fit_cell("旅費交通費"), "旅費交通費");
        let exact = "x".repeat(MAX_CELL_CHARS);
        assert_eq!(fit_cell(&exact).len(), MAX_CELL_CHARS);
    }

    #[test]
    fn test_export_file_name() {
        let offset = FixedOffset::east_opt(9 * 3600).unwrap();
        let at = offset.with_ymd_and_hms(2026, 3, 7, 14, 5, 59).unwrap();
        assert_eq!(export_file_name(&at), "classified_trial_balance_20260307_1405.xlsx");
    }
}
