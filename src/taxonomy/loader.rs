use calamine::{Data, Range};

use crate::error::{Error, Result};
use crate::models::{TaxonomyRow, TaxonomyTable};
use crate::sheets::{cell_at, read_first_sheet};

/// Zero-based row of the header line (spreadsheet row 5). Rows above it are titles.
pub const HEADER_ROW: u32 = 4;
/// Columns B through F.
pub const FIRST_COLUMN: u32 = 1;
pub const LAST_COLUMN: u32 = 5;

/// Parses a taxonomy workbook into a table.
///
/// The first four rows are skipped, row 5 is a header whose labels are ignored,
/// and columns B–F are read positionally as
/// `lv1_code, lv1_name, lv2_code, lv2_name, description`. Rows without a level-1
/// code are dropped; every other missing cell becomes an empty string.
pub fn load_taxonomy(bytes: &[u8]) -> Result<TaxonomyTable> {
    let range = read_first_sheet(bytes)?;
    let table = table_from_range(&range)?;
    tracing::info!("Loaded taxonomy with {} categories", table.len());
    Ok(table)
}

fn table_from_range(range: &Range<Data>) -> Result<TaxonomyTable> {
    let Some((end_row, end_col)) = range.end() else {
        return Err(Error::MalformedSource("taxonomy sheet is empty".to_string()));
    };

    if end_col < LAST_COLUMN {
        return Err(Error::MalformedSource(format!(
            "taxonomy sheet has {} columns, expected at least {} (B to F)",
            end_col + 1,
            LAST_COLUMN + 1
        )));
    }

    if end_row < HEADER_ROW {
        return Err(Error::MalformedSource(format!(
            "taxonomy sheet has {} rows, header is expected on row {}",
            end_row + 1,
            HEADER_ROW + 1
        )));
    }

    let mut dropped = 0usize;
    let rows = (HEADER_ROW + 1..=end_row)
        .filter_map(|row| {
            let cells: Vec<String> = (FIRST_COLUMN..=LAST_COLUMN)
                .map(|col| cell_at(range, row, col))
                .collect();
            let parsed = row_from_cells(cells);
            if parsed.is_none() {
                dropped += 1;
            }
            parsed
        })
        .collect::<TaxonomyTable>();

    if dropped > 0 {
        tracing::debug!("Dropped {} taxonomy rows without a Lv1 code", dropped);
    }

    Ok(rows)
}

fn row_from_cells(cells: Vec<String>) -> Option<TaxonomyRow> {
    let mut cells = cells.into_iter();
    let lv1_code = cells.next().unwrap_or_default();
    if lv1_code.trim().is_empty() {
        return None;
    }

    let mut next = || cells.next().unwrap_or_default();
    Some(TaxonomyRow {
        lv1_code,
        lv1_name: next(),
        lv2_code: next(),
        lv2_name: next(),
        description: next(),
    })
}
