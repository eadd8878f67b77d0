use std::io::Cursor;

use calamine::{Data, DataType, Range, Reader, Xlsx};

use crate::error::{Error, Result};

/// Opens an xlsx payload and returns the cell range of its first worksheet.
pub fn read_first_sheet(bytes: &[u8]) -> Result<Range<Data>> {
    let mut workbook =
        Xlsx::new(Cursor::new(bytes)).map_err(|e| Error::SourceParse(e.to_string()))?;

    match workbook.worksheet_range_at(0) {
        Some(range) => range.map_err(|e| Error::SourceParse(e.to_string())),
        None => Err(Error::SourceParse("workbook has no worksheets".to_string())),
    }
}

/// Cell at an absolute (row, column) position as a string; missing cells are empty.
pub fn cell_at(range: &Range<Data>, row: u32, col: u32) -> String {
    range
        .get_value((row, col))
        .map(cell_to_string)
        .unwrap_or_default()
}

pub fn cell_to_string(cell: &Data) -> String {
    match cell {
        Data::Empty | Data::Error(_) => String::new(),
        Data::String(s) | Data::DateTimeIso(s) | Data::DurationIso(s) => s.clone(),
        Data::Int(i) => i.to_string(),
        Data::Float(f) => format_number(*f),
        Data::Bool(true) => "TRUE".to_string(),
        Data::Bool(false) => "FALSE".to_string(),
        Data::DateTime(dt) => cell
            .as_datetime()
            .map(|d| d.to_string())
            .unwrap_or_else(|| dt.as_f64().to_string()),
    }
}

// Account codes are usually typed as numbers; keep "100" rather than "100.0".
fn format_number(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{}", value as i64)
    } else {
        value.to_string()
    }
}
