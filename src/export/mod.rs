pub mod xlsx;

pub use xlsx::{build_rows, export_file_name, save_workbook, write_workbook, ExportRow};
