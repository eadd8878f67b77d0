pub mod reader;
pub mod items;

pub use items::load_items;
pub use reader::{cell_at, cell_to_string, read_first_sheet};
