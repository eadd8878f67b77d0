pub mod taxonomy;
pub mod classification;

pub use taxonomy::*;
pub use classification::*;
