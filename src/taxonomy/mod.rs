pub mod loader;
pub mod cache;

pub use cache::{LoadedTaxonomy, SourceKey, TaxonomyCache};
pub use loader::load_taxonomy;
