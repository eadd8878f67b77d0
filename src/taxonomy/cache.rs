use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use sha2::{Digest, Sha256};

use crate::error::Result;
use crate::llm::prompts::render_taxonomy_block;
use crate::models::TaxonomyTable;
use crate::taxonomy::loader::load_taxonomy;

/// SHA-256 digest of an uploaded taxonomy file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SourceKey([u8; 32]);

impl SourceKey {
    pub fn from_bytes(bytes: &[u8]) -> Self {
        Self(Sha256::digest(bytes).into())
    }
}

impl fmt::Display for SourceKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for byte in &self.0[..6] {
            write!(f, "{:02x}", byte)?;
        }
        Ok(())
    }
}

/// A parsed taxonomy together with the prompt block rendered from it.
#[derive(Debug, Clone)]
pub struct LoadedTaxonomy {
    pub key: SourceKey,
    pub table: Arc<TaxonomyTable>,
    pub block: Arc<str>,
}

/// Memoizes taxonomy parsing and block rendering for the lifetime of a session.
#[derive(Debug, Default)]
pub struct TaxonomyCache {
    entries: HashMap<SourceKey, LoadedTaxonomy>,
}

impl TaxonomyCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get_or_load(&mut self, bytes: &[u8]) -> Result<LoadedTaxonomy> {
        let key = SourceKey::from_bytes(bytes);
        if let Some(entry) = self.entries.get(&key) {
            tracing::debug!("Taxonomy cache hit for {}", key);
            return Ok(entry.clone());
        }

        let table = load_taxonomy(bytes)?;
        let block: Arc<str> = render_taxonomy_block(&table).into();
        let entry = LoadedTaxonomy {
            key,
            table: Arc::new(table),
            block,
        };
        self.entries.insert(key, entry.clone());
        Ok(entry)
    }

    pub fn contains(&self, key: &SourceKey) -> bool {
        self.entries.contains_key(key)
    }

    /// Drops one upload, returning whether it was cached.
    pub fn invalidate(&mut self, key: &SourceKey) -> bool {
        self.entries.remove(key).is_some()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
