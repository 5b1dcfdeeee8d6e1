//! Script cache
//!
//! A concurrent map from cache key to script text, shared by two kinds of
//! entries:
//!
//! | Key | Value | Read back? |
//! |-----|-------|------------|
//! | resolved library file path | file contents | yes, on every load |
//! | inline script text | the same text | never |
//!
//! The inline entries exist only so that the map's size tracks how many
//! distinct scripts the current evaluator has seen; the size is what the
//! [`EvaluatorManager`](crate::EvaluatorManager) checks to decide on a
//! wholesale reset. Entries carry no timestamps or hit counts and are
//! never evicted individually.
//!
//! Concurrent misses for one key may both run their loader. The first
//! insert wins; later inserts are no-ops and their callers receive the
//! surviving text. `clear()` may race with inserts: either outcome is fine,
//! since the cache is never a source of truth.

use std::sync::Arc;

use dashmap::DashMap;
use graphscript_core::Result;
use tracing::debug;

/// Concurrent key → script text map
#[derive(Debug, Default)]
pub struct ScriptCache {
    entries: DashMap<String, Arc<str>>,
}

impl ScriptCache {
    /// Empty cache
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the cached text for `key`, running `loader` on a miss.
    ///
    /// The loader runs without holding any cache lock. A loader error is
    /// returned as-is and nothing is inserted.
    pub fn get_or_load<F>(&self, key: &str, loader: F) -> Result<Arc<str>>
    where
        F: FnOnce() -> Result<String>,
    {
        if let Some(text) = self.entries.get(key) {
            debug!(target: "graphscript::cache", key, "Cache hit");
            return Ok(Arc::clone(text.value()));
        }

        debug!(target: "graphscript::cache", key, "Cache miss");
        let loaded: Arc<str> = Arc::from(loader()?);
        let entry = self
            .entries
            .entry(key.to_string())
            .or_insert(loaded);
        Ok(Arc::clone(entry.value()))
    }

    /// Insert `text` under `key` unless the key is already present.
    ///
    /// Returns whether this call inserted.
    pub fn put(&self, key: &str, text: &str) -> bool {
        if self.entries.contains_key(key) {
            return false;
        }
        let mut inserted = false;
        self.entries.entry(key.to_string()).or_insert_with(|| {
            inserted = true;
            Arc::from(text)
        });
        inserted
    }

    /// Cached text for `key`, without loading
    pub fn get(&self, key: &str) -> Option<Arc<str>> {
        self.entries.get(key).map(|e| Arc::clone(e.value()))
    }

    /// Whether `key` is cached
    pub fn contains(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Number of entries, library and inline alike
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the cache is empty
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Drop every entry
    pub fn clear(&self) {
        self.entries.clear();
    }
}
