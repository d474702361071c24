/*!
 * Per-run translation memo.
 *
 * Repeated values (a status column, a product name on every row) are sent to
 * the provider once. Only successful translations are stored, so a value that
 * failed earlier goes through the full retry policy again. Nothing outlives the
 * process.
 */

use log::debug;
use parking_lot::RwLock;
use std::collections::HashMap;
use std::sync::Arc;

/// Cache key combining source text, source language, and target language
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
struct CacheKey {
    source_text: String,
    source_language: String,
    target_language: String,
}

impl CacheKey {
    fn new(source_text: &str, source_language: &str, target_language: &str) -> Self {
        Self {
            source_text: source_text.to_string(),
            source_language: source_language.to_string(),
            target_language: target_language.to_string(),
        }
    }
}

#[derive(Debug, Default)]
struct CacheCounters {
    hits: usize,
    misses: usize,
}

/// Translation cache for storing and retrieving translations
#[derive(Debug, Clone)]
pub struct TranslationCache {
    entries: Arc<RwLock<HashMap<CacheKey, String>>>,
    counters: Arc<RwLock<CacheCounters>>,
    enabled: bool,
}

impl TranslationCache {
    /// Create a new translation cache
    pub fn new(enabled: bool) -> Self {
        Self {
            entries: Arc::new(RwLock::new(HashMap::new())),
            counters: Arc::new(RwLock::new(CacheCounters::default())),
            enabled,
        }
    }

    /// A cache that never stores anything
    pub fn disabled() -> Self {
        Self::new(false)
    }

    /// Look up a translation; disabled caches always miss without counting
    pub fn get(&self, source_text: &str, source_language: &str, target_language: &str) -> Option<String> {
        if !self.enabled {
            return None;
        }

        let key = CacheKey::new(source_text, source_language, target_language);
        let found = self.entries.read().get(&key).cloned();

        let mut counters = self.counters.write();
        if found.is_some() {
            counters.hits += 1;
            debug!("Cache hit for '{}'", source_text);
        } else {
            counters.misses += 1;
        }

        found
    }

    /// Store a translation
    pub fn store(&self, source_text: &str, source_language: &str, target_language: &str, translation: &str) {
        if !self.enabled {
            return;
        }

        let key = CacheKey::new(source_text, source_language, target_language);
        self.entries.write().insert(key, translation.to_string());
    }

    /// (hits, misses, hit rate)
    pub fn stats(&self) -> (usize, usize, f64) {
        let counters = self.counters.read();
        let total = counters.hits + counters.misses;
        let hit_rate = if total > 0 {
            counters.hits as f64 / total as f64
        } else {
            0.0
        };

        (counters.hits, counters.misses, hit_rate)
    }

    pub fn len(&self) -> usize {
        self.entries.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.read().is_empty()
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }
}

impl Default for TranslationCache {
    fn default() -> Self {
        Self::disabled()
    }
}
