//! In-memory LRU translation cache.
//! Key: exact (text, source_lang, target_lang) triple, no normalization.

use std::num::NonZeroUsize;

use lru::LruCache;
use parking_lot::Mutex;

use crate::error::RelayError;
use crate::libretranslate::BackendOutcome;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CacheKey {
    pub text: String,
    pub source_lang: String,
    pub target_lang: String,
}

impl CacheKey {
    pub fn new(text: &str, source_lang: &str, target_lang: &str) -> Self {
        Self {
            text: text.to_string(),
            source_lang: source_lang.to_string(),
            target_lang: target_lang.to_string(),
        }
    }
}

pub struct TranslationCache {
    inner: Mutex<LruCache<CacheKey, BackendOutcome>>,
}

impl TranslationCache {
    pub fn new(capacity: usize) -> Result<Self, RelayError> {
        let capacity = NonZeroUsize::new(capacity)
            .ok_or_else(|| RelayError::InvalidConfig("cache capacity must be > 0".to_string()))?;
        Ok(Self {
            inner: Mutex::new(LruCache::new(capacity)),
        })
    }

    /// Look up a cached outcome, marking it most recently used.
    pub fn get(&self, key: &CacheKey) -> Option<BackendOutcome> {
        self.inner.lock().get(key).cloned()
    }

    /// Insert an outcome. Returns the key evicted to make room, if any.
    pub fn insert(&self, key: CacheKey, outcome: BackendOutcome) -> Option<CacheKey> {
        let mut cache = self.inner.lock();
        match cache.push(key.clone(), outcome) {
            Some((evicted, _)) if evicted != key => Some(evicted),
            _ => None,
        }
    }

    /// Membership check that leaves recency untouched.
    #[cfg(test)]
    pub(crate) fn contains(&self, key: &CacheKey) -> bool {
        self.inner.lock().contains(key)
    }

    #[cfg(test)]
    pub(crate) fn len(&self) -> usize {
        self.inner.lock().len()
    }

    #[cfg(test)]
    pub(crate) fn is_empty(&self) -> bool {
        self.inner.lock().is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.inner.lock().cap().get()
    }
}
