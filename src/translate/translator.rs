use std::sync::Arc;
use tracing::debug;

use super::cache::{CacheKey, TranslationCache};
use crate::libretranslate::{BackendOutcome, TranslationBackend};

/// Memoizes backend translations by exact (text, source, target) triple.
pub struct CachedTranslator {
    backend: Arc<dyn TranslationBackend>,
    cache: Arc<TranslationCache>,
    cache_failures: bool,
}

impl CachedTranslator {
    pub fn new(
        backend: Arc<dyn TranslationBackend>,
        cache: Arc<TranslationCache>,
        cache_failures: bool,
    ) -> Self {
        Self {
            backend,
            cache,
            cache_failures,
        }
    }

    #[cfg(test)]
    pub(crate) fn cache(&self) -> &TranslationCache {
        &self.cache
    }

    pub async fn translate(&self, text: &str, source_lang: &str, target_lang: &str) -> BackendOutcome {
        let key = CacheKey::new(text, source_lang, target_lang);

        if let Some(outcome) = self.cache.get(&key) {
            debug!("Cache hit: {} -> {} ({} chars)", source_lang, target_lang, text.chars().count());
            return outcome;
        }

        debug!("Cache miss: {} -> {} ({} chars)", source_lang, target_lang, text.chars().count());
        let outcome = self.backend.translate(text, source_lang, target_lang).await;

        if self.cache_failures || !outcome.is_failure() {
            if let Some(evicted) = self.cache.insert(key, outcome.clone()) {
                debug!("Evicted cache entry {} -> {}", evicted.source_lang, evicted.target_lang);
            }
        }

        outcome
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::libretranslate::{BackendFailure, LanguageDescriptor};
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicUsize, Ordering};

    /// Upper-cases the text, or fails when `fail` is set. Counts calls.
    struct FakeBackend {
        calls: AtomicUsize,
        fail: bool,
    }

    impl FakeBackend {
        fn new(fail: bool) -> Arc<Self> {
            Arc::new(Self {
                calls: AtomicUsize::new(0),
                fail,
            })
        }

        fn calls(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl TranslationBackend for FakeBackend {
        async fn translate(&self, text: &str, _source_lang: &str, _target_lang: &str) -> BackendOutcome {
            self.calls.fetch_add(1, Ordering::SeqCst);
            if self.fail {
                BackendOutcome::Failed(BackendFailure::Status(503))
            } else {
                BackendOutcome::Translated(text.to_uppercase())
            }
        }

        async fn languages(&self) -> Vec<LanguageDescriptor> {
            Vec::new()
        }

        async fn is_healthy(&self) -> bool {
            true
        }
    }

    fn translator(backend: Arc<FakeBackend>, capacity: usize, cache_failures: bool) -> CachedTranslator {
        CachedTranslator::new(
            backend,
            Arc::new(TranslationCache::new(capacity).unwrap()),
            cache_failures,
        )
    }

    #[tokio::test]
    async fn second_identical_call_is_served_from_cache() {
        let backend = FakeBackend::new(false);
        let translator = translator(backend.clone(), 1000, true);

        let first = translator.translate("halo", "id", "en").await;
        let second = translator.translate("halo", "id", "en").await;

        assert_eq!(first, BackendOutcome::Translated("HALO".to_string()));
        assert_eq!(first, second);
        assert_eq!(backend.calls(), 1);
    }

    #[tokio::test]
    async fn different_language_pair_is_a_miss() {
        let backend = FakeBackend::new(false);
        let translator = translator(backend.clone(), 1000, true);

        translator.translate("halo", "id", "en").await;
        translator.translate("halo", "id", "fr").await;
        translator.translate("Halo", "id", "en").await;

        assert_eq!(backend.calls(), 3);
        assert_eq!(translator.cache().len(), 3);
    }

    #[tokio::test]
    async fn evicted_entry_triggers_fresh_backend_call() {
        let backend = FakeBackend::new(false);
        let translator = translator(backend.clone(), 2, true);

        translator.translate("a", "id", "en").await;
        translator.translate("b", "id", "en").await;
        translator.translate("a", "id", "en").await; // "b" is now least recent
        translator.translate("c", "id", "en").await; // evicts "b"
        assert_eq!(backend.calls(), 3);

        translator.translate("a", "id", "en").await;
        assert_eq!(backend.calls(), 3);

        translator.translate("b", "id", "en").await;
        assert_eq!(backend.calls(), 4);
    }

    #[tokio::test]
    async fn failures_are_cached_by_default() {
        let backend = FakeBackend::new(true);
        let translator = translator(backend.clone(), 10, true);

        let first = translator.translate("halo", "id", "en").await;
        let second = translator.translate("halo", "id", "en").await;

        assert_eq!(first.into_text(), "Error: 503");
        assert!(second.is_failure());
        assert_eq!(backend.calls(), 1);
    }

    #[tokio::test]
    async fn failures_skip_cache_when_disabled() {
        let backend = FakeBackend::new(true);
        let translator = translator(backend.clone(), 10, false);

        translator.translate("halo", "id", "en").await;
        translator.translate("halo", "id", "en").await;

        assert_eq!(backend.calls(), 2);
        assert!(translator.cache().is_empty());
    }
}
