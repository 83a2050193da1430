use std::sync::Arc;
use tracing::info;

use crate::config::Config;
use crate::error::RelayError;
use crate::libretranslate::{LibreTranslateClient, TranslationBackend};
use crate::translate::{CachedTranslator, RequestValidator, TranslationCache};

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub backend: Arc<dyn TranslationBackend>,
    pub translator: Arc<CachedTranslator>,
    pub validator: Arc<RequestValidator>,
}

impl AppState {
    /// Build state backed by a LibreTranslate client for `config.libretranslate_url`.
    pub fn new(config: Config) -> Result<Self, RelayError> {
        let backend = Arc::new(LibreTranslateClient::new(&config)?);
        info!("LibreTranslate URL: {}", backend.base_url());
        Self::with_backend(config, backend)
    }

    pub fn with_backend(
        config: Config,
        backend: Arc<dyn TranslationBackend>,
    ) -> Result<Self, RelayError> {
        let cache = Arc::new(TranslationCache::new(config.cache_capacity)?);
        info!("Translation cache capacity: {}", cache.capacity());
        let translator = Arc::new(CachedTranslator::new(
            backend.clone(),
            cache,
            config.cache_failures,
        ));
        let validator = Arc::new(RequestValidator::from_config(&config));

        Ok(Self {
            config: Arc::new(config),
            backend,
            translator,
            validator,
        })
    }
}
