pub mod cache;
pub mod interface;
pub mod translator;
pub mod validator;

pub use cache::{CacheKey, TranslationCache};
pub use interface::{TranslatePayload, TranslationRequest, TranslationResult};
pub use translator::CachedTranslator;
pub use validator::RequestValidator;
