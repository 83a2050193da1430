pub mod client;
pub mod fallback;
pub mod interface;

pub use client::LibreTranslateClient;
pub use fallback::fallback_languages;
pub use interface::{BackendFailure, BackendOutcome, LanguageDescriptor, TranslationBackend};
