use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A language the backend can translate from or to.
///
/// Fields beyond `code` and `name` (LibreTranslate reports `targets`) are
/// kept in `extra` and serialized back unchanged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LanguageDescriptor {
    pub code: String,
    pub name: String,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl LanguageDescriptor {
    pub fn new(code: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            name: name.into(),
            extra: serde_json::Map::new(),
        }
    }
}

/// Why a translation call did not produce text.
///
/// The display form is what clients see in `translated_text`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BackendFailure {
    /// The backend answered with a status other than 200.
    #[error("Error: {0}")]
    Status(u16),

    /// The request never got a usable answer: connect error, timeout, bad body.
    #[error("Connection error: {0}")]
    Connection(String),
}

/// Result of a single translation attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BackendOutcome {
    Translated(String),
    Failed(BackendFailure),
}

impl BackendOutcome {
    pub fn is_failure(&self) -> bool {
        matches!(self, BackendOutcome::Failed(_))
    }

    /// Text placed in the response body. Failures render as their error string.
    pub fn into_text(self) -> String {
        match self {
            BackendOutcome::Translated(text) => text,
            BackendOutcome::Failed(failure) => failure.to_string(),
        }
    }
}

/// Translation backend interface - the relay only forwards to it
#[async_trait]
pub trait TranslationBackend: Send + Sync {
    /// Translate `text` from `source_lang` to `target_lang`.
    ///
    /// Never returns an error: backend and network failures are reported
    /// as [`BackendOutcome::Failed`].
    async fn translate(&self, text: &str, source_lang: &str, target_lang: &str) -> BackendOutcome;

    /// Supported languages, or the built-in fallback list when the backend
    /// cannot be reached.
    async fn languages(&self) -> Vec<LanguageDescriptor>;

    /// Whether the backend answers its language listing with 200.
    async fn is_healthy(&self) -> bool;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn failure_text_matches_legacy_format() {
        let status = BackendOutcome::Failed(BackendFailure::Status(503));
        assert!(status.is_failure());
        assert_eq!(status.into_text(), "Error: 503");

        let connection = BackendOutcome::Failed(BackendFailure::Connection("refused".to_string()));
        assert_eq!(connection.into_text(), "Connection error: refused");

        let ok = BackendOutcome::Translated("Hello".to_string());
        assert!(!ok.is_failure());
        assert_eq!(ok.into_text(), "Hello");
    }

    #[test]
    fn language_descriptor_keeps_extra_fields() {
        let raw = serde_json::json!({"code": "en", "name": "English", "targets": ["id", "fr"]});
        let language: LanguageDescriptor = serde_json::from_value(raw.clone()).unwrap();
        assert_eq!(language.code, "en");
        assert_eq!(language.extra.get("targets"), Some(&serde_json::json!(["id", "fr"])));
        assert_eq!(serde_json::to_value(&language).unwrap(), raw);
    }
}
