//! Wire types for `/api/translate`

use serde::{Deserialize, Serialize};

/// Raw request body. Every field is optional; the validator fills defaults.
#[derive(Debug, Default, Deserialize)]
pub struct TranslatePayload {
    #[serde(default)]
    pub text: Option<String>,
    #[serde(default)]
    pub source_lang: Option<String>,
    #[serde(default)]
    pub target_lang: Option<String>,
}

/// A validated request: trimmed, non-empty text within the length limit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranslationRequest {
    pub text: String,
    pub source_lang: String,
    pub target_lang: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TranslationResult {
    pub original_text: String,
    pub translated_text: String,
    pub source_lang: String,
    pub target_lang: String,
}
