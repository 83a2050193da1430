use super::interface::{TranslatePayload, TranslationRequest};
use crate::config::Config;
use crate::error::ValidationError;

#[derive(Debug, Clone)]
pub struct RequestValidator {
    max_text_length: usize,
    default_source_lang: String,
    default_target_lang: String,
}

impl RequestValidator {
    pub fn new(
        max_text_length: usize,
        default_source_lang: impl Into<String>,
        default_target_lang: impl Into<String>,
    ) -> Self {
        Self {
            max_text_length,
            default_source_lang: default_source_lang.into(),
            default_target_lang: default_target_lang.into(),
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(
            config.max_text_length,
            config.default_source_lang.clone(),
            config.default_target_lang.clone(),
        )
    }

    /// Trim the text, apply language defaults and enforce the length limit.
    ///
    /// Length is counted in characters, not bytes. Language codes are passed
    /// through as given.
    pub fn validate(&self, payload: TranslatePayload) -> Result<TranslationRequest, ValidationError> {
        let text = payload
            .text
            .as_deref()
            .unwrap_or_default()
            .trim_matches(is_strippable);

        if text.is_empty() {
            return Err(ValidationError::Empty);
        }
        if text.chars().count() > self.max_text_length {
            return Err(ValidationError::TooLong {
                max: self.max_text_length,
            });
        }

        Ok(TranslationRequest {
            text: text.to_string(),
            source_lang: payload
                .source_lang
                .unwrap_or_else(|| self.default_source_lang.clone()),
            target_lang: payload
                .target_lang
                .unwrap_or_else(|| self.default_target_lang.clone()),
        })
    }
}

/// Whitespace plus the ASCII information separators U+001C..U+001F, which
/// clients treat as blank but `char::is_whitespace` does not.
fn is_strippable(c: char) -> bool {
    c.is_whitespace() || ('\u{1c}'..='\u{1f}').contains(&c)
}

impl Default for RequestValidator {
    fn default() -> Self {
        Self::from_config(&Config::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn payload(text: &str) -> TranslatePayload {
        TranslatePayload {
            text: Some(text.to_string()),
            ..TranslatePayload::default()
        }
    }

    #[test]
    fn trims_text_and_applies_defaults() {
        let request = RequestValidator::default().validate(payload("  Halo dunia \n")).unwrap();
        assert_eq!(request.text, "Halo dunia");
        assert_eq!(request.source_lang, "id");
        assert_eq!(request.target_lang, "en");
    }

    #[test]
    fn keeps_explicit_languages() {
        let request = RequestValidator::default()
            .validate(TranslatePayload {
                text: Some("Bonjour".to_string()),
                source_lang: Some("fr".to_string()),
                target_lang: Some("de".to_string()),
            })
            .unwrap();
        assert_eq!(request.source_lang, "fr");
        assert_eq!(request.target_lang, "de");
    }

    #[test]
    fn rejects_empty_and_whitespace() {
        let validator = RequestValidator::default();
        assert_eq!(validator.validate(payload("")), Err(ValidationError::Empty));
        assert_eq!(validator.validate(payload(" \t\n ")), Err(ValidationError::Empty));
        assert_eq!(
            validator.validate(TranslatePayload::default()),
            Err(ValidationError::Empty)
        );
    }

    #[test]
    fn length_limit_is_inclusive_and_counts_chars() {
        let validator = RequestValidator::default();
        assert!(validator.validate(payload(&"a".repeat(5000))).is_ok());
        assert!(validator.validate(payload(&"é".repeat(5000))).is_ok());

        let err = validator.validate(payload(&"a".repeat(5001))).unwrap_err();
        assert_eq!(err, ValidationError::TooLong { max: 5000 });
        assert_eq!(err.to_string(), "Text too long (max 5000 characters)");
    }

    #[test]
    fn trims_information_separators() {
        let validator = RequestValidator::default();
        let request = validator.validate(payload("\u{1c}Halo\u{1f} \u{85}")).unwrap();
        assert_eq!(request.text, "Halo");
        assert_eq!(
            validator.validate(payload("\u{1c}\u{1d}\u{1e}\u{1f}")),
            Err(ValidationError::Empty)
        );
    }

    #[test]
    fn length_is_checked_after_trimming() {
        let padded = format!("   {}   ", "a".repeat(5000));
        assert!(RequestValidator::default().validate(payload(&padded)).is_ok());
    }
}
