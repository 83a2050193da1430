use super::interface::LanguageDescriptor;

/// Served by `/api/languages` when the backend listing is unavailable.
const FALLBACK_LANGUAGES: [(&str, &str); 8] = [
    ("en", "English"),
    ("id", "Indonesian"),
    ("es", "Spanish"),
    ("fr", "French"),
    ("de", "German"),
    ("ja", "Japanese"),
    ("zh", "Chinese"),
    ("ar", "Arabic"),
];

pub fn fallback_languages() -> Vec<LanguageDescriptor> {
    FALLBACK_LANGUAGES
        .iter()
        .map(|(code, name)| LanguageDescriptor::new(*code, *name))
        .collect()
}
