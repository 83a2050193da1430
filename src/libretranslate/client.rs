use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::{debug, error};

use super::fallback::fallback_languages;
use super::interface::{BackendFailure, BackendOutcome, LanguageDescriptor, TranslationBackend};
use crate::config::Config;
use crate::error::RelayError;

/// HTTP client for a LibreTranslate server
#[derive(Debug, Clone)]
pub struct LibreTranslateClient {
    client: Client,
    base_url: String,
    api_key: String,
    api_timeout: Duration,
    languages_timeout: Duration,
    health_timeout: Duration,
}

#[derive(Debug, Serialize)]
struct TranslateRequest<'a> {
    q: &'a str,
    source: &'a str,
    target: &'a str,
    format: &'a str,
    api_key: &'a str,
}

#[derive(Debug, Deserialize)]
struct TranslateResponse {
    #[serde(rename = "translatedText", default)]
    translated_text: Option<String>,
}

impl LibreTranslateClient {
    pub fn new(config: &Config) -> Result<Self, RelayError> {
        Ok(Self {
            client: Client::builder().build()?,
            base_url: config.libretranslate_url.clone(),
            api_key: config.api_key.clone(),
            api_timeout: config.api_timeout(),
            languages_timeout: config.languages_timeout(),
            health_timeout: config.health_timeout(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn fetch_languages(&self) -> Result<Vec<LanguageDescriptor>, reqwest::Error> {
        let response = self
            .client
            .get(self.url("/languages"))
            .timeout(self.languages_timeout)
            .send()
            .await?
            .error_for_status()?;
        response.json().await
    }
}

#[async_trait]
impl TranslationBackend for LibreTranslateClient {
    async fn translate(&self, text: &str, source_lang: &str, target_lang: &str) -> BackendOutcome {
        let request = TranslateRequest {
            q: text,
            source: source_lang,
            target: target_lang,
            format: "text",
            api_key: &self.api_key,
        };

        let response = match self
            .client
            .post(self.url("/translate"))
            .json(&request)
            .timeout(self.api_timeout)
            .send()
            .await
        {
            Ok(response) => response,
            Err(e) => {
                error!("Connection error: {}", e);
                return BackendOutcome::Failed(BackendFailure::Connection(e.to_string()));
            }
        };

        let status = response.status();
        if status != StatusCode::OK {
            error!("LibreTranslate error: {}", status.as_u16());
            return BackendOutcome::Failed(BackendFailure::Status(status.as_u16()));
        }

        match response.json::<TranslateResponse>().await {
            Ok(body) => BackendOutcome::Translated(body.translated_text.unwrap_or_default()),
            Err(e) => {
                error!("Connection error: {}", e);
                BackendOutcome::Failed(BackendFailure::Connection(e.to_string()))
            }
        }
    }

    async fn languages(&self) -> Vec<LanguageDescriptor> {
        match self.fetch_languages().await {
            Ok(languages) => languages,
            Err(e) => {
                debug!("Using fallback language list: {}", e);
                fallback_languages()
            }
        }
    }

    async fn is_healthy(&self) -> bool {
        let result = self
            .client
            .get(self.url("/languages"))
            .timeout(self.health_timeout)
            .send()
            .await;

        match result {
            Ok(response) if response.status() == StatusCode::OK => true,
            Ok(response) => {
                debug!("LibreTranslate health check returned {}", response.status());
                false
            }
            Err(e) => {
                debug!("LibreTranslate health check failed: {}", e);
                false
            }
        }
    }
}
