use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::error::RelayError;

/// Prefix for environment overrides of any config key, e.g. `RELAY_CACHE_CAPACITY`.
pub const ENV_PREFIX: &str = "RELAY";

/// Variable names understood by earlier deployments of the relay, mapped to config keys.
/// These take precedence over `RELAY_*` variables.
const LEGACY_ENV_VARS: [(&str, &str); 4] = [
    ("LIBRETRANSLATE_URL", "libretranslate_url"),
    ("LIBRETRANSLATE_API_KEY", "api_key"),
    ("API_TIMEOUT", "api_timeout"),
    ("PORT", "port"),
];

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,

    /// Base URL of the LibreTranslate backend, without trailing slash.
    #[serde(default = "default_libretranslate_url")]
    pub libretranslate_url: String,
    #[serde(default)]
    pub api_key: String,

    /// Timeouts in seconds.
    #[serde(default = "default_api_timeout")]
    pub api_timeout: u64,
    #[serde(default = "default_languages_timeout")]
    pub languages_timeout: u64,
    #[serde(default = "default_health_timeout")]
    pub health_timeout: u64,

    #[serde(default = "default_cache_capacity")]
    pub cache_capacity: usize,
    /// Whether backend failures are memoized like successful translations.
    #[serde(default = "default_cache_failures")]
    pub cache_failures: bool,

    #[serde(default = "default_max_text_length")]
    pub max_text_length: usize,
    #[serde(default = "default_source_lang")]
    pub default_source_lang: String,
    #[serde(default = "default_target_lang")]
    pub default_target_lang: String,

    /// Directory served for any path not matched by the API routes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub static_dir: Option<PathBuf>,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8000
}

fn default_libretranslate_url() -> String {
    "http://libretranslate:5000".to_string()
}

fn default_api_timeout() -> u64 {
    30
}

fn default_languages_timeout() -> u64 {
    10
}

fn default_health_timeout() -> u64 {
    5
}

fn default_cache_capacity() -> usize {
    1000
}

fn default_cache_failures() -> bool {
    true
}

fn default_max_text_length() -> usize {
    5000
}

fn default_source_lang() -> String {
    "id".to_string()
}

fn default_target_lang() -> String {
    "en".to_string()
}

impl Config {
    /// Load configuration from the process environment.
    ///
    /// Sources, lowest precedence first: built-in defaults, the file named by
    /// `CONFIG_PATH`, `RELAY_*` variables, then the legacy variable names.
    pub fn load() -> Result<Self, RelayError> {
        let vars: HashMap<String, String> = std::env::vars().collect();
        Self::from_env_map(&vars)
    }

    /// Same as [`Config::load`], reading variables from `vars` instead of the process.
    pub fn from_env_map(vars: &HashMap<String, String>) -> Result<Self, RelayError> {
        let mut builder = config::Config::builder()
            .add_source(config::Config::try_from(&Config::default())?);

        if let Some(path) = vars.get("CONFIG_PATH") {
            builder = builder.add_source(config::File::from(Path::new(path)).required(true));
        }

        let env_source: config::Map<String, String> = vars
            .iter()
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect();
        builder = builder.add_source(
            config::Environment::with_prefix(ENV_PREFIX)
                .try_parsing(true)
                .source(Some(env_source)),
        );

        for (var, key) in LEGACY_ENV_VARS {
            builder = builder.set_override_option(key, vars.get(var).cloned())?;
        }

        let mut config: Config = builder.build()?.try_deserialize()?;
        config.normalize();
        config.validate()?;
        Ok(config)
    }

    fn normalize(&mut self) {
        let trimmed = self.libretranslate_url.trim().trim_end_matches('/');
        self.libretranslate_url = trimmed.to_string();
    }

    pub fn validate(&self) -> Result<(), RelayError> {
        let url = reqwest::Url::parse(&self.libretranslate_url).map_err(|e| {
            RelayError::InvalidConfig(format!(
                "libretranslate_url {:?} is not a valid URL: {}",
                self.libretranslate_url, e
            ))
        })?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(RelayError::InvalidConfig(format!(
                "libretranslate_url must use http or https, got {}",
                url.scheme()
            )));
        }

        for (name, secs) in [
            ("api_timeout", self.api_timeout),
            ("languages_timeout", self.languages_timeout),
            ("health_timeout", self.health_timeout),
        ] {
            if secs == 0 {
                return Err(RelayError::InvalidConfig(format!("{} must be positive", name)));
            }
        }

        if self.cache_capacity == 0 {
            return Err(RelayError::InvalidConfig("cache_capacity must be positive".to_string()));
        }
        if self.max_text_length == 0 {
            return Err(RelayError::InvalidConfig("max_text_length must be positive".to_string()));
        }
        if self.default_source_lang.trim().is_empty() || self.default_target_lang.trim().is_empty() {
            return Err(RelayError::InvalidConfig(
                "default language codes must not be empty".to_string(),
            ));
        }

        if let Some(dir) = &self.static_dir {
            if !std::fs::metadata(dir)?.is_dir() {
                return Err(RelayError::InvalidConfig(format!(
                    "static_dir {} is not a directory",
                    dir.display()
                )));
            }
        }

        Ok(())
    }

    pub fn api_timeout(&self) -> Duration {
        Duration::from_secs(self.api_timeout)
    }

    pub fn languages_timeout(&self) -> Duration {
        Duration::from_secs(self.languages_timeout)
    }

    pub fn health_timeout(&self) -> Duration {
        Duration::from_secs(self.health_timeout)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            libretranslate_url: default_libretranslate_url(),
            api_key: String::new(),
            api_timeout: default_api_timeout(),
            languages_timeout: default_languages_timeout(),
            health_timeout: default_health_timeout(),
            cache_capacity: default_cache_capacity(),
            cache_failures: default_cache_failures(),
            max_text_length: default_max_text_length(),
            default_source_lang: default_source_lang(),
            default_target_lang: default_target_lang(),
            static_dir: None,
        }
    }
}
