use contracts::domain::a001_form_draft::aggregate::{FORM_CACHE_KEY, FORM_CACHE_NAME};
use serde::Deserialize;
use std::str::FromStr;
use std::time::Duration;

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct FormDraftConfig {
    pub cache: CacheConfig,
    pub service_worker: ServiceWorkerConfig,
    #[serde(default)]
    pub log: LogConfig,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct CacheConfig {
    pub name: String,
    pub key: String,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct ServiceWorkerConfig {
    pub script_url: String,
    #[serde(default = "default_register_on_start")]
    pub register_on_start: bool,
    #[serde(default = "default_request_timeout_ms")]
    pub request_timeout_ms: u64,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct LogConfig {
    pub level: String,
}

fn default_register_on_start() -> bool {
    true
}

fn default_request_timeout_ms() -> u64 {
    3000
}

impl ServiceWorkerConfig {
    pub fn request_timeout(&self) -> Duration {
        Duration::from_millis(self.request_timeout_ms)
    }
}

impl LogConfig {
    /// Unknown names fall back to `debug`
    pub fn level(&self) -> log::Level {
        log::Level::from_str(&self.level).unwrap_or(log::Level::Debug)
    }
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: "debug".to_string(),
        }
    }
}

impl Default for FormDraftConfig {
    fn default() -> Self {
        Self {
            cache: CacheConfig {
                name: FORM_CACHE_NAME.to_string(),
                key: FORM_CACHE_KEY.to_string(),
            },
            service_worker: ServiceWorkerConfig {
                script_url: "/sw.js".to_string(),
                register_on_start: default_register_on_start(),
                request_timeout_ms: default_request_timeout_ms(),
            },
            log: LogConfig::default(),
        }
    }
}

/// Default configuration embedded in the bundle
const DEFAULT_CONFIG: &str = r#"
[cache]
name = "form-data-cache"
key = "/browser/formData"

[service_worker]
script_url = "/sw.js"
register_on_start = true
request_timeout_ms = 3000

[log]
level = "debug"
"#;

/// localStorage key holding a TOML document that replaces the embedded config
pub const CONFIG_OVERRIDE_KEY: &str = "form_draft_config";

pub fn parse_config(source: &str) -> Result<FormDraftConfig, toml::de::Error> {
    toml::from_str(source)
}

fn load_override() -> Option<String> {
    web_sys::window()
        .and_then(|w| w.local_storage().ok().flatten())
        .and_then(|storage| storage.get_item(CONFIG_OVERRIDE_KEY).ok().flatten())
}

/// Load configuration
///
/// Search order:
/// 1. TOML override in localStorage (`form_draft_config`)
/// 2. Embedded default config
pub fn load_config() -> FormDraftConfig {
    resolve_config(load_override().as_deref())
}

fn resolve_config(override_source: Option<&str>) -> FormDraftConfig {
    if let Some(source) = override_source {
        match parse_config(source) {
            Ok(config) => {
                log::info!("Loading config from localStorage key '{}'", CONFIG_OVERRIDE_KEY);
                return config;
            }
            Err(e) => log::warn!("Ignoring invalid config override: {}", e),
        }
    }

    match parse_config(DEFAULT_CONFIG) {
        Ok(config) => config,
        Err(e) => {
            log::error!("Embedded config is invalid: {}", e);
            FormDraftConfig::default()
        }
    }
}
