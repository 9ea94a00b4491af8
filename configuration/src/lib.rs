use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;
use transcribe_domain::constraints::PAGE_SIZE_MAX;

mod logging;

pub use logging::setup_logging;

pub type AppConfig = SdkConfig;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Cannot read config file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Invalid config file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
    #[error("Invalid value for {key}: {value}")]
    Env { key: String, value: String },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SdkConfig {
    #[serde(default)]
    pub logging: LoggingConfig,
    #[serde(default)]
    pub client: ClientConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_level")]
    pub level: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientConfig {
    #[serde(default = "default_region")]
    pub region: String,
    /// Overrides the regional endpoint, e.g. for a local stub.
    #[serde(default)]
    pub endpoint: Option<String>,
    #[serde(default = "default_true")]
    pub validate_requests: bool,
    #[serde(default = "default_page_size")]
    pub page_size: i32,
}

impl Default for SdkConfig {
    fn default() -> Self {
        Self {
            logging: LoggingConfig::default(),
            client: ClientConfig::default(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_level(),
        }
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            region: default_region(),
            endpoint: None,
            validate_requests: default_true(),
            page_size: default_page_size(),
        }
    }
}

/// Layered loading: defaults, then the TOML file named by
/// `<PREFIX>_CONFIG_FILE`, then `<PREFIX>_*` variables.
pub trait ConfigLoader: Sized {
    fn create_default() -> Self;

    fn config_prefix() -> &'static str;

    fn merge_file(self, path: &Path) -> Result<Self, ConfigError>;

    fn apply_env<F>(self, lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>;

    fn load_with<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::create_default();
        let file_key = format!("{}_CONFIG_FILE", Self::config_prefix());
        if let Some(path) = lookup(&file_key) {
            config = config.merge_file(Path::new(&path))?;
        }
        config.apply_env(lookup)
    }
}

impl ConfigLoader for SdkConfig {
    fn create_default() -> Self {
        SdkConfig::default()
    }

    fn config_prefix() -> &'static str {
        "TRANSCRIBE_SDK"
    }

    // A file replaces the defaults wholesale; members it omits fall back to
    // their serde defaults.
    fn merge_file(self, path: &Path) -> Result<Self, ConfigError> {
        let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        SdkConfig::from_toml(&raw).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    fn apply_env<F>(mut self, lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let key = |name: &str| format!("{}_{name}", Self::config_prefix());

        if let Some(level) = lookup(&key("LOG_LEVEL")) {
            self.logging.level = level;
        }
        if let Some(region) = lookup(&key("REGION")) {
            self.client.region = region;
        }
        if let Some(endpoint) = lookup(&key("ENDPOINT")) {
            self.client.endpoint = Some(endpoint).filter(|endpoint| !endpoint.is_empty());
        }
        if let Some(value) = lookup(&key("VALIDATE_REQUESTS")) {
            self.client.validate_requests = parse_bool(&value).ok_or(ConfigError::Env {
                key: key("VALIDATE_REQUESTS"),
                value,
            })?;
        }
        if let Some(value) = lookup(&key("PAGE_SIZE")) {
            self.client.page_size = value.trim().parse::<i32>().map_err(|_| ConfigError::Env {
                key: key("PAGE_SIZE"),
                value,
            })?;
        }

        self.client.page_size = self.client.page_size.clamp(1, PAGE_SIZE_MAX);
        Ok(self)
    }
}

impl SdkConfig {
    pub fn from_toml(raw: &str) -> Result<Self, toml::de::Error> {
        let mut config: SdkConfig = toml::from_str(raw)?;
        config.client.page_size = config.client.page_size.clamp(1, PAGE_SIZE_MAX);
        Ok(config)
    }
}

/// Loads the configuration from the process environment.
pub fn load_config() -> Result<SdkConfig, ConfigError> {
    SdkConfig::load_with(|key| std::env::var(key).ok())
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

fn default_true() -> bool {
    true
}

fn default_level() -> String {
    "info".to_string()
}

fn default_region() -> String {
    "us-east-1".to_string()
}

fn default_page_size() -> i32 {
    PAGE_SIZE_MAX
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn env(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(key, value)| (key.to_string(), value.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn config_defaults_are_deterministic() {
        let cfg = SdkConfig::default();
        assert_eq!(cfg.logging.level, "info");
        assert_eq!(cfg.client.region, "us-east-1");
        assert_eq!(cfg.client.endpoint, None);
        assert!(cfg.client.validate_requests);
        assert_eq!(cfg.client.page_size, 100);
        assert_eq!(SdkConfig::load_with(env(&[])).expect("loads"), cfg);
    }

    #[test]
    fn partial_toml_keeps_member_defaults() {
        let cfg = SdkConfig::from_toml(
            r#"
            [client]
            region = "eu-west-1"
            page_size = 500
            "#,
        )
        .expect("parses");

        assert_eq!(cfg.client.region, "eu-west-1");
        assert_eq!(cfg.client.page_size, transcribe_domain::constraints::PAGE_SIZE_MAX);
        assert!(cfg.client.validate_requests);
        assert_eq!(cfg.logging.level, "info");
    }

    #[test]
    fn env_overrides_win_over_defaults() {
        let cfg = SdkConfig::load_with(env(&[
            ("TRANSCRIBE_SDK_LOG_LEVEL", "debug"),
            ("TRANSCRIBE_SDK_REGION", "ap-southeast-2"),
            ("TRANSCRIBE_SDK_ENDPOINT", "http://localhost:4566"),
            ("TRANSCRIBE_SDK_VALIDATE_REQUESTS", "false"),
            ("TRANSCRIBE_SDK_PAGE_SIZE", "0"),
        ]))
        .expect("loads");

        assert_eq!(cfg.logging.level, "debug");
        assert_eq!(cfg.client.region, "ap-southeast-2");
        assert_eq!(cfg.client.endpoint.as_deref(), Some("http://localhost:4566"));
        assert!(!cfg.client.validate_requests);
        assert_eq!(cfg.client.page_size, 1);
    }

    #[test]
    fn unparseable_env_values_are_rejected() {
        let error = SdkConfig::load_with(env(&[("TRANSCRIBE_SDK_PAGE_SIZE", "many")]))
            .expect_err("not a number");
        assert!(matches!(error, ConfigError::Env { ref key, .. } if key == "TRANSCRIBE_SDK_PAGE_SIZE"));

        assert!(SdkConfig::load_with(env(&[("TRANSCRIBE_SDK_VALIDATE_REQUESTS", "maybe")])).is_err());
    }

    #[test]
    fn file_layer_sits_between_defaults_and_env() {
        let path = std::env::temp_dir().join(format!(
            "transcribe-sdk-config-{}.toml",
            std::process::id()
        ));
        std::fs::write(
            &path,
            "[logging]\nlevel = \"warn\"\n[client]\nregion = \"eu-central-1\"\n",
        )
        .expect("writes temp file");

        let file = path.to_string_lossy().to_string();
        let cfg = SdkConfig::load_with(env(&[
            ("TRANSCRIBE_SDK_CONFIG_FILE", file.as_str()),
            ("TRANSCRIBE_SDK_REGION", "us-west-2"),
        ]))
        .expect("loads");
        std::fs::remove_file(&path).ok();

        assert_eq!(cfg.logging.level, "warn");
        assert_eq!(cfg.client.region, "us-west-2");
    }

    #[test]
    fn missing_config_file_is_an_io_error() {
        let error = SdkConfig::load_with(env(&[(
            "TRANSCRIBE_SDK_CONFIG_FILE",
            "/nonexistent/transcribe-sdk.toml",
        )]))
        .expect_err("missing file");
        assert!(matches!(error, ConfigError::Io { .. }));
    }
}
