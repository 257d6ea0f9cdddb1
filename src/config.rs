use std::{fs, path::Path};

use anyhow::Context;
use getset::Getters;
use serde::Deserialize;

/// Startup configuration, read once from `config.toml` and passed explicitly
/// into the client. Nothing reads configuration after this point.
#[derive(Debug, Deserialize, Getters)]
pub struct AppConfig {
    /// OpenWeatherMap API key. Not validated locally; a bad key surfaces as
    /// an upstream 401.
    #[getset(get = "pub")]
    api_key: String,

    /// Location used when the command line supplies none, e.g. "austin,tx".
    #[getset(get = "pub")]
    default_location: String,

    /// Optional tracing level, e.g. "debug". Defaults to INFO.
    #[getset(get = "pub")]
    level: Option<String>,
}

impl AppConfig {
    pub fn load(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .with_context(|| format!("failed to read config file: {}", path.display()))?;
        toml::from_str(&content)
            .with_context(|| format!("failed to deserialize config file: {}", path.display()))
    }

    #[cfg(test)]
    pub(crate) fn for_tests(api_key: &str, default_location: &str) -> Self {
        AppConfig {
            api_key: api_key.to_string(),
            default_location: default_location.to_string(),
            level: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_full_config() {
        let cfg: AppConfig = toml::from_str(
            r#"
            api_key = "abc123"
            default_location = "austin,tx"
            level = "debug"
            "#,
        )
        .expect("config should parse");

        assert_eq!(cfg.api_key(), "abc123");
        assert_eq!(cfg.default_location(), "austin,tx");
        assert_eq!(cfg.level().as_deref(), Some("debug"));
    }

    #[test]
    fn level_is_optional() {
        let cfg: AppConfig = toml::from_str(
            r#"
            api_key = "abc123"
            default_location = "austin,tx"
            "#,
        )
        .expect("config should parse");

        assert!(cfg.level().is_none());
    }

    #[test]
    fn missing_api_key_is_an_error() {
        let result = toml::from_str::<AppConfig>(r#"default_location = "austin,tx""#);
        assert!(result.is_err());
    }
}
