use serde::{Deserialize, Deserializer};
use std::path::PathBuf;
use std::time::Duration;
use thiserror::Error;

use crate::constellation::ConstellationRequest;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("YAML parse error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub web: WebConfig,
    #[serde(default)]
    pub service: ServiceConfig,
    /// Initial values of the parameter form.
    #[serde(default)]
    pub defaults: ConstellationRequest,
}

#[derive(Debug, Clone, Deserialize)]
pub struct WebConfig {
    #[serde(default = "default_bind")]
    pub bind: String,
    #[serde(default = "default_static_dir")]
    pub static_dir: PathBuf,
}

impl Default for WebConfig {
    fn default() -> Self {
        Self {
            bind: default_bind(),
            static_dir: default_static_dir(),
        }
    }
}

fn default_bind() -> String {
    "0.0.0.0:8080".to_string()
}

fn default_static_dir() -> PathBuf {
    PathBuf::from("static")
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServiceConfig {
    #[serde(default = "default_service_url")]
    pub url: String,
    /// e.g. "30s". Unset means requests may hang forever.
    #[serde(default, deserialize_with = "deserialize_timeout")]
    pub timeout: Option<Duration>,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            url: default_service_url(),
            timeout: None,
        }
    }
}

pub fn default_service_url() -> String {
    "http://127.0.0.1:8000".to_string()
}

fn deserialize_timeout<'de, D>(deserializer: D) -> Result<Option<Duration>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<String>::deserialize(deserializer)?
        .map(|s| humantime::parse_duration(s.trim()).map_err(serde::de::Error::custom))
        .transpose()
}

impl Config {
    pub fn from_file(path: &str) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_str(&content)
    }

    pub fn from_str(yaml: &str) -> Result<Self, ConfigError> {
        let config: Config = serde_yaml::from_str(yaml)?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_document_uses_defaults() {
        let config = Config::from_str("{}").unwrap();

        assert_eq!(config.web.bind, "0.0.0.0:8080");
        assert_eq!(config.web.static_dir, PathBuf::from("static"));
        assert_eq!(config.service.url, "http://127.0.0.1:8000");
        assert_eq!(config.service.timeout, None);
        assert_eq!(config.defaults, ConstellationRequest::default());
    }

    #[test]
    fn reads_all_sections() {
        let yaml = r#"
web:
  bind: 127.0.0.1:9000
service:
  url: http://generator.local:8000
  timeout: 1m 30s
defaults:
  name: Polar
  planes: 4
  sats_per_plane: 10
  altitude_km: 780
  inclination_deg: 86.4
"#;

        let config = Config::from_str(yaml).unwrap();

        assert_eq!(config.web.bind, "127.0.0.1:9000");
        assert_eq!(config.service.url, "http://generator.local:8000");
        assert_eq!(config.service.timeout, Some(Duration::from_secs(90)));
        assert_eq!(config.defaults.name, "Polar");
        assert_eq!(config.defaults.planes, 4);
        assert_eq!(config.defaults.inclination_deg, 86.4);
    }

    #[test]
    fn shipped_config_parses() {
        let config = Config::from_str(include_str!("../../config.yaml")).unwrap();

        assert_eq!(config.defaults, ConstellationRequest::default());
        assert_eq!(config.service.timeout, None);
    }

    #[test]
    fn rejects_bad_timeout() {
        let err = Config::from_str("service:\n  timeout: soon\n").unwrap_err();
        assert!(matches!(err, ConfigError::Yaml(_)));
    }
}
