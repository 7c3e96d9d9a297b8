use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

pub const DEFAULT_CONFIG_FILE: &str = "site.json";

fn default_base_url() -> String {
    "https://api.airtable.com".to_string()
}

fn default_timeout_ms() -> u64 {
    10_000
}

fn default_bind() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AirtableConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,
    #[serde(default)]
    pub base_id: String,
    #[serde(default, skip_serializing)]
    pub token: String,
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,
}

impl Default for AirtableConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            base_id: String::new(),
            token: String::new(),
            timeout_ms: default_timeout_ms(),
        }
    }
}

impl AirtableConfig {
    pub fn require_credentials(&self) -> Result<(), ConfigError> {
        if self.base_id.trim().is_empty() {
            return Err(ConfigError::Missing("airtable.baseId (AIRTABLE_BASE_ID)"));
        }
        if self.token.trim().is_empty() {
            return Err(ConfigError::Missing("airtable.token (AIRTABLE_TOKEN)"));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServerConfig {
    #[serde(default = "default_bind")]
    pub bind: String,
    #[serde(default = "default_port")]
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind: default_bind(),
            port: default_port(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct SiteConfig {
    #[serde(default)]
    pub airtable: AirtableConfig,
    #[serde(default)]
    pub server: ServerConfig,
    /// Serve records from a fixture file instead of the remote service.
    #[serde(default)]
    pub fixtures: Option<PathBuf>,
}

impl SiteConfig {
    /// Reads `path`, or `./site.json` when no path is given and the file
    /// exists. Environment overrides are applied last.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let mut cfg = match path {
            Some(p) => Self::from_file(p)?,
            None => {
                let fallback = Path::new(DEFAULT_CONFIG_FILE);
                if fallback.is_file() {
                    Self::from_file(fallback)?
                } else {
                    Self::default()
                }
            }
        };
        cfg.apply_env(|key| std::env::var(key).ok());
        Ok(cfg)
    }

    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let mut cfg =
            serde_json::from_str::<Self>(&content).map_err(|source| ConfigError::Parse {
                path: path.to_path_buf(),
                source,
            })?;

        if let Some(fixtures) = cfg.fixtures.as_mut() {
            if fixtures.is_relative() {
                if let Some(dir) = path.parent() {
                    *fixtures = dir.join(&*fixtures);
                }
            }
        }
        if cfg.airtable.timeout_ms == 0 {
            cfg.airtable.timeout_ms = default_timeout_ms();
        }
        Ok(cfg)
    }

    pub fn apply_env<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        if let Some(token) = non_empty("AIRTABLE_TOKEN") {
            self.airtable.token = token;
        }
        if let Some(base_id) = non_empty("AIRTABLE_BASE_ID") {
            self.airtable.base_id = base_id;
        }
        if let Some(base_url) = non_empty("AIRTABLE_BASE_URL") {
            self.airtable.base_url = base_url;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::time::{SystemTime, UNIX_EPOCH};

    fn unique_temp_dir(prefix: &str) -> PathBuf {
        let ts = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .expect("clock should be after unix epoch")
            .as_nanos();
        let dir = std::env::temp_dir().join(format!("{}-{}-{}", prefix, std::process::id(), ts));
        fs::create_dir_all(&dir).expect("failed to create temp dir");
        dir
    }

    #[test]
    fn defaults_match_remote_service() {
        let cfg = SiteConfig::default();
        assert_eq!(cfg.airtable.base_url, "https://api.airtable.com");
        assert_eq!(cfg.airtable.timeout_ms, 10_000);
        assert_eq!(cfg.server.port, 8080);
        assert!(cfg.fixtures.is_none());
    }

    #[test]
    fn env_overrides_file_values() {
        let mut cfg = SiteConfig::default();
        cfg.airtable.base_id = "appFromFile".to_string();

        let env: HashMap<&str, &str> = [("AIRTABLE_TOKEN", "patSecret"), ("AIRTABLE_BASE_ID", "")]
            .into_iter()
            .collect();
        cfg.apply_env(|key| env.get(key).map(|v| v.to_string()));

        assert_eq!(cfg.airtable.token, "patSecret");
        assert_eq!(cfg.airtable.base_id, "appFromFile");
    }

    #[test]
    fn token_is_never_serialized() {
        let mut cfg = SiteConfig::default();
        cfg.airtable.token = "patSecret".to_string();
        let out = serde_json::to_string(&cfg).unwrap();
        assert!(!out.contains("patSecret"));
    }

    #[test]
    fn missing_credentials_are_reported() {
        let cfg = AirtableConfig::default();
        assert!(matches!(
            cfg.require_credentials(),
            Err(ConfigError::Missing(_))
        ));
    }

    #[test]
    fn from_file_resolves_fixture_path_relative_to_config() {
        let dir = unique_temp_dir("krd-config");
        let path = dir.join("site.json");
        fs::write(
            &path,
            r#"{"airtable":{"baseId":"appX","timeoutMs":0},"server":{"port":3000},"fixtures":"demo.json"}"#,
        )
        .unwrap();

        let cfg = SiteConfig::from_file(&path).unwrap();
        assert_eq!(cfg.airtable.base_id, "appX");
        assert_eq!(cfg.airtable.timeout_ms, 10_000);
        assert_eq!(cfg.server.port, 3000);
        assert_eq!(cfg.fixtures, Some(dir.join("demo.json")));

        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn from_file_reports_parse_errors() {
        let dir = unique_temp_dir("krd-config-bad");
        let path = dir.join("site.json");
        fs::write(&path, "{ not json").unwrap();
        assert!(matches!(
            SiteConfig::from_file(&path),
            Err(ConfigError::Parse { .. })
        ));
        let _ = fs::remove_dir_all(&dir);
    }
}
