//! Router configuration
//!
//! Resolution order: built-in defaults, then an optional TOML file, then
//! `AI_ROUTER_*` environment variables. Command-line flags are applied last by
//! the binary.

use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::error::{RouterError, RouterResult};

/// Delay between copying the prompt and opening the provider page
pub const DEFAULT_OPEN_DELAY_MS: u64 = 300;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct RouterConfig {
    /// Directory holding the custom-rules and history records
    pub state_dir: PathBuf,

    /// Milliseconds to wait after copying before opening the browser
    pub open_delay_ms: u64,

    /// Copy the prompt to the clipboard when routing
    pub copy_prompt: bool,

    /// Open the provider page when routing
    pub open_browser: bool,
}

impl Default for RouterConfig {
    fn default() -> Self {
        Self {
            state_dir: default_state_dir(),
            open_delay_ms: DEFAULT_OPEN_DELAY_MS,
            copy_prompt: true,
            open_browser: true,
        }
    }
}

impl RouterConfig {
    /// Parse a TOML document; missing fields keep their defaults
    pub fn from_toml(text: &str) -> RouterResult<Self> {
        toml::from_str(text).map_err(|e| RouterError::config(e.to_string()))
    }

    /// Read a TOML config file
    pub fn from_file(path: &Path) -> RouterResult<Self> {
        let text = std::fs::read_to_string(path)?;
        toml::from_str(&text)
            .map_err(|e| RouterError::config(format!("{}: {}", path.display(), e)))
    }

    /// Defaults overlaid with environment variables
    pub fn from_env() -> RouterResult<Self> {
        let mut config = Self::default();
        config.apply_env(|key| std::env::var(key).ok())?;
        Ok(config)
    }

    /// Load the file at `path` (if given) and overlay the environment.
    pub fn load(path: Option<&Path>) -> RouterResult<Self> {
        let mut config = match path {
            Some(path) => Self::from_file(path)?,
            None => Self::default(),
        };
        config.apply_env(|key| std::env::var(key).ok())?;
        Ok(config)
    }

    /// Apply `AI_ROUTER_*` overrides from a variable lookup
    pub fn apply_env<F>(&mut self, lookup: F) -> RouterResult<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(dir) = lookup("AI_ROUTER_STATE_DIR") {
            self.state_dir = PathBuf::from(dir);
        }
        if let Some(ms) = lookup("AI_ROUTER_OPEN_DELAY_MS") {
            self.open_delay_ms = ms.trim().parse().map_err(|_| {
                RouterError::config(format!("AI_ROUTER_OPEN_DELAY_MS is not a number: {ms:?}"))
            })?;
        }
        if let Some(val) = lookup("AI_ROUTER_COPY_PROMPT") {
            self.copy_prompt = parse_flag(&val);
        }
        if let Some(val) = lookup("AI_ROUTER_OPEN_BROWSER") {
            self.open_browser = parse_flag(&val);
        }
        Ok(())
    }
}

fn parse_flag(val: &str) -> bool {
    val.to_lowercase() == "true" || val == "1"
}

fn default_state_dir() -> PathBuf {
    dirs::data_dir()
        .map(|d| d.join("ai-router"))
        .unwrap_or_else(|| PathBuf::from(".ai-router"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn env(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = RouterConfig::default();
        assert_eq!(config.open_delay_ms, 300);
        assert!(config.copy_prompt);
        assert!(config.open_browser);
        assert!(config.state_dir.ends_with("ai-router") || config.state_dir.ends_with(".ai-router"));
    }

    #[test]
    fn test_partial_toml() {
        let config = RouterConfig::from_toml("open_delay_ms = 0\nopen_browser = false\n").unwrap();
        assert_eq!(config.open_delay_ms, 0);
        assert!(!config.open_browser);
        assert!(config.copy_prompt);
    }

    #[test]
    fn test_bad_toml_is_config_error() {
        let err = RouterConfig::from_toml("open_delay_ms = \"soon\"").unwrap_err();
        assert!(matches!(err, RouterError::Config { .. }));
    }

    #[test]
    fn test_env_overrides() {
        let mut config = RouterConfig::default();
        config
            .apply_env(env(&[
                ("AI_ROUTER_STATE_DIR", "/tmp/router-state"),
                ("AI_ROUTER_OPEN_DELAY_MS", "50"),
                ("AI_ROUTER_COPY_PROMPT", "0"),
                ("AI_ROUTER_OPEN_BROWSER", "TRUE"),
            ]))
            .unwrap();
        assert_eq!(config.state_dir, PathBuf::from("/tmp/router-state"));
        assert_eq!(config.open_delay_ms, 50);
        assert!(!config.copy_prompt);
        assert!(config.open_browser);
    }

    #[test]
    fn test_env_bad_delay() {
        let mut config = RouterConfig::default();
        let err = config
            .apply_env(env(&[("AI_ROUTER_OPEN_DELAY_MS", "later")]))
            .unwrap_err();
        assert!(err.to_string().contains("AI_ROUTER_OPEN_DELAY_MS"));
    }

    #[test]
    fn test_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("ai-router.toml");
        std::fs::write(&path, "state_dir = \"/var/lib/ai-router\"\n").unwrap();
        let config = RouterConfig::from_file(&path).unwrap();
        assert_eq!(config.state_dir, PathBuf::from("/var/lib/ai-router"));
    }
}
