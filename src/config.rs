//! Application configuration.
//!
//! Configuration is loaded from a TOML file at:
//! 1. `$OUTBOXSHELL_CONFIG` (environment variable)
//! 2. `~/.config/outboxshell/config.toml` (Linux/macOS)
//!    `%APPDATA%\outboxshell\config.toml` (Windows)
//! 3. Built-in defaults

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Backend endpoint the original composer posts to.
pub const DEFAULT_ENDPOINT: &str = "http://localhost:8000/api/send-email/";

/// Top-level configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// General behavior settings.
    pub general: GeneralConfig,
    /// Display settings for the TUI.
    pub display: DisplayConfig,
    /// Backend submission settings.
    pub backend: BackendConfig,
}

/// General behavior settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneralConfig {
    /// Override cache directory for previews and logs.
    pub cache_dir: Option<PathBuf>,
    /// Log level: "error", "warn", "info", "debug", "trace".
    pub log_level: String,
}

/// Display settings for the TUI.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    /// Color theme: "dark" or "light".
    pub theme: String,
    /// Show the live preview pane on startup.
    pub show_preview: bool,
}

/// Backend submission settings.
///
/// The request method (POST) and content type (multipart/form-data) are
/// fixed; only the endpoint and timeout are configurable.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BackendConfig {
    /// Endpoint URL the composed email is posted to.
    pub endpoint: String,
    /// Request timeout in seconds.
    pub timeout_secs: u64,
}

// ── Default implementations ─────────────────────────────────────

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            cache_dir: None,
            log_level: "warn".to_string(),
        }
    }
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            theme: "dark".to_string(),
            show_preview: true,
        }
    }
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            timeout_secs: 30,
        }
    }
}

// ── Load / save ─────────────────────────────────────────────────

/// Load configuration, searching standard locations.
///
/// Returns the default configuration if no file is found or on parse error.
pub fn load_config() -> Config {
    if let Some(path) = config_file_path() {
        if path.exists() {
            match std::fs::read_to_string(&path) {
                Ok(contents) => match toml::from_str::<Config>(&contents) {
                    Ok(cfg) => {
                        tracing::info!(path = %path.display(), "Loaded config");
                        return cfg;
                    }
                    Err(e) => {
                        tracing::warn!(
                            path = %path.display(),
                            error = %e,
                            "Failed to parse config, using defaults"
                        );
                    }
                },
                Err(e) => {
                    tracing::warn!(
                        path = %path.display(),
                        error = %e,
                        "Failed to read config file, using defaults"
                    );
                }
            }
        }
    }
    Config::default()
}

/// Save configuration to the standard location.
pub fn save_config(config: &Config) -> anyhow::Result<()> {
    let path = config_file_path()
        .ok_or_else(|| anyhow::anyhow!("Could not determine config file path"))?;

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    let contents = toml::to_string_pretty(config)?;
    std::fs::write(&path, contents)?;
    tracing::info!(path = %path.display(), "Saved config");
    Ok(())
}

/// Determine the config file path (checking env var first, then standard dirs).
pub fn config_file_path() -> Option<PathBuf> {
    // 1. Environment variable override
    if let Ok(env_path) = std::env::var("OUTBOXSHELL_CONFIG") {
        return Some(PathBuf::from(env_path));
    }

    // 2. Standard config directory
    dirs::config_dir().map(|d| d.join("outboxshell").join("config.toml"))
}

/// Return the cache directory for previews, logs, etc.
pub fn cache_dir(config: &Config) -> PathBuf {
    if let Some(ref dir) = config.general.cache_dir {
        return dir.clone();
    }
    dirs::cache_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("outboxshell")
}

/// Return the directory where transient attachment previews are written.
pub fn preview_dir(config: &Config) -> PathBuf {
    cache_dir(config).join("previews")
}

/// Return the log file path.
pub fn log_file_path(config: &Config) -> PathBuf {
    cache_dir(config).join("outboxshell.log")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let cfg = Config::default();
        assert_eq!(cfg.backend.endpoint, DEFAULT_ENDPOINT);
        assert_eq!(cfg.backend.timeout_secs, 30);
        assert_eq!(cfg.display.theme, "dark");
        assert!(cfg.display.show_preview);
        assert_eq!(cfg.general.log_level, "warn");
    }

    #[test]
    fn test_serialize_deserialize_roundtrip() {
        let cfg = Config::default();
        let toml_str = toml::to_string_pretty(&cfg).expect("serialize");
        let parsed: Config = toml::from_str(&toml_str).expect("deserialize");
        assert_eq!(parsed.backend.endpoint, cfg.backend.endpoint);
        assert_eq!(parsed.display.theme, cfg.display.theme);
        assert_eq!(parsed.backend.timeout_secs, cfg.backend.timeout_secs);
    }

    #[test]
    fn test_partial_config_uses_defaults() {
        let partial = r#"
[backend]
endpoint = "https://mail.example.com/api/send/"

[display]
theme = "light"
"#;
        let cfg: Config = toml::from_str(partial).expect("parse partial");
        assert_eq!(cfg.backend.endpoint, "https://mail.example.com/api/send/");
        assert_eq!(cfg.display.theme, "light");
        // Other fields use defaults
        assert_eq!(cfg.backend.timeout_secs, 30);
        assert_eq!(cfg.general.log_level, "warn");
    }

    #[test]
    fn test_preview_dir_under_cache_dir() {
        let mut cfg = Config::default();
        cfg.general.cache_dir = Some(PathBuf::from("/tmp/obx-cache"));
        assert_eq!(cache_dir(&cfg), PathBuf::from("/tmp/obx-cache"));
        assert_eq!(preview_dir(&cfg), PathBuf::from("/tmp/obx-cache/previews"));
    }
}
