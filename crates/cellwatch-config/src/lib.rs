//! Shared configuration for the cellwatch CLI and TUI.
//!
//! TOML profiles, token resolution (keyring + env + plaintext), and
//! translation to `cellwatch_core::MonitorConfig`. Both binaries depend
//! on this crate — the CLI adds flag-aware wrappers on top.

use std::collections::HashMap;
use std::path::PathBuf;
use std::time::Duration;

use directories::ProjectDirs;
use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use secrecy::SecretString;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use cellwatch_core::{MonitorConfig, Thresholds};

// ── Error ───────────────────────────────────────────────────────────

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid {field}: {reason}")]
    Validation { field: String, reason: String },

    #[error("failed to serialize config: {0}")]
    Serialization(#[from] toml::ser::Error),

    #[error("config loading failed: {0}")]
    Figment(Box<figment::Error>),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<figment::Error> for ConfigError {
    fn from(err: figment::Error) -> Self {
        Self::Figment(Box::new(err))
    }
}

// ── TOML config structs ─────────────────────────────────────────────

/// Top-level TOML configuration shared by CLI and TUI.
#[derive(Debug, Deserialize, Serialize)]
pub struct Config {
    /// Default profile name.
    pub default_profile: Option<String>,

    /// Global defaults.
    #[serde(default)]
    pub defaults: Defaults,

    /// Named backend profiles.
    #[serde(default)]
    pub profiles: HashMap<String, Profile>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_profile: Some("default".into()),
            defaults: Defaults::default(),
            profiles: HashMap::new(),
        }
    }
}

#[derive(Debug, Deserialize, Serialize)]
pub struct Defaults {
    #[serde(default = "default_output")]
    pub output: String,

    #[serde(default = "default_color")]
    pub color: String,

    #[serde(default = "default_timeout")]
    pub timeout: u64,

    /// Default warn cut point for congestion classification.
    ///
    /// The classifier itself carries no defaults; 70/90 are the shipped
    /// per-deployment defaults and each page may override them.
    #[serde(default = "default_warn")]
    pub warn: f64,

    /// Default crit cut point for congestion classification.
    #[serde(default = "default_crit")]
    pub crit: f64,
}

impl Default for Defaults {
    fn default() -> Self {
        Self {
            output: default_output(),
            color: default_color(),
            timeout: default_timeout(),
            warn: default_warn(),
            crit: default_crit(),
        }
    }
}

fn default_output() -> String {
    "table".into()
}
fn default_color() -> String {
    "auto".into()
}
fn default_timeout() -> u64 {
    30
}
fn default_warn() -> f64 {
    70.0
}
fn default_crit() -> f64 {
    90.0
}

/// A named backend profile.
#[derive(Debug, Deserialize, Serialize)]
pub struct Profile {
    /// Backend base URL including the API prefix
    /// (e.g., "http://localhost:8080/api").
    pub api_url: String,

    /// Bearer token (plaintext — prefer keyring or env var).
    pub api_token: Option<String>,

    /// Environment variable name containing the bearer token.
    pub api_token_env: Option<String>,

    /// Override timeout (seconds).
    pub timeout: Option<u64>,

    /// Override warn threshold.
    pub warn: Option<f64>,

    /// Override crit threshold.
    pub crit: Option<f64>,

    /// Background refresh interval for the TUI (seconds, 0 = never).
    pub refresh_interval: Option<u64>,

    /// Row cap for congestion queries.
    pub congestion_limit: Option<u32>,
}

// ── Config file path ────────────────────────────────────────────────

/// Resolve the config file path via XDG / platform conventions.
pub fn config_path() -> PathBuf {
    ProjectDirs::from("io", "cellwatch", "cellwatch").map_or_else(
        || {
            let mut p = dirs_fallback();
            p.push("config.toml");
            p
        },
        |dirs| dirs.config_dir().join("config.toml"),
    )
}

fn dirs_fallback() -> PathBuf {
    let mut p = PathBuf::from(std::env::var("HOME").unwrap_or_else(|_| ".".into()));
    p.push(".config");
    p.push("cellwatch");
    p
}

// ── Config loading ──────────────────────────────────────────────────

/// Load the full Config from file + environment.
pub fn load_config() -> Result<Config, ConfigError> {
    let path = config_path();

    let figment = Figment::new()
        .merge(Serialized::defaults(Config::default()))
        .merge(Toml::file(&path))
        .merge(Env::prefixed("CELLWATCH_").split("_"));

    let config: Config = figment.extract()?;
    Ok(config)
}

/// Load config, returning a default if the file doesn't exist.
pub fn load_config_or_default() -> Config {
    load_config().unwrap_or_default()
}

// ── Config saving ───────────────────────────────────────────────────

/// Serialize config to TOML and write to the canonical config path.
pub fn save_config(cfg: &Config) -> Result<(), ConfigError> {
    let path = config_path();
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let toml_str = toml::to_string_pretty(cfg)?;
    std::fs::write(&path, toml_str)?;
    Ok(())
}

// ── Token resolution ────────────────────────────────────────────────

/// Resolve the bearer token from the credential chain.
///
/// The backend may run open (no auth), so every link in the chain is
/// optional: profile's `api_token_env` → system keyring → plaintext in
/// the profile. `None` means "send no Authorization header".
pub fn resolve_api_token(profile: &Profile, profile_name: &str) -> Option<SecretString> {
    // 1. Profile's api_token_env → env var lookup
    if let Some(ref env_name) = profile.api_token_env {
        if let Ok(val) = std::env::var(env_name) {
            return Some(SecretString::from(val));
        }
    }

    // 2. System keyring
    if let Ok(entry) = keyring::Entry::new("cellwatch", &format!("{profile_name}/api-token")) {
        if let Ok(secret) = entry.get_password() {
            return Some(SecretString::from(secret));
        }
    }

    // 3. Plaintext in config
    profile
        .api_token
        .as_ref()
        .map(|token| SecretString::from(token.clone()))
}

/// Store the bearer token in the system keyring.
pub fn store_api_token(profile_name: &str, token: &str) -> Result<(), ConfigError> {
    let entry = keyring::Entry::new("cellwatch", &format!("{profile_name}/api-token")).map_err(
        |e| ConfigError::Validation {
            field: "keyring".into(),
            reason: e.to_string(),
        },
    )?;
    entry
        .set_password(token)
        .map_err(|e| ConfigError::Validation {
            field: "keyring".into(),
            reason: e.to_string(),
        })
}

// ── Boundary translation ────────────────────────────────────────────

/// Build a `MonitorConfig` from a profile — no CLI flag overrides.
///
/// Suitable for the TUI and other non-CLI consumers. Sets a TUI-friendly
/// default refresh interval of 30s when the profile doesn't specify one.
pub fn profile_to_monitor_config(
    profile: &Profile,
    profile_name: &str,
    defaults: &Defaults,
) -> Result<MonitorConfig, ConfigError> {
    let api_url: url::Url = profile
        .api_url
        .parse()
        .map_err(|_| ConfigError::Validation {
            field: "api_url".into(),
            reason: format!("invalid URL: {}", profile.api_url),
        })?;

    let warn = profile.warn.unwrap_or(defaults.warn);
    let crit = profile.crit.unwrap_or(defaults.crit);
    let thresholds = Thresholds::new(warn, crit).map_err(|_| ConfigError::Validation {
        field: "thresholds".into(),
        reason: format!("expected 0 <= warn < crit <= 100, got warn={warn}, crit={crit}"),
    })?;

    let timeout = Duration::from_secs(profile.timeout.unwrap_or(defaults.timeout));

    Ok(MonitorConfig {
        api_url,
        api_token: resolve_api_token(profile, profile_name),
        timeout,
        refresh_interval_secs: profile.refresh_interval.unwrap_or(30),
        thresholds,
        congestion_limit: profile.congestion_limit.unwrap_or(100),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn profile(api_url: &str) -> Profile {
        Profile {
            api_url: api_url.into(),
            api_token: None,
            api_token_env: None,
            timeout: None,
            warn: None,
            crit: None,
            refresh_interval: None,
            congestion_limit: None,
        }
    }

    #[test]
    fn defaults_carry_the_shipped_thresholds() {
        let d = Defaults::default();
        assert_eq!(d.warn, 70.0);
        assert_eq!(d.crit, 90.0);
    }

    #[test]
    fn profile_translates_with_defaults() {
        let cfg = profile_to_monitor_config(
            &profile("http://localhost:8080/api"),
            "default",
            &Defaults::default(),
        )
        .expect("valid profile");
        assert_eq!(cfg.thresholds.warn(), 70.0);
        assert_eq!(cfg.congestion_limit, 100);
        assert_eq!(cfg.timeout, Duration::from_secs(30));
    }

    #[test]
    fn inverted_profile_thresholds_are_rejected() {
        let mut p = profile("http://localhost:8080/api");
        p.warn = Some(95.0);
        let err = profile_to_monitor_config(&p, "default", &Defaults::default())
            .expect_err("warn above crit");
        assert!(matches!(err, ConfigError::Validation { .. }));
    }

    #[test]
    fn bad_url_is_rejected() {
        let err = profile_to_monitor_config(&profile("not a url"), "default", &Defaults::default())
            .expect_err("invalid URL");
        assert!(matches!(err, ConfigError::Validation { .. }));
    }
}
