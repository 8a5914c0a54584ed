//! CLI-side configuration resolution: profiles + flag overrides.
//!
//! Wraps `cellwatch_config` with `GlobalOpts`-aware resolution. This is
//! the single boundary where CLI flags cross into core types.

use std::time::Duration;

use secrecy::SecretString;

use cellwatch_config::{Config, Defaults, Profile};
use cellwatch_core::{MonitorConfig, Thresholds};

use crate::cli::GlobalOpts;
use crate::error::CliError;

/// Fallback base URL when neither a profile nor `--api-url` is given;
/// matches the backend's development default.
const DEFAULT_API_URL: &str = "http://localhost:8080/api";

/// Resolve the active profile name from CLI flags and config.
pub fn active_profile_name(global: &GlobalOpts, config: &Config) -> String {
    global
        .profile
        .clone()
        .or_else(|| config.default_profile.clone())
        .unwrap_or_else(|| "default".into())
}

/// Build a `MonitorConfig` from the config file, profile, and CLI
/// overrides.
///
/// A missing profile is not fatal: the CLI can run against `--api-url`
/// (or the development default) with no config file at all.
pub fn resolve(global: &GlobalOpts, config: &Config) -> Result<MonitorConfig, CliError> {
    let profile_name = active_profile_name(global, config);

    if let Some(profile) = config.profiles.get(&profile_name) {
        return resolve_profile(profile, &profile_name, global, &config.defaults);
    }

    // --profile explicitly named a profile that doesn't exist: error out
    // rather than silently hitting the default backend.
    if global.profile.is_some() {
        let mut available: Vec<&str> = config.profiles.keys().map(String::as_str).collect();
        available.sort_unstable();
        return Err(CliError::ProfileNotFound {
            name: profile_name,
            available: available.join(", "),
        });
    }

    resolve_flags_only(global, &config.defaults)
}

/// Translate a `Profile` + global flags into a `MonitorConfig`.
fn resolve_profile(
    profile: &Profile,
    profile_name: &str,
    global: &GlobalOpts,
    defaults: &Defaults,
) -> Result<MonitorConfig, CliError> {
    let mut cfg = cellwatch_config::profile_to_monitor_config(profile, profile_name, defaults)?;

    // Flag overrides (flag > env > profile)
    if let Some(ref url_str) = global.api_url {
        cfg.api_url = parse_url(url_str)?;
    }
    if let Some(ref token) = global.api_token {
        cfg.api_token = Some(SecretString::from(token.clone()));
    }
    cfg.timeout = Duration::from_secs(global.timeout);

    // The CLI is one-shot; never spin a background refresh task.
    cfg.refresh_interval_secs = 0;

    Ok(cfg)
}

/// Build a `MonitorConfig` from flags and defaults alone (no profile).
fn resolve_flags_only(global: &GlobalOpts, defaults: &Defaults) -> Result<MonitorConfig, CliError> {
    let url_str = global.api_url.as_deref().unwrap_or(DEFAULT_API_URL);

    let thresholds =
        Thresholds::new(defaults.warn, defaults.crit).map_err(|_| CliError::Validation {
            field: "thresholds".into(),
            reason: format!(
                "expected 0 <= warn < crit <= 100, got warn={}, crit={}",
                defaults.warn, defaults.crit
            ),
        })?;

    Ok(MonitorConfig {
        api_url: parse_url(url_str)?,
        api_token: global
            .api_token
            .as_ref()
            .map(|t| SecretString::from(t.clone())),
        timeout: Duration::from_secs(global.timeout),
        refresh_interval_secs: 0,
        thresholds,
        congestion_limit: 100,
    })
}

fn parse_url(url_str: &str) -> Result<url::Url, CliError> {
    url_str.parse().map_err(|_| CliError::Validation {
        field: "api-url".into(),
        reason: format!("invalid URL: {url_str}"),
    })
}

/// Default thresholds for this invocation, honoring per-command flag
/// overrides over config defaults.
pub fn thresholds_for(
    warn_flag: Option<f64>,
    crit_flag: Option<f64>,
    defaults: &Defaults,
) -> Result<Thresholds, CliError> {
    let warn = warn_flag.unwrap_or(defaults.warn);
    let crit = crit_flag.unwrap_or(defaults.crit);
    Thresholds::new(warn, crit).map_err(CliError::Analytics)
}
