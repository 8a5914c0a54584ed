//! Shared helpers for command handlers.

use chrono::{DateTime, Utc};
use owo_colors::OwoColorize;

use cellwatch_core::analytics::sparkline;
use cellwatch_core::{Monitor, StatusTier};

use crate::error::CliError;

/// Parse an optional `--hour` style flag, falling back to the backend's
/// latest ingested slot (seeded on connect), then to "now".
pub fn resolve_hour(flag: Option<&str>, monitor: &Monitor) -> Result<DateTime<Utc>, CliError> {
    match flag {
        Some(raw) => parse_datetime(raw, "hour"),
        None => Ok(monitor.observed_hour().unwrap_or_else(Utc::now)),
    }
}

/// Parse a required RFC 3339 flag value.
pub fn parse_datetime(raw: &str, field: &str) -> Result<DateTime<Utc>, CliError> {
    DateTime::parse_from_rfc3339(raw)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|e| CliError::Validation {
            field: field.into(),
            reason: format!("expected RFC 3339 datetime, got '{raw}' ({e})"),
        })
}

/// Prompt for confirmation, auto-approving if `--yes` was passed.
pub fn confirm(message: &str, yes_flag: bool) -> Result<bool, CliError> {
    if yes_flag {
        return Ok(true);
    }
    let confirmed = dialoguer::Confirm::new()
        .with_prompt(message)
        .default(false)
        .interact()
        .map_err(|e| CliError::Io(std::io::Error::other(e)))?;
    Ok(confirmed)
}

/// Tier label with terminal coloring.
pub fn tier_label(tier: StatusTier, color: bool) -> String {
    tier_paint(&tier.to_string(), tier, color)
}

/// Paint arbitrary text in a tier's color.
pub fn tier_paint(text: &str, tier: StatusTier, color: bool) -> String {
    if !color {
        return text.to_owned();
    }
    match tier {
        StatusTier::Normal => text.green().to_string(),
        StatusTier::Warning => text.yellow().to_string(),
        StatusTier::Critical => text.red().to_string(),
    }
}

/// Block glyphs for one-line sparklines, lowest to highest.
const SPARK_GLYPHS: [char; 8] = ['▁', '▂', '▃', '▄', '▅', '▆', '▇', '█'];

/// Render a series as a compact unicode sparkline strip.
///
/// Normalization (including the flat-series baseline case) comes from
/// the analytics layer; this only maps vertical positions to glyphs.
pub fn spark(values: &[f64]) -> Result<String, CliError> {
    let height = (SPARK_GLYPHS.len() - 1) as f64;
    let points = sparkline::normalize(values, values.len() as f64, height)?;
    Ok(points
        .iter()
        .map(|p| {
            let level = (height - p.y).round().clamp(0.0, height) as usize;
            SPARK_GLYPHS[level]
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spark_renders_one_glyph_per_sample() {
        let strip = spark(&[0.0, 5.0, 10.0]).expect("non-empty");
        assert_eq!(strip.chars().count(), 3);
        assert!(strip.starts_with('▁'));
        assert!(strip.ends_with('█'));
    }

    #[test]
    fn spark_flat_series_is_all_baseline() {
        let strip = spark(&[4.0, 4.0, 4.0, 4.0]).expect("non-empty");
        assert_eq!(strip, "▁▁▁▁");
    }

    #[test]
    fn parse_datetime_rejects_garbage() {
        assert!(parse_datetime("yesterday", "hour").is_err());
        assert!(parse_datetime("2013-11-04T10:00:00+00:00", "hour").is_ok());
    }
}
