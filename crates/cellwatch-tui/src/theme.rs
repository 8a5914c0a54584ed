//! Control-room palette and semantic styling for the TUI.

use ratatui::style::{Color, Modifier, Style};

use cellwatch_core::{AlertSeverity, StatusTier};

// ── Core Palette ──────────────────────────────────────────────────────

pub const SIGNAL_GREEN: Color = Color::Rgb(80, 250, 123); // #50fa7b
pub const AMBER: Color = Color::Rgb(241, 250, 140); // #f1fa8c
pub const ALERT_RED: Color = Color::Rgb(255, 99, 99); // #ff6363
pub const ACCENT_CYAN: Color = Color::Rgb(128, 255, 234); // #80ffea
pub const FLOW_BLUE: Color = Color::Rgb(139, 233, 253); // #8be9fd
pub const HOT_ORANGE: Color = Color::Rgb(255, 184, 108); // #ffb86c

// ── Extended Palette ──────────────────────────────────────────────────

pub const DIM_WHITE: Color = Color::Rgb(189, 193, 207); // #bdc1cf
pub const GRID_GRAY: Color = Color::Rgb(98, 114, 164); // #6272a4
pub const BG_HIGHLIGHT: Color = Color::Rgb(40, 42, 54); // #282a36
pub const BG_DARK: Color = Color::Rgb(30, 31, 41); // #1e1f29

// ── Semantic Styles ───────────────────────────────────────────────────

/// Title text for blocks/panels.
pub fn title_style() -> Style {
    Style::default()
        .fg(ACCENT_CYAN)
        .add_modifier(Modifier::BOLD)
}

/// Border for a focused panel.
pub fn border_focused() -> Style {
    Style::default().fg(ACCENT_CYAN)
}

/// Border for an unfocused panel.
pub fn border_default() -> Style {
    Style::default().fg(GRID_GRAY)
}

/// Table header row.
pub fn table_header() -> Style {
    Style::default()
        .fg(ACCENT_CYAN)
        .add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
}

/// Normal table row text.
pub fn table_row() -> Style {
    Style::default().fg(DIM_WHITE)
}

/// Selected / highlighted table row.
pub fn table_selected() -> Style {
    Style::default()
        .fg(ACCENT_CYAN)
        .bg(BG_HIGHLIGHT)
        .add_modifier(Modifier::BOLD)
}

/// Active tab in the tab bar.
pub fn tab_active() -> Style {
    Style::default()
        .fg(ACCENT_CYAN)
        .add_modifier(Modifier::BOLD)
}

/// Inactive tab in the tab bar.
pub fn tab_inactive() -> Style {
    Style::default().fg(DIM_WHITE)
}

/// Key hint text (e.g., "q quit  ? help").
pub fn key_hint() -> Style {
    Style::default().fg(GRID_GRAY)
}

/// Key hint key character.
pub fn key_hint_key() -> Style {
    Style::default()
        .fg(ACCENT_CYAN)
        .add_modifier(Modifier::BOLD)
}

// ── Tier / severity colors ────────────────────────────────────────────
//
// The single tier-to-color mapping every screen uses, so congestion
// tables, gauges, and heatmap shading agree on what "critical" looks
// like.

/// Color for a congestion status tier.
pub fn tier_color(tier: StatusTier) -> Color {
    match tier {
        StatusTier::Normal => SIGNAL_GREEN,
        StatusTier::Warning => AMBER,
        StatusTier::Critical => ALERT_RED,
    }
}

/// Style for a congestion status tier.
pub fn tier_style(tier: StatusTier) -> Style {
    Style::default().fg(tier_color(tier))
}

/// Color for an alert severity.
pub fn severity_color(severity: AlertSeverity) -> Color {
    match severity {
        AlertSeverity::Critical => ALERT_RED,
        AlertSeverity::High => HOT_ORANGE,
        AlertSeverity::Medium => AMBER,
        AlertSeverity::Low => FLOW_BLUE,
    }
}

/// Style for an alert severity.
pub fn severity_style(severity: AlertSeverity) -> Style {
    Style::default().fg(severity_color(severity))
}
