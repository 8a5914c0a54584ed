//! All possible UI actions. Actions are the sole mechanism for state mutation.

use std::sync::Arc;

use cellwatch_core::{
    Alert, CellActivity, CellCongestion, HourlySummary, MobilityFlow, NetworkStats, ProvinceFlow,
};

use crate::screen::ScreenId;

/// Every state transition in the TUI is expressed as an Action.
#[derive(Debug, Clone)]
pub enum Action {
    // ── Lifecycle ──────────────────────────────────────────────────
    Quit,
    Tick,
    Render,
    Resize(u16, u16),

    // ── Navigation ────────────────────────────────────────────────
    SwitchScreen(ScreenId),
    GoBack,

    // ── Data events (from cellwatch-core streams) ─────────────────
    CellsUpdated(Arc<Vec<Arc<CellActivity>>>),
    AlertsUpdated(Arc<Vec<Arc<Alert>>>),
    CongestionUpdated(Arc<Vec<Arc<CellCongestion>>>),
    FlowsUpdated(Arc<Vec<Arc<MobilityFlow>>>),
    ProvincesUpdated(Arc<Vec<Arc<ProvinceFlow>>>),
    StatsUpdated(NetworkStats),
    SummaryUpdated(HourlySummary),

    // ── Connection status ─────────────────────────────────────────
    Connected,
    Disconnected(String),
    Connecting,

    // ── Commands ──────────────────────────────────────────────────
    /// Resolve the alert with this backend id.
    RequestResolveAlert(String),

    // ── Help ──────────────────────────────────────────────────────
    ToggleHelp,

    // ── Table operations ──────────────────────────────────────────
    ScrollUp,
    ScrollDown,
    ScrollToTop,
    ScrollToBottom,
}
