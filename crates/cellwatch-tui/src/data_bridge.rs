//! Data bridge — connects [`Monitor`] streams to TUI actions.
//!
//! Runs as a background task: subscribes to entity streams, summary
//! watches, and connection state from the monitor, forwarding every
//! change as an [`Action`] through the TUI's action channel.

use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;
use tracing::{debug, warn};

use cellwatch_core::{ConnectionState, Monitor};

use crate::action::Action;

/// Connect to the backend and forward reactive data into the TUI.
///
/// Sends initial data snapshots after connecting, then loops forwarding
/// every entity change and connection-state transition as an [`Action`].
/// Shuts down cleanly on cancellation.
pub async fn spawn_data_bridge(
    monitor: Monitor,
    action_tx: mpsc::UnboundedSender<Action>,
    cancel: CancellationToken,
) {
    let _ = action_tx.send(Action::Connecting);

    if let Err(e) = monitor.connect().await {
        warn!(error = %e, "failed to connect to backend");
        let _ = action_tx.send(Action::Disconnected(format!("{e}")));
        return;
    }

    let _ = action_tx.send(Action::Connected);

    // Subscribe to entity streams
    let mut cells = monitor.cells();
    let mut alerts = monitor.alerts();
    let mut congestion = monitor.congestion();
    let mut flows = monitor.flows();
    let mut provinces = monitor.provinces();
    let mut stats = monitor.store().subscribe_network_stats();
    let mut summary = monitor.store().subscribe_hourly_summary();
    let mut conn_state = monitor.connection_state();

    // Push initial snapshots so screens have data immediately
    let _ = action_tx.send(Action::CellsUpdated(cells.current().clone()));
    let _ = action_tx.send(Action::AlertsUpdated(alerts.current().clone()));
    let _ = action_tx.send(Action::CongestionUpdated(congestion.current().clone()));
    let _ = action_tx.send(Action::FlowsUpdated(flows.current().clone()));
    let _ = action_tx.send(Action::ProvincesUpdated(provinces.current().clone()));
    if let Some(s) = monitor.store().network_stats() {
        let _ = action_tx.send(Action::StatsUpdated(s));
    }
    if let Some(s) = monitor.store().hourly_summary() {
        let _ = action_tx.send(Action::SummaryUpdated(s));
    }

    // Stream loop — forward every change until cancelled
    loop {
        tokio::select! {
            biased;

            () = cancel.cancelled() => break,

            Some(c) = cells.changed() => {
                let _ = action_tx.send(Action::CellsUpdated(c));
            }
            Some(a) = alerts.changed() => {
                let _ = action_tx.send(Action::AlertsUpdated(a));
            }
            Some(c) = congestion.changed() => {
                let _ = action_tx.send(Action::CongestionUpdated(c));
            }
            Some(f) = flows.changed() => {
                let _ = action_tx.send(Action::FlowsUpdated(f));
            }
            Some(p) = provinces.changed() => {
                let _ = action_tx.send(Action::ProvincesUpdated(p));
            }
            Ok(()) = stats.changed() => {
                if let Some(s) = stats.borrow_and_update().clone() {
                    let _ = action_tx.send(Action::StatsUpdated(s));
                }
            }
            Ok(()) = summary.changed() => {
                if let Some(s) = summary.borrow_and_update().clone() {
                    let _ = action_tx.send(Action::SummaryUpdated(s));
                }
            }
            Ok(()) = conn_state.changed() => {
                let state = conn_state.borrow_and_update().clone();
                match state {
                    ConnectionState::Connected => {
                        let _ = action_tx.send(Action::Connected);
                    }
                    ConnectionState::Disconnected => {
                        let _ = action_tx.send(Action::Disconnected("disconnected".into()));
                    }
                    ConnectionState::Failed => {
                        let _ = action_tx.send(Action::Disconnected("connection failed".into()));
                    }
                    ConnectionState::Connecting => {
                        let _ = action_tx.send(Action::Connecting);
                    }
                }
            }
        }
    }

    debug!("data bridge shut down");
}
