// ── Mutation commands ──
//
// The three write paths the backend exposes, expressed as commands routed
// through the Monitor's processor task. Reads never go through here.

use chrono::{DateTime, Utc};
use tokio::sync::oneshot;

use crate::analytics::Thresholds;
use crate::error::CoreError;
use crate::model::Alert;

/// A mutation to execute against the backend.
#[derive(Debug, Clone)]
pub enum Command {
    /// Mark one alert resolved.
    ResolveAlert { id: String },

    /// Ask the backend to scan one hour slot and raise congestion alerts
    /// for cells whose score crosses the supplied thresholds.
    GenerateCongestionAlerts {
        hour: DateTime<Utc>,
        limit: u32,
        thresholds: Thresholds,
    },

    /// Trigger ingestion of one hour slot of source data. `None` lets the
    /// backend advance to its next unprocessed slot.
    IngestSlot { datetime: Option<DateTime<Utc>> },
}

/// Result payload of a successfully executed command.
#[derive(Debug, Clone)]
pub enum CommandResult {
    /// Command succeeded with nothing to report.
    Ok,
    /// Congestion alerts the backend created.
    AlertsGenerated(Vec<Alert>),
    /// Receipt for a triggered slot ingest.
    SlotIngested {
        slot: String,
        sent_events: u64,
    },
}

/// Internal envelope pairing a command with its response channel.
pub(crate) struct CommandEnvelope {
    pub(crate) command: Command,
    pub(crate) response_tx: oneshot::Sender<Result<CommandResult, CoreError>>,
}
