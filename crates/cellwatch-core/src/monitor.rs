// ── Monitor abstraction ──
//
// Full lifecycle management for a telemetry backend connection.
// Handles connectivity checks, background refresh, command routing,
// and reactive data streaming through the DataStore.

use std::sync::Arc;
use std::time::Duration;

use chrono::{DateTime, Utc};
use tokio::sync::{Mutex, mpsc, watch};
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};

use cellwatch_api::types::TimeStep;
use cellwatch_api::{ApiClient, TransportConfig};

use crate::analytics::Thresholds;
use crate::command::{Command, CommandEnvelope, CommandResult};
use crate::config::MonitorConfig;
use crate::error::CoreError;
use crate::model::{
    Alert, CellActivity, CellCongestion, CellDetails, HourlySummary, MetricSample, MobilityFlow,
    NetworkStats, ProvinceFlow, TopCell,
};
use crate::store::DataStore;
use crate::stream::EntityStream;

const COMMAND_CHANNEL_SIZE: usize = 64;

// ── ConnectionState ──────────────────────────────────────────────

/// Connection state observable by consumers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConnectionState {
    Disconnected,
    Connecting,
    Connected,
    Failed,
}

// ── Monitor ──────────────────────────────────────────────────────

/// The main entry point for consumers.
///
/// Cheaply cloneable via `Arc<MonitorInner>`. Manages the full
/// connection lifecycle: connectivity validation, background data
/// refresh, command routing, and reactive entity streaming. Every
/// dependency is injected through [`MonitorConfig`] -- there is no
/// ambient global state to reach into.
#[derive(Clone)]
pub struct Monitor {
    inner: Arc<MonitorInner>,
}

struct MonitorInner {
    config: MonitorConfig,
    store: Arc<DataStore>,
    connection_state: watch::Sender<ConnectionState>,
    /// The hour slot the dashboards are currently looking at. Defaults to
    /// the backend's latest ingested slot on connect.
    observed_hour: watch::Sender<Option<DateTime<Utc>>>,
    command_tx: mpsc::Sender<CommandEnvelope>,
    command_rx: Mutex<Option<mpsc::Receiver<CommandEnvelope>>>,
    cancel: CancellationToken,
    client: Mutex<Option<ApiClient>>,
    task_handles: Mutex<Vec<JoinHandle<()>>>,
}

impl Monitor {
    /// Create a new Monitor from configuration. Does NOT connect --
    /// call [`connect()`](Self::connect) to validate connectivity and
    /// start background tasks.
    pub fn new(config: MonitorConfig) -> Self {
        let store = Arc::new(DataStore::new());
        let (connection_state, _) = watch::channel(ConnectionState::Disconnected);
        let (observed_hour, _) = watch::channel(None);
        let (command_tx, command_rx) = mpsc::channel(COMMAND_CHANNEL_SIZE);
        let cancel = CancellationToken::new();

        Self {
            inner: Arc::new(MonitorInner {
                config,
                store,
                connection_state,
                observed_hour,
                command_tx,
                command_rx: Mutex::new(Some(command_rx)),
                cancel,
                client: Mutex::new(None),
                task_handles: Mutex::new(Vec::new()),
            }),
        }
    }

    /// Access the monitor configuration.
    pub fn config(&self) -> &MonitorConfig {
        &self.inner.config
    }

    /// Access the underlying DataStore.
    pub fn store(&self) -> &Arc<DataStore> {
        &self.inner.store
    }

    // ── Connection lifecycle ─────────────────────────────────────

    /// Connect to the backend.
    ///
    /// Builds the HTTP client, validates connectivity via `/stats`,
    /// seeds the observed hour from the backend's latest ingested slot,
    /// performs an initial data refresh, and spawns background tasks
    /// (periodic refresh, command processor).
    pub async fn connect(&self) -> Result<(), CoreError> {
        let _ = self
            .inner
            .connection_state
            .send(ConnectionState::Connecting);

        let config = &self.inner.config;
        let transport = TransportConfig {
            timeout: Some(config.timeout),
            bearer_token: config.api_token.clone(),
        };

        let client = match ApiClient::new(config.api_url.clone(), &transport) {
            Ok(client) => client,
            Err(e) => {
                let _ = self.inner.connection_state.send(ConnectionState::Failed);
                return Err(e.into());
            }
        };

        // Connectivity check doubles as the initial counters fetch.
        let stats: NetworkStats = match client.network_stats().await {
            Ok(dto) => dto.into(),
            Err(e) => {
                let _ = self.inner.connection_state.send(ConnectionState::Failed);
                return Err(e.into());
            }
        };
        debug!(total_cells = stats.total_cells, "backend reachable");

        if self.inner.observed_hour.borrow().is_none() {
            let _ = self.inner.observed_hour.send(stats.latest);
        }
        self.inner.store.apply_network_stats(stats);

        *self.inner.client.lock().await = Some(client);

        // Initial data load
        self.full_refresh().await?;

        // Spawn background tasks
        let mut handles = self.inner.task_handles.lock().await;

        if let Some(rx) = self.inner.command_rx.lock().await.take() {
            let monitor = self.clone();
            handles.push(tokio::spawn(command_processor_task(monitor, rx)));
        }

        let interval_secs = config.refresh_interval_secs;
        if interval_secs > 0 {
            let monitor = self.clone();
            let cancel = self.inner.cancel.clone();
            handles.push(tokio::spawn(refresh_task(monitor, interval_secs, cancel)));
        }

        let _ = self.inner.connection_state.send(ConnectionState::Connected);
        info!("connected to telemetry backend");
        Ok(())
    }

    /// Disconnect from the backend.
    ///
    /// Cancels background tasks and resets the connection state to
    /// [`Disconnected`](ConnectionState::Disconnected).
    pub async fn disconnect(&self) {
        self.inner.cancel.cancel();

        let mut handles = self.inner.task_handles.lock().await;
        for handle in handles.drain(..) {
            let _ = handle.await;
        }

        *self.inner.client.lock().await = None;
        let _ = self
            .inner
            .connection_state
            .send(ConnectionState::Disconnected);
        debug!("disconnected");
    }

    /// Fetch all dashboard data for the observed hour and update the
    /// DataStore.
    ///
    /// Pulls the activity snapshot, alerts, congestion scores, mobility
    /// flows, province summaries, and the hourly summary concurrently,
    /// converts them to domain types, and applies a full-replace
    /// snapshot.
    pub async fn full_refresh(&self) -> Result<(), CoreError> {
        let client_guard = self.inner.client.lock().await;
        let client = client_guard
            .as_ref()
            .ok_or(CoreError::MonitorDisconnected)?;

        let hour = self.observed_hour().unwrap_or_else(Utc::now);
        let thresholds = self.inner.config.thresholds;
        let limit = self.inner.config.congestion_limit;

        // Fetch in parallel
        let (cells_res, alerts_res, congestion_res, flows_res, provinces_res, summary_res) = tokio::join!(
            client.heatmap(hour),
            client.alerts(None),
            client.congestion(hour, limit, thresholds.warn(), thresholds.crit()),
            client.mobility_flows(hour, None, None),
            client.provinces(),
            client.hourly_summary(hour),
        );

        let cells: Vec<CellActivity> = cells_res?.into_iter().map(CellActivity::from).collect();
        let alerts: Vec<Alert> = alerts_res?.into_iter().map(Alert::from).collect();
        let congestion: Vec<CellCongestion> = congestion_res?
            .into_iter()
            .map(CellCongestion::from)
            .collect();
        let flows: Vec<MobilityFlow> = flows_res?.into_iter().map(MobilityFlow::from).collect();
        let provinces: Vec<ProvinceFlow> =
            provinces_res?.into_iter().map(ProvinceFlow::from).collect();
        let summary: HourlySummary = summary_res?.into();

        // Drop the lock before writing to the store
        drop(client_guard);

        self.inner
            .store
            .apply_snapshot(cells, alerts, congestion, flows, provinces);
        self.inner.store.apply_hourly_summary(summary);

        debug!(
            cells = self.inner.store.cell_count(),
            alerts = self.inner.store.alert_count(),
            "data refresh complete"
        );

        Ok(())
    }

    // ── Observed hour ────────────────────────────────────────────

    /// The hour slot the dashboards are looking at, if known.
    pub fn observed_hour(&self) -> Option<DateTime<Utc>> {
        *self.inner.observed_hour.borrow()
    }

    /// Point the dashboards at a different hour slot. Takes effect on
    /// the next refresh.
    pub fn set_observed_hour(&self, hour: DateTime<Utc>) {
        let _ = self.inner.observed_hour.send(Some(hour));
    }

    /// Subscribe to observed-hour changes.
    pub fn observed_hour_changes(&self) -> watch::Receiver<Option<DateTime<Utc>>> {
        self.inner.observed_hour.subscribe()
    }

    // ── Command execution ────────────────────────────────────────

    /// Execute a mutation against the backend.
    ///
    /// Sends the command through the internal channel to the command
    /// processor task and awaits the result.
    pub async fn execute(&self, cmd: Command) -> Result<CommandResult, CoreError> {
        if *self.inner.connection_state.borrow() != ConnectionState::Connected {
            return Err(CoreError::MonitorDisconnected);
        }

        let (tx, rx) = tokio::sync::oneshot::channel();

        self.inner
            .command_tx
            .send(CommandEnvelope {
                command: cmd,
                response_tx: tx,
            })
            .await
            .map_err(|_| CoreError::MonitorDisconnected)?;

        rx.await.map_err(|_| CoreError::MonitorDisconnected)?
    }

    // ── One-shot convenience ─────────────────────────────────────

    /// One-shot: connect, run closure, disconnect.
    ///
    /// Optimized for CLI: disables periodic refresh since we only need a
    /// single request-response cycle.
    pub async fn oneshot<F, Fut, T>(config: MonitorConfig, f: F) -> Result<T, CoreError>
    where
        F: FnOnce(Monitor) -> Fut,
        Fut: std::future::Future<Output = Result<T, CoreError>>,
    {
        let mut cfg = config;
        cfg.refresh_interval_secs = 0;

        let monitor = Monitor::new(cfg);
        monitor.connect().await?;
        let result = f(monitor.clone()).await;
        monitor.disconnect().await;
        result
    }

    // ── State observation ────────────────────────────────────────

    /// Subscribe to connection state changes.
    pub fn connection_state(&self) -> watch::Receiver<ConnectionState> {
        self.inner.connection_state.subscribe()
    }

    // ── Snapshot accessors (delegate to DataStore) ───────────────

    pub fn cells_snapshot(&self) -> Arc<Vec<Arc<CellActivity>>> {
        self.inner.store.cells_snapshot()
    }

    pub fn alerts_snapshot(&self) -> Arc<Vec<Arc<Alert>>> {
        self.inner.store.alerts_snapshot()
    }

    pub fn congestion_snapshot(&self) -> Arc<Vec<Arc<CellCongestion>>> {
        self.inner.store.congestion_snapshot()
    }

    pub fn flows_snapshot(&self) -> Arc<Vec<Arc<MobilityFlow>>> {
        self.inner.store.flows_snapshot()
    }

    pub fn provinces_snapshot(&self) -> Arc<Vec<Arc<ProvinceFlow>>> {
        self.inner.store.provinces_snapshot()
    }

    // ── Stream accessors (delegate to DataStore) ─────────────────

    pub fn cells(&self) -> EntityStream<CellActivity> {
        self.inner.store.subscribe_cells()
    }

    pub fn alerts(&self) -> EntityStream<Alert> {
        self.inner.store.subscribe_alerts()
    }

    pub fn congestion(&self) -> EntityStream<CellCongestion> {
        self.inner.store.subscribe_congestion()
    }

    pub fn flows(&self) -> EntityStream<MobilityFlow> {
        self.inner.store.subscribe_flows()
    }

    pub fn provinces(&self) -> EntityStream<ProvinceFlow> {
        self.inner.store.subscribe_provinces()
    }

    // ── Direct queries (bypass the store) ────────────────────────
    //
    // Parameterized reads for the CLI: the store only ever holds the
    // observed hour's snapshot, so windowed or per-entity queries go
    // straight to the backend.

    /// Per-cell activity snapshot for an hour slot.
    pub async fn heatmap_at(&self, hour: DateTime<Utc>) -> Result<Vec<CellActivity>, CoreError> {
        let guard = self.inner.client.lock().await;
        let client = guard.as_ref().ok_or(CoreError::MonitorDisconnected)?;
        let rows = client.heatmap(hour).await?;
        Ok(rows.into_iter().map(CellActivity::from).collect())
    }

    /// Alerts, optionally only those raised since a timestamp.
    pub async fn alerts_since(
        &self,
        since: Option<DateTime<Utc>>,
    ) -> Result<Vec<Alert>, CoreError> {
        let guard = self.inner.client.lock().await;
        let client = guard.as_ref().ok_or(CoreError::MonitorDisconnected)?;
        let rows = client.alerts(since).await?;
        Ok(rows.into_iter().map(Alert::from).collect())
    }

    /// Top cells by activity for an hour slot.
    pub async fn top_cells(
        &self,
        hour: DateTime<Utc>,
        limit: u32,
    ) -> Result<Vec<TopCell>, CoreError> {
        let guard = self.inner.client.lock().await;
        let client = guard.as_ref().ok_or(CoreError::MonitorDisconnected)?;
        let rows = client.top_cells(hour, limit).await?;
        Ok(rows.into_iter().map(TopCell::from).collect())
    }

    /// Detail record for one cell.
    pub async fn cell_details(&self, cell_id: u32) -> Result<CellDetails, CoreError> {
        let guard = self.inner.client.lock().await;
        let client = guard.as_ref().ok_or(CoreError::MonitorDisconnected)?;
        let dto = client.cell_details(cell_id).await.map_err(|e| {
            if e.is_not_found() {
                CoreError::CellNotFound { cell_id }
            } else {
                e.into()
            }
        })?;
        Ok(dto.into())
    }

    /// Activity timeseries for one cell over a window.
    pub async fn cell_timeseries(
        &self,
        cell_id: u32,
        from: DateTime<Utc>,
        to: DateTime<Utc>,
        step: TimeStep,
    ) -> Result<Vec<MetricSample>, CoreError> {
        let guard = self.inner.client.lock().await;
        let client = guard.as_ref().ok_or(CoreError::MonitorDisconnected)?;
        let rows = client
            .cell_timeseries(cell_id, from, to, step)
            .await
            .map_err(|e| {
                if e.is_not_found() {
                    CoreError::CellNotFound { cell_id }
                } else {
                    e.into()
                }
            })?;
        Ok(rows.into_iter().map(MetricSample::from).collect())
    }

    /// Congestion scores for an hour slot under caller-supplied
    /// thresholds. The backend's per-row verdict is preserved as
    /// `reported_tier`; local reclassification against `thresholds` is
    /// authoritative for display.
    pub async fn congestion_at(
        &self,
        hour: DateTime<Utc>,
        limit: u32,
        thresholds: Thresholds,
    ) -> Result<Vec<CellCongestion>, CoreError> {
        let guard = self.inner.client.lock().await;
        let client = guard.as_ref().ok_or(CoreError::MonitorDisconnected)?;
        let rows = client
            .congestion(hour, limit, thresholds.warn(), thresholds.crit())
            .await?;
        Ok(rows.into_iter().map(CellCongestion::from).collect())
    }

    /// Network-wide traffic summary for an hour slot.
    pub async fn hourly_summary_at(&self, hour: DateTime<Utc>) -> Result<HourlySummary, CoreError> {
        let guard = self.inner.client.lock().await;
        let client = guard.as_ref().ok_or(CoreError::MonitorDisconnected)?;
        Ok(client.hourly_summary(hour).await?.into())
    }

    /// Mobility flows for an hour slot, optionally filtered.
    pub async fn mobility_flows_at(
        &self,
        hour: DateTime<Utc>,
        cell_id: Option<u32>,
        provincia: Option<&str>,
    ) -> Result<Vec<MobilityFlow>, CoreError> {
        let guard = self.inner.client.lock().await;
        let client = guard.as_ref().ok_or(CoreError::MonitorDisconnected)?;
        let rows = client.mobility_flows(hour, cell_id, provincia).await?;
        Ok(rows.into_iter().map(MobilityFlow::from).collect())
    }

    /// Flow summary for one province.
    pub async fn province_details(&self, provincia: &str) -> Result<ProvinceFlow, CoreError> {
        let guard = self.inner.client.lock().await;
        let client = guard.as_ref().ok_or(CoreError::MonitorDisconnected)?;
        let dto = client.province_details(provincia).await.map_err(|e| {
            if e.is_not_found() {
                CoreError::ProvinceNotFound {
                    name: provincia.into(),
                }
            } else {
                e.into()
            }
        })?;
        Ok(dto.into())
    }

    /// Fresh network-wide counters (also updates the store).
    pub async fn fetch_network_stats(&self) -> Result<NetworkStats, CoreError> {
        let guard = self.inner.client.lock().await;
        let client = guard.as_ref().ok_or(CoreError::MonitorDisconnected)?;
        let stats: NetworkStats = client.network_stats().await?.into();
        drop(guard);
        self.inner.store.apply_network_stats(stats.clone());
        Ok(stats)
    }
}

// ── Background tasks ─────────────────────────────────────────────

/// Periodically refresh data from the backend.
async fn refresh_task(monitor: Monitor, interval_secs: u64, cancel: CancellationToken) {
    let mut interval = tokio::time::interval(Duration::from_secs(interval_secs));
    interval.tick().await; // consume the immediate first tick

    loop {
        tokio::select! {
            biased;
            _ = cancel.cancelled() => break,
            _ = interval.tick() => {
                if let Err(e) = monitor.full_refresh().await {
                    warn!(error = %e, "periodic refresh failed");
                }
            }
        }
    }
}

/// Process commands from the mpsc channel, routing each to the
/// appropriate backend call.
async fn command_processor_task(monitor: Monitor, mut rx: mpsc::Receiver<CommandEnvelope>) {
    let cancel = monitor.inner.cancel.clone();

    loop {
        tokio::select! {
            biased;
            _ = cancel.cancelled() => break,
            envelope = rx.recv() => {
                let Some(envelope) = envelope else { break };
                let result = route_command(&monitor, envelope.command).await;
                let _ = envelope.response_tx.send(result);
            }
        }
    }
}

// ── Command routing ──────────────────────────────────────────────

/// Route a command to the appropriate backend call.
async fn route_command(monitor: &Monitor, cmd: Command) -> Result<CommandResult, CoreError> {
    let client_guard = monitor.inner.client.lock().await;
    let client = client_guard
        .as_ref()
        .ok_or(CoreError::MonitorDisconnected)?;
    let store = &monitor.inner.store;

    match cmd {
        Command::ResolveAlert { id } => {
            client.resolve_alert(&id).await.map_err(|e| {
                if e.is_not_found() {
                    CoreError::AlertNotFound { id: id.clone() }
                } else {
                    e.into()
                }
            })?;
            // Optimistic local flip; the next refresh reconciles.
            store.mark_alert_resolved(&id);
            Ok(CommandResult::Ok)
        }

        Command::GenerateCongestionAlerts {
            hour,
            limit,
            thresholds,
        } => {
            let created = client
                .generate_congestion_alerts(hour, limit, thresholds.warn(), thresholds.crit())
                .await?;
            Ok(CommandResult::AlertsGenerated(
                created.into_iter().map(Alert::from).collect(),
            ))
        }

        Command::IngestSlot { datetime } => {
            let receipt = client.stream_slot(datetime).await?;
            drop(client_guard);

            // New data landed; refresh so every panel sees it.
            if let Err(e) = monitor.full_refresh().await {
                warn!(error = %e, "post-ingest refresh failed");
            }

            Ok(CommandResult::SlotIngested {
                slot: receipt.slot_datetime,
                sent_events: receipt.sent_events,
            })
        }
    }
}
