// ── Central reactive data store ──
//
// Thread-safe, lock-free storage for all cellwatch domain entities.
// Mutations are broadcast to subscribers via `watch` channels.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use tokio::sync::watch;

use super::collection::EntityCollection;
use crate::model::{
    Alert, CellActivity, CellCongestion, HourlySummary, MobilityFlow, NetworkStats, ProvinceFlow,
};
use crate::stream::EntityStream;

/// Central reactive store for all cellwatch domain entities.
///
/// Thread-safe and lock-free: all reads are wait-free, writes use
/// fine-grained per-shard locks within `DashMap`. One full snapshot per
/// refresh cycle; consumers hold cheap `Arc` clones.
pub struct DataStore {
    pub(crate) cells: EntityCollection<CellActivity>,
    pub(crate) alerts: EntityCollection<Alert>,
    pub(crate) congestion: EntityCollection<CellCongestion>,
    pub(crate) flows: EntityCollection<MobilityFlow>,
    pub(crate) provinces: EntityCollection<ProvinceFlow>,
    pub(crate) network_stats: watch::Sender<Option<NetworkStats>>,
    pub(crate) hourly_summary: watch::Sender<Option<HourlySummary>>,
    pub(crate) last_full_refresh: watch::Sender<Option<DateTime<Utc>>>,
}

impl DataStore {
    pub fn new() -> Self {
        let (network_stats, _) = watch::channel(None);
        let (hourly_summary, _) = watch::channel(None);
        let (last_full_refresh, _) = watch::channel(None);

        Self {
            cells: EntityCollection::new(),
            alerts: EntityCollection::new(),
            congestion: EntityCollection::new(),
            flows: EntityCollection::new(),
            provinces: EntityCollection::new(),
            network_stats,
            hourly_summary,
            last_full_refresh,
        }
    }

    // ── Snapshot accessors ───────────────────────────────────────────

    pub fn cells_snapshot(&self) -> Arc<Vec<Arc<CellActivity>>> {
        self.cells.snapshot()
    }

    pub fn alerts_snapshot(&self) -> Arc<Vec<Arc<Alert>>> {
        self.alerts.snapshot()
    }

    pub fn congestion_snapshot(&self) -> Arc<Vec<Arc<CellCongestion>>> {
        self.congestion.snapshot()
    }

    pub fn flows_snapshot(&self) -> Arc<Vec<Arc<MobilityFlow>>> {
        self.flows.snapshot()
    }

    pub fn provinces_snapshot(&self) -> Arc<Vec<Arc<ProvinceFlow>>> {
        self.provinces.snapshot()
    }

    // ── Single-entity lookups ────────────────────────────────────────

    pub fn cell_by_id(&self, cell_id: u32) -> Option<Arc<CellActivity>> {
        self.cells.get(&cell_id.to_string())
    }

    pub fn alert_by_id(&self, id: &str) -> Option<Arc<Alert>> {
        self.alerts.get(id)
    }

    // ── Count accessors ──────────────────────────────────────────────

    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    pub fn alert_count(&self) -> usize {
        self.alerts.len()
    }

    /// Unresolved alerts only -- the triage workload.
    pub fn open_alert_count(&self) -> usize {
        self.alerts
            .snapshot()
            .iter()
            .filter(|a| !a.resolved)
            .count()
    }

    // ── Subscriptions ────────────────────────────────────────────────

    pub fn subscribe_cells(&self) -> EntityStream<CellActivity> {
        EntityStream::new(self.cells.subscribe())
    }

    pub fn subscribe_alerts(&self) -> EntityStream<Alert> {
        EntityStream::new(self.alerts.subscribe())
    }

    pub fn subscribe_congestion(&self) -> EntityStream<CellCongestion> {
        EntityStream::new(self.congestion.subscribe())
    }

    pub fn subscribe_flows(&self) -> EntityStream<MobilityFlow> {
        EntityStream::new(self.flows.subscribe())
    }

    pub fn subscribe_provinces(&self) -> EntityStream<ProvinceFlow> {
        EntityStream::new(self.provinces.subscribe())
    }

    pub fn subscribe_network_stats(&self) -> watch::Receiver<Option<NetworkStats>> {
        self.network_stats.subscribe()
    }

    pub fn subscribe_hourly_summary(&self) -> watch::Receiver<Option<HourlySummary>> {
        self.hourly_summary.subscribe()
    }

    // ── Metadata ─────────────────────────────────────────────────────

    pub fn network_stats(&self) -> Option<NetworkStats> {
        self.network_stats.borrow().clone()
    }

    pub fn hourly_summary(&self) -> Option<HourlySummary> {
        self.hourly_summary.borrow().clone()
    }

    pub fn last_full_refresh(&self) -> Option<DateTime<Utc>> {
        *self.last_full_refresh.borrow()
    }

    /// How long ago the last full refresh occurred, or `None` if never.
    pub fn data_age(&self) -> Option<chrono::Duration> {
        self.last_full_refresh().map(|t| Utc::now() - t)
    }
}

impl Default for DataStore {
    fn default() -> Self {
        Self::new()
    }
}
