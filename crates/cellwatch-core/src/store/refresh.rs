// ── Full refresh application logic ──
//
// Applies bulk data snapshots fetched from the backend into the
// DataStore. Every refresh is a full replace; the backend is the single
// source of truth and per-entity reconciliation buys nothing at this
// data volume.

use chrono::Utc;

use super::DataStore;
use crate::model::{
    Alert, CellActivity, CellCongestion, HourlySummary, MobilityFlow, NetworkStats, ProvinceFlow,
};

impl DataStore {
    /// Apply a full data refresh for one observed hour.
    ///
    /// Clears all collections and repopulates from the provided data.
    /// Cells and congestion rows are keyed by `cellId`; alerts by their
    /// backend id; flows by a synthetic `"{from}->{to}"` key; provinces
    /// by name.
    pub(crate) fn apply_snapshot(
        &self,
        cells: Vec<CellActivity>,
        alerts: Vec<Alert>,
        congestion: Vec<CellCongestion>,
        flows: Vec<MobilityFlow>,
        provinces: Vec<ProvinceFlow>,
    ) {
        self.cells.clear();
        self.alerts.clear();
        self.congestion.clear();
        self.flows.clear();
        self.provinces.clear();

        for cell in cells {
            self.cells.upsert(cell.cell_id.to_string(), cell);
        }

        for alert in alerts {
            self.alerts.upsert(alert.id.clone(), alert);
        }

        for row in congestion {
            self.congestion.upsert(row.cell_id.to_string(), row);
        }

        for flow in flows {
            let key = format!("{}->{}", flow.from_cell_id, flow.to_cell_id);
            self.flows.upsert(key, flow);
        }

        for province in provinces {
            self.provinces.upsert(province.provincia.clone(), province);
        }

        let _ = self.last_full_refresh.send(Some(Utc::now()));
    }

    /// Replace the network-wide counters.
    pub(crate) fn apply_network_stats(&self, stats: NetworkStats) {
        self.network_stats.send_modify(|s| *s = Some(stats));
    }

    /// Replace the hourly summary.
    pub(crate) fn apply_hourly_summary(&self, summary: HourlySummary) {
        self.hourly_summary.send_modify(|s| *s = Some(summary));
    }

    /// Optimistically flip one alert to resolved after a successful
    /// resolve call. Returns `false` if the alert is not in the store.
    ///
    /// The backend owns resolution state; the next full refresh
    /// reconciles whatever it reports.
    pub(crate) fn mark_alert_resolved(&self, id: &str) -> bool {
        let Some(alert) = self.alerts.get(id) else {
            return false;
        };
        let mut updated = (*alert).clone();
        updated.resolved = true;
        self.alerts.upsert(id.to_owned(), updated);
        true
    }
}

#[cfg(test)]
mod tests {
    use chrono::Utc;

    use super::*;
    use crate::model::{AlertKind, AlertSeverity};

    fn alert(id: &str) -> Alert {
        Alert {
            id: id.into(),
            cell_id: 1,
            square_id: None,
            kind: AlertKind::Overload,
            severity: AlertSeverity::High,
            message: "sustained overload".into(),
            timestamp: Utc::now(),
            resolved: false,
        }
    }

    #[test]
    fn snapshot_replaces_previous_contents() {
        let store = DataStore::new();
        store.apply_snapshot(Vec::new(), vec![alert("a-1")], Vec::new(), Vec::new(), Vec::new());
        store.apply_snapshot(Vec::new(), vec![alert("a-2")], Vec::new(), Vec::new(), Vec::new());

        assert_eq!(store.alert_count(), 1);
        assert!(store.alert_by_id("a-1").is_none());
        assert!(store.alert_by_id("a-2").is_some());
        assert!(store.last_full_refresh().is_some());
    }

    #[test]
    fn mark_alert_resolved_flips_local_state() {
        let store = DataStore::new();
        store.apply_snapshot(Vec::new(), vec![alert("a-1")], Vec::new(), Vec::new(), Vec::new());

        assert_eq!(store.open_alert_count(), 1);
        assert!(store.mark_alert_resolved("a-1"));
        assert_eq!(store.open_alert_count(), 0);
        assert!(store.alert_by_id("a-1").is_some_and(|a| a.resolved));
    }

    #[test]
    fn mark_alert_resolved_reports_missing_alert() {
        let store = DataStore::new();
        assert!(!store.mark_alert_resolved("nope"));
    }
}
