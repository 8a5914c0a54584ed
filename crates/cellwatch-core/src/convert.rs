// ── API-to-domain type conversions ──
//
// Bridges raw `cellwatch_api` wire types into canonical
// `cellwatch_core::model` domain types. Each `From` impl normalizes field
// names, parses strings into strong types, and fills sensible defaults
// for missing optional data. This is the only place that knows the wire
// schema carries coordinates under two spellings or severities as loose
// strings -- internal components never branch on "which field is present".

use chrono::{DateTime, Utc};

use cellwatch_api::types::{
    AlertDto, CellDetailsDto, CongestionCellDto, HeatmapCellDto, HourlyTrafficSummaryDto,
    MobilityFlowDto, NetworkStatsDto, ProvinceFlowDto, TimeSeriesDto, TopCellDto,
};

use crate::analytics::StatusTier;
use crate::model::{
    Alert, AlertKind, AlertSeverity, CellActivity, CellCongestion, CellDetails, ComponentTraffic,
    GeoPoint, HourlySummary, MetricSample, MobilityFlow, NetworkStats, ProvinceFlow, TopCell,
};

// ── Helpers ────────────────────────────────────────────────────────

/// Parse an optional ISO-8601 datetime string, dropping unparseable values.
fn parse_datetime(raw: &Option<String>) -> Option<DateTime<Utc>> {
    raw.as_deref()
        .and_then(|s| DateTime::parse_from_rfc3339(s).ok())
        .map(|dt| dt.with_timezone(&Utc))
}

/// Parse a required ISO-8601 datetime string, falling back to "now" for
/// malformed values (the record is still worth showing).
fn parse_datetime_or_now(raw: &str) -> DateTime<Utc> {
    DateTime::parse_from_rfc3339(raw)
        .map(|dt| dt.with_timezone(&Utc))
        .unwrap_or_else(|_| Utc::now())
}

/// Coalesce the long-form coordinate pair with the short-form one.
///
/// The backend emits `latitude`/`longitude` on some aggregation paths and
/// `lat`/`lon` on others; long form wins when both are present.
fn coalesce_location(
    latitude: Option<f64>,
    longitude: Option<f64>,
    lat: Option<f64>,
    lon: Option<f64>,
) -> Option<GeoPoint> {
    let lat = latitude.or(lat)?;
    let lon = longitude.or(lon)?;
    Some(GeoPoint { lat, lon })
}

/// Map a wire severity string to the severity tier.
///
/// Unknown strings are wire noise; they map to `Low` rather than erroring
/// so a misbehaving backend cannot blank the alert list.
fn parse_severity(raw: &str) -> AlertSeverity {
    match raw {
        "critical" => AlertSeverity::Critical,
        "high" => AlertSeverity::High,
        "medium" => AlertSeverity::Medium,
        _ => AlertSeverity::Low,
    }
}

/// Map a wire alert-type string to `AlertKind`.
fn parse_kind(raw: &Option<String>) -> AlertKind {
    match raw.as_deref() {
        Some("anomaly") => AlertKind::Anomaly,
        Some("overload") => AlertKind::Overload,
        Some("outage") => AlertKind::Outage,
        Some("congestion") => AlertKind::Congestion,
        _ => AlertKind::Unknown,
    }
}

/// Map the backend's congestion verdict string to a tier, if present.
fn parse_tier(raw: &Option<String>) -> Option<StatusTier> {
    match raw.as_deref() {
        Some("normal") => Some(StatusTier::Normal),
        Some("warning") => Some(StatusTier::Warning),
        Some("critical") => Some(StatusTier::Critical),
        _ => None,
    }
}

// ── Cell activity ──────────────────────────────────────────────────

impl From<HeatmapCellDto> for CellActivity {
    fn from(d: HeatmapCellDto) -> Self {
        let traffic = ComponentTraffic {
            sms_in: d.sms_in.unwrap_or(0.0),
            sms_out: d.sms_out.unwrap_or(0.0),
            call_in: d.call_in.unwrap_or(0.0),
            call_out: d.call_out.unwrap_or(0.0),
            internet: d.internet_traffic.unwrap_or(0.0),
        };

        CellActivity {
            cell_id: d.cell_id,
            total_activity: d.total_activity,
            traffic,
            square_id: d.square_id,
            location: coalesce_location(d.latitude, d.longitude, d.lat, d.lon),
            timestamp: parse_datetime(&d.timestamp),
        }
    }
}

impl From<TopCellDto> for TopCell {
    fn from(d: TopCellDto) -> Self {
        TopCell {
            cell_id: d.cell_id,
            total_activity: d.total_activity,
            hour: parse_datetime(&d.hour),
        }
    }
}

impl From<TimeSeriesDto> for MetricSample {
    fn from(d: TimeSeriesDto) -> Self {
        MetricSample {
            timestamp: parse_datetime_or_now(&d.timestamp),
            value: d.value,
            metric: d.metric.unwrap_or_else(|| "totalActivity".into()),
        }
    }
}

impl From<CellDetailsDto> for CellDetails {
    fn from(d: CellDetailsDto) -> Self {
        CellDetails {
            cell_id: d.cell_id,
            square_id: d.square_id,
            location: coalesce_location(d.latitude, d.longitude, None, None),
            current_load: d.current_load.unwrap_or(0.0),
            average_load: d.average_load.unwrap_or(0.0),
            alerts: d.alerts.into_iter().map(Alert::from).collect(),
            timeseries: d.timeseries.into_iter().map(MetricSample::from).collect(),
        }
    }
}

// ── Alerts ─────────────────────────────────────────────────────────

impl From<AlertDto> for Alert {
    fn from(d: AlertDto) -> Self {
        Alert {
            severity: parse_severity(&d.severity),
            kind: parse_kind(&d.alert_type),
            timestamp: parse_datetime_or_now(&d.timestamp),
            id: d.id,
            cell_id: d.cell_id,
            square_id: d.square_id,
            message: d.message,
            resolved: d.resolved,
        }
    }
}

// ── Congestion ─────────────────────────────────────────────────────

impl From<CongestionCellDto> for CellCongestion {
    fn from(d: CongestionCellDto) -> Self {
        CellCongestion {
            cell_id: d.cell_id,
            total_activity: d.total_activity,
            score: d.score,
            reported_tier: parse_tier(&d.severity),
            location: coalesce_location(d.latitude, d.longitude, d.lat, d.lon),
        }
    }
}

impl From<HourlyTrafficSummaryDto> for HourlySummary {
    fn from(d: HourlyTrafficSummaryDto) -> Self {
        let avg = d.avg_activity.unwrap_or_else(|| {
            if d.active_cells > 0 {
                d.total_activity / f64::from(d.active_cells)
            } else {
                0.0
            }
        });
        HourlySummary {
            hour: parse_datetime(&d.hour),
            total_activity: d.total_activity,
            active_cells: d.active_cells,
            avg_activity: avg,
        }
    }
}

// ── Mobility / stats ───────────────────────────────────────────────

impl From<MobilityFlowDto> for MobilityFlow {
    fn from(d: MobilityFlowDto) -> Self {
        MobilityFlow {
            from_cell_id: d.from_cell_id,
            to_cell_id: d.to_cell_id,
            volume: d.flow,
            timestamp: parse_datetime(&d.timestamp),
        }
    }
}

impl From<ProvinceFlowDto> for ProvinceFlow {
    fn from(d: ProvinceFlowDto) -> Self {
        ProvinceFlow {
            provincia: d.provincia,
            outbound: d.outbound_volume,
            inbound: d.inbound_volume,
            total: d.total_flow,
        }
    }
}

impl From<NetworkStatsDto> for NetworkStats {
    fn from(d: NetworkStatsDto) -> Self {
        NetworkStats {
            total_alerts: d.total_alerts,
            total_cells: d.total_cells,
            total_traffic_records: d.total_traffic_records,
            latest: parse_datetime(&d.latest_datetime),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn heatmap_dto() -> HeatmapCellDto {
        HeatmapCellDto {
            cell_id: 4259,
            total_activity: 100.0,
            square_id: Some(7),
            latitude: None,
            longitude: None,
            lat: None,
            lon: None,
            sms_in: Some(10.0),
            sms_out: Some(5.0),
            call_in: None,
            call_out: None,
            internet_traffic: Some(85.0),
            timestamp: Some("2013-11-04T10:00:00+00:00".into()),
            extra: serde_json::Map::new(),
        }
    }

    #[test]
    fn long_form_coordinates_win_over_short_form() {
        let mut dto = heatmap_dto();
        dto.latitude = Some(45.46);
        dto.longitude = Some(9.19);
        dto.lat = Some(0.0);
        dto.lon = Some(0.0);

        let cell: CellActivity = dto.into();
        let loc = cell.location.expect("location present");
        assert_eq!(loc.lat, 45.46);
        assert_eq!(loc.lon, 9.19);
    }

    #[test]
    fn short_form_coordinates_are_accepted_alone() {
        let mut dto = heatmap_dto();
        dto.lat = Some(45.07);
        dto.lon = Some(7.69);

        let cell: CellActivity = dto.into();
        let loc = cell.location.expect("location present");
        assert_eq!(loc.lat, 45.07);
    }

    #[test]
    fn half_specified_location_is_dropped() {
        let mut dto = heatmap_dto();
        dto.latitude = Some(45.0);
        // No longitude under either spelling.

        let cell: CellActivity = dto.into();
        assert!(cell.location.is_none());
    }

    #[test]
    fn missing_traffic_components_default_to_zero() {
        let cell: CellActivity = heatmap_dto().into();
        assert_eq!(cell.traffic.call_in, 0.0);
        assert_eq!(cell.traffic.total(), 100.0);
    }

    #[test]
    fn severity_strings_map_to_tiers() {
        assert_eq!(parse_severity("critical"), AlertSeverity::Critical);
        assert_eq!(parse_severity("high"), AlertSeverity::High);
        assert_eq!(parse_severity("medium"), AlertSeverity::Medium);
        assert_eq!(parse_severity("low"), AlertSeverity::Low);
        // Wire noise maps to the lowest tier, never an error.
        assert_eq!(parse_severity("catastrophic"), AlertSeverity::Low);
    }

    #[test]
    fn alert_kind_mapping() {
        assert_eq!(parse_kind(&Some("overload".into())), AlertKind::Overload);
        assert_eq!(parse_kind(&Some("outage".into())), AlertKind::Outage);
        assert_eq!(parse_kind(&None), AlertKind::Unknown);
        assert_eq!(parse_kind(&Some("weird".into())), AlertKind::Unknown);
    }

    #[test]
    fn backend_tier_is_optional_and_loose() {
        assert_eq!(parse_tier(&Some("warning".into())), Some(StatusTier::Warning));
        assert_eq!(parse_tier(&Some("purple".into())), None);
        assert_eq!(parse_tier(&None), None);
    }

    #[test]
    fn hourly_summary_derives_average_when_missing() {
        let dto = HourlyTrafficSummaryDto {
            hour: None,
            total_activity: 300.0,
            active_cells: 3,
            avg_activity: None,
        };
        let summary: HourlySummary = dto.into();
        assert_eq!(summary.avg_activity, 100.0);
    }

    #[test]
    fn malformed_timestamps_are_dropped_for_optional_fields() {
        let mut dto = heatmap_dto();
        dto.timestamp = Some("not-a-date".into());
        let cell: CellActivity = dto.into();
        assert!(cell.timestamp.is_none());
    }
}
