// ── Domain model ──
//
// Normalized records produced by the adapter layer (`convert`) from wire
// DTOs. Presentation code consumes only these types; wire-field quirks
// (coalesced coordinate names, string enums) never escape the adapter.

pub mod alert;
pub mod cell;
pub mod congestion;
pub mod flow;
pub mod sample;

pub use alert::{Alert, AlertKind, AlertSeverity};
pub use cell::{CellActivity, CellDetails, ComponentTraffic, GeoPoint, TopCell};
pub use congestion::{CellCongestion, HourlySummary};
pub use flow::{MobilityFlow, NetworkStats, ProvinceFlow};
pub use sample::MetricSample;
