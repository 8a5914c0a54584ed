// cellwatch-core: Domain layer between cellwatch-api and consumers (CLI/TUI).

pub mod analytics;
pub mod command;
pub mod config;
pub mod convert;
pub mod error;
pub mod model;
pub mod monitor;
pub mod store;
pub mod stream;

// ── Primary re-exports ──────────────────────────────────────────────
pub use command::{Command, CommandResult};
pub use config::MonitorConfig;
pub use error::CoreError;
pub use monitor::{ConnectionState, Monitor};
pub use store::DataStore;
pub use stream::EntityStream;

// Re-export model types at the crate root for ergonomics.
pub use model::{
    // Core entities
    Alert, AlertKind, AlertSeverity, CellActivity, CellDetails, ComponentTraffic, GeoPoint,
    MetricSample, TopCell,
    // Congestion
    CellCongestion, HourlySummary,
    // Mobility / stats
    MobilityFlow, NetworkStats, ProvinceFlow,
};

// The analytics layer is the computational core; surface its vocabulary.
pub use analytics::{
    AnalyticsError, Histogram, Point, Regression, SeriesSummary, StatusTier, TemporalMatrix,
    Thresholds,
};

// Query vocabulary shared with the API crate.
pub use cellwatch_api::types::TimeStep;
