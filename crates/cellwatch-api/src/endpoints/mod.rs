// Endpoint groups for the telemetry backend
//
// Each module adds inherent methods to `ApiClient` for one resource
// family, mirroring the backend's route prefixes: /traffic, /alerts,
// /mobility and /provinces, /stats and /stream.

pub mod alerts;
pub mod mobility;
pub mod stats;
pub mod traffic;
