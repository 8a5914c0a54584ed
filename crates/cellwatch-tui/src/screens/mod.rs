//! Screen implementations. Each screen is a top-level Component.

mod alerts;
mod congestion;
mod flows;
mod heatmap;
mod overview;

use cellwatch_core::Thresholds;

use crate::component::Component;
use crate::screen::ScreenId;

pub use alerts::AlertsScreen;
pub use congestion::CongestionScreen;
pub use flows::FlowsScreen;
pub use heatmap::HeatmapScreen;
pub use overview::OverviewScreen;

/// Shipped warn/crit defaults for screens that classify scores.
///
/// The classifier has no built-in defaults; 70/90 is the deployment
/// default every page starts from (the CLI reads the same numbers from
/// config).
pub(crate) fn default_thresholds() -> Thresholds {
    Thresholds::new(70.0, 90.0).expect("70/90 are valid thresholds")
}

/// Create all five screens in tab-bar order.
pub fn create_screens() -> Vec<(ScreenId, Box<dyn Component>)> {
    vec![
        (ScreenId::Overview, Box::new(OverviewScreen::new()) as Box<dyn Component>),
        (ScreenId::Congestion, Box::new(CongestionScreen::new())),
        (ScreenId::Alerts, Box::new(AlertsScreen::new())),
        (ScreenId::Heatmap, Box::new(HeatmapScreen::new())),
        (ScreenId::Flows, Box::new(FlowsScreen::new())),
    ]
}
