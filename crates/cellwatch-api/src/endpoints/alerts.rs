// Alert endpoints: listing, resolution, and congestion-alert generation.

use chrono::{DateTime, Utc};
use tracing::debug;

use crate::client::ApiClient;
use crate::error::Error;
use crate::types::AlertDto;

impl ApiClient {
    /// Fetch alerts, optionally only those raised since a timestamp.
    ///
    /// `GET /alerts?since=`
    pub async fn alerts(&self, since: Option<DateTime<Utc>>) -> Result<Vec<AlertDto>, Error> {
        debug!(since = ?since, "fetching alerts");
        let query = match since {
            Some(ts) => vec![("since", ts.to_rfc3339())],
            None => Vec::new(),
        };
        self.get("alerts", &query).await
    }

    /// Mark one alert resolved.
    ///
    /// `POST /alerts/{id}/resolve`
    pub async fn resolve_alert(&self, alert_id: &str) -> Result<(), Error> {
        debug!(alert_id, "resolving alert");
        self.post_no_content(&format!("alerts/{alert_id}/resolve"), &[])
            .await
    }

    /// Ask the backend to generate congestion alerts for one hour slot.
    ///
    /// `POST /alerts/congestion?hour=&limit=&warn=&crit=`
    ///
    /// Returns the alerts the backend created.
    pub async fn generate_congestion_alerts(
        &self,
        hour: DateTime<Utc>,
        limit: u32,
        warn: f64,
        crit: f64,
    ) -> Result<Vec<AlertDto>, Error> {
        debug!(%hour, limit, warn, crit, "generating congestion alerts");
        self.post(
            "alerts/congestion",
            &[
                ("hour", hour.to_rfc3339()),
                ("limit", limit.to_string()),
                ("warn", warn.to_string()),
                ("crit", crit.to_string()),
            ],
        )
        .await
    }
}
