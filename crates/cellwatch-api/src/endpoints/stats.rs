// Network statistics and ingest-trigger endpoints.

use chrono::{DateTime, Utc};
use tracing::debug;

use crate::client::ApiClient;
use crate::error::Error;
use crate::types::{NetworkStatsDto, SlotIngestDto};

impl ApiClient {
    /// Fetch network-wide counters.
    ///
    /// `GET /stats`
    pub async fn network_stats(&self) -> Result<NetworkStatsDto, Error> {
        debug!("fetching network stats");
        self.get("stats", &[]).await
    }

    /// Trigger ingestion of one hour slot of source data.
    ///
    /// `POST /stream/slot?datetime=`
    ///
    /// With no datetime the backend advances to its next unprocessed slot.
    pub async fn stream_slot(
        &self,
        datetime: Option<DateTime<Utc>>,
    ) -> Result<SlotIngestDto, Error> {
        debug!(datetime = ?datetime, "triggering slot ingest");
        let query = match datetime {
            Some(ts) => vec![("datetime", ts.to_rfc3339())],
            None => Vec::new(),
        };
        self.post("stream/slot", &query).await
    }
}
