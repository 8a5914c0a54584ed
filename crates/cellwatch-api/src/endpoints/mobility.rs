// Mobility endpoints: cell-to-cell flows and province summaries.

use chrono::{DateTime, Utc};
use tracing::debug;

use crate::client::ApiClient;
use crate::error::Error;
use crate::types::{MobilityFlowDto, ProvinceFlowDto};

impl ApiClient {
    /// Fetch mobility flows for one hour slot, optionally filtered to a
    /// single cell or province.
    ///
    /// `GET /mobility?hour=&cellId=&provincia=`
    pub async fn mobility_flows(
        &self,
        hour: DateTime<Utc>,
        cell_id: Option<u32>,
        provincia: Option<&str>,
    ) -> Result<Vec<MobilityFlowDto>, Error> {
        debug!(%hour, cell_id = ?cell_id, provincia = ?provincia, "fetching mobility flows");
        let mut query = vec![("hour", hour.to_rfc3339())];
        if let Some(id) = cell_id {
            query.push(("cellId", id.to_string()));
        }
        if let Some(name) = provincia {
            query.push(("provincia", name.to_string()));
        }
        self.get("mobility", &query).await
    }

    /// Fetch flow summaries for every province.
    ///
    /// `GET /provinces`
    pub async fn provinces(&self) -> Result<Vec<ProvinceFlowDto>, Error> {
        debug!("fetching province summaries");
        self.get("provinces", &[]).await
    }

    /// Fetch the flow summary for one province.
    ///
    /// `GET /provinces/{provincia}`
    pub async fn province_details(&self, provincia: &str) -> Result<ProvinceFlowDto, Error> {
        debug!(provincia, "fetching province details");
        self.get(&format!("provinces/{provincia}"), &[]).await
    }
}
