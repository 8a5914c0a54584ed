// Traffic endpoints: heatmap, top cells, per-cell detail and timeseries,
// congestion scoring, and the hourly network summary.

use chrono::{DateTime, Utc};
use tracing::debug;

use crate::client::ApiClient;
use crate::error::Error;
use crate::types::{
    CellDetailsDto, CongestionCellDto, HeatmapCellDto, HourlyTrafficSummaryDto, TimeSeriesDto,
    TimeStep, TopCellDto,
};

impl ApiClient {
    /// Fetch the per-cell activity snapshot for one hour slot.
    ///
    /// `GET /traffic/heatmap?datetime=`
    pub async fn heatmap(&self, datetime: DateTime<Utc>) -> Result<Vec<HeatmapCellDto>, Error> {
        debug!(%datetime, "fetching heatmap");
        self.get("traffic/heatmap", &[("datetime", datetime.to_rfc3339())])
            .await
    }

    /// Fetch the most active cells for one hour slot.
    ///
    /// `GET /traffic/top-cells?hour=&limit=`
    pub async fn top_cells(
        &self,
        hour: DateTime<Utc>,
        limit: u32,
    ) -> Result<Vec<TopCellDto>, Error> {
        debug!(%hour, limit, "fetching top cells");
        self.get(
            "traffic/top-cells",
            &[("hour", hour.to_rfc3339()), ("limit", limit.to_string())],
        )
        .await
    }

    /// Fetch the detail record for one cell.
    ///
    /// `GET /cells/{cellId}`
    pub async fn cell_details(&self, cell_id: u32) -> Result<CellDetailsDto, Error> {
        debug!(cell_id, "fetching cell details");
        self.get(&format!("cells/{cell_id}"), &[]).await
    }

    /// Fetch a cell's activity timeseries over a window.
    ///
    /// `GET /traffic/cells/{cellId}/timeseries?from=&to=&step=`
    pub async fn cell_timeseries(
        &self,
        cell_id: u32,
        from: DateTime<Utc>,
        to: DateTime<Utc>,
        step: TimeStep,
    ) -> Result<Vec<TimeSeriesDto>, Error> {
        debug!(cell_id, %from, %to, step = step.as_str(), "fetching cell timeseries");
        self.get(
            &format!("traffic/cells/{cell_id}/timeseries"),
            &[
                ("from", from.to_rfc3339()),
                ("to", to.to_rfc3339()),
                ("step", step.as_str().to_string()),
            ],
        )
        .await
    }

    /// Fetch congestion-scored cells for one hour slot.
    ///
    /// `GET /traffic/congestion?hour=&limit=&warn=&crit=`
    ///
    /// The backend classifies each score against `warn`/`crit` and returns
    /// its verdict in the `severity` field; callers with user-adjustable
    /// thresholds should reclassify locally.
    pub async fn congestion(
        &self,
        hour: DateTime<Utc>,
        limit: u32,
        warn: f64,
        crit: f64,
    ) -> Result<Vec<CongestionCellDto>, Error> {
        debug!(%hour, limit, warn, crit, "fetching congestion scores");
        self.get(
            "traffic/congestion",
            &[
                ("hour", hour.to_rfc3339()),
                ("limit", limit.to_string()),
                ("warn", warn.to_string()),
                ("crit", crit.to_string()),
            ],
        )
        .await
    }

    /// Fetch the network-wide traffic summary for one hour slot.
    ///
    /// `GET /traffic/hourly-summary?hour=`
    pub async fn hourly_summary(
        &self,
        hour: DateTime<Utc>,
    ) -> Result<HourlyTrafficSummaryDto, Error> {
        debug!(%hour, "fetching hourly summary");
        self.get("traffic/hourly-summary", &[("hour", hour.to_rfc3339())])
            .await
    }
}
