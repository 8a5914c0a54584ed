//! Network statistics command handler.

use cellwatch_core::Monitor;

use crate::cli::GlobalOpts;
use crate::error::CliError;
use crate::output;

pub async fn handle(monitor: &Monitor, global: &GlobalOpts) -> Result<(), CliError> {
    let stats = monitor.fetch_network_stats().await?;

    let out = output::render_single(
        &global.output,
        &stats,
        |s| {
            format!(
                "Cells:            {}\n\
                 Alerts:           {}\n\
                 Traffic records:  {}\n\
                 Latest slot:      {}",
                s.total_cells,
                s.total_alerts,
                s.total_traffic_records,
                s.latest
                    .map(|t| t.format("%Y-%m-%d %H:%M").to_string())
                    .unwrap_or_else(|| "none ingested".into()),
            )
        },
        |s| s.total_cells.to_string(),
    );
    output::print_output(&out, global.quiet);
    Ok(())
}
