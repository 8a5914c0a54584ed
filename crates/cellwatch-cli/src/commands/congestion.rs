//! Congestion command handlers.

use tabled::Tabled;

use cellwatch_config::Config;
use cellwatch_core::analytics::regression;
use cellwatch_core::{CellCongestion, Monitor, Thresholds};

use crate::cli::{CongestionArgs, CongestionCommand, GlobalOpts};
use crate::config::thresholds_for;
use crate::error::CliError;
use crate::output;

use super::util;

// ── Table row ───────────────────────────────────────────────────────

#[derive(Tabled)]
struct CongestionRow {
    #[tabled(rename = "Cell")]
    cell_id: u32,
    #[tabled(rename = "Score")]
    score: String,
    #[tabled(rename = "Tier")]
    tier: String,
    #[tabled(rename = "Activity")]
    activity: String,
}

impl CongestionRow {
    fn new(c: &CellCongestion, thresholds: Thresholds, color: bool) -> Self {
        // Local classification is authoritative: the backend's verdict was
        // made under whatever thresholds that query used, not necessarily
        // the ones in effect here.
        let tier = thresholds.classify(c.score);
        Self {
            cell_id: c.cell_id,
            score: format!("{:.1}", c.score),
            tier: util::tier_label(tier, color),
            activity: format!("{:.1}", c.total_activity),
        }
    }
}

// ── Handler ─────────────────────────────────────────────────────────

pub async fn handle(
    monitor: &Monitor,
    args: CongestionArgs,
    global: &GlobalOpts,
    config: &Config,
) -> Result<(), CliError> {
    match args.command {
        CongestionCommand::List {
            hour,
            warn,
            crit,
            limit,
        } => {
            let hour = util::resolve_hour(hour.as_deref(), monitor)?;
            let thresholds = thresholds_for(warn, crit, &config.defaults)?;
            let mut cells = monitor.congestion_at(hour, limit, thresholds).await?;
            cells.sort_by(|a, b| b.score.total_cmp(&a.score));

            let color = output::should_color(&global.color);
            let out = output::render_list(
                &global.output,
                &cells,
                |c| CongestionRow::new(c, thresholds, color),
                |c| c.cell_id.to_string(),
            );
            output::print_output(&out, global.quiet);
            Ok(())
        }

        CongestionCommand::Summary { hour } => {
            let hour = util::resolve_hour(hour.as_deref(), monitor)?;
            let summary = monitor.hourly_summary_at(hour).await?;
            let out = output::render_single(
                &global.output,
                &summary,
                |s| {
                    format!(
                        "Hour:            {}\n\
                         Total activity:  {:.1}\n\
                         Active cells:    {}\n\
                         Avg per cell:    {:.1}",
                        s.hour
                            .map(|h| h.format("%Y-%m-%d %H:%M").to_string())
                            .unwrap_or_else(|| "─".into()),
                        s.total_activity,
                        s.active_cells,
                        s.avg_activity,
                    )
                },
                |s| s.active_cells.to_string(),
            );
            output::print_output(&out, global.quiet);
            Ok(())
        }

        CongestionCommand::Correlate { hour, limit } => {
            let hour = util::resolve_hour(hour.as_deref(), monitor)?;
            let thresholds = thresholds_for(None, None, &config.defaults)?;
            let cells = monitor.congestion_at(hour, limit, thresholds).await?;

            let points: Vec<(f64, f64)> = cells
                .iter()
                .map(|c| (c.score, c.total_activity))
                .collect();
            let line = regression::fit(&points)?;

            let strength = if line.correlation.abs() > 0.7 {
                "strong"
            } else if line.correlation.abs() > 0.4 {
                "moderate"
            } else {
                "weak"
            };

            output::print_output(
                &format!(
                    "Correlation of congestion score vs. total activity\n\
                     points:       {}\n\
                     slope:        {:.2}\n\
                     intercept:    {:.2}\n\
                     correlation:  {:.3} ({strength})\n\
                     r²:           {:.3}",
                    points.len(),
                    line.slope,
                    line.intercept,
                    line.correlation,
                    line.r_squared(),
                ),
                global.quiet,
            );
            Ok(())
        }
    }
}
