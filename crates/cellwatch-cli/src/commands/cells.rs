//! Cell command handlers.

use tabled::Tabled;

use cellwatch_config::Config;
use cellwatch_core::analytics::{histogram, regression, series};
use cellwatch_core::{CellDetails, MetricSample, Monitor, TimeStep, TopCell};

use crate::cli::{CellsArgs, CellsCommand, GlobalOpts, StepArg};
use crate::config::thresholds_for;
use crate::error::CliError;
use crate::output;

use super::util;

// ── Table rows ──────────────────────────────────────────────────────

#[derive(Tabled)]
struct TopCellRow {
    #[tabled(rename = "Cell")]
    cell_id: u32,
    #[tabled(rename = "Activity")]
    activity: String,
    #[tabled(rename = "Hour")]
    hour: String,
}

impl From<&TopCell> for TopCellRow {
    fn from(c: &TopCell) -> Self {
        Self {
            cell_id: c.cell_id,
            activity: format!("{:.1}", c.total_activity),
            hour: c
                .hour
                .map(|h| h.format("%Y-%m-%d %H:%M").to_string())
                .unwrap_or_else(|| "─".into()),
        }
    }
}

#[derive(Tabled)]
struct SampleRow {
    #[tabled(rename = "Time")]
    time: String,
    #[tabled(rename = "Value")]
    value: String,
}

impl From<&MetricSample> for SampleRow {
    fn from(s: &MetricSample) -> Self {
        Self {
            time: s.timestamp.format("%Y-%m-%d %H:%M").to_string(),
            value: format!("{:.1}", s.value),
        }
    }
}

// ── Handler ─────────────────────────────────────────────────────────

pub async fn handle(
    monitor: &Monitor,
    args: CellsArgs,
    global: &GlobalOpts,
    config: &Config,
) -> Result<(), CliError> {
    match args.command {
        CellsCommand::Top { hour, limit } => {
            let hour = util::resolve_hour(hour.as_deref(), monitor)?;
            let cells = monitor.top_cells(hour, limit).await?;
            let out = output::render_list(
                &global.output,
                &cells,
                |c| TopCellRow::from(c),
                |c| c.cell_id.to_string(),
            );
            output::print_output(&out, global.quiet);
            Ok(())
        }

        CellsCommand::Show { cell_id } => {
            let details = monitor.cell_details(cell_id).await?;
            let color = output::should_color(&global.color);
            let thresholds = thresholds_for(None, None, &config.defaults)?;
            let out = output::render_single(
                &global.output,
                &details,
                |d| render_cell_details(d, thresholds, color),
                |d| d.cell_id.to_string(),
            );
            output::print_output(&out, global.quiet);
            Ok(())
        }

        CellsCommand::Timeseries {
            cell_id,
            from,
            to,
            step,
            summary,
        } => {
            let from = util::parse_datetime(&from, "from")?;
            let to = util::parse_datetime(&to, "to")?;
            let samples = monitor
                .cell_timeseries(cell_id, from, to, step_for(step))
                .await?;

            let out = output::render_list(&global.output, &samples, |s| SampleRow::from(s), |s| {
                format!("{}\t{}", s.timestamp.to_rfc3339(), s.value)
            });
            output::print_output(&out, global.quiet);

            if summary && !global.quiet {
                print_series_summary(&samples)?;
            }
            Ok(())
        }

        CellsCommand::Histogram {
            hour,
            bucket_size,
            warn,
            crit,
        } => {
            let hour = util::resolve_hour(hour.as_deref(), monitor)?;
            let thresholds = thresholds_for(warn, crit, &config.defaults)?;
            let cells = monitor.heatmap_at(hour).await?;
            let loads: Vec<f64> = cells.iter().map(|c| c.total_activity).collect();

            let hist = histogram::bin(&loads, bucket_size)?;
            if hist.is_empty() {
                // Zero buckets is a valid result, distinct from an error:
                // there was simply nothing to bin for this hour.
                output::print_output("no activity data for this hour", global.quiet);
                return Ok(());
            }

            let color = output::should_color(&global.color);
            let mut lines = Vec::with_capacity(hist.len() + 2);
            let max_count = hist.counts().iter().copied().max().unwrap_or(0).max(1);
            for (i, &count) in hist.counts().iter().enumerate() {
                let (start, end) = hist.bucket_range(i);
                let bar_len = (count * 40).div_ceil(max_count);
                let tier = thresholds.classify(start);
                let bar = util::tier_paint(&"█".repeat(bar_len), tier, color);
                lines.push(format!(
                    "{start:>6.0}–{end:<6.0} {bar} {count} ({:.1}%)",
                    hist.share(i)
                ));
            }
            let stats = series::summarize(&loads)?;
            lines.push(String::new());
            lines.push(format!(
                "cells: {}   mean: {:.1}   median: {:.1}   min: {:.1}   max: {:.1}",
                loads.len(),
                stats.mean,
                stats.median,
                stats.min,
                stats.max
            ));
            output::print_output(&lines.join("\n"), global.quiet);
            Ok(())
        }
    }
}

fn step_for(step: StepArg) -> TimeStep {
    match step {
        StepArg::Minute => TimeStep::Minute,
        StepArg::Hour => TimeStep::Hour,
        StepArg::Day => TimeStep::Day,
    }
}

/// Multi-line detail view for `cells show`.
fn render_cell_details(
    d: &CellDetails,
    thresholds: cellwatch_core::Thresholds,
    color: bool,
) -> String {
    let tier = thresholds.classify(d.current_load);
    let location = d
        .location
        .map(|l| format!("{:.4}, {:.4}", l.lat, l.lon))
        .unwrap_or_else(|| "unknown".into());
    let open_alerts = d.alerts.iter().filter(|a| !a.resolved).count();

    let mut out = format!(
        "Cell {}\n\
         Square:        {}\n\
         Location:      {}\n\
         Current load:  {:.1} ({})\n\
         Average load:  {:.1}\n\
         Open alerts:   {}",
        d.cell_id,
        d.square_id.map_or_else(|| "─".into(), |s| s.to_string()),
        location,
        d.current_load,
        util::tier_label(tier, color),
        d.average_load,
        open_alerts,
    );

    if !d.timeseries.is_empty() {
        let values: Vec<f64> = d.timeseries.iter().map(|s| s.value).collect();
        if let Ok(strip) = util::spark(&values) {
            out.push_str(&format!("\nRecent trend:  {strip}"));
        }
    }

    out
}

/// Summary statistics + trend + sparkline footer for `--summary`.
fn print_series_summary(samples: &[MetricSample]) -> Result<(), CliError> {
    let values: Vec<f64> = samples.iter().map(|s| s.value).collect();
    let stats = series::summarize(&values)?;

    println!();
    println!(
        "samples: {}   mean: {:.1}   median: {:.1}   min: {:.1}   max: {:.1}",
        values.len(),
        stats.mean,
        stats.median,
        stats.min,
        stats.max
    );

    // Trend over the sample index; a flat series has no defined slope.
    let points: Vec<(f64, f64)> = values
        .iter()
        .enumerate()
        .map(|(i, &v)| (i as f64, v))
        .collect();
    match regression::fit(&points) {
        Ok(line) => println!(
            "trend: {:+.2}/step   r²: {:.3}",
            line.slope,
            line.r_squared()
        ),
        Err(_) => println!("trend: flat"),
    }

    println!("{}", util::spark(&values)?);
    Ok(())
}
