//! Weekly day/hour heatmap rendering.
//!
//! Fetches a cell's hour-step timeseries over a window and folds it into
//! the 7×24 matrix, then renders the matrix as a shaded terminal grid
//! with an hour ruler.

use chrono::{Duration, Utc};

use cellwatch_core::analytics::temporal::{
    HOURS_PER_DAY, SlotSample, TemporalMatrix,
};
use cellwatch_core::{Monitor, TimeStep};

use crate::cli::{GlobalOpts, HeatmapArgs};
use crate::error::CliError;
use crate::output;

use super::util;

const DAY_LABELS: [&str; 7] = ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"];

/// Intensity glyphs, lowest to highest quarter of the value range.
const SHADES: [char; 4] = ['░', '▒', '▓', '█'];

pub async fn handle(
    monitor: &Monitor,
    args: HeatmapArgs,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    let to = match args.to.as_deref() {
        Some(raw) => util::parse_datetime(raw, "to")?,
        None => monitor.observed_hour().unwrap_or_else(Utc::now),
    };
    let from = match args.from.as_deref() {
        Some(raw) => util::parse_datetime(raw, "from")?,
        None => to - Duration::days(7),
    };

    let samples = monitor
        .cell_timeseries(args.cell_id, from, to, TimeStep::Hour)
        .await?;

    if samples.is_empty() {
        output::print_output("no activity data in this window", global.quiet);
        return Ok(());
    }

    let matrix = TemporalMatrix::from_samples(samples.iter().map(SlotSample::from_metric));
    output::print_output(&render_matrix(&matrix, args.cell_id), global.quiet);
    Ok(())
}

fn render_matrix(matrix: &TemporalMatrix, cell_id: u32) -> String {
    let max = matrix.max_value();
    let mut lines = Vec::with_capacity(10);

    lines.push(format!("Weekly activity for cell {cell_id}"));

    // Hour ruler: a tick every 6 hours.
    let mut ruler = String::from("     ");
    for hour in 0..HOURS_PER_DAY {
        if hour % 6 == 0 {
            ruler.push_str(&format!("{hour:<6}"));
        }
    }
    lines.push(ruler);

    for (day, row) in matrix.rows().iter().enumerate() {
        let mut line = format!("{:<4} ", DAY_LABELS[day]);
        for &value in row {
            line.push(shade(value, max));
        }
        lines.push(line);
    }

    lines.push(format!(
        "     {} low  {} high   (peak {max:.1})",
        SHADES[0], SHADES[3]
    ));
    lines.join("\n")
}

/// Map a value to an intensity glyph relative to the matrix peak.
fn shade(value: f64, max: f64) -> char {
    if value <= 0.0 || max <= 0.0 {
        return ' ';
    }
    let intensity = value / max;
    if intensity > 0.75 {
        SHADES[3]
    } else if intensity > 0.5 {
        SHADES[2]
    } else if intensity > 0.25 {
        SHADES[1]
    } else {
        SHADES[0]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shade_buckets_by_quarter() {
        assert_eq!(shade(0.0, 100.0), ' ');
        assert_eq!(shade(10.0, 100.0), '░');
        assert_eq!(shade(40.0, 100.0), '▒');
        assert_eq!(shade(60.0, 100.0), '▓');
        assert_eq!(shade(100.0, 100.0), '█');
    }

    #[test]
    fn render_has_one_row_per_day() {
        let matrix = TemporalMatrix::from_samples([SlotSample {
            day: 0,
            hour: 5,
            value: 10.0,
        }]);
        let out = render_matrix(&matrix, 1);
        for label in DAY_LABELS {
            assert!(out.contains(label), "missing row for {label}");
        }
    }
}
