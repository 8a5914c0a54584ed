//! Heatmap screen — weekly day/hour activity matrix.
//!
//! Accumulates hourly summaries over the session and folds them into the
//! 7×24 matrix. Repeated refreshes of the same hour slot are corrections,
//! which is exactly the matrix's last-write-wins policy.

use chrono::{Datelike, Timelike};
use color_eyre::eyre::Result;
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Paragraph};
use tokio::sync::mpsc::UnboundedSender;

use cellwatch_core::analytics::temporal::{HOURS_PER_DAY, SlotSample, TemporalMatrix};

use crate::action::Action;
use crate::component::Component;
use crate::theme;

const DAY_LABELS: [&str; 7] = ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"];

/// Cap on retained samples; the matrix overwrites per-slot anyway, this
/// only bounds memory for very long sessions.
const MAX_SAMPLES: usize = 1024;

pub struct HeatmapScreen {
    focused: bool,
    samples: Vec<SlotSample>,
}

impl HeatmapScreen {
    pub fn new() -> Self {
        Self {
            focused: false,
            samples: Vec::new(),
        }
    }

    /// Color for a cell relative to the matrix peak, matching the tier
    /// ramp used everywhere else.
    fn intensity_color(value: f64, max: f64) -> Option<Color> {
        if value <= 0.0 || max <= 0.0 {
            return None;
        }
        let intensity = value / max;
        Some(if intensity > 0.75 {
            theme::ALERT_RED
        } else if intensity > 0.5 {
            theme::HOT_ORANGE
        } else if intensity > 0.25 {
            theme::AMBER
        } else {
            theme::FLOW_BLUE
        })
    }
}

impl Component for HeatmapScreen {
    fn init(&mut self, _action_tx: UnboundedSender<Action>) -> Result<()> {
        Ok(())
    }

    fn update(&mut self, action: &Action) -> Result<Option<Action>> {
        if let Action::SummaryUpdated(summary) = action {
            if let Some(hour) = summary.hour {
                self.samples.push(SlotSample {
                    day: hour.weekday().num_days_from_monday() as u8,
                    hour: hour.hour() as u8,
                    value: summary.total_activity,
                });
                if self.samples.len() > MAX_SAMPLES {
                    self.samples.drain(..self.samples.len() - MAX_SAMPLES);
                }
            }
        }
        Ok(None)
    }

    fn render(&self, frame: &mut Frame, area: Rect) {
        let block = Block::default()
            .title(" Weekly Heatmap ")
            .title_style(theme::title_style())
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(if self.focused {
                theme::border_focused()
            } else {
                theme::border_default()
            });

        let inner = block.inner(area);
        frame.render_widget(block, area);

        if self.samples.is_empty() {
            frame.render_widget(
                Paragraph::new("  Collecting hourly summaries…").style(theme::table_row()),
                inner,
            );
            return;
        }

        let matrix = TemporalMatrix::from_samples(self.samples.iter().copied());
        let max = matrix.max_value();

        // Two columns per hour so the cells read roughly square.
        let mut lines = Vec::with_capacity(10);

        let mut ruler = String::from("      ");
        for hour in (0..HOURS_PER_DAY).step_by(6) {
            ruler.push_str(&format!("{hour:<12}"));
        }
        lines.push(Line::from(Span::styled(ruler, theme::key_hint())));

        for (day, row) in matrix.rows().iter().enumerate() {
            let mut spans = vec![Span::styled(
                format!(" {:<4} ", DAY_LABELS[day]),
                Style::default().fg(theme::DIM_WHITE),
            )];
            for &value in row {
                match Self::intensity_color(value, max) {
                    Some(color) => {
                        spans.push(Span::styled("██", Style::default().fg(color)));
                    }
                    None => spans.push(Span::styled("··", theme::key_hint())),
                }
            }
            lines.push(Line::from(spans));
        }

        lines.push(Line::from(""));
        lines.push(Line::from(vec![
            Span::styled("      intensity ", theme::key_hint()),
            Span::styled("██", Style::default().fg(theme::FLOW_BLUE)),
            Span::styled("██", Style::default().fg(theme::AMBER)),
            Span::styled("██", Style::default().fg(theme::HOT_ORANGE)),
            Span::styled("██", Style::default().fg(theme::ALERT_RED)),
            Span::styled(format!("  peak {max:.0}"), theme::key_hint()),
        ]));

        frame.render_widget(Paragraph::new(lines), inner);
    }

    fn focused(&self) -> bool {
        self.focused
    }

    fn set_focused(&mut self, focused: bool) {
        self.focused = focused;
    }

    fn id(&self) -> &str {
        "Heatmap"
    }
}
