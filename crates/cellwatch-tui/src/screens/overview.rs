//! Overview screen — network health at a glance, the home screen.
//!
//! Layout:
//! ┌─ Network ─────┐  ┌─ Congestion ───────────────────┐
//! │ counters       │  │ health gauge + tier            │
//! │               │  ┌─ Activity ─────────────────────┐
//! └───────────────┘  │ hourly-total sparkline         │
//! ┌─ Top Cells ───┐  └────────────────────────────────┘
//! │ by activity    │  ┌─ Recent Alerts ────────────────┐
//! │ (top 5-7)     │  │ triage order, last few         │
//! └───────────────┘  └────────────────────────────────┘

use std::sync::Arc;
use std::time::Instant;

use color_eyre::eyre::Result;
use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Gauge, Paragraph, Sparkline};
use tokio::sync::mpsc::UnboundedSender;

use cellwatch_core::analytics::severity;
use cellwatch_core::{Alert, CellActivity, CellCongestion, HourlySummary, NetworkStats};

use crate::action::Action;
use crate::component::Component;
use crate::screens::default_thresholds;
use crate::theme;
use crate::widgets::fmt;

/// Overview screen state.
pub struct OverviewScreen {
    focused: bool,
    stats: Option<NetworkStats>,
    summary: Option<HourlySummary>,
    cells: Arc<Vec<Arc<CellActivity>>>,
    alerts: Arc<Vec<Arc<Alert>>>,
    congestion: Arc<Vec<Arc<CellCongestion>>>,
    /// Ring buffer of network-total activity per refresh, for the sparkline.
    activity_history: Vec<u64>,
    /// Tracks when we last received a data update (for the title bar).
    last_data_update: Option<Instant>,
}

impl OverviewScreen {
    pub fn new() -> Self {
        Self {
            focused: false,
            stats: None,
            summary: None,
            cells: Arc::new(Vec::new()),
            alerts: Arc::new(Vec::new()),
            congestion: Arc::new(Vec::new()),
            activity_history: Vec::new(),
            last_data_update: None,
        }
    }

    /// Format the data age for the title bar.
    fn refresh_age_str(&self) -> String {
        match self.last_data_update {
            Some(t) => fmt::fmt_age(
                chrono::Duration::from_std(t.elapsed()).unwrap_or_else(|_| chrono::Duration::zero()),
            ),
            None => "no data".into(),
        }
    }

    /// Mean congestion score across the current snapshot.
    fn mean_score(&self) -> f64 {
        if self.congestion.is_empty() {
            return 0.0;
        }
        let total: f64 = self.congestion.iter().map(|c| c.score).sum();
        total / self.congestion.len() as f64
    }

    /// Render the Network counters panel (top-left).
    fn render_network(&self, frame: &mut Frame, area: Rect) {
        let block = Block::default()
            .title(" Network ")
            .title_style(theme::title_style())
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(theme::border_default());

        let inner = block.inner(area);
        frame.render_widget(block, area);

        let open_alerts = self.alerts.iter().filter(|a| !a.resolved).count();

        let (cells, records, latest) = match &self.stats {
            Some(s) => (
                fmt::fmt_count(s.total_cells),
                fmt::fmt_count(s.total_traffic_records),
                s.latest
                    .map(|t| t.format("%m-%d %H:%M").to_string())
                    .unwrap_or_else(|| "─".into()),
            ),
            None => ("─".into(), "─".into(), "─".into()),
        };

        let lines = vec![
            Line::from(""),
            Line::from(vec![
                Span::styled("  Cells      ", Style::default().fg(theme::DIM_WHITE)),
                Span::styled(cells, Style::default().fg(theme::ACCENT_CYAN)),
            ]),
            Line::from(vec![
                Span::styled("  Records    ", Style::default().fg(theme::DIM_WHITE)),
                Span::styled(records, Style::default().fg(theme::ACCENT_CYAN)),
            ]),
            Line::from(vec![
                Span::styled("  Latest     ", Style::default().fg(theme::DIM_WHITE)),
                Span::styled(latest, Style::default().fg(theme::DIM_WHITE)),
            ]),
            Line::from(""),
            Line::from(vec![
                Span::styled("  Open alerts ", Style::default().fg(theme::DIM_WHITE)),
                Span::styled(
                    open_alerts.to_string(),
                    if open_alerts > 0 {
                        Style::default().fg(theme::ALERT_RED)
                    } else {
                        Style::default().fg(theme::SIGNAL_GREEN)
                    },
                ),
            ]),
        ];

        frame.render_widget(Paragraph::new(lines), inner);
    }

    /// Render the congestion health gauge (top-right).
    fn render_congestion_gauge(&self, frame: &mut Frame, area: Rect) {
        let block = Block::default()
            .title(" Congestion ")
            .title_style(theme::title_style())
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(theme::border_default());

        let inner = block.inner(area);
        frame.render_widget(block, area);

        let score = self.mean_score();
        let tier = default_thresholds().classify(score);

        let gauge = Gauge::default()
            .gauge_style(theme::tier_style(tier))
            .ratio((score / 100.0).clamp(0.0, 1.0))
            .label(format!("{score:.0} / 100 ({tier})"));

        let rows = Layout::vertical([Constraint::Length(1), Constraint::Length(1)]).split(inner);
        if rows.len() == 2 {
            frame.render_widget(gauge, rows[1]);
        }
    }

    /// Render the hourly-activity sparkline (mid-right).
    fn render_activity(&self, frame: &mut Frame, area: Rect) {
        let block = Block::default()
            .title(" Activity ")
            .title_style(theme::title_style())
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(theme::border_default());

        let inner = block.inner(area);
        frame.render_widget(block, area);

        if inner.height < 2 {
            return;
        }

        let rows = Layout::vertical([Constraint::Length(1), Constraint::Min(1)]).split(inner);

        let current = self
            .summary
            .as_ref()
            .map(|s| {
                format!(
                    "  total {}  ·  {} active cells",
                    fmt::fmt_activity(s.total_activity),
                    s.active_cells
                )
            })
            .unwrap_or_else(|| "  no summary yet".into());
        frame.render_widget(
            Paragraph::new(Line::from(Span::styled(
                current,
                Style::default().fg(theme::ACCENT_CYAN),
            ))),
            rows[0],
        );

        let sparkline = Sparkline::default()
            .data(&self.activity_history)
            .style(Style::default().fg(theme::FLOW_BLUE));
        frame.render_widget(sparkline, rows[1]);
    }

    /// Render Top Cells panel (bottom-left).
    fn render_top_cells(&self, frame: &mut Frame, area: Rect) {
        let block = Block::default()
            .title(" Top Cells ")
            .title_style(theme::title_style())
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(theme::border_default());

        let inner = block.inner(area);
        frame.render_widget(block, area);

        let max_rows = inner.height.saturating_sub(1) as usize;
        let mut sorted: Vec<_> = self.cells.iter().collect();
        sorted.sort_by(|a, b| b.total_activity.total_cmp(&a.total_activity));

        let mut lines = Vec::new();
        for cell in sorted.iter().take(max_rows.min(7)) {
            lines.push(Line::from(vec![
                Span::styled(
                    format!("  #{:<8}", cell.cell_id),
                    Style::default().fg(theme::ACCENT_CYAN),
                ),
                Span::styled(
                    format!("{:>8}", fmt::fmt_activity(cell.total_activity)),
                    Style::default().fg(theme::DIM_WHITE),
                ),
            ]));
        }

        if lines.is_empty() {
            lines.push(Line::from(Span::styled(
                "  No cells",
                Style::default().fg(theme::GRID_GRAY),
            )));
        }

        frame.render_widget(Paragraph::new(lines), inner);
    }

    /// Render Recent Alerts panel (bottom-right).
    fn render_recent_alerts(&self, frame: &mut Frame, area: Rect) {
        let block = Block::default()
            .title(" Recent Alerts ")
            .title_style(theme::title_style())
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(theme::border_default());

        let inner = block.inner(area);
        frame.render_widget(block, area);

        let max_rows = inner.height.saturating_sub(1) as usize;

        // Triage order: critical first, ties in arrival order.
        let ordered = severity::triage_order(&self.alerts, |a| a.severity);

        let mut lines = Vec::new();
        for alert in ordered.iter().take(max_rows.min(7)) {
            let time_str = alert.timestamp.format("%H:%M").to_string();
            let msg: String = alert
                .message
                .chars()
                .take(inner.width.saturating_sub(20) as usize)
                .collect();
            lines.push(Line::from(vec![
                Span::styled(format!("  {time_str}  "), theme::key_hint()),
                Span::styled("▲ ", theme::severity_style(alert.severity)),
                Span::styled(msg, Style::default().fg(theme::DIM_WHITE)),
            ]));
        }

        if lines.is_empty() {
            lines.push(Line::from(Span::styled(
                "  No alerts — network quiet",
                Style::default().fg(theme::SIGNAL_GREEN),
            )));
        }

        frame.render_widget(Paragraph::new(lines), inner);
    }
}

impl Component for OverviewScreen {
    fn init(&mut self, _action_tx: UnboundedSender<Action>) -> Result<()> {
        Ok(())
    }

    fn update(&mut self, action: &Action) -> Result<Option<Action>> {
        match action {
            Action::CellsUpdated(cells) => {
                self.cells = Arc::clone(cells);
                self.last_data_update = Some(Instant::now());
            }
            Action::AlertsUpdated(alerts) => {
                self.alerts = Arc::clone(alerts);
            }
            Action::CongestionUpdated(congestion) => {
                self.congestion = Arc::clone(congestion);
            }
            Action::StatsUpdated(stats) => {
                self.stats = Some(stats.clone());
            }
            Action::SummaryUpdated(summary) => {
                self.activity_history.push(summary.total_activity.max(0.0) as u64);
                // Keep last 60 samples
                if self.activity_history.len() > 60 {
                    self.activity_history.remove(0);
                }
                self.summary = Some(summary.clone());
            }
            _ => {}
        }
        Ok(None)
    }

    fn render(&self, frame: &mut Frame, area: Rect) {
        let refresh_str = self.refresh_age_str();
        let title_line = Line::from(vec![
            Span::styled(" Network Overview ", theme::title_style()),
            Span::styled(format!(" [{refresh_str}] "), theme::key_hint()),
        ]);

        let block = Block::default()
            .title(title_line)
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(if self.focused {
                theme::border_focused()
            } else {
                theme::border_default()
            });

        let inner = block.inner(area);
        frame.render_widget(block, area);

        if inner.width < 40 || inner.height < 10 {
            // Minimal mode — just show a summary line
            let summary = format!(
                "Cells: {} │ Alerts: {}",
                self.cells.len(),
                self.alerts.len()
            );
            frame.render_widget(Paragraph::new(summary).style(theme::table_row()), inner);
            return;
        }

        // Two-column layout: left (28 cols) | right (remaining)
        let left_width = 28u16.min(inner.width / 3);
        let columns =
            Layout::horizontal([Constraint::Length(left_width), Constraint::Min(30)]).split(inner);

        // Left column: Network + Top Cells
        let left =
            Layout::vertical([Constraint::Percentage(50), Constraint::Percentage(50)])
                .split(columns[0]);

        self.render_network(frame, left[0]);
        self.render_top_cells(frame, left[1]);

        // Right column: Congestion gauge + Activity + Recent Alerts
        let right = Layout::vertical([
            Constraint::Length(4), // Congestion gauge
            Constraint::Length(6), // Activity sparkline
            Constraint::Min(6),    // Recent Alerts
        ])
        .split(columns[1]);

        self.render_congestion_gauge(frame, right[0]);
        self.render_activity(frame, right[1]);
        self.render_recent_alerts(frame, right[2]);
    }

    fn focused(&self) -> bool {
        self.focused
    }

    fn set_focused(&mut self, focused: bool) {
        self.focused = focused;
    }

    fn id(&self) -> &str {
        "Overview"
    }
}
