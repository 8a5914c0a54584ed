//! Congestion screen — per-cell scores with locally recomputed tiers.

use std::sync::Arc;

use color_eyre::eyre::Result;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Paragraph};
use tokio::sync::mpsc::UnboundedSender;

use cellwatch_core::CellCongestion;

use crate::action::Action;
use crate::component::Component;
use crate::screens::default_thresholds;
use crate::theme;
use crate::widgets::fmt;

/// Width of the inline score bar, in characters.
const BAR_WIDTH: usize = 20;

pub struct CongestionScreen {
    focused: bool,
    rows: Arc<Vec<Arc<CellCongestion>>>,
    selected: usize,
}

impl CongestionScreen {
    pub fn new() -> Self {
        Self {
            focused: false,
            rows: Arc::new(Vec::new()),
            selected: 0,
        }
    }

    /// Rows sorted worst-first.
    fn sorted(&self) -> Vec<Arc<CellCongestion>> {
        let mut rows: Vec<Arc<CellCongestion>> = self.rows.iter().map(Arc::clone).collect();
        rows.sort_by(|a, b| b.score.total_cmp(&a.score));
        rows
    }

    fn clamp_selection(&mut self) {
        if self.rows.is_empty() {
            self.selected = 0;
        } else {
            self.selected = self.selected.min(self.rows.len() - 1);
        }
    }

    fn score_bar(score: f64) -> String {
        let filled = ((score / 100.0).clamp(0.0, 1.0) * BAR_WIDTH as f64).round() as usize;
        format!("{}{}", "█".repeat(filled), "░".repeat(BAR_WIDTH - filled))
    }
}

impl Component for CongestionScreen {
    fn init(&mut self, _action_tx: UnboundedSender<Action>) -> Result<()> {
        Ok(())
    }

    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        match key.code {
            KeyCode::Char('j') | KeyCode::Down => Ok(Some(Action::ScrollDown)),
            KeyCode::Char('k') | KeyCode::Up => Ok(Some(Action::ScrollUp)),
            KeyCode::Char('g') => Ok(Some(Action::ScrollToTop)),
            KeyCode::Char('G') => Ok(Some(Action::ScrollToBottom)),
            _ => Ok(None),
        }
    }

    fn update(&mut self, action: &Action) -> Result<Option<Action>> {
        match action {
            Action::CongestionUpdated(rows) => {
                self.rows = Arc::clone(rows);
                self.clamp_selection();
            }
            Action::ScrollDown if self.focused => {
                self.selected = self.selected.saturating_add(1);
                self.clamp_selection();
            }
            Action::ScrollUp if self.focused => {
                self.selected = self.selected.saturating_sub(1);
            }
            Action::ScrollToTop if self.focused => {
                self.selected = 0;
            }
            Action::ScrollToBottom if self.focused => {
                self.selected = self.rows.len().saturating_sub(1);
            }
            _ => {}
        }
        Ok(None)
    }

    fn render(&self, frame: &mut Frame, area: Rect) {
        let block = Block::default()
            .title(" Congestion ")
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

        let rows = self.sorted();
        if rows.is_empty() {
            frame.render_widget(
                Paragraph::new("  No congestion data").style(theme::table_row()),
                inner,
            );
            return;
        }

        let thresholds = default_thresholds();
        let visible = inner.height.saturating_sub(1) as usize;

        // Keep the selection on screen.
        let offset = self.selected.saturating_sub(visible.saturating_sub(1));

        let mut lines = vec![Line::from(Span::styled(
            format!(
                "  {:<8} {:>6}  {:<10} {:<BAR_WIDTH$}  {:>9}",
                "CELL", "SCORE", "TIER", "LOAD", "ACTIVITY"
            ),
            theme::table_header(),
        ))];

        for (i, row) in rows.iter().enumerate().skip(offset).take(visible) {
            // Local thresholds are authoritative; the backend verdict in
            // `reported_tier` was computed under the query's thresholds.
            let tier = thresholds.classify(row.score);
            let base = if i == self.selected && self.focused {
                theme::table_selected()
            } else {
                theme::table_row()
            };

            lines.push(Line::from(vec![
                Span::styled(format!("  #{:<7}", row.cell_id), base),
                Span::styled(format!(" {:>5.1} ", row.score), base),
                Span::styled(format!(" {tier:<9}"), theme::tier_style(tier)),
                Span::styled(Self::score_bar(row.score), theme::tier_style(tier)),
                Span::styled(
                    format!("  {:>8}", fmt::fmt_activity(row.total_activity)),
                    base,
                ),
            ]));
        }

        frame.render_widget(Paragraph::new(lines), inner);
    }

    fn focused(&self) -> bool {
        self.focused
    }

    fn set_focused(&mut self, focused: bool) {
        self.focused = focused;
    }

    fn id(&self) -> &str {
        "Congestion"
    }
}
