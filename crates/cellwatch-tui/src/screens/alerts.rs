//! Alerts screen — triage-ordered incident list with resolve action.

use std::sync::Arc;

use color_eyre::eyre::Result;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Paragraph};
use tokio::sync::mpsc::UnboundedSender;

use cellwatch_core::Alert;
use cellwatch_core::analytics::severity;

use crate::action::Action;
use crate::component::Component;
use crate::theme;

pub struct AlertsScreen {
    focused: bool,
    /// Alerts in triage order (critical first, ties in arrival order).
    ordered: Vec<Arc<Alert>>,
    selected: usize,
}

impl AlertsScreen {
    pub fn new() -> Self {
        Self {
            focused: false,
            ordered: Vec::new(),
            selected: 0,
        }
    }

    fn clamp_selection(&mut self) {
        if self.ordered.is_empty() {
            self.selected = 0;
        } else {
            self.selected = self.selected.min(self.ordered.len() - 1);
        }
    }

    /// Id of the currently selected alert, if any.
    fn selected_alert(&self) -> Option<&Arc<Alert>> {
        self.ordered.get(self.selected)
    }
}

impl Component for AlertsScreen {
    fn init(&mut self, _action_tx: UnboundedSender<Action>) -> Result<()> {
        Ok(())
    }

    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        match key.code {
            KeyCode::Char('j') | KeyCode::Down => Ok(Some(Action::ScrollDown)),
            KeyCode::Char('k') | KeyCode::Up => Ok(Some(Action::ScrollUp)),
            KeyCode::Char('g') => Ok(Some(Action::ScrollToTop)),
            KeyCode::Char('G') => Ok(Some(Action::ScrollToBottom)),
            KeyCode::Char('r') => {
                // Resolve the selected alert (skip already-resolved ones).
                match self.selected_alert() {
                    Some(alert) if !alert.resolved => {
                        Ok(Some(Action::RequestResolveAlert(alert.id.clone())))
                    }
                    _ => Ok(None),
                }
            }
            _ => Ok(None),
        }
    }

    fn update(&mut self, action: &Action) -> Result<Option<Action>> {
        match action {
            Action::AlertsUpdated(alerts) => {
                // Establish consistent triage ordering once per update;
                // rendering is then a plain slice walk.
                self.ordered = severity::triage_order(alerts, |a| a.severity);
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
                self.selected = self.ordered.len().saturating_sub(1);
            }
            _ => {}
        }
        Ok(None)
    }

    fn render(&self, frame: &mut Frame, area: Rect) {
        let open = self.ordered.iter().filter(|a| !a.resolved).count();
        let title = Line::from(vec![
            Span::styled(" Alerts ", theme::title_style()),
            Span::styled(
                format!(" [{} open / {} total] ", open, self.ordered.len()),
                theme::key_hint(),
            ),
        ]);

        let block = Block::default()
            .title(title)
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(if self.focused {
                theme::border_focused()
            } else {
                theme::border_default()
            });

        let inner = block.inner(area);
        frame.render_widget(block, area);

        if self.ordered.is_empty() {
            frame.render_widget(
                Paragraph::new("  No alerts — network quiet").style(theme::table_row()),
                inner,
            );
            return;
        }

        let visible = inner.height.saturating_sub(1) as usize;
        let offset = self.selected.saturating_sub(visible.saturating_sub(1));

        let mut lines = Vec::with_capacity(visible + 1);
        for (i, alert) in self.ordered.iter().enumerate().skip(offset).take(visible) {
            let base = if i == self.selected && self.focused {
                theme::table_selected()
            } else {
                theme::table_row()
            };

            let marker = if alert.resolved { "✓" } else { "▲" };
            let time_str = alert.timestamp.format("%m-%d %H:%M").to_string();
            let msg: String = alert
                .message
                .chars()
                .take(inner.width.saturating_sub(34) as usize)
                .collect();

            lines.push(Line::from(vec![
                Span::styled(
                    format!("  {marker} "),
                    theme::severity_style(alert.severity),
                ),
                Span::styled(
                    format!("{:<9}", alert.severity.to_string()),
                    theme::severity_style(alert.severity),
                ),
                Span::styled(format!("{time_str}  "), theme::key_hint()),
                Span::styled(format!("#{:<6}", alert.cell_id), base),
                Span::styled(format!(" {msg}"), base),
            ]));
        }

        if inner.height as usize > lines.len() + 1 {
            lines.push(Line::from(""));
            lines.push(Line::from(Span::styled(
                "       r resolve selected alert",
                theme::key_hint(),
            )));
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
        "Alerts"
    }
}
