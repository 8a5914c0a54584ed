//! Flows screen — province summaries and top cell-to-cell movements.

use std::sync::Arc;

use color_eyre::eyre::Result;
use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Paragraph};
use tokio::sync::mpsc::UnboundedSender;

use cellwatch_core::{MobilityFlow, ProvinceFlow};

use crate::action::Action;
use crate::component::Component;
use crate::theme;
use crate::widgets::fmt;

pub struct FlowsScreen {
    focused: bool,
    flows: Arc<Vec<Arc<MobilityFlow>>>,
    provinces: Arc<Vec<Arc<ProvinceFlow>>>,
}

impl FlowsScreen {
    pub fn new() -> Self {
        Self {
            focused: false,
            flows: Arc::new(Vec::new()),
            provinces: Arc::new(Vec::new()),
        }
    }

    fn render_provinces(&self, frame: &mut Frame, area: Rect) {
        let block = Block::default()
            .title(" Provinces ")
            .title_style(theme::title_style())
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(theme::border_default());

        let inner = block.inner(area);
        frame.render_widget(block, area);

        let mut sorted: Vec<_> = self.provinces.iter().collect();
        sorted.sort_by(|a, b| b.total.total_cmp(&a.total));

        let mut lines = vec![Line::from(Span::styled(
            format!("  {:<14} {:>8} {:>8} {:>8}", "PROVINCE", "OUT", "IN", "TOTAL"),
            theme::table_header(),
        ))];

        let visible = inner.height.saturating_sub(2) as usize;
        for province in sorted.iter().take(visible) {
            let name: String = province.provincia.chars().take(14).collect();
            lines.push(Line::from(vec![
                Span::styled(
                    format!("  {name:<14}"),
                    theme::table_row(),
                ),
                Span::styled(
                    format!(" {:>7}", fmt::fmt_activity(province.outbound)),
                    theme::table_row(),
                ),
                Span::styled(
                    format!(" {:>7}", fmt::fmt_activity(province.inbound)),
                    theme::table_row(),
                ),
                Span::styled(
                    format!(" {:>7}", fmt::fmt_activity(province.total)),
                    theme::title_style(),
                ),
            ]));
        }

        if sorted.is_empty() {
            lines.push(Line::from(Span::styled(
                "  No province data",
                theme::key_hint(),
            )));
        }

        frame.render_widget(Paragraph::new(lines), inner);
    }

    fn render_flows(&self, frame: &mut Frame, area: Rect) {
        let block = Block::default()
            .title(" Top Flows ")
            .title_style(theme::title_style())
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(theme::border_default());

        let inner = block.inner(area);
        frame.render_widget(block, area);

        let mut sorted: Vec<_> = self.flows.iter().collect();
        sorted.sort_by(|a, b| b.volume.total_cmp(&a.volume));

        let mut lines = Vec::new();
        let visible = inner.height.saturating_sub(1) as usize;
        for flow in sorted.iter().take(visible) {
            lines.push(Line::from(vec![
                Span::styled(
                    format!("  #{:<7}", flow.from_cell_id),
                    theme::table_row(),
                ),
                Span::styled("→ ", theme::key_hint()),
                Span::styled(
                    format!("#{:<7}", flow.to_cell_id),
                    theme::table_row(),
                ),
                Span::styled(
                    format!(" {:>8}", fmt::fmt_activity(flow.volume)),
                    theme::title_style(),
                ),
            ]));
        }

        if sorted.is_empty() {
            lines.push(Line::from(Span::styled("  No flow data", theme::key_hint())));
        }

        frame.render_widget(Paragraph::new(lines), inner);
    }
}

impl Component for FlowsScreen {
    fn init(&mut self, _action_tx: UnboundedSender<Action>) -> Result<()> {
        Ok(())
    }

    fn update(&mut self, action: &Action) -> Result<Option<Action>> {
        match action {
            Action::FlowsUpdated(flows) => {
                self.flows = Arc::clone(flows);
            }
            Action::ProvincesUpdated(provinces) => {
                self.provinces = Arc::clone(provinces);
            }
            _ => {}
        }
        Ok(None)
    }

    fn render(&self, frame: &mut Frame, area: Rect) {
        let block = Block::default()
            .title(" Mobility ")
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

        let columns =
            Layout::horizontal([Constraint::Percentage(55), Constraint::Percentage(45)])
                .split(inner);

        self.render_provinces(frame, columns[0]);
        self.render_flows(frame, columns[1]);
    }

    fn focused(&self) -> bool {
        self.focused
    }

    fn set_focused(&mut self, focused: bool) {
        self.focused = focused;
    }

    fn id(&self) -> &str {
        "Flows"
    }
}
