use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Gauge, List, ListItem, Paragraph, Widget};

use gaia_core::panels::SearchPanel;
use gaia_data::RiskLevel;

pub struct SearchWidget<'a> {
    pub panel: &'a SearchPanel,
    /// Query currently being typed, when input mode is active.
    pub input: Option<&'a str>,
}

fn risk_color(risk: RiskLevel) -> Color {
    match risk {
        RiskLevel::Safe => Color::Green,
        RiskLevel::Moderate => Color::Yellow,
        RiskLevel::High => Color::Red,
        RiskLevel::Critical => Color::Magenta,
    }
}

impl<'a> Widget for SearchWidget<'a> {
    fn render(self, area: Rect, buf: &mut ratatui::buffer::Buffer) {
        let layout = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Length(2),
                Constraint::Length(1),
                Constraint::Min(4),
            ])
            .split(area);

        let query_line = match (self.input, self.panel.last_query.as_deref()) {
            (Some(typed), _) => format!("Query: {}_", typed),
            (None, Some(last)) => format!("Query: {} (press / to edit)", last),
            (None, None) => "Query: (press / to search)".to_string(),
        };
        Paragraph::new(query_line)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(" Global Search "),
            )
            .render(layout[0], buf);

        let m = &self.panel.metrics;
        Paragraph::new(format!(
            "Docs: {} | Encrypted: {} | Databases: {} | Traces: {} | Reach: {:.1}%",
            m.total_documents,
            m.encrypted_files,
            m.databases_scanned,
            m.traces_found,
            m.global_reach
        ))
        .style(Style::default().fg(Color::DarkGray))
        .render(layout[1], buf);

        if self.panel.searching {
            Gauge::default()
                .gauge_style(Style::default().fg(Color::Cyan))
                .ratio(self.panel.progress.clamp(0.0, 1.0))
                .label(format!("Scanning… {:.0}%", self.panel.progress * 100.0))
                .render(layout[2], buf);
        }

        let items: Vec<ListItem> = self
            .panel
            .results
            .iter()
            .map(|r| {
                ListItem::new(Line::from(vec![
                    Span::styled(
                        format!("[{:?}] ", r.risk_level),
                        Style::default().fg(risk_color(r.risk_level)),
                    ),
                    Span::raw(format!("{} — {}", r.title, r.location)),
                ]))
            })
            .collect();

        List::new(items)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(format!(" Results ({}) ", self.panel.results.len())),
            )
            .render(layout[3], buf);
    }
}
