use ratatui::layout::{Constraint, Rect};
use ratatui::style::{Color, Style};
use ratatui::widgets::{Block, Borders, Cell, Row, Table, Widget};

use gaia_core::panels::GuardiansPanel;
use gaia_data::GuardianStatus;

pub struct GuardiansWidget<'a> {
    pub panel: &'a GuardiansPanel,
    pub selected: usize,
}

fn status_color(status: GuardianStatus) -> Color {
    match status {
        GuardianStatus::Active => Color::Green,
        GuardianStatus::Training => Color::Blue,
        GuardianStatus::Defending => Color::Magenta,
        GuardianStatus::Hunting => Color::Red,
    }
}

impl<'a> Widget for GuardiansWidget<'a> {
    fn render(self, area: Rect, buf: &mut ratatui::buffer::Buffer) {
        let header = Row::new(vec!["", "Name", "Lv", "Power", "Status", "Eliminated"])
            .style(Style::default().fg(Color::Cyan));

        let rows: Vec<Row> = self
            .panel
            .roster
            .iter()
            .enumerate()
            .map(|(i, g)| {
                let marker = if i == self.selected { ">" } else { " " };
                let row = Row::new(vec![
                    Cell::from(format!("{}{}", marker, g.kind.glyph())),
                    Cell::from(g.name.clone()),
                    Cell::from(g.level.to_string()),
                    Cell::from(g.power.to_string()),
                    Cell::from(format!("{:?}", g.status).to_uppercase())
                        .style(Style::default().fg(status_color(g.status))),
                    Cell::from(g.threats_eliminated.to_string()),
                ]);
                if i == self.selected {
                    row.style(Style::default().fg(Color::Yellow))
                } else {
                    row
                }
            })
            .collect();

        let stats = self.panel.stats;
        Table::new(
            rows,
            [
                Constraint::Length(3),
                Constraint::Min(24),
                Constraint::Length(4),
                Constraint::Length(10),
                Constraint::Length(10),
                Constraint::Length(10),
            ],
        )
        .header(header)
        .block(Block::default().borders(Borders::ALL).title(format!(
            " Guardian Army — {} on duty, power {} ",
            stats.active_guardians, stats.total_power
        )))
        .render(area, buf);
    }
}
