use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, List, ListItem, Widget};

use gaia_core::panels::ThreatsPanel;
use gaia_data::{ThreatSeverity, ThreatStatus};

pub struct ThreatsWidget<'a> {
    pub panel: &'a ThreatsPanel,
}

fn severity_color(severity: ThreatSeverity) -> Color {
    match severity {
        ThreatSeverity::Low => Color::Green,
        ThreatSeverity::Medium => Color::Yellow,
        ThreatSeverity::High => Color::Red,
        ThreatSeverity::Critical => Color::Magenta,
    }
}

impl<'a> Widget for ThreatsWidget<'a> {
    fn render(self, area: Rect, buf: &mut ratatui::buffer::Buffer) {
        let items: Vec<ListItem> = self
            .panel
            .feed
            .iter()
            .map(|t| {
                let status = match t.status {
                    ThreatStatus::Active => "ACTIVE",
                    ThreatStatus::Mitigated => "MITIGATED",
                    ThreatStatus::Resolved => "RESOLVED",
                };
                ListItem::new(Line::from(vec![
                    Span::styled(
                        format!("[{:?}] ", t.severity),
                        Style::default().fg(severity_color(t.severity)),
                    ),
                    Span::raw(format!("{} — {} ", t.kind, t.region)),
                    Span::styled(
                        format!("({} @ tick {})", status, t.tick),
                        Style::default().fg(Color::DarkGray),
                    ),
                ]))
            })
            .collect();

        let scan_state = if self.panel.scan_degraded {
            "SCAN DEGRADED"
        } else {
            "SCANNING"
        };
        List::new(items)
            .block(Block::default().borders(Borders::ALL).title(format!(
                " Threat Intelligence [{}] — {} blocked, {} countries, score {:.2} ",
                scan_state,
                self.panel.threats_blocked,
                self.panel.countries_protected,
                self.panel.security_score
            )))
            .render(area, buf);
    }
}
