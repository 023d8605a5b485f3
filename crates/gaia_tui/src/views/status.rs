use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::{Gauge, Paragraph, Widget};

use gaia_data::{ArmyStats, TokenLedger};

pub struct StatusWidget<'a> {
    pub tick: u64,
    pub seed: u64,
    pub fps: f64,
    pub paused: bool,
    pub army: &'a ArmyStats,
    pub security_score: f64,
    pub threats_blocked: u64,
    pub ledger: &'a TokenLedger,
    pub view_mode: u8,
}

impl<'a> Widget for StatusWidget<'a> {
    fn render(self, area: Rect, buf: &mut ratatui::buffer::Buffer) {
        let status_lines = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1),
                Constraint::Length(1),
                Constraint::Length(1),
                Constraint::Length(1),
            ])
            .split(area);

        let line1 = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(40), Constraint::Percentage(60)])
            .split(status_lines[0]);

        let score_gauge = Gauge::default()
            .gauge_style(Style::default().fg(Color::Green))
            .percent(self.security_score.clamp(0.0, 100.0) as u16)
            .label(format!("Security: {:.2}%", self.security_score));
        score_gauge.render(line1[0], buf);

        let run_state = if self.paused { "PAUSED" } else { "LIVE" };
        Paragraph::new(format!(
            " | {} | Tick: {} | Seed: {} | FPS: {:.0}",
            run_state, self.tick, self.seed, self.fps
        ))
        .style(Style::default().fg(if self.paused {
            Color::Yellow
        } else {
            Color::Green
        }))
        .render(line1[1], buf);

        let view_str = match self.view_mode {
            1 => " [Threats] ",
            2 => " [Search] ",
            3 => " [Token] ",
            _ => " [Guardians] ",
        };

        let army_stats = vec![
            ratatui::text::Span::styled(view_str, Style::default().fg(Color::Cyan)),
            ratatui::text::Span::styled("Army: ", Style::default().add_modifier(Modifier::BOLD)),
            ratatui::text::Span::raw(format!(
                "{} active | Power: {} | Eliminated: {} | Avg Lv: {}",
                self.army.active_guardians,
                self.army.total_power,
                self.army.total_eliminated,
                self.army.average_level,
            )),
        ];
        Paragraph::new(ratatui::text::Line::from(army_stats))
            .style(Style::default().fg(Color::DarkGray))
            .render(status_lines[1], buf);

        let market = vec![
            ratatui::text::Span::styled("Token: ", Style::default().fg(Color::Yellow)),
            ratatui::text::Span::raw(format!(
                "${:.4} | Circulating: {} | Burned: {} | Holders: {} | Blocked: {}",
                self.ledger.price_usd,
                self.ledger.circulating,
                self.ledger.burned,
                self.ledger.holders,
                self.threats_blocked,
            )),
        ];
        Paragraph::new(ratatui::text::Line::from(market))
            .style(Style::default().fg(Color::DarkGray))
            .render(status_lines[2], buf);

        let legend = " [Tab] View | [Space] Pause | [a] Activate | [d] Deploy | [r] Resolve | [v] Vote | [b] Burn | [/] Search | [s] Save | [q] Quit ";
        Paragraph::new(legend)
            .style(Style::default().fg(Color::DarkGray))
            .render(status_lines[3], buf);
    }
}
