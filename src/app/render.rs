use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::style::Style;
use ratatui::text::Span;
use ratatui::widgets::{Block, Borders, List, ListItem};
use ratatui::Frame;

use crate::app::state::{App, InputMode};
use gaia_tui::views::guardians::GuardiansWidget;
use gaia_tui::views::search::SearchWidget;
use gaia_tui::views::sparklines::SparklinesWidget;
use gaia_tui::views::status::StatusWidget;
use gaia_tui::views::threats::ThreatsWidget;
use gaia_tui::views::token::TokenWidget;

impl App {
    pub fn draw(&mut self, f: &mut Frame) {
        let power_data = self.power_history.make_contiguous().to_vec();
        let blocked_data = self.blocked_history.make_contiguous().to_vec();

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(4),
                Constraint::Length(4),
                Constraint::Min(10),
                Constraint::Length(8),
            ])
            .split(f.area());

        f.render_widget(
            StatusWidget {
                tick: self.tick_count(),
                seed: self.seed,
                fps: self.fps,
                paused: self.paused,
                army: &self.guardians.stats,
                security_score: self.threats.security_score,
                threats_blocked: self.threats.threats_blocked,
                ledger: &self.token.ledger,
                view_mode: self.view_mode,
            },
            chunks[0],
        );

        f.render_widget(
            SparklinesWidget {
                power_data: &power_data,
                blocked_data: &blocked_data,
            },
            chunks[1],
        );

        match self.view_mode {
            1 => f.render_widget(
                ThreatsWidget {
                    panel: &self.threats,
                },
                chunks[2],
            ),
            2 => {
                let input = match &self.input_mode {
                    InputMode::SearchQuery(buf) => Some(buf.as_str()),
                    _ => None,
                };
                f.render_widget(
                    SearchWidget {
                        panel: &self.search,
                        input,
                    },
                    chunks[2],
                );
            }
            3 => {
                let burn_input = match &self.input_mode {
                    InputMode::BurnAmount(buf) => Some(buf.as_str()),
                    _ => None,
                };
                f.render_widget(
                    TokenWidget {
                        panel: &self.token,
                        burn_input,
                    },
                    chunks[2],
                );
            }
            _ => f.render_widget(
                GuardiansWidget {
                    panel: &self.guardians,
                    selected: self.selected_guardian,
                },
                chunks[2],
            ),
        }

        let items: Vec<ListItem> = self
            .event_log
            .iter()
            .rev()
            .map(|(msg, color)| {
                ListItem::new(Span::styled(msg.clone(), Style::default().fg(*color)))
            })
            .collect();
        f.render_widget(
            List::new(items).block(Block::default().borders(Borders::ALL).title(" Events ")),
            chunks[3],
        );
    }
}
