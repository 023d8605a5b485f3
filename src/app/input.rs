use std::time::Instant;

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::style::Color;

use crate::app::state::{App, InputMode, COMMUNITY_URL};
use gaia_core::action::ActionError;
use gaia_core::panels::{GuardianAction, SearchAction, ThreatAction, TokenAction};
use gaia_core::Panel;
use gaia_data::Notice;

impl App {
    pub fn handle_key(&mut self, key: KeyEvent) {
        match self.input_mode.clone() {
            InputMode::Normal => self.handle_normal_key(key),
            InputMode::SearchQuery(buf) => self.handle_search_key(key, buf),
            InputMode::BurnAmount(buf) => self.handle_burn_key(key, buf),
        }
    }

    fn handle_normal_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') => self.running = false,
            KeyCode::Char(' ') => self.paused = !self.paused,
            KeyCode::Tab => self.view_mode = (self.view_mode + 1) % 4,
            KeyCode::Up => {
                self.selected_guardian = self.selected_guardian.saturating_sub(1);
            }
            KeyCode::Down => {
                if self.selected_guardian + 1 < self.guardians.roster.len() {
                    self.selected_guardian += 1;
                }
            }
            KeyCode::Char('t') => {
                if let Some(id) = self
                    .guardians
                    .roster
                    .get(self.selected_guardian)
                    .map(|g| g.id)
                {
                    let result = self.guardians.apply(
                        self.tick_count(),
                        GuardianAction::ToggleStatus(id),
                    );
                    self.report_action("guardians", result);
                }
            }
            KeyCode::Char('x') => {
                if let Some(id) = self
                    .guardians
                    .roster
                    .get(self.selected_guardian)
                    .map(|g| g.id)
                {
                    let result = self
                        .guardians
                        .apply(self.tick_count(), GuardianAction::ResetStats(id));
                    self.report_action("guardians", result);
                }
            }
            KeyCode::Char('a') => {
                let result = self
                    .guardians
                    .apply(self.tick_count(), GuardianAction::ActivateAll);
                self.report_action("guardians", result);
            }
            KeyCode::Char('d') => {
                let result = self
                    .guardians
                    .apply(self.tick_count(), GuardianAction::DeployAll);
                self.report_action("guardians", result);
            }
            KeyCode::Char('r') => {
                let result = self.threats.apply(self.tick_count(), ThreatAction::ResolveAll);
                self.report_action("threats", result);
            }
            KeyCode::Char('n') => {
                let result = self.threats.apply(self.tick_count(), ThreatAction::Rescan);
                self.report_action("threats", result);
                self.event_log
                    .push_back(("Rescan queued".to_string(), Color::Cyan));
            }
            KeyCode::Char('v') => {
                let result = self.token.apply(self.tick_count(), TokenAction::VoteBurn);
                self.report_action("token", result);
            }
            KeyCode::Char('b') => {
                self.view_mode = 3;
                self.input_mode = InputMode::BurnAmount(String::new());
            }
            KeyCode::Char('/') => {
                self.view_mode = 2;
                self.input_mode = InputMode::SearchQuery(String::new());
            }
            KeyCode::Char('c') => {
                let result = self
                    .search
                    .apply(self.tick_count(), SearchAction::ClearResults);
                self.report_action("search", result);
            }
            KeyCode::Char('m') => {
                let media = self.select_next_background();
                self.event_log
                    .push_back((format!("Background: {} ({})", media.id, media.kind), Color::Cyan));
            }
            KeyCode::Char('o') => {
                // External links only ever open in the user's own browser;
                // the console records the hand-off and shows the URL.
                self.telemetry
                    .record_link_opened(COMMUNITY_URL, self.tick_count());
                self.event_log
                    .push_back((format!("Community portal: {}", COMMUNITY_URL), Color::Cyan));
            }
            KeyCode::Char('s') => {
                if self.save_state().is_ok() {
                    self.event_log
                        .push_back(("State saved to save.json".to_string(), Color::Green));
                }
            }
            KeyCode::Char('y') => match self.logger.get_snapshots() {
                Ok(snaps) => {
                    let latest = snaps.last().map_or(0, |(tick, _)| *tick);
                    self.event_log.push_back((
                        format!(
                            "Session history: {} snapshots recorded, latest at tick {}",
                            snaps.len(),
                            latest
                        ),
                        Color::Cyan,
                    ));
                }
                Err(e) => {
                    self.event_log.push_back((e.to_string(), Color::Red));
                }
            },
            KeyCode::Char('B') => {
                if self.backup_state().is_ok() {
                    self.event_log
                        .push_back(("State backed up to backups/".to_string(), Color::Green));
                }
            }
            _ => {}
        }
    }

    fn handle_search_key(&mut self, key: KeyEvent, mut buf: String) {
        match key.code {
            KeyCode::Esc => self.input_mode = InputMode::Normal,
            KeyCode::Backspace => {
                buf.pop();
                self.input_mode = InputMode::SearchQuery(buf);
            }
            KeyCode::Enter => {
                self.input_mode = InputMode::Normal;
                self.begin_search(&buf);
            }
            KeyCode::Char(c) => {
                buf.push(c);
                self.input_mode = InputMode::SearchQuery(buf);
            }
            _ => self.input_mode = InputMode::SearchQuery(buf),
        }
    }

    /// Kicks off the staged search pipeline; stages are completed by the
    /// run loop as their artificial delays lapse.
    fn begin_search(&mut self, query: &str) {
        let tick = self.tick_count();
        match self.search.begin(tick, query) {
            Ok(notice) => {
                self.metrics.record_action("search", true);
                self.search_deadline = Some(Instant::now() + self.search.stage_delay());
                self.dispatch_notices(vec![notice]);
            }
            Err(e) => {
                self.metrics.record_action("search", false);
                self.event_log.push_back((e.to_string(), Color::Red));
            }
        }
    }

    fn handle_burn_key(&mut self, key: KeyEvent, mut buf: String) {
        match key.code {
            KeyCode::Esc => self.input_mode = InputMode::Normal,
            KeyCode::Backspace => {
                buf.pop();
                self.input_mode = InputMode::BurnAmount(buf);
            }
            KeyCode::Enter => {
                self.input_mode = InputMode::Normal;
                match buf.parse::<u64>() {
                    Ok(amount) => {
                        let result = self
                            .token
                            .apply(self.tick_count(), TokenAction::Burn { amount });
                        self.report_action("token", result);
                    }
                    Err(_) => {
                        self.metrics.record_action("token", false);
                        self.event_log
                            .push_back(("Enter a valid burn amount".to_string(), Color::Red));
                    }
                }
            }
            KeyCode::Char(c) if c.is_ascii_digit() => {
                buf.push(c);
                self.input_mode = InputMode::BurnAmount(buf);
            }
            _ => self.input_mode = InputMode::BurnAmount(buf),
        }
    }

    /// Routes an action outcome: notices fan out on success, rejected
    /// input surfaces as a blocking message with no state change.
    fn report_action(&mut self, panel: &'static str, result: Result<Vec<Notice>, ActionError>) {
        match result {
            Ok(notices) => {
                self.metrics.record_action(panel, true);
                self.dispatch_notices(notices);
            }
            Err(e) => {
                self.metrics.record_action(panel, false);
                self.event_log.push_back((e.to_string(), Color::Red));
            }
        }
    }
}
