use std::collections::VecDeque;
use std::sync::Arc;
use std::time::{Duration, Instant};

use anyhow::Result;
use ratatui::style::Color;

use gaia_core::config::AppConfig;
use gaia_core::panels::{GuardiansPanel, SearchPanel, ThreatsPanel, TokenPanel};
use gaia_core::rng::SimRng;
use gaia_core::ticker::{Ticker, TickerConfig};
use gaia_core::Metrics;
use gaia_io::storage::{self, MediaChoice, SavedState, SessionPrefs};
use gaia_io::telemetry::{RestSink, TelemetryClient};
use gaia_io::HistoryLogger;
use gaia_notify::NotificationHub;

/// Keyboard focus: normal hotkeys, or line-editing a query/amount.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputMode {
    Normal,
    SearchQuery(String),
    BurnAmount(String),
}

/// Background media the user can cycle through. The choice is remembered
/// in `prefs.json` across sessions.
pub const BACKGROUNDS: [(&str, &str, &str); 4] = [
    (
        "forest-canopy",
        "video",
        "https://cdn.gaia.example/backgrounds/forest-canopy.mp4",
    ),
    (
        "ocean-dawn",
        "video",
        "https://cdn.gaia.example/backgrounds/ocean-dawn.mp4",
    ),
    (
        "aurora",
        "image",
        "https://cdn.gaia.example/backgrounds/aurora.jpg",
    ),
    (
        "earth-orbit",
        "video",
        "https://cdn.gaia.example/backgrounds/earth-orbit.mp4",
    ),
];

pub const COMMUNITY_URL: &str = "https://community.gaia.example/harmony";

/// Decorrelates the per-panel RNG streams from the shared session seed.
fn panel_seed(seed: u64, index: u64) -> u64 {
    seed.wrapping_add(index.wrapping_mul(0x9E37_79B9_7F4A_7C15))
}

pub struct App {
    pub running: bool,
    pub paused: bool,
    pub config: AppConfig,
    pub config_path: String,
    pub config_last_modified: Option<std::time::SystemTime>,
    // FPS & Timing
    pub fps: f64,
    pub frame_count: u64,
    pub last_fps_update: Instant,
    pub last_advance: Instant,
    // Engine
    pub seed: u64,
    pub guardians: GuardiansPanel,
    pub threats: ThreatsPanel,
    pub search: SearchPanel,
    pub token: TokenPanel,
    pub guardians_ticker: Ticker,
    pub threats_ticker: Ticker,
    pub search_ticker: Ticker,
    pub token_ticker: Ticker,
    guardians_rng: SimRng,
    threats_rng: SimRng,
    search_rng: SimRng,
    token_rng: SimRng,
    /// Deadline for the next simulated search stage, while one is running.
    pub search_deadline: Option<Instant>,
    // UI state
    pub input_mode: InputMode,
    pub selected_guardian: usize,
    pub view_mode: u8,
    // Sinks
    pub logger: HistoryLogger,
    pub hub: NotificationHub,
    pub telemetry: TelemetryClient,
    pub metrics: Metrics,
    // Preferences
    pub prefs: SessionPrefs,
    pub prefs_path: String,
    // Live Data
    pub event_log: VecDeque<(String, Color)>,
    pub power_history: VecDeque<u64>,
    pub blocked_history: VecDeque<u64>,
    pub snapshot_interval: u64,
    pub last_snapshot_tick: u64,
}

impl App {
    pub fn load_config(config_path: &str) -> AppConfig {
        if let Ok(content) = std::fs::read_to_string(config_path) {
            match AppConfig::from_toml(&content) {
                Ok(config) => return config,
                Err(e) => {
                    eprintln!("Warning: Failed to load {}: {}", config_path, e);
                }
            }
        }
        let default = AppConfig::default();
        if !std::path::Path::new(config_path).exists() {
            if let Ok(toml_str) = toml::to_string(&default) {
                let _ = std::fs::write(config_path, toml_str);
            }
        }
        default
    }

    pub fn new(config_path: &str, seed_override: Option<u64>) -> Result<Self> {
        let config = Self::load_config(config_path);
        let prefs_path = "prefs.json".to_string();
        let mut prefs = SessionPrefs::load(&prefs_path);

        let seed = seed_override
            .or(config.engine.seed)
            .unwrap_or_else(rand::random);
        prefs.seed = Some(seed);
        if let Err(e) = prefs.save(&prefs_path) {
            tracing::warn!(error = %e, "failed to persist session preferences");
        }

        let interval = Duration::from_millis(config.engine.tick_interval_ms);
        // Broadcast rolls ride on the guardian cadence only, so one engine
        // tick never yields four copies of the same message.
        let mut guardians_ticker = Ticker::new(TickerConfig {
            interval,
            notify_probability: config.engine.notify_probability,
            notify_messages: config.engine.notify_messages.clone(),
        });
        let quiet = |interval| {
            Ticker::new(TickerConfig {
                interval,
                ..Default::default()
            })
        };
        let mut threats_ticker = quiet(interval);
        let mut search_ticker = quiet(interval);
        let mut token_ticker = quiet(interval);

        let mut guardians = GuardiansPanel::new(config.guardians.clone());
        let mut threats = ThreatsPanel::new(config.threats.clone());
        let mut search = SearchPanel::new(config.search.clone());
        let mut token = TokenPanel::new(config.token.clone());

        let mut last_snapshot_tick = 0;
        if storage::state_exists("save.json") {
            match storage::load_state("save.json") {
                Ok(saved) => {
                    guardians = GuardiansPanel::from_roster(config.guardians.clone(), saved.roster);
                    threats.feed = saved.threats.into();
                    threats.threats_blocked = saved.threats_blocked;
                    threats.security_score = saved.security_score;
                    search.metrics = saved.search_metrics;
                    token.ledger = saved.ledger;
                    guardians_ticker.resume_at(saved.tick);
                    threats_ticker.resume_at(saved.tick);
                    search_ticker.resume_at(saved.tick);
                    token_ticker.resume_at(saved.tick);
                    last_snapshot_tick = saved.tick;
                }
                Err(e) => {
                    tracing::error!("Failed to load save file: {}", e);
                }
            }
        }

        let hub = NotificationHub::default();

        let telemetry = if config.telemetry.enabled {
            let sink = Arc::new(RestSink::new(
                config.telemetry.endpoint.clone(),
                Duration::from_secs(config.telemetry.request_timeout_secs),
                config.telemetry.max_retries,
            ));
            let publisher = hub.publisher();
            TelemetryClient::new(sink, config.telemetry.events_table.clone())
                .with_failure_handler(Arc::new(move |operation: &str, tick: u64| {
                    publisher.publish(gaia_data::Notice::RemoteFailure {
                        operation: operation.to_string(),
                        tick,
                        timestamp: chrono::Utc::now().to_rfc3339(),
                    });
                }))
        } else {
            TelemetryClient::disabled()
        };

        let logger = match HistoryLogger::new() {
            Ok(logger) => logger,
            Err(e) => {
                tracing::warn!(error = %e, "history log unavailable, running without it");
                HistoryLogger::new_dummy()
            }
        };

        let config_last_modified = std::fs::metadata(config_path)
            .ok()
            .and_then(|m| m.modified().ok());

        Ok(Self {
            running: true,
            paused: false,
            config,
            config_path: config_path.to_string(),
            config_last_modified,
            fps: 0.0,
            frame_count: 0,
            last_fps_update: Instant::now(),
            last_advance: Instant::now(),
            seed,
            guardians,
            threats,
            search,
            token,
            guardians_ticker,
            threats_ticker,
            search_ticker,
            token_ticker,
            guardians_rng: SimRng::new(panel_seed(seed, 0)),
            threats_rng: SimRng::new(panel_seed(seed, 1)),
            search_rng: SimRng::new(panel_seed(seed, 2)),
            token_rng: SimRng::new(panel_seed(seed, 3)),
            search_deadline: None,
            input_mode: InputMode::Normal,
            selected_guardian: 0,
            view_mode: 0,
            logger,
            hub,
            telemetry,
            metrics: Metrics::new(),
            prefs,
            prefs_path,
            event_log: VecDeque::with_capacity(15),
            power_history: VecDeque::from(vec![0; 60]),
            blocked_history: VecDeque::from(vec![0; 60]),
            snapshot_interval: 50,
            last_snapshot_tick,
        })
    }

    /// The engine tick all panels share.
    #[must_use]
    pub fn tick_count(&self) -> u64 {
        self.guardians_ticker.fired()
    }

    /// Advances all panel tickers by the time elapsed since the last call.
    pub fn advance_panels(&mut self) -> Vec<gaia_data::Notice> {
        let elapsed = self.last_advance.elapsed();
        self.last_advance = Instant::now();
        if self.paused {
            return Vec::new();
        }
        self.advance_panels_by(elapsed)
    }

    /// Advances all panel tickers by a synthesized duration. Headless runs
    /// use this to decouple the cadence from wall clock.
    pub fn advance_panels_by(&mut self, elapsed: Duration) -> Vec<gaia_data::Notice> {
        let started = Instant::now();
        let mut notices =
            self.guardians_ticker
                .advance(&mut self.guardians, &mut self.guardians_rng, elapsed);
        notices.extend(
            self.threats_ticker
                .advance(&mut self.threats, &mut self.threats_rng, elapsed),
        );
        notices.extend(
            self.search_ticker
                .advance(&mut self.search, &mut self.search_rng, elapsed),
        );
        notices.extend(
            self.token_ticker
                .advance(&mut self.token, &mut self.token_rng, elapsed),
        );

        if !notices.is_empty() {
            self.metrics.record_tick(started.elapsed(), notices.len());
        }
        notices
    }

    fn snapshot(&self) -> SavedState {
        SavedState {
            tick: self.tick_count(),
            seed: self.seed,
            roster: self.guardians.roster.clone(),
            army_stats: self.guardians.stats,
            threats: self.threats.feed.iter().cloned().collect(),
            threats_blocked: self.threats.threats_blocked,
            security_score: self.threats.security_score,
            search_metrics: self.search.metrics,
            ledger: self.token.ledger.clone(),
        }
    }

    pub fn save_state(&mut self) -> Result<()> {
        storage::save_state(&self.snapshot(), "save.json")?;
        Ok(())
    }

    pub fn backup_state(&mut self) -> Result<()> {
        let timestamp = chrono::Utc::now().format("%Y-%m-%d_%H-%M-%S");
        let filename = format!("backups/console_{}.json", timestamp);
        std::fs::create_dir_all("backups")?;
        storage::save_state(&self.snapshot(), &filename)?;
        Ok(())
    }

    /// Cycles the persisted background media choice.
    pub fn select_next_background(&mut self) -> MediaChoice {
        let current = self
            .prefs
            .background_media
            .as_ref()
            .and_then(|m| BACKGROUNDS.iter().position(|(id, _, _)| *id == m.id));
        let next = current.map_or(0, |i| (i + 1) % BACKGROUNDS.len());
        let (id, kind, url) = BACKGROUNDS[next];
        let choice = MediaChoice {
            id: id.to_string(),
            kind: kind.to_string(),
            url: url.to_string(),
        };
        self.prefs.background_media = Some(choice.clone());
        if let Err(e) = self.prefs.save(&self.prefs_path) {
            tracing::warn!(error = %e, "failed to persist background choice");
        }
        choice
    }

    pub fn check_config_reload(&mut self) -> Result<bool> {
        let config_path = &self.config_path;
        if let Ok(metadata) = std::fs::metadata(config_path) {
            let modified = metadata.modified()?;
            if Some(modified) != self.config_last_modified {
                let new_config = Self::load_config(config_path);

                // Only hot-swap the behavioral sections. Cadence, seed, and
                // telemetry wiring are fixed for the session.
                self.config.guardians = new_config.guardians;
                self.config.threats = new_config.threats;
                self.config.search = new_config.search;
                self.config.token = new_config.token;
                self.config.target_fps = new_config.target_fps;

                self.guardians.set_config(self.config.guardians.clone());
                self.threats.set_config(self.config.threats.clone());
                self.search.set_config(self.config.search.clone());
                self.token.set_config(self.config.token.clone());

                self.config_last_modified = Some(modified);

                self.event_log.push_back((
                    format!("Configuration reloaded from {}", config_path),
                    Color::Green,
                ));

                return Ok(true);
            }
        }
        Ok(false)
    }
}
