pub mod input;
pub mod render;
pub mod shutdown;
pub mod state;

pub use shutdown::ShutdownManager;
pub use state::App;

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};
use std::sync::Arc;
use std::time::{Duration, Instant};

use gaia_data::{Notice, Severity};
use gaia_tui::Tui;
use ratatui::style::Color;

impl App {
    pub async fn run(&mut self, tui: &mut Tui) -> Result<()> {
        let mut last_config_check = Instant::now();

        // Setup shutdown handler
        let shutdown = Arc::new(ShutdownManager::new());
        let shutdown_clone = shutdown.clone();
        tokio::spawn(async move {
            tokio::signal::ctrl_c().await.ok();
            tracing::info!("Ctrl+C received, initiating graceful shutdown...");
            shutdown_clone.request_shutdown();
        });

        while self.running && !shutdown.is_shutdown_requested() {
            // Check for config reload every 2 seconds
            if last_config_check.elapsed() >= Duration::from_secs(2) {
                if let Ok(true) = self.check_config_reload() {
                    tracing::info!("Configuration hot-reloaded successfully");
                }
                last_config_check = Instant::now();
            }

            tui.terminal.draw(|f| {
                self.draw(f);
            })?;

            self.frame_count += 1;
            if self.last_fps_update.elapsed() >= Duration::from_secs(1) {
                self.update_frame_metrics();
            }

            // Use 1ms poll interval to prevent busy-waiting while remaining responsive
            while event::poll(Duration::from_millis(1))? {
                if let Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press {
                        self.handle_key(key);
                    }
                }
            }

            let notices = self.advance_panels();
            self.dispatch_notices(notices);
            self.poll_search();
            self.drain_hub();

            let frame_budget = Duration::from_millis(1000 / self.config.target_fps.max(1));
            tokio::time::sleep(frame_budget).await;
        }

        // Perform graceful shutdown
        if shutdown.is_shutdown_requested() {
            shutdown.cleanup(self).await?;
        }

        Ok(())
    }

    /// Runs a fixed number of engine ticks without a terminal, as fast as
    /// the panels allow. The artificial cadence is synthesized so a
    /// thousand-tick run does not take an hour of wall clock.
    pub fn run_headless(&mut self, ticks: u64) -> Result<()> {
        let interval = Duration::from_millis(self.config.engine.tick_interval_ms);
        for _ in 0..ticks {
            let notices = self.advance_panels_by(interval);
            self.dispatch_notices(notices);
            self.maybe_snapshot();
            if !self.running {
                break;
            }
        }
        self.save_state()?;
        tracing::info!(
            ticks = self.tick_count(),
            threats_blocked = self.threats.threats_blocked,
            total_power = self.guardians.stats.total_power,
            "Headless run finished"
        );
        Ok(())
    }

    fn update_frame_metrics(&mut self) {
        self.fps = self.frame_count as f64;
        self.frame_count = 0;

        self.power_history.pop_front();
        self.power_history
            .push_back(self.guardians.stats.total_power);

        self.blocked_history.pop_front();
        self.blocked_history.push_back(self.threats.threats_blocked);

        self.maybe_snapshot();
        self.last_fps_update = Instant::now();
    }

    fn maybe_snapshot(&mut self) {
        let tick = self.tick_count();
        if tick >= self.last_snapshot_tick + self.snapshot_interval {
            self.last_snapshot_tick = tick;
            let notice = Notice::Snapshot {
                tick,
                stats: self.guardians.stats,
                timestamp: chrono::Utc::now().to_rfc3339(),
            };
            self.dispatch_notices(vec![notice]);
        }
    }

    /// Advances the simulated search pipeline when its stage delay lapses.
    fn poll_search(&mut self) {
        let Some(deadline) = self.search_deadline else {
            return;
        };
        if Instant::now() < deadline {
            return;
        }

        let notices = self.search.advance_stage(self.tick_count());
        self.search_deadline = if self.search.searching {
            Some(Instant::now() + self.search.stage_delay())
        } else {
            None
        };
        self.dispatch_notices(notices);
    }

    /// Fans a batch of notices out to the history log, telemetry, and the
    /// notification hub. Log failures are swallowed; they must never stall
    /// the render loop.
    pub fn dispatch_notices(&mut self, notices: Vec<Notice>) {
        for notice in notices {
            if let Err(e) = self.logger.log_notice(&notice) {
                tracing::warn!(error = %e, "failed to append notice to history");
            }
            self.telemetry.record_notice(&notice);

            // Full deployments also go out through the outreach function.
            if let Notice::DeploymentComplete {
                active,
                total_power,
                tick,
                ..
            } = &notice
            {
                self.telemetry.invoke(
                    "broadcast-deployment",
                    serde_json::json!({
                        "active": active,
                        "total_power": total_power,
                    }),
                    *tick,
                );
            }

            self.hub.publish(notice);
        }
    }

    /// Moves delivered notifications into the on-screen event log.
    fn drain_hub(&mut self) {
        for notice in self.hub.consume() {
            let (msg, color) = notice.to_ui_message();
            self.event_log.push_back((msg, color));
            while self.event_log.len() > 15 {
                self.event_log.pop_front();
            }
        }
    }
}

trait NoticeExt {
    fn to_ui_message(&self) -> (String, Color);
}

impl NoticeExt for Notice {
    fn to_ui_message(&self) -> (String, Color) {
        let color = match self.severity() {
            Severity::Info => Color::DarkGray,
            Severity::Success => Color::Green,
            Severity::Warning => Color::Yellow,
            Severity::Alert => Color::Red,
        };
        let msg = match self {
            Notice::ThreatDetected {
                region,
                kind,
                severity,
                ..
            } => format!("⚠️ {:?} threat in {}: {}", severity, region, kind),
            Notice::ThreatsResolved { count, .. } => {
                format!("✔ {} threats marked resolved", count)
            }
            Notice::GuardianSurge {
                name, power_gain, ..
            } => format!("⚡ {} surged (+{} power)", name, power_gain),
            Notice::DeploymentComplete {
                active,
                total_power,
                ..
            } => format!(
                "🛡️ Army deployed: {} guardians at {} power",
                active, total_power
            ),
            Notice::StatusChanged { name, status, .. } => {
                format!("{} is now {}", name, status)
            }
            Notice::StatsReset { name, .. } => format!("{} stats reset", name),
            Notice::SearchStage {
                stage,
                total,
                label,
                ..
            } => format!("🔍 [{}/{}] {}", stage, total, label),
            Notice::SearchComplete { query, results, .. } => {
                format!("🔍 Search \"{}\" complete: {} results", query, results)
            }
            Notice::Burned {
                amount,
                circulating,
                ..
            } => format!("🔥 Burned {} tokens ({} circulating)", amount, circulating),
            Notice::BurnVote { votes, .. } => format!("🗳️ Burn vote registered ({})", votes),
            Notice::Broadcast { message, .. } => format!("📡 {}", message),
            Notice::ScanFault { .. } => "Scan grid degraded, self-healing".to_string(),
            Notice::RemoteFailure { operation, .. } => {
                format!("Remote call failed: {}", operation)
            }
            Notice::Snapshot { tick, .. } => format!("🏛️ Snapshot saved at tick {}", tick),
        };
        (msg, color)
    }
}
