//! The periodic updater.
//!
//! Advances a panel on a fixed cadence without blocking the render loop,
//! and rolls an optional broadcast notice after each committed tick.
//!
//! Timing is accumulator-based: the host loop reports elapsed wall-clock
//! time and the ticker fires one tick per whole interval contained in the
//! accumulated total, carrying the remainder. No tick fires before its
//! interval has elapsed and no fractional tick ever occurs. If the host
//! loop stalls, the missed whole intervals fire together on the next
//! `advance` call; ticks are never silently dropped while the ticker is
//! live, and never delivered after cancellation.
//!
//! Failure semantics are fail-open: a panel tick runs against a clone of
//! the state and commits only on `Ok`. An `Err` is logged and the previous
//! state is retained bit-for-bit.

use std::time::Duration;

use gaia_data::Notice;
use tokio::sync::watch;
use tokio::time::MissedTickBehavior;

use crate::panel::{now_rfc3339, Panel};
use crate::rng::SimRng;

/// Cadence and broadcast configuration for one panel's updater.
#[derive(Debug, Clone)]
pub struct TickerConfig {
    pub interval: Duration,
    /// Probability of emitting a broadcast notice after a committed tick.
    pub notify_probability: f64,
    pub notify_messages: Vec<String>,
}

impl Default for TickerConfig {
    fn default() -> Self {
        Self {
            interval: Duration::from_secs(3),
            notify_probability: 0.0,
            notify_messages: Vec::new(),
        }
    }
}

/// Accumulator-based periodic updater for a single panel.
pub struct Ticker {
    config: TickerConfig,
    carry: Duration,
    fired: u64,
    cancelled: bool,
}

impl Ticker {
    #[must_use]
    pub fn new(config: TickerConfig) -> Self {
        Self {
            config,
            carry: Duration::ZERO,
            fired: 0,
            cancelled: false,
        }
    }

    #[must_use]
    pub fn interval(&self) -> Duration {
        self.config.interval
    }

    /// Total ticks committed so far.
    #[must_use]
    pub fn fired(&self) -> u64 {
        self.fired
    }

    /// Resumes tick numbering from a saved session.
    pub fn resume_at(&mut self, fired: u64) {
        self.fired = fired;
    }

    /// Stops the updater. All subsequent `advance` calls fire zero ticks.
    pub fn cancel(&mut self) {
        self.cancelled = true;
    }

    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        self.cancelled
    }

    /// Number of whole intervals due after accumulating `elapsed`.
    ///
    /// The remainder is carried to the next call.
    fn due(&mut self, elapsed: Duration) -> u64 {
        if self.cancelled || self.config.interval.is_zero() {
            return 0;
        }
        self.carry += elapsed;
        let interval = self.config.interval.as_nanos();
        let ticks = (self.carry.as_nanos() / interval) as u64;
        if ticks > 0 {
            let consumed = interval * u128::from(ticks);
            self.carry -= Duration::from_nanos(consumed as u64);
        }
        ticks
    }

    /// Accumulates `elapsed` and applies every due tick to `panel`.
    ///
    /// Returns the notices emitted by committed ticks, including any
    /// broadcast rolls. A tick whose `Panel::tick` errors is swallowed:
    /// the error is logged and the pre-tick state retained.
    pub fn advance<P>(&mut self, panel: &mut P, rng: &mut SimRng, elapsed: Duration) -> Vec<Notice>
    where
        P: Panel + Clone,
    {
        let due = self.due(elapsed);
        let mut notices = Vec::new();

        for _ in 0..due {
            let tick = self.fired + 1;
            rng.reseed_for_tick(tick);

            let mut staged = panel.clone();
            match staged.tick(tick, rng) {
                Ok(emitted) => {
                    *panel = staged;
                    self.fired = tick;
                    notices.extend(emitted);
                    if rng.chance(self.config.notify_probability) {
                        if let Some(message) = rng.pick(&self.config.notify_messages) {
                            notices.push(Notice::Broadcast {
                                message: message.clone(),
                                tick,
                                timestamp: now_rfc3339(),
                            });
                        }
                    }
                }
                Err(e) => {
                    // Fail open: keep the previous state, count the tick as
                    // fired so the cadence does not replay it.
                    self.fired = tick;
                    tracing::warn!(panel = panel.name(), tick, error = %e, "panel tick failed");
                }
            }
        }

        notices
    }
}

/// Drives a panel on a real timer until the shutdown token flips.
///
/// Used by headless mode and background panels. The interval timer delays
/// missed ticks rather than bursting, matching host-loop deprioritization
/// behavior. Cancellation is prompt: once `shutdown` observes `true`, no
/// further tick is delivered.
pub async fn run<P, F>(
    mut panel: P,
    mut ticker: Ticker,
    mut rng: SimRng,
    mut shutdown: watch::Receiver<bool>,
    mut on_notices: F,
) -> P
where
    P: Panel + Clone,
    F: FnMut(&P, Vec<Notice>),
{
    let mut interval = tokio::time::interval(ticker.interval());
    interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
    // An interval's first tick completes immediately; consume it so the
    // first panel tick only fires after a full period.
    interval.tick().await;

    loop {
        tokio::select! {
            _ = interval.tick() => {
                let step = ticker.interval();
                let notices = ticker.advance(&mut panel, &mut rng, step);
                on_notices(&panel, notices);
            }
            _ = shutdown.changed() => {
                if *shutdown.borrow() {
                    ticker.cancel();
                    break;
                }
            }
        }
    }

    panel
}
