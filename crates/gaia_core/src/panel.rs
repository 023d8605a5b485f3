//! The generic dashboard-panel contract.
//!
//! Every dashboard screen in the product is the same shape: a metrics
//! record advanced on a cadence, a handful of one-shot actions, and a
//! stream of transient notices. Rather than duplicating that shape per
//! screen, panels implement this trait and the [`crate::ticker`] drives
//! them.

use gaia_data::Notice;

use crate::action::ActionError;
use crate::rng::SimRng;

/// A self-contained dashboard panel.
///
/// Panels are leaves: no panel reads another panel's state, so the app can
/// own them all and tick them independently without any locking.
pub trait Panel {
    /// One-shot actions this panel accepts.
    type Action;

    /// Short identifier used in logs and metrics counters.
    fn name(&self) -> &'static str;

    /// Advances the panel by one tick.
    ///
    /// `tick` is the engine tick being applied and `rng` is already
    /// reseeded for it. An `Err` from this method must leave `self`
    /// unchanged from the caller's perspective; the ticker guarantees that
    /// by ticking a clone and committing only on `Ok`.
    fn tick(&mut self, tick: u64, rng: &mut SimRng) -> anyhow::Result<Vec<Notice>>;

    /// Applies a one-shot action synchronously.
    ///
    /// On `Err` the state is untouched and the error carries the
    /// user-facing message.
    fn apply(&mut self, tick: u64, action: Self::Action) -> Result<Vec<Notice>, ActionError>;
}

/// RFC 3339 timestamp for notice emission.
#[must_use]
pub fn now_rfc3339() -> String {
    chrono::Utc::now().to_rfc3339()
}
