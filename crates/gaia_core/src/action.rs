//! One-shot action handling.
//!
//! Actions are synchronous, user-triggered state mutations bound to a UI
//! control. Either the whole mutation succeeds and the handler reports its
//! notices, or validation rejects the input and the panel state is left
//! untouched. There is no rollback because there is never a partial write.
//!
//! Accumulating handlers (burn votes, deploy-all power boosts) are
//! non-idempotent: invoking them N times advances their counters N times.

use thiserror::Error;

/// Why a one-shot action was rejected.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ActionError {
    /// User input failed validation. The message is shown verbatim; no
    /// state was mutated.
    #[error("{0}")]
    Validation(String),

    /// The action referenced something that does not exist (stale id).
    #[error("unknown target: {0}")]
    UnknownTarget(String),

    /// The action cannot run right now (e.g. a search is already running).
    #[error("{0}")]
    Busy(String),
}

impl ActionError {
    #[must_use]
    pub fn validation<S: Into<String>>(msg: S) -> Self {
        Self::Validation(msg.into())
    }
}
