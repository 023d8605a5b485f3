//! I/O surfaces for the Gaia console: structured errors, the notice
//! history log, local persistence, and fire-and-forget telemetry.

pub mod error;
pub mod history;
pub mod storage;
pub mod telemetry;

pub use error::{IoError, Result};
pub use history::HistoryLogger;
pub use storage::{MediaChoice, SavedState, SessionPrefs};
pub use telemetry::{EventSink, RestSink, TelemetryClient};
