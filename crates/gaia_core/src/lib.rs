//! # Gaia Core
//!
//! The simulation engine behind the Gaia console — a terminal dashboard
//! whose screens are periodic, seed-deterministic metric simulations.
//!
//! This crate contains:
//! - The periodic updater contract (accumulator-based ticking, fail-open
//!   commit, probabilistic broadcasts)
//! - One-shot action handling with validation
//! - The generic [`panel::Panel`] abstraction and the four concrete panels
//!   (guardian army, threat feed, global search, token mechanics)
//! - Deterministic RNG so every session is replayable from its seed
//! - Configuration and metrics collection
//!
//! ## Example
//!
//! ```
//! use gaia_core::config::GuardiansConfig;
//! use gaia_core::panels::GuardiansPanel;
//! use gaia_core::rng::SimRng;
//! use gaia_core::ticker::{Ticker, TickerConfig};
//! use std::time::Duration;
//!
//! let mut panel = GuardiansPanel::new(GuardiansConfig::default());
//! let mut ticker = Ticker::new(TickerConfig {
//!     interval: Duration::from_secs(3),
//!     ..Default::default()
//! });
//! let mut rng = SimRng::new(42);
//!
//! // Nine seconds elapsed: exactly three ticks fire.
//! let notices = ticker.advance(&mut panel, &mut rng, Duration::from_secs(9));
//! assert_eq!(ticker.fired(), 3);
//! drop(notices);
//! ```

/// One-shot action outcomes and validation errors
pub mod action;
/// Configuration management for engine parameters
pub mod config;
/// Engine metrics collection and logging
pub mod metrics;
/// The generic dashboard-panel contract
pub mod panel;
/// Concrete panel implementations
pub mod panels;
/// Deterministic random outcomes
pub mod rng;
/// The periodic updater
pub mod ticker;

pub use action::ActionError;
pub use config::AppConfig;
pub use metrics::{init_logging, Metrics};
pub use panel::Panel;
pub use rng::SimRng;
pub use ticker::{Ticker, TickerConfig};
