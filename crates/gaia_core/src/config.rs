//! Configuration management for the console.
//!
//! Strongly-typed sections mapping to `config.toml`. Defaults are written
//! out on first run; an invalid file falls back to defaults with a logged
//! warning.
//!
//! ## Example `config.toml`
//!
//! ```toml
//! [engine]
//! tick_interval_ms = 3000
//! seed = 42
//! deterministic = true
//!
//! [threats]
//! spawn_chance = 0.3
//!
//! [telemetry]
//! enabled = false
//! ```

use serde::{Deserialize, Serialize};

/// Cadence and randomness for the whole engine.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct EngineConfig {
    /// Base panel tick interval in milliseconds.
    pub tick_interval_ms: u64,
    pub seed: Option<u64>,
    /// When set, all outcomes are a pure function of (seed, tick).
    pub deterministic: bool,
    /// Probability of a broadcast notice after a committed tick.
    pub notify_probability: f64,
    pub notify_messages: Vec<String>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            tick_interval_ms: 3000,
            seed: None,
            deterministic: false,
            notify_probability: 0.05,
            notify_messages: vec![
                "Global monitoring sweep complete".to_string(),
                "All guardian channels nominal".to_string(),
                "Harmony grid synchronized".to_string(),
            ],
        }
    }
}

/// Guardian army activity rates.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct GuardiansConfig {
    /// Chance per tick that the roster sees any activity at all.
    pub activity_chance: f64,
    /// Chance per guardian of a surge once the roster is active.
    pub surge_chance: f64,
    pub max_threat_gain: u64,
    pub max_power_gain: u64,
    pub deploy_power_multiplier: f64,
}

impl Default for GuardiansConfig {
    fn default() -> Self {
        Self {
            activity_chance: 0.3,
            surge_chance: 0.2,
            max_threat_gain: 3,
            max_power_gain: 1000,
            deploy_power_multiplier: 1.5,
        }
    }
}

/// Threat feed spawn behavior.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct ThreatsConfig {
    pub spawn_chance: f64,
    /// Most recent entries kept in the feed.
    pub feed_capacity: usize,
    /// Severity roll cutoffs: above `high_cutoff` is High, above
    /// `medium_cutoff` is Medium, the rest Low.
    pub high_cutoff: f64,
    pub medium_cutoff: f64,
    /// Chance per tick that the scan pass comes back degraded.
    pub fault_chance: f64,
}

impl Default for ThreatsConfig {
    fn default() -> Self {
        Self {
            spawn_chance: 0.3,
            feed_capacity: 20,
            high_cutoff: 0.8,
            medium_cutoff: 0.6,
            fault_chance: 0.02,
        }
    }
}

/// Simulated search pipeline.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct SearchConfig {
    /// Artificial per-stage latency. Zero in tests.
    pub stage_delay_ms: u64,
    pub max_document_drift: u64,
    pub max_file_drift: u64,
    pub max_database_drift: u64,
    pub max_trace_drift: u64,
    /// Global reach percentage never exceeds this.
    pub reach_cap: f64,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            stage_delay_ms: 1500,
            max_document_drift: 10_000,
            max_file_drift: 100,
            max_database_drift: 50,
            max_trace_drift: 5,
            reach_cap: 99.9,
        }
    }
}

/// Token panel drift rates.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct TokenConfig {
    /// Maximum absolute per-tick price move, in USD.
    pub max_price_drift: f64,
    pub max_holder_growth: u64,
}

impl Default for TokenConfig {
    fn default() -> Self {
        Self {
            max_price_drift: 0.0002,
            max_holder_growth: 25,
        }
    }
}

/// Remote event logging. Fire-and-forget; failures never block the app.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct TelemetryConfig {
    pub enabled: bool,
    pub endpoint: String,
    pub events_table: String,
    pub request_timeout_secs: u64,
    pub max_retries: u32,
}

impl Default for TelemetryConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            endpoint: "https://telemetry.invalid".to_string(),
            events_table: "security_events".to_string(),
            request_timeout_secs: 10,
            max_retries: 3,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct AppConfig {
    pub engine: EngineConfig,
    pub guardians: GuardiansConfig,
    pub threats: ThreatsConfig,
    pub search: SearchConfig,
    pub token: TokenConfig,
    pub telemetry: TelemetryConfig,
    pub target_fps: u64,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            engine: EngineConfig::default(),
            guardians: GuardiansConfig::default(),
            threats: ThreatsConfig::default(),
            search: SearchConfig::default(),
            token: TokenConfig::default(),
            telemetry: TelemetryConfig::default(),
            target_fps: 60,
        }
    }
}

fn ensure_probability(value: f64, name: &str) -> anyhow::Result<()> {
    anyhow::ensure!(
        (0.0..=1.0).contains(&value),
        "{} must be in [0.0, 1.0]",
        name
    );
    Ok(())
}

impl AppConfig {
    /// Validates all configuration parameters.
    ///
    /// Returns `Ok(())` if all parameters are valid, or `Err` with a
    /// description of the first validation failure.
    pub fn validate(&self) -> anyhow::Result<()> {
        anyhow::ensure!(
            self.engine.tick_interval_ms > 0,
            "Tick interval must be positive"
        );
        ensure_probability(self.engine.notify_probability, "Notify probability")?;

        ensure_probability(self.guardians.activity_chance, "Activity chance")?;
        ensure_probability(self.guardians.surge_chance, "Surge chance")?;
        anyhow::ensure!(
            self.guardians.deploy_power_multiplier >= 1.0,
            "Deploy power multiplier must be at least 1.0"
        );

        ensure_probability(self.threats.spawn_chance, "Threat spawn chance")?;
        ensure_probability(self.threats.fault_chance, "Scan fault chance")?;
        ensure_probability(self.threats.high_cutoff, "High severity cutoff")?;
        ensure_probability(self.threats.medium_cutoff, "Medium severity cutoff")?;
        anyhow::ensure!(
            self.threats.medium_cutoff <= self.threats.high_cutoff,
            "Medium severity cutoff must not exceed the high cutoff"
        );
        anyhow::ensure!(
            self.threats.feed_capacity > 0,
            "Threat feed capacity must be positive"
        );
        anyhow::ensure!(
            self.threats.feed_capacity <= 1000,
            "Threat feed capacity too large (max 1000)"
        );

        anyhow::ensure!(
            self.search.reach_cap > 0.0 && self.search.reach_cap <= 100.0,
            "Reach cap must be in (0.0, 100.0]"
        );

        anyhow::ensure!(
            self.token.max_price_drift >= 0.0,
            "Price drift must be non-negative"
        );

        anyhow::ensure!(
            self.telemetry.request_timeout_secs > 0,
            "Telemetry timeout must be positive"
        );
        anyhow::ensure!(
            !self.telemetry.events_table.is_empty(),
            "Telemetry events table must be named"
        );

        anyhow::ensure!(self.target_fps > 0, "Target FPS must be positive");
        anyhow::ensure!(self.target_fps <= 240, "Target FPS too high (max 240)");

        Ok(())
    }

    /// Loads and validates configuration from TOML content.
    pub fn from_toml(content: &str) -> anyhow::Result<Self> {
        let config = toml::from_str::<Self>(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Stable hash of the behavioral sections. The seed is excluded so two
    /// sessions with identical rules but different seeds share a
    /// fingerprint.
    #[must_use]
    pub fn fingerprint(&self) -> String {
        use sha2::{Digest, Sha256};
        let mut engine = self.engine.clone();
        engine.seed = None;
        let mut hasher = Sha256::new();
        hasher.update(format!("{:?}", engine).as_bytes());
        hasher.update(format!("{:?}", self.guardians).as_bytes());
        hasher.update(format!("{:?}", self.threats).as_bytes());
        hasher.update(format!("{:?}", self.search).as_bytes());
        hasher.update(format!("{:?}", self.token).as_bytes());
        hex::encode(hasher.finalize())
    }
}
