//! Global threat intelligence feed.
//!
//! A rolling feed of detected-and-mitigated threats drawn from fixed
//! region and kind tables. Spawns are probabilistic per tick; the feed
//! keeps only the most recent entries.

use std::collections::VecDeque;

use gaia_data::{GlobalThreat, Notice, ThreatSeverity, ThreatStatus};
use uuid::Uuid;

use crate::action::ActionError;
use crate::config::ThreatsConfig;
use crate::panel::{now_rfc3339, Panel};
use crate::rng::SimRng;

const REGIONS: [&str; 8] = [
    "North America",
    "Europe",
    "Asia-Pacific",
    "South America",
    "Africa",
    "Middle East",
    "Australia",
    "Antarctica Research Stations",
];

const THREAT_KINDS: [&str; 10] = [
    "Advanced Persistent Threat (APT)",
    "Nation-State Attack",
    "Quantum Computing Threat",
    "AI-Powered Social Engineering",
    "Zero-Day Exploit",
    "Supply Chain Attack",
    "Deepfake Authentication Bypass",
    "Blockchain 51% Attack Attempt",
    "IoT Botnet Formation",
    "Satellite Communication Interference",
];

/// One-shot actions accepted by the threat feed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThreatAction {
    /// Mark every non-resolved entry resolved.
    ResolveAll,
    /// Force a detection roll on the next tick.
    Rescan,
}

#[derive(Clone)]
pub struct ThreatsPanel {
    config: ThreatsConfig,
    /// Newest entries first.
    pub feed: VecDeque<GlobalThreat>,
    pub threats_blocked: u64,
    pub countries_protected: u32,
    pub security_score: f64,
    /// Last scan pass came back degraded. Cosmetic flag only; the next
    /// clean pass clears it.
    pub scan_degraded: bool,
    pending_rescan: bool,
}

impl ThreatsPanel {
    #[must_use]
    pub fn new(config: ThreatsConfig) -> Self {
        Self {
            config,
            feed: VecDeque::new(),
            threats_blocked: 15_847,
            countries_protected: 195,
            security_score: 99.98,
            scan_degraded: false,
            pending_rescan: false,
        }
    }

    /// Swaps in hot-reloaded rates.
    pub fn set_config(&mut self, config: ThreatsConfig) {
        self.config = config;
    }

    fn roll_severity(&self, roll: f64) -> ThreatSeverity {
        if roll > self.config.high_cutoff {
            ThreatSeverity::High
        } else if roll > self.config.medium_cutoff {
            ThreatSeverity::Medium
        } else {
            ThreatSeverity::Low
        }
    }

    fn spawn_threat(&mut self, tick: u64, rng: &mut SimRng) -> Option<Notice> {
        let region = rng.pick(&REGIONS)?.to_string();
        let kind = rng.pick(&THREAT_KINDS)?.to_string();
        let severity = self.roll_severity(rng.unit());

        let threat = GlobalThreat {
            id: Uuid::new_v4(),
            region: region.clone(),
            kind: kind.clone(),
            severity,
            description: "Advanced threat detected and automatically neutralized".to_string(),
            tick,
            status: ThreatStatus::Mitigated,
        };
        let id = threat.id;

        self.feed.push_front(threat);
        self.feed.truncate(self.config.feed_capacity);
        self.threats_blocked += 1;
        self.security_score = (self.security_score + 0.001).min(99.99);

        Some(Notice::ThreatDetected {
            id,
            region,
            kind,
            severity,
            tick,
            timestamp: now_rfc3339(),
        })
    }
}

impl Panel for ThreatsPanel {
    type Action = ThreatAction;

    fn name(&self) -> &'static str {
        "threats"
    }

    fn tick(&mut self, tick: u64, rng: &mut SimRng) -> anyhow::Result<Vec<Notice>> {
        let forced = std::mem::take(&mut self.pending_rescan);
        let mut notices = Vec::new();
        if forced || rng.chance(self.config.spawn_chance) {
            notices.extend(self.spawn_threat(tick, rng));
        }

        let faulted = rng.chance(self.config.fault_chance);
        if faulted && !self.scan_degraded {
            notices.push(Notice::ScanFault {
                tick,
                timestamp: now_rfc3339(),
            });
        }
        self.scan_degraded = faulted;

        Ok(notices)
    }

    fn apply(&mut self, tick: u64, action: ThreatAction) -> Result<Vec<Notice>, ActionError> {
        match action {
            ThreatAction::ResolveAll => {
                let mut count = 0;
                for threat in &mut self.feed {
                    if threat.status != ThreatStatus::Resolved {
                        threat.status = ThreatStatus::Resolved;
                        count += 1;
                    }
                }
                Ok(vec![Notice::ThreatsResolved {
                    count,
                    tick,
                    timestamp: now_rfc3339(),
                }])
            }
            ThreatAction::Rescan => {
                self.pending_rescan = true;
                Ok(Vec::new())
            }
        }
    }
}
