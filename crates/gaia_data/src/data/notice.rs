use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::data::guardian::ArmyStats;
use crate::data::threat::ThreatSeverity;

/// Display weight of a notice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Severity {
    Info,
    Success,
    Warning,
    Alert,
}

/// A transient event surfaced to the user and appended to the history log.
///
/// Notices are the only thing panels emit besides their own state: every
/// tick outcome, action result, and remote-call failure becomes one of
/// these. `timestamp` is RFC 3339, stamped at creation by the emitter.
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(tag = "event")]
pub enum Notice {
    ThreatDetected {
        id: Uuid,
        region: String,
        kind: String,
        severity: ThreatSeverity,
        tick: u64,
        timestamp: String,
    },
    ThreatsResolved {
        count: usize,
        tick: u64,
        timestamp: String,
    },
    GuardianSurge {
        name: String,
        power_gain: u64,
        tick: u64,
        timestamp: String,
    },
    DeploymentComplete {
        active: usize,
        total_power: u64,
        tick: u64,
        timestamp: String,
    },
    StatusChanged {
        name: String,
        status: String,
        tick: u64,
        timestamp: String,
    },
    StatsReset {
        name: String,
        tick: u64,
        timestamp: String,
    },
    SearchStage {
        stage: usize,
        total: usize,
        label: String,
        tick: u64,
        timestamp: String,
    },
    SearchComplete {
        query: String,
        results: usize,
        tick: u64,
        timestamp: String,
    },
    Burned {
        amount: u64,
        circulating: u64,
        tick: u64,
        timestamp: String,
    },
    BurnVote {
        votes: u64,
        tick: u64,
        timestamp: String,
    },
    /// Probabilistic message rolled by the periodic updater.
    Broadcast {
        message: String,
        tick: u64,
        timestamp: String,
    },
    /// A simulated scan pass came back degraded. Cosmetic: the only state
    /// behind it is a flag that clears on the next clean pass.
    ScanFault {
        tick: u64,
        timestamp: String,
    },
    /// Remote call failed; the underlying error detail is deliberately
    /// not carried here.
    RemoteFailure {
        operation: String,
        tick: u64,
        timestamp: String,
    },
    Snapshot {
        tick: u64,
        stats: ArmyStats,
        timestamp: String,
    },
}

impl Notice {
    /// Severity bucket used by the presentation layer to pick a color.
    #[must_use]
    pub fn severity(&self) -> Severity {
        match self {
            Notice::ThreatDetected { severity, .. } => match severity {
                ThreatSeverity::Low => Severity::Info,
                ThreatSeverity::Medium => Severity::Warning,
                ThreatSeverity::High | ThreatSeverity::Critical => Severity::Alert,
            },
            Notice::ThreatsResolved { .. }
            | Notice::DeploymentComplete { .. }
            | Notice::SearchComplete { .. }
            | Notice::Burned { .. } => Severity::Success,
            Notice::ScanFault { .. } | Notice::RemoteFailure { .. } => Severity::Warning,
            _ => Severity::Info,
        }
    }

    /// Engine tick the notice was emitted at.
    #[must_use]
    pub fn tick(&self) -> u64 {
        match self {
            Notice::ThreatDetected { tick, .. }
            | Notice::ThreatsResolved { tick, .. }
            | Notice::GuardianSurge { tick, .. }
            | Notice::DeploymentComplete { tick, .. }
            | Notice::StatusChanged { tick, .. }
            | Notice::StatsReset { tick, .. }
            | Notice::SearchStage { tick, .. }
            | Notice::SearchComplete { tick, .. }
            | Notice::Burned { tick, .. }
            | Notice::BurnVote { tick, .. }
            | Notice::Broadcast { tick, .. }
            | Notice::ScanFault { tick, .. }
            | Notice::RemoteFailure { tick, .. }
            | Notice::Snapshot { tick, .. } => *tick,
        }
    }
}
