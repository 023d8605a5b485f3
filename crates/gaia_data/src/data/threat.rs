use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Severity assigned to a detected threat.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ThreatSeverity {
    Low,
    Medium,
    High,
    Critical,
}

/// Lifecycle of a threat entry in the feed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ThreatStatus {
    Active,
    Mitigated,
    Resolved,
}

/// One entry in the global threat intelligence feed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GlobalThreat {
    pub id: Uuid,
    pub region: String,
    pub kind: String,
    pub severity: ThreatSeverity,
    pub description: String,
    /// Engine tick at which the threat was detected.
    pub tick: u64,
    pub status: ThreatStatus,
}
