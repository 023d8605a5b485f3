use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Species of a guardian creature.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GuardianKind {
    Dragon,
    Eagle,
    Wolf,
    Lion,
    Monkey,
}

impl GuardianKind {
    /// Glyph shown next to the guardian in the dashboard.
    #[must_use]
    pub fn glyph(&self) -> &'static str {
        match self {
            GuardianKind::Dragon => "🐉",
            GuardianKind::Eagle => "🦅",
            GuardianKind::Wolf => "🐺",
            GuardianKind::Lion => "🦁",
            GuardianKind::Monkey => "🐒",
        }
    }
}

/// Duty state of a guardian.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GuardianStatus {
    Active,
    Training,
    Defending,
    Hunting,
}

impl GuardianStatus {
    /// Active and Defending guardians both count toward the active roster.
    #[must_use]
    pub fn is_on_duty(&self) -> bool {
        matches!(self, GuardianStatus::Active | GuardianStatus::Defending)
    }
}

/// A single creature in the guardian army.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Guardian {
    pub id: Uuid,
    pub name: String,
    pub kind: GuardianKind,
    /// Experience level, 1..=100.
    pub level: u8,
    pub power: u64,
    pub status: GuardianStatus,
    /// Flavor description of what this guardian watches for.
    pub ability: String,
    pub threats_eliminated: u64,
}

/// Aggregate statistics derived from the roster every tick.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ArmyStats {
    pub total_power: u64,
    pub active_guardians: usize,
    pub total_eliminated: u64,
    pub average_level: u8,
}

impl ArmyStats {
    #[must_use]
    pub fn from_roster(roster: &[Guardian]) -> Self {
        if roster.is_empty() {
            return Self::default();
        }
        let total_power = roster.iter().map(|g| g.power).sum();
        let active_guardians = roster.iter().filter(|g| g.status.is_on_duty()).count();
        let total_eliminated = roster.iter().map(|g| g.threats_eliminated).sum();
        let level_sum: u64 = roster.iter().map(|g| u64::from(g.level)).sum();
        let average_level = (level_sum as f64 / roster.len() as f64).round() as u8;
        Self {
            total_power,
            active_guardians,
            total_eliminated,
            average_level,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn guardian(power: u64, level: u8, status: GuardianStatus) -> Guardian {
        Guardian {
            id: Uuid::new_v4(),
            name: "Test Guardian".to_string(),
            kind: GuardianKind::Wolf,
            level,
            power,
            status,
            ability: String::new(),
            threats_eliminated: 10,
        }
    }

    #[test]
    fn army_stats_aggregates_roster() {
        let roster = vec![
            guardian(100, 10, GuardianStatus::Active),
            guardian(200, 20, GuardianStatus::Training),
            guardian(300, 30, GuardianStatus::Defending),
        ];
        let stats = ArmyStats::from_roster(&roster);
        assert_eq!(stats.total_power, 600);
        assert_eq!(stats.active_guardians, 2);
        assert_eq!(stats.total_eliminated, 30);
        assert_eq!(stats.average_level, 20);
    }

    #[test]
    fn army_stats_empty_roster_is_default() {
        assert_eq!(ArmyStats::from_roster(&[]), ArmyStats::default());
    }
}
