//! Guardian army panel.
//!
//! A roster of named guardian creatures with levels, power ratings, and
//! duty states. The periodic updater rolls background activity (threat
//! eliminations, power surges); one-shot actions toggle individual duty
//! states or redeploy the whole army.

use gaia_data::{ArmyStats, Guardian, GuardianKind, GuardianStatus, Notice};
use uuid::Uuid;

use crate::action::ActionError;
use crate::config::GuardiansConfig;
use crate::panel::{now_rfc3339, Panel};
use crate::rng::SimRng;

/// One-shot actions accepted by the guardian panel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuardianAction {
    /// Flip one guardian between Active and Training.
    ToggleStatus(Uuid),
    /// Put every guardian on Active duty.
    ActivateAll,
    /// Send every guardian to Defending and boost its power.
    /// Non-idempotent: each invocation multiplies power again.
    DeployAll,
    /// Zero out one guardian's record (threats, level, power).
    ResetStats(Uuid),
}

#[derive(Clone)]
pub struct GuardiansPanel {
    config: GuardiansConfig,
    pub roster: Vec<Guardian>,
    pub stats: ArmyStats,
}

impl GuardiansPanel {
    #[must_use]
    pub fn new(config: GuardiansConfig) -> Self {
        let roster = seed_roster();
        let stats = ArmyStats::from_roster(&roster);
        Self {
            config,
            roster,
            stats,
        }
    }

    #[must_use]
    pub fn from_roster(config: GuardiansConfig, roster: Vec<Guardian>) -> Self {
        let stats = ArmyStats::from_roster(&roster);
        Self {
            config,
            roster,
            stats,
        }
    }

    /// Swaps in hot-reloaded rates.
    pub fn set_config(&mut self, config: GuardiansConfig) {
        self.config = config;
    }

    fn find_mut(&mut self, id: Uuid) -> Result<&mut Guardian, ActionError> {
        self.roster
            .iter_mut()
            .find(|g| g.id == id)
            .ok_or_else(|| ActionError::UnknownTarget(id.to_string()))
    }
}

impl Panel for GuardiansPanel {
    type Action = GuardianAction;

    fn name(&self) -> &'static str {
        "guardians"
    }

    fn tick(&mut self, tick: u64, rng: &mut SimRng) -> anyhow::Result<Vec<Notice>> {
        let mut notices = Vec::new();

        if rng.chance(self.config.activity_chance) {
            let mut best_surge: Option<(String, u64)> = None;
            for guardian in &mut self.roster {
                if rng.chance(self.config.surge_chance) {
                    guardian.threats_eliminated += rng.below(self.config.max_threat_gain);
                    let gain = rng.below(self.config.max_power_gain);
                    guardian.power += gain;
                    if best_surge.as_ref().map_or(true, |(_, g)| gain > *g) {
                        best_surge = Some((guardian.name.clone(), gain));
                    }
                }
            }
            if let Some((name, power_gain)) = best_surge {
                notices.push(Notice::GuardianSurge {
                    name,
                    power_gain,
                    tick,
                    timestamp: now_rfc3339(),
                });
            }
        }

        self.stats = ArmyStats::from_roster(&self.roster);
        Ok(notices)
    }

    fn apply(&mut self, tick: u64, action: GuardianAction) -> Result<Vec<Notice>, ActionError> {
        let notices = match action {
            GuardianAction::ToggleStatus(id) => {
                let guardian = self.find_mut(id)?;
                guardian.status = match guardian.status {
                    GuardianStatus::Active => GuardianStatus::Training,
                    _ => GuardianStatus::Active,
                };
                vec![Notice::StatusChanged {
                    name: guardian.name.clone(),
                    status: format!("{:?}", guardian.status).to_lowercase(),
                    tick,
                    timestamp: now_rfc3339(),
                }]
            }
            GuardianAction::ActivateAll => {
                for guardian in &mut self.roster {
                    guardian.status = GuardianStatus::Active;
                }
                vec![Notice::StatusChanged {
                    name: "Guardian Army".to_string(),
                    status: "active".to_string(),
                    tick,
                    timestamp: now_rfc3339(),
                }]
            }
            GuardianAction::DeployAll => {
                for guardian in &mut self.roster {
                    guardian.status = GuardianStatus::Defending;
                    guardian.power =
                        (guardian.power as f64 * self.config.deploy_power_multiplier) as u64;
                }
                self.stats = ArmyStats::from_roster(&self.roster);
                vec![Notice::DeploymentComplete {
                    active: self.stats.active_guardians,
                    total_power: self.stats.total_power,
                    tick,
                    timestamp: now_rfc3339(),
                }]
            }
            GuardianAction::ResetStats(id) => {
                let guardian = self.find_mut(id)?;
                guardian.threats_eliminated = 0;
                guardian.level = 1;
                guardian.power = 1000;
                vec![Notice::StatsReset {
                    name: guardian.name.clone(),
                    tick,
                    timestamp: now_rfc3339(),
                }]
            }
        };
        self.stats = ArmyStats::from_roster(&self.roster);
        Ok(notices)
    }
}

fn guardian(
    name: &str,
    kind: GuardianKind,
    level: u8,
    power: u64,
    status: GuardianStatus,
    ability: &str,
    threats_eliminated: u64,
) -> Guardian {
    Guardian {
        id: Uuid::new_v4(),
        name: name.to_string(),
        kind,
        level,
        power,
        status,
        ability: ability.to_string(),
        threats_eliminated,
    }
}

/// The fourteen founding guardians.
fn seed_roster() -> Vec<Guardian> {
    use GuardianKind::{Dragon, Eagle, Lion, Monkey, Wolf};
    use GuardianStatus::{Active, Defending, Hunting, Training};
    vec![
        guardian(
            "Alpha Dragon Guardian",
            Dragon,
            100,
            999_999,
            Defending,
            "Annihilates any threat instantly",
            5247,
        ),
        guardian(
            "Sky Eagle Sentinel",
            Eagle,
            85,
            50_000,
            Active,
            "Spots threats from orbit",
            2156,
        ),
        guardian(
            "Pack Leader Wolf",
            Wolf,
            78,
            35_000,
            Hunting,
            "Leads coordinated pack responses",
            1834,
        ),
        guardian(
            "King Lion Protector",
            Lion,
            92,
            65_000,
            Defending,
            "Paralyzes intruders with a roar",
            3421,
        ),
        guardian(
            "Monkey Squad Alpha",
            Monkey,
            67,
            25_000,
            Training,
            "Detects malicious code patterns",
            892,
        ),
        guardian(
            "Monkey Squad Beta",
            Monkey,
            72,
            28_000,
            Active,
            "Tracks attacker networks",
            1245,
        ),
        guardian(
            "Monkey Squad Gamma",
            Monkey,
            69,
            26_500,
            Defending,
            "Guards all data entries",
            1087,
        ),
        guardian(
            "Cyber Koala Guardian",
            Dragon,
            88,
            75_000,
            Active,
            "Eucalyptus-powered defense matrix",
            2847,
        ),
        guardian(
            "Phoenix Guardian Immortal",
            Dragon,
            95,
            120_000,
            Defending,
            "Cannot be destroyed",
            4156,
        ),
        guardian(
            "AI Dolphin Intelligence",
            Dragon,
            83,
            55_000,
            Active,
            "Deep scanning by sonar",
            2341,
        ),
        guardian(
            "Digital Dragon Prime",
            Dragon,
            98,
            180_000,
            Defending,
            "Controls the digital domain",
            6789,
        ),
        guardian(
            "Quantum Phoenix Elite",
            Dragon,
            91,
            95_000,
            Active,
            "Multidimensional rebirth",
            3892,
        ),
        guardian(
            "Digital Cyber Koala Prime",
            Dragon,
            90,
            85_000,
            Active,
            "Advanced eucalyptus matrix",
            3156,
        ),
        guardian(
            "Ultimate Sky Eagle Commander",
            Eagle,
            87,
            62_000,
            Defending,
            "Global aerial surveillance",
            2678,
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn panel() -> GuardiansPanel {
        GuardiansPanel::new(GuardiansConfig::default())
    }

    #[test]
    fn seed_roster_has_fourteen_guardians() {
        let panel = panel();
        assert_eq!(panel.roster.len(), 14);
        assert!(panel.stats.total_power > 0);
    }

    #[test]
    fn toggle_flips_between_active_and_training() {
        let mut panel = panel();
        let id = panel.roster[1].id;
        assert_eq!(panel.roster[1].status, GuardianStatus::Active);

        panel.apply(1, GuardianAction::ToggleStatus(id)).unwrap();
        assert_eq!(panel.roster[1].status, GuardianStatus::Training);

        panel.apply(2, GuardianAction::ToggleStatus(id)).unwrap();
        assert_eq!(panel.roster[1].status, GuardianStatus::Active);
    }

    #[test]
    fn toggle_unknown_id_is_rejected_without_mutation() {
        let mut panel = panel();
        let before = panel.roster.clone();
        let err = panel
            .apply(1, GuardianAction::ToggleStatus(Uuid::new_v4()))
            .unwrap_err();
        assert!(matches!(err, ActionError::UnknownTarget(_)));
        assert_eq!(
            before.iter().map(|g| g.status).collect::<Vec<_>>(),
            panel.roster.iter().map(|g| g.status).collect::<Vec<_>>()
        );
    }

    #[test]
    fn deploy_all_is_non_idempotent() {
        let mut panel = panel();
        let base = panel.stats.total_power;

        panel.apply(1, GuardianAction::DeployAll).unwrap();
        let once = panel.stats.total_power;
        panel.apply(2, GuardianAction::DeployAll).unwrap();
        let twice = panel.stats.total_power;

        assert!(once > base);
        assert!(twice > once);
        assert!(panel
            .roster
            .iter()
            .all(|g| g.status == GuardianStatus::Defending));
    }

    #[test]
    fn reset_zeroes_the_record() {
        let mut panel = panel();
        let id = panel.roster[0].id;
        panel.apply(1, GuardianAction::ResetStats(id)).unwrap();
        let g = &panel.roster[0];
        assert_eq!(g.threats_eliminated, 0);
        assert_eq!(g.level, 1);
        assert_eq!(g.power, 1000);
    }

    #[test]
    fn tick_refreshes_stats() {
        let mut panel = panel();
        panel.roster[0].power += 10_000;
        let mut rng = SimRng::new(7);
        rng.reseed_for_tick(1);
        panel.tick(1, &mut rng).unwrap();
        assert_eq!(panel.stats, ArmyStats::from_roster(&panel.roster));
    }
}
