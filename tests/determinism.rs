//! Seed determinism: identical seeds replay identical sessions.

mod common;

use gaia_core::config::GuardiansConfig;
use gaia_core::panels::GuardiansPanel;
use gaia_core::Panel;
use gaia_data::ThreatSeverity;

#[test]
fn threat_feeds_with_equal_seeds_are_identical() {
    let mut a = common::threats_panel_spawning();
    let mut b = common::threats_panel_spawning();
    let mut rng_a = common::rng(1234);
    let mut rng_b = common::rng(1234);

    for tick in 1..=50 {
        rng_a.reseed_for_tick(tick);
        rng_b.reseed_for_tick(tick);
        a.tick(tick, &mut rng_a).unwrap();
        b.tick(tick, &mut rng_b).unwrap();
    }

    assert_eq!(a.feed.len(), b.feed.len());
    for (left, right) in a.feed.iter().zip(b.feed.iter()) {
        assert_eq!(left.region, right.region);
        assert_eq!(left.kind, right.kind);
        assert_eq!(left.severity, right.severity);
        assert_eq!(left.tick, right.tick);
    }
    assert_eq!(a.threats_blocked, b.threats_blocked);
}

#[test]
fn different_seeds_diverge() {
    let mut a = common::threats_panel_spawning();
    let mut b = common::threats_panel_spawning();
    let mut rng_a = common::rng(1);
    let mut rng_b = common::rng(2);

    for tick in 1..=50 {
        rng_a.reseed_for_tick(tick);
        rng_b.reseed_for_tick(tick);
        a.tick(tick, &mut rng_a).unwrap();
        b.tick(tick, &mut rng_b).unwrap();
    }

    let fingerprint = |panel: &gaia_core::panels::ThreatsPanel| -> Vec<(String, ThreatSeverity)> {
        panel
            .feed
            .iter()
            .map(|t| (t.region.clone(), t.severity))
            .collect()
    };
    assert_ne!(fingerprint(&a), fingerprint(&b));
}

#[test]
fn guardian_activity_replays_from_a_shared_roster() {
    let roster: Vec<_> = (0..6)
        .map(|i| {
            common::GuardianBuilder::new()
                .name(&format!("Guardian {i}"))
                .power(10_000)
                .build()
        })
        .collect();

    let mut a = GuardiansPanel::from_roster(GuardiansConfig::default(), roster.clone());
    let mut b = GuardiansPanel::from_roster(GuardiansConfig::default(), roster);
    let mut rng_a = common::rng(77);
    let mut rng_b = common::rng(77);

    for tick in 1..=100 {
        rng_a.reseed_for_tick(tick);
        rng_b.reseed_for_tick(tick);
        a.tick(tick, &mut rng_a).unwrap();
        b.tick(tick, &mut rng_b).unwrap();
    }

    assert_eq!(a.stats, b.stats);
    for (left, right) in a.roster.iter().zip(b.roster.iter()) {
        assert_eq!(left.power, right.power);
        assert_eq!(left.threats_eliminated, right.threats_eliminated);
    }
}
