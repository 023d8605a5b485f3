//! Save/load round trips for panel state and session preferences.

mod common;

use gaia_core::config::{GuardiansConfig, ThreatsConfig};
use gaia_core::panels::{GuardiansPanel, TokenAction};
use gaia_core::Panel;
use gaia_io::storage::{self, MediaChoice, SavedState, SessionPrefs};

fn temp_path(tag: &str) -> String {
    std::env::temp_dir()
        .join(format!("gaia-it-{}-{}.json", tag, uuid::Uuid::new_v4()))
        .to_string_lossy()
        .into_owned()
}

#[test]
fn full_panel_state_survives_a_round_trip() {
    let mut guardians = common::guardians_panel();
    let mut threats = common::threats_panel_spawning();
    let mut token = common::token_panel();
    let search = common::search_panel_instant();
    let mut rng = common::rng(9);

    for tick in 1..=10 {
        rng.reseed_for_tick(tick);
        guardians.tick(tick, &mut rng).unwrap();
        threats.tick(tick, &mut rng).unwrap();
    }
    token.apply(10, TokenAction::Burn { amount: 5000 }).unwrap();

    let state = SavedState {
        tick: 10,
        seed: 9,
        roster: guardians.roster.clone(),
        army_stats: guardians.stats,
        threats: threats.feed.iter().cloned().collect(),
        threats_blocked: threats.threats_blocked,
        security_score: threats.security_score,
        search_metrics: search.metrics,
        ledger: token.ledger.clone(),
    };

    let path = temp_path("state");
    storage::save_state(&state, &path).unwrap();
    let loaded = storage::load_state(&path).unwrap();

    assert_eq!(loaded.tick, 10);
    assert_eq!(loaded.roster.len(), guardians.roster.len());
    assert_eq!(loaded.threats.len(), threats.feed.len());
    assert_eq!(loaded.ledger, token.ledger);
    assert_eq!(loaded.army_stats, guardians.stats);

    // A restored panel picks up exactly where the saved one left off.
    let restored = GuardiansPanel::from_roster(GuardiansConfig::default(), loaded.roster);
    assert_eq!(restored.stats, guardians.stats);

    std::fs::remove_file(&path).ok();
}

#[test]
fn restored_threat_feed_keeps_order_and_counters() {
    let mut threats = gaia_core::panels::ThreatsPanel::new(ThreatsConfig {
        spawn_chance: 1.0,
        feed_capacity: 5,
        ..Default::default()
    });
    let mut rng = common::rng(3);
    for tick in 1..=8 {
        rng.reseed_for_tick(tick);
        threats.tick(tick, &mut rng).unwrap();
    }

    let saved: Vec<_> = threats.feed.iter().cloned().collect();
    let mut restored = gaia_core::panels::ThreatsPanel::new(ThreatsConfig::default());
    restored.feed = saved.into();
    restored.threats_blocked = threats.threats_blocked;

    assert_eq!(restored.feed.len(), 5);
    assert_eq!(restored.feed[0].tick, 8);
    assert_eq!(restored.threats_blocked, threats.threats_blocked);
}

#[test]
fn prefs_remember_the_background_choice() {
    let path = temp_path("prefs");
    let prefs = SessionPrefs {
        background_media: Some(MediaChoice {
            id: "ocean-dawn".to_string(),
            kind: "video".to_string(),
            url: "https://cdn.gaia.example/backgrounds/ocean-dawn.mp4".to_string(),
        }),
        seed: Some(1234),
    };
    prefs.save(&path).unwrap();

    let loaded = SessionPrefs::load(&path);
    assert_eq!(loaded, prefs);
    assert_eq!(loaded.background_media.unwrap().id, "ocean-dawn");

    std::fs::remove_file(&path).ok();
}
