//! One-shot handler contracts: invalid input leaves state untouched with
//! a validation message; accumulating handlers are honestly
//! non-idempotent.

mod common;

use gaia_core::action::ActionError;
use gaia_core::panels::{GuardianAction, ThreatsPanel, TokenAction, TokenPanel};
use gaia_core::config::{ThreatsConfig, TokenConfig};
use gaia_core::Panel;
use proptest::prelude::*;
use uuid::Uuid;

#[test]
fn empty_search_query_is_rejected_with_message() {
    let mut panel = common::search_panel_instant();
    let err = panel.begin(1, "").unwrap_err();
    let ActionError::Validation(msg) = err else {
        panic!("expected a validation error");
    };
    assert_eq!(msg, "Please enter a search query");
    assert!(!panel.searching);
    assert!(panel.results.is_empty());
}

#[test]
fn zero_and_oversized_burns_are_rejected_without_mutation() {
    let mut panel = common::token_panel();
    let before = panel.ledger.clone();

    assert!(matches!(
        panel.apply(1, TokenAction::Burn { amount: 0 }),
        Err(ActionError::Validation(_))
    ));
    let oversized = before.circulating + 1;
    assert!(matches!(
        panel.apply(1, TokenAction::Burn { amount: oversized }),
        Err(ActionError::Validation(_))
    ));

    assert_eq!(panel.ledger, before);
}

#[test]
fn stale_guardian_id_is_rejected_without_mutation() {
    let mut panel = common::guardians_panel();
    let before: Vec<_> = panel.roster.iter().map(|g| g.power).collect();

    let err = panel
        .apply(1, GuardianAction::ResetStats(Uuid::new_v4()))
        .unwrap_err();
    assert!(matches!(err, ActionError::UnknownTarget(_)));

    let after: Vec<_> = panel.roster.iter().map(|g| g.power).collect();
    assert_eq!(before, after);
}

proptest! {
    /// Invoking the vote handler N times advances the counter exactly N
    /// times: the handler is non-idempotent by contract.
    #[test]
    fn n_votes_accumulate_n_counts(n in 1usize..64) {
        let mut panel = TokenPanel::new(TokenConfig::default());
        for _ in 0..n {
            panel.apply(1, TokenAction::VoteBurn).unwrap();
        }
        prop_assert_eq!(panel.ledger.burn_votes, n as u64);
    }

    /// Burning in K valid steps always conserves total supply and sums the
    /// burn.
    #[test]
    fn burns_conserve_total_supply(amounts in proptest::collection::vec(1u64..10_000, 1..16)) {
        let mut panel = TokenPanel::new(TokenConfig::default());
        let supply = panel.ledger.total_supply();
        let mut expected = 0u64;
        for amount in amounts {
            panel.apply(1, TokenAction::Burn { amount }).unwrap();
            expected += amount;
        }
        prop_assert_eq!(panel.ledger.burned, expected);
        prop_assert_eq!(panel.ledger.total_supply(), supply);
    }

    /// Forced rescans always append: the feed grows by one per tick until
    /// it hits capacity, never deduplicating.
    #[test]
    fn repeated_spawns_accumulate(ticks in 1u64..40) {
        let mut panel = ThreatsPanel::new(ThreatsConfig {
            spawn_chance: 1.0,
            feed_capacity: 1000,
            ..Default::default()
        });
        let mut rng = common::rng(5);
        for tick in 1..=ticks {
            rng.reseed_for_tick(tick);
            panel.tick(tick, &mut rng).unwrap();
        }
        prop_assert_eq!(panel.feed.len() as u64, ticks);
    }
}
