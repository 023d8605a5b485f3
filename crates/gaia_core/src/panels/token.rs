//! Token mechanics panel.
//!
//! Tracks the session-local token ledger: price drift and holder growth
//! under the periodic updater, burns and burn votes as one-shot actions.

use gaia_data::{Notice, TokenLedger};

use crate::action::ActionError;
use crate::config::TokenConfig;
use crate::panel::{now_rfc3339, Panel};
use crate::rng::SimRng;

/// One-shot actions accepted by the token panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenAction {
    /// Move `amount` from circulating supply to the burn total.
    Burn { amount: u64 },
    /// Register one community vote toward the next burn.
    /// Non-idempotent: every invocation counts.
    VoteBurn,
}

#[derive(Clone)]
pub struct TokenPanel {
    config: TokenConfig,
    pub ledger: TokenLedger,
}

impl TokenPanel {
    #[must_use]
    pub fn new(config: TokenConfig) -> Self {
        Self {
            config,
            ledger: TokenLedger::default(),
        }
    }

    /// Swaps in hot-reloaded rates.
    pub fn set_config(&mut self, config: TokenConfig) {
        self.config = config;
    }
}

impl Panel for TokenPanel {
    type Action = TokenAction;

    fn name(&self) -> &'static str {
        "token"
    }

    fn tick(&mut self, _tick: u64, rng: &mut SimRng) -> anyhow::Result<Vec<Notice>> {
        let drift = (rng.unit() * 2.0 - 1.0) * self.config.max_price_drift;
        self.ledger.price_usd = (self.ledger.price_usd + drift).max(0.0);
        self.ledger.holders += rng.below(self.config.max_holder_growth + 1);
        Ok(Vec::new())
    }

    fn apply(&mut self, tick: u64, action: TokenAction) -> Result<Vec<Notice>, ActionError> {
        match action {
            TokenAction::Burn { amount } => {
                if amount == 0 {
                    return Err(ActionError::validation("Burn amount must be positive"));
                }
                if amount > self.ledger.circulating {
                    return Err(ActionError::validation(
                        "Burn amount exceeds circulating supply",
                    ));
                }
                self.ledger.circulating -= amount;
                self.ledger.burned += amount;
                Ok(vec![Notice::Burned {
                    amount,
                    circulating: self.ledger.circulating,
                    tick,
                    timestamp: now_rfc3339(),
                }])
            }
            TokenAction::VoteBurn => {
                self.ledger.burn_votes += 1;
                Ok(vec![Notice::BurnVote {
                    votes: self.ledger.burn_votes,
                    tick,
                    timestamp: now_rfc3339(),
                }])
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn burn_moves_supply() {
        let mut panel = TokenPanel::new(TokenConfig::default());
        let supply = panel.ledger.total_supply();

        panel.apply(1, TokenAction::Burn { amount: 1000 }).unwrap();
        assert_eq!(panel.ledger.burned, 1000);
        assert_eq!(panel.ledger.total_supply(), supply);
    }

    #[test]
    fn zero_burn_is_rejected_without_mutation() {
        let mut panel = TokenPanel::new(TokenConfig::default());
        let before = panel.ledger.clone();
        let err = panel.apply(1, TokenAction::Burn { amount: 0 }).unwrap_err();
        assert!(matches!(err, ActionError::Validation(_)));
        assert_eq!(panel.ledger, before);
    }

    #[test]
    fn oversized_burn_is_rejected_without_mutation() {
        let mut panel = TokenPanel::new(TokenConfig::default());
        let before = panel.ledger.clone();
        let amount = panel.ledger.circulating + 1;
        assert!(panel.apply(1, TokenAction::Burn { amount }).is_err());
        assert_eq!(panel.ledger, before);
    }

    #[test]
    fn votes_accumulate() {
        let mut panel = TokenPanel::new(TokenConfig::default());
        for _ in 0..5 {
            panel.apply(1, TokenAction::VoteBurn).unwrap();
        }
        assert_eq!(panel.ledger.burn_votes, 5);
    }

    #[test]
    fn price_never_goes_negative() {
        let mut panel = TokenPanel::new(TokenConfig {
            max_price_drift: 1.0,
            ..Default::default()
        });
        let mut rng = SimRng::new(9);
        for tick in 1..=200 {
            rng.reseed_for_tick(tick);
            panel.tick(tick, &mut rng).unwrap();
            assert!(panel.ledger.price_usd >= 0.0);
        }
    }
}
