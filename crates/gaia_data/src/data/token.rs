use serde::{Deserialize, Serialize};

/// In-memory ledger for the token panel.
///
/// Tracks circulating supply against the cumulative burn. Nothing here is a
/// real chain state; the ledger lives and dies with the session unless the
/// app state is saved.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TokenLedger {
    pub circulating: u64,
    pub burned: u64,
    pub holders: u64,
    pub price_usd: f64,
    /// Community votes toward the next burn. Intentionally a bare counter:
    /// repeated votes keep accumulating.
    pub burn_votes: u64,
}

impl Default for TokenLedger {
    fn default() -> Self {
        Self {
            circulating: 1_000_000_000,
            burned: 0,
            holders: 52_847,
            price_usd: 0.0042,
            burn_votes: 0,
        }
    }
}

impl TokenLedger {
    /// Total supply ever minted.
    #[must_use]
    pub fn total_supply(&self) -> u64 {
        self.circulating + self.burned
    }
}
