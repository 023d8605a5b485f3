//! Panel implementations.
//!
//! Each module is one dashboard screen: a metrics record, its tick
//! behavior, and its one-shot actions.

pub mod guardians;
pub mod search;
pub mod threats;
pub mod token;

pub use guardians::{GuardianAction, GuardiansPanel};
pub use search::{SearchAction, SearchPanel, SEARCH_STAGES};
pub use threats::{ThreatAction, ThreatsPanel};
pub use token::{TokenAction, TokenPanel};
