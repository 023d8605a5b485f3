use gaia_core::config::{GuardiansConfig, SearchConfig, ThreatsConfig, TokenConfig};
use gaia_core::panels::{GuardiansPanel, SearchPanel, ThreatsPanel, TokenPanel};
use gaia_core::rng::SimRng;
use gaia_core::ticker::{Ticker, TickerConfig};
use gaia_data::{Guardian, GuardianKind, GuardianStatus};
use std::time::Duration;
use uuid::Uuid;

#[allow(dead_code)]
pub struct GuardianBuilder {
    name: String,
    kind: GuardianKind,
    level: u8,
    power: u64,
    status: GuardianStatus,
    threats_eliminated: u64,
    id: Option<Uuid>,
}

#[allow(dead_code)]
impl GuardianBuilder {
    pub fn new() -> Self {
        Self {
            name: "Test Guardian".to_string(),
            kind: GuardianKind::Wolf,
            level: 10,
            power: 1000,
            status: GuardianStatus::Active,
            threats_eliminated: 0,
            id: None,
        }
    }

    pub fn id(mut self, id: Uuid) -> Self {
        self.id = Some(id);
        self
    }

    pub fn name(mut self, name: &str) -> Self {
        self.name = name.to_string();
        self
    }

    pub fn kind(mut self, kind: GuardianKind) -> Self {
        self.kind = kind;
        self
    }

    pub fn level(mut self, level: u8) -> Self {
        self.level = level;
        self
    }

    pub fn power(mut self, power: u64) -> Self {
        self.power = power;
        self
    }

    pub fn status(mut self, status: GuardianStatus) -> Self {
        self.status = status;
        self
    }

    pub fn build(self) -> Guardian {
        Guardian {
            id: self.id.unwrap_or_else(Uuid::new_v4),
            name: self.name,
            kind: self.kind,
            level: self.level,
            power: self.power,
            status: self.status,
            ability: String::new(),
            threats_eliminated: self.threats_eliminated,
        }
    }
}

#[allow(dead_code)]
pub fn guardians_panel() -> GuardiansPanel {
    GuardiansPanel::new(GuardiansConfig::default())
}

#[allow(dead_code)]
pub fn threats_panel_spawning() -> ThreatsPanel {
    ThreatsPanel::new(ThreatsConfig {
        spawn_chance: 1.0,
        ..Default::default()
    })
}

#[allow(dead_code)]
pub fn search_panel_instant() -> SearchPanel {
    SearchPanel::new(SearchConfig {
        stage_delay_ms: 0,
        ..Default::default()
    })
}

#[allow(dead_code)]
pub fn token_panel() -> TokenPanel {
    TokenPanel::new(TokenConfig::default())
}

#[allow(dead_code)]
pub fn ticker_ms(interval_ms: u64) -> Ticker {
    Ticker::new(TickerConfig {
        interval: Duration::from_millis(interval_ms),
        ..Default::default()
    })
}

#[allow(dead_code)]
pub fn rng(seed: u64) -> SimRng {
    SimRng::new(seed)
}
