//! Local persistence.
//!
//! Two small JSON documents, both written whole:
//!
//! - `prefs.json` — session preferences: the currently selected background
//!   media and the last seed. A single key/value document with no
//!   versioning or migration; an unreadable file is treated as absent.
//! - `save.json` — the panel state snapshot written on graceful shutdown
//!   and loaded on the next launch.

use std::path::Path;

use gaia_data::{ArmyStats, GlobalThreat, Guardian, SearchMetrics, TokenLedger};
use serde::{Deserialize, Serialize};

use crate::error::Result;

/// The user's selected background media.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MediaChoice {
    pub id: String,
    pub kind: String,
    pub url: String,
}

/// Session preferences persisted between runs.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SessionPrefs {
    pub background_media: Option<MediaChoice>,
    pub seed: Option<u64>,
}

impl SessionPrefs {
    /// Loads preferences, returning defaults when the file is missing or
    /// unreadable.
    #[must_use]
    pub fn load(path: &str) -> Self {
        match std::fs::read_to_string(path) {
            Ok(content) => serde_json::from_str(&content).unwrap_or_default(),
            Err(_) => Self::default(),
        }
    }

    pub fn save(&self, path: &str) -> Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)?;
        Ok(())
    }
}

/// Whole-app state snapshot.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SavedState {
    pub tick: u64,
    pub seed: u64,
    pub roster: Vec<Guardian>,
    pub army_stats: ArmyStats,
    pub threats: Vec<GlobalThreat>,
    pub threats_blocked: u64,
    pub security_score: f64,
    pub search_metrics: SearchMetrics,
    pub ledger: TokenLedger,
}

pub fn save_state(state: &SavedState, path: &str) -> Result<()> {
    let json = serde_json::to_string_pretty(state)?;
    std::fs::write(path, json)?;
    Ok(())
}

pub fn load_state(path: &str) -> Result<SavedState> {
    let content = std::fs::read_to_string(path)?;
    Ok(serde_json::from_str(&content)?)
}

#[must_use]
pub fn state_exists(path: &str) -> bool {
    Path::new(path).exists()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_path(tag: &str) -> String {
        std::env::temp_dir()
            .join(format!("gaia-storage-{}-{}.json", tag, uuid::Uuid::new_v4()))
            .to_string_lossy()
            .into_owned()
    }

    #[test]
    fn prefs_round_trip() {
        let path = temp_path("prefs");
        let prefs = SessionPrefs {
            background_media: Some(MediaChoice {
                id: "forest-1".to_string(),
                kind: "video".to_string(),
                url: "https://cdn.example/forest.mp4".to_string(),
            }),
            seed: Some(42),
        };
        prefs.save(&path).unwrap();
        assert_eq!(SessionPrefs::load(&path), prefs);
        std::fs::remove_file(&path).ok();
    }

    #[test]
    fn missing_prefs_are_defaults() {
        let prefs = SessionPrefs::load("/nonexistent/gaia/prefs.json");
        assert_eq!(prefs, SessionPrefs::default());
    }

    #[test]
    fn corrupt_prefs_fall_back_to_defaults() {
        let path = temp_path("corrupt");
        std::fs::write(&path, "{not json").unwrap();
        assert_eq!(SessionPrefs::load(&path), SessionPrefs::default());
        std::fs::remove_file(&path).ok();
    }

    #[test]
    fn saved_state_round_trip() {
        let path = temp_path("state");
        let state = SavedState {
            tick: 77,
            seed: 42,
            roster: Vec::new(),
            army_stats: ArmyStats::default(),
            threats: Vec::new(),
            threats_blocked: 15_850,
            security_score: 99.98,
            search_metrics: SearchMetrics::default(),
            ledger: TokenLedger::default(),
        };
        save_state(&state, &path).unwrap();
        let loaded = load_state(&path).unwrap();
        assert_eq!(loaded.tick, 77);
        assert_eq!(loaded.threats_blocked, 15_850);
        std::fs::remove_file(&path).ok();
    }
}
