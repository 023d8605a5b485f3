use serde::{Deserialize, Serialize};

/// Category of a simulated search hit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SearchResultKind {
    Document,
    EncryptedFile,
    Database,
    NetworkTrace,
}

/// Risk classification attached to a search hit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RiskLevel {
    Safe,
    Moderate,
    High,
    Critical,
}

/// A single simulated search hit.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchResult {
    /// Stable per-session identifier ("result-<seq>-<session>").
    pub id: String,
    pub kind: SearchResultKind,
    pub title: String,
    pub content: String,
    pub location: String,
    pub encryption_level: u16,
    pub risk_level: RiskLevel,
}

/// Rolling counters shown on the search dashboard.
///
/// These only ever move upward (or toward their cap) under the periodic
/// updater; they carry no meaning beyond presentation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SearchMetrics {
    pub total_documents: u64,
    pub encrypted_files: u64,
    pub databases_scanned: u64,
    pub traces_found: u64,
    /// Percentage, capped at 99.9.
    pub global_reach: f64,
    pub processing_power: u8,
}

impl Default for SearchMetrics {
    fn default() -> Self {
        Self {
            total_documents: 847_291_847,
            encrypted_files: 293_847,
            databases_scanned: 192_847,
            traces_found: 3_847,
            global_reach: 97.8,
            processing_power: 100,
        }
    }
}
