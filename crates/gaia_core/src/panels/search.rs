//! Simulated global search.
//!
//! The search pipeline is pure theater: a fixed list of stages walked on an
//! artificial delay, ending in four templated results derived from the
//! query. The panel models it as an explicit state machine so the host
//! loop stays responsive — `begin` starts a search, `advance_stage` is
//! called once per elapsed stage delay, and the `searching` flag
//! transitions back to false exactly once per completed search.
//!
//! Rolling dashboard metrics drift upward under the periodic updater.

use std::time::Duration;

use gaia_data::{Notice, RiskLevel, SearchMetrics, SearchResult, SearchResultKind};
use uuid::Uuid;

use crate::action::ActionError;
use crate::config::SearchConfig;
use crate::panel::{now_rfc3339, Panel};
use crate::rng::SimRng;

/// Pipeline stages, walked in order.
pub const SEARCH_STAGES: [&str; 8] = [
    "Initializing search protocols",
    "Accessing global index shards",
    "Decrypting protected archives",
    "Scanning public records",
    "Analyzing network captures",
    "Tracing attacker activity",
    "Processing encrypted channels",
    "Compiling results",
];

/// One-shot actions accepted by the search panel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchAction {
    /// Start a search for the given query.
    Begin(String),
    /// Drop the current result list.
    ClearResults,
}

#[derive(Clone)]
pub struct SearchPanel {
    config: SearchConfig,
    pub metrics: SearchMetrics,
    pub searching: bool,
    /// Fraction of the pipeline completed, 0.0..=1.0.
    pub progress: f64,
    pub results: Vec<SearchResult>,
    pub last_query: Option<String>,
    /// Searches that ran to completion this session.
    pub completed_searches: u64,
    session: Uuid,
    stages_done: usize,
    result_seq: u64,
}

impl SearchPanel {
    #[must_use]
    pub fn new(config: SearchConfig) -> Self {
        Self {
            config,
            metrics: SearchMetrics::default(),
            searching: false,
            progress: 0.0,
            results: Vec::new(),
            last_query: None,
            completed_searches: 0,
            session: Uuid::new_v4(),
            stages_done: 0,
            result_seq: 0,
        }
    }

    /// Swaps in hot-reloaded rates.
    pub fn set_config(&mut self, config: SearchConfig) {
        self.config = config;
    }

    /// Artificial latency of one pipeline stage.
    #[must_use]
    pub fn stage_delay(&self) -> Duration {
        Duration::from_millis(self.config.stage_delay_ms)
    }

    /// Starts a search. Rejects empty queries and concurrent searches
    /// without touching any state.
    pub fn begin(&mut self, tick: u64, query: &str) -> Result<Notice, ActionError> {
        let query = query.trim();
        if query.is_empty() {
            return Err(ActionError::validation("Please enter a search query"));
        }
        if self.searching {
            return Err(ActionError::Busy("A search is already running".to_string()));
        }

        self.searching = true;
        self.stages_done = 0;
        self.progress = 0.0;
        self.results.clear();
        self.last_query = Some(query.to_string());

        Ok(Notice::SearchStage {
            stage: 1,
            total: SEARCH_STAGES.len(),
            label: SEARCH_STAGES[0].to_string(),
            tick,
            timestamp: now_rfc3339(),
        })
    }

    /// Completes one pipeline stage. Call once per elapsed stage delay.
    ///
    /// Returns the next stage notice, or the completion notice when the
    /// final stage finishes. A no-op while no search is running.
    pub fn advance_stage(&mut self, tick: u64) -> Vec<Notice> {
        if !self.searching {
            return Vec::new();
        }

        self.stages_done += 1;
        self.progress = self.stages_done as f64 / SEARCH_STAGES.len() as f64;

        if self.stages_done < SEARCH_STAGES.len() {
            return vec![Notice::SearchStage {
                stage: self.stages_done + 1,
                total: SEARCH_STAGES.len(),
                label: SEARCH_STAGES[self.stages_done].to_string(),
                tick,
                timestamp: now_rfc3339(),
            }];
        }

        let query = self.last_query.clone().unwrap_or_default();
        self.results = self.build_results(&query);
        self.searching = false;
        self.completed_searches += 1;

        vec![Notice::SearchComplete {
            query,
            results: self.results.len(),
            tick,
            timestamp: now_rfc3339(),
        }]
    }

    /// Runs a full search, sleeping the artificial stage delay between
    /// stages. The delay always resolves; there is no timeout to apply.
    pub async fn run_to_completion(
        &mut self,
        tick: u64,
        query: &str,
    ) -> Result<Vec<Notice>, ActionError> {
        let mut notices = vec![self.begin(tick, query)?];
        let delay = self.stage_delay();
        while self.searching {
            if !delay.is_zero() {
                tokio::time::sleep(delay).await;
            }
            notices.extend(self.advance_stage(tick));
        }
        Ok(notices)
    }

    fn next_result_id(&mut self) -> String {
        self.result_seq += 1;
        format!("result-{}-{}", self.result_seq, self.session.simple())
    }

    fn build_results(&mut self, query: &str) -> Vec<SearchResult> {
        let templates = [
            (
                SearchResultKind::EncryptedFile,
                format!("Encrypted Database: {query}"),
                format!("Decrypted content related to \"{query}\". Maximum clearance required."),
                "Global Encrypted Network",
                256,
                RiskLevel::High,
            ),
            (
                SearchResultKind::NetworkTrace,
                format!("Attacker Activity: {query}"),
                format!("Traced malicious activity related to \"{query}\". Attack vectors identified."),
                "Global Threat Intelligence Network",
                128,
                RiskLevel::Critical,
            ),
            (
                SearchResultKind::Document,
                format!("Global Document: {query}"),
                format!("Documentation found across global networks containing \"{query}\"."),
                "Worldwide Document Repository",
                64,
                RiskLevel::Moderate,
            ),
            (
                SearchResultKind::Database,
                format!("Database Entry: {query}"),
                format!("Records from multiple global sources related to \"{query}\"."),
                "Global Database Network",
                192,
                RiskLevel::Safe,
            ),
        ];

        templates
            .into_iter()
            .map(
                |(kind, title, content, location, encryption_level, risk_level)| SearchResult {
                    id: self.next_result_id(),
                    kind,
                    title,
                    content,
                    location: location.to_string(),
                    encryption_level,
                    risk_level,
                },
            )
            .collect()
    }
}

impl Panel for SearchPanel {
    type Action = SearchAction;

    fn name(&self) -> &'static str {
        "search"
    }

    fn tick(&mut self, _tick: u64, rng: &mut SimRng) -> anyhow::Result<Vec<Notice>> {
        let m = &mut self.metrics;
        m.total_documents += rng.below(self.config.max_document_drift + 1);
        m.encrypted_files += rng.below(self.config.max_file_drift + 1);
        m.databases_scanned += rng.below(self.config.max_database_drift + 1);
        m.traces_found += rng.below(self.config.max_trace_drift + 1);
        m.global_reach = (m.global_reach + rng.unit() * 0.1).min(self.config.reach_cap);
        Ok(Vec::new())
    }

    fn apply(&mut self, tick: u64, action: SearchAction) -> Result<Vec<Notice>, ActionError> {
        match action {
            SearchAction::Begin(query) => Ok(vec![self.begin(tick, &query)?]),
            SearchAction::ClearResults => {
                self.results.clear();
                self.last_query = None;
                self.progress = 0.0;
                Ok(Vec::new())
            }
        }
    }
}
