//! Pipeline orchestration — wires scoping, windowing, filtering, dedup,
//! and classification into one deterministic batch transform.
//!
//! Per-scheme work (windowing, jump check, snapshot extraction) fans out
//! over rayon; the results are re-sorted by scheme code before the
//! cross-scheme stages, so parallelism never leaks into output order.

use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::classify::classify;
use crate::dedup::deduplicate;
use crate::domain::{Classification, Observation, SchemeSnapshot};
use crate::jump::is_jump_flagged;
use crate::rolling::window_series;
use crate::staleness::{apply_recency, latest_snapshot, recency_anchor};
use crate::calendar;
use crate::vocab::NameVocabulary;

/// Errors from pipeline configuration validation.
#[derive(Debug, Error)]
pub enum PipelineError {
    #[error("window must be at least 2 observations, got {0}")]
    InvalidWindow(usize),
    #[error("jump threshold must be a positive finite ratio, got {0}")]
    InvalidJumpThreshold(f64),
}

/// Tunable parameters of the analysis pipeline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisConfig {
    /// Rolling window length in trading-day observations.
    pub window: usize,
    /// Maximum tolerated |day-over-day change ratio| in the final window.
    pub jump_threshold: f64,
    /// Calendar days behind the cross-scheme maximum date before a scheme
    /// counts as stale.
    pub recency_days: u32,
    /// Category exclusion and name normalization vocabulary.
    pub vocabulary: NameVocabulary,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            window: 200,
            jump_threshold: 0.10,
            recency_days: 200,
            vocabulary: NameVocabulary::default(),
        }
    }
}

impl AnalysisConfig {
    pub fn validate(&self) -> Result<(), PipelineError> {
        if self.window < 2 {
            return Err(PipelineError::InvalidWindow(self.window));
        }
        if !self.jump_threshold.is_finite() || self.jump_threshold <= 0.0 {
            return Err(PipelineError::InvalidJumpThreshold(self.jump_threshold));
        }
        Ok(())
    }
}

/// Stage-by-stage attrition counts, surfaced alongside the classification.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PipelineStats {
    /// Schemes present after trading-day scoping.
    pub schemes_scoped: usize,
    /// Schemes with a full window at their latest observation.
    pub schemes_windowed: usize,
    /// Schemes excluded for an anomalous NAV change.
    pub jump_flagged: usize,
    /// Schemes excluded for staleness.
    pub stale_excluded: usize,
    /// Plan-variant listings collapsed by deduplication.
    pub duplicates_collapsed: usize,
}

/// Classification plus attrition accounting for one pipeline run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PipelineOutcome {
    pub classification: Classification,
    pub stats: PipelineStats,
}

/// Run the full pipeline over a raw observation set.
///
/// Stages run strictly in order: trading-day scoping, rolling average,
/// jump detection, staleness/validity filtering, deduplication,
/// classification. An empty input (or one fully consumed by filtering) is
/// a valid run that reports zero survivors.
pub fn run_pipeline(
    observations: Vec<Observation>,
    config: &AnalysisConfig,
) -> Result<PipelineOutcome, PipelineError> {
    config.validate()?;

    let scoped = calendar::scope_series(observations, &config.vocabulary);
    let mut stats = PipelineStats {
        schemes_scoped: scoped.len(),
        ..PipelineStats::default()
    };

    // Per-scheme fan-out: windowing, jump check, snapshot extraction.
    let mut per_scheme: Vec<(SchemeSnapshot, bool)> = scoped
        .into_iter()
        .collect::<Vec<_>>()
        .into_par_iter()
        .filter_map(|(_, series)| {
            let windowed = window_series(&series, config.window);
            let snapshot = latest_snapshot(&windowed)?;
            let flagged = is_jump_flagged(&windowed, config.window, config.jump_threshold);
            Some((snapshot, flagged))
        })
        .collect();
    per_scheme.sort_by_key(|(snapshot, _)| snapshot.scheme_code);

    stats.schemes_windowed = per_scheme.len();
    let candidates: Vec<SchemeSnapshot> = per_scheme
        .into_iter()
        .filter_map(|(snapshot, flagged)| (!flagged).then_some(snapshot))
        .collect();
    stats.jump_flagged = stats.schemes_windowed - candidates.len();

    let fresh = match recency_anchor(&candidates) {
        Some(anchor) => apply_recency(candidates, anchor, config.recency_days),
        None => Vec::new(),
    };
    stats.stale_excluded = stats.schemes_windowed - stats.jump_flagged - fresh.len();

    let survivor_count = fresh.len();
    let deduplicated = deduplicate(fresh, &config.vocabulary);
    stats.duplicates_collapsed = survivor_count - deduplicated.len();

    Ok(PipelineOutcome {
        classification: classify(deduplicated),
        stats,
    })
}
