//! Summary statistics for reports.

use navlab_core::Classification;
use serde::{Deserialize, Serialize};

use crate::runner::AnalysisResult;

/// Counts and percentages shared by the markdown and JSON renderings.
#[derive(Debug, Clone, Copy)]
pub struct SummaryStats {
    pub total_schemes: usize,
    pub above_count: usize,
    pub below_count: usize,
    pub pct_above: f64,
    pub pct_below: f64,
}

impl SummaryStats {
    pub fn from_classification(classification: &Classification) -> Self {
        let total = classification.total_considered;
        let above = classification.above.len();
        let below = classification.below.len();
        let (pct_above, pct_below) = if total > 0 {
            (
                above as f64 / total as f64 * 100.0,
                below as f64 / total as f64 * 100.0,
            )
        } else {
            (0.0, 0.0)
        };
        Self {
            total_schemes: total,
            above_count: above,
            below_count: below,
            pct_above,
            pct_below,
        }
    }
}

/// Machine-readable run summary — counts and percentages only.
///
/// Persisted alongside the markdown report for programmatic consumers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JsonSummary {
    pub analysis_date: String,
    pub total_schemes_analyzed: usize,
    pub funds_above_average: usize,
    pub funds_below_average: usize,
    pub percentage_above: f64,
    pub percentage_below: f64,
}

impl JsonSummary {
    pub fn from_result(result: &AnalysisResult) -> Self {
        let stats = SummaryStats::from_classification(&result.classification);
        Self {
            analysis_date: result.analysis_date.to_string(),
            total_schemes_analyzed: stats.total_schemes,
            funds_above_average: stats.above_count,
            funds_below_average: stats.below_count,
            percentage_above: stats.pct_above,
            percentage_below: stats.pct_below,
        }
    }
}
