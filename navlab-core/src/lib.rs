//! NavLab Core — the NAV trend-classification pipeline.
//!
//! This crate contains the analytical heart of NavLab:
//! - Domain types (observations, per-scheme series, snapshots, classified funds)
//! - Trading-day scoping (weekend removal, category exclusion)
//! - Trailing moving average with O(n) running-sum windowing
//! - Jump detection over the final observation window
//! - Staleness/validity filtering with an explicit recency anchor
//! - Plan-variant deduplication with priority tie-breaking
//! - Above/below classification and deviation ranking
//!
//! The core is pure and deterministic: no I/O, no ambient clock, and the
//! rayon fan-out re-establishes ordering before anything is returned.

pub mod calendar;
pub mod classify;
pub mod dedup;
pub mod domain;
pub mod jump;
pub mod pipeline;
pub mod rolling;
pub mod staleness;
pub mod vocab;

pub use classify::classify;
pub use dedup::{deduplicate, plan_priority};
pub use domain::{
    Classification, ClassifiedFund, Observation, SchemeCode, SchemeSeries, SchemeSnapshot,
    WindowedObservation,
};
pub use pipeline::{run_pipeline, AnalysisConfig, PipelineError, PipelineOutcome, PipelineStats};
pub use vocab::NameVocabulary;
