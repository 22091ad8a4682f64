//! Analysis runner — wires loading, the core pipeline, and result assembly.
//!
//! Two entry points:
//! - `run_analysis()`: loads observations from a CSV path, then runs. Used
//!   by the CLI.
//! - `run_analysis_from_observations()`: takes pre-loaded observations —
//!   no I/O. Used by tests and embedding callers.
//!
//! The analysis timestamp is an explicit input rather than an ambient
//! clock read, so identical inputs reproduce identical artifacts.

use std::path::Path;

use chrono::NaiveDateTime;
use navlab_core::pipeline::{PipelineError, PipelineStats};
use navlab_core::{run_pipeline, AnalysisConfig, Classification};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::config::{ConfigError, RunnerConfig};
use crate::data_loader::{load_observations, LoadError, LoadedObservations};

/// Errors from the runner.
#[derive(Debug, Error)]
pub enum RunError {
    #[error("config error: {0}")]
    Config(#[from] ConfigError),
    #[error("data error: {0}")]
    Data(#[from] LoadError),
    #[error("pipeline error: {0}")]
    Pipeline(#[from] PipelineError),
}

/// Current schema version for persisted artifacts.
pub const SCHEMA_VERSION: u32 = 1;

/// Complete result of one analysis run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    /// Schema version for forward-compatible deserialization.
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,
    /// When the analysis ran (supplied by the caller, UTC).
    pub analysis_date: NaiveDateTime,
    pub classification: Classification,
    pub stats: PipelineStats,
    /// The exact analysis configuration used, echoed for reproducibility.
    pub config: AnalysisConfig,
    /// BLAKE3 hash of the parsed input observations.
    pub dataset_hash: String,
    /// Observations that passed field-level validation.
    pub observation_count: usize,
    /// Malformed input rows dropped by the loader.
    pub dropped_rows: usize,
}

/// Default schema version for deserializing older JSON without the field.
fn default_schema_version() -> u32 {
    SCHEMA_VERSION
}

/// Run a full analysis from a CSV observation file.
pub fn run_analysis(
    input: &Path,
    config: &RunnerConfig,
    analysis_date: NaiveDateTime,
) -> Result<AnalysisResult, RunError> {
    let loaded = load_observations(input)?;
    Ok(run_analysis_from_observations(
        loaded,
        &config.analysis,
        analysis_date,
    )?)
}

/// Run the analysis over pre-loaded observations — no I/O.
pub fn run_analysis_from_observations(
    loaded: LoadedObservations,
    config: &AnalysisConfig,
    analysis_date: NaiveDateTime,
) -> Result<AnalysisResult, PipelineError> {
    let observation_count = loaded.observations.len();
    let outcome = run_pipeline(loaded.observations, config)?;

    Ok(AnalysisResult {
        schema_version: SCHEMA_VERSION,
        analysis_date,
        classification: outcome.classification,
        stats: outcome.stats,
        config: config.clone(),
        dataset_hash: loaded.dataset_hash,
        observation_count,
        dropped_rows: loaded.dropped_rows,
    })
}
