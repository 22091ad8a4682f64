//! NavLab Runner — orchestration around the core pipeline.
//!
//! This crate builds on `navlab-core` to provide:
//! - Observation loading from CSV with dropped-row accounting
//! - TOML run configuration with sensible defaults
//! - Analysis execution and result assembly (with dataset fingerprinting)
//! - Markdown, JSON, and CSV report generation
//! - Artifact export with full-overwrite semantics

pub mod config;
pub mod data_loader;
pub mod reporting;
pub mod runner;

pub use config::{ConfigError, ReportConfig, RunnerConfig};
pub use data_loader::{
    compute_dataset_hash, load_observations, load_observations_from_reader, LoadError,
    LoadedObservations,
};
pub use reporting::{
    export_classified_csv, export_json, import_json, save_artifacts, ArtifactPaths,
    JsonSummary, MarkdownReportGenerator, SummaryStats,
};
pub use runner::{
    run_analysis, run_analysis_from_observations, AnalysisResult, RunError, SCHEMA_VERSION,
};
