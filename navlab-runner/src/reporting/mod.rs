//! Reporting and artifact export pipeline.

pub mod export;
pub mod markdown;
pub mod summary;

pub use export::{export_classified_csv, export_json, import_json, save_artifacts, ArtifactPaths};
pub use markdown::MarkdownReportGenerator;
pub use summary::{JsonSummary, SummaryStats};
