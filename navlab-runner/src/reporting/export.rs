//! Export orchestration — JSON, CSV, and markdown artifact generation.
//!
//! Three persisted formats per run:
//! - **JSON**: full `AnalysisResult` round-trip with schema versioning,
//!   plus the counts-only summary for programmatic consumers
//! - **CSV**: the classified fund table for external analysis tools
//! - **Markdown**: the human-readable report
//!
//! Artifacts are written under fixed names and fully regenerated on every
//! run — there is no incremental append semantics.

use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use navlab_core::ClassifiedFund;

use crate::config::ReportConfig;
use crate::reporting::markdown::MarkdownReportGenerator;
use crate::reporting::summary::JsonSummary;
use crate::runner::{AnalysisResult, SCHEMA_VERSION};

// ─── JSON export ────────────────────────────────────────────────────

/// Serialize an `AnalysisResult` to pretty JSON.
pub fn export_json(result: &AnalysisResult) -> Result<String> {
    serde_json::to_string_pretty(result).context("failed to serialize AnalysisResult to JSON")
}

/// Deserialize an `AnalysisResult` from JSON, rejecting unknown schema
/// versions.
pub fn import_json(json: &str) -> Result<AnalysisResult> {
    let result: AnalysisResult =
        serde_json::from_str(json).context("failed to deserialize AnalysisResult from JSON")?;
    if result.schema_version > SCHEMA_VERSION {
        bail!(
            "unsupported schema version {} (max supported: {})",
            result.schema_version,
            SCHEMA_VERSION
        );
    }
    Ok(result)
}

// ─── CSV export ─────────────────────────────────────────────────────

/// Export both partitions as CSV.
///
/// Columns: side, scheme_code, scheme_name, date, nav, moving_average,
/// deviation_pct. Ordering matches the report: above (premium first),
/// then below (discount first).
pub fn export_classified_csv(result: &AnalysisResult) -> Result<String> {
    let mut writer = csv::Writer::from_writer(vec![]);

    writer.write_record([
        "side",
        "scheme_code",
        "scheme_name",
        "date",
        "nav",
        "moving_average",
        "deviation_pct",
    ])?;

    let sides: [(&str, &[ClassifiedFund]); 2] = [
        ("above", &result.classification.above),
        ("below", &result.classification.below),
    ];
    for (side, funds) in sides {
        for fund in funds {
            writer.write_record([
                side,
                &fund.scheme_code.to_string(),
                &fund.scheme_name,
                &fund.date.to_string(),
                &format!("{:.4}", fund.nav),
                &format!("{:.4}", fund.moving_average),
                &format!("{:+.2}", fund.deviation_pct),
            ])?;
        }
    }

    let data = writer.into_inner().context("failed to flush CSV writer")?;
    String::from_utf8(data).context("CSV output is not valid UTF-8")
}

// ─── Artifact bundle ────────────────────────────────────────────────

/// Locations of the artifacts written by `save_artifacts`.
#[derive(Debug, Clone)]
pub struct ArtifactPaths {
    pub analysis_json: PathBuf,
    pub summary_json: PathBuf,
    pub report_markdown: PathBuf,
    pub funds_csv: PathBuf,
}

/// Write the full artifact set for one run into `output_dir`.
///
/// Creates the directory if needed and overwrites any artifact from a
/// previous run:
/// - `analysis.json` — the full `AnalysisResult`
/// - `nav_summary.json` — counts and percentages only
/// - `nav_analysis.md` — the markdown report
/// - `classified_funds.csv` — both partitions as CSV
pub fn save_artifacts(
    result: &AnalysisResult,
    report: &ReportConfig,
    output_dir: impl AsRef<Path>,
) -> Result<ArtifactPaths> {
    let output_dir = output_dir.as_ref();
    std::fs::create_dir_all(output_dir)
        .with_context(|| format!("failed to create output dir '{}'", output_dir.display()))?;

    let paths = ArtifactPaths {
        analysis_json: output_dir.join("analysis.json"),
        summary_json: output_dir.join("nav_summary.json"),
        report_markdown: output_dir.join("nav_analysis.md"),
        funds_csv: output_dir.join("classified_funds.csv"),
    };

    std::fs::write(&paths.analysis_json, export_json(result)?)
        .with_context(|| format!("failed to write '{}'", paths.analysis_json.display()))?;

    let summary = serde_json::to_string_pretty(&JsonSummary::from_result(result))
        .context("failed to serialize run summary")?;
    std::fs::write(&paths.summary_json, summary)
        .with_context(|| format!("failed to write '{}'", paths.summary_json.display()))?;

    let markdown = MarkdownReportGenerator.generate(result, report);
    std::fs::write(&paths.report_markdown, markdown)
        .with_context(|| format!("failed to write '{}'", paths.report_markdown.display()))?;

    std::fs::write(&paths.funds_csv, export_classified_csv(result)?)
        .with_context(|| format!("failed to write '{}'", paths.funds_csv.display()))?;

    Ok(paths)
}
