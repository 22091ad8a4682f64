//! Markdown report generator.
//!
//! Renders the human-readable analysis: a summary block followed by the
//! "above" and "below" tables. Table rows are capped at the configured
//! maximum with a "Showing top N out of M" notice; long scheme names are
//! truncated with an ellipsis. NAV and moving average render at 4 decimals,
//! deviation at 2 with an explicit sign.

use navlab_core::ClassifiedFund;

use super::summary::SummaryStats;
use crate::config::ReportConfig;
use crate::runner::AnalysisResult;

pub struct MarkdownReportGenerator;

impl MarkdownReportGenerator {
    pub fn generate(&self, result: &AnalysisResult, report: &ReportConfig) -> String {
        let stats = SummaryStats::from_classification(&result.classification);
        let window = result.config.window;

        let mut output = format!(
            "## {window}-Day Moving Average Analysis\n\n\
**Analysis Date:** {} UTC\n\n\
### Summary Statistics\n\
- **Total schemes analyzed:** {}\n\
- **Funds above {window}-DMA:** {} ({:.1}%)\n\
- **Funds below {window}-DMA:** {} ({:.1}%)\n\n",
            result.analysis_date.format("%Y-%m-%d %H:%M:%S"),
            stats.total_schemes,
            stats.above_count,
            stats.pct_above,
            stats.below_count,
            stats.pct_below,
        );

        output.push_str(&format!(
            "*Note: Only schemes with at least {window} trading days of data are included.*\n\
*Weekends are excluded from the moving average calculation.*\n\
*Schemes must have reported within the last {} days to be included.*\n\
*Plan-variant listings of the same fund are consolidated (Direct plans preferred).*\n\
*Schemes with NAV jumps above {:.0}% inside the current window are excluded.*\n",
            result.config.recency_days,
            result.config.jump_threshold * 100.0,
        ));

        output.push_str(&self.format_table(
            &result.classification.above,
            &format!("Funds Trading Above {window}-Day Moving Average"),
            report,
        ));
        output.push_str(&self.format_table(
            &result.classification.below,
            &format!("Funds Trading Below {window}-Day Moving Average"),
            report,
        ));

        if result.dropped_rows > 0 {
            output.push_str(&format!(
                "\n*{} malformed input row(s) were dropped during loading.*\n",
                result.dropped_rows
            ));
        }

        output
    }

    fn format_table(
        &self,
        funds: &[ClassifiedFund],
        title: &str,
        report: &ReportConfig,
    ) -> String {
        if funds.is_empty() {
            return format!("\n### {title}\nNo funds in this category.\n");
        }

        let mut table = format!("\n### {title}\n\n");
        if funds.len() > report.max_rows {
            table.push_str(&format!(
                "Showing top {} out of {} funds:\n\n",
                report.max_rows,
                funds.len()
            ));
        } else {
            table.push_str(&format!("Total funds: {}\n\n", funds.len()));
        }

        table.push_str("| Code | Scheme Name | Current NAV | DMA | Difference (%) |\n");
        table.push_str("|------|-------------|-------------|-----|----------------|\n");

        for fund in funds.iter().take(report.max_rows) {
            table.push_str(&format!(
                "| {} | {} | {:.4} | {:.4} | {:+.2}% |\n",
                fund.scheme_code,
                truncate_name(&fund.scheme_name, report.max_name_length),
                fund.nav,
                fund.moving_average,
                fund.deviation_pct,
            ));
        }

        table
    }
}

/// Truncate a display name to `max_length` characters with an ellipsis.
fn truncate_name(name: &str, max_length: usize) -> String {
    if name.chars().count() > max_length {
        let prefix: String = name.chars().take(max_length).collect();
        format!("{prefix}...")
    } else {
        name.to_string()
    }
}
