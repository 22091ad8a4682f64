//! NavLab CLI — moving-average analysis over daily NAV observations.
//!
//! Commands:
//! - `run` — execute an analysis from a CSV observation file and write the
//!   artifact bundle (markdown report, JSON summary, full JSON, CSV)
//! - `sample` — write a deterministic synthetic observation CSV for
//!   development and demos

use std::io::Write;
use std::path::PathBuf;

use anyhow::{Context, Result};
use chrono::{Datelike, NaiveDate, Weekday};
use clap::{Parser, Subcommand};
use navlab_runner::{run_analysis, AnalysisResult, RunnerConfig, SummaryStats};

#[derive(Parser)]
#[command(
    name = "navlab",
    about = "NavLab CLI — NAV vs moving-average trend classification"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the analysis over a CSV observation file.
    Run {
        /// Path to the observations CSV (scheme_code,date,nav,scheme_name).
        #[arg(long)]
        input: PathBuf,

        /// Path to a TOML run config. Defaults apply when omitted.
        #[arg(long)]
        config: Option<PathBuf>,

        /// Output directory for the artifact bundle.
        #[arg(long, default_value = "reports")]
        output_dir: PathBuf,

        /// Override the rolling window length from the config.
        #[arg(long)]
        window: Option<usize>,

        /// Override the report row cap from the config.
        #[arg(long)]
        max_rows: Option<usize>,
    },
    /// Write a synthetic observation CSV for development.
    Sample {
        /// Output CSV path.
        #[arg(long, default_value = "observations.csv")]
        output: PathBuf,

        /// Number of schemes to generate.
        #[arg(long, default_value_t = 50)]
        schemes: u32,

        /// Trading days of history per scheme.
        #[arg(long, default_value_t = 300)]
        days: usize,

        /// First calendar date (YYYY-MM-DD) of the history.
        #[arg(long, default_value = "2023-01-02")]
        start: String,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Run {
            input,
            config,
            output_dir,
            window,
            max_rows,
        } => run_cmd(input, config, output_dir, window, max_rows),
        Commands::Sample {
            output,
            schemes,
            days,
            start,
        } => sample_cmd(output, schemes, days, &start),
    }
}

fn run_cmd(
    input: PathBuf,
    config_path: Option<PathBuf>,
    output_dir: PathBuf,
    window: Option<usize>,
    max_rows: Option<usize>,
) -> Result<()> {
    let mut config = match config_path {
        Some(path) => RunnerConfig::from_file(&path)?,
        None => RunnerConfig::default(),
    };
    if let Some(window) = window {
        config.analysis.window = window;
    }
    if let Some(max_rows) = max_rows {
        config.report.max_rows = max_rows;
    }

    let analysis_date = chrono::Utc::now().naive_utc();
    let result = run_analysis(&input, &config, analysis_date)?;

    print_summary(&result);

    let paths = navlab_runner::save_artifacts(&result, &config.report, &output_dir)?;
    println!("Report saved to: {}", paths.report_markdown.display());
    println!("Summary saved to: {}", paths.summary_json.display());

    Ok(())
}

fn print_summary(result: &AnalysisResult) {
    let stats = SummaryStats::from_classification(&result.classification);

    println!();
    println!("=== NAV Analysis ===");
    println!("Observations:    {}", result.observation_count);
    if result.dropped_rows > 0 {
        println!("Dropped rows:    {}", result.dropped_rows);
    }
    println!("Schemes scoped:  {}", result.stats.schemes_scoped);
    println!("Full window:     {}", result.stats.schemes_windowed);
    println!("Jump-flagged:    {}", result.stats.jump_flagged);
    println!("Stale:           {}", result.stats.stale_excluded);
    println!("Duplicates:      {}", result.stats.duplicates_collapsed);
    println!();
    println!("--- Classification ---");
    println!("Total analyzed:  {}", stats.total_schemes);
    println!(
        "Above average:   {} ({:.1}%)",
        stats.above_count, stats.pct_above
    );
    println!(
        "Below average:   {} ({:.1}%)",
        stats.below_count, stats.pct_below
    );
    println!("Dataset hash:    {}", result.dataset_hash);
    println!();
}

/// Write a deterministic synthetic observation CSV.
///
/// Each scheme is a random walk seeded from its code, so repeated
/// invocations produce identical files. A handful of schemes are emitted
/// as Direct/Regular plan pairs to exercise deduplication, and weekends
/// are skipped the way the real observation feed skips them.
fn sample_cmd(output: PathBuf, schemes: u32, days: usize, start: &str) -> Result<()> {
    let start_date = NaiveDate::parse_from_str(start, "%Y-%m-%d")
        .with_context(|| format!("invalid --start date '{start}'"))?;

    let mut file = std::fs::File::create(&output)
        .with_context(|| format!("failed to create '{}'", output.display()))?;
    writeln!(file, "scheme_code,date,nav,scheme_name")?;

    let mut rows = 0usize;
    for code in 1..=schemes {
        // Every fourth scheme gets a Regular twin of the previous Direct
        // listing, offset in NAV but sharing the underlying fund name.
        let (base, plan) = if code % 4 == 0 {
            (code - 1, "Regular Plan")
        } else {
            (code, "Direct Plan")
        };
        let name = format!("Synthetic Scheme {base} - {plan} - Growth");

        for (date, nav) in synthetic_walk(code, start_date, days) {
            writeln!(file, "{code},{date},{nav:.4},{name}")?;
            rows += 1;
        }
    }

    println!(
        "Wrote {rows} observations for {schemes} schemes to {}",
        output.display()
    );
    Ok(())
}

/// Deterministic weekday-only NAV random walk for one scheme.
fn synthetic_walk(code: u32, start: NaiveDate, days: usize) -> Vec<(NaiveDate, f64)> {
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    // Deterministic seed from the scheme code.
    let seed: [u8; 32] = *blake3::hash(&code.to_le_bytes()).as_bytes();
    let mut rng = StdRng::from_seed(seed);

    let mut walk = Vec::with_capacity(days);
    let mut nav = rng.gen_range(10.0..500.0_f64);
    let mut date = start;

    while walk.len() < days {
        if !matches!(date.weekday(), Weekday::Sat | Weekday::Sun) {
            walk.push((date, nav));
            let daily_return: f64 = rng.gen_range(-0.015..0.017);
            nav *= 1.0 + daily_return;
        }
        date += chrono::Duration::days(1);
    }

    walk
}
