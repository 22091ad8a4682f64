//! Observation loading for the runner.
//!
//! Reads the delivered observation table from a headered CSV
//! (`scheme_code,date,nav,scheme_name`). Malformed rows — unparsable code,
//! date, or NAV — are a precondition violation for that row only: the row
//! is dropped and counted, never silently ignored. The loader also computes
//! a deterministic BLAKE3 hash over the parsed observations so a run can be
//! tied to its exact input snapshot.

use std::io::Read;
use std::path::Path;

use chrono::NaiveDate;
use navlab_core::{Observation, SchemeCode};
use serde::Deserialize;
use thiserror::Error;

/// Errors from the data loading layer.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to open observations file '{path}': {source}")]
    Open {
        path: String,
        source: std::io::Error,
    },
    #[error("failed to read observations CSV: {0}")]
    Csv(#[from] csv::Error),
}

/// One raw CSV row before field-level validation.
#[derive(Debug, Deserialize)]
struct RawRow {
    scheme_code: String,
    date: String,
    nav: String,
    scheme_name: String,
}

/// Result of loading observations, including dropped-row accounting.
#[derive(Debug)]
pub struct LoadedObservations {
    /// Rows that passed field-level validation.
    pub observations: Vec<Observation>,
    /// Rows dropped for a malformed code, date, or NAV.
    pub dropped_rows: usize,
    /// Deterministic BLAKE3 hash over the parsed observations.
    pub dataset_hash: String,
}

/// Load observations from a CSV file.
pub fn load_observations(path: &Path) -> Result<LoadedObservations, LoadError> {
    let file = std::fs::File::open(path).map_err(|source| LoadError::Open {
        path: path.display().to_string(),
        source,
    })?;
    load_observations_from_reader(file)
}

/// Load observations from any CSV reader (primary entry for tests).
pub fn load_observations_from_reader<R: Read>(
    reader: R,
) -> Result<LoadedObservations, LoadError> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut observations = Vec::new();
    let mut dropped_rows = 0usize;

    for row in csv_reader.deserialize::<RawRow>() {
        match row {
            Ok(raw) => match parse_row(&raw) {
                Some(obs) => observations.push(obs),
                None => dropped_rows += 1,
            },
            // A structurally broken row (wrong field count, bad UTF-8) is a
            // per-row violation like a bad date: dropped and counted. Only
            // an underlying I/O failure aborts the load.
            Err(err) if err.is_io_error() => return Err(LoadError::Csv(err)),
            Err(_) => dropped_rows += 1,
        }
    }

    let dataset_hash = compute_dataset_hash(&observations);

    Ok(LoadedObservations {
        observations,
        dropped_rows,
        dataset_hash,
    })
}

/// Field-level validation of one raw row. `None` means the row is dropped.
fn parse_row(row: &RawRow) -> Option<Observation> {
    let scheme_code = row.scheme_code.parse::<u32>().ok()?;
    let date = NaiveDate::parse_from_str(&row.date, "%Y-%m-%d").ok()?;
    let nav = row.nav.parse::<f64>().ok()?;
    if !nav.is_finite() {
        return None;
    }
    Some(Observation {
        scheme_code: SchemeCode(scheme_code),
        date,
        nav,
        scheme_name: row.scheme_name.clone(),
    })
}

/// Compute a deterministic BLAKE3 hash over the observation set.
///
/// The hash covers code, date, NAV, and name in (code, date) sorted order,
/// so it is identical regardless of row order in the source file.
pub fn compute_dataset_hash(observations: &[Observation]) -> String {
    let mut sorted: Vec<&Observation> = observations.iter().collect();
    sorted.sort_by_key(|o| (o.scheme_code, o.date));

    let mut hasher = blake3::Hasher::new();
    for obs in sorted {
        hasher.update(&obs.scheme_code.0.to_le_bytes());
        hasher.update(obs.date.to_string().as_bytes());
        hasher.update(&obs.nav.to_le_bytes());
        hasher.update(obs.scheme_name.as_bytes());
    }
    hasher.finalize().to_hex().to_string()
}
