//! Staleness and validity filtering — snapshot extraction and recency.
//!
//! A scheme survives into a snapshot iff its latest observation carries a
//! defined moving average and the scheme is not jump-flagged. Recency is a
//! second pass: the anchor date (cross-scheme maximum latest-date) is
//! computed from the candidates and passed in explicitly, so runs are
//! reproducible from fixed inputs with no ambient clock.

use chrono::{Duration, NaiveDate};

use crate::domain::{SchemeSnapshot, WindowedObservation};

/// Extract the latest windowed observation as a snapshot candidate.
///
/// Returns `None` when the series is empty or its latest observation has no
/// moving average (fewer observations than the window).
pub fn latest_snapshot(windowed: &[WindowedObservation]) -> Option<SchemeSnapshot> {
    let last = windowed.last()?;
    let moving_average = last.moving_average?;
    Some(SchemeSnapshot {
        scheme_code: last.observation.scheme_code,
        scheme_name: last.observation.scheme_name.clone(),
        date: last.observation.date,
        nav: last.observation.nav,
        moving_average,
    })
}

/// The maximum snapshot date, used as the recency anchor.
pub fn recency_anchor(snapshots: &[SchemeSnapshot]) -> Option<NaiveDate> {
    snapshots.iter().map(|s| s.date).max()
}

/// Keep only snapshots no older than `recency_days` calendar days before
/// the anchor.
///
/// A scheme that stopped reporting is excluded even if its own history was
/// otherwise valid.
pub fn apply_recency(
    snapshots: Vec<SchemeSnapshot>,
    anchor: NaiveDate,
    recency_days: u32,
) -> Vec<SchemeSnapshot> {
    let cutoff = anchor - Duration::days(recency_days as i64);
    snapshots.into_iter().filter(|s| s.date >= cutoff).collect()
}
