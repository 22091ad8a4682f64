//! Derived per-scheme entities: windowed observations, snapshots, and
//! classified funds.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::{Observation, SchemeCode};

/// An observation annotated with its trailing moving average and its
/// day-over-day change ratio.
///
/// `moving_average` is absent until the window is full; `change_ratio` is
/// absent at the first position of a series. Absence is semantic — never
/// zero, never an extrapolation.
#[derive(Debug, Clone, PartialEq)]
pub struct WindowedObservation {
    pub observation: Observation,
    pub moving_average: Option<f64>,
    pub change_ratio: Option<f64>,
}

/// The single most-recent windowed observation of a scheme that survived the
/// validity filters: full window, not jump-flagged, recent enough.
///
/// This is the unit consumed by deduplication and classification.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SchemeSnapshot {
    pub scheme_code: SchemeCode,
    pub scheme_name: String,
    pub date: NaiveDate,
    pub nav: f64,
    pub moving_average: f64,
}

/// A surviving snapshot with its signed percentage deviation from the
/// moving average.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassifiedFund {
    pub scheme_code: SchemeCode,
    pub scheme_name: String,
    pub date: NaiveDate,
    pub nav: f64,
    pub moving_average: f64,
    pub deviation_pct: f64,
}

impl ClassifiedFund {
    pub fn from_snapshot(snapshot: SchemeSnapshot) -> Self {
        let deviation_pct =
            (snapshot.nav - snapshot.moving_average) / snapshot.moving_average * 100.0;
        Self {
            scheme_code: snapshot.scheme_code,
            scheme_name: snapshot.scheme_name,
            date: snapshot.date,
            nav: snapshot.nav,
            moving_average: snapshot.moving_average,
            deviation_pct,
        }
    }
}

/// Final pipeline output: funds above and below their moving average.
///
/// `above` is sorted by deviation descending (largest premium first),
/// `below` ascending (largest discount first). A scheme trading exactly at
/// its average appears in neither partition but still counts toward
/// `total_considered`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Classification {
    pub above: Vec<ClassifiedFund>,
    pub below: Vec<ClassifiedFund>,
    /// Snapshots considered post-dedup, pre-partition. Denominator for
    /// percentage-of-total reporting.
    pub total_considered: usize,
}

impl Classification {
    pub fn empty() -> Self {
        Self {
            above: Vec::new(),
            below: Vec::new(),
            total_considered: 0,
        }
    }
}
