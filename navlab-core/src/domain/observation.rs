//! Observation — the fundamental NAV data unit.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Stable identifier for a scheme (one fund/plan listing).
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct SchemeCode(pub u32);

impl std::fmt::Display for SchemeCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One published NAV for a single scheme on a single date.
///
/// Observations are read-only inputs; at most one exists per
/// (scheme_code, date). NAV is never null in delivered rows — null rows are
/// filtered by the ingestion layer before the core sees them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Observation {
    pub scheme_code: SchemeCode,
    pub date: NaiveDate,
    pub nav: f64,
    pub scheme_name: String,
}

impl Observation {
    /// Returns true if the NAV is a usable price (finite and positive).
    ///
    /// A non-positive NAV does not make the row malformed — it is carried
    /// through and conservatively jump-flags the scheme downstream.
    pub fn has_valid_nav(&self) -> bool {
        self.nav.is_finite() && self.nav > 0.0
    }
}
