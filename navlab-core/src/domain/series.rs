//! Per-scheme observation series, ordered by date.

use chrono::NaiveDate;

use crate::domain::{Observation, SchemeCode};

/// The date-ascending sequence of observations for one scheme.
///
/// Construction sorts and collapses duplicate dates (keep-first), so every
/// positional rolling computation downstream can trust the order. The rolling
/// window is positional, not date-aware: calendar gaps are not re-weighted.
#[derive(Debug, Clone)]
pub struct SchemeSeries {
    code: SchemeCode,
    name: String,
    observations: Vec<Observation>,
}

impl SchemeSeries {
    /// Build a series from unordered observations of a single scheme.
    ///
    /// Sorts by date ascending and keeps the first row for any duplicated
    /// date. The display name is taken from the latest observation, so a
    /// renamed scheme reports its current name.
    pub fn from_observations(code: SchemeCode, mut observations: Vec<Observation>) -> Self {
        observations.sort_by_key(|o| o.date);
        observations.dedup_by_key(|o| o.date);
        let name = observations
            .last()
            .map(|o| o.scheme_name.clone())
            .unwrap_or_default();
        Self {
            code,
            name,
            observations,
        }
    }

    pub fn code(&self) -> SchemeCode {
        self.code
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn observations(&self) -> &[Observation] {
        &self.observations
    }

    pub fn latest(&self) -> Option<&Observation> {
        self.observations.last()
    }

    pub fn latest_date(&self) -> Option<NaiveDate> {
        self.observations.last().map(|o| o.date)
    }

    pub fn navs(&self) -> Vec<f64> {
        self.observations.iter().map(|o| o.nav).collect()
    }

    pub fn len(&self) -> usize {
        self.observations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.observations.is_empty()
    }
}
