//! Trading-day scoping — weekend removal and category exclusion.
//!
//! Produces one scoped series per scheme from the raw observation set.
//! Weekend rows are dropped (holiday calendars are deliberately not
//! modeled); schemes in excluded categories lose all their observations,
//! not individual rows, so they never contribute partial windows.

use std::collections::BTreeMap;

use chrono::{Datelike, NaiveDate, Weekday};

use crate::domain::{Observation, SchemeCode, SchemeSeries};
use crate::vocab::NameVocabulary;

/// Returns true for Saturday and Sunday.
pub fn is_weekend(date: NaiveDate) -> bool {
    matches!(date.weekday(), Weekday::Sat | Weekday::Sun)
}

/// Group observations into per-scheme series, drop weekend rows, and remove
/// excluded categories entirely.
///
/// The returned map is ordered by scheme code, which keeps every downstream
/// traversal deterministic. An empty result for a scheme is valid — it
/// simply produces no snapshot.
pub fn scope_series(
    observations: Vec<Observation>,
    vocabulary: &NameVocabulary,
) -> BTreeMap<SchemeCode, SchemeSeries> {
    let mut grouped: BTreeMap<SchemeCode, Vec<Observation>> = BTreeMap::new();
    for obs in observations {
        if is_weekend(obs.date) {
            continue;
        }
        grouped.entry(obs.scheme_code).or_default().push(obs);
    }

    grouped
        .into_iter()
        .map(|(code, obs)| (code, SchemeSeries::from_observations(code, obs)))
        .filter(|(_, series)| {
            !series.is_empty()
                && !series
                    .observations()
                    .iter()
                    .any(|o| vocabulary.is_excluded(&o.scheme_name))
        })
        .collect()
}
