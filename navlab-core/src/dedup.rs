//! Plan-variant deduplication.
//!
//! The same underlying fund is routinely listed once per plan/payout
//! variant. Counting each listing as a separate trend signal would
//! double-count and bias the summary statistics, so snapshots sharing a
//! normalized identity collapse to a single representative.

use std::collections::BTreeMap;

use crate::domain::SchemeSnapshot;
use crate::vocab::NameVocabulary;

/// Additive selection priority derived from the original (un-normalized)
/// scheme name: direct plans outrank regular, growth outranks payout
/// variants. Range {0, 5, 10, 15}.
pub fn plan_priority(scheme_name: &str) -> u8 {
    let lower = scheme_name.to_lowercase();
    let mut priority = 0;
    if lower.contains("direct") {
        priority += 10;
    }
    if lower.contains("growth") {
        priority += 5;
    }
    priority
}

/// Collapse snapshots to one representative per normalized identity.
///
/// Within a group the representative is chosen by priority descending, then
/// NAV descending, then scheme code ascending. The final key never affects
/// a group the first two keys disambiguate; it exists so repeated runs are
/// byte-identical even for exact priority/NAV ties.
pub fn deduplicate(
    snapshots: Vec<SchemeSnapshot>,
    vocabulary: &NameVocabulary,
) -> Vec<SchemeSnapshot> {
    let mut groups: BTreeMap<String, Vec<SchemeSnapshot>> = BTreeMap::new();
    for snapshot in snapshots {
        groups
            .entry(vocabulary.normalize(&snapshot.scheme_name))
            .or_default()
            .push(snapshot);
    }

    groups
        .into_values()
        .map(|mut group| {
            group.sort_by(|a, b| {
                plan_priority(&b.scheme_name)
                    .cmp(&plan_priority(&a.scheme_name))
                    .then(
                        b.nav
                            .partial_cmp(&a.nav)
                            .unwrap_or(std::cmp::Ordering::Equal),
                    )
                    .then(a.scheme_code.cmp(&b.scheme_code))
            });
            group.swap_remove(0)
        })
        .collect()
}
