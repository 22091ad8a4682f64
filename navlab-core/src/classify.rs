//! Classification and ranking against the moving average.

use std::cmp::Ordering;

use crate::domain::{Classification, ClassifiedFund, SchemeSnapshot};

/// Partition deduplicated snapshots into funds above and below their own
/// moving average and rank each partition by signed deviation.
///
/// Exact equality lands in neither partition but still counts toward
/// `total_considered`. Ties in deviation fall back to scheme code so the
/// ordering is total.
pub fn classify(snapshots: Vec<SchemeSnapshot>) -> Classification {
    let total_considered = snapshots.len();
    let mut above = Vec::new();
    let mut below = Vec::new();

    for snapshot in snapshots {
        match snapshot
            .nav
            .partial_cmp(&snapshot.moving_average)
            .unwrap_or(Ordering::Equal)
        {
            Ordering::Greater => above.push(ClassifiedFund::from_snapshot(snapshot)),
            Ordering::Less => below.push(ClassifiedFund::from_snapshot(snapshot)),
            Ordering::Equal => {}
        }
    }

    above.sort_by(|a, b| {
        b.deviation_pct
            .partial_cmp(&a.deviation_pct)
            .unwrap_or(Ordering::Equal)
            .then(a.scheme_code.cmp(&b.scheme_code))
    });
    below.sort_by(|a, b| {
        a.deviation_pct
            .partial_cmp(&b.deviation_pct)
            .unwrap_or(Ordering::Equal)
            .then(a.scheme_code.cmp(&b.scheme_code))
    });

    Classification {
        above,
        below,
        total_considered,
    }
}
