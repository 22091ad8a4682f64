//! End-to-end pipeline scenarios on synthetic NAV histories.
//!
//! Each scenario builds raw observations (weekday-only, so the trading-day
//! filter passes them through) and asserts on the final classification.

use chrono::{Datelike, NaiveDate, Weekday};
use navlab_core::{run_pipeline, AnalysisConfig, Observation, SchemeCode};

/// First `n` weekdays starting at `start`.
fn weekday_dates(start: NaiveDate, n: usize) -> Vec<NaiveDate> {
    let mut dates = Vec::with_capacity(n);
    let mut current = start;
    while dates.len() < n {
        if !matches!(current.weekday(), Weekday::Sat | Weekday::Sun) {
            dates.push(current);
        }
        current += chrono::Duration::days(1);
    }
    dates
}

/// A scheme drifting `daily_ratio` per trading day from `start_nav`.
fn drifting_scheme(
    code: u32,
    name: &str,
    start_nav: f64,
    daily_ratio: f64,
    dates: &[NaiveDate],
) -> Vec<Observation> {
    let mut nav = start_nav;
    dates
        .iter()
        .map(|&date| {
            let obs = Observation {
                scheme_code: SchemeCode(code),
                date,
                nav,
                scheme_name: name.into(),
            };
            nav *= 1.0 + daily_ratio;
            obs
        })
        .collect()
}

fn start_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2023, 1, 2).unwrap()
}

#[test]
fn drift_scenario_classifies_three_schemes() {
    let dates = weekday_dates(start_date(), 300);
    let mut observations = Vec::new();
    observations.extend(drifting_scheme(1, "Upward Fund", 100.0, 0.001, &dates));
    observations.extend(drifting_scheme(2, "Downward Fund", 100.0, -0.001, &dates));
    observations.extend(drifting_scheme(3, "Flat Fund", 100.0, 0.0, &dates));

    let outcome = run_pipeline(observations, &AnalysisConfig::default()).unwrap();
    let classification = outcome.classification;

    assert_eq!(classification.total_considered, 3);

    let above: Vec<u32> = classification.above.iter().map(|f| f.scheme_code.0).collect();
    let below: Vec<u32> = classification.below.iter().map(|f| f.scheme_code.0).collect();

    assert_eq!(above, vec![1], "upward drift must trade above its average");
    assert_eq!(below, vec![2], "downward drift must trade below its average");
    // A flat series sits exactly at its average and lands in neither side.
    assert!(!above.contains(&3) && !below.contains(&3));

    // An upward drifter's latest NAV leads its trailing mean.
    assert!(classification.above[0].deviation_pct > 5.0);
    assert!(classification.below[0].deviation_pct < -5.0);
}

#[test]
fn scheme_without_full_window_never_surfaces() {
    let dates = weekday_dates(start_date(), 300);
    let short_dates = &dates[dates.len() - 150..];

    let mut observations = drifting_scheme(1, "Long Fund", 100.0, 0.001, &dates);
    observations.extend(drifting_scheme(2, "Young Fund", 50.0, 0.002, short_dates));

    let outcome = run_pipeline(observations, &AnalysisConfig::default()).unwrap();
    let classification = outcome.classification;

    assert_eq!(classification.total_considered, 1);
    assert!(classification
        .above
        .iter()
        .chain(classification.below.iter())
        .all(|f| f.scheme_code == SchemeCode(1)));
}

#[test]
fn jump_inside_final_window_excludes_scheme() {
    let dates = weekday_dates(start_date(), 300);
    let mut observations = drifting_scheme(1, "Spiky Fund", 100.0, 0.001, &dates);
    // +50% single-day print 20 trading days before the end: inside the
    // final 200-observation window.
    let spike_at = observations.len() - 20;
    for obs in &mut observations[spike_at..] {
        obs.nav *= 1.5;
    }

    let outcome = run_pipeline(observations, &AnalysisConfig::default()).unwrap();
    assert_eq!(outcome.classification.total_considered, 0);
    assert_eq!(outcome.stats.jump_flagged, 1);
}

#[test]
fn jump_outside_final_window_is_forgiven() {
    let dates = weekday_dates(start_date(), 300);
    let mut observations = drifting_scheme(1, "Restated Fund", 100.0, 0.001, &dates);
    // Same +50% print, but 250 observations back: it has rolled out of the
    // window ending at the latest observation.
    let spike_at = observations.len() - 250;
    for obs in &mut observations[spike_at..] {
        obs.nav *= 1.5;
    }

    let outcome = run_pipeline(observations, &AnalysisConfig::default()).unwrap();
    assert_eq!(outcome.classification.total_considered, 1);
    assert_eq!(outcome.stats.jump_flagged, 0);
}

#[test]
fn stale_scheme_is_excluded_by_recency() {
    let dates = weekday_dates(start_date(), 600);
    let active_dates = &dates;
    // The stale scheme has a full, clean history but stopped reporting
    // ~380 calendar days before the active scheme's latest date.
    let stale_dates = &dates[..330];

    let mut observations = drifting_scheme(1, "Active Fund", 100.0, 0.001, active_dates);
    observations.extend(drifting_scheme(2, "Dormant Fund", 100.0, 0.001, stale_dates));

    let outcome = run_pipeline(observations, &AnalysisConfig::default()).unwrap();
    let classification = outcome.classification;

    assert_eq!(classification.total_considered, 1);
    assert_eq!(outcome.stats.stale_excluded, 1);
    assert!(classification
        .above
        .iter()
        .all(|f| f.scheme_code == SchemeCode(1)));
}

#[test]
fn plan_variants_collapse_to_direct() {
    let dates = weekday_dates(start_date(), 300);
    let mut observations = drifting_scheme(
        1,
        "ABC Flexi Cap Fund - Regular Plan - Growth",
        102.0, // constant 2% premium over the direct plan
        0.001,
        &dates,
    );
    observations.extend(drifting_scheme(
        2,
        "ABC Flexi Cap Fund - Direct Plan - Growth",
        100.0,
        0.001,
        &dates,
    ));

    let outcome = run_pipeline(observations, &AnalysisConfig::default()).unwrap();
    let classification = outcome.classification;

    // Direct wins by priority (15 vs 5) regardless of its lower NAV.
    assert_eq!(classification.total_considered, 1);
    assert_eq!(outcome.stats.duplicates_collapsed, 1);
    assert_eq!(classification.above.len(), 1);
    assert_eq!(classification.above[0].scheme_code, SchemeCode(2));
}

#[test]
fn excluded_category_never_contributes() {
    let dates = weekday_dates(start_date(), 300);
    let mut observations = drifting_scheme(1, "Equity Fund", 100.0, 0.001, &dates);
    observations.extend(drifting_scheme(
        2,
        "Cash Parking Liquid Fund - Growth",
        1000.0,
        0.0001,
        &dates,
    ));

    let outcome = run_pipeline(observations, &AnalysisConfig::default()).unwrap();
    assert_eq!(outcome.stats.schemes_scoped, 1);
    assert_eq!(outcome.classification.total_considered, 1);
}

#[test]
fn no_scheme_appears_twice_in_the_output_union() {
    let dates = weekday_dates(start_date(), 300);
    let mut observations = Vec::new();
    for (code, name, drift) in [
        (1, "ABC Fund - Direct Plan - Growth", 0.001),
        (2, "ABC Fund - Regular Plan - Growth", 0.001),
        (3, "ABC Fund - Direct Plan - IDCW", 0.001),
        (4, "XYZ Fund - Direct Plan - Growth", -0.001),
        (5, "XYZ Fund - Regular Plan - IDCW", -0.001),
    ] {
        observations.extend(drifting_scheme(code, name, 100.0, drift, &dates));
    }

    let outcome = run_pipeline(observations, &AnalysisConfig::default()).unwrap();
    let classification = outcome.classification;

    let mut codes: Vec<SchemeCode> = classification
        .above
        .iter()
        .chain(classification.below.iter())
        .map(|f| f.scheme_code)
        .collect();
    let total = codes.len();
    codes.sort();
    codes.dedup();
    assert_eq!(codes.len(), total, "a scheme surfaced in both partitions");

    let mut identities: Vec<String> = classification
        .above
        .iter()
        .chain(classification.below.iter())
        .map(|f| AnalysisConfig::default().vocabulary.normalize(&f.scheme_name))
        .collect();
    let groups = identities.len();
    identities.sort();
    identities.dedup();
    assert_eq!(identities.len(), groups, "an identity survived twice");
}

#[test]
fn pipeline_is_deterministic_across_runs() {
    let dates = weekday_dates(start_date(), 320);
    let mut observations = Vec::new();
    for code in 0..40u32 {
        let drift = (code as f64 - 20.0) / 10_000.0;
        observations.extend(drifting_scheme(
            code,
            &format!("Scheme {code} - Direct Plan - Growth"),
            50.0 + code as f64,
            drift,
            &dates,
        ));
    }

    let config = AnalysisConfig::default();
    let first = run_pipeline(observations.clone(), &config).unwrap();
    let second = run_pipeline(observations, &config).unwrap();

    // Byte-identical output, including ordering through the rayon fan-out.
    let a = serde_json::to_string(&first).unwrap();
    let b = serde_json::to_string(&second).unwrap();
    assert_eq!(a, b);
}

#[test]
fn window_completeness_holds_for_every_surfaced_fund() {
    let dates = weekday_dates(start_date(), 300);
    let mut observations = Vec::new();
    for code in 1..=5u32 {
        let len = 100 + code as usize * 50; // 150..=350 capped by dates
        let slice = &dates[..len.min(dates.len())];
        observations.extend(drifting_scheme(
            code,
            &format!("Fund {code}"),
            100.0,
            0.001,
            slice,
        ));
    }

    let config = AnalysisConfig::default();
    let outcome = run_pipeline(observations.clone(), &config).unwrap();

    let mut per_scheme_counts = std::collections::HashMap::new();
    for obs in &observations {
        *per_scheme_counts.entry(obs.scheme_code).or_insert(0usize) += 1;
    }

    for fund in outcome
        .classification
        .above
        .iter()
        .chain(outcome.classification.below.iter())
    {
        assert!(
            per_scheme_counts[&fund.scheme_code] >= config.window,
            "scheme {} surfaced with fewer than {} observations",
            fund.scheme_code,
            config.window
        );
    }
}
