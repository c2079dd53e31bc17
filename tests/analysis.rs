//! Integration tests: full analysis pipeline through the public API

use appraise::analyzer::ScoreAnalyzer;
use appraise::session::Session;
use appraise::{AnalysisReport, Tier};
use proptest::prelude::*;

fn tiers(values: &[u8]) -> Vec<Tier> {
    values
        .iter()
        .map(|&v| Tier::from_value(v).unwrap())
        .collect()
}

fn analyze(values: &[u8]) -> AnalysisReport {
    let scores = tiers(values);
    ScoreAnalyzer::analyze(&scores, scores.len())
        .unwrap_or_else(|| panic!("analyze({:?}) returned no report", values))
}

// --- Documented scenarios ---

#[test]
fn near_perfect_survey_is_enterprise_ready() {
    let r = analyze(&[5, 5, 5, 5, 4]);
    assert!((r.average - 4.8).abs() < 1e-9);
    assert!((r.percentage - 96.0).abs() < 1e-9);
    assert!(r.passes);
    assert_eq!(r.distribution.count(Tier::ProductionReady), 4);
    assert_eq!(r.distribution.count(Tier::NearProductionReady), 1);
    assert!((r.distribution.percent(Tier::ProductionReady) - 80.0).abs() < 1e-9);
    assert!((r.distribution.percent(Tier::NearProductionReady) - 20.0).abs() < 1e-9);
    assert!((r.distribution.high_quality_share() - 100.0).abs() < 1e-9);
    assert!(r.summary.contains("excellent performance"));
    assert!(r.summary.contains("ready for enterprise deployment"));
    assert!(r.summary.contains("meets the production readiness threshold"));
}

#[test]
fn poor_survey_reports_significant_limitations() {
    let r = analyze(&[1, 1, 2, 2, 3]);
    assert!((r.average - 1.8).abs() < 1e-9);
    assert!(!r.passes);
    assert!((r.distribution.low_quality_share() - 80.0).abs() < 1e-9);
    assert!(r.summary.contains("significant limitations"));
    assert!(r.summary.contains("falls below the production readiness threshold"));
}

#[test]
fn all_moderate_survey_gets_the_moderate_clause() {
    let r = analyze(&[3, 3, 3, 3, 3]);
    assert!((r.average - 3.0).abs() < 1e-9);
    assert_eq!(r.distribution.percent(Tier::ModeratelyFunctional), 100.0);
    assert_eq!(r.distribution.low_quality_share(), 0.0);
    assert!(r.summary.contains("moderately functional"));
    assert!(r.summary.contains("significant portion of results demonstrate moderate"));
}

#[test]
fn branch_order_resolves_at_the_80_percent_boundary() {
    // 4 of 5 high-quality: high = 80 exactly, average 4.4 -> excellent branch
    let at_boundary = analyze(&[5, 5, 5, 4, 3]);
    assert!(at_boundary.passes);
    assert!((at_boundary.distribution.high_quality_share() - 80.0).abs() < 1e-9);
    assert!(at_boundary.summary.contains("excellent performance"));

    // 3 of 5 high-quality: high = 60, average 4.2 -> strong branch
    let below = analyze(&[5, 5, 5, 3, 3]);
    assert!(below.passes);
    assert!((below.distribution.high_quality_share() - 60.0).abs() < 1e-9);
    assert!(below.summary.contains("strong performance"));
}

#[test]
fn exact_pass_threshold_counts_as_passing() {
    let r = analyze(&[4, 4, 4, 4, 4]);
    assert_eq!(r.average, 4.0);
    assert!(r.passes);
    assert!(r.summary.contains("meets the production readiness threshold"));
}

#[test]
fn empty_ratings_produce_no_report() {
    assert!(ScoreAnalyzer::analyze(&[], 5).is_none());
}

// --- Session to report, end to end ---

#[test]
fn full_session_flow_produces_the_expected_report() {
    let ratings = [5u8, 4, 5, 5, 5];
    let mut session = Session::new(ratings.len());
    for &value in &ratings {
        session.rate(Tier::from_value(value).unwrap()).unwrap();
        session.advance().unwrap();
    }
    session.view_analysis().unwrap();

    let report = session.report().unwrap();
    assert_eq!(report.scores, tiers(&ratings));
    assert!((report.average - 4.8).abs() < 1e-9);
    assert!(report.passes);
    assert_eq!(report.total_items, 5);
}

#[test]
fn revisiting_an_item_overwrites_its_rating_in_the_report() {
    let mut session = Session::new(2);
    session.rate(Tier::Unusable).unwrap();
    session.advance().unwrap();
    session.rate(Tier::Unusable).unwrap();
    session.previous().unwrap();
    session.rate(Tier::ProductionReady).unwrap();
    session.advance().unwrap();
    session.advance().unwrap();

    let report = session.report().unwrap();
    assert_eq!(report.scores, vec![Tier::ProductionReady, Tier::Unusable]);
    assert_eq!(report.average, 3.0);
}

// --- Numeric invariants over arbitrary inputs ---

proptest! {
    #[test]
    fn average_and_percentage_are_consistent(values in proptest::collection::vec(1u8..=5, 1..50)) {
        let r = analyze(&values);
        let expected = values.iter().map(|&v| v as f64).sum::<f64>() / values.len() as f64;
        prop_assert!((r.average - expected).abs() < 1e-9);
        prop_assert!((r.percentage - r.average / 5.0 * 100.0).abs() < 1e-9);
        prop_assert_eq!(r.passes, r.average >= 4.0);
    }

    #[test]
    fn distribution_totals_match_input(values in proptest::collection::vec(1u8..=5, 1..50)) {
        let r = analyze(&values);
        prop_assert_eq!(r.distribution.total() as usize, values.len());
        let percent_sum: f64 = Tier::ALL.iter().map(|&t| r.distribution.percent(t)).sum();
        prop_assert!((percent_sum - 100.0).abs() < 1e-9);
    }

    #[test]
    fn summary_always_carries_exactly_one_threshold_clause(values in proptest::collection::vec(1u8..=5, 1..50)) {
        let r = analyze(&values);
        let meets = r.summary.contains("meets the production readiness threshold");
        let falls = r.summary.contains("falls below the production readiness threshold");
        prop_assert!(meets != falls);
        prop_assert_eq!(meets, r.passes);
    }

    #[test]
    fn moderate_clause_tracks_tier_three_share(values in proptest::collection::vec(1u8..=5, 1..50)) {
        let r = analyze(&values);
        let has_clause = r.summary.contains("significant portion of results demonstrate moderate");
        prop_assert_eq!(has_clause, r.distribution.percent(Tier::ModeratelyFunctional) >= 50.0);
    }
}
