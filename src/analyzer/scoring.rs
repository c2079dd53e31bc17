//! Aggregate score calculation

use crate::{AnalysisReport, Distribution, Tier};

use super::narrative::{self, SummaryMetrics};

/// Average rating required for production readiness (80% of the 5-point scale)
pub const PASS_THRESHOLD: f64 = 4.0;

/// Computes an [`AnalysisReport`] from collected ratings.
///
/// Pure function of its inputs: no validation beyond the type system (a
/// [`Tier`] cannot hold an out-of-range value) and no side effects.
pub struct ScoreAnalyzer;

impl ScoreAnalyzer {
    /// Analyze an ordered sequence of ratings against a catalogue of
    /// `total_items` items. Returns `None` when no ratings have been
    /// collected; callers must not render a dashboard in that state.
    pub fn analyze(scores: &[Tier], total_items: usize) -> Option<AnalysisReport> {
        if scores.is_empty() {
            return None;
        }

        let sum: u32 = scores.iter().map(|s| s.value() as u32).sum();
        let average = sum as f64 / scores.len() as f64;
        let percentage = average / 5.0 * 100.0;
        let passes = average >= PASS_THRESHOLD;

        let distribution = Distribution::tally(scores);
        let summary = narrative::summarize(&SummaryMetrics {
            average,
            passes,
            high_quality: distribution.high_quality_share(),
            low_quality: distribution.low_quality_share(),
            moderate: distribution.percent(Tier::ModeratelyFunctional),
        });

        Some(AnalysisReport {
            scores: scores.to_vec(),
            average,
            percentage,
            passes,
            distribution,
            summary,
            total_items,
        })
    }
}
