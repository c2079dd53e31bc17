//! Analyzer module - aggregate scoring and summary generation

pub mod narrative;
pub mod scoring;

pub use scoring::ScoreAnalyzer;
