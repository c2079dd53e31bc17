//! Evaluation session state machine
//!
//! One reviewer, one pass over the item catalogue. The session starts at the
//! first item, collects one rating per item, and only reaches the analysis
//! phase once every item has been rated and the evaluation submitted. Going
//! back never discards ratings already stored.

use crate::analyzer::ScoreAnalyzer;
use crate::{AnalysisReport, Tier};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Phase of the evaluation flow
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Phase {
    /// Rating items one at a time
    Rating,
    /// All items rated and submitted
    Complete,
    /// Dashboard requested
    Analysis,
}

impl std::fmt::Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Phase::Rating => write!(f, "rating"),
            Phase::Complete => write!(f, "complete"),
            Phase::Analysis => write!(f, "analysis"),
        }
    }
}

/// Rejected session transitions
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum SessionError {
    #[error("rate the current item before advancing")]
    UnratedItem,
    #[error("'{action}' is not a valid action in the {phase} phase")]
    InvalidTransition {
        action: &'static str,
        phase: Phase,
    },
}

/// Mutable per-reviewer evaluation state
///
/// Serializable so a front-end can snapshot and restore it; nothing in this
/// crate writes it to disk.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    /// Number of items in the catalogue
    total: usize,
    /// Index of the item currently shown
    current: usize,
    /// Collected ratings, keyed by item index
    ratings: BTreeMap<usize, Tier>,
    phase: Phase,
}

impl Session {
    /// Start a fresh session over `total` items. A zero-item catalogue has
    /// nothing to rate and starts out complete.
    pub fn new(total: usize) -> Self {
        Self {
            total,
            current: 0,
            ratings: BTreeMap::new(),
            phase: if total == 0 {
                Phase::Complete
            } else {
                Phase::Rating
            },
        }
    }

    pub fn total(&self) -> usize {
        self.total
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Index of the item currently shown
    pub fn current_index(&self) -> usize {
        self.current
    }

    /// Rating stored for the current item, if any
    pub fn current_rating(&self) -> Option<Tier> {
        self.ratings.get(&self.current).copied()
    }

    /// Rating stored for an arbitrary item
    pub fn rating(&self, index: usize) -> Option<Tier> {
        self.ratings.get(&index).copied()
    }

    pub fn rated_count(&self) -> usize {
        self.ratings.len()
    }

    /// Whether the current item is the last in the catalogue
    pub fn on_last_item(&self) -> bool {
        self.total > 0 && self.current == self.total - 1
    }

    /// Ratings in item order. Skips unrated items, so during the rating phase
    /// this may be shorter than the catalogue.
    pub fn scores(&self) -> Vec<Tier> {
        self.ratings.values().copied().collect()
    }

    /// Store or replace the rating for the current item
    pub fn rate(&mut self, tier: Tier) -> Result<(), SessionError> {
        if self.phase != Phase::Rating {
            return Err(SessionError::InvalidTransition {
                action: "rate",
                phase: self.phase,
            });
        }
        self.ratings.insert(self.current, tier);
        Ok(())
    }

    /// Move to the next item, or to `Complete` from the last item. Requires
    /// the current item to be rated.
    pub fn advance(&mut self) -> Result<(), SessionError> {
        if self.phase != Phase::Rating {
            return Err(SessionError::InvalidTransition {
                action: "next",
                phase: self.phase,
            });
        }
        if self.current_rating().is_none() {
            return Err(SessionError::UnratedItem);
        }
        if self.current + 1 < self.total {
            self.current += 1;
        } else {
            self.phase = Phase::Complete;
        }
        Ok(())
    }

    /// Step back one item. A no-op on the first item; stored ratings are
    /// never invalidated by navigation.
    pub fn previous(&mut self) -> Result<(), SessionError> {
        if self.phase != Phase::Rating {
            return Err(SessionError::InvalidTransition {
                action: "previous",
                phase: self.phase,
            });
        }
        self.current = self.current.saturating_sub(1);
        Ok(())
    }

    /// Move from `Complete` to `Analysis`
    pub fn view_analysis(&mut self) -> Result<(), SessionError> {
        if self.phase != Phase::Complete {
            return Err(SessionError::InvalidTransition {
                action: "analysis",
                phase: self.phase,
            });
        }
        self.phase = Phase::Analysis;
        Ok(())
    }

    /// Discard all ratings and restart from the first item. Only available
    /// once the evaluation has been submitted.
    pub fn reset(&mut self) -> Result<(), SessionError> {
        match self.phase {
            Phase::Complete | Phase::Analysis => {
                self.ratings.clear();
                self.current = 0;
                self.phase = if self.total == 0 {
                    Phase::Complete
                } else {
                    Phase::Rating
                };
                Ok(())
            }
            Phase::Rating => Err(SessionError::InvalidTransition {
                action: "reset",
                phase: self.phase,
            }),
        }
    }

    /// Run the analyzer over the collected ratings. `None` until at least one
    /// rating exists; canonically called from `Complete` or `Analysis`.
    pub fn report(&self) -> Option<AnalysisReport> {
        ScoreAnalyzer::analyze(&self.scores(), self.total)
    }
}

/// Reviewer input during the interactive flow
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Rate(Tier),
    Next,
    Previous,
    ViewAnalysis,
    Reset,
    Quit,
    Help,
}

impl Command {
    /// Parse one line of reviewer input. `None` for anything unrecognized.
    pub fn parse(input: &str) -> Option<Command> {
        let input = input.trim().to_ascii_lowercase();
        match input.as_str() {
            "1" | "2" | "3" | "4" | "5" => {
                let value: u8 = input.parse().ok()?;
                Tier::from_value(value).ok().map(Command::Rate)
            }
            "n" | "next" | "submit" => Some(Command::Next),
            "p" | "prev" | "previous" | "back" => Some(Command::Previous),
            "a" | "analysis" => Some(Command::ViewAnalysis),
            "r" | "reset" => Some(Command::Reset),
            "q" | "quit" | "exit" => Some(Command::Quit),
            "h" | "help" | "?" => Some(Command::Help),
            _ => None,
        }
    }
}
