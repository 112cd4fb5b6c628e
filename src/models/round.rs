//! Round model.
//!
//! A round collects the matchups of one calling period. Rounds are kept
//! as positional placeholders within a schedule, so a round with zero
//! matchups is still a valid entry.

use serde::{Deserialize, Serialize};

use super::{Matchup, Participant};

/// The matchups of one calling period.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Round {
    /// Matchups taking place in this period.
    pub matchups: Vec<Matchup>,
}

impl Round {
    /// Creates an empty round.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a matchup.
    pub fn add_matchup(&mut self, matchup: Matchup) {
        self.matchups.push(matchup);
    }

    /// Number of matchups in this round.
    pub fn matchup_count(&self) -> usize {
        self.matchups.len()
    }

    /// Whether this round has no matchups.
    pub fn is_empty(&self) -> bool {
        self.matchups.is_empty()
    }

    /// Whether the given participant appears in any matchup this round.
    pub fn involves(&self, participant: &Participant) -> bool {
        self.matchups.iter().any(|m| m.involves(participant))
    }

    /// Roster members with no matchup this round (e.g. whoever drew the
    /// bye in an odd-sized rotation).
    pub fn sits_out<'a>(&self, roster: &'a [Participant]) -> Vec<&'a Participant> {
        roster.iter().filter(|p| !self.involves(p)).collect()
    }
}
