//! Matchup model.

use serde::{Deserialize, Serialize};

use super::Participant;

/// One caller/callee pairing within a round.
///
/// The caller/callee split comes from rotation position only; it has no
/// meaning beyond display. Treat a matchup as an unordered pair when
/// asking "have these two already spoken" — see [`Matchup::same_pair`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Matchup {
    /// The participant placing the call.
    pub caller: Participant,
    /// The participant receiving the call.
    pub callee: Participant,
}

impl Matchup {
    /// Creates a new matchup.
    pub fn new(caller: Participant, callee: Participant) -> Self {
        Self { caller, callee }
    }

    /// Whether the given participant is on either side of this matchup.
    pub fn involves(&self, participant: &Participant) -> bool {
        self.caller == *participant || self.callee == *participant
    }

    /// Both sides of the matchup, caller first.
    pub fn pair(&self) -> (&Participant, &Participant) {
        (&self.caller, &self.callee)
    }

    /// Whether this matchup joins the same two participants as `other`,
    /// ignoring who calls whom.
    pub fn same_pair(&self, other: &Matchup) -> bool {
        (self.caller == other.caller && self.callee == other.callee)
            || (self.caller == other.callee && self.callee == other.caller)
    }
}
