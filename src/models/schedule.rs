//! Schedule (rotation plan) model.
//!
//! A schedule is an ordered sequence of rounds, one per calling period.
//! Order is chronological: `rounds[0]` is the first period. The empty
//! schedule is the degenerate result for thin rosters or non-positive
//! period requests, not an error.

use serde::{Deserialize, Serialize};

use super::{Matchup, Participant, Round};

/// A complete rotation plan.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Schedule {
    /// Rounds in chronological order.
    pub rounds: Vec<Round>,
}

impl Schedule {
    /// Creates an empty schedule.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a round.
    pub fn add_round(&mut self, round: Round) {
        self.rounds.push(round);
    }

    /// Number of rounds.
    pub fn round_count(&self) -> usize {
        self.rounds.len()
    }

    /// Whether the schedule has no rounds.
    pub fn is_empty(&self) -> bool {
        self.rounds.is_empty()
    }

    /// Total matchups across all rounds.
    pub fn total_matchups(&self) -> usize {
        self.rounds.iter().map(Round::matchup_count).sum()
    }

    /// All matchups involving the given participant, in round order.
    pub fn matchups_for(&self, participant: &Participant) -> Vec<&Matchup> {
        self.rounds
            .iter()
            .flat_map(|r| r.matchups.iter())
            .filter(|m| m.involves(participant))
            .collect()
    }

    /// Number of rounds in which `a` and `b` are matched, in either
    /// calling direction.
    pub fn pair_count(&self, a: &Participant, b: &Participant) -> usize {
        let probe = Matchup::new(a.clone(), b.clone());
        self.rounds
            .iter()
            .flat_map(|r| r.matchups.iter())
            .filter(|m| m.same_pair(&probe))
            .count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn p(name: &str, contact: &str) -> Participant {
        Participant::new(name, contact)
    }

    fn sample_schedule() -> Schedule {
        let mut schedule = Schedule::new();

        let mut r1 = Round::new();
        r1.add_matchup(Matchup::new(p("Alice", "111"), p("Dave", "444")));
        r1.add_matchup(Matchup::new(p("Bob", "222"), p("Carol", "333")));
        schedule.add_round(r1);

        let mut r2 = Round::new();
        r2.add_matchup(Matchup::new(p("Alice", "111"), p("Carol", "333")));
        r2.add_matchup(Matchup::new(p("Dave", "444"), p("Bob", "222")));
        schedule.add_round(r2);

        schedule
    }

    #[test]
    fn test_counts() {
        let s = sample_schedule();
        assert_eq!(s.round_count(), 2);
        assert_eq!(s.total_matchups(), 4);
        assert!(!s.is_empty());
        assert!(Schedule::new().is_empty());
    }

    #[test]
    fn test_matchups_for() {
        let s = sample_schedule();
        let alice = s.matchups_for(&p("Alice", "111"));
        assert_eq!(alice.len(), 2);
        assert!(s.matchups_for(&p("Erin", "555")).is_empty());
    }

    #[test]
    fn test_pair_count_ignores_direction() {
        let s = sample_schedule();
        assert_eq!(s.pair_count(&p("Alice", "111"), &p("Dave", "444")), 1);
        // r2 has Dave calling Bob; probe in the opposite direction
        assert_eq!(s.pair_count(&p("Bob", "222"), &p("Dave", "444")), 1);
        assert_eq!(s.pair_count(&p("Alice", "111"), &p("Bob", "222")), 0);
    }

    #[test]
    fn test_serde_round_trip() {
        let s = sample_schedule();
        let json = serde_json::to_string(&s).unwrap();
        let back: Schedule = serde_json::from_str(&json).unwrap();
        assert_eq!(back, s);
    }
}
