//! Rotation plan metrics.
//!
//! Computes summary figures from a finished plan and the roster it was
//! generated from.
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Round Count | Number of calling periods |
//! | Total Matchups | Calls across all rounds |
//! | Calls per Participant | Appearances as caller or callee |
//! | Distinct Pairs | Unordered pairs that met at least once |
//! | Repeat Pairs | Unordered pairs that met more than once |
//! | Idle per Round | Roster members sitting out each round |

use std::collections::HashMap;

use crate::models::{Participant, Schedule};
use crate::validation::schedulable;

/// Summary figures for a rotation plan.
#[derive(Debug, Clone)]
pub struct ScheduleStats {
    /// Number of calling periods.
    pub round_count: usize,
    /// Calls across all rounds.
    pub total_matchups: usize,
    /// Appearances per participant (caller or callee), keyed by
    /// [`Participant::display_key`].
    pub calls_per_participant: HashMap<String, usize>,
    /// Unordered pairs that met at least once.
    pub distinct_pairs: usize,
    /// Unordered pairs that met more than once. Always zero within a
    /// single full rotation cycle.
    pub repeat_pairs: usize,
    /// Whether every pair of schedulable roster members met at least once.
    pub covers_all_pairs: bool,
    /// Sit-out count per round, in round order. Non-zero entries occur
    /// on odd rosters, where one member draws the bye each round.
    pub idle_per_round: Vec<usize>,
}

impl ScheduleStats {
    /// Computes metrics from a plan and its source roster.
    ///
    /// # Arguments
    /// * `schedule` - The finished plan.
    /// * `roster` - The roster the plan was generated from (screened the
    ///   same way the scheduler screens it).
    pub fn calculate(schedule: &Schedule, roster: &[Participant]) -> Self {
        let entrants = schedulable(roster);

        let mut calls_per_participant: HashMap<String, usize> = HashMap::new();
        let mut meetings: HashMap<(String, String), usize> = HashMap::new();
        let mut idle_per_round = Vec::with_capacity(schedule.round_count());

        for round in &schedule.rounds {
            for m in &round.matchups {
                *calls_per_participant
                    .entry(m.caller.display_key())
                    .or_insert(0) += 1;
                *calls_per_participant
                    .entry(m.callee.display_key())
                    .or_insert(0) += 1;

                let mut key = (m.caller.display_key(), m.callee.display_key());
                if key.0 > key.1 {
                    key = (key.1, key.0);
                }
                *meetings.entry(key).or_insert(0) += 1;
            }
            idle_per_round.push(round.sits_out(&entrants).len());
        }

        let distinct_pairs = meetings.len();
        let repeat_pairs = meetings.values().filter(|&&count| count > 1).count();

        let possible_pairs = entrants.len() * entrants.len().saturating_sub(1) / 2;
        let covers_all_pairs = distinct_pairs == possible_pairs;

        Self {
            round_count: schedule.round_count(),
            total_matchups: schedule.total_matchups(),
            calls_per_participant,
            distinct_pairs,
            repeat_pairs,
            covers_all_pairs,
            idle_per_round,
        }
    }
}
