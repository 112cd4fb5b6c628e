//! Circle-method round-robin pairing.
//!
//! # Algorithm
//!
//! 1. Screen the roster down to schedulable entries (blank name or
//!    contact → dropped).
//! 2. If the count is odd, add a bye slot so the working array has even
//!    length `n`.
//! 3. Per round, pair slot `i` with slot `n-1-i`; pairs touching the bye
//!    slot emit nothing, and the round is kept even when no pairing
//!    survives.
//! 4. Rotate for the next round: slot 0 stays fixed, the remaining
//!    slots shift down by one with the last wrapping to the front.
//!
//! With `n` (even) slots this produces up to `n-1` rounds in which every
//! pair of entrants meets exactly once.
//!
//! # Complexity
//! O(weeks × n). One working array, reused across rounds.
//!
//! # Reference
//! Lucas (1883), "Récréations Mathématiques", Vol. 2 (les rondes);
//! de Werra (1981), "Scheduling in Sports"

use crate::models::{Matchup, Participant, Round, Schedule};
use crate::validation::schedulable;

/// Input container for a rotation request.
#[derive(Debug, Clone)]
pub struct ScheduleRequest {
    /// Roster, in the order that drives the pairing sequence.
    pub participants: Vec<Participant>,
    /// Requested number of calling periods. Non-positive values produce
    /// an empty plan.
    pub weeks: i32,
}

impl ScheduleRequest {
    /// Creates a new rotation request.
    pub fn new(participants: Vec<Participant>, weeks: i32) -> Self {
        Self {
            participants,
            weeks,
        }
    }
}

/// Circle-method round-robin scheduler.
///
/// Pure and stateless: the output depends only on roster order and the
/// requested week count, so identical calls produce identical plans.
/// Degenerate inputs (fewer than two schedulable entries, non-positive
/// weeks) return the empty schedule rather than an error.
///
/// # Example
///
/// ```
/// use call_rotation::models::Participant;
/// use call_rotation::scheduler::RoundRobinScheduler;
///
/// let roster = vec![
///     Participant::new("Alice", "111"),
///     Participant::new("Bob", "222"),
///     Participant::new("Carol", "333"),
///     Participant::new("Dave", "444"),
/// ];
///
/// let schedule = RoundRobinScheduler::new().schedule(&roster, 3);
/// assert_eq!(schedule.round_count(), 3);
/// // 4 people → 2 calls per round, every pair met once over 3 rounds
/// assert_eq!(schedule.total_matchups(), 6);
/// ```
#[derive(Debug, Clone, Default)]
pub struct RoundRobinScheduler;

impl RoundRobinScheduler {
    /// Creates a new scheduler.
    pub fn new() -> Self {
        Self
    }

    /// Generates a rotation plan for the roster.
    ///
    /// The week count is capped at `n - 1` for `n` working slots (roster
    /// rounded up to even), the most distinct rounds possible without a
    /// pair meeting twice. Caller/callee comes from slot position: the
    /// lower slot calls the higher.
    pub fn schedule(&self, roster: &[Participant], weeks: i32) -> Schedule {
        let entrants = schedulable(roster);
        let mut schedule = Schedule::new();

        if entrants.len() < 2 || weeks <= 0 {
            return schedule;
        }

        // Working arrangement: indices into `entrants`, with `None` as
        // the bye slot for odd rosters. The bye is a slot state, not a
        // participant, so it can never leak into a matchup.
        let mut slots: Vec<Option<usize>> = (0..entrants.len()).map(Some).collect();
        if slots.len() % 2 != 0 {
            slots.push(None);
        }
        let n = slots.len();

        let rounds = (n - 1).min(weeks as usize);
        for _ in 0..rounds {
            let mut round = Round::new();
            for i in 0..n / 2 {
                if let (Some(caller), Some(callee)) = (slots[i], slots[n - 1 - i]) {
                    round.add_matchup(Matchup::new(
                        entrants[caller].clone(),
                        entrants[callee].clone(),
                    ));
                }
            }
            // Rounds are positional placeholders; push even when the
            // only pairing was against the bye.
            schedule.add_round(round);

            // Slot 0 stays fixed, the rest cycle by one.
            slots[1..].rotate_right(1);
        }

        schedule
    }

    /// Generates a rotation plan from a request.
    pub fn schedule_request(&self, request: &ScheduleRequest) -> Schedule {
        self.schedule(&request.participants, request.weeks)
    }
}
