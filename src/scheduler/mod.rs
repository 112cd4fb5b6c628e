//! Rotation generation and plan metrics.
//!
//! Provides the circle-method round-robin generator and summary metrics
//! for finished plans.
//!
//! # Algorithm
//!
//! `RoundRobinScheduler` holds one roster position fixed and cycles the
//! rest each round, the classic circle construction: for an even working
//! size `n`, every pair meets exactly once across `n - 1` rounds. Odd
//! rosters get a bye slot, and whoever draws it sits the round out.
//!
//! # Reference
//! de Werra (1981), "Scheduling in Sports"

mod round_robin;
mod stats;

pub use round_robin::{RoundRobinScheduler, ScheduleRequest};
pub use stats::ScheduleStats;
