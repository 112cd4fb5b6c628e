//! Call-rotation domain models.
//!
//! Core data types for representing a calling group and its rotation
//! plan: who is in the group, who calls whom in a given period, and the
//! full plan across periods.
//!
//! All types serialize with `serde`, so a finished plan can be handed to
//! any transport or storage layer as-is.

mod matchup;
mod participant;
mod round;
mod schedule;

pub use matchup::Matchup;
pub use participant::Participant;
pub use round::Round;
pub use schedule::Schedule;
