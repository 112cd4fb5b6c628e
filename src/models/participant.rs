//! Participant model.
//!
//! A participant is one member of the calling group: a display name and
//! a contact address (phone number). Identity is exact string equality
//! on both fields — no normalization of case, whitespace, or digits.

use serde::{Deserialize, Serialize};

/// A member of the calling group.
///
/// Two participants are the same entry iff name and contact address
/// match exactly as given. The contact address is opaque to the
/// scheduler; anything non-blank is accepted.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Participant {
    /// Display name.
    pub name: String,
    /// Contact address (phone number).
    pub contact: String,
}

impl Participant {
    /// Creates a new participant.
    pub fn new(name: impl Into<String>, contact: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            contact: contact.into(),
        }
    }

    /// Whether this participant can take part in a rotation: both name
    /// and contact address are non-empty after trimming whitespace.
    pub fn is_schedulable(&self) -> bool {
        !self.name.trim().is_empty() && !self.contact.trim().is_empty()
    }

    /// Display key used in reports: `name <contact>`.
    pub fn display_key(&self) -> String {
        format!("{} <{}>", self.name, self.contact)
    }
}
