//! Roster screening.
//!
//! Checks a roster for entries that cannot be scheduled: blank names or
//! blank contact addresses. The scheduler itself silently drops such
//! entries; this module exists so the layer that accepted the roster
//! (form handler, file import) can report *why* entries were dropped,
//! keeping "empty plan because the roster was thin" distinguishable
//! from "the roster rows were bad".

use crate::models::Participant;

/// Screening result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A roster screening error.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of roster screening errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// An entry's name is empty after trimming.
    BlankName,
    /// An entry's contact address is empty after trimming.
    BlankContact,
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Screens a roster for unschedulable entries.
///
/// Reports one error per blank field, so an entry with both fields
/// blank yields two errors. Positions are 1-based in messages.
///
/// # Returns
/// `Ok(())` if every entry is schedulable, `Err(errors)` otherwise.
pub fn validate_roster(roster: &[Participant]) -> ValidationResult {
    let mut errors = Vec::new();

    for (pos, entry) in roster.iter().enumerate() {
        if entry.name.trim().is_empty() {
            errors.push(ValidationError::new(
                ValidationErrorKind::BlankName,
                format!("Roster entry {} has a blank name", pos + 1),
            ));
        }
        if entry.contact.trim().is_empty() {
            errors.push(ValidationError::new(
                ValidationErrorKind::BlankContact,
                format!("Roster entry {} has a blank contact address", pos + 1),
            ));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Returns the schedulable entries of a roster, in input order.
///
/// This is the filter the scheduler applies before pairing; input order
/// is preserved because it determines the pairing sequence.
pub fn schedulable(roster: &[Participant]) -> Vec<Participant> {
    roster
        .iter()
        .filter(|p| p.is_schedulable())
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_roster() {
        let roster = vec![
            Participant::new("Alice", "111"),
            Participant::new("Bob", "222"),
        ];
        assert!(validate_roster(&roster).is_ok());
    }

    #[test]
    fn test_blank_name() {
        let roster = vec![Participant::new("", "555")];
        let errors = validate_roster(&roster).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].kind, ValidationErrorKind::BlankName);
        assert!(errors[0].message.contains("entry 1"));
    }

    #[test]
    fn test_blank_contact() {
        let roster = vec![
            Participant::new("Alice", "111"),
            Participant::new("Bob", "   "),
        ];
        let errors = validate_roster(&roster).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].kind, ValidationErrorKind::BlankContact);
        assert!(errors[0].message.contains("entry 2"));
    }

    #[test]
    fn test_both_fields_blank() {
        let roster = vec![Participant::new(" ", "")];
        let errors = validate_roster(&roster).unwrap_err();
        assert_eq!(errors.len(), 2);
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::BlankName));
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::BlankContact));
    }

    #[test]
    fn test_schedulable_preserves_order() {
        let roster = vec![
            Participant::new("Alice", "111"),
            Participant::new("", "555"),
            Participant::new("Bob", "222"),
        ];
        let kept = schedulable(&roster);
        assert_eq!(
            kept,
            vec![
                Participant::new("Alice", "111"),
                Participant::new("Bob", "222"),
            ]
        );
    }

    #[test]
    fn test_schedulable_empty_roster() {
        assert!(schedulable(&[]).is_empty());
    }
}
