//! Roster import from delimited text.
//!
//! Reads headerless rows where the first column is the name and the
//! second the contact address. Rows with fewer than two columns are
//! skipped; surplus columns are ignored. Fields are kept exactly as
//! read — screening blank entries is [`crate::validation`]'s job, so a
//! caller can tell the user *which* rows were unusable instead of
//! silently losing them here.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use thiserror::Error;

use crate::models::Participant;

/// Errors surfaced by roster import.
#[derive(Debug, Error)]
pub enum ImportError {
    /// The roster file could not be read.
    #[error("failed to read roster: {0}")]
    Io(#[from] std::io::Error),
    /// The delimited input could not be parsed.
    #[error("malformed roster data: {0}")]
    Malformed(#[from] csv::Error),
}

/// Reads a roster from headerless delimited input.
///
/// # Example
///
/// ```
/// use call_rotation::import::read_roster;
///
/// let roster = read_roster("Alice,111\nBob,222\n".as_bytes()).unwrap();
/// assert_eq!(roster.len(), 2);
/// assert_eq!(roster[0].name, "Alice");
/// assert_eq!(roster[1].contact, "222");
/// ```
pub fn read_roster<R: Read>(reader: R) -> Result<Vec<Participant>, ImportError> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(reader);

    let mut roster = Vec::new();
    for record in rdr.records() {
        let record = record?;
        if record.len() < 2 {
            continue;
        }
        roster.push(Participant::new(&record[0], &record[1]));
    }
    Ok(roster)
}

/// Reads a roster from a file on disk.
pub fn roster_from_path(path: impl AsRef<Path>) -> Result<Vec<Participant>, ImportError> {
    read_roster(File::open(path)?)
}
