//! Last-computed plan persistence.
//!
//! The generator is pure and holds nothing between calls; the layer that
//! invokes it owns whatever plan state it wants to keep. This store
//! gives that layer a file-backed slot for the most recent plan. A
//! missing file reads as the empty schedule, and `clear` writes the
//! empty schedule back rather than deleting the file.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::models::Schedule;

/// Errors surfaced by the schedule store.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The store file could not be read or written.
    #[error("schedule store I/O failure: {0}")]
    Io(#[from] io::Error),
    /// The store file holds data that is not a schedule.
    #[error("schedule store contains invalid data: {0}")]
    Format(#[from] serde_json::Error),
}

/// File-backed storage for the most recent rotation plan.
#[derive(Debug, Clone)]
pub struct ScheduleStore {
    path: PathBuf,
}

impl ScheduleStore {
    /// Creates a store backed by the given file path.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The backing file path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Saves a plan as pretty-printed JSON, creating the parent
    /// directory on demand.
    pub fn save(&self, schedule: &Schedule) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        let json = serde_json::to_string_pretty(schedule)?;
        fs::write(&self.path, json)?;
        Ok(())
    }

    /// Loads the stored plan. A missing file is the empty schedule.
    pub fn load(&self) -> Result<Schedule, StoreError> {
        let data = match fs::read_to_string(&self.path) {
            Ok(data) => data,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Schedule::new()),
            Err(e) => return Err(e.into()),
        };
        Ok(serde_json::from_str(&data)?)
    }

    /// Resets the store to the empty schedule.
    pub fn clear(&self) -> Result<(), StoreError> {
        self.save(&Schedule::new())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Participant;
    use crate::scheduler::RoundRobinScheduler;

    fn sample_plan() -> Schedule {
        let roster = vec![
            Participant::new("Alice", "111"),
            Participant::new("Bob", "222"),
            Participant::new("Carol", "333"),
            Participant::new("Dave", "444"),
        ];
        RoundRobinScheduler::new().schedule(&roster, 3)
    }

    #[test]
    fn test_save_load_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let store = ScheduleStore::new(dir.path().join("schedule.json"));

        let plan = sample_plan();
        store.save(&plan).unwrap();
        assert_eq!(store.load().unwrap(), plan);
    }

    #[test]
    fn test_load_missing_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = ScheduleStore::new(dir.path().join("absent.json"));
        assert!(store.load().unwrap().is_empty());
    }

    #[test]
    fn test_clear_resets_to_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = ScheduleStore::new(dir.path().join("schedule.json"));

        store.save(&sample_plan()).unwrap();
        store.clear().unwrap();
        assert!(store.load().unwrap().is_empty());
        // File still exists, holding the empty schedule
        assert!(store.path().exists());
    }

    #[test]
    fn test_save_creates_parent_directory() {
        let dir = tempfile::tempdir().unwrap();
        let store = ScheduleStore::new(dir.path().join("data").join("schedule.json"));

        store.save(&sample_plan()).unwrap();
        assert_eq!(store.load().unwrap(), sample_plan());
    }

    #[test]
    fn test_load_rejects_garbage() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("schedule.json");
        fs::write(&path, "not json").unwrap();

        let err = ScheduleStore::new(&path).load().unwrap_err();
        assert!(matches!(err, StoreError::Format(_)));
    }
}
