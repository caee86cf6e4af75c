//! JSON file event store.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{EventStore, write_atomic};
use crate::error::{DaybookError, DaybookResult};
use crate::event::{Event, EventForm};

/// On-disk layout, the same envelope the events API returns.
#[derive(Debug, Default, Serialize, Deserialize)]
struct EventsFile {
    #[serde(default)]
    events: Vec<Event>,
}

/// Stores all events in a single JSON file that is rewritten on every
/// change. A missing file reads as an empty calendar.
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        FileStore { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn load(&self) -> DaybookResult<Vec<Event>> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }

        let content = std::fs::read_to_string(&self.path)?;
        if content.trim().is_empty() {
            return Ok(Vec::new());
        }

        let file: EventsFile = serde_json::from_str(&content).map_err(|e| {
            DaybookError::Serialization(format!("{}: {}", self.path.display(), e))
        })?;
        Ok(file.events)
    }

    fn save(&self, events: Vec<Event>) -> DaybookResult<()> {
        let content = serde_json::to_string_pretty(&EventsFile { events })?;
        write_atomic(&self.path, &content)
    }
}

impl EventStore for FileStore {
    fn list(&self) -> DaybookResult<Vec<Event>> {
        self.load()
    }

    fn create(&mut self, form: EventForm) -> DaybookResult<Event> {
        let mut events = self.load()?;
        let event = form.into_event(Uuid::new_v4().to_string());
        events.push(event.clone());
        self.save(events)?;

        tracing::debug!(id = %event.id, path = %self.path.display(), "event created");
        Ok(event)
    }

    fn update(&mut self, id: &str, form: EventForm) -> DaybookResult<Event> {
        let mut events = self.load()?;
        let slot = events
            .iter_mut()
            .find(|e| e.id == id)
            .ok_or_else(|| DaybookError::EventNotFound(id.to_string()))?;

        let event = form.into_event(id);
        *slot = event.clone();
        self.save(events)?;

        tracing::debug!(id, "event updated");
        Ok(event)
    }

    fn delete(&mut self, id: &str) -> DaybookResult<()> {
        let mut events = self.load()?;
        let before = events.len();
        events.retain(|e| e.id != id);
        if events.len() == before {
            return Err(DaybookError::EventNotFound(id.to_string()));
        }
        self.save(events)?;

        tracing::debug!(id, "event deleted");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, NaiveTime};

    fn form(title: &str) -> EventForm {
        EventForm::new(
            title,
            NaiveDate::from_ymd_opt(2024, 10, 16).unwrap(),
            NaiveTime::from_hms_opt(14, 0, 0).unwrap(),
            NaiveTime::from_hms_opt(15, 0, 0).unwrap(),
        )
    }

    #[test]
    fn missing_file_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::new(dir.path().join("events.json"));
        assert!(store.list().unwrap().is_empty());
    }

    #[test]
    fn create_persists_and_creates_parent_dirs() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested/dir/events.json");
        let mut store = FileStore::new(&path);

        let created = store.create(form("새 회의")).unwrap();
        assert!(!created.id.is_empty());
        assert!(path.exists());

        let reopened = FileStore::new(&path);
        assert_eq!(reopened.list().unwrap(), vec![created]);
    }

    #[test]
    fn file_uses_events_envelope() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("events.json");
        let mut store = FileStore::new(&path);
        store.create(form("새 회의")).unwrap();

        let raw: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(raw["events"][0]["title"], "새 회의");
        assert_eq!(raw["events"][0]["startTime"], "14:00");
    }

    #[test]
    fn update_and_delete_by_id() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = FileStore::new(dir.path().join("events.json"));
        let a = store.create(form("a")).unwrap();
        let b = store.create(form("b")).unwrap();

        let updated = store.update(&a.id, form("a2")).unwrap();
        assert_eq!(updated.id, a.id);
        assert_eq!(store.list().unwrap(), vec![updated.clone(), b.clone()]);

        store.delete(&b.id).unwrap();
        assert_eq!(store.list().unwrap(), vec![updated]);
    }

    #[test]
    fn unknown_ids_are_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = FileStore::new(dir.path().join("events.json"));
        assert!(matches!(
            store.update("999", form("x")),
            Err(DaybookError::EventNotFound(_))
        ));
        assert!(matches!(store.delete("999"), Err(DaybookError::EventNotFound(_))));
    }

    #[test]
    fn save_replaces_file_without_leaving_temp() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("events.json");
        // Leftover from an interrupted write
        std::fs::write(dir.path().join("events.json.tmp"), "{ partial").unwrap();

        let mut store = FileStore::new(&path);
        let a = store.create(form("a")).unwrap();
        store.create(form("b")).unwrap();
        store.delete(&a.id).unwrap();

        assert!(!dir.path().join("events.json.tmp").exists());
        let names: Vec<String> = std::fs::read_dir(dir.path())
            .unwrap()
            .map(|entry| entry.unwrap().file_name().to_string_lossy().into_owned())
            .collect();
        assert_eq!(names, vec!["events.json".to_string()]);
        assert_eq!(store.list().unwrap().len(), 1);
    }

    #[test]
    fn corrupt_file_reports_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("events.json");
        std::fs::write(&path, "{ not json").unwrap();

        let err = FileStore::new(&path).list().unwrap_err();
        assert!(matches!(err, DaybookError::Serialization(ref msg) if msg.contains("events.json")));
    }
}
