//! In-memory event store.

use super::EventStore;
use crate::error::{DaybookError, DaybookResult};
use crate::event::{Event, EventForm};

/// Keeps events in a `Vec`. Ids are sequential numbers ("1", "2", ...)
/// and are never handed out twice.
#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
    events: Vec<Event>,
    next_id: u64,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from an existing list, e.g. test fixtures.
    pub fn with_events(events: Vec<Event>) -> Self {
        let next_id = events.len() as u64;
        MemoryStore { events, next_id }
    }

    fn assign_id(&mut self) -> String {
        loop {
            self.next_id += 1;
            let id = self.next_id.to_string();
            if !self.events.iter().any(|e| e.id == id) {
                return id;
            }
        }
    }

    fn position(&self, id: &str) -> DaybookResult<usize> {
        self.events
            .iter()
            .position(|e| e.id == id)
            .ok_or_else(|| DaybookError::EventNotFound(id.to_string()))
    }
}

impl EventStore for MemoryStore {
    fn list(&self) -> DaybookResult<Vec<Event>> {
        Ok(self.events.clone())
    }

    fn create(&mut self, form: EventForm) -> DaybookResult<Event> {
        let event = form.into_event(self.assign_id());
        self.events.push(event.clone());
        Ok(event)
    }

    fn update(&mut self, id: &str, form: EventForm) -> DaybookResult<Event> {
        let index = self.position(id)?;
        let event = form.into_event(id);
        self.events[index] = event.clone();
        Ok(event)
    }

    fn delete(&mut self, id: &str) -> DaybookResult<()> {
        let index = self.position(id)?;
        self.events.remove(index);
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
            NaiveDate::from_ymd_opt(2024, 11, 5).unwrap(),
            NaiveTime::from_hms_opt(15, 0, 0).unwrap(),
            NaiveTime::from_hms_opt(16, 0, 0).unwrap(),
        )
    }

    #[test]
    fn lists_initial_events() {
        let initial = form("Harry와 1-on-1").into_event("1");
        let store = MemoryStore::with_events(vec![initial.clone()]);
        assert_eq!(store.list().unwrap(), vec![initial]);
    }

    #[test]
    fn create_appends_with_new_id() {
        let initial = form("Harry와 1-on-1").into_event("1");
        let mut store = MemoryStore::with_events(vec![initial.clone()]);

        let created = store.create(form("새 회의")).unwrap();
        assert_eq!(created.id, "2");
        assert_eq!(store.list().unwrap(), vec![initial, created]);
    }

    #[test]
    fn ids_are_not_reused_after_delete() {
        let mut store = MemoryStore::new();
        let first = store.create(form("a")).unwrap();
        store.delete(&first.id).unwrap();
        let second = store.create(form("b")).unwrap();
        assert_ne!(first.id, second.id);
    }

    #[test]
    fn ids_skip_ones_already_taken() {
        let taken = form("taken").into_event("2");
        let mut store = MemoryStore::with_events(vec![taken]);
        assert_eq!(store.create(form("new")).unwrap().id, "3");
    }

    #[test]
    fn update_replaces_by_id() {
        let mut store = MemoryStore::with_events(vec![form("Harry와 1-on-1").into_event("1")]);

        let mut changed = form("수정된 회의");
        changed.end_time = changed.start_time;
        let updated = store.update("1", changed).unwrap();

        assert_eq!(updated.id, "1");
        assert_eq!(store.list().unwrap(), vec![updated]);
    }

    #[test]
    fn update_unknown_id_fails() {
        let mut store = MemoryStore::new();
        let err = store.update("999", form("없음")).unwrap_err();
        assert!(matches!(err, DaybookError::EventNotFound(id) if id == "999"));
    }

    #[test]
    fn delete_removes_event() {
        let mut store = MemoryStore::with_events(vec![form("a").into_event("1")]);
        store.delete("1").unwrap();
        assert!(store.list().unwrap().is_empty());
        assert!(store.delete("1").is_err());
    }
}
