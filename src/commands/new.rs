use anyhow::Result;
use daybook_core::store::EventStore;
use daybook_core::{EventForm, parse_date, parse_time};
use owo_colors::OwoColorize;

use crate::commands::{EventDetails, confirm_overlaps};
use crate::render::Render;

pub fn run(
    store: &mut impl EventStore,
    title: String,
    date: &str,
    start: &str,
    end: &str,
    details: EventDetails,
    yes: bool,
) -> Result<()> {
    let mut form = EventForm::new(&title, parse_date(date)?, parse_time(start)?, parse_time(end)?);
    details.apply(&mut form)?;
    form.validate()?;

    let events = store.list()?;
    if !confirm_overlaps(&form, &events, yes)? {
        println!("{}", "  취소되었습니다.".dimmed());
        return Ok(());
    }

    let event = store.create(form)?;
    let total = store.list()?.len();

    println!("{}", "  일정이 추가되었습니다.".green());
    println!("  {} {}", event.date.to_string().dimmed(), event.render());
    println!("{}", format!("  #{} (전체 일정 {}개)", event.id, total).dimmed());

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use daybook_core::store::MemoryStore;

    #[test]
    fn creates_event_with_details() {
        let mut store = MemoryStore::new();
        let details = EventDetails {
            location: Some("회의실 B".into()),
            category: Some("업무".into()),
            ..Default::default()
        };

        run(&mut store, "기존 회의".into(), "2024-10-15", "09:00", "10:00", details, false).unwrap();

        let events = store.list().unwrap();
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].title, "기존 회의");
        assert_eq!(events[0].location, "회의실 B");
        assert_eq!(events[0].category, "업무");
    }

    #[test]
    fn overlap_is_saved_when_confirmed_up_front() {
        let mut store = MemoryStore::new();
        run(&mut store, "a".into(), "2024-10-15", "09:00", "10:00", EventDetails::default(), true)
            .unwrap();
        run(&mut store, "b".into(), "2024-10-15", "09:30", "10:30", EventDetails::default(), true)
            .unwrap();
        assert_eq!(store.list().unwrap().len(), 2);
    }

    #[test]
    fn invalid_input_saves_nothing() {
        let mut store = MemoryStore::new();
        let details = EventDetails::default;

        assert!(run(&mut store, "".into(), "2024-10-15", "09:00", "10:00", details(), true).is_err());
        assert!(run(&mut store, "a".into(), "2024-10-15", "11:00", "10:00", details(), true).is_err());
        assert!(run(&mut store, "a".into(), "2024/10/15", "09:00", "10:00", details(), true).is_err());
        assert!(run(&mut store, "a".into(), "2024-10-15", "9시", "10:00", details(), true).is_err());
        assert!(store.list().unwrap().is_empty());
    }
}
