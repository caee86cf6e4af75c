use anyhow::{Context, Result};
use daybook_core::store::EventStore;
use daybook_core::{Event, EventForm, parse_date, parse_time};
use owo_colors::OwoColorize;

use crate::commands::{EventDetails, confirm_overlaps};
use crate::render::Render;

/// Fields to change on an existing event; `None` keeps the current value.
#[derive(Debug, Default)]
pub struct Changes {
    pub title: Option<String>,
    pub date: Option<String>,
    pub start: Option<String>,
    pub end: Option<String>,
    pub details: EventDetails,
}

impl Changes {
    fn apply(self, form: &mut EventForm) -> Result<()> {
        if let Some(title) = self.title {
            form.title = title;
        }
        if let Some(date) = self.date {
            form.date = parse_date(&date)?;
        }
        if let Some(start) = self.start {
            form.start_time = parse_time(&start)?;
        }
        if let Some(end) = self.end {
            form.end_time = parse_time(&end)?;
        }
        self.details.apply(form)
    }
}

pub fn run(store: &mut impl EventStore, id: &str, changes: Changes, yes: bool) -> Result<()> {
    let events = store.list()?;
    let current = events
        .iter()
        .find(|e| e.id == id)
        .with_context(|| format!("일정을 찾을 수 없습니다: {}", id))?;

    let mut form = current.to_form();
    changes.apply(&mut form)?;
    form.validate()?;

    // The event never conflicts with its own previous version
    let others: Vec<Event> = events.iter().filter(|e| e.id != id).cloned().collect();
    if !confirm_overlaps(&form, &others, yes)? {
        println!("{}", "  취소되었습니다.".dimmed());
        return Ok(());
    }

    let event = store.update(id, form)?;
    let total = store.list()?.len();

    println!("{}", "  일정이 수정되었습니다.".green());
    println!("  {} {}", event.date.to_string().dimmed(), event.render());
    println!("{}", format!("  #{} (전체 일정 {}개)", event.id, total).dimmed());

    Ok(())
}
