//! Search and calendar-view filtering over an event list.
//!
//! Every function borrows the list it is given and returns references in
//! input order; nothing here reorders or copies events.

use std::collections::HashSet;

use chrono::{Datelike, NaiveDate};

use crate::date_grid::{is_date_in_range, week_dates};
use crate::event::Event;
use crate::view::CalendarView;

/// An event shown in a day cell, flagged when its reminder has fired.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DayEvent<'a> {
    pub event: &'a Event,
    pub is_notified: bool,
}

/// Case-insensitive substring match on title, description or location.
/// An empty term matches everything.
pub fn search_events<'a>(events: &'a [Event], term: &str) -> Vec<&'a Event> {
    let needle = term.to_lowercase();
    events
        .iter()
        .filter(|event| matches_search(event, &needle))
        .collect()
}

fn matches_search(event: &Event, needle: &str) -> bool {
    needle.is_empty()
        || event.title.to_lowercase().contains(needle)
        || event.description.to_lowercase().contains(needle)
        || event.location.to_lowercase().contains(needle)
}

/// Whether `date` is visible when `reference` is displayed in `view`.
pub fn is_in_view(date: NaiveDate, reference: NaiveDate, view: CalendarView) -> bool {
    match view {
        CalendarView::Week => {
            let week = week_dates(reference);
            is_date_in_range(date, week[0], week[6])
        }
        CalendarView::Month => {
            date.year() == reference.year() && date.month() == reference.month()
        }
    }
}

/// Events matching `search_term` whose stored date is visible in the view.
pub fn filtered_events<'a>(
    events: &'a [Event],
    search_term: &str,
    reference: NaiveDate,
    view: CalendarView,
) -> Vec<&'a Event> {
    let needle = search_term.to_lowercase();
    events
        .iter()
        .filter(|event| matches_search(event, &needle))
        .filter(|event| is_in_view(event.date, reference, view))
        .collect()
}

/// Events whose day-of-month is `day`. Days outside 1..=31 match nothing.
pub fn events_for_day<'a>(events: impl IntoIterator<Item = &'a Event>, day: u32) -> Vec<&'a Event> {
    if !(1..=31).contains(&day) {
        return Vec::new();
    }
    events.into_iter().filter(|event| event.date.day() == day).collect()
}

/// Events stored on `date`, each flagged with whether its id was notified.
pub fn events_for_date<'a>(
    events: impl IntoIterator<Item = &'a Event>,
    date: NaiveDate,
    notified_ids: &HashSet<String>,
) -> Vec<DayEvent<'a>> {
    events
        .into_iter()
        .filter(|event| event.date == date)
        .map(|event| DayEvent {
            event,
            is_notified: notified_ids.contains(&event.id),
        })
        .collect()
}
