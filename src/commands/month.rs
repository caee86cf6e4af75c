use std::collections::BTreeMap;

use anyhow::Result;
use chrono::{Datelike, NaiveDate, Weekday};
use daybook_core::Event;
use daybook_core::clock::Clock;
use daybook_core::date_grid::{format_month_label, pad_number, weeks_of_month};
use daybook_core::filter::{events_for_day, filtered_events};
use daybook_core::holidays::{HolidayLookup, StaticHolidays};
use daybook_core::store::EventStore;
use daybook_core::view::CalendarView;
use owo_colors::OwoColorize;

use crate::commands::{date_or_today, shifted};
use crate::render::{Render, WEEKDAY_NAMES, color_for_weekday};

const CELL_WIDTH: usize = 4;

pub fn run(
    store: &impl EventStore,
    clock: &impl Clock,
    date: Option<&str>,
    search: Option<&str>,
    shift: i32,
) -> Result<()> {
    let reference = shifted(date_or_today(date, clock)?, CalendarView::Month, shift);
    let events = store.list()?;
    let visible = filtered_events(&events, search.unwrap_or(""), reference, CalendarView::Month);
    let holidays = StaticHolidays::korean().holidays_for_month(reference);

    println!("{}", format_month_label(reference).bold());
    for line in grid_lines(reference, &visible, &holidays) {
        println!("{}", line);
    }

    let mut days: Vec<u32> = visible.iter().map(|e| e.date.day()).collect();
    days.sort_unstable();
    days.dedup();

    if days.is_empty() {
        return Ok(());
    }
    println!();
    for day in days {
        let mut day_events = events_for_day(visible.iter().copied(), day);
        day_events.sort_by_key(|e| e.start_time);
        println!("{}", pad_number(day, 2).bold());
        for event in day_events {
            println!("  {}", event.render());
        }
    }

    Ok(())
}

/// The month laid out as a Sunday-first grid. Days with events carry a
/// dot; holidays are shown in red.
fn grid_lines(
    reference: NaiveDate,
    events: &[&Event],
    holidays: &BTreeMap<NaiveDate, String>,
) -> Vec<String> {
    let header: Vec<String> = WEEKDAY_NAMES
        .iter()
        .enumerate()
        .map(|(i, name)| color_for_weekday(&format!("{:>2} ", name), weekday_at(i)))
        .collect();

    let mut lines = vec![header.concat()];
    for week in weeks_of_month(reference) {
        let cells: Vec<String> = week
            .iter()
            .enumerate()
            .map(|(i, day)| match day {
                None => " ".repeat(CELL_WIDTH),
                Some(day) => render_cell(reference, *day, weekday_at(i), events, holidays),
            })
            .collect();
        lines.push(cells.concat());
    }
    lines
}

fn render_cell(
    reference: NaiveDate,
    day: u32,
    weekday: Weekday,
    events: &[&Event],
    holidays: &BTreeMap<NaiveDate, String>,
) -> String {
    let marker = if events_for_day(events.iter().copied(), day).is_empty() {
        " "
    } else {
        "•"
    };
    let number = format!("{:>3}", day);

    let is_holiday = reference
        .with_day(day)
        .is_some_and(|date| holidays.contains_key(&date));
    let number = if is_holiday {
        number.red().to_string()
    } else {
        color_for_weekday(&number, weekday)
    };

    format!("{}{}", number, marker)
}

fn weekday_at(column: usize) -> Weekday {
    const COLUMNS: [Weekday; 7] = [
        Weekday::Sun,
        Weekday::Mon,
        Weekday::Tue,
        Weekday::Wed,
        Weekday::Thu,
        Weekday::Fri,
        Weekday::Sat,
    ];
    COLUMNS[column]
}
