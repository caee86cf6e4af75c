use std::collections::{BTreeMap, HashSet};

use anyhow::Result;
use chrono::{Datelike, NaiveDate};
use daybook_core::Event;
use daybook_core::clock::Clock;
use daybook_core::date_grid::{format_week_label, week_dates};
use daybook_core::filter::{events_for_date, filtered_events};
use daybook_core::holidays::{HolidayLookup, StaticHolidays};
use daybook_core::store::{EventStore, NotifiedFile};
use daybook_core::view::CalendarView;
use owo_colors::OwoColorize;

use crate::commands::{date_or_today, shifted};
use crate::render::{Render, color_for_weekday, day_heading};

pub struct WeekArgs<'a> {
    pub date: Option<&'a str>,
    pub search: Option<&'a str>,
    pub shift: i32,
}

pub fn run(
    store: &impl EventStore,
    notified: &NotifiedFile,
    clock: &impl Clock,
    args: WeekArgs,
) -> Result<()> {
    let reference = shifted(date_or_today(args.date, clock)?, CalendarView::Week, args.shift);
    let events = store.list()?;
    let visible = filtered_events(&events, args.search.unwrap_or(""), reference, CalendarView::Week);
    let notified_ids = notified.load()?;

    for line in week_lines(reference, clock.today(), &visible, &notified_ids) {
        println!("{}", line);
    }
    Ok(())
}

/// The week of `reference`, one heading per day followed by its events.
/// Today's heading is highlighted; reminders that already fired are flagged.
fn week_lines(
    reference: NaiveDate,
    today: NaiveDate,
    events: &[&Event],
    notified_ids: &HashSet<String>,
) -> Vec<String> {
    let days = week_dates(reference);
    let holidays = week_holidays(&days);

    let mut lines = vec![format_week_label(reference).bold().to_string()];
    for day in days {
        let mut heading = color_for_weekday(&day_heading(day), day.weekday());
        if day == today {
            heading = heading.reversed().to_string();
        }
        match holidays.get(&day) {
            Some(name) => lines.push(format!("{} {}", heading, name.red())),
            None => lines.push(heading),
        }

        let mut day_events = events_for_date(events.iter().copied(), day, notified_ids);
        day_events.sort_by_key(|d| d.event.start_time);
        lines.extend(day_events.iter().map(|d| format!("  {}", d.render())));
    }
    lines
}

/// A week can straddle two months.
fn week_holidays(days: &[NaiveDate; 7]) -> BTreeMap<NaiveDate, String> {
    let lookup = StaticHolidays::korean();
    let mut holidays = lookup.holidays_for_month(days[0]);
    holidays.extend(lookup.holidays_for_month(days[6]));
    holidays
}
