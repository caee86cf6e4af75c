use anyhow::{Context, Result};
use chrono::{Days, NaiveDate};
use daybook_core::Event;
use daybook_core::clock::Clock;
use daybook_core::recurrence::expand_occurrences;
use daybook_core::store::EventStore;
use owo_colors::OwoColorize;

use crate::commands::date_or_today;
use crate::render::{Render, relative_day};

/// Longest window `upcoming` will expand.
pub const MAX_DAYS: u32 = 366;

pub fn run(store: &impl EventStore, clock: &impl Clock, days: u32, date: Option<&str>) -> Result<()> {
    let from = date_or_today(date, clock)?;
    let events = store.list()?;

    for line in upcoming_lines(&events, from, days, clock.today())? {
        println!("{}", line);
    }
    Ok(())
}

/// Occurrences from `from` for `days` days, grouped under a heading per day.
fn upcoming_lines(
    events: &[Event],
    from: NaiveDate,
    days: u32,
    today: NaiveDate,
) -> Result<Vec<String>> {
    if !(1..=MAX_DAYS).contains(&days) {
        anyhow::bail!("--days는 1부터 {} 사이여야 합니다", MAX_DAYS);
    }
    let to = from
        .checked_add_days(Days::new(u64::from(days) - 1))
        .with_context(|| format!("{}부터 {}일은 표현할 수 있는 날짜 범위를 벗어납니다", from, days))?;

    let occurrences = expand_occurrences(events, from, to);
    if occurrences.is_empty() {
        return Ok(vec!["일정이 없습니다.".dimmed().to_string()]);
    }

    let mut lines = Vec::new();
    let mut current_date = None;
    for occurrence in &occurrences {
        if current_date != Some(occurrence.date) {
            if current_date.is_some() {
                lines.push(String::new());
            }
            lines.push(relative_day(occurrence.date, today).bold().to_string());
            current_date = Some(occurrence.date);
        }
        lines.push(format!("  {}", occurrence.event.render()));
    }
    Ok(lines)
}
