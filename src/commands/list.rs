use anyhow::Result;
use daybook_core::clock::Clock;
use daybook_core::date_grid::{format_month_label, format_week_label};
use daybook_core::filter::filtered_events;
use daybook_core::store::EventStore;
use daybook_core::view::CalendarView;
use owo_colors::OwoColorize;

use crate::commands::date_or_today;
use crate::render::Render;

pub fn run(
    store: &impl EventStore,
    clock: &impl Clock,
    search: Option<&str>,
    view: CalendarView,
    date: Option<&str>,
) -> Result<()> {
    let reference = date_or_today(date, clock)?;
    let events = store.list()?;
    let mut matches = filtered_events(&events, search.unwrap_or(""), reference, view);
    matches.sort_by_key(|e| (e.date, e.start_time));

    let label = match view {
        CalendarView::Week => format_week_label(reference),
        CalendarView::Month => format_month_label(reference),
    };
    println!("{}", label.bold());

    if matches.is_empty() {
        println!("{}", "  검색 결과가 없습니다.".dimmed());
        return Ok(());
    }

    for event in matches {
        println!(
            "  {} {} {}",
            event.date.to_string().dimmed(),
            event.render(),
            format!("#{}", event.id).dimmed()
        );
    }

    Ok(())
}
