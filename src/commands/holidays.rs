use anyhow::Result;
use daybook_core::clock::Clock;
use daybook_core::date_grid::format_month_label;
use daybook_core::holidays::{HolidayLookup, StaticHolidays};
use owo_colors::OwoColorize;

use crate::commands::date_or_today;
use crate::render::day_heading;

pub fn run(clock: &impl Clock, date: Option<&str>) -> Result<()> {
    let date = date_or_today(date, clock)?;
    let holidays = StaticHolidays::korean().holidays_for_month(date);

    println!("{}", format_month_label(date).bold());
    if holidays.is_empty() {
        println!("{}", "  이번 달에는 공휴일이 없습니다.".dimmed());
        return Ok(());
    }

    for (day, name) in &holidays {
        println!("  {} {}", day_heading(*day).dimmed(), name.red());
    }

    Ok(())
}
