//! Calendar grid arithmetic: month lengths, week spans, month rows, labels.
//!
//! Weeks start on Sunday. Nothing here fails: month indices outside 1..=12
//! roll over into the neighbouring years the same way calendar overflow does.

use std::fmt::Display;

use chrono::{Datelike, Duration, NaiveDate};

/// Width used by [`pad_number`] callers that don't care.
pub const DEFAULT_PAD_WIDTH: usize = 2;

/// One calendar week of a month grid, Sunday first. `None` cells fall
/// outside the month.
pub type WeekRow = [Option<u32>; 7];

pub fn is_leap_year(year: i64) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

/// Number of days in `month` (1-based) of `year`.
///
/// Month 0 is December of the previous year, month 13 is January of the
/// next one, and so on in both directions.
pub fn days_in_month(year: i32, month: i32) -> u32 {
    let index = i64::from(year) * 12 + i64::from(month) - 1;
    let year = index.div_euclid(12);
    let month = index.rem_euclid(12) + 1;

    match month {
        2 if is_leap_year(year) => 29,
        2 => 28,
        4 | 6 | 9 | 11 => 30,
        _ => 31,
    }
}

pub fn first_of_month(date: NaiveDate) -> NaiveDate {
    date - Duration::days(i64::from(date.day0()))
}

/// The Sunday..Saturday week containing `date`.
pub fn week_dates(date: NaiveDate) -> [NaiveDate; 7] {
    let sunday = date - Duration::days(i64::from(date.weekday().num_days_from_sunday()));
    std::array::from_fn(|i| sunday + Duration::days(i as i64))
}

/// Day numbers of `date`'s month laid out in Sunday-first week rows.
pub fn weeks_of_month(date: NaiveDate) -> Vec<WeekRow> {
    let first = first_of_month(date);
    let days = days_in_month(date.year(), date.month() as i32);

    let mut weeks = Vec::new();
    let mut row: WeekRow = [None; 7];
    let mut col = first.weekday().num_days_from_sunday() as usize;

    for day in 1..=days {
        row[col] = Some(day);
        col += 1;
        if col == 7 {
            weeks.push(row);
            row = [None; 7];
            col = 0;
        }
    }
    if col > 0 {
        weeks.push(row);
    }

    weeks
}

/// Label for the week containing `date`, e.g. "2024년 11월 2주".
///
/// A week belongs to the month holding its Thursday, and is numbered from
/// the week holding that month's first Thursday. The week of 2024-12-29 is
/// therefore "2025년 1월 1주".
pub fn format_week_label(date: NaiveDate) -> String {
    let sunday_offset = i64::from(date.weekday().num_days_from_sunday());
    let thursday = date + Duration::days(4 - sunday_offset);

    let first = first_of_month(thursday);
    let to_first_thursday = (4 + 7 - first.weekday().num_days_from_sunday()) % 7;
    let first_thursday = first + Duration::days(i64::from(to_first_thursday));

    let week = (thursday - first_thursday).num_days() / 7 + 1;
    format!("{}년 {}월 {}주", thursday.year(), thursday.month(), week)
}

/// Label for the month containing `date`, e.g. "2024년 7월".
pub fn format_month_label(date: NaiveDate) -> String {
    format!("{}년 {}월", date.year(), date.month())
}

/// Inclusive on both ends. An inverted range contains nothing.
pub fn is_date_in_range(date: NaiveDate, start: NaiveDate, end: NaiveDate) -> bool {
    start <= date && date <= end
}

/// Left-pad the textual form of `value` with zeros up to `width` characters.
pub fn pad_number<T: Display>(value: T, width: usize) -> String {
    format!("{:0>width$}", value.to_string(), width = width)
}

/// `YYYY-MM-DD` for `date`, or for another day of the same month.
pub fn format_date(date: NaiveDate, day: Option<u32>) -> String {
    let day = day.unwrap_or_else(|| date.day());
    format!(
        "{}-{}-{}",
        date.year(),
        pad_number(date.month(), DEFAULT_PAD_WIDTH),
        pad_number(day, DEFAULT_PAD_WIDTH)
    )
}
