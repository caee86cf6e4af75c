//! Recurrence expansion for repeating events.
//!
//! Rules are evaluated arithmetically against the event's anchor date.
//! Monthly and yearly rules skip dates that don't exist rather than clamping
//! them: an event anchored on the 31st has no occurrence in April, and one
//! anchored on Feb 29 only recurs in leap years. This is the same behaviour
//! as an iCalendar RRULE with FREQ=MONTHLY / FREQ=YEARLY.

use chrono::{Datelike, Days, NaiveDate};

use crate::event::{Event, RepeatType};

/// A single dated instance of an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Occurrence<'a> {
    pub event: &'a Event,
    pub date: NaiveDate,
}

/// Whether `event` takes place on `date`.
pub fn occurs_on(event: &Event, date: NaiveDate) -> bool {
    let anchor = event.date;
    let repeat = &event.repeat;

    if date < anchor {
        return false;
    }
    if repeat.is_repeating() {
        if let Some(end_date) = repeat.end_date {
            if date > end_date {
                return false;
            }
        }
    }

    // A zero interval on a repeating rule means "every"
    let step = i64::from(repeat.interval.max(1));
    matches_rule(repeat.kind, step, anchor, date)
}

fn matches_rule(kind: RepeatType, step: i64, anchor: NaiveDate, date: NaiveDate) -> bool {
    match kind {
        RepeatType::None => date == anchor,
        RepeatType::Daily => (date - anchor).num_days() % step == 0,
        RepeatType::Weekly => {
            let days = (date - anchor).num_days();
            days % 7 == 0 && (days / 7) % step == 0
        }
        RepeatType::Monthly => {
            date.day() == anchor.day() && months_between(anchor, date) % step == 0
        }
        RepeatType::Yearly => {
            date.month() == anchor.month()
                && date.day() == anchor.day()
                && i64::from(date.year() - anchor.year()) % step == 0
        }
    }
}

fn months_between(from: NaiveDate, to: NaiveDate) -> i64 {
    i64::from(to.year() - from.year()) * 12 + i64::from(to.month()) - i64::from(from.month())
}

/// Occurrence dates of `event` within `[from, to]`, ascending.
///
/// Walks the rule forward from the first candidate in the window instead of
/// testing every day, so long windows stay cheap for sparse rules.
pub fn occurrences_between(event: &Event, from: NaiveDate, to: NaiveDate) -> Vec<NaiveDate> {
    let anchor = event.date;
    let repeat = &event.repeat;

    let start = from.max(anchor);
    let end = match repeat.end_date {
        Some(end_date) if repeat.is_repeating() => to.min(end_date),
        _ => to,
    };
    if start > end {
        return Vec::new();
    }

    let step = u64::from(repeat.interval.max(1));
    match repeat.kind {
        RepeatType::None if start == anchor => vec![anchor],
        RepeatType::None => Vec::new(),
        RepeatType::Daily => step_days(anchor, step, start, end),
        RepeatType::Weekly => step_days(anchor, step * 7, start, end),
        RepeatType::Monthly => step_months(anchor, step, start, end),
        RepeatType::Yearly => step_months(anchor, step * 12, start, end),
    }
}

/// `anchor + k * step` days for every k landing in `[start, end]`.
/// `start` is never before `anchor`.
fn step_days(anchor: NaiveDate, step: u64, start: NaiveDate, end: NaiveDate) -> Vec<NaiveDate> {
    let offset = (start - anchor).num_days().unsigned_abs();
    let first = offset.div_ceil(step) * step;

    let mut dates = Vec::new();
    let mut next = anchor.checked_add_days(Days::new(first));
    while let Some(date) = next.filter(|date| *date <= end) {
        dates.push(date);
        next = date.checked_add_days(Days::new(step));
    }
    dates
}

/// The anchor's day-of-month in every `step`-th month from the anchor,
/// within `[start, end]`. Months without that day are skipped.
fn step_months(anchor: NaiveDate, step: u64, start: NaiveDate, end: NaiveDate) -> Vec<NaiveDate> {
    let anchor_index = month_index(anchor);
    let end_index = month_index(end);
    let skipped = months_between(anchor, start).unsigned_abs();

    let mut dates = Vec::new();
    let mut k = skipped / step;
    loop {
        let index = match k.checked_mul(step).and_then(|m| i64::try_from(m).ok()) {
            Some(months) => anchor_index + months,
            None => break,
        };
        if index > end_index {
            break;
        }

        let year = index.div_euclid(12) as i32;
        let month = index.rem_euclid(12) as u32 + 1;
        if let Some(date) = NaiveDate::from_ymd_opt(year, month, anchor.day()) {
            if start <= date && date <= end {
                dates.push(date);
            }
        }
        k += 1;
    }
    dates
}

fn month_index(date: NaiveDate) -> i64 {
    i64::from(date.year()) * 12 + i64::from(date.month0())
}

/// Every occurrence of `events` within `[from, to]`, ordered by date and
/// then start time. Events with equal keys keep their input order.
pub fn expand_occurrences<'a>(
    events: &'a [Event],
    from: NaiveDate,
    to: NaiveDate,
) -> Vec<Occurrence<'a>> {
    let mut occurrences: Vec<Occurrence<'a>> = events
        .iter()
        .flat_map(|event| {
            occurrences_between(event, from, to)
                .into_iter()
                .map(move |date| Occurrence { event, date })
        })
        .collect();

    occurrences.sort_by_key(|o| (o.date, o.event.start_time));
    occurrences
}
