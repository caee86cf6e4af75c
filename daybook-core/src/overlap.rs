//! Conflict detection between events on the same day.
//!
//! Time ranges are half-open: an event ending at 14:00 does not conflict
//! with one starting at 14:00.

use chrono::{NaiveDate, NaiveTime};

use crate::event::{Event, format_time};

/// The date and `[start, end)` span of an event or draft.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeRange {
    pub date: NaiveDate,
    pub start: NaiveTime,
    pub end: NaiveTime,
}

impl TimeRange {
    pub fn new(date: NaiveDate, start: NaiveTime, end: NaiveTime) -> Self {
        TimeRange { date, start, end }
    }

    pub fn overlaps(&self, other: &TimeRange) -> bool {
        self.date == other.date && self.start < other.end && self.end > other.start
    }
}

/// Events in `existing` whose time range intersects `candidate`, in input order.
///
/// No event is excluded by identity. When re-checking an event that is being
/// edited, leave it out of `existing` first.
pub fn find_overlapping_events<'a>(candidate: &TimeRange, existing: &'a [Event]) -> Vec<&'a Event> {
    let overlapping: Vec<&Event> = existing
        .iter()
        .filter(|event| candidate.overlaps(&event.time_range()))
        .collect();

    if !overlapping.is_empty() {
        tracing::debug!(
            date = %candidate.date,
            conflicts = overlapping.len(),
            "overlapping events found"
        );
    }

    overlapping
}

/// One line of a conflict warning: `title (YYYY-MM-DD HH:MM-HH:MM)`.
pub fn overlap_summary(event: &Event) -> String {
    format!(
        "{} ({} {}-{})",
        event.title,
        event.date,
        format_time(event.start_time),
        format_time(event.end_time)
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::EventForm;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    fn t(h: u32, m: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(h, m, 0).unwrap()
    }

    fn event(id: &str, date: NaiveDate, start: NaiveTime, end: NaiveTime) -> Event {
        EventForm::new(&format!("event {}", id), date, start, end).into_event(id)
    }

    #[test]
    fn partial_overlap_is_a_conflict() {
        let a = event("a", d(2024, 10, 1), t(13, 0), t(14, 0));
        let b = TimeRange::new(d(2024, 10, 1), t(13, 30), t(14, 30));
        let existing = vec![a.clone()];
        assert_eq!(find_overlapping_events(&b, &existing), vec![&a]);
    }

    #[test]
    fn touching_ranges_do_not_conflict() {
        let a = event("a", d(2024, 10, 1), t(13, 0), t(14, 0));
        let c = TimeRange::new(d(2024, 10, 1), t(14, 0), t(15, 0));
        assert!(find_overlapping_events(&c, &[a.clone()]).is_empty());

        let before = TimeRange::new(d(2024, 10, 1), t(12, 0), t(13, 0));
        assert!(find_overlapping_events(&before, &[a]).is_empty());
    }

    #[test]
    fn other_dates_do_not_conflict() {
        let a = event("a", d(2024, 10, 1), t(10, 0), t(11, 0));
        let same_time_next_day = TimeRange::new(d(2024, 10, 2), t(10, 0), t(11, 0));
        assert!(find_overlapping_events(&same_time_next_day, &[a]).is_empty());
    }

    #[test]
    fn empty_list_has_no_conflicts() {
        let candidate = TimeRange::new(d(2024, 10, 1), t(10, 0), t(11, 0));
        assert!(find_overlapping_events(&candidate, &[]).is_empty());
    }

    #[test]
    fn containment_and_identical_ranges_conflict() {
        let outer = event("outer", d(2024, 10, 1), t(9, 0), t(17, 0));
        let inner = TimeRange::new(d(2024, 10, 1), t(12, 0), t(13, 0));
        assert_eq!(find_overlapping_events(&inner, &[outer.clone()]).len(), 1);
        assert!(outer.time_range().overlaps(&outer.time_range()));
    }

    #[test]
    fn zero_length_event_inside_another_conflicts() {
        let a = event("a", d(2024, 10, 1), t(13, 0), t(14, 0));
        let point = TimeRange::new(d(2024, 10, 1), t(13, 30), t(13, 30));
        assert_eq!(find_overlapping_events(&point, &[a]).len(), 1);
    }

    #[test]
    fn keeps_input_order_and_does_not_exclude_self() {
        let first = event("1", d(2024, 10, 1), t(10, 0), t(12, 0));
        let unrelated = event("2", d(2024, 10, 1), t(15, 0), t(16, 0));
        let second = event("3", d(2024, 10, 1), t(11, 0), t(11, 30));
        let existing = vec![first.clone(), unrelated, second.clone()];

        let found = find_overlapping_events(&first.time_range(), &existing);
        assert_eq!(found, vec![&first, &second]);
    }

    #[test]
    fn summary_line() {
        let a = event("a", d(2024, 10, 1), t(9, 5), t(10, 0));
        assert_eq!(overlap_summary(&a), "event a (2024-10-01 09:05-10:00)");
    }
}
