//! Terminal rendering for daybook types.
//!
//! Extension traits that add colored output to daybook-core types using
//! owo_colors.

use chrono::{Datelike, NaiveDate, Weekday};
use daybook_core::filter::DayEvent;
use daybook_core::notification::Notification;
use daybook_core::{Event, NOTIFICATION_OPTIONS, format_time};
use owo_colors::OwoColorize;

/// Extension trait for TUI rendering with colors.
pub trait Render {
    fn render(&self) -> String;
}

impl Render for Event {
    fn render(&self) -> String {
        let time = format!(
            "{}-{}",
            format_time(self.start_time),
            format_time(self.end_time)
        );
        let mut line = format!("{} {}", time.dimmed(), self.title);

        if !self.location.is_empty() {
            line.push_str(&format!(" {}", format!("@ {}", self.location).dimmed()));
        }
        if !self.category.is_empty() {
            line.push_str(&format!(" {}", format!("[{}]", self.category).cyan()));
        }
        if self.repeat.is_repeating() {
            let mut repeat = format!(
                "반복: {}{}마다",
                self.repeat.interval,
                self.repeat.kind.label()
            );
            if let Some(end_date) = self.repeat.end_date {
                repeat.push_str(&format!(" (종료: {})", end_date));
            }
            line.push_str(&format!(" {}", repeat.yellow()));
        }
        if self.notification_time > 0 {
            let reminder = format!("알림: {}", notification_label(self.notification_time));
            line.push_str(&format!(" {}", reminder.dimmed()));
        }

        line
    }
}

impl Render for DayEvent<'_> {
    fn render(&self) -> String {
        if self.is_notified {
            format!("🔔 {}", self.event.title.red().bold())
        } else {
            self.event.render()
        }
    }
}

impl Render for Notification {
    fn render(&self) -> String {
        format!("🔔 {}", self.message.bold())
    }
}

/// Display label for a reminder lead time, e.g. "1시간 전".
pub fn notification_label(minutes: u32) -> String {
    NOTIFICATION_OPTIONS
        .iter()
        .find(|(m, _)| *m == minutes)
        .map(|(_, label)| label.to_string())
        .unwrap_or_else(|| format!("{}분 전", minutes))
}

/// Korean weekday names, Sunday first.
pub const WEEKDAY_NAMES: [&str; 7] = ["일", "월", "화", "수", "목", "금", "토"];

/// e.g. "10/15 (화)"
pub fn day_heading(date: NaiveDate) -> String {
    let name = WEEKDAY_NAMES[date.weekday().num_days_from_sunday() as usize];
    format!("{}/{} ({})", date.month(), date.day(), name)
}

/// Human label for a date relative to today ("오늘", "내일", or the heading).
pub fn relative_day(date: NaiveDate, today: NaiveDate) -> String {
    match (date - today).num_days() {
        0 => "오늘".to_string(),
        1 => "내일".to_string(),
        _ => day_heading(date),
    }
}

/// Weekend days get the colors of a paper calendar.
pub fn color_for_weekday(text: &str, weekday: Weekday) -> String {
    match weekday {
        Weekday::Sun => text.red().to_string(),
        Weekday::Sat => text.blue().to_string(),
        _ => text.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    #[test]
    fn notification_labels() {
        assert_eq!(notification_label(10), "10분 전");
        assert_eq!(notification_label(1440), "1일 전");
        assert_eq!(notification_label(45), "45분 전");
    }

    #[test]
    fn day_headings_use_korean_weekdays() {
        assert_eq!(day_heading(d(2024, 10, 15)), "10/15 (화)");
        assert_eq!(day_heading(d(2024, 10, 20)), "10/20 (일)");
    }

    #[test]
    fn relative_days() {
        let today = d(2024, 10, 15);
        assert_eq!(relative_day(today, today), "오늘");
        assert_eq!(relative_day(d(2024, 10, 16), today), "내일");
        assert_eq!(relative_day(d(2024, 10, 19), today), "10/19 (토)");
    }

    #[test]
    fn event_line_mentions_repeat_and_reminder() {
        use chrono::NaiveTime;
        use daybook_core::{EventForm, RepeatInfo, RepeatType};

        let mut form = EventForm::new(
            "스탠드업",
            d(2024, 10, 15),
            NaiveTime::from_hms_opt(9, 0, 0).unwrap(),
            NaiveTime::from_hms_opt(9, 15, 0).unwrap(),
        );
        form.repeat = RepeatInfo::every(RepeatType::Weekly, 2).until(d(2024, 12, 31));
        form.notification_time = 60;

        let line = form.into_event("1").render();
        assert!(line.contains("스탠드업"));
        assert!(line.contains("반복: 2주마다"));
        assert!(line.contains("(종료: 2024-12-31)"));
        assert!(line.contains("알림: 1시간 전"));
    }
}
