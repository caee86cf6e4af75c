pub mod delete;
pub mod edit;
pub mod holidays;
pub mod list;
pub mod month;
pub mod new;
pub mod notify;
pub mod upcoming;
pub mod week;

use anyhow::Result;
use chrono::NaiveDate;
use clap::Args;
use daybook_core::clock::Clock;
use daybook_core::overlap::{find_overlapping_events, overlap_summary};
use daybook_core::view::{CalendarView, Direction, navigate};
use daybook_core::{CATEGORIES, Event, EventForm, NOTIFICATION_OPTIONS, RepeatInfo, RepeatType};
use dialoguer::Confirm;
use owo_colors::OwoColorize;

/// Optional event fields shared by `new` and `edit`.
#[derive(Args, Debug, Default, Clone)]
pub struct EventDetails {
    #[arg(long)]
    pub description: Option<String>,

    #[arg(short, long)]
    pub location: Option<String>,

    /// 업무, 개인, 가족, 기타 중 하나
    #[arg(short, long)]
    pub category: Option<String>,

    /// none, daily, weekly, monthly, yearly 중 하나
    #[arg(short, long)]
    pub repeat: Option<RepeatType>,

    /// N일/주/월/년마다 반복
    #[arg(short, long)]
    pub interval: Option<u32>,

    /// 반복 종료일 (YYYY-MM-DD)
    #[arg(long)]
    pub until: Option<String>,

    /// 시작 몇 분 전에 알릴지 (1, 10, 60, 120, 1440; 0은 알림 없음)
    #[arg(short, long)]
    pub notify: Option<u32>,
}

impl EventDetails {
    /// Write every field that was given onto `form`.
    pub fn apply(self, form: &mut EventForm) -> Result<()> {
        if let Some(description) = self.description {
            form.description = description;
        }
        if let Some(location) = self.location {
            form.location = location;
        }
        if let Some(category) = self.category {
            if !CATEGORIES.contains(&category.as_str()) {
                anyhow::bail!(
                    "알 수 없는 카테고리 '{}'. 선택 가능: {}",
                    category,
                    CATEGORIES.join(", ")
                );
            }
            form.category = category;
        }
        if let Some(minutes) = self.notify {
            if minutes != 0 && !NOTIFICATION_OPTIONS.iter().any(|(m, _)| *m == minutes) {
                let available: Vec<String> =
                    NOTIFICATION_OPTIONS.iter().map(|(m, _)| m.to_string()).collect();
                anyhow::bail!(
                    "지원하지 않는 알림 시간 {}분. 선택 가능: 0, {}",
                    minutes,
                    available.join(", ")
                );
            }
            form.notification_time = minutes;
        }

        match self.repeat {
            Some(RepeatType::None) => form.repeat = RepeatInfo::none(),
            Some(kind) => {
                let interval = self.interval.unwrap_or(match form.repeat.kind {
                    RepeatType::None => 1,
                    _ => form.repeat.interval,
                });
                form.repeat = RepeatInfo {
                    kind,
                    interval,
                    end_date: form.repeat.end_date,
                };
            }
            None => {
                if let Some(interval) = self.interval {
                    form.repeat.interval = interval;
                }
            }
        }
        if let Some(until) = self.until {
            form.repeat.end_date = Some(daybook_core::parse_date(&until)?);
        }

        Ok(())
    }
}

/// Date argument, or the clock's today.
pub fn date_or_today(date: Option<&str>, clock: &impl Clock) -> Result<NaiveDate> {
    match date {
        Some(s) => Ok(daybook_core::parse_date(s)?),
        None => Ok(clock.today()),
    }
}

/// Step `date` back (negative) or forward (positive) by whole views.
pub fn shifted(date: NaiveDate, view: CalendarView, shift: i32) -> NaiveDate {
    let direction = if shift < 0 {
        Direction::Prev
    } else {
        Direction::Next
    };

    let mut current = date;
    for _ in 0..shift.unsigned_abs() {
        let next = navigate(current, view, direction);
        if next == current {
            break;
        }
        current = next;
    }
    current
}

/// Warn about events `form` overlaps and ask whether to save anyway.
/// Returns `true` when there is nothing to confirm or the user agreed.
pub fn confirm_overlaps(form: &EventForm, others: &[Event], yes: bool) -> Result<bool> {
    let overlapping = find_overlapping_events(&form.time_range(), others);
    if overlapping.is_empty() {
        return Ok(true);
    }

    println!("{}", "  일정 겹침 경고".yellow().bold());
    println!("  다음 일정과 겹칩니다:");
    for event in &overlapping {
        println!("    {}", overlap_summary(event).yellow());
    }

    if yes {
        return Ok(true);
    }

    let proceed = Confirm::new()
        .with_prompt("  계속 진행하시겠습니까?")
        .default(false)
        .interact()?;
    Ok(proceed)
}
