//! Event types.
//!
//! `Event` is a stored event carrying the id its store assigned. `EventForm`
//! is the same data before it has been saved (or while it is being edited).
//! Both serialize to the camelCase shape of the events API.

use std::fmt;
use std::str::FromStr;

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};

use crate::error::{DaybookError, DaybookResult};
use crate::overlap::TimeRange;

/// Categories offered when creating an event.
pub const CATEGORIES: [&str; 4] = ["업무", "개인", "가족", "기타"];

/// Reminder lead times (minutes) with their display labels.
pub const NOTIFICATION_OPTIONS: [(u32, &str); 5] = [
    (1, "1분 전"),
    (10, "10분 전"),
    (60, "1시간 전"),
    (120, "2시간 전"),
    (1440, "1일 전"),
];

pub const REQUIRED_FIELDS_MESSAGE: &str = "필수 정보를 모두 입력해주세요.";
pub const END_BEFORE_START_MESSAGE: &str = "종료 시간은 시작 시간보다 늦어야 합니다.";
pub const INTERVAL_MESSAGE: &str = "반복 간격은 1 이상이어야 합니다.";
pub const REPEAT_END_MESSAGE: &str = "반복 종료일은 시작 날짜 이후여야 합니다.";

const DATE_FORMAT: &str = "%Y-%m-%d";
const TIME_FORMAT: &str = "%H:%M";

/// A saved calendar event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    pub id: String,
    pub title: String,
    pub date: NaiveDate,
    #[serde(with = "hhmm")]
    pub start_time: NaiveTime,
    #[serde(with = "hhmm")]
    pub end_time: NaiveTime,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub repeat: RepeatInfo,
    /// Minutes before start to remind; 0 disables the reminder
    #[serde(default)]
    pub notification_time: u32,
}

/// An event that has not been saved yet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventForm {
    pub title: String,
    pub date: NaiveDate,
    #[serde(with = "hhmm")]
    pub start_time: NaiveTime,
    #[serde(with = "hhmm")]
    pub end_time: NaiveTime,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub repeat: RepeatInfo,
    #[serde(default)]
    pub notification_time: u32,
}

/// Recurrence rule attached to an event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RepeatInfo {
    #[serde(rename = "type")]
    pub kind: RepeatType,
    #[serde(default)]
    pub interval: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_date: Option<NaiveDate>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RepeatType {
    #[default]
    None,
    Daily,
    Weekly,
    Monthly,
    Yearly,
}

impl Default for RepeatInfo {
    fn default() -> Self {
        RepeatInfo::none()
    }
}

impl RepeatInfo {
    /// A one-off event.
    pub fn none() -> Self {
        RepeatInfo {
            kind: RepeatType::None,
            interval: 1,
            end_date: None,
        }
    }

    pub fn every(kind: RepeatType, interval: u32) -> Self {
        RepeatInfo {
            kind,
            interval,
            end_date: None,
        }
    }

    pub fn until(mut self, end_date: NaiveDate) -> Self {
        self.end_date = Some(end_date);
        self
    }

    pub fn is_repeating(&self) -> bool {
        self.kind != RepeatType::None
    }
}

impl RepeatType {
    pub fn as_str(&self) -> &'static str {
        match self {
            RepeatType::None => "none",
            RepeatType::Daily => "daily",
            RepeatType::Weekly => "weekly",
            RepeatType::Monthly => "monthly",
            RepeatType::Yearly => "yearly",
        }
    }

    /// Unit used in listings, as in "반복: 2주마다".
    pub fn label(&self) -> &'static str {
        match self {
            RepeatType::None => "반복 없음",
            RepeatType::Daily => "일",
            RepeatType::Weekly => "주",
            RepeatType::Monthly => "월",
            RepeatType::Yearly => "년",
        }
    }
}

impl fmt::Display for RepeatType {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for RepeatType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "none" => Ok(RepeatType::None),
            "daily" => Ok(RepeatType::Daily),
            "weekly" => Ok(RepeatType::Weekly),
            "monthly" => Ok(RepeatType::Monthly),
            "yearly" => Ok(RepeatType::Yearly),
            other => Err(format!(
                "알 수 없는 반복 유형 '{}'. none, daily, weekly, monthly, yearly 중 하나를 입력하세요.",
                other
            )),
        }
    }
}

impl Event {
    /// Local wall-clock instant at which the event starts.
    pub fn start_datetime(&self) -> NaiveDateTime {
        self.date.and_time(self.start_time)
    }

    pub fn time_range(&self) -> TimeRange {
        TimeRange::new(self.date, self.start_time, self.end_time)
    }

    /// Strip the id, e.g. to edit the event and save it back.
    pub fn to_form(&self) -> EventForm {
        EventForm {
            title: self.title.clone(),
            date: self.date,
            start_time: self.start_time,
            end_time: self.end_time,
            description: self.description.clone(),
            location: self.location.clone(),
            category: self.category.clone(),
            repeat: self.repeat.clone(),
            notification_time: self.notification_time,
        }
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.title)
    }
}

impl EventForm {
    pub fn new(title: &str, date: NaiveDate, start_time: NaiveTime, end_time: NaiveTime) -> Self {
        EventForm {
            title: title.to_string(),
            date,
            start_time,
            end_time,
            description: String::new(),
            location: String::new(),
            category: String::new(),
            repeat: RepeatInfo::none(),
            notification_time: 10,
        }
    }

    pub fn time_range(&self) -> TimeRange {
        TimeRange::new(self.date, self.start_time, self.end_time)
    }

    pub fn into_event(self, id: impl Into<String>) -> Event {
        Event {
            id: id.into(),
            title: self.title,
            date: self.date,
            start_time: self.start_time,
            end_time: self.end_time,
            description: self.description,
            location: self.location,
            category: self.category,
            repeat: self.repeat,
            notification_time: self.notification_time,
        }
    }

    /// Check the form before it is handed to a store.
    pub fn validate(&self) -> DaybookResult<()> {
        if self.title.trim().is_empty() {
            return Err(DaybookError::Validation(REQUIRED_FIELDS_MESSAGE.into()));
        }

        if let Some(message) = time_error_message(self.start_time, self.end_time) {
            return Err(DaybookError::Validation(message.into()));
        }

        if self.repeat.is_repeating() {
            if self.repeat.interval == 0 {
                return Err(DaybookError::Validation(INTERVAL_MESSAGE.into()));
            }
            if let Some(end_date) = self.repeat.end_date {
                if end_date < self.date {
                    return Err(DaybookError::Validation(REPEAT_END_MESSAGE.into()));
                }
            }
        }

        Ok(())
    }
}

/// Error message for an invalid start/end pair, if any.
/// Equal times are allowed (zero-length event).
pub fn time_error_message(start: NaiveTime, end: NaiveTime) -> Option<&'static str> {
    (end < start).then_some(END_BEFORE_START_MESSAGE)
}

/// Parse `YYYY-MM-DD`.
pub fn parse_date(s: &str) -> DaybookResult<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), DATE_FORMAT).map_err(|_| {
        DaybookError::Validation(format!("잘못된 날짜 '{}'. YYYY-MM-DD 형식으로 입력하세요.", s))
    })
}

/// Parse `HH:MM` (24-hour).
pub fn parse_time(s: &str) -> DaybookResult<NaiveTime> {
    NaiveTime::parse_from_str(s.trim(), TIME_FORMAT)
        .map_err(|_| DaybookError::Validation(format!("잘못된 시간 '{}'. HH:MM 형식으로 입력하세요.", s)))
}

/// Format a time as `HH:MM`.
pub fn format_time(time: NaiveTime) -> String {
    time.format(TIME_FORMAT).to_string()
}

/// serde adapter for `HH:MM` times.
mod hhmm {
    use chrono::NaiveTime;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(time: &NaiveTime, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&super::format_time(*time))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<NaiveTime, D::Error> {
        let raw = String::deserialize(deserializer)?;
        super::parse_time(&raw).map_err(serde::de::Error::custom)
    }
}
