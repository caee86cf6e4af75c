//! Calendar view mode and navigation between periods.

use std::fmt;
use std::str::FromStr;

use chrono::{Days, Months, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::date_grid::first_of_month;

/// Granularity of the displayed calendar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CalendarView {
    Week,
    #[default]
    Month,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Prev,
    Next,
}

impl fmt::Display for CalendarView {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            CalendarView::Week => write!(f, "week"),
            CalendarView::Month => write!(f, "month"),
        }
    }
}

impl FromStr for CalendarView {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "week" => Ok(CalendarView::Week),
            "month" => Ok(CalendarView::Month),
            other => Err(format!("알 수 없는 보기 '{}'. week 또는 month를 입력하세요.", other)),
        }
    }
}

/// Move the reference date one period back or forward.
///
/// Week view moves by seven days. Month view lands on the first day of the
/// previous or next month. At the edges of the representable calendar the
/// date stays where it is.
pub fn navigate(date: NaiveDate, view: CalendarView, direction: Direction) -> NaiveDate {
    match (view, direction) {
        (CalendarView::Week, Direction::Prev) => {
            date.checked_sub_days(Days::new(7)).unwrap_or(date)
        }
        (CalendarView::Week, Direction::Next) => {
            date.checked_add_days(Days::new(7)).unwrap_or(date)
        }
        (CalendarView::Month, Direction::Prev) => {
            let first = first_of_month(date);
            first.checked_sub_months(Months::new(1)).unwrap_or(first)
        }
        (CalendarView::Month, Direction::Next) => {
            let first = first_of_month(date);
            first.checked_add_months(Months::new(1)).unwrap_or(first)
        }
    }
}
