//! Public holiday lookup for calendar cell annotation.

use std::collections::BTreeMap;

use chrono::{Datelike, NaiveDate};

/// Something that knows the holidays of a month.
pub trait HolidayLookup {
    /// Holidays falling in the month of `date`, keyed by date.
    fn holidays_for_month(&self, date: NaiveDate) -> BTreeMap<NaiveDate, String>;
}

/// Korean public holidays for 2024 and 2025.
const KOREAN_HOLIDAYS: &[((i32, u32, u32), &str)] = &[
    ((2024, 1, 1), "신정"),
    ((2024, 2, 9), "설날"),
    ((2024, 2, 10), "설날"),
    ((2024, 2, 11), "설날"),
    ((2024, 3, 1), "삼일절"),
    ((2024, 5, 5), "어린이날"),
    ((2024, 6, 6), "현충일"),
    ((2024, 8, 15), "광복절"),
    ((2024, 9, 16), "추석"),
    ((2024, 9, 17), "추석"),
    ((2024, 9, 18), "추석"),
    ((2024, 10, 3), "개천절"),
    ((2024, 10, 9), "한글날"),
    ((2024, 12, 25), "크리스마스"),
    ((2025, 1, 1), "신정"),
    ((2025, 1, 28), "설날"),
    ((2025, 1, 29), "설날"),
    ((2025, 1, 30), "설날"),
    ((2025, 3, 1), "삼일절"),
    ((2025, 5, 5), "어린이날"),
    ((2025, 6, 6), "현충일"),
    ((2025, 8, 15), "광복절"),
    ((2025, 10, 3), "개천절"),
    ((2025, 10, 5), "추석"),
    ((2025, 10, 6), "추석"),
    ((2025, 10, 7), "추석"),
    ((2025, 10, 9), "한글날"),
    ((2025, 12, 25), "크리스마스"),
];

/// Holiday table compiled into the binary.
#[derive(Debug, Clone)]
pub struct StaticHolidays {
    table: BTreeMap<NaiveDate, String>,
}

impl StaticHolidays {
    pub fn korean() -> Self {
        let table = KOREAN_HOLIDAYS
            .iter()
            .filter_map(|&((y, m, d), name)| {
                NaiveDate::from_ymd_opt(y, m, d).map(|date| (date, name.to_string()))
            })
            .collect();
        StaticHolidays { table }
    }

    pub fn from_entries(entries: impl IntoIterator<Item = (NaiveDate, String)>) -> Self {
        StaticHolidays {
            table: entries.into_iter().collect(),
        }
    }
}

impl Default for StaticHolidays {
    fn default() -> Self {
        StaticHolidays::korean()
    }
}

impl HolidayLookup for StaticHolidays {
    fn holidays_for_month(&self, date: NaiveDate) -> BTreeMap<NaiveDate, String> {
        self.table
            .iter()
            .filter(|(day, _)| day.year() == date.year() && day.month() == date.month())
            .map(|(day, name)| (*day, name.clone()))
            .collect()
    }
}
