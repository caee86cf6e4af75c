//! Source of "now" for time-dependent logic.

use chrono::{Local, NaiveDate, NaiveDateTime};

/// Local wall-clock time source.
pub trait Clock {
    fn now(&self) -> NaiveDateTime;

    fn today(&self) -> NaiveDate {
        self.now().date()
    }
}

/// Reads the system's local time.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> NaiveDateTime {
        Local::now().naive_local()
    }
}

/// Always returns the instant it was built with.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub NaiveDateTime);

impl Clock for FixedClock {
    fn now(&self) -> NaiveDateTime {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixed_clock_today_is_its_date() {
        let now = NaiveDate::from_ymd_opt(2024, 10, 15)
            .unwrap()
            .and_hms_opt(23, 59, 0)
            .unwrap();
        let clock = FixedClock(now);
        assert_eq!(clock.now(), now);
        assert_eq!(clock.today(), NaiveDate::from_ymd_opt(2024, 10, 15).unwrap());
    }
}
