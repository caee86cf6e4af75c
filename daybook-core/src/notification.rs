//! Reminder timing.
//!
//! [`upcoming_events`] is a pure check that can run on every tick. The
//! caller keeps the set of ids already notified; [`Notifier`] is that caller
//! state packaged up for the notification loop.

use std::collections::HashSet;

use chrono::{Duration, NaiveDateTime};

use crate::clock::Clock;
use crate::event::Event;

/// A reminder that has fired and is waiting to be dismissed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub id: String,
    pub message: String,
}

/// Events whose reminder is due at `now` and hasn't fired yet.
///
/// An event is due when it starts strictly after `now` and no more than
/// `notification_time` minutes later. A lead time of 0 is never due.
pub fn upcoming_events<'a>(
    events: &'a [Event],
    now: NaiveDateTime,
    notified_ids: &HashSet<String>,
) -> Vec<&'a Event> {
    events
        .iter()
        .filter(|event| {
            let until_start = event.start_datetime() - now;
            until_start > Duration::zero()
                && until_start <= Duration::minutes(i64::from(event.notification_time))
                && !notified_ids.contains(&event.id)
        })
        .collect()
}

/// e.g. "10분 후 팀 회의 일정이 시작됩니다."
pub fn notification_message(event: &Event) -> String {
    format!(
        "{}분 후 {} 일정이 시작됩니다.",
        event.notification_time, event.title
    )
}

/// Notified ids plus the notifications currently on screen.
#[derive(Debug, Default)]
pub struct Notifier {
    notified: HashSet<String>,
    notifications: Vec<Notification>,
}

impl Notifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start with ids that were already notified, e.g. in an earlier run.
    pub fn with_notified(notified: HashSet<String>) -> Self {
        Notifier {
            notified,
            notifications: Vec::new(),
        }
    }

    /// Fire reminders due at `now`. Returns only the newly fired ones;
    /// an id is never fired twice.
    pub fn check(&mut self, events: &[Event], now: NaiveDateTime) -> Vec<Notification> {
        let fired: Vec<Notification> = upcoming_events(events, now, &self.notified)
            .into_iter()
            .map(|event| Notification {
                id: event.id.clone(),
                message: notification_message(event),
            })
            .collect();

        for notification in &fired {
            tracing::debug!(id = %notification.id, "reminder fired");
            self.notified.insert(notification.id.clone());
        }
        self.notifications.extend(fired.iter().cloned());

        fired
    }

    /// [`check`](Self::check) against the clock's current time.
    pub fn tick(&mut self, events: &[Event], clock: &impl Clock) -> Vec<Notification> {
        self.check(events, clock.now())
    }

    /// Remove the notification at `index` from the visible list.
    /// Its id stays notified.
    pub fn dismiss(&mut self, index: usize) -> Option<Notification> {
        (index < self.notifications.len()).then(|| self.notifications.remove(index))
    }

    /// Dismiss every visible notification whose event has started by `now`
    /// or no longer exists. Returns the dismissed ones.
    pub fn dismiss_started(&mut self, events: &[Event], now: NaiveDateTime) -> Vec<Notification> {
        let mut dismissed = Vec::new();
        let mut index = 0;
        while index < self.notifications.len() {
            let id = &self.notifications[index].id;
            let started = events
                .iter()
                .find(|event| &event.id == id)
                .is_none_or(|event| event.start_datetime() <= now);

            if started {
                dismissed.extend(self.dismiss(index));
            } else {
                index += 1;
            }
        }
        dismissed
    }

    pub fn notifications(&self) -> &[Notification] {
        &self.notifications
    }

    pub fn notified_ids(&self) -> &HashSet<String> {
        &self.notified
    }

    pub fn is_notified(&self, id: &str) -> bool {
        self.notified.contains(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::FixedClock;
    use crate::event::EventForm;
    use chrono::{NaiveDate, NaiveTime};

    fn at(y: i32, m: u32, d: u32, h: u32, min: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(h, min, 0)
            .unwrap()
    }

    fn event(id: &str, title: &str, date: NaiveDate, start: u32, lead: u32) -> Event {
        let mut form = EventForm::new(
            title,
            date,
            NaiveTime::from_hms_opt(start, 0, 0).unwrap(),
            NaiveTime::from_hms_opt(start + 1, 0, 0).unwrap(),
        );
        form.notification_time = lead;
        form.into_event(id)
    }

    fn fixture() -> Vec<Event> {
        vec![
            event("1", "팀 회의", NaiveDate::from_ymd_opt(2024, 11, 3).unwrap(), 13, 10),
            event("2", "Harry와 1-on-1", NaiveDate::from_ymd_opt(2024, 11, 5).unwrap(), 15, 10),
        ]
    }

    #[test]
    fn due_event_is_returned() {
        let events = fixture();
        let due = upcoming_events(&events, at(2024, 11, 3, 12, 50), &HashSet::new());
        assert_eq!(due.len(), 1);
        assert_eq!(due[0].id, "1");
    }

    #[test]
    fn already_notified_events_are_skipped() {
        let events = fixture();
        let notified: HashSet<String> = ["1".to_string()].into();
        assert!(upcoming_events(&events, at(2024, 11, 3, 12, 50), &notified).is_empty());
    }

    #[test]
    fn nothing_due_before_the_lead_window() {
        let events = fixture();
        assert!(upcoming_events(&events, at(2024, 11, 1, 9, 40), &HashSet::new()).is_empty());
        assert!(upcoming_events(&events, at(2024, 11, 3, 12, 49), &HashSet::new()).is_empty());
    }

    #[test]
    fn nothing_due_once_started() {
        let events = fixture();
        assert!(upcoming_events(&events, at(2024, 11, 3, 13, 0), &HashSet::new()).is_empty());
        assert!(upcoming_events(&events, at(2024, 11, 3, 13, 30), &HashSet::new()).is_empty());
    }

    #[test]
    fn zero_lead_time_never_fires() {
        let events = vec![event("1", "x", NaiveDate::from_ymd_opt(2024, 11, 3).unwrap(), 13, 0)];
        assert!(upcoming_events(&events, at(2024, 11, 3, 12, 59), &HashSet::new()).is_empty());
    }

    #[test]
    fn message_text() {
        assert_eq!(
            notification_message(&fixture()[0]),
            "10분 후 팀 회의 일정이 시작됩니다."
        );
    }

    #[test]
    fn notifier_fires_once_per_event() {
        let events = vec![event(
            "1",
            "팀 회의",
            NaiveDate::from_ymd_opt(2024, 10, 15).unwrap(),
            10,
            10,
        )];
        let mut notifier = Notifier::new();

        assert!(notifier.check(&events, at(2024, 10, 15, 9, 49)).is_empty());
        assert!(notifier.notifications().is_empty());

        let clock = FixedClock(at(2024, 10, 15, 9, 51));
        let fired = notifier.tick(&events, &clock);
        assert_eq!(
            fired,
            vec![Notification {
                id: "1".into(),
                message: "10분 후 팀 회의 일정이 시작됩니다.".into(),
            }]
        );

        assert!(notifier.tick(&events, &clock).is_empty());
        assert_eq!(notifier.notifications().len(), 1);
        assert!(notifier.is_notified("1"));
    }

    #[test]
    fn dismiss_keeps_event_notified() {
        let events = fixture();
        let mut notifier = Notifier::new();
        notifier.check(&events, at(2024, 11, 3, 12, 55));

        assert!(notifier.dismiss(3).is_none());
        assert_eq!(notifier.dismiss(0).map(|n| n.id), Some("1".to_string()));
        assert!(notifier.notifications().is_empty());

        assert!(notifier.check(&events, at(2024, 11, 3, 12, 56)).is_empty());
        assert!(notifier.notified_ids().contains("1"));
    }

    #[test]
    fn started_events_are_dismissed() {
        let events = fixture();
        let mut notifier = Notifier::new();
        notifier.check(&events, at(2024, 11, 3, 12, 55));
        notifier.check(&events, at(2024, 11, 5, 14, 55));
        assert_eq!(notifier.notifications().len(), 2);

        assert!(notifier.dismiss_started(&events, at(2024, 11, 3, 12, 59)).is_empty());

        let dismissed = notifier.dismiss_started(&events, at(2024, 11, 3, 13, 0));
        assert_eq!(dismissed.len(), 1);
        assert_eq!(dismissed[0].id, "1");
        assert_eq!(notifier.notifications()[0].id, "2");

        // A deleted event's reminder goes too
        assert_eq!(notifier.dismiss_started(&[], at(2024, 11, 3, 13, 0)).len(), 1);
        assert!(notifier.notifications().is_empty());
        assert!(notifier.is_notified("1") && notifier.is_notified("2"));
    }

    #[test]
    fn previously_notified_ids_do_not_fire_again() {
        let events = fixture();
        let mut notifier = Notifier::with_notified(["1".to_string()].into());
        assert!(notifier.check(&events, at(2024, 11, 3, 12, 55)).is_empty());
        assert!(notifier.notifications().is_empty());
    }
}
