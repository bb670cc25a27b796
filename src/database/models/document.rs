use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::weekday::WeekdayNames;

/// One user's events: `DD.MM.YYYY` -> sorted `"HH:MM — description"` lines
pub type UserCalendar = BTreeMap<String, Vec<String>>;

/// The whole persisted document.
///
/// On disk the user calendars sit at the top level next to `schedule`,
/// keyed by the decimal Telegram user id.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleDocument {
    #[serde(default)]
    pub schedule: BTreeMap<String, Vec<String>>,
    #[serde(flatten)]
    pub users: BTreeMap<String, UserCalendar>,
}

impl ScheduleDocument {
    /// Document with an empty lesson list for every weekday and no users
    pub fn with_weekdays(weekdays: &WeekdayNames) -> Self {
        Self {
            schedule: weekdays
                .iter()
                .map(|day| (day.to_string(), Vec::new()))
                .collect(),
            users: BTreeMap::new(),
        }
    }

    /// Appends an event line and keeps the day's list sorted.
    pub fn add_event(&mut self, user_id: &str, date: &str, entry: String) {
        let events = self
            .users
            .entry(user_id.to_string())
            .or_default()
            .entry(date.to_string())
            .or_default();
        events.push(entry);
        events.sort();
    }

    pub fn lessons_for(&self, weekday: &str) -> &[String] {
        self.schedule
            .get(weekday)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    pub fn events_for(&self, user_id: &str, date: &str) -> &[String] {
        self.users
            .get(user_id)
            .and_then(|calendar| calendar.get(date))
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Replaces the lesson list of one weekday
    pub fn set_lessons(&mut self, weekday: &str, lessons: Vec<String>) {
        self.schedule.insert(weekday.to_string(), lessons);
    }

    pub fn event_count(&self) -> usize {
        self.users
            .values()
            .flat_map(|calendar| calendar.values())
            .map(Vec::len)
            .sum()
    }
}
