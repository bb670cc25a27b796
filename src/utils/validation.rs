use chrono::{NaiveDate, NaiveTime};

use crate::utils::errors::InputError;

/// Separator between the time and the description of a stored event
pub const EVENT_SEPARATOR: &str = " — ";

/// A validated "HH:MM description" line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventInput {
    pub time: String,
    pub description: String,
}

impl EventInput {
    /// Formats the event the way it is stored in a user's calendar
    pub fn entry(&self) -> String {
        format!("{}{}{}", self.time, EVENT_SEPARATOR, self.description)
    }
}

fn is_digits(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit())
}

/// Parses a strict `DD.MM.YYYY` date that must exist on the calendar.
pub fn parse_date(input: &str) -> Result<NaiveDate, InputError> {
    let text = input.trim();
    let invalid = || InputError::InvalidDateFormat(text.to_string());

    let parts: Vec<&str> = text.split('.').collect();
    let [day, month, year] = parts.as_slice() else {
        return Err(invalid());
    };

    if day.len() != 2 || month.len() != 2 || year.len() != 4 {
        return Err(invalid());
    }
    if !is_digits(day) || !is_digits(month) || !is_digits(year) {
        return Err(invalid());
    }

    let day: u32 = day.parse().map_err(|_| invalid())?;
    let month: u32 = month.parse().map_err(|_| invalid())?;
    let year: i32 = year.parse().map_err(|_| invalid())?;

    // The calendar starts at year 1
    if year < 1 {
        return Err(invalid());
    }

    NaiveDate::from_ymd_opt(year, month, day).ok_or_else(invalid)
}

/// Parses a strict 24-hour `HH:MM` time.
pub fn parse_time(input: &str) -> Result<NaiveTime, InputError> {
    let invalid = || InputError::InvalidTimeFormat(input.to_string());

    let Some((hours, minutes)) = input.split_once(':') else {
        return Err(invalid());
    };

    if hours.len() != 2 || minutes.len() != 2 || !is_digits(hours) || !is_digits(minutes) {
        return Err(invalid());
    }

    let hours: u32 = hours.parse().map_err(|_| invalid())?;
    let minutes: u32 = minutes.parse().map_err(|_| invalid())?;

    NaiveTime::from_hms_opt(hours, minutes, 0).ok_or_else(invalid)
}

/// Splits event text on the first run of whitespace into a time token and a
/// description. The description keeps its inner spacing.
pub fn parse_event_text(input: &str) -> Result<EventInput, InputError> {
    let text = input.trim();

    let Some((time, rest)) = text.split_once(char::is_whitespace) else {
        return Err(InputError::MalformedEventText(text.to_string()));
    };

    let description = rest.trim_start();
    if description.is_empty() {
        return Err(InputError::MalformedEventText(text.to_string()));
    }

    parse_time(time)?;

    Ok(EventInput {
        time: time.to_string(),
        description: description.to_string(),
    })
}
