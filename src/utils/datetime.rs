use chrono::{Datelike, NaiveDate};

/// Calendar date format used for user input and as document keys
pub const DATE_FORMAT: &str = "%d.%m.%Y";

pub fn format_date(date: &NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

/// Monday is 0, Sunday is 6
pub fn weekday_index(date: &NaiveDate) -> usize {
    date.weekday().num_days_from_monday() as usize
}
