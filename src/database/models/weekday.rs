use anyhow::{anyhow, Result};
use chrono::NaiveDate;

use crate::utils::datetime::weekday_index;

const RUSSIAN_WEEKDAYS: [&str; 7] = [
    "понедельник",
    "вторник",
    "среда",
    "четверг",
    "пятница",
    "суббота",
    "воскресенье",
];

/// Weekday names used as keys of the lesson schedule, Monday first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WeekdayNames {
    names: [String; 7],
}

impl Default for WeekdayNames {
    fn default() -> Self {
        Self {
            names: RUSSIAN_WEEKDAYS.map(str::to_string),
        }
    }
}

impl WeekdayNames {
    /// Parses seven comma-separated names, Monday through Sunday.
    pub fn parse(list: &str) -> Result<Self> {
        let names: Vec<String> = list
            .split(',')
            .map(|name| name.trim().to_lowercase())
            .collect();

        if names.iter().any(|name| name.is_empty()) {
            return Err(anyhow!("WEEKDAY_NAMES contains an empty name"));
        }

        let names: [String; 7] = names
            .try_into()
            .map_err(|_| anyhow!("WEEKDAY_NAMES must list exactly 7 names"))?;

        for (i, name) in names.iter().enumerate() {
            if names[..i].contains(name) {
                return Err(anyhow!("WEEKDAY_NAMES contains '{}' twice", name));
            }
        }

        Ok(Self { names })
    }

    pub fn name_for(&self, date: &NaiveDate) -> &str {
        &self.names[weekday_index(date)]
    }

    pub fn contains(&self, name: &str) -> bool {
        self.names.iter().any(|n| n == name)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }
}
