//! Weekday index.
//!
//! Maps weekday symbols to ordinals with Sunday as day zero, the convention
//! the recurrence rules use for week boundaries.

use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};

use crate::error::EngineError;

/// Day of the week as named in recurrence rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DayOfWeek {
    Sunday,
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
}

impl DayOfWeek {
    /// All days, Sunday first.
    pub const ALL: [Self; 7] = [
        Self::Sunday,
        Self::Monday,
        Self::Tuesday,
        Self::Wednesday,
        Self::Thursday,
        Self::Friday,
        Self::Saturday,
    ];

    /// Ordinal of the day, Sunday = 0 through Saturday = 6.
    #[must_use]
    pub const fn index(self) -> u8 {
        match self {
            Self::Sunday => 0,
            Self::Monday => 1,
            Self::Tuesday => 2,
            Self::Wednesday => 3,
            Self::Thursday => 4,
            Self::Friday => 5,
            Self::Saturday => 6,
        }
    }

    /// Inverse of [`DayOfWeek::index`].
    #[must_use]
    pub const fn from_index(index: u8) -> Option<Self> {
        match index {
            0 => Some(Self::Sunday),
            1 => Some(Self::Monday),
            2 => Some(Self::Tuesday),
            3 => Some(Self::Wednesday),
            4 => Some(Self::Thursday),
            5 => Some(Self::Friday),
            6 => Some(Self::Saturday),
            _ => None,
        }
    }

    /// Weekday of a calendar date.
    #[must_use]
    pub fn of(date: NaiveDate) -> Self {
        Self::from(date.weekday())
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Sunday => "sunday",
            Self::Monday => "monday",
            Self::Tuesday => "tuesday",
            Self::Wednesday => "wednesday",
            Self::Thursday => "thursday",
            Self::Friday => "friday",
            Self::Saturday => "saturday",
        }
    }
}

impl From<Weekday> for DayOfWeek {
    fn from(weekday: Weekday) -> Self {
        match weekday {
            Weekday::Sun => Self::Sunday,
            Weekday::Mon => Self::Monday,
            Weekday::Tue => Self::Tuesday,
            Weekday::Wed => Self::Wednesday,
            Weekday::Thu => Self::Thursday,
            Weekday::Fri => Self::Friday,
            Weekday::Sat => Self::Saturday,
        }
    }
}

impl From<DayOfWeek> for Weekday {
    fn from(day: DayOfWeek) -> Self {
        match day {
            DayOfWeek::Sunday => Self::Sun,
            DayOfWeek::Monday => Self::Mon,
            DayOfWeek::Tuesday => Self::Tue,
            DayOfWeek::Wednesday => Self::Wed,
            DayOfWeek::Thursday => Self::Thu,
            DayOfWeek::Friday => Self::Fri,
            DayOfWeek::Saturday => Self::Sat,
        }
    }
}

impl fmt::Display for DayOfWeek {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DayOfWeek {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|day| day.as_str() == needle)
            .ok_or_else(|| EngineError::UnknownWeekday(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn index_is_sunday_based() {
        assert_eq!(DayOfWeek::Sunday.index(), 0);
        assert_eq!(DayOfWeek::Wednesday.index(), 3);
        assert_eq!(DayOfWeek::Saturday.index(), 6);
    }

    #[test]
    fn index_matches_chrono() {
        for day in DayOfWeek::ALL {
            let weekday = Weekday::from(day);
            assert_eq!(u32::from(day.index()), weekday.num_days_from_sunday());
            assert_eq!(DayOfWeek::from_index(day.index()), Some(day));
        }
        assert_eq!(DayOfWeek::from_index(7), None);
    }

    #[test]
    fn weekday_of_date() {
        let monday = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        assert_eq!(DayOfWeek::of(monday), DayOfWeek::Monday);
        let sunday = NaiveDate::from_ymd_opt(2024, 1, 7).unwrap();
        assert_eq!(DayOfWeek::of(sunday), DayOfWeek::Sunday);
    }

    #[test]
    fn parse_symbols() {
        assert_eq!("friday".parse::<DayOfWeek>().unwrap(), DayOfWeek::Friday);
        assert_eq!(" Tuesday ".parse::<DayOfWeek>().unwrap(), DayOfWeek::Tuesday);
        assert!(matches!(
            "funday".parse::<DayOfWeek>(),
            Err(EngineError::UnknownWeekday(_))
        ));
    }

    #[test]
    fn serde_uses_lowercase_symbols() {
        let json = serde_json::to_string(&DayOfWeek::Thursday).unwrap();
        assert_eq!(json, "\"thursday\"");
        let day: DayOfWeek = serde_json::from_str("\"saturday\"").unwrap();
        assert_eq!(day, DayOfWeek::Saturday);
    }
}
