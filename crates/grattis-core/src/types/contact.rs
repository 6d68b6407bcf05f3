//! Contact records from the external store.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

/// One person row from the contact store. Read-only for this job: the
/// whole table is fetched once per run and held in memory.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Contact {
    pub id: i64,
    pub name: String,
    pub relation: String,
    pub birthday: NaiveDate,
    pub phone: String,
}

impl Contact {
    /// True when the contact's birthday falls on `today`, comparing
    /// month and day only. The birth year never participates, so a
    /// Feb 29 birthday matches only in leap years.
    pub fn is_birthday(&self, today: NaiveDate) -> bool {
        self.birthday.month() == today.month() && self.birthday.day() == today.day()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn contact(birthday: NaiveDate) -> Contact {
        Contact {
            id: 1,
            name: "Anna".into(),
            relation: "mother".into(),
            birthday,
            phone: "+15550001111".into(),
        }
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_matches_across_years() {
        let c = contact(date(2024, 6, 15));
        assert!(c.is_birthday(date(2025, 6, 15)));
        assert!(c.is_birthday(date(1999, 6, 15)));
    }

    #[test]
    fn test_day_and_month_must_both_match() {
        let c = contact(date(1990, 6, 15));
        assert!(!c.is_birthday(date(2025, 6, 16)));
        assert!(!c.is_birthday(date(2025, 7, 15)));
    }

    #[test]
    fn test_leap_day_matches_only_in_leap_years() {
        let c = contact(date(2000, 2, 29));
        assert!(c.is_birthday(date(2024, 2, 29)));
        assert!(!c.is_birthday(date(2025, 2, 28)));
        assert!(!c.is_birthday(date(2025, 3, 1)));
    }
}
