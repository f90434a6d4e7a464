//! Night classification for stay pricing.
//!
//! Splits a stay into its individual nights and tags each night as a weekday
//! or weekend night. A night is identified by the date the guest goes to
//! sleep, so the night of Friday the 5th is a Friday night.

use chrono::{Datelike, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};

use crate::config::TariffConfig;
use crate::models::DateRange;

/// Whether a night attracts the weekend surcharge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NightKind {
    /// An ordinary night.
    Weekday,
    /// A night listed in the tariff's weekend nights.
    Weekend,
}

/// A single night of a stay.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StayNight {
    /// The date of the night.
    pub date: NaiveDate,
    /// Its day of the week.
    pub weekday: Weekday,
    /// Whether it is a weekend night.
    pub kind: NightKind,
}

/// Splits `range` into nights, ordered chronologically.
pub fn classify_nights(range: &DateRange, tariff: &TariffConfig) -> Vec<StayNight> {
    range
        .dates()
        .map(|date| {
            let weekday = date.weekday();
            let kind = if tariff.is_weekend_night(weekday) {
                NightKind::Weekend
            } else {
                NightKind::Weekday
            };
            StayNight {
                date,
                weekday,
                kind,
            }
        })
        .collect()
}

/// Counts the weekend nights in `range`.
pub fn count_weekend_nights(range: &DateRange, tariff: &TariffConfig) -> u32 {
    classify_nights(range, tariff)
        .iter()
        .filter(|n| n.kind == NightKind::Weekend)
        .count() as u32
}

/// Whole days from `today` until check-in; negative once check-in has passed.
pub fn days_until(today: NaiveDate, check_in: NaiveDate) -> i64 {
    (check_in - today).num_days()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ConfigLoader;

    fn make_date(date_str: &str) -> NaiveDate {
        NaiveDate::parse_from_str(date_str, "%Y-%m-%d").unwrap()
    }

    fn load_tariff() -> TariffConfig {
        ConfigLoader::load("./config/standard")
            .expect("Failed to load config")
            .config()
            .tariff()
            .clone()
    }

    #[test]
    fn test_friday_and_saturday_nights_are_weekend() {
        let tariff = load_tariff();
        // 2024-07-05 is a Friday
        let range = DateRange::new(make_date("2024-07-05"), make_date("2024-07-07"));
        let nights = classify_nights(&range, &tariff);

        assert_eq!(nights.len(), 2);
        assert_eq!(nights[0].weekday, Weekday::Fri);
        assert_eq!(nights[0].kind, NightKind::Weekend);
        assert_eq!(nights[1].weekday, Weekday::Sat);
        assert_eq!(nights[1].kind, NightKind::Weekend);
    }

    #[test]
    fn test_sunday_night_is_weekday() {
        let tariff = load_tariff();
        // 2024-07-07 is a Sunday
        let range = DateRange::new(make_date("2024-07-07"), make_date("2024-07-08"));
        assert_eq!(count_weekend_nights(&range, &tariff), 0);
    }

    #[test]
    fn test_full_week_has_two_weekend_nights() {
        let tariff = load_tariff();
        let range = DateRange::new(make_date("2024-07-01"), make_date("2024-07-08"));
        assert_eq!(count_weekend_nights(&range, &tariff), 2);
    }

    #[test]
    fn test_days_until_check_in() {
        assert_eq!(days_until(make_date("2024-05-01"), make_date("2024-07-05")), 65);
        assert_eq!(days_until(make_date("2024-07-06"), make_date("2024-07-05")), -1);
    }
}
