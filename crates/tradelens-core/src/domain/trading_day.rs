use std::fmt::{Display, Formatter};

use serde::de::Error as DeError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use time::format_description::BorrowedFormatItem;
use time::macros::format_description;
use time::{Date, Duration, OffsetDateTime};

use crate::ValidationError;

const ISO_DATE: &[BorrowedFormatItem<'static>] = format_description!("[year]-[month]-[day]");

/// Calendar date of a trading-day observation, with no time-of-day component.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TradingDay(Date);

impl TradingDay {
    pub fn new(date: Date) -> Self {
        Self(date)
    }

    pub fn today() -> Self {
        Self(OffsetDateTime::now_utc().date())
    }

    pub fn parse(input: &str) -> Result<Self, ValidationError> {
        Date::parse(input.trim(), ISO_DATE)
            .map(Self)
            .map_err(|_| ValidationError::InvalidDate {
                value: input.to_owned(),
            })
    }

    pub fn from_unix_timestamp(value: i64) -> Result<Self, ValidationError> {
        OffsetDateTime::from_unix_timestamp(value)
            .map(|dt| Self(dt.date()))
            .map_err(|_| ValidationError::InvalidTimestamp { value })
    }

    pub fn into_inner(self) -> Date {
        self.0
    }

    /// Seconds since the Unix epoch at midnight UTC of this date.
    pub fn unix_midnight(self) -> i64 {
        self.0.midnight().assume_utc().unix_timestamp()
    }

    /// Whole days between this date and an earlier one (negative if `earlier`
    /// is actually later).
    pub fn days_since(self, earlier: Self) -> i64 {
        (self.0 - earlier.0).whole_days()
    }

    pub fn plus_days(self, days: i64) -> Self {
        Self(self.0.saturating_add(Duration::days(days)))
    }

    /// The same month/day `years` calendar years earlier.
    ///
    /// A Feb 29 anniversary landing in a non-leap year clamps to Feb 28.
    pub fn years_earlier(self, years: u32) -> Self {
        let year = self.0.year() - years as i32;
        let mut day = self.0.day();
        loop {
            match Date::from_calendar_date(year, self.0.month(), day) {
                Ok(date) => return Self(date),
                Err(_) => day -= 1,
            }
        }
    }

    pub fn format_iso(self) -> String {
        self.0
            .format(ISO_DATE)
            .expect("TradingDay must be ISO formattable")
    }
}

impl Display for TradingDay {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.format_iso())
    }
}

impl Serialize for TradingDay {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.format_iso())
    }
}

impl<'de> Deserialize<'de> for TradingDay {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = String::deserialize(deserializer)?;
        Self::parse(&value).map_err(D::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_iso_date() {
        let parsed = TradingDay::parse("2020-01-04").expect("must parse");
        assert_eq!(parsed.format_iso(), "2020-01-04");
    }

    #[test]
    fn rejects_malformed_date() {
        let err = TradingDay::parse("04/01/2020").expect_err("must fail");
        assert!(matches!(err, ValidationError::InvalidDate { .. }));
    }

    #[test]
    fn day_delta_is_signed() {
        let earlier = TradingDay::parse("2020-01-01").expect("must parse");
        let later = TradingDay::parse("2020-01-04").expect("must parse");
        assert_eq!(later.days_since(earlier), 3);
        assert_eq!(earlier.days_since(later), -3);
    }

    #[test]
    fn anniversary_preserves_month_and_day() {
        let day = TradingDay::parse("2025-07-04").expect("must parse");
        assert_eq!(day.years_earlier(5).format_iso(), "2020-07-04");
    }

    #[test]
    fn leap_day_anniversary_clamps_to_feb_28() {
        let day = TradingDay::parse("2024-02-29").expect("must parse");
        assert_eq!(day.years_earlier(1).format_iso(), "2023-02-28");
        assert_eq!(day.years_earlier(4).format_iso(), "2020-02-29");
    }

    #[test]
    fn serializes_as_iso_string() {
        let day = TradingDay::parse("2021-12-31").expect("must parse");
        let json = serde_json::to_string(&day).expect("must serialize");
        assert_eq!(json, "\"2021-12-31\"");
        let back: TradingDay = serde_json::from_str(&json).expect("must deserialize");
        assert_eq!(back, day);
    }
}
