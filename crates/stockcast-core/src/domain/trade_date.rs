use std::fmt::{Display, Formatter};

use serde::de::Error as DeError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use time::format_description::BorrowedFormatItem;
use time::macros::format_description;
use time::{Date, Duration};

use crate::ValidationError;

/// `DD-MM-YYYY`, the layout written to output files.
const DATE_FORMAT: &[BorrowedFormatItem<'static>] = format_description!("[day]-[month]-[year]");

/// Accepts `D-M-YYYY` as well as the zero-padded form.
const PARSE_FORMAT: &[BorrowedFormatItem<'static>] =
    format_description!("[day padding:none]-[month padding:none]-[year]");

/// Calendar date of a price point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TradeDate(Date);

impl TradeDate {
    pub fn parse(input: &str) -> Result<Self, ValidationError> {
        let trimmed = input.trim();
        Date::parse(trimmed, PARSE_FORMAT)
            .map(Self)
            .map_err(|_| ValidationError::InvalidTimestamp {
                value: trimmed.to_owned(),
            })
    }

    pub const fn from_date(date: Date) -> Self {
        Self(date)
    }

    pub const fn into_inner(self) -> Date {
        self.0
    }

    /// Calendar date `days` after this one.
    pub fn plus_days(self, days: i64) -> Result<Self, ValidationError> {
        self.0
            .checked_add(Duration::days(days))
            .map(Self)
            .ok_or_else(|| ValidationError::DateOutOfRange {
                date: self.format(),
                days,
            })
    }

    /// Whole days from `earlier` to `self`; negative when `earlier` is later.
    pub fn days_since(self, earlier: Self) -> i64 {
        (self.0 - earlier.0).whole_days()
    }

    pub fn format(self) -> String {
        self.0
            .format(DATE_FORMAT)
            .expect("calendar dates are always formattable as DD-MM-YYYY")
    }
}

impl Display for TradeDate {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.format())
    }
}

impl Serialize for TradeDate {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.format())
    }
}

impl<'de> Deserialize<'de> for TradeDate {
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
    fn parses_day_first_dates() {
        let parsed = TradeDate::parse("05-09-2023").expect("must parse");
        assert_eq!(parsed.format(), "05-09-2023");
    }

    #[test]
    fn accepts_unpadded_day_and_month() {
        let parsed = TradeDate::parse("5-9-2023").expect("must parse");
        assert_eq!(parsed.format(), "05-09-2023");
        let mixed = TradeDate::parse("15-3-2024").expect("must parse");
        assert_eq!(mixed.format(), "15-03-2024");
    }

    #[test]
    fn rejects_iso_dates() {
        let err = TradeDate::parse("2023-09-05").expect_err("must fail");
        assert!(matches!(err, ValidationError::InvalidTimestamp { .. }));
    }

    #[test]
    fn advances_across_month_and_year_ends() {
        let date = TradeDate::parse("30-12-2023").expect("must parse");
        assert_eq!(date.plus_days(1).expect("in range").format(), "31-12-2023");
        assert_eq!(date.plus_days(2).expect("in range").format(), "01-01-2024");
    }

    #[test]
    fn handles_leap_day() {
        let date = TradeDate::parse("28-02-2024").expect("must parse");
        assert_eq!(date.plus_days(1).expect("in range").format(), "29-02-2024");
        assert_eq!(date.plus_days(2).expect("in range").format(), "01-03-2024");
    }

    #[test]
    fn counts_days_between_dates() {
        let start = TradeDate::parse("01-03-2024").expect("must parse");
        let end = TradeDate::parse("11-03-2024").expect("must parse");
        assert_eq!(end.days_since(start), 10);
        assert_eq!(start.days_since(end), -10);
    }
}
