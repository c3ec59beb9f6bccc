use std::str::FromStr;

use chrono::{Datelike, NaiveDate};

use crate::consts::{MIN_DAY, TITLE_SEPARATOR};
use crate::prelude::*;
use crate::types::{Month, Year, days_in_month};
use crate::ParseError;

/// The year and month currently shown by a picker panel.
///
/// Independent of any selected date. Ordered chronologically.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display)]
#[display(fmt = "{year}-{month}")]
pub struct TitleDate {
    // Field order drives the derived ordering: year first.
    year:  Year,
    month: Month,
}

impl TitleDate {
    pub const fn new(year: Year, month: Month) -> Self {
        Self { year, month }
    }

    /// Builds a title date from raw numbers.
    ///
    /// # Errors
    /// Returns `ParseError::InvalidYear` or `ParseError::InvalidMonth` when a
    /// component is out of range.
    pub fn from_parts(year: u16, month: u8) -> Result<Self, ParseError> {
        Ok(Self::new(Year::new(year)?, Month::new(month)?))
    }

    pub const fn year(&self) -> Year {
        self.year
    }

    pub const fn month(&self) -> Month {
        self.month
    }

    pub const fn days_in_month(&self) -> u8 {
        days_in_month(self.year.get(), self.month.get())
    }

    /// The 1st of the displayed month.
    pub fn first_day(&self) -> NaiveDate {
        // Every Year/Month pair in range is a valid chrono date.
        NaiveDate::from_ymd_opt(self.year.into(), self.month.into(), u32::from(MIN_DAY))
            .unwrap_or(NaiveDate::MIN)
    }

    /// Whether `date` falls inside the displayed month.
    pub fn contains(&self, date: NaiveDate) -> bool {
        i32::from(self.year) == date.year() && u32::from(self.month) == date.month()
    }
}

impl TryFrom<NaiveDate> for TitleDate {
    type Error = ParseError;

    fn try_from(date: NaiveDate) -> Result<Self, Self::Error> {
        let year = Year::try_from(date.year())?;
        let month = Month::try_from(date.month())?;
        Ok(Self::new(year, month))
    }
}

impl FromStr for TitleDate {
    type Err = ParseError;

    /// Parses the `YYYY-MM` text form.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(ParseError::EmptyInput);
        }

        let (year, month) = trimmed
            .split_once(TITLE_SEPARATOR)
            .ok_or_else(|| ParseError::InvalidFormat(trimmed.to_owned()))?;
        if month.contains(TITLE_SEPARATOR) {
            return Err(ParseError::InvalidFormat(trimmed.to_owned()));
        }

        let year = year
            .trim()
            .parse::<u16>()
            .map_err(|_| ParseError::InvalidFormat(year.to_owned()))?;
        let month = month
            .trim()
            .parse::<u8>()
            .map_err(|_| ParseError::InvalidFormat(month.to_owned()))?;

        Self::from_parts(year, month)
    }
}

impl serde::Serialize for TitleDate {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> serde::Deserialize<'de> for TitleDate {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn title(year: u16, month: u8) -> TitleDate {
        TitleDate::from_parts(year, month).unwrap()
    }

    #[test]
    fn test_from_parts_validates() {
        assert!(TitleDate::from_parts(2024, 2).is_ok());
        assert!(matches!(
            TitleDate::from_parts(0, 2),
            Err(ParseError::InvalidYear(0))
        ));
        assert!(matches!(
            TitleDate::from_parts(2024, 13),
            Err(ParseError::InvalidMonth(13))
        ));
    }

    #[test]
    fn test_display() {
        assert_eq!(title(2024, 2).to_string(), "2024-02");
        assert_eq!(title(987, 11).to_string(), "0987-11");
    }

    #[test]
    fn test_parse() {
        assert_eq!("2024-02".parse::<TitleDate>().unwrap(), title(2024, 2));
        assert_eq!(" 2023 - 12 ".parse::<TitleDate>().unwrap(), title(2023, 12));
    }

    #[test]
    fn test_parse_errors() {
        assert!(matches!(
            "".parse::<TitleDate>(),
            Err(ParseError::EmptyInput)
        ));
        assert!(matches!(
            "2024".parse::<TitleDate>(),
            Err(ParseError::InvalidFormat(_))
        ));
        assert!(matches!(
            "2024-02-01".parse::<TitleDate>(),
            Err(ParseError::InvalidFormat(_))
        ));
        assert!(matches!(
            "2024-XX".parse::<TitleDate>(),
            Err(ParseError::InvalidFormat(_))
        ));
        assert!(matches!(
            "2024-00".parse::<TitleDate>(),
            Err(ParseError::InvalidMonth(0))
        ));
    }

    #[test]
    fn test_ordering_is_chronological() {
        assert!(title(2023, 12) < title(2024, 1));
        assert!(title(2024, 1) < title(2024, 2));
        assert!(title(2024, 11) > title(2023, 12));
    }

    #[test]
    fn test_first_day_and_contains() {
        let t = title(2024, 2);
        let first = t.first_day();
        assert_eq!(first, NaiveDate::from_ymd_opt(2024, 2, 1).unwrap());
        assert!(t.contains(NaiveDate::from_ymd_opt(2024, 2, 29).unwrap()));
        assert!(!t.contains(NaiveDate::from_ymd_opt(2024, 3, 1).unwrap()));
        assert!(!t.contains(NaiveDate::from_ymd_opt(2023, 2, 1).unwrap()));
    }

    #[test]
    fn test_days_in_month_is_leap_aware() {
        assert_eq!(title(2024, 2).days_in_month(), 29);
        assert_eq!(title(2023, 2).days_in_month(), 28);
        assert_eq!(title(2023, 4).days_in_month(), 30);
    }

    #[test]
    fn test_try_from_naive_date() {
        let date = NaiveDate::from_ymd_opt(2023, 12, 25).unwrap();
        assert_eq!(TitleDate::try_from(date).unwrap(), title(2023, 12));

        let too_late = NaiveDate::from_ymd_opt(10_000, 1, 1).unwrap();
        assert_eq!(
            TitleDate::try_from(too_late),
            Err(ParseError::InvalidYear(10_000))
        );

        let far_future = NaiveDate::from_ymd_opt(70_000, 1, 1).unwrap();
        assert_eq!(
            TitleDate::try_from(far_future),
            Err(ParseError::YearOutOfRange(70_000))
        );
    }

    #[test]
    fn test_serde_string_format() {
        let t = title(2024, 2);
        let json = serde_json::to_string(&t).unwrap();
        assert_eq!(json, r#""2024-02""#);
        let parsed: TitleDate = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, t);

        let result: Result<TitleDate, _> = serde_json::from_str(r#""2024-13""#);
        assert!(result.is_err());
    }
}
