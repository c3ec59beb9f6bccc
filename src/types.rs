use crate::ParseError;
use crate::consts::{
    CENTURY_CYCLE, DAYS_IN_MONTH, DECEMBER, FEBRUARY, FEBRUARY_DAYS_LEAP, GREGORIAN_CYCLE,
    JANUARY, LEAP_YEAR_CYCLE, MAX_MONTH, MAX_YEAR, MIN_YEAR,
};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::num::{NonZeroU8, NonZeroU16};

/// A calendar year in `MIN_YEAR..=MAX_YEAR` (1..=9999).
///
/// Grids and title dates are only ever built from a `Year`, so the year range
/// is checked once at the boundary and never again inside the core.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u16", into = "u16")]
pub struct Year(NonZeroU16);

impl Year {
    /// Creates a new Year, validating that it lies in `MIN_YEAR..=MAX_YEAR`
    ///
    /// # Errors
    /// Returns `ParseError::InvalidYear` if the value is 0 or > `MAX_YEAR`.
    pub fn new(value: u16) -> Result<Self, ParseError> {
        let non_zero = NonZeroU16::new(value).ok_or(ParseError::InvalidYear(value))?;
        if value > MAX_YEAR {
            return Err(ParseError::InvalidYear(value));
        }
        Ok(Self(non_zero))
    }

    #[inline]
    pub const fn get(self) -> u16 {
        self.0.get()
    }

    /// The following year, or `None` past `MAX_YEAR`.
    pub fn succ(self) -> Option<Self> {
        Self::new(self.get().checked_add(1)?).ok()
    }

    /// The preceding year, or `None` before `MIN_YEAR`.
    pub fn pred(self) -> Option<Self> {
        let prev = self.get().checked_sub(1)?;
        if prev < MIN_YEAR {
            return None;
        }
        Self::new(prev).ok()
    }
}

impl TryFrom<u16> for Year {
    type Error = ParseError;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl TryFrom<i32> for Year {
    type Error = ParseError;

    /// Accepts chrono's signed year representation.
    fn try_from(value: i32) -> Result<Self, Self::Error> {
        let narrowed = u16::try_from(value).map_err(|_| ParseError::YearOutOfRange(value))?;
        Self::new(narrowed)
    }
}

impl From<Year> for u16 {
    fn from(year: Year) -> Self {
        year.0.get()
    }
}

impl From<Year> for i32 {
    fn from(year: Year) -> Self {
        Self::from(year.0.get())
    }
}

impl fmt::Display for Year {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}", self.0)
    }
}

/// A month of the year in `1..=MAX_MONTH`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Month(NonZeroU8);

impl Month {
    /// Creates a new Month, validating that it's non-zero and <= `MAX_MONTH`
    ///
    /// # Errors
    /// Returns `ParseError::InvalidMonth` if the value is 0 or > `MAX_MONTH`.
    pub fn new(value: u8) -> Result<Self, ParseError> {
        let non_zero = NonZeroU8::new(value).ok_or(ParseError::InvalidMonth(value))?;
        if value > MAX_MONTH {
            return Err(ParseError::InvalidMonth(value));
        }
        Ok(Self(non_zero))
    }

    #[inline]
    pub const fn get(self) -> u8 {
        self.0.get()
    }

    /// The following month and whether the step wrapped into the next year.
    pub const fn succ(self) -> (Self, bool) {
        match self.get() {
            DECEMBER => (Self::JANUARY, true),
            m => (Self::from_raw(m + 1), false),
        }
    }

    /// The preceding month and whether the step wrapped into the previous year.
    pub const fn pred(self) -> (Self, bool) {
        match self.get() {
            JANUARY => (Self::DECEMBER, true),
            m => (Self::from_raw(m - 1), false),
        }
    }

    pub const JANUARY: Self = Self::from_raw(JANUARY);
    pub const FEBRUARY: Self = Self::from_raw(FEBRUARY);
    pub const DECEMBER: Self = Self::from_raw(DECEMBER);

    /// Only called with literals and neighbours of an existing month.
    const fn from_raw(value: u8) -> Self {
        match NonZeroU8::new(value) {
            Some(nz) => Self(nz),
            None => Self(NonZeroU8::MIN),
        }
    }
}

impl TryFrom<u8> for Month {
    type Error = ParseError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl TryFrom<u32> for Month {
    type Error = ParseError;

    /// Accepts chrono's `u32` month representation.
    fn try_from(value: u32) -> Result<Self, Self::Error> {
        let narrowed = u8::try_from(value).map_err(|_| ParseError::MonthOutOfRange(value))?;
        Self::new(narrowed)
    }
}

impl From<Month> for u8 {
    fn from(month: Month) -> Self {
        month.0.get()
    }
}

impl From<Month> for u32 {
    fn from(month: Month) -> Self {
        Self::from(month.0.get())
    }
}

impl fmt::Display for Month {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}", self.0)
    }
}

// Helper functions

/// Gregorian leap-year rule. Takes a raw year so year 0 (the December before
/// January 0001) is still answerable.
pub const fn is_leap_year(year: u16) -> bool {
    (year % LEAP_YEAR_CYCLE == 0 && year % CENTURY_CYCLE != 0) || (year % GREGORIAN_CYCLE == 0)
}

pub const fn days_in_month(year: u16, month: u8) -> u8 {
    debug_assert!(month != 0 && month <= MAX_MONTH);

    if month == FEBRUARY && is_leap_year(year) {
        FEBRUARY_DAYS_LEAP
    } else {
        DAYS_IN_MONTH[month as usize]
    }
}
