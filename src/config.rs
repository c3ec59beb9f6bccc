//! Grid configuration.

use chrono::Weekday;
use serde::{Deserialize, Serialize};

use crate::consts::MAX_GRID_ROWS;
use crate::grid::{CalendarGrid, generate_calendar_with};
use crate::title::TitleDate;

/// How rows of a calendar grid are numbered.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WeekNumbering {
    /// Rows count up from 1 at the top of the grid.
    #[default]
    Sequential,
    /// ISO 8601 week of the Thursday in each row.
    Iso,
}

/// Error type for configuration validation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    /// More rows requested than any month can fill.
    #[error("min_rows must be at most {max}, got {min_rows}")]
    InvalidMinRows { min_rows: u8, max: u8 },
}

/// Layout settings for calendar grids.
///
/// ```
/// use chrono::Weekday;
/// use date_picker_core::{CalendarConfig, WeekNumbering};
///
/// let config = CalendarConfig::default()
///     .with_first_day_of_week(Weekday::Sun)
///     .with_week_numbering(WeekNumbering::Iso);
///
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawCalendarConfig")]
pub struct CalendarConfig {
    first_day_of_week: Weekday,
    week_numbering:    WeekNumbering,
    /// Rows the grid is padded to with next-month days. 0 disables padding.
    min_rows: u8,
}

/// Unvalidated form used for deserialization.
#[derive(Deserialize)]
#[serde(default)]
struct RawCalendarConfig {
    first_day_of_week: Weekday,
    week_numbering:    WeekNumbering,
    min_rows:          u8,
}

impl Default for RawCalendarConfig {
    fn default() -> Self {
        let defaults = CalendarConfig::default();
        Self {
            first_day_of_week: defaults.first_day_of_week,
            week_numbering:    defaults.week_numbering,
            min_rows:          defaults.min_rows,
        }
    }
}

impl TryFrom<RawCalendarConfig> for CalendarConfig {
    type Error = ConfigError;

    fn try_from(raw: RawCalendarConfig) -> Result<Self, Self::Error> {
        let config = Self {
            first_day_of_week: raw.first_day_of_week,
            week_numbering:    raw.week_numbering,
            min_rows:          raw.min_rows,
        };
        config.validate()?;
        Ok(config)
    }
}

impl Default for CalendarConfig {
    /// Monday first, sequential numbering, no row padding.
    fn default() -> Self {
        Self {
            first_day_of_week: Weekday::Mon,
            week_numbering:    WeekNumbering::Sequential,
            min_rows:          0,
        }
    }
}

impl CalendarConfig {
    /// Default settings with the given first day of week.
    pub fn new(first_day_of_week: Weekday) -> Self {
        Self {
            first_day_of_week,
            ..Self::default()
        }
    }

    /// Sets the weekday of the first grid column.
    pub const fn with_first_day_of_week(mut self, first_day_of_week: Weekday) -> Self {
        self.first_day_of_week = first_day_of_week;
        self
    }

    /// Sets how rows are numbered.
    pub const fn with_week_numbering(mut self, week_numbering: WeekNumbering) -> Self {
        self.week_numbering = week_numbering;
        self
    }

    /// Pads every grid to at least `min_rows` rows; 6 gives a fixed-height panel.
    /// Values above `MAX_GRID_ROWS` fail `validate` and are capped when a grid
    /// is built.
    pub const fn with_min_rows(mut self, min_rows: u8) -> Self {
        self.min_rows = min_rows;
        self
    }

    pub const fn first_day_of_week(&self) -> Weekday {
        self.first_day_of_week
    }

    pub const fn week_numbering(&self) -> WeekNumbering {
        self.week_numbering
    }

    pub const fn min_rows(&self) -> u8 {
        self.min_rows
    }

    /// Validates this configuration.
    ///
    /// # Errors
    /// Returns `ConfigError::InvalidMinRows` when `min_rows` exceeds
    /// `MAX_GRID_ROWS`.
    pub const fn validate(&self) -> Result<(), ConfigError> {
        if self.min_rows > MAX_GRID_ROWS {
            return Err(ConfigError::InvalidMinRows {
                min_rows: self.min_rows,
                max:      MAX_GRID_ROWS,
            });
        }
        Ok(())
    }

    /// Grid for the panel showing `title`.
    pub fn calendar_for(&self, title: TitleDate) -> CalendarGrid {
        generate_calendar_with(self, title.month(), title.year())
    }
}
