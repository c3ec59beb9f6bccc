//! Calendar core for date picker widgets.
//!
//! Builds the month grid a picker panel renders and steps the displayed
//! month/year in response to navigation commands. Rendering, event handling
//! and localisation are left to the widget shell; this crate only produces
//! the data they consume.
//!
//! ```
//! use chrono::Weekday;
//! use date_picker_core::{
//!     MonthType, Navigation, TitleDate, generate_calendar, navigate,
//! };
//!
//! let title: TitleDate = "2024-02".parse().unwrap();
//! let grid = generate_calendar(Weekday::Sun, title.month(), title.year());
//!
//! let first = grid.rows()[0].days()[0];
//! assert_eq!((first.day(), first.month_type()), (28, MonthType::Previous));
//!
//! let next = navigate(Some(title), Navigation::NextMonth);
//! assert_eq!(next, Some("2024-03".parse().unwrap()));
//! ```
//!
//! | Module | Description |
//! |--------|-------------|
//! | `weekday` | Weekday offsets and header order |
//! | `grid` | Month grid generation |
//! | `navigation` | Title-date transitions and picker state |
//! | `config` | Grid configuration |
//! | `title` | Displayed year/month |

mod config;
mod consts;
mod grid;
mod navigation;
mod prelude;
mod title;
mod types;
mod weekday;

pub use config::{CalendarConfig, ConfigError, WeekNumbering};
pub use consts::*;
pub use grid::{CalendarGrid, Day, MonthType, WeekRow, generate_calendar, generate_calendar_with};
pub use navigation::{
    Navigation, PickerState, goto_next_month, goto_next_year, goto_previous_month,
    goto_previous_year, navigate,
};
pub use title::TitleDate;
pub use types::{Month, Year, days_in_month, is_leap_year};
pub use weekday::{day_to_int, last_day_of_week, weekday_order};

use crate::prelude::*;

/// Errors raised while validating raw year/month input.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum ParseError {
    #[display(fmt = "Invalid title date format: {_0}")]
    InvalidFormat(String),
    #[display(fmt = "Invalid year: {} (must be {}-{})", "_0", MIN_YEAR, MAX_YEAR)]
    InvalidYear(u16),
    #[display(fmt = "Invalid year: {} (must be {}-{})", "_0", MIN_YEAR, MAX_YEAR)]
    YearOutOfRange(i32),
    #[display(fmt = "Invalid month: {} (must be 1-{})", "_0", MAX_MONTH)]
    InvalidMonth(u8),
    #[display(fmt = "Invalid month: {} (must be 1-{})", "_0", MAX_MONTH)]
    MonthOutOfRange(u32),
    #[display(fmt = "Empty date string")]
    EmptyInput,
}

impl std::error::Error for ParseError {}
