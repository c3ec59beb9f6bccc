//! Month grid generation.
//!
//! A grid always starts on the configured first day of week, covers the whole
//! target month and is cut into rows of seven cells. Cells before the 1st are
//! borrowed from the previous month, cells after the last day from the next.

use chrono::{Datelike, Days, NaiveDate, Weekday};
use serde::Serialize;

use crate::config::{CalendarConfig, WeekNumbering};
use crate::consts::{DAYS_IN_WEEK, MAX_GRID_ROWS, MIN_DAY};
use crate::title::TitleDate;
use crate::types::{Month, Year, days_in_month};
use crate::weekday::day_to_int;

const WEEK: usize = DAYS_IN_WEEK as usize;

/// Which month a grid cell belongs to, relative to the displayed one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MonthType {
    Previous,
    Current,
    Next,
}

/// One grid cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Day {
    day:        u8,
    month_type: MonthType,
}

impl Day {
    pub const fn new(day: u8, month_type: MonthType) -> Self {
        Self { day, month_type }
    }

    /// Day of its own month (1..=31).
    pub const fn day(&self) -> u8 {
        self.day
    }

    /// Month this cell belongs to, relative to the displayed one.
    pub const fn month_type(&self) -> MonthType {
        self.month_type
    }

    /// Whether the cell lies in the displayed month.
    pub const fn is_current_month(&self) -> bool {
        matches!(self.month_type, MonthType::Current)
    }
}

/// Seven consecutive cells and their week number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct WeekRow {
    days:        [Day; WEEK],
    week_number: u32,
}

impl WeekRow {
    /// Cells from the first day of week to the day before it.
    pub const fn days(&self) -> &[Day; WEEK] {
        &self.days
    }

    /// Row number under the configured `WeekNumbering`.
    pub const fn week_number(&self) -> u32 {
        self.week_number
    }
}

/// Full set of rows for one displayed month.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct CalendarGrid {
    first_day_of_week: Weekday,
    year:              Year,
    month:             Month,
    start:             NaiveDate,
    rows:              Vec<WeekRow>,
}

impl CalendarGrid {
    /// Rows from top to bottom.
    pub fn rows(&self) -> &[WeekRow] {
        &self.rows
    }

    /// Number of rows, 4..=6.
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Number of cells, always a multiple of 7.
    pub fn cell_count(&self) -> usize {
        self.rows.len() * WEEK
    }

    /// All cells, row by row.
    pub fn days(&self) -> impl Iterator<Item = &Day> + '_ {
        self.rows.iter().flat_map(|row| row.days.iter())
    }

    /// Weekday of the first column.
    pub const fn first_day_of_week(&self) -> Weekday {
        self.first_day_of_week
    }

    /// Year of the displayed month.
    pub const fn year(&self) -> Year {
        self.year
    }

    /// The displayed month.
    pub const fn month(&self) -> Month {
        self.month
    }

    /// Year and month this grid was built for.
    pub const fn title(&self) -> TitleDate {
        TitleDate::new(self.year, self.month)
    }

    /// Date of the top-left cell.
    pub const fn start(&self) -> NaiveDate {
        self.start
    }

    /// Concrete date of the cell at `row`, `column`.
    pub fn date_at(&self, row: usize, column: usize) -> Option<NaiveDate> {
        if row >= self.rows.len() || column >= WEEK {
            return None;
        }
        let offset = u64::try_from(row * WEEK + column).ok()?;
        self.start.checked_add_days(Days::new(offset))
    }

    /// `(row, column)` of `date`, if the grid shows it.
    pub fn position_of(&self, date: NaiveDate) -> Option<(usize, usize)> {
        let offset = usize::try_from((date - self.start).num_days()).ok()?;
        if offset >= self.cell_count() {
            return None;
        }
        Some((offset / WEEK, offset % WEEK))
    }
}

/// Builds the grid for `month`/`year` starting on `first_day_of_week`, with
/// rows numbered sequentially from 1.
pub fn generate_calendar(first_day_of_week: Weekday, month: Month, year: Year) -> CalendarGrid {
    generate_calendar_with(&CalendarConfig::new(first_day_of_week), month, year)
}

/// Builds the grid for `month`/`year` using every setting in `config`.
pub fn generate_calendar_with(config: &CalendarConfig, month: Month, year: Year) -> CalendarGrid {
    let first_day_of_week = config.first_day_of_week();
    let title = TitleDate::new(year, month);
    let first = title.first_day();

    let leading = day_to_int(first_day_of_week, first.weekday());
    let (prev_month, wrapped) = month.pred();
    let prev_year = if wrapped { year.get() - 1 } else { year.get() };
    let prev_len = days_in_month(prev_year, prev_month.get());

    let mut cells = Vec::with_capacity(usize::from(MAX_GRID_ROWS) * WEEK);
    cells.extend(
        (prev_len - leading + 1..=prev_len).map(|d| Day::new(d, MonthType::Previous)),
    );
    cells.extend((MIN_DAY..=title.days_in_month()).map(|d| Day::new(d, MonthType::Current)));

    // Unvalidated configs can ask for more rows than a month can fill.
    let min_cells = usize::from(config.min_rows().min(MAX_GRID_ROWS)) * WEEK;
    let target = cells.len().next_multiple_of(WEEK).max(min_cells);
    let trailing = target - cells.len();
    cells.extend(
        (MIN_DAY..)
            .take(trailing)
            .map(|d| Day::new(d, MonthType::Next)),
    );

    let start = first
        .checked_sub_days(Days::new(u64::from(leading)))
        .unwrap_or(first);
    let thursday = usize::from(day_to_int(first_day_of_week, Weekday::Thu));

    let rows: Vec<WeekRow> = cells
        .chunks_exact(WEEK)
        .enumerate()
        .filter_map(|(index, chunk)| {
            let days: [Day; WEEK] = chunk.try_into().ok()?;
            let week_number = week_number(config.week_numbering(), start, index, thursday);
            Some(WeekRow { days, week_number })
        })
        .collect();

    log::trace!(
        "built grid for {title}: first day {first_day_of_week}, {leading} leading, {trailing} trailing, {} rows",
        rows.len()
    );

    CalendarGrid {
        first_day_of_week,
        year,
        month,
        start,
        rows,
    }
}

fn week_number(numbering: WeekNumbering, start: NaiveDate, row: usize, thursday: usize) -> u32 {
    let sequential = u32::try_from(row + 1).unwrap_or(u32::MAX);
    match numbering {
        WeekNumbering::Sequential => sequential,
        WeekNumbering::Iso => u64::try_from(row * WEEK + thursday)
            .ok()
            .and_then(|offset| start.checked_add_days(Days::new(offset)))
            .map_or(sequential, |date| date.iso_week().week()),
    }
}
