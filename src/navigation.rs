//! Title-date navigation.
//!
//! Every transition is total over `Option<TitleDate>`: an absent title stays
//! absent, and a step past the supported year range leaves the title as it
//! was.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::config::CalendarConfig;
use crate::grid::CalendarGrid;
use crate::title::TitleDate;

/// A navigation command issued by the picker shell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Navigation {
    NextMonth,
    PreviousMonth,
    NextYear,
    PreviousYear,
}

fn next_month(title: TitleDate) -> Option<TitleDate> {
    let (month, wrapped) = title.month().succ();
    let year = if wrapped {
        title.year().succ()?
    } else {
        title.year()
    };
    Some(TitleDate::new(year, month))
}

fn previous_month(title: TitleDate) -> Option<TitleDate> {
    let (month, wrapped) = title.month().pred();
    let year = if wrapped {
        title.year().pred()?
    } else {
        title.year()
    };
    Some(TitleDate::new(year, month))
}

fn next_year(title: TitleDate) -> Option<TitleDate> {
    Some(TitleDate::new(title.year().succ()?, title.month()))
}

fn previous_year(title: TitleDate) -> Option<TitleDate> {
    Some(TitleDate::new(title.year().pred()?, title.month()))
}

/// Applies `step`, keeping `title` when the result would leave the year range.
fn step_within_range(
    state: Option<TitleDate>,
    command: Navigation,
    step: fn(TitleDate) -> Option<TitleDate>,
) -> Option<TitleDate> {
    let title = state?;
    match step(title) {
        Some(next) => Some(next),
        None => {
            log::debug!("{command:?} from {title} is outside the supported range; keeping title");
            Some(title)
        }
    }
}

/// Advances the title by one month, rolling December into January.
pub fn goto_next_month(state: Option<TitleDate>) -> Option<TitleDate> {
    step_within_range(state, Navigation::NextMonth, next_month)
}

/// Moves the title back one month, rolling January into December.
pub fn goto_previous_month(state: Option<TitleDate>) -> Option<TitleDate> {
    step_within_range(state, Navigation::PreviousMonth, previous_month)
}

/// Advances the title by one year, keeping the month.
pub fn goto_next_year(state: Option<TitleDate>) -> Option<TitleDate> {
    step_within_range(state, Navigation::NextYear, next_year)
}

/// Moves the title back one year, keeping the month.
pub fn goto_previous_year(state: Option<TitleDate>) -> Option<TitleDate> {
    step_within_range(state, Navigation::PreviousYear, previous_year)
}

/// Dispatches `command` to the matching transition.
pub fn navigate(state: Option<TitleDate>, command: Navigation) -> Option<TitleDate> {
    match command {
        Navigation::NextMonth => goto_next_month(state),
        Navigation::PreviousMonth => goto_previous_month(state),
        Navigation::NextYear => goto_next_year(state),
        Navigation::PreviousYear => goto_previous_year(state),
    }
}

/// Displayed panel plus the user's selection.
///
/// The title moves freely under navigation; selecting a date pulls the title
/// to that date's month.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PickerState {
    title:    Option<TitleDate>,
    selected: Option<NaiveDate>,
}

impl PickerState {
    /// No title and no selection.
    pub const fn new() -> Self {
        Self {
            title:    None,
            selected: None,
        }
    }

    /// Shows `title` with nothing selected.
    pub const fn with_title(title: TitleDate) -> Self {
        Self {
            title:    Some(title),
            selected: None,
        }
    }

    /// The displayed year and month, if any.
    pub const fn title(&self) -> Option<TitleDate> {
        self.title
    }

    /// The selected date, if any.
    pub const fn selected(&self) -> Option<NaiveDate> {
        self.selected
    }

    /// Moves the title; the selection is left alone.
    pub fn apply(&mut self, command: Navigation) {
        self.title = navigate(self.title, command);
    }

    /// Selects `date` and shows its month. Dates outside the supported year
    /// range are still selected but leave the title untouched.
    pub fn select(&mut self, date: NaiveDate) {
        self.selected = Some(date);
        match TitleDate::try_from(date) {
            Ok(title) => self.title = Some(title),
            Err(e) => log::debug!("selected {date} has no title date: {e}"),
        }
    }

    /// Drops the selection and keeps the title.
    pub fn clear_selection(&mut self) {
        self.selected = None;
    }

    /// Grid for the current title, if any.
    pub fn calendar(&self, config: &CalendarConfig) -> Option<CalendarGrid> {
        self.title.map(|title| config.calendar_for(title))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::{MAX_YEAR, MIN_YEAR};

    fn title(year: u16, month: u8) -> Option<TitleDate> {
        Some(TitleDate::from_parts(year, month).unwrap())
    }

    #[test]
    fn test_next_month_rolls_year() {
        assert_eq!(goto_next_month(title(2023, 12)), title(2024, 1));
        assert_eq!(goto_next_month(title(2024, 1)), title(2024, 2));
    }

    #[test]
    fn test_previous_month_rolls_year() {
        assert_eq!(goto_previous_month(title(2024, 1)), title(2023, 12));
        assert_eq!(goto_previous_month(title(2024, 3)), title(2024, 2));
    }

    #[test]
    fn test_year_steps_keep_month() {
        assert_eq!(goto_next_year(title(2024, 2)), title(2025, 2));
        assert_eq!(goto_previous_year(title(2024, 2)), title(2023, 2));
    }

    #[test]
    fn test_absent_title_is_noop() {
        assert_eq!(goto_next_month(None), None);
        assert_eq!(goto_previous_month(None), None);
        assert_eq!(goto_next_year(None), None);
        assert_eq!(goto_previous_year(None), None);
    }

    #[test]
    fn test_range_limits_are_noop() {
        assert_eq!(goto_next_month(title(MAX_YEAR, 12)), title(MAX_YEAR, 12));
        assert_eq!(goto_next_year(title(MAX_YEAR, 5)), title(MAX_YEAR, 5));
        assert_eq!(goto_previous_month(title(MIN_YEAR, 1)), title(MIN_YEAR, 1));
        assert_eq!(goto_previous_year(title(MIN_YEAR, 5)), title(MIN_YEAR, 5));

        // Inside the last year month steps still work
        assert_eq!(goto_next_month(title(MAX_YEAR, 11)), title(MAX_YEAR, 12));
    }

    #[test]
    fn test_round_trips() {
        for month in 1..=12 {
            let start = title(2024, month);
            assert_eq!(goto_previous_month(goto_next_month(start)), start);
            assert_eq!(goto_next_month(goto_previous_month(start)), start);
            assert_eq!(goto_previous_year(goto_next_year(start)), start);
        }
    }

    #[test]
    fn test_navigate_dispatch() {
        let start = title(2024, 6);
        assert_eq!(navigate(start, Navigation::NextMonth), title(2024, 7));
        assert_eq!(navigate(start, Navigation::PreviousMonth), title(2024, 5));
        assert_eq!(navigate(start, Navigation::NextYear), title(2025, 6));
        assert_eq!(navigate(start, Navigation::PreviousYear), title(2023, 6));
    }

    #[test]
    fn test_navigation_serde() {
        let json = serde_json::to_string(&Navigation::PreviousYear).unwrap();
        assert_eq!(json, r#""previous_year""#);
        let parsed: Navigation = serde_json::from_str(r#""next_month""#).unwrap();
        assert_eq!(parsed, Navigation::NextMonth);
    }

    #[test]
    fn test_picker_state_empty() {
        let mut state = PickerState::new();
        state.apply(Navigation::NextMonth);
        assert_eq!(state.title(), None);
        assert_eq!(state.calendar(&CalendarConfig::default()), None);
    }

    #[test]
    fn test_picker_state_navigation_keeps_selection() {
        let date = NaiveDate::from_ymd_opt(2024, 2, 29).unwrap();
        let mut state = PickerState::new();
        state.select(date);
        assert_eq!(state.title(), title(2024, 2));

        state.apply(Navigation::NextYear);
        state.apply(Navigation::PreviousMonth);
        assert_eq!(state.title(), title(2025, 1));
        assert_eq!(state.selected(), Some(date));

        state.clear_selection();
        assert_eq!(state.selected(), None);
        assert_eq!(state.title(), title(2025, 1));
    }

    #[test]
    fn test_picker_state_select_out_of_range() {
        let mut state = PickerState::with_title(TitleDate::from_parts(2024, 2).unwrap());
        let far = NaiveDate::from_ymd_opt(12_000, 1, 1).unwrap();
        state.select(far);
        assert_eq!(state.selected(), Some(far));
        assert_eq!(state.title(), title(2024, 2));
    }

    #[test]
    fn test_picker_state_calendar() {
        let state = PickerState::with_title(TitleDate::from_parts(2024, 2).unwrap());
        let grid = state
            .calendar(&CalendarConfig::new(chrono::Weekday::Sun))
            .unwrap();
        assert_eq!(grid.title(), TitleDate::from_parts(2024, 2).unwrap());
        assert_eq!(grid.row_count(), 5);
    }
}
