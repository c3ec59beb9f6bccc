//! Weekday offsets relative to a configurable first day of week.

use chrono::Weekday;

use crate::consts::DAYS_IN_WEEK;

/// Column of `day` in a grid whose first column is `first_day_of_week`.
///
/// Always in `0..=6`; `day_to_int(d, d) == 0`.
pub fn day_to_int(first_day_of_week: Weekday, day: Weekday) -> u8 {
    let week = u32::from(DAYS_IN_WEEK);
    let offset =
        (day.num_days_from_monday() + week - first_day_of_week.num_days_from_monday()) % week;
    u8::try_from(offset).unwrap_or_default()
}

/// Header label order: `weekday_order(first)[day_to_int(first, d)] == d`.
pub fn weekday_order(first_day_of_week: Weekday) -> [Weekday; 7] {
    let mut order = [first_day_of_week; 7];
    let mut day = first_day_of_week;
    for slot in order.iter_mut().skip(1) {
        day = day.succ();
        *slot = day;
    }
    order
}

/// The column every grid row ends on.
pub fn last_day_of_week(first_day_of_week: Weekday) -> Weekday {
    first_day_of_week.pred()
}
