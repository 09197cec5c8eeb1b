/// Wall-clock helpers for the date and time pickers.
use chrono::{Local, NaiveDate, NaiveDateTime};
use search_core::slots;

pub fn now() -> NaiveDateTime {
    Local::now().naive_local()
}

pub fn today() -> NaiveDate {
    now().date()
}

/// `min` attribute for a start-date input.
pub fn min_start_date() -> String {
    slots::min_date(today())
}

/// `min` attribute for an end-date input paired with `start`.
pub fn min_end_date(start: &str) -> String {
    slots::min_end_date(today(), start)
}
