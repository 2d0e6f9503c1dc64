use chrono::{Datelike, Days, Local, NaiveDate};

use crate::error::{Error, Result};

pub fn first_sunday(year: i32, month: u32) -> Result<NaiveDate> {
    let first = NaiveDate::from_ymd_opt(year, month, 1)
        .ok_or(Error::invalid_range("month", month as f64))?;
    let days_ahead = (7 - first.weekday().num_days_from_sunday()) % 7;
    Ok(first + Days::new(days_ahead as u64))
}

pub fn second_sunday(year: i32, month: u32) -> Result<NaiveDate> {
    Ok(first_sunday(year, month)? + Days::new(7))
}

/// US rule: DST runs from the second Sunday of March 00:00 (inclusive)
/// through the first Sunday of November 00:00 (exclusive).
pub fn dst_in_effect(year: i32, month: u32, day: u32) -> Result<bool> {
    let date = NaiveDate::from_ymd_opt(year, month, day)
        .ok_or(Error::invalid_range("day of month", day as f64))?;
    let start = second_sunday(year, 3)?;
    let end = first_sunday(year, 11)?;
    Ok(start <= date && date < end)
}

pub fn dst_in_effect_today() -> Result<bool> {
    let today = Local::now().date_naive();
    dst_in_effect(today.year(), today.month(), today.day())
}
