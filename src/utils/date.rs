use crate::errors::{AppError, AppResult};
use chrono::{Datelike, NaiveDate};

pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

/// Build a calendar date from free-text year/month/day fields.
/// Missing fields fall back to today's components.
pub fn date_from_parts(
    year: Option<&str>,
    month: Option<&str>,
    day: Option<&str>,
) -> AppResult<NaiveDate> {
    let now = today();
    let y = field_or(year, now.year())?;
    let m = field_or(month, now.month() as i32)?;
    let d = field_or(day, now.day() as i32)?;

    let invalid = || AppError::InvalidDate(format!("{}-{}-{}", y, m, d));
    let m = u32::try_from(m).map_err(|_| invalid())?;
    let d = u32::try_from(d).map_err(|_| invalid())?;

    NaiveDate::from_ymd_opt(y, m, d).ok_or_else(invalid)
}

fn field_or(value: Option<&str>, default: i32) -> AppResult<i32> {
    match value {
        Some(v) => v
            .trim()
            .parse::<i32>()
            .map_err(|_| AppError::InvalidDate(v.to_string())),
        None => Ok(default),
    }
}
