use chrono::{Local, NaiveDate};

use crate::error::AppError;

/// First day APOD published a picture.
pub const FIRST_APOD: NaiveDate = match NaiveDate::from_ymd_opt(1995, 6, 16) {
    Some(d) => d,
    None => panic!("invalid first APOD date"),
};

/// Today's date in the browser's local time zone.
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// `YYYY-MM-DD`, zero padded, as `<input type="date">` expects.
pub fn format_iso(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

/// Parse the value of the date input and check it lies in the published range.
pub fn parse_query_date(text: &str, today: NaiveDate) -> Result<NaiveDate, AppError> {
    let text = text.trim();
    if text.is_empty() {
        return Err(AppError::InvalidDate("pick a date first".to_string()));
    }

    let date = NaiveDate::parse_from_str(text, "%Y-%m-%d")
        .map_err(|_| AppError::InvalidDate(format!("'{}' is not a YYYY-MM-DD date", text)))?;

    if date < FIRST_APOD {
        return Err(AppError::InvalidDate(format!(
            "APOD starts on {}",
            format_iso(FIRST_APOD)
        )));
    }
    if date > today {
        return Err(AppError::InvalidDate(format!(
            "{} is in the future",
            format_iso(date)
        )));
    }
    Ok(date)
}
