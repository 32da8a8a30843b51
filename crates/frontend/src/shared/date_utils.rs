/// Utilities for the booking date inputs
///
/// Dates travel as `yyyy-mm-dd`, the format of `<input type="date">`.

/// Date part of an ISO datetime string
/// Example: "2025-06-01T10:15:00.000Z" -> "2025-06-01"
pub fn iso_date_part(datetime_str: &str) -> &str {
    datetime_str.split('T').next().unwrap_or(datetime_str)
}

/// Today's date (UTC) in yyyy-mm-dd format, from the browser clock
pub fn today_iso() -> String {
    let now: String = js_sys::Date::new_0().to_iso_string().into();
    iso_date_part(&now).to_string()
}

/// Lower bound for the end date: the chosen start date, or today when none is chosen yet
pub fn min_end_date(start_date: &str, today: &str) -> String {
    if start_date.is_empty() {
        today.to_string()
    } else {
        start_date.to_string()
    }
}
