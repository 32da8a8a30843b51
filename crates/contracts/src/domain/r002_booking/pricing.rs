//! Rental duration and cost.
//!
//! Dates are ISO `YYYY-MM-DD` strings as produced by `<input type="date">`, taken
//! at UTC midnight. Full datetimes are accepted too, so partial days round up.
//! An end date before the start date is neither rejected nor clamped: the day
//! count simply comes out zero or negative.

use super::aggregate::Booking;
use crate::domain::r001_vehicle::aggregate::Vehicle;
use crate::shared::error::{RentalError, RentalResult};
use chrono::{DateTime, NaiveDate, NaiveDateTime};

pub const MS_PER_DAY: i64 = 1000 * 60 * 60 * 24;

fn parse_instant(field: &'static str, value: &str) -> RentalResult<NaiveDateTime> {
    let raw = value.trim();

    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        if let Some(midnight) = date.and_hms_opt(0, 0, 0) {
            return Ok(midnight);
        }
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Ok(dt.naive_utc());
    }
    for fmt in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M"] {
        if let Ok(dt) = NaiveDateTime::parse_from_str(raw, fmt) {
            return Ok(dt);
        }
    }

    Err(RentalError::InvalidDate {
        field,
        value: value.to_string(),
    })
}

/// ceil((end - start) / 1 day)
pub fn compute_days(start_date: &str, end_date: &str) -> RentalResult<i64> {
    let start = parse_instant("startDate", start_date)?;
    let end = parse_instant("endDate", end_date)?;

    let ms = (end - start).num_milliseconds();
    let whole = ms / MS_PER_DAY;
    // integer division truncates toward zero, which is already the ceiling for negatives
    if ms % MS_PER_DAY > 0 {
        Ok(whole + 1)
    } else {
        Ok(whole)
    }
}

pub fn compute_cost(vehicle: &Vehicle, days: i64) -> f64 {
    vehicle.daily_price * days as f64
}

/// Sum of booking costs. Bookings with unparsable dates add nothing.
pub fn total_cart_cost(cart: &[Booking]) -> f64 {
    cart.iter().map(|b| b.cost().unwrap_or(0.0)).sum()
}
