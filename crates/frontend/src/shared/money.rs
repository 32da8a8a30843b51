//! Price formatting

/// Formats an amount the way prices are shown across the page:
/// whole amounts without decimals, the rest with two.
///
/// # Examples
///
/// ```
/// use frontend::shared::money::format_amount;
/// assert_eq!(format_amount(160.0, "$"), "$160");
/// assert_eq!(format_amount(99.5, "$"), "$99.50");
/// ```
pub fn format_amount(value: f64, symbol: &str) -> String {
    if !value.is_finite() {
        return format!("{}-", symbol);
    }
    let formatted = if value.fract() == 0.0 {
        format!("{:.0}", value)
    } else {
        format!("{:.2}", value)
    };
    format!("{}{}", symbol, formatted)
}

/// "$120/day"
pub fn format_daily_price(value: f64, symbol: &str) -> String {
    format!("{}/day", format_amount(value, symbol))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_amount() {
        assert_eq!(format_amount(360.0, "$"), "$360");
        assert_eq!(format_amount(0.0, "$"), "$0");
        assert_eq!(format_amount(12.25, "$"), "$12.25");
        assert_eq!(format_amount(-80.0, "$"), "$-80");
        assert_eq!(format_amount(f64::NAN, "$"), "$-");
    }

    #[test]
    fn test_format_daily_price() {
        assert_eq!(format_daily_price(120.0, "$"), "$120/day");
        assert_eq!(format_daily_price(75.0, "€"), "€75/day");
    }
}
