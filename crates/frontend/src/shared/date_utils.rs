/// Utilities for date and billing-period formatting
///
/// Dates arrive from the backend as ISO strings; billing periods as `YYYY-MM`.
use chrono::{Datelike, Months, NaiveDate};

/// Format ISO date string to DD.MM.YYYY format
/// Example: "2024-03-15" or "2024-03-15T14:02:26Z" -> "15.03.2024"
pub fn format_date(date_str: &str) -> String {
    let date_part = date_str.split('T').next().unwrap_or(date_str);
    match NaiveDate::parse_from_str(date_part, "%Y-%m-%d") {
        Ok(date) => date.format("%d.%m.%Y").to_string(),
        Err(_) => date_str.to_string(),
    }
}

/// Parse a `YYYY-MM` billing period into its first day
pub fn parse_period(period: &str) -> Option<NaiveDate> {
    let (year, month) = period.trim().split_once('-')?;
    NaiveDate::from_ymd_opt(year.parse().ok()?, month.parse().ok()?, 1)
}

/// "2024-05" -> "May 2024"; unparseable input is returned unchanged
pub fn format_period(period: &str) -> String {
    match parse_period(period) {
        Some(date) => date.format("%B %Y").to_string(),
        None => period.to_string(),
    }
}

/// The period before the one containing `today`, the usual billing target
pub fn previous_period(today: NaiveDate) -> String {
    let first = today.with_day(1).unwrap_or(today);
    let previous = first.checked_sub_months(Months::new(1)).unwrap_or(first);
    previous.format("%Y-%m").to_string()
}

/// `previous_period` for the browser's current date
pub fn default_billing_period() -> String {
    let now = js_sys::Date::new_0();
    let today = NaiveDate::from_ymd_opt(
        now.get_full_year() as i32,
        now.get_month() + 1,
        now.get_date(),
    );
    today.map(previous_period).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_date() {
        assert_eq!(format_date("2024-03-15"), "15.03.2024");
        assert_eq!(format_date("2024-03-15T14:02:26.123Z"), "15.03.2024");
        assert_eq!(format_date("invalid"), "invalid");
    }

    #[test]
    fn test_format_period() {
        assert_eq!(format_period("2024-05"), "May 2024");
        assert_eq!(format_period("2024-13"), "2024-13");
        assert_eq!(format_period(""), "");
    }

    #[test]
    fn test_previous_period_wraps_year() {
        let jan = NaiveDate::from_ymd_opt(2025, 1, 31).unwrap();
        assert_eq!(previous_period(jan), "2024-12");
        let mar = NaiveDate::from_ymd_opt(2024, 3, 31).unwrap();
        assert_eq!(previous_period(mar), "2024-02");
    }
}
