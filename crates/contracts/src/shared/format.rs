//! Display formatting for money, counts, dates and times

use super::settings::{Currency, DateFormat, TimeFormat};
use chrono::{NaiveDate, NaiveTime};

/// Formats a number with a comma thousands separator and the given number of
/// decimals (capped at 3)
///
/// ```
/// use contracts::shared::format::format_number_with_decimals;
/// assert_eq!(format_number_with_decimals(1234.567, 2), "1,234.57");
/// ```
pub fn format_number_with_decimals(value: f64, decimals: u8) -> String {
    let decimals = usize::from(decimals.min(3));
    let formatted = format!("{:.*}", decimals, value.abs());

    let (integer_part, decimal_part) = match formatted.split_once('.') {
        Some((i, d)) => (i, Some(d)),
        None => (formatted.as_str(), None),
    };

    let mut grouped = String::new();
    for (i, c) in integer_part.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    let mut result: String = grouped.chars().rev().collect();

    if let Some(d) = decimal_part {
        result.push('.');
        result.push_str(d);
    }
    // "-0.00" reads as noise
    if value < 0.0 && result.chars().any(|c| c.is_ascii_digit() && c != '0') {
        result.insert(0, '-');
    }
    result
}

/// Currency symbol, thousands separators and two decimals: `$1,234.50`
pub fn format_money(value: f64, currency: Currency) -> String {
    let amount = format_number_with_decimals(value, 2);
    match amount.strip_prefix('-') {
        Some(abs) => format!("-{}{}", currency.symbol(), abs),
        None => format!("{}{}", currency.symbol(), amount),
    }
}

pub fn format_number_int(value: f64) -> String {
    format_number_with_decimals(value, 0)
}

/// Reformat an ISO `YYYY-MM-DD` date; other input is returned unchanged
pub fn format_date(date_str: &str, format: DateFormat) -> String {
    match NaiveDate::parse_from_str(date_str, "%Y-%m-%d") {
        Ok(date) => date.format(format.chrono_pattern()).to_string(),
        Err(_) => date_str.to_string(),
    }
}

pub fn format_time(time: NaiveTime, format: TimeFormat) -> String {
    time.format(format.chrono_pattern()).to_string()
}
