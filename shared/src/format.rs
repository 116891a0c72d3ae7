//! Display formatting for dates and amounts.

use chrono::DateTime;

use crate::{Error, Result};

/// Format unix seconds as a long UTC date, e.g. "January 15, 2025".
pub fn format_date(unix_seconds: i64) -> Result<String> {
    let date = DateTime::from_timestamp(unix_seconds, 0)
        .ok_or(Error::TimestampOutOfRange(unix_seconds))?;
    Ok(date.format("%B %-d, %Y").to_string())
}

/// Like [`format_date`], falling back to the raw number when it can't be formatted.
pub fn format_date_or_raw(unix_seconds: i64) -> String {
    format_date(unix_seconds).unwrap_or_else(|_| unix_seconds.to_string())
}

/// Format an amount as US dollars with thousands separators.
///
/// Negative amounts get a leading minus sign ("-$20.00"); no plus sign is
/// ever added here.
pub fn format_currency(amount: f64) -> String {
    let fixed = format!("{:.2}", amount.abs());
    let (whole, cents) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));

    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, digit) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    // "-0.00" after rounding is still zero
    let is_negative = amount < 0.0 && fixed.chars().any(|c| c.is_ascii_digit() && c != '0');
    let sign = if is_negative { "-" } else { "" };
    format!("{}${}.{}", sign, grouped, cents)
}
