//! Type-driven cell formatters.
//!
//! Output follows US English conventions: `1,234.5` for numbers, `1/5/2024`
//! for dates and `$1,234.50` for currency.

use chrono::{DateTime, NaiveDate};

use super::column::ColumnType;
use super::value::CellValue;

/// Maximum fraction digits shown for plain numbers.
const NUMBER_FRACTION_DIGITS: usize = 3;

/// Format a raw value according to a column type.
///
/// Null values always format to an empty string. Values that cannot be read
/// as the column's type fall back to plain string coercion.
pub fn format_value(value: &CellValue, column_type: ColumnType) -> String {
    if value.is_null() {
        return String::new();
    }

    match column_type {
        ColumnType::Text => value.to_string(),
        ColumnType::Number => as_number(value)
            .map(format_number)
            .unwrap_or_else(|| value.to_string()),
        ColumnType::Currency => as_number(value)
            .map(format_currency)
            .unwrap_or_else(|| value.to_string()),
        ColumnType::Date => as_date(value)
            .map(format_date)
            .unwrap_or_else(|| value.to_string()),
    }
}

/// Format a number with thousands separators and up to three decimals.
pub fn format_number(n: f64) -> String {
    if n.is_nan() {
        return "NaN".to_string();
    }
    if n.is_infinite() {
        return if n < 0.0 { "-∞" } else { "∞" }.to_string();
    }

    let fixed = format!("{:.*}", NUMBER_FRACTION_DIGITS, n.abs());
    let (int_part, frac_part) = split_fixed(&fixed);
    let frac_part = frac_part.trim_end_matches('0');

    let mut out = group_thousands(int_part);
    if !frac_part.is_empty() {
        out.push('.');
        out.push_str(frac_part);
    }
    with_sign(n, out, "")
}

/// Format a number as US dollars with two decimals.
pub fn format_currency(n: f64) -> String {
    if !n.is_finite() {
        return format_number(n);
    }

    let fixed = format!("{:.2}", n.abs());
    let (int_part, frac_part) = split_fixed(&fixed);
    let out = format!("{}.{}", group_thousands(int_part), frac_part);
    with_sign(n, out, "$")
}

/// Format a date as `month/day/year` without padding.
pub fn format_date(date: NaiveDate) -> String {
    date.format("%-m/%-d/%Y").to_string()
}

fn as_number(value: &CellValue) -> Option<f64> {
    match value {
        CellValue::Number(n) => Some(*n),
        CellValue::Text(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    }
}

fn as_date(value: &CellValue) -> Option<NaiveDate> {
    match value {
        CellValue::Date(d) => Some(*d),
        // Numbers are read as epoch milliseconds.
        CellValue::Number(ms) => {
            DateTime::from_timestamp_millis(*ms as i64).map(|dt| dt.date_naive())
        }
        // Accept plain ISO dates and the date prefix of ISO timestamps.
        CellValue::Text(s) => s
            .get(..10)
            .and_then(|prefix| NaiveDate::parse_from_str(prefix, "%Y-%m-%d").ok()),
        _ => None,
    }
}

fn split_fixed(fixed: &str) -> (&str, &str) {
    fixed.split_once('.').unwrap_or((fixed, ""))
}

fn group_thousands(digits: &str) -> String {
    let len = digits.len();
    let mut out = String::with_capacity(len + len / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

fn with_sign(n: f64, body: String, symbol: &str) -> String {
    let is_zero = body.chars().all(|c| matches!(c, '0' | '.' | ','));
    if n < 0.0 && !is_zero {
        format!("-{}{}", symbol, body)
    } else {
        format!("{}{}", symbol, body)
    }
}
