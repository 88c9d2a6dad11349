//! Display formatting helpers.
//!
//! Pure conversions between raw backend values and the strings shown in the
//! UI. Nothing here touches the DOM, so the whole module is host-testable.

use chrono::{DateTime, NaiveDateTime};

/// Shown wherever a value is missing.
pub const PLACEHOLDER: &str = "—";

const CURRENCY_SUFFIX: &str = " ₽";
const GROUP_SEPARATOR: char = '\u{a0}';

const MONTH_NAMES: [&str; 12] = [
    "январь", "февраль", "март", "апрель", "май", "июнь",
    "июль", "август", "сентябрь", "октябрь", "ноябрь", "декабрь",
];

/// Format a money amount as a grouped integer with the rouble suffix,
/// e.g. `92 430 ₽`. `None` renders as the placeholder.
pub fn format_currency(value: Option<f64>) -> String {
    match value {
        None => PLACEHOLDER.to_string(),
        Some(amount) => {
            let rounded = if amount.is_finite() { amount.round() as i64 } else { 0 };
            format!("{}{}", group_thousands(rounded), CURRENCY_SUFFIX)
        }
    }
}

fn group_thousands(value: i64) -> String {
    let digits = value.unsigned_abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if value < 0 {
        grouped.push('-');
    }
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(GROUP_SEPARATOR);
        }
        grouped.push(ch);
    }
    grouped
}

/// Full month name for a 0-based month index; empty when out of range.
pub fn month_name(index: i32) -> &'static str {
    usize::try_from(index)
        .ok()
        .and_then(|i| MONTH_NAMES.get(i))
        .copied()
        .unwrap_or("")
}

/// Split a textarea blob into trimmed, non-empty lines.
pub fn split_lines(text: &str) -> Vec<String> {
    text.split('\n')
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

/// Inverse of [`split_lines`] for lists of non-blank trimmed lines.
pub fn join_lines<S: AsRef<str>>(lines: &[S]) -> String {
    lines
        .iter()
        .map(AsRef::as_ref)
        .collect::<Vec<_>>()
        .join("\n")
}

/// Keep only ASCII digits. Numeric inputs are passed through this on every
/// keystroke.
pub fn extract_digits(text: &str) -> String {
    text.chars().filter(char::is_ascii_digit).collect()
}

/// Like [`extract_digits`], but a leading `-` survives so signed amounts can
/// be typed. A lone `-` is kept while the user is still typing.
pub fn extract_signed_digits(text: &str) -> String {
    let digits = extract_digits(text);
    if text.trim_start().starts_with('-') {
        format!("-{}", digits)
    } else {
        digits
    }
}

/// `152 ч`, or the placeholder.
pub fn format_hours(hours: Option<f64>) -> String {
    match hours {
        Some(hours) => format!("{} ч", hours),
        None => PLACEHOLDER.to_string(),
    }
}

/// Lines joined with `; `, or the placeholder when there are none.
pub fn join_or_dash<S: AsRef<str>>(lines: &[S]) -> String {
    if lines.is_empty() {
        return PLACEHOLDER.to_string();
    }
    lines
        .iter()
        .map(AsRef::as_ref)
        .collect::<Vec<_>>()
        .join("; ")
}

/// The text itself, or the placeholder when it is missing or empty.
pub fn or_dash(text: Option<&str>) -> String {
    match text {
        Some(text) if !text.is_empty() => text.to_string(),
        _ => PLACEHOLDER.to_string(),
    }
}

/// Render a backend timestamp as `dd.mm.yyyy, HH:MM`.
///
/// Accepts RFC 3339 and naive ISO-8601 (`T` or space separated). Anything
/// else is returned unchanged.
pub fn format_timestamp(raw: &str) -> String {
    let parsed = DateTime::parse_from_rfc3339(raw)
        .map(|dt| dt.naive_local())
        .or_else(|_| NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f"))
        .or_else(|_| NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S%.f"));

    match parsed {
        Ok(dt) => dt.format("%d.%m.%Y, %H:%M").to_string(),
        Err(_) => raw.to_string(),
    }
}

/// Human label for a shift role code.
pub fn shift_role_label(role: Option<&str>) -> String {
    match role {
        Some("receiver") => "Приёмщик".to_string(),
        Some("loader") => "Кладовщик".to_string(),
        other => or_dash(other),
    }
}
