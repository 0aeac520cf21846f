// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Display formatting for trail stats and timestamps.
//!
//! Trail fields are free text entered by editors ("1.5 miles", "2", "600 ft").
//! Values that already carry units pass through untouched.

use chrono::{DateTime, SecondsFormat, Utc};

/// RFC 3339 with millisecond precision and a `Z` suffix.
pub fn format_utc_rfc3339(date: DateTime<Utc>) -> String {
    date.to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// "2" -> "2 miles", "1" -> "1 mile"; anything with units is returned as-is.
pub fn format_distance(distance: &str) -> String {
    if distance.contains("mile") || distance.contains("mi") {
        return distance.to_string();
    }
    match parse_leading_float(distance) {
        Some(n) if n == 1.0 => "1 mile".to_string(),
        Some(n) => format!("{} miles", n),
        None => distance.to_string(),
    }
}

/// Numeric miles for sorting; 0 when no number can be read.
pub fn parse_distance_to_miles(distance: &str) -> f64 {
    let cleaned = strip_mile_unit(distance);
    parse_leading_float(cleaned.trim()).unwrap_or(0.0)
}

/// "1000" -> "1,000 ft"; anything with units is returned as-is.
pub fn format_elevation(elevation: &str) -> String {
    if elevation.contains("ft") || elevation.contains("feet") {
        return elevation.to_string();
    }
    match parse_leading_float(elevation) {
        Some(n) => format!("{} ft", group_thousands(n)),
        None => elevation.to_string(),
    }
}

/// Hours as a number: "2" -> "2 hours", "0.5" -> "30 min".
pub fn format_duration(duration: &str) -> String {
    if duration.contains("hour") || duration.contains("min") || duration.contains("hr") {
        return duration.to_string();
    }
    match parse_leading_float(duration) {
        Some(n) if n < 1.0 => format!("{} min", (n * 60.0).round()),
        Some(n) if n == 1.0 => "1 hour".to_string(),
        Some(n) => format!("{} hours", n),
        None => duration.to_string(),
    }
}

/// Read the longest numeric prefix after leading whitespace ("2.5 miles" -> 2.5).
pub fn parse_leading_float(s: &str) -> Option<f64> {
    let s = s.trim_start();
    let bytes = s.as_bytes();
    let mut end = 0;

    if matches!(bytes.first(), Some(b'+') | Some(b'-')) {
        end += 1;
    }
    let int_start = end;
    while end < bytes.len() && bytes[end].is_ascii_digit() {
        end += 1;
    }
    let mut digits = end - int_start;

    if end < bytes.len() && bytes[end] == b'.' {
        let frac_start = end + 1;
        let mut frac_end = frac_start;
        while frac_end < bytes.len() && bytes[frac_end].is_ascii_digit() {
            frac_end += 1;
        }
        digits += frac_end - frac_start;
        if frac_end > frac_start || digits > 0 {
            end = frac_end;
        }
    }
    if digits == 0 {
        return None;
    }

    // Exponent only counts when followed by at least one digit
    if end < bytes.len() && (bytes[end] == b'e' || bytes[end] == b'E') {
        let mut exp_end = end + 1;
        if matches!(bytes.get(exp_end), Some(b'+') | Some(b'-')) {
            exp_end += 1;
        }
        let exp_digits_start = exp_end;
        while exp_end < bytes.len() && bytes[exp_end].is_ascii_digit() {
            exp_end += 1;
        }
        if exp_end > exp_digits_start {
            end = exp_end;
        }
    }

    s[..end].trim_end_matches('.').parse().ok()
}

/// Remove the first "mi"/"mile"/"miles" (any case) and its surrounding spaces.
fn strip_mile_unit(s: &str) -> String {
    let lower = s.to_ascii_lowercase();
    let Some(start) = lower.find("mi") else {
        return s.to_string();
    };

    let mut end = start + 2;
    if lower[end..].starts_with("les") {
        end += 3;
    } else if lower[end..].starts_with("le") {
        end += 2;
    }

    let before = s[..start].trim_end();
    let after = s[end..].trim_start();
    format!("{}{}", before, after)
}

/// en-US grouping with at most three fraction digits.
fn group_thousands(n: f64) -> String {
    let rounded = (n * 1000.0).round() / 1000.0;
    let text = format!("{}", rounded.abs());
    let (int_part, frac_part) = match text.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (text.as_str(), None),
    };

    let mut grouped = String::new();
    for (i, c) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    if rounded < 0.0 {
        grouped.insert(0, '-');
    }
    if let Some(frac) = frac_part {
        grouped.push('.');
        grouped.push_str(frac);
    }
    grouped
}
