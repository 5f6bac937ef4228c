//! Reusable formatting utilities for CLI output

use chrono::{DateTime, NaiveDateTime};

/// Format a backend timestamp as `YYYY-MM-DD HH:MM`.
///
/// Accepts RFC 3339 and naive ISO 8601 (with or without fractional
/// seconds). Anything else is returned unchanged.
pub fn format_timestamp(timestamp: &str) -> String {
    if let Ok(dt) = DateTime::parse_from_rfc3339(timestamp) {
        return dt.format("%Y-%m-%d %H:%M").to_string();
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(timestamp, "%Y-%m-%dT%H:%M:%S%.f") {
        return dt.format("%Y-%m-%d %H:%M").to_string();
    }
    timestamp.to_string()
}

/// Truncate to `max_chars` characters with an ellipsis
pub fn truncate(s: &str, max_chars: usize) -> String {
    if s.chars().count() <= max_chars {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max_chars.saturating_sub(3)).collect();
        format!("{}...", kept)
    }
}

/// Value or `-` for absent/blank fields
pub fn or_dash(value: Option<&str>) -> String {
    match value {
        Some(v) if !v.trim().is_empty() => v.to_string(),
        _ => "-".to_string(),
    }
}

/// Skill level with one decimal, or `-`
pub fn format_level(value: Option<f64>) -> String {
    value
        .map(|v| format!("{:.1}", v))
        .unwrap_or_else(|| "-".to_string())
}
