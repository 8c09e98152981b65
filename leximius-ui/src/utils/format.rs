//! Formatting utilities

use chrono::{DateTime, Utc};

/// Truncate text to `length` characters, appending "..." when cut
pub fn truncate(text: &str, length: usize) -> String {
    truncate_with(text, length, "...")
}

/// Truncate text to `length` characters with a custom suffix
pub fn truncate_with(text: &str, length: usize, suffix: &str) -> String {
    if text.chars().count() <= length {
        return text.to_string();
    }
    let cut: String = text.chars().take(length).collect();
    format!("{}{}", cut, suffix)
}

/// Capitalize the first letter and lowercase the rest
pub fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(|c| c.to_lowercase()))
            .collect(),
        None => String::new(),
    }
}

/// Convert text to camelCase over whitespace, hyphen, and underscore breaks
pub fn camel_case(text: &str) -> String {
    let mut result = String::new();
    for (i, word) in text
        .split(|c: char| c.is_whitespace() || c == '-' || c == '_')
        .filter(|w| !w.is_empty())
        .enumerate()
    {
        if i == 0 {
            result.extend(word.chars().flat_map(|c| c.to_lowercase()));
        } else {
            result.push_str(&capitalize(word));
        }
    }
    result
}

/// Convert text to kebab-case, breaking on case boundaries and whitespace
pub fn kebab_case(text: &str) -> String {
    let mut result = String::new();
    let mut prev_lower = false;
    for c in text.chars() {
        if c.is_whitespace() {
            if !result.ends_with('-') {
                result.push('-');
            }
            prev_lower = false;
        } else if c.is_uppercase() {
            if prev_lower && !result.ends_with('-') {
                result.push('-');
            }
            result.extend(c.to_lowercase());
            prev_lower = false;
        } else {
            result.push(c);
            prev_lower = c.is_lowercase();
        }
    }
    result.trim_matches('-').to_string()
}

/// Render a ratio as a percentage string ("0.1234" -> "12.34%")
pub fn percentage(value: f64, decimals: usize) -> String {
    format!("{:.*}%", decimals, value * 100.0)
}

/// Render a byte count with binary units ("1536" -> "1.5 KB")
pub fn file_size(bytes: u64, decimals: usize) -> String {
    if bytes == 0 {
        return "0 Bytes".to_string();
    }

    const UNITS: [&str; 5] = ["Bytes", "KB", "MB", "GB", "TB"];
    let exponent = ((bytes as f64).ln() / 1024_f64.ln()).floor() as usize;
    let exponent = exponent.min(UNITS.len() - 1);
    let value = bytes as f64 / 1024_f64.powi(exponent as i32);

    let rendered = format!("{:.*}", decimals, value);
    let rendered = rendered.trim_end_matches('0').trim_end_matches('.');
    format!("{} {}", rendered, UNITS[exponent])
}

/// Render how long ago a moment was, relative to `now`
///
/// "just now" under a minute, then minutes/hours/days, then the short date
/// for anything older than thirty days.
pub fn relative_time(moment: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let seconds = (now - moment).num_seconds();

    if seconds < 60 {
        return "just now".to_string();
    }
    if seconds < 3600 {
        return format!("{} minutes ago", seconds / 60);
    }
    if seconds < 86_400 {
        return format!("{} hours ago", seconds / 3600);
    }
    if seconds < 2_592_000 {
        return format!("{} days ago", seconds / 86_400);
    }
    moment.format("%m/%d/%Y").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("short", 10), "short");
        assert_eq!(truncate("a longer sentence", 8), "a longer...");
        assert_eq!(truncate_with("a longer sentence", 8, "…"), "a longer…");
    }

    #[test]
    fn test_capitalize() {
        assert_eq!(capitalize("hello"), "Hello");
        assert_eq!(capitalize("HELLO world"), "Hello world");
        assert_eq!(capitalize(""), "");
    }

    #[test]
    fn test_camel_case() {
        assert_eq!(camel_case("hello world"), "helloWorld");
        assert_eq!(camel_case("getting-started guide"), "gettingStartedGuide");
    }

    #[test]
    fn test_kebab_case() {
        assert_eq!(kebab_case("helloWorld"), "hello-world");
        assert_eq!(kebab_case("Hello World"), "hello-world");
        assert_eq!(kebab_case("already-kebab"), "already-kebab");
    }

    #[test]
    fn test_percentage() {
        assert_eq!(percentage(0.1234, 2), "12.34%");
        assert_eq!(percentage(1.0, 0), "100%");
    }

    #[test]
    fn test_file_size() {
        assert_eq!(file_size(0, 2), "0 Bytes");
        assert_eq!(file_size(512, 2), "512 Bytes");
        assert_eq!(file_size(1536, 2), "1.5 KB");
        assert_eq!(file_size(1024 * 1024, 2), "1 MB");
    }

    #[test]
    fn test_relative_time() {
        let now = Utc.with_ymd_and_hms(2026, 1, 15, 12, 0, 0).unwrap();

        let moment = now - chrono::Duration::seconds(30);
        assert_eq!(relative_time(moment, now), "just now");

        let moment = now - chrono::Duration::minutes(5);
        assert_eq!(relative_time(moment, now), "5 minutes ago");

        let moment = now - chrono::Duration::hours(3);
        assert_eq!(relative_time(moment, now), "3 hours ago");

        let moment = now - chrono::Duration::days(4);
        assert_eq!(relative_time(moment, now), "4 days ago");

        let moment = Utc.with_ymd_and_hms(2025, 6, 1, 0, 0, 0).unwrap();
        assert_eq!(relative_time(moment, now), "06/01/2025");
    }
}
