use chrono::{DateTime, Utc};

/// Short MM/DD/YYYY form used next to the reporter name
pub fn format_short_date(timestamp: DateTime<Utc>) -> String {
    timestamp.format("%m/%d/%Y").to_string()
}

/// Humanized elapsed time for comment timestamps ("2 days ago").
/// Timestamps in the future (clock skew) read as "a few seconds ago".
pub fn relative_from(then: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let secs = (now - then).num_seconds().max(0);
    let mins = (secs as f64 / 60.0).round() as i64;
    let hours = (mins as f64 / 60.0).round() as i64;
    let days = (hours as f64 / 24.0).round() as i64;
    let months = (days as f64 / 30.44).round() as i64;
    let years = (months as f64 / 12.0).round() as i64;

    if secs < 45 {
        "a few seconds ago".to_string()
    } else if secs < 90 {
        "a minute ago".to_string()
    } else if mins < 45 {
        format!("{} minutes ago", mins)
    } else if mins < 90 {
        "an hour ago".to_string()
    } else if hours < 22 {
        format!("{} hours ago", hours)
    } else if hours < 36 {
        "a day ago".to_string()
    } else if days < 26 {
        format!("{} days ago", days)
    } else if days < 46 {
        "a month ago".to_string()
    } else if days < 320 {
        format!("{} months ago", months)
    } else if days < 548 {
        "a year ago".to_string()
    } else {
        format!("{} years ago", years)
    }
}
