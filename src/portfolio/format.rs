// Display formatting helpers.

use chrono::{DateTime, Utc};
use url::Url;

/// Compact count with K/M suffixes (e.g. 1.2K, 3.4M).
pub fn format_number(n: u64) -> String {
    if n >= 1_000_000 {
        format!("{:.1}M", n as f64 / 1_000_000.0)
    } else if n >= 1_000 {
        format!("{:.1}K", n as f64 / 1_000.0)
    } else {
        n.to_string()
    }
}

/// Long-form date, e.g. "January 25, 2011".
pub fn format_date(dt: &DateTime<Utc>) -> String {
    dt.format("%B %-d, %Y").to_string()
}

/// Format a timestamp as relative time (e.g., "2h ago").
pub fn format_relative_time(dt: &DateTime<Utc>) -> String {
    format_relative_time_from(dt, Utc::now())
}

fn format_relative_time_from(dt: &DateTime<Utc>, now: DateTime<Utc>) -> String {
    let duration = now.signed_duration_since(*dt);

    if duration.num_days() > 0 {
        format!("{}d ago", duration.num_days())
    } else if duration.num_hours() > 0 {
        format!("{}h ago", duration.num_hours())
    } else if duration.num_minutes() > 0 {
        format!("{}m ago", duration.num_minutes())
    } else {
        "just now".to_string()
    }
}

/// Host of a URL without a leading `www.`; the input itself if it doesn't parse.
pub fn extract_domain(url: &str) -> String {
    match Url::parse(url).ok().as_ref().and_then(Url::host_str) {
        Some(host) => host.strip_prefix("www.").unwrap_or(host).to_string(),
        None => url.to_string(),
    }
}

pub fn is_valid_url(url: &str) -> bool {
    Url::parse(url).is_ok()
}
