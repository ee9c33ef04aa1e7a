// `folio limits`: current GitHub API rate limit.

use std::io::Write;

use chrono::{DateTime, Utc};

use crate::error::Result;
use crate::github::{GitHubClient, RateLimitInfo};

/// Handle the limits command.
pub async fn handle_limits(client: &GitHubClient, json: bool) -> Result<()> {
    let info = client.get_rate_limit().await?;
    let mut stdout = std::io::stdout().lock();
    if json {
        writeln!(stdout, "{}", serde_json::to_string_pretty(&info)?)?;
    } else {
        write_limits(&mut stdout, &info, client.is_authenticated(), Utc::now())?;
    }
    Ok(())
}

fn write_limits(
    out: &mut impl Write,
    info: &RateLimitInfo,
    authenticated: bool,
    now: DateTime<Utc>,
) -> std::io::Result<()> {
    let used = info.limit.saturating_sub(info.remaining);
    let usage_percent = if info.limit > 0 {
        (used as f64 / info.limit as f64) * 100.0
    } else {
        0.0
    };
    let reset_duration = info.reset.signed_duration_since(now);
    let reset_in = if reset_duration.num_seconds() > 0 {
        format_duration(reset_duration)
    } else {
        "now".to_string()
    };

    writeln!(
        out,
        "GitHub API ({})",
        if authenticated { "authenticated" } else { "unauthenticated" }
    )?;
    writeln!(out, "  Limit:     {}", info.limit)?;
    writeln!(out, "  Remaining: {} ({:.1}% used)", info.remaining, usage_percent)?;
    writeln!(
        out,
        "  Resets at: {} (in {})",
        info.reset.format("%Y-%m-%d %H:%M:%S UTC"),
        reset_in
    )?;
    Ok(())
}

fn format_duration(duration: chrono::Duration) -> String {
    let total_secs = duration.num_seconds();
    if total_secs < 60 {
        format!("{}s", total_secs)
    } else if total_secs < 3600 {
        let mins = total_secs / 60;
        let secs = total_secs % 60;
        if secs > 0 {
            format!("{}m {}s", mins, secs)
        } else {
            format!("{}m", mins)
        }
    } else {
        let hours = total_secs / 3600;
        let mins = (total_secs % 3600) / 60;
        if mins > 0 {
            format!("{}h {}m", hours, mins)
        } else {
            format!("{}h", hours)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn format_duration_handles_seconds_minutes_and_hours() {
        assert_eq!(format_duration(chrono::Duration::seconds(42)), "42s");
        assert_eq!(format_duration(chrono::Duration::seconds(125)), "2m 5s");
        assert_eq!(format_duration(chrono::Duration::seconds(3900)), "1h 5m");
    }

    #[test]
    fn writes_usage_and_reset() {
        let now = Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap();
        let info = RateLimitInfo {
            limit: 60,
            remaining: 45,
            reset: now + chrono::Duration::minutes(30),
        };

        let mut out = Vec::new();
        write_limits(&mut out, &info, false, now).unwrap();
        let text = String::from_utf8(out).unwrap();

        assert!(text.contains("unauthenticated"));
        assert!(text.contains("Remaining: 45 (25.0% used)"));
        assert!(text.contains("2024-06-01 12:30:00 UTC (in 30m)"));
    }

    #[test]
    fn past_reset_reads_now() {
        let now = Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap();
        let info = RateLimitInfo {
            limit: 5000,
            remaining: 5000,
            reset: now - chrono::Duration::seconds(5),
        };
        let mut out = Vec::new();
        write_limits(&mut out, &info, true, now).unwrap();
        assert!(String::from_utf8(out).unwrap().contains("(in now)"));
    }
}
