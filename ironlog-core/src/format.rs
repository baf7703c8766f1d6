//! Formatting helpers shared across UIs.

use crate::types::{PrEvent, PrMetric};
use chrono::{DateTime, Utc};

/// Short label describing a personal record.
///
/// First-ever records show the value itself ("100 kg", "12 Wdh");
/// improvements show the gain ("+2.5 kg", "+1 Wdh", "+5% Vol", "+2.3% 1RM").
pub fn format_pr_diff(event: &PrEvent) -> String {
    if event.is_first() {
        return match event.metric {
            PrMetric::Weight | PrMetric::Volume => format!("{} kg", event.new_value),
            PrMetric::Reps => format!("{} Wdh", event.new_value),
            PrMetric::Estimated1rm => format!("{}", event.new_value),
        };
    }

    match event.metric {
        PrMetric::Reps => format!("+{} Wdh", event.diff),
        PrMetric::Weight => format!("+{} kg", event.diff),
        PrMetric::Volume => format!("+{}% Vol", event.diff_percent),
        PrMetric::Estimated1rm => format!("+{}% 1RM", event.diff_percent),
    }
}

/// Format a duration in seconds as `m:ss`, or `h:mm:ss` past an hour.
pub fn format_duration(seconds: u64) -> String {
    let h = seconds / 3600;
    let m = (seconds % 3600) / 60;
    let s = seconds % 60;
    if h > 0 {
        format!("{}:{:02}:{:02}", h, m, s)
    } else {
        format!("{}:{:02}", m, s)
    }
}

/// Format the time between `start` and `end` (or now, for a running workout).
pub fn format_duration_between(start: DateTime<Utc>, end: Option<DateTime<Utc>>) -> String {
    let end = end.unwrap_or_else(Utc::now);
    let seconds = end.signed_duration_since(start).num_seconds().max(0);
    format_duration(seconds as u64)
}

/// Format a timestamp as relative time (e.g., "2m ago").
pub fn format_relative_time(ts: DateTime<Utc>) -> String {
    let now = Utc::now();
    let duration = now.signed_duration_since(ts);

    if duration.num_seconds() < 0 {
        "just now".to_string()
    } else if duration.num_seconds() < 60 {
        format!("{}s ago", duration.num_seconds())
    } else if duration.num_minutes() < 60 {
        format!("{}m ago", duration.num_minutes())
    } else if duration.num_hours() < 24 {
        format!("{}h ago", duration.num_hours())
    } else if duration.num_days() < 7 {
        format!("{}d ago", duration.num_days())
    } else {
        ts.format("%b %d").to_string()
    }
}
