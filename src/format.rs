//! Display Formatting
//!
//! Date wording, text truncation and the CSS class maps for priority,
//! status and progress styling. All functions are pure; callers pass in
//! the current date or time where one is needed.

use chrono::{Days, NaiveDate, NaiveDateTime};

use crate::models::{ProjectStatus, TaskPriority};

/// "Aug 1, 2026"
pub fn format_date(date: NaiveDate) -> String {
    date.format("%b %-d, %Y").to_string()
}

/// "Aug 1, 2026 9:05 AM"
pub fn format_date_time(dt: NaiveDateTime) -> String {
    dt.format("%b %-d, %Y %-I:%M %p").to_string()
}

/// Coarse "x ago" wording for created/updated timestamps
pub fn format_relative_date(then: NaiveDateTime, now: NaiveDateTime) -> String {
    let seconds = (now - then).num_seconds();
    if seconds < 60 {
        return "just now".to_string();
    }
    let minutes = seconds / 60;
    if minutes < 60 {
        return plural(minutes, "minute");
    }
    let hours = minutes / 60;
    if hours < 24 {
        return plural(hours, "hour");
    }
    let days = hours / 24;
    if days < 30 {
        return plural(days, "day");
    }
    let months = days / 30;
    if months < 12 {
        return plural(months, "month");
    }
    plural(days / 365, "year")
}

fn plural(n: i64, unit: &str) -> String {
    if n == 1 {
        format!("1 {} ago", unit)
    } else {
        format!("{} {}s ago", n, unit)
    }
}

/// Due-date chip wording: Today / Tomorrow / Overdue: Aug 1 / Aug 1, 2026
pub fn format_due_date(due: Option<NaiveDate>, today: NaiveDate) -> String {
    let Some(date) = due else {
        return "No due date".to_string();
    };
    if date == today {
        return "Today".to_string();
    }
    if Some(date) == today.checked_add_days(Days::new(1)) {
        return "Tomorrow".to_string();
    }
    if date < today {
        return format!("Overdue: {}", date.format("%b %-d"));
    }
    format_date(date)
}

/// Cut text to `max_chars` characters, appending an ellipsis when cut
pub fn truncate_text(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }
    let mut out: String = text.chars().take(max_chars).collect();
    out.push_str("...");
    out
}

pub fn priority_class(priority: TaskPriority) -> &'static str {
    match priority {
        TaskPriority::Urgent => "priority-urgent",
        TaskPriority::High => "priority-high",
        TaskPriority::Medium => "priority-medium",
        TaskPriority::Low => "priority-low",
    }
}

pub fn status_class(status: ProjectStatus) -> &'static str {
    match status {
        ProjectStatus::Completed => "status-completed",
        ProjectStatus::AlmostDone => "status-almost-done",
        ProjectStatus::InProgress => "status-in-progress",
        ProjectStatus::Started => "status-started",
        ProjectStatus::NotStarted => "status-not-started",
        ProjectStatus::NoTasks => "status-no-tasks",
    }
}

pub fn progress_class(percentage: f64) -> &'static str {
    if percentage >= 100.0 {
        "progress-complete"
    } else if percentage >= 75.0 {
        "progress-high"
    } else if percentage >= 50.0 {
        "progress-medium"
    } else if percentage >= 25.0 {
        "progress-low"
    } else {
        "progress-minimal"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn datetime(y: i32, m: u32, d: u32, h: u32, min: u32) -> NaiveDateTime {
        date(y, m, d).and_hms_opt(h, min, 0).unwrap()
    }

    #[test]
    fn test_format_date() {
        assert_eq!(format_date(date(2026, 8, 1)), "Aug 1, 2026");
        assert_eq!(format_date(date(2026, 12, 25)), "Dec 25, 2026");
    }

    #[test]
    fn test_format_date_time() {
        assert_eq!(format_date_time(datetime(2026, 8, 1, 9, 5)), "Aug 1, 2026 9:05 AM");
        assert_eq!(format_date_time(datetime(2026, 8, 1, 17, 45)), "Aug 1, 2026 5:45 PM");
    }

    #[test]
    fn test_format_relative_date() {
        let now = datetime(2026, 8, 23, 12, 0);
        assert_eq!(format_relative_date(datetime(2026, 8, 23, 11, 59), now), "1 minute ago");
        assert_eq!(format_relative_date(datetime(2026, 8, 23, 11, 30), now), "30 minutes ago");
        assert_eq!(format_relative_date(datetime(2026, 8, 23, 9, 0), now), "3 hours ago");
        assert_eq!(format_relative_date(datetime(2026, 8, 20, 12, 0), now), "3 days ago");
        assert_eq!(format_relative_date(datetime(2026, 6, 1, 12, 0), now), "2 months ago");
        assert_eq!(format_relative_date(datetime(2024, 8, 1, 12, 0), now), "2 years ago");
        // A timestamp seconds old (or from a slightly skewed clock) reads as now
        assert_eq!(format_relative_date(datetime(2026, 8, 23, 12, 0), now), "just now");
    }

    #[test]
    fn test_format_due_date() {
        let today = date(2026, 8, 23);
        assert_eq!(format_due_date(None, today), "No due date");
        assert_eq!(format_due_date(Some(date(2026, 8, 23)), today), "Today");
        assert_eq!(format_due_date(Some(date(2026, 8, 24)), today), "Tomorrow");
        assert_eq!(format_due_date(Some(date(2026, 8, 20)), today), "Overdue: Aug 20");
        assert_eq!(format_due_date(Some(date(2026, 9, 15)), today), "Sep 15, 2026");
    }

    #[test]
    fn test_truncate_text() {
        assert_eq!(truncate_text("short", 100), "short");
        assert_eq!(truncate_text("exactly", 7), "exactly");
        assert_eq!(truncate_text("overlong text", 8), "overlong...");
        // Counts characters, not bytes
        assert_eq!(truncate_text("日本語テキスト", 3), "日本語...");
    }

    #[test]
    fn test_class_maps() {
        assert_eq!(priority_class(TaskPriority::Urgent), "priority-urgent");
        assert_eq!(status_class(ProjectStatus::AlmostDone), "status-almost-done");
        assert_eq!(progress_class(100.0), "progress-complete");
        assert_eq!(progress_class(80.0), "progress-high");
        assert_eq!(progress_class(50.0), "progress-medium");
        assert_eq!(progress_class(25.0), "progress-low");
        assert_eq!(progress_class(10.0), "progress-minimal");
    }
}
