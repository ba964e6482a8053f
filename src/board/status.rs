//! User-facing status line messages

use crate::catalog::LoadReport;
use chrono::{DateTime, Local};
use std::fmt::Display;

pub const LOADING: &str = "Loading clips…";

/// Status after a successful load
pub fn loaded(report: &LoadReport) -> String {
    if report.count == 0 {
        return "No clips yet.".to_string();
    }

    let label = report
        .generated_at
        .as_deref()
        .and_then(|stamp| DateTime::parse_from_rfc3339(stamp).ok())
        .map(|stamp| {
            format!(
                "Updated {}",
                stamp.with_timezone(&Local).format("%Y-%m-%d %H:%M:%S")
            )
        })
        .unwrap_or_else(|| "Manifest loaded".to_string());

    format!("{} clip(s) • {}", report.count, label)
}

pub fn load_failed(reason: impl Display) -> String {
    format!("Could not load clips ({}).", reason)
}

/// Search result count, e.g. `1 match` / `3 matches`
pub fn matches(count: usize) -> String {
    if count == 1 {
        "1 match".to_string()
    } else {
        format!("{} matches", count)
    }
}

pub fn play_failed(title: &str) -> String {
    format!("Could not play {}", title)
}

pub fn write_refused(action: &str) -> String {
    format!("Sign in to {}.", action)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_loaded_messages() {
        let empty = LoadReport {
            count: 0,
            generated_at: None,
        };
        assert_eq!(loaded(&empty), "No clips yet.");

        let untimed = LoadReport {
            count: 3,
            generated_at: None,
        };
        assert_eq!(loaded(&untimed), "3 clip(s) • Manifest loaded");

        let timed = LoadReport {
            count: 2,
            generated_at: Some("2024-05-01T12:00:00.000Z".to_string()),
        };
        assert!(loaded(&timed).starts_with("2 clip(s) • Updated 2024-05-0"));
    }

    #[test]
    fn test_match_pluralization() {
        assert_eq!(matches(0), "0 matches");
        assert_eq!(matches(1), "1 match");
        assert_eq!(matches(2), "2 matches");
    }

    #[test]
    fn test_failure_messages() {
        assert_eq!(load_failed("HTTP 404"), "Could not load clips (HTTP 404).");
        assert_eq!(play_failed("Boo"), "Could not play Boo");
        assert_eq!(write_refused("delete clips"), "Sign in to delete clips.");
    }
}
