//! Core data types for the fitlog store
//!
//! This module defines the records persisted in the document store:
//! - `User`: an account with an embedded, ordered exercise log
//! - `Exercise`: a single immutable log entry
//! - `LogFilter`: date-range and count filtering for log queries

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A user record with its embedded exercise log
///
/// Users are created once and never updated or deleted through the API;
/// only their `log` grows, via the add-exercise operation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct User {
    /// Opaque unique identifier, generated on creation
    pub id: String,
    /// Unique display name, non-empty
    pub username: String,
    /// Ordered sequence of exercise entries, oldest first
    #[serde(default)]
    pub log: Vec<Exercise>,
}

impl User {
    /// Create a new user with an empty log
    pub fn new(id: impl Into<String>, username: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            username: username.into(),
            log: Vec::new(),
        }
    }

    /// Projection of this user without its log data
    pub fn summary(&self) -> UserSummary {
        UserSummary {
            id: self.id.clone(),
            username: self.username.clone(),
        }
    }
}

/// A user projection with the log data stripped out
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct UserSummary {
    pub id: String,
    pub username: String,
}

/// A single exercise entry
///
/// Immutable once stored. The date carries no time-of-day.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Exercise {
    /// What was done
    pub description: String,
    /// How long it took (unit not enforced)
    pub duration: i64,
    /// Calendar date the exercise happened on
    pub date: NaiveDate,
}

impl Exercise {
    pub fn new(description: impl Into<String>, duration: i64, date: NaiveDate) -> Self {
        Self {
            description: description.into(),
            duration,
            date,
        }
    }

    /// Render the date the way clients see it, e.g. "Mon Jan 01 2024"
    pub fn date_string(&self) -> String {
        format_date(self.date)
    }
}

/// Render a calendar date as a fixed human-readable string
/// without time-of-day, e.g. "Mon Jan 01 2024".
pub fn format_date(date: NaiveDate) -> String {
    date.format("%a %b %d %Y").to_string()
}

/// Date-range and count filtering for log queries
///
/// Bounds are inclusive on both ends. Filtering order is fixed:
/// lower bound, then upper bound, then first-N cap. An absent
/// limit means the full sequence is returned.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LogFilter {
    /// Inclusive lower bound on date
    pub from: Option<NaiveDate>,
    /// Inclusive upper bound on date
    pub to: Option<NaiveDate>,
    /// Keep only the first N entries after date filtering
    pub limit: Option<usize>,
}

impl LogFilter {
    /// Filter with no bounds and no cap
    pub fn unbounded() -> Self {
        Self::default()
    }

    /// Apply this filter to a stored log, preserving stored order
    pub fn apply(&self, log: &[Exercise]) -> Vec<Exercise> {
        let mut entries: Vec<Exercise> = log
            .iter()
            .filter(|e| self.from.map_or(true, |from| e.date >= from))
            .filter(|e| self.to.map_or(true, |to| e.date <= to))
            .cloned()
            .collect();

        if let Some(limit) = self.limit {
            entries.truncate(limit);
        }

        entries
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    fn sample_log() -> Vec<Exercise> {
        vec![
            Exercise::new("run", 30, date("2024-01-01")),
            Exercise::new("swim", 45, date("2024-01-15")),
            Exercise::new("lift", 60, date("2024-02-01")),
        ]
    }

    #[test]
    fn test_format_date() {
        assert_eq!(format_date(date("2024-01-01")), "Mon Jan 01 2024");
        assert_eq!(format_date(date("2024-02-29")), "Thu Feb 29 2024");
    }

    #[test]
    fn test_filter_unbounded_returns_everything() {
        let log = sample_log();
        let result = LogFilter::unbounded().apply(&log);
        assert_eq!(result, log);
    }

    #[test]
    fn test_filter_date_range_inclusive() {
        let log = sample_log();
        let filter = LogFilter {
            from: Some(date("2024-01-10")),
            to: Some(date("2024-01-31")),
            limit: None,
        };
        let result = filter.apply(&log);
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].description, "swim");

        // Bounds equal to an entry's date keep the entry
        let filter = LogFilter {
            from: Some(date("2024-01-01")),
            to: Some(date("2024-02-01")),
            limit: None,
        };
        assert_eq!(filter.apply(&log).len(), 3);
    }

    #[test]
    fn test_filter_limit_takes_first_n_after_range() {
        let log = sample_log();
        let filter = LogFilter {
            from: Some(date("2024-01-10")),
            to: None,
            limit: Some(1),
        };
        let result = filter.apply(&log);
        assert_eq!(result.len(), 1);
        // First after filtering, in stored order
        assert_eq!(result[0].description, "swim");
    }

    #[test]
    fn test_filter_limit_larger_than_log() {
        let log = sample_log();
        let filter = LogFilter {
            limit: Some(10),
            ..Default::default()
        };
        assert_eq!(filter.apply(&log).len(), 3);
    }

    #[test]
    fn test_user_summary_drops_log() {
        let mut user = User::new("u1", "alice");
        user.log = sample_log();
        let summary = user.summary();
        assert_eq!(summary.id, "u1");
        assert_eq!(summary.username, "alice");
    }

    #[test]
    fn test_user_log_defaults_on_deserialize() {
        let user: User = serde_json::from_str(r#"{"id":"u1","username":"alice"}"#).unwrap();
        assert!(user.log.is_empty());
    }
}
