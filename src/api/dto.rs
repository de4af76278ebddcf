//! Data Transfer Objects
//!
//! Request and response types for the API endpoints.
//! These types are serialized/deserialized to/from JSON (or, for POST
//! bodies, urlencoded form data). Record ids appear on the wire as
//! `_id`; dates are always rendered as calendar-date strings like
//! "Mon Jan 01 2024", never as timestamps.

use serde::{Deserialize, Serialize};

use crate::store::{format_date, Exercise, User, UserSummary};

/// A value that may arrive as a JSON number or as a (form) string
///
/// Form bodies always carry strings; JSON clients usually send
/// numbers. Both are accepted and validated explicitly at the
/// boundary.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum NumberOrString {
    Number(i64),
    String(String),
}

impl NumberOrString {
    /// Parse into an integer, naming the field in the error
    pub fn parse(&self, field: &str) -> Result<i64, String> {
        match self {
            NumberOrString::Number(n) => Ok(*n),
            NumberOrString::String(s) => s
                .trim()
                .parse()
                .map_err(|_| format!("{} must be an integer, got '{}'", field, s)),
        }
    }
}

// ============================================
// USER DTOs
// ============================================

/// Create user request
#[derive(Debug, Deserialize)]
pub struct CreateUserRequest {
    /// Desired username
    pub username: String,
}

/// User response, `{username, _id}`
#[derive(Debug, Serialize)]
pub struct UserResponse {
    pub username: String,
    #[serde(rename = "_id")]
    pub id: String,
}

impl From<UserSummary> for UserResponse {
    fn from(user: UserSummary) -> Self {
        Self {
            username: user.username,
            id: user.id,
        }
    }
}

// ============================================
// EXERCISE DTOs
// ============================================

/// Add exercise request
#[derive(Debug, Deserialize)]
pub struct AddExerciseRequest {
    /// What was done
    pub description: String,
    /// How long it took, integer
    pub duration: NumberOrString,
    /// Optional calendar date (YYYY-MM-DD), defaults to today
    #[serde(default)]
    pub date: Option<String>,
}

/// Exercise response, `{_id, username, description, duration, date}`
#[derive(Debug, Serialize)]
pub struct ExerciseResponse {
    #[serde(rename = "_id")]
    pub id: String,
    pub username: String,
    pub description: String,
    pub duration: i64,
    pub date: String,
}

impl ExerciseResponse {
    pub fn new(user: &User, exercise: &Exercise) -> Self {
        Self {
            id: user.id.clone(),
            username: user.username.clone(),
            description: exercise.description.clone(),
            duration: exercise.duration,
            date: exercise.date_string(),
        }
    }
}

// ============================================
// LOG DTOs
// ============================================

/// Log query parameters, all optional
#[derive(Debug, Default, Deserialize)]
pub struct LogParams {
    /// Inclusive lower date bound (YYYY-MM-DD)
    #[serde(default)]
    pub from: Option<String>,
    /// Inclusive upper date bound (YYYY-MM-DD)
    #[serde(default)]
    pub to: Option<String>,
    /// Cap on the number of returned entries
    #[serde(default)]
    pub limit: Option<String>,
}

/// Log response, `{_id, username, count, log}`
///
/// `count` is the number of entries after filtering, not the user's
/// total exercise count.
#[derive(Debug, Serialize)]
pub struct LogResponse {
    #[serde(rename = "_id")]
    pub id: String,
    pub username: String,
    pub count: usize,
    pub log: Vec<LogEntry>,
}

impl LogResponse {
    pub fn new(user: UserSummary, entries: &[Exercise]) -> Self {
        Self {
            id: user.id,
            username: user.username,
            count: entries.len(),
            log: entries.iter().map(LogEntry::from).collect(),
        }
    }
}

/// One entry in a log response; no ids, just the exercise fields
#[derive(Debug, Serialize)]
pub struct LogEntry {
    pub description: String,
    pub duration: i64,
    pub date: String,
}

impl From<&Exercise> for LogEntry {
    fn from(exercise: &Exercise) -> Self {
        Self {
            description: exercise.description.clone(),
            duration: exercise.duration,
            date: format_date(exercise.date),
        }
    }
}

// ============================================
// HEALTH DTOs
// ============================================

/// Full health check response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// Overall status: healthy or unhealthy
    pub status: String,
    /// Store status
    pub store: String,
    /// Server uptime in seconds
    pub uptime_seconds: u64,
    /// Application version
    pub version: String,
}
