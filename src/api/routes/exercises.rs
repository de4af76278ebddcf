//! Exercise Routes
//!
//! - POST /api/users/:id/exercises - Add an exercise to a user's log

use axum::{
    extract::{Path, State},
    Json,
};
use chrono::NaiveDate;
use std::sync::Arc;

use crate::api::dto::{AddExerciseRequest, ExerciseResponse};
use crate::api::error::{ApiError, ApiResult};
use crate::api::extract::JsonOrForm;
use crate::api::state::AppState;

/// POST /api/users/:id/exercises
///
/// Append an exercise to the referenced user's log. The date defaults
/// to the current date when omitted; malformed duration or date input
/// is rejected rather than coerced.
pub async fn add_exercise(
    State(state): State<Arc<AppState>>,
    Path(user_id): Path<String>,
    JsonOrForm(req): JsonOrForm<AddExerciseRequest>,
) -> ApiResult<Json<ExerciseResponse>> {
    if req.description.trim().is_empty() {
        return Err(ApiError::Validation(
            "description cannot be empty".to_string(),
        ));
    }

    let duration = req.duration.parse("duration").map_err(ApiError::Validation)?;
    let date = req.date.as_deref().map(parse_date).transpose()?;

    let (user, exercise) = state
        .exercises
        .add(&user_id, req.description.trim(), duration, date)
        .await?;

    Ok(Json(ExerciseResponse::new(&user, &exercise)))
}

/// Parse a calendar date in YYYY-MM-DD form
pub fn parse_date(s: &str) -> ApiResult<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d")
        .map_err(|_| ApiError::Validation(format!("invalid date '{}', expected YYYY-MM-DD", s)))
}
