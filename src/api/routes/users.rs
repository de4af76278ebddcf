//! User Routes
//!
//! - POST /api/users - Create a user
//! - GET /api/users - List all users

use axum::{extract::State, http::StatusCode, Json};
use std::sync::Arc;

use crate::api::dto::{CreateUserRequest, UserResponse};
use crate::api::error::{ApiError, ApiResult};
use crate::api::extract::JsonOrForm;
use crate::api::state::AppState;

/// POST /api/users
///
/// Create a new user. Usernames are unique; a taken name surfaces as a
/// generic creation failure.
pub async fn create_user(
    State(state): State<Arc<AppState>>,
    JsonOrForm(req): JsonOrForm<CreateUserRequest>,
) -> ApiResult<(StatusCode, Json<UserResponse>)> {
    validate_username(&req.username)?;

    let user = state.users.create(req.username.trim()).await?;

    Ok((StatusCode::CREATED, Json(UserResponse::from(user.summary()))))
}

/// GET /api/users
///
/// List all users, log data excluded. No pagination; store order.
pub async fn list_users(
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<Vec<UserResponse>>> {
    let users = state.users.list().await?;

    Ok(Json(users.into_iter().map(UserResponse::from).collect()))
}

/// Validate a requested username
fn validate_username(username: &str) -> ApiResult<()> {
    if username.trim().is_empty() {
        return Err(ApiError::Validation("username cannot be empty".to_string()));
    }

    if username.len() > 100 {
        return Err(ApiError::Validation(
            "username exceeds maximum length of 100 characters".to_string(),
        ));
    }

    Ok(())
}
