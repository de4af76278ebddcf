//! Log Routes
//!
//! - GET /api/users/:id/logs - Query a user's exercise log

use axum::{
    extract::{Path, Query, State},
    Json,
};
use std::sync::Arc;

use crate::api::dto::{LogParams, LogResponse};
use crate::api::error::{ApiError, ApiResult};
use crate::api::routes::exercises::parse_date;
use crate::api::state::AppState;
use crate::store::LogFilter;

/// GET /api/users/:id/logs
///
/// Return the user's log, filtered by optional inclusive `from`/`to`
/// date bounds and an optional `limit` cap. Filtering order: lower
/// bound, upper bound, then first-N. `count` reflects the entries
/// actually returned.
pub async fn get_logs(
    State(state): State<Arc<AppState>>,
    Path(user_id): Path<String>,
    Query(params): Query<LogParams>,
) -> ApiResult<Json<LogResponse>> {
    let filter = parse_filter(&params)?;

    let (user, entries) = state.exercises.logs(&user_id, filter).await?;

    Ok(Json(LogResponse::new(user, &entries)))
}

/// Build a log filter from query parameters, rejecting malformed input
fn parse_filter(params: &LogParams) -> ApiResult<LogFilter> {
    let from = params.from.as_deref().map(parse_date).transpose()?;
    let to = params.to.as_deref().map(parse_date).transpose()?;
    let limit = params.limit.as_deref().map(parse_limit).transpose()?;

    Ok(LogFilter { from, to, limit })
}

/// Parse the result-count cap
fn parse_limit(s: &str) -> ApiResult<usize> {
    s.trim()
        .parse()
        .map_err(|_| ApiError::Validation(format!("limit must be a non-negative integer, got '{}'", s)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn test_parse_filter_empty_is_unbounded() {
        let filter = parse_filter(&LogParams::default()).unwrap();
        assert_eq!(filter, LogFilter::unbounded());
    }

    #[test]
    fn test_parse_filter_full() {
        let params = LogParams {
            from: Some("2024-01-10".to_string()),
            to: Some("2024-01-31".to_string()),
            limit: Some("5".to_string()),
        };
        let filter = parse_filter(&params).unwrap();
        assert_eq!(filter.from, NaiveDate::from_ymd_opt(2024, 1, 10));
        assert_eq!(filter.to, NaiveDate::from_ymd_opt(2024, 1, 31));
        assert_eq!(filter.limit, Some(5));
    }

    #[test]
    fn test_parse_filter_bad_date() {
        let params = LogParams {
            from: Some("yesterday".to_string()),
            ..Default::default()
        };
        assert!(parse_filter(&params).is_err());
    }

    #[test]
    fn test_parse_limit_invalid() {
        assert!(parse_limit("abc").is_err());
        assert!(parse_limit("-1").is_err());
        assert_eq!(parse_limit("0").unwrap(), 0);
        assert_eq!(parse_limit(" 3 ").unwrap(), 3);
    }
}
