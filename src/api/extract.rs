//! Request body extraction
//!
//! POST bodies are accepted either as JSON or as urlencoded form data,
//! dispatched on the Content-Type header. Rejections surface through
//! [`ApiError`] so malformed bodies produce the same `{"error": msg}`
//! shape as every other failure.

use axum::{
    async_trait,
    extract::{Form, FromRequest, Request},
    http::header::CONTENT_TYPE,
    Json,
};
use serde::de::DeserializeOwned;

use crate::api::error::ApiError;

/// Extracts `T` from a JSON or urlencoded form body
#[derive(Debug)]
pub struct JsonOrForm<T>(pub T);

#[async_trait]
impl<S, T> FromRequest<S> for JsonOrForm<T>
where
    S: Send + Sync,
    T: DeserializeOwned + Send + 'static,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let content_type = req
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .unwrap_or_default()
            .to_string();

        if content_type.starts_with("application/x-www-form-urlencoded") {
            let Form(payload) = Form::<T>::from_request(req, state)
                .await
                .map_err(|e| ApiError::Validation(e.body_text()))?;
            return Ok(Self(payload));
        }

        // Default to JSON, matching the primary contract
        let Json(payload) = Json::<T>::from_request(req, state)
            .await
            .map_err(|e| ApiError::Validation(e.body_text()))?;
        Ok(Self(payload))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{body::Body, http::Request as HttpRequest};
    use serde::Deserialize;

    #[derive(Debug, Deserialize, PartialEq)]
    struct Payload {
        username: String,
    }

    #[tokio::test]
    async fn test_extracts_json_body() {
        let req = HttpRequest::builder()
            .method("POST")
            .header("content-type", "application/json")
            .body(Body::from(r#"{"username":"alice"}"#))
            .unwrap();

        let JsonOrForm(payload) = JsonOrForm::<Payload>::from_request(req, &())
            .await
            .unwrap();
        assert_eq!(payload.username, "alice");
    }

    #[tokio::test]
    async fn test_extracts_form_body() {
        let req = HttpRequest::builder()
            .method("POST")
            .header("content-type", "application/x-www-form-urlencoded")
            .body(Body::from("username=alice"))
            .unwrap();

        let JsonOrForm(payload) = JsonOrForm::<Payload>::from_request(req, &())
            .await
            .unwrap();
        assert_eq!(payload.username, "alice");
    }

    #[tokio::test]
    async fn test_malformed_json_is_validation_error() {
        let req = HttpRequest::builder()
            .method("POST")
            .header("content-type", "application/json")
            .body(Body::from("{not json"))
            .unwrap();

        let err = JsonOrForm::<Payload>::from_request(req, &())
            .await
            .unwrap_err();
        assert!(matches!(err, ApiError::Validation(_)));
    }
}
