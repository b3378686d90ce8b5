//! Request body extractor accepting JSON or URL-encoded forms.

use crate::errors::AppError;
use axum::{
    extract::{FromRequest, Json, Request},
    http::header::CONTENT_TYPE,
    response::{IntoResponse, Response},
};
use axum_extra::extract::Form;
use serde::de::DeserializeOwned;

/// Deserializes the body as a form when the request says
/// `application/x-www-form-urlencoded`, and as JSON otherwise.
///
/// Forms build sequences from repeated keys (`tags=a&tags=b`). Any body that
/// fails to parse is rejected with `400 { "error": ... }`.
///
/// # Example
/// ```ignore
/// use axum_helpers::extractors::JsonOrForm;
///
/// async fn create(JsonOrForm(payload): JsonOrForm<CreateRecipe>) { /* ... */ }
/// ```
pub struct JsonOrForm<T>(pub T);

fn is_form(req: &Request) -> bool {
    req.headers()
        .get(CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .map(|value| {
            value
                .trim_start()
                .to_ascii_lowercase()
                .starts_with("application/x-www-form-urlencoded")
        })
        .unwrap_or(false)
}

impl<T, S> FromRequest<S> for JsonOrForm<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = Response;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        if is_form(&req) {
            let Form(data) = Form::<T>::from_request(req, state)
                .await
                .map_err(|e| AppError::BadRequest(e.to_string()).into_response())?;
            Ok(JsonOrForm(data))
        } else {
            let Json(data) = Json::<T>::from_request(req, state)
                .await
                .map_err(|e| AppError::BadRequest(e.body_text()).into_response())?;
            Ok(JsonOrForm(data))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{Router, body::Body, http::StatusCode, routing::post};
    use http_body_util::BodyExt;
    use serde::{Deserialize, Serialize};
    use tower::ServiceExt;

    #[derive(Debug, Serialize, Deserialize, PartialEq)]
    struct Dish {
        name: Option<String>,
        #[serde(default, alias = "tags[]")]
        tags: Option<Vec<String>>,
    }

    fn app() -> Router {
        Router::new().route(
            "/",
            post(|JsonOrForm(dish): JsonOrForm<Dish>| async move { axum::Json(dish) }),
        )
    }

    async fn send(content_type: &str, body: &'static str) -> (StatusCode, serde_json::Value) {
        let response = app()
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/")
                    .header(CONTENT_TYPE, content_type)
                    .body(Body::from(body))
                    .unwrap(),
            )
            .await
            .unwrap();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn test_json_body() {
        let (status, body) = send(
            "application/json",
            r#"{"name":"soup","tags":["hot","quick"]}"#,
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["name"], "soup");
        assert_eq!(body["tags"], serde_json::json!(["hot", "quick"]));
    }

    #[tokio::test]
    async fn test_form_body_with_repeated_keys() {
        let (status, body) = send(
            "application/x-www-form-urlencoded",
            "name=soup&tags=hot&tags=quick",
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["name"], "soup");
        assert_eq!(body["tags"], serde_json::json!(["hot", "quick"]));
    }

    #[tokio::test]
    async fn test_form_body_with_bracket_keys() {
        let (status, body) = send(
            "application/x-www-form-urlencoded; charset=UTF-8",
            "name=soup&tags%5B%5D=hot",
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["tags"], serde_json::json!(["hot"]));
    }

    #[tokio::test]
    async fn test_malformed_json_is_bad_request() {
        let (status, body) = send("application/json", "{not json").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body["error"].is_string());
    }
}
