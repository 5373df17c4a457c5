//! Validated form-wrapped JSON extractor.
//!
//! Every mock endpoint receives `application/x-www-form-urlencoded` bodies
//! with a single `messages` field holding a JSON document. `JsonForm<T>`
//! decodes that field, deserializes it into `T` and runs
//! `validator::Validate::validate()`. Any failure becomes a 422 response
//! listing the violated fields, matching the surface of the service being
//! mocked.

use axum::extract::rejection::FormRejection;
use axum::extract::{Form, FromRequest};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use validator::{Validate, ValidationErrors, ValidationErrorsKind};

use crate::shared::errors::ApiError;

#[derive(Deserialize)]
struct MessagesForm {
    messages: String,
}

/// An extractor that unwraps the `messages` form field, deserializes the
/// JSON inside and validates it.
///
/// # Usage
///
/// ```ignore
/// async fn handler(JsonForm(req): JsonForm<CardUpdateRequest>) {
///     // `req` is guaranteed to pass validation
/// }
/// ```
pub struct JsonForm<T>(pub T);

impl<S, T> FromRequest<S> for JsonForm<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: axum::extract::Request, state: &S) -> Result<Self, Self::Rejection> {
        let Form(form) = Form::<MessagesForm>::from_request(req, state)
            .await
            .map_err(|e: FormRejection| ApiError::Validation(format!("messages: {e}")))?;

        let value: T = serde_json::from_str(&form.messages)
            .map_err(|e| ApiError::Validation(format!("messages: {e}")))?;

        value
            .validate()
            .map_err(|errors| ApiError::Validation(describe(&errors)))?;

        Ok(JsonForm(value))
    }
}

/// Render all violations as `field: message` pairs, recursing into nested
/// lists so `card[0].no` style names come out for list items.
fn describe(errors: &ValidationErrors) -> String {
    let mut parts = Vec::new();
    collect("", errors, &mut parts);
    if parts.is_empty() {
        return "validation failed".to_string();
    }
    parts.sort();
    parts.join("; ")
}

fn collect(prefix: &str, errors: &ValidationErrors, out: &mut Vec<String>) {
    for (field, kind) in errors.errors() {
        let name = if prefix.is_empty() {
            (*field).to_string()
        } else {
            format!("{prefix}.{field}")
        };
        match kind {
            ValidationErrorsKind::Field(errs) => {
                for err in errs {
                    let message = err
                        .message
                        .as_ref()
                        .map(|m| m.to_string())
                        .unwrap_or_else(|| err.code.to_string());
                    out.push(format!("{name}: {message}"));
                }
            }
            ValidationErrorsKind::Struct(inner) => collect(&name, inner, out),
            ValidationErrorsKind::List(items) => {
                for (index, inner) in items {
                    collect(&format!("{name}[{index}]"), inner, out);
                }
            }
        }
    }
}

// ── Tests ──────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use axum::routing::post;
    use axum::Router;
    use serde::Deserialize;
    use validator::Validate;

    use super::*;
    use crate::shared::validation;

    #[derive(Debug, Deserialize, Validate)]
    struct TestBody {
        #[validate(custom(function = validation::business_id))]
        bid: String,
        #[validate(length(equal = 16, message = "bkey는 16자리여야 합니다."))]
        bkey: String,
    }

    async fn handler(JsonForm(_body): JsonForm<TestBody>) -> &'static str {
        "ok"
    }

    fn app() -> Router {
        Router::new().route("/test", post(handler))
    }

    fn form_request(json: &str) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri("/test")
            .header("content-type", "application/x-www-form-urlencoded")
            .body(Body::from(format!("messages={}", urlencode(json))))
            .unwrap()
    }

    fn urlencode(raw: &str) -> String {
        raw.bytes()
            .map(|b| match b {
                b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'_' | b'.' | b'~' => {
                    (b as char).to_string()
                }
                _ => format!("%{b:02X}"),
            })
            .collect()
    }

    async fn send(req: Request<Body>) -> axum::http::Response<Body> {
        use tower::Service;
        let mut svc = app().into_service();
        svc.call(req).await.unwrap()
    }

    #[tokio::test]
    async fn valid_messages_field_passes() {
        let resp = send(form_request(r#"{"bid":"EV","bkey":"1111111111111111"}"#)).await;
        assert_eq!(resp.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn missing_messages_field_is_rejected() {
        let req = Request::builder()
            .method("POST")
            .uri("/test")
            .header("content-type", "application/x-www-form-urlencoded")
            .body(Body::from("other=1"))
            .unwrap();
        let resp = send(req).await;
        assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[tokio::test]
    async fn undecodable_json_is_rejected() {
        let resp = send(form_request("not json")).await;
        assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[tokio::test]
    async fn field_violation_names_the_field() {
        let resp = send(form_request(r#"{"bid":"ZZ","bkey":"1111111111111111"}"#)).await;
        assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);
        let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX).await.unwrap();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        let detail = body["detail"].as_str().unwrap();
        assert!(detail.starts_with("bid: "), "unexpected detail {detail}");
    }
}
