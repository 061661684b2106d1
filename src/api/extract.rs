//! Request body extractor accepting JSON or urlencoded forms.

use axum::{
    Form, Json,
    extract::{FromRequest, Request},
    http::header,
};
use serde::de::DeserializeOwned;
use serde_json::json;

use crate::error::AppError;

/// Deserializes the request body as JSON or as a urlencoded form, chosen by
/// `Content-Type`.
///
/// Any rejection becomes an [`AppError::Validation`], so malformed bodies get
/// the same 400 error shape as failed field validation.
///
/// # Example
///
/// ```rust,ignore
/// async fn handler(JsonOrForm(payload): JsonOrForm<ShortenRequest>) { /* ... */ }
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonOrForm<T>(pub T);

impl<S, T> FromRequest<S> for JsonOrForm<T>
where
    S: Send + Sync,
    T: DeserializeOwned,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let content_type = req
            .headers()
            .get(header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .unwrap_or_default()
            .to_string();
        let mime = content_type
            .split(';')
            .next()
            .unwrap_or_default()
            .trim()
            .to_ascii_lowercase();

        if mime == "application/x-www-form-urlencoded" {
            let Form(value) = Form::<T>::from_request(req, state)
                .await
                .map_err(|rejection| {
                    AppError::bad_request(rejection.body_text(), json!({ "content_type": mime }))
                })?;
            return Ok(Self(value));
        }

        if mime == "application/json" || mime.ends_with("+json") {
            let Json(value) = Json::<T>::from_request(req, state)
                .await
                .map_err(|rejection| {
                    AppError::bad_request(rejection.body_text(), json!({ "content_type": mime }))
                })?;
            return Ok(Self(value));
        }

        Err(AppError::bad_request(
            "Expected an application/json or application/x-www-form-urlencoded body",
            json!({ "content_type": content_type }),
        ))
    }
}
