//! JSON body and path extractors that reject through [`AppError`].
//!
//! Axum's own `Json` and `Path` reject with plain-text bodies. These
//! wrappers keep malformed requests in the `{ "error", "code" }` envelope.

use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::extract::{FromRequest, FromRequestParts, Path, Request};
use axum::http::request::Parts;
use axum::Json;
use serde::de::DeserializeOwned;

use crate::error::AppError;

/// JSON request body. Rejects with `400 BAD_REQUEST` when the content type
/// is wrong or the body does not deserialize into `T`.
#[derive(Debug, Clone, Copy, Default)]
pub struct AppJson<T>(pub T);

impl<S, T> FromRequest<S> for AppJson<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(json_rejected)?;
        Ok(Self(value))
    }
}

/// Path parameters. Rejects with `400 BAD_REQUEST` when a segment does not
/// parse, e.g. a non-numeric entry id.
#[derive(Debug, Clone, Copy)]
pub struct AppPath<T>(pub T);

impl<S, T> FromRequestParts<S> for AppPath<T>
where
    T: DeserializeOwned + Send,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(value) = Path::<T>::from_request_parts(parts, state)
            .await
            .map_err(path_rejected)?;
        Ok(Self(value))
    }
}

fn json_rejected(rejection: JsonRejection) -> AppError {
    tracing::debug!(
        status = %rejection.status(),
        error = %rejection.body_text(),
        "Rejected JSON body",
    );
    AppError::BadRequest(rejection.body_text())
}

fn path_rejected(rejection: PathRejection) -> AppError {
    tracing::debug!(
        status = %rejection.status(),
        error = %rejection.body_text(),
        "Rejected path parameters",
    );
    AppError::BadRequest(rejection.body_text())
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;
    use axum::body::Body;
    use axum::http::header::CONTENT_TYPE;
    use serde::Deserialize;

    use super::*;

    #[derive(Debug, Deserialize)]
    struct Password {
        password: String,
    }

    fn json_request(content_type: Option<&str>, body: &'static str) -> Request {
        let mut builder = Request::builder().method("DELETE").uri("/api/v1/entries/1");
        if let Some(content_type) = content_type {
            builder = builder.header(CONTENT_TYPE, content_type);
        }
        builder.body(Body::from(body)).unwrap()
    }

    #[tokio::test]
    async fn well_formed_body_is_extracted() {
        let req = json_request(Some("application/json"), r#"{"password":"pw"}"#);
        let AppJson(body) = AppJson::<Password>::from_request(req, &()).await.unwrap();
        assert_eq!(body.password, "pw");
    }

    #[tokio::test]
    async fn missing_content_type_is_bad_request() {
        let req = json_request(None, "");
        let result = AppJson::<Password>::from_request(req, &()).await;
        assert_matches!(result, Err(AppError::BadRequest(_)));
    }

    #[tokio::test]
    async fn truncated_json_is_bad_request() {
        let req = json_request(Some("application/json"), "{");
        let result = AppJson::<Password>::from_request(req, &()).await;
        assert_matches!(result, Err(AppError::BadRequest(_)));
    }
}
