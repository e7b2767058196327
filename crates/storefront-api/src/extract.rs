//! Request extractors.

use axum::extract::{FromRequest, Request};
use axum::Json;
use validator::Validate;

use crate::error::ApiError;

/// JSON body extractor that rejects malformed or invalid payloads with a
/// 400 validation failure (instead of axum's default 422) so every bad
/// request shares the `{"success": false, "error": ...}` shape.
pub struct ValidatedJson<T>(pub T);

impl<S, T> FromRequest<S> for ValidatedJson<T>
where
    T: serde::de::DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|e| ApiError::validation(format!("Invalid request body: {e}")))?;

        value
            .validate()
            .map_err(|e| ApiError::validation(format!("Invalid request data: {e}")))?;

        Ok(Self(value))
    }
}
