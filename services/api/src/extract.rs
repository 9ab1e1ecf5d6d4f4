//! Request Body Extraction
//!
//! `axum::Json` rejects bodies for content-type and shape mismatches. The
//! dashboard only gets a 400 when the body is not JSON at all; everything
//! else is coerced, so this extractor parses the raw bytes itself.

use axum::extract::{FromRequest, Request};
use bytes::Bytes;
use eduagent_core::lenient::{self, Lenient};
use serde_json::Value;

use crate::handlers::ApiError;

/// A JSON body that only fails on syntax errors.
///
/// An empty body, or JSON that is not an object, yields `T::default()`.
#[derive(Debug)]
pub struct JsonBody<T>(pub T);

impl<S, T> FromRequest<S> for JsonBody<T>
where
    S: Send + Sync,
    T: Lenient,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let bytes = Bytes::from_request(req, state)
            .await
            .map_err(ApiError::UnreadableBody)?;
        parse_body(&bytes).map(JsonBody)
    }
}

/// Parses a raw request body, see [`JsonBody`].
pub fn parse_body<T: Lenient>(bytes: &[u8]) -> Result<T, ApiError> {
    if bytes.iter().all(u8::is_ascii_whitespace) {
        return Ok(T::default());
    }
    let value: Value =
        serde_json::from_slice(bytes).map_err(|e| ApiError::InvalidInput(e.to_string()))?;
    Ok(lenient::from_value_or_default(value))
}
