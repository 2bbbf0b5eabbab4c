//! JSON codecs for the HTTP transport
//!
//! Bodies are parsed as JSON regardless of the `Content-Type` header.

use crate::error::AppError;
use anyhow::Context;
use axum::{
    http::{header, HeaderValue},
    response::{IntoResponse, Response},
};
use serde::{de::DeserializeOwned, Serialize};

/// Decode a JSON request body into a typed request
///
/// Only the first JSON value in the body is read; anything after it is
/// ignored. A bare `null` decodes as `T::default()`.
///
/// # Returns
/// * `Ok(T)` - Decoded request
/// * `Err(AppError::InvalidRequest)` - If the body is empty or its first value is not valid JSON for `T`
pub fn decode_json<T: DeserializeOwned + Default>(body: &[u8]) -> Result<T, AppError> {
    let mut values = serde_json::Deserializer::from_slice(body).into_iter::<Option<T>>();
    match values.next() {
        Some(Ok(value)) => Ok(value.unwrap_or_default()),
        Some(Err(e)) => Err(AppError::InvalidRequest(e.to_string())),
        None => Err(AppError::InvalidRequest("empty request body".to_string())),
    }
}

/// Encode a typed response as a `200 OK` JSON body
pub fn encode_json<T: Serialize>(value: &T) -> Result<Response, AppError> {
    let bytes = serde_json::to_vec(value).context("Failed to encode response")?;
    Ok((
        [(
            header::CONTENT_TYPE,
            HeaderValue::from_static("application/json"),
        )],
        bytes,
    )
        .into_response())
}
