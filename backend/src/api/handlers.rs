//! HTTP handlers
//!
//! Each route handler decodes the body, calls its endpoint and encodes the
//! result. The shared [`serve`] function is the whole transport contract.

use crate::api::codec::{decode_json, encode_json};
use crate::endpoints::{CountRequest, Endpoint, RequestContext, UppercaseRequest};
use crate::error::AppError;
use crate::state::AppState;
use axum::{
    body::Bytes,
    extract::{Extension, State},
    response::{Json, Response},
};
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use std::sync::Arc;

/// Health check response
#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Always `"healthy"` while the server answers
    pub status: String,
    /// Crate version of the running binary
    pub version: String,
}

/// Decode `body`, run it through `endpoint` and encode the response
pub async fn serve<E, Req>(
    endpoint: &E,
    ctx: RequestContext,
    body: &[u8],
) -> Result<Response, AppError>
where
    E: Endpoint<Req>,
    E::Response: Serialize,
    Req: DeserializeOwned + Default + Send + 'static,
{
    let request: Req = decode_json(body)?;
    let response = endpoint.call(ctx, request).await?;
    encode_json(&response)
}

fn context_or_default(ctx: Option<Extension<RequestContext>>) -> RequestContext {
    ctx.map(|Extension(ctx)| ctx).unwrap_or_default()
}

/// POST /uppercase - Uppercase a string
pub async fn uppercase(
    State(state): State<Arc<AppState>>,
    ctx: Option<Extension<RequestContext>>,
    body: Bytes,
) -> Result<Response, AppError> {
    serve::<_, UppercaseRequest>(&state.endpoints.uppercase, context_or_default(ctx), &body).await
}

/// POST /count - Count the characters of a string
pub async fn count(
    State(state): State<Arc<AppState>>,
    ctx: Option<Extension<RequestContext>>,
    body: Bytes,
) -> Result<Response, AppError> {
    serve::<_, CountRequest>(&state.endpoints.count, context_or_default(ctx), &body).await
}

/// GET /health - Liveness probe
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}
