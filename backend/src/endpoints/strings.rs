//! Endpoints for the string service
//!
//! Request and response types here define the JSON wire format of the
//! `/uppercase` and `/count` routes.

use super::{Endpoint, RequestContext};
use crate::error::AppError;
use crate::services::StringService;
use async_trait::async_trait;
use serde::{Deserialize, Deserializer, Serialize};
use std::sync::Arc;

/// Read a string field, treating JSON `null` as the empty string
fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

/// Uppercase request
///
/// A missing or `null` `s` decodes as `""`. The key also matches as `S`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UppercaseRequest {
    /// String to convert
    #[serde(alias = "S", deserialize_with = "null_as_empty")]
    pub s: String,
}

/// Uppercase response
///
/// Service errors travel as a message in `err` because the response is always
/// encoded as a successful exchange.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UppercaseResponse {
    /// Uppercased string, empty on failure
    pub v: String,
    /// Service error message, omitted on success
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub err: Option<String>,
}

/// Count request
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CountRequest {
    /// String to measure
    #[serde(alias = "S", deserialize_with = "null_as_empty")]
    pub s: String,
}

/// Count response
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CountResponse {
    /// UTF-8 byte length of the request string
    pub v: usize,
}

/// Endpoint wrapping [`StringService::uppercase`]
#[derive(Clone)]
pub struct UppercaseEndpoint {
    svc: Arc<dyn StringService>,
}

impl UppercaseEndpoint {
    /// Wrap `svc` so its uppercase operation can be served
    pub fn new(svc: Arc<dyn StringService>) -> Self {
        Self { svc }
    }
}

#[async_trait]
impl Endpoint<UppercaseRequest> for UppercaseEndpoint {
    type Response = UppercaseResponse;

    async fn call(
        &self,
        ctx: RequestContext,
        request: UppercaseRequest,
    ) -> Result<UppercaseResponse, AppError> {
        let response = match self.svc.uppercase(&request.s) {
            Ok(v) => UppercaseResponse { v, err: None },
            Err(e) => {
                tracing::debug!(request_id = %ctx.request_id, error = %e, "uppercase failed");
                UppercaseResponse {
                    v: String::new(),
                    err: Some(e.to_string()),
                }
            }
        };
        Ok(response)
    }
}

/// Endpoint wrapping [`StringService::count`]
#[derive(Clone)]
pub struct CountEndpoint {
    svc: Arc<dyn StringService>,
}

impl CountEndpoint {
    /// Wrap `svc` so its count operation can be served
    pub fn new(svc: Arc<dyn StringService>) -> Self {
        Self { svc }
    }
}

#[async_trait]
impl Endpoint<CountRequest> for CountEndpoint {
    type Response = CountResponse;

    async fn call(
        &self,
        ctx: RequestContext,
        request: CountRequest,
    ) -> Result<CountResponse, AppError> {
        let v = self.svc.count(&request.s);
        tracing::debug!(request_id = %ctx.request_id, count = v, "count computed");
        Ok(CountResponse { v })
    }
}

/// All endpoints of the service, built over one shared implementation
#[derive(Clone)]
pub struct Endpoints {
    /// Bound to `POST /uppercase`
    pub uppercase: UppercaseEndpoint,
    /// Bound to `POST /count`
    pub count: CountEndpoint,
}

impl Endpoints {
    /// Build every endpoint over `svc`
    pub fn new(svc: Arc<dyn StringService>) -> Self {
        Self {
            uppercase: UppercaseEndpoint::new(Arc::clone(&svc)),
            count: CountEndpoint::new(svc),
        }
    }
}
