//! Endpoint layer
//!
//! Adapts service methods to a uniform `(context, request) -> response` shape.
//! Each route gets its own typed request and response, so the transport never
//! has to inspect or cast what it passes through.

pub mod strings;

use crate::error::AppError;
use async_trait::async_trait;
use uuid::Uuid;

pub use strings::{
    CountEndpoint, CountRequest, CountResponse, Endpoints, UppercaseEndpoint, UppercaseRequest,
    UppercaseResponse,
};

/// Per-request values handed to every endpoint call
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestContext {
    /// Unique ID of the HTTP request being served
    pub request_id: String,
}

impl RequestContext {
    /// Create a context for the given request ID
    pub fn new(request_id: impl Into<String>) -> Self {
        Self {
            request_id: request_id.into(),
        }
    }

    /// Create a context with a freshly generated request ID
    pub fn generate() -> Self {
        Self::new(Uuid::new_v4().to_string())
    }
}

impl Default for RequestContext {
    fn default() -> Self {
        Self::generate()
    }
}

/// A single request/response exchange wrapped around a service operation
///
/// Errors returned here are transport-level failures. Business errors that the
/// client should see as data belong in `Self::Response`.
#[async_trait]
pub trait Endpoint<Req: Send + 'static>: Send + Sync {
    /// Response produced for a successful exchange
    type Response: Send;

    /// Handle one request
    async fn call(&self, ctx: RequestContext, request: Req) -> Result<Self::Response, AppError>;
}
