//! OpenAPI schema definitions for error payloads.
//!
//! Domain types stay framework-agnostic by not deriving `ToSchema`. The
//! wrappers here mirror the problem details body written by
//! [`crate::inbound::http::error`].

use utoipa::ToSchema;

/// OpenAPI schema for [`crate::domain::ErrorCode`].
#[derive(ToSchema)]
#[schema(as = ErrorCode)]
pub enum ErrorCodeSchema {
    /// The request is malformed or fails validation.
    #[schema(rename = "invalid_request")]
    InvalidRequest,
    /// The requested resource does not exist.
    #[schema(rename = "not_found")]
    NotFound,
    /// The request conflicts with current state, such as a full trip.
    #[schema(rename = "conflict")]
    Conflict,
    /// The backing store is unreachable.
    #[schema(rename = "service_unavailable")]
    ServiceUnavailable,
    /// An unexpected error occurred on the server.
    #[schema(rename = "internal_error")]
    InternalError,
}

/// RFC 7807 problem details returned for every failed request.
#[derive(ToSchema)]
#[schema(as = Problem, rename_all = "camelCase")]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct ProblemSchema {
    /// Problem type URI; always `about:blank`.
    #[schema(rename = "type", example = "about:blank")]
    kind: String,
    /// Short summary of the error category.
    #[schema(example = "Conflict")]
    title: String,
    /// HTTP status code.
    #[schema(example = 409)]
    status: u16,
    /// Human-readable explanation naming the offending identifier.
    #[schema(example = "Client with ID 4 is already registered for trip with ID 2.")]
    detail: String,
    /// Stable machine-readable error code.
    code: ErrorCodeSchema,
    /// Correlation identifier, also sent in the `trace-id` header.
    #[schema(example = "3fa85f64-5717-4562-b3fc-2c963f66afa6")]
    trace_id: Option<String>,
    /// Structured context such as the offending field.
    details: Option<serde_json::Value>,
}
