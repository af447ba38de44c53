//! HTTP adapter mapping for domain errors.
//!
//! Domain errors become RFC 7807 problem details. Status codes live here and
//! nowhere else.

use actix_web::error::{JsonPayloadError, PathError};
use actix_web::http::{StatusCode, header};
use actix_web::{HttpRequest, HttpResponse, ResponseError};
use serde::Serialize;
use serde_json::Value;
use tracing::error;

use crate::domain::{Error, ErrorCode, TRACE_ID_HEADER};

/// Convenient result alias for HTTP handlers.
pub type ApiResult<T> = Result<T, Error>;

/// Media type of every error body.
pub const PROBLEM_JSON: &str = "application/problem+json";

fn status_for(code: ErrorCode) -> StatusCode {
    match code {
        ErrorCode::InvalidRequest => StatusCode::BAD_REQUEST,
        ErrorCode::NotFound => StatusCode::NOT_FOUND,
        ErrorCode::Conflict => StatusCode::CONFLICT,
        ErrorCode::ServiceUnavailable => StatusCode::SERVICE_UNAVAILABLE,
        ErrorCode::InternalError => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

/// Problem details body.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ProblemDetails<'a> {
    #[serde(rename = "type")]
    kind: &'static str,
    title: &'static str,
    status: u16,
    detail: &'a str,
    code: ErrorCode,
    #[serde(skip_serializing_if = "Option::is_none")]
    trace_id: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    details: Option<&'a Value>,
}

impl<'a> ProblemDetails<'a> {
    fn from_error(error: &'a Error, status: StatusCode) -> Self {
        // Internal failures keep their message in the log only.
        let internal = matches!(error.code(), ErrorCode::InternalError);
        Self {
            kind: "about:blank",
            title: error.code().title(),
            status: status.as_u16(),
            detail: if internal {
                ErrorCode::InternalError.title()
            } else {
                error.message()
            },
            code: error.code(),
            trace_id: error.trace_id(),
            details: if internal { None } else { error.details() },
        }
    }
}

impl ResponseError for Error {
    fn status_code(&self) -> StatusCode {
        status_for(self.code())
    }

    fn error_response(&self) -> HttpResponse {
        let status = self.status_code();
        if status.is_server_error() {
            error!(code = ?self.code(), message = self.message(), "request failed");
        }

        let mut builder = HttpResponse::build(status);
        builder.insert_header((header::CONTENT_TYPE, PROBLEM_JSON));
        if let Some(id) = self.trace_id() {
            builder.insert_header((TRACE_ID_HEADER, id.to_owned()));
        }

        match serde_json::to_string(&ProblemDetails::from_error(self, status)) {
            Ok(body) => builder.body(body),
            Err(err) => {
                error!(error = %err, "failed to serialise problem details");
                builder.finish()
            }
        }
    }
}

impl From<actix_web::Error> for Error {
    fn from(err: actix_web::Error) -> Self {
        error!(error = %err, "actix error promoted to domain error");
        Error::internal("Internal server error")
    }
}

/// Turn malformed JSON bodies into `400` problem details.
pub fn json_error_handler(err: JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
    Error::invalid_request(format!("Request body is not valid JSON: {err}")).into()
}

/// Turn unparsable path segments into `400` problem details.
pub fn path_error_handler(err: PathError, _req: &HttpRequest) -> actix_web::Error {
    Error::invalid_request(format!("Invalid path parameter: {err}")).into()
}
