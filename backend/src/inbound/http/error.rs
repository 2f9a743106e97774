//! HTTP adapter mapping for domain errors.
//!
//! Purpose: keep the domain error type HTTP-agnostic. The two functions map
//! the same [`ErrorCode`] to different statuses, so each handler picks a
//! [`StatusPolicy`] and returns [`HandlerError`] parameterised by it.

use std::fmt;
use std::marker::PhantomData;

use actix_web::http::{StatusCode, header};
use actix_web::{HttpResponse, ResponseError};
use serde::Serialize;
use tracing::{error, warn};

use crate::domain::{Error, ErrorCode, TRACE_ID_HEADER};

/// Decides how a handler surfaces each failure category.
pub trait StatusPolicy: 'static {
    /// HTTP status returned for `code`.
    fn status_for(code: ErrorCode) -> StatusCode;

    /// Whether `code` is answered with a plain-text body instead of JSON.
    fn plain_text(_code: ErrorCode) -> bool {
        false
    }
}

/// Order confirmation: only the method check is distinguished.
#[derive(Debug, Clone, Copy)]
pub struct ConfirmationPolicy;

impl StatusPolicy for ConfirmationPolicy {
    fn status_for(code: ErrorCode) -> StatusCode {
        match code {
            ErrorCode::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// Order export: an empty order is a plain-text 404, other failures are 400.
#[derive(Debug, Clone, Copy)]
pub struct ExportPolicy;

impl StatusPolicy for ExportPolicy {
    fn status_for(code: ErrorCode) -> StatusCode {
        match code {
            ErrorCode::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            ErrorCode::NotFound => StatusCode::NOT_FOUND,
            _ => StatusCode::BAD_REQUEST,
        }
    }

    fn plain_text(code: ErrorCode) -> bool {
        matches!(code, ErrorCode::NotFound)
    }
}

const PLAIN_TEXT: &str = "text/plain; charset=utf-8";

/// JSON error payload shared by both functions.
#[derive(Debug, Serialize)]
pub struct ErrorBody<'a> {
    /// Caller-facing message.
    pub error: &'a str,
}

/// Domain error bound to the status policy of one handler.
pub struct HandlerError<P> {
    error: Error,
    policy: PhantomData<fn() -> P>,
}

/// Result alias for the confirmation handler.
pub type ConfirmationResult<T> = Result<T, HandlerError<ConfirmationPolicy>>;
/// Result alias for the export handler.
pub type ExportResult<T> = Result<T, HandlerError<ExportPolicy>>;

impl<P> HandlerError<P> {
    /// Borrow the wrapped domain error.
    #[must_use]
    pub fn error(&self) -> &Error {
        &self.error
    }
}

impl<P> From<Error> for HandlerError<P> {
    fn from(error: Error) -> Self {
        Self {
            error,
            policy: PhantomData,
        }
    }
}

impl<P> fmt::Debug for HandlerError<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("HandlerError").field(&self.error).finish()
    }
}

impl<P> fmt::Display for HandlerError<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.error.code(), self.error.message())
    }
}

impl<P: StatusPolicy> ResponseError for HandlerError<P> {
    fn status_code(&self) -> StatusCode {
        P::status_for(self.error.code())
    }

    fn error_response(&self) -> HttpResponse {
        let status = self.status_code();
        let code = self.error.code();
        let trace_id = self.error.trace_id().unwrap_or_default();
        if status.is_server_error() {
            error!(%code, %trace_id, message = self.error.message(), "request failed");
        } else {
            warn!(%code, %trace_id, message = self.error.message(), "request rejected");
        }

        let mut builder = HttpResponse::build(status);
        if let Some(id) = self.error.trace_id() {
            builder.insert_header((TRACE_ID_HEADER, id.to_owned()));
        }
        if matches!(code, ErrorCode::MethodNotAllowed) {
            builder.insert_header((header::ALLOW, "POST"));
        }

        if P::plain_text(code) {
            builder
                .content_type(PLAIN_TEXT)
                .body(self.error.message().to_owned())
        } else {
            builder.json(ErrorBody {
                error: self.error.message(),
            })
        }
    }
}

/// Message returned for any method other than POST.
pub(crate) const METHOD_NOT_ALLOWED_MESSAGE: &str = "Método não permitido.";

/// Fallback handler for non-POST requests on a function route.
pub async fn method_not_allowed<P: StatusPolicy>() -> Result<HttpResponse, HandlerError<P>> {
    Err(Error::method_not_allowed(METHOD_NOT_ALLOWED_MESSAGE).into())
}

#[cfg(test)]
mod tests;
