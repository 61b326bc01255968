//! JSON error responses.

use salvo::{
    catcher::Catcher,
    handler,
    http::{ResBody, StatusCode},
    oapi::{self, Components, EndpointOutRegister, Operation, ToSchema},
    prelude::{FlowCtrl, Json, Response},
    writing::Scribe,
};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Client error body.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct ErrorResponse {
    /// Human-readable reason
    pub message: String,
}

/// Server error body.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct InternalErrorResponse {
    /// Human-readable reason
    pub error: String,
}

/// An HTTP status paired with a message, rendered as JSON.
///
/// Client errors render `{"message": ...}`, server errors render `{"error": ...}`.
#[derive(Debug, Error)]
#[error("{status}: {message}")]
pub(crate) struct ApiError {
    status: StatusCode,
    message: String,
}

impl ApiError {
    pub(crate) fn bad_request(message: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, message)
    }

    pub(crate) fn not_found(message: impl Into<String>) -> Self {
        Self::new(StatusCode::NOT_FOUND, message)
    }

    pub(crate) fn internal(message: impl Into<String>) -> Self {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, message)
    }

    pub(crate) fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
        }
    }
}

impl Scribe for ApiError {
    fn render(self, res: &mut Response) {
        res.status_code(self.status);

        if self.status.is_server_error() {
            res.render(Json(InternalErrorResponse {
                error: self.message,
            }));
        } else {
            res.render(Json(ErrorResponse {
                message: self.message,
            }));
        }
    }
}

impl EndpointOutRegister for ApiError {
    fn register(components: &mut Components, operation: &mut Operation) {
        for (status, description) in [
            (StatusCode::BAD_REQUEST, "Bad Request"),
            (StatusCode::NOT_FOUND, "Not Found"),
        ] {
            operation.responses.insert(
                status.as_str(),
                oapi::Response::new(description)
                    .add_content("application/json", ErrorResponse::to_schema(components)),
            );
        }

        operation.responses.insert(
            StatusCode::INTERNAL_SERVER_ERROR.as_str(),
            oapi::Response::new("Internal Server Error")
                .add_content("application/json", InternalErrorResponse::to_schema(components)),
        );
    }
}

/// Rewrites error responses that no handler rendered (unknown routes, extractor
/// failures) into the same JSON shape as [`ApiError`].
#[handler]
async fn render_json_errors(res: &mut Response, ctrl: &mut FlowCtrl) {
    let status = res.status_code.unwrap_or(StatusCode::NOT_FOUND);

    let message = match res.take_body() {
        ResBody::None => status.canonical_reason().unwrap_or("Unknown error").to_string(),
        ResBody::Error(error) => error.brief,
        body => {
            // Already written by a handler
            res.body = body;
            ctrl.skip_rest();
            return;
        }
    };

    ApiError::new(status, message).render(res);

    ctrl.skip_rest();
}

pub(crate) fn catcher() -> Catcher {
    Catcher::default().hoop(render_json_errors)
}
