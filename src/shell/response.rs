// JSON envelope shared by every REST endpoint: `{success, data?, message?, error?}`.

use axum::{Json, http::StatusCode, response::IntoResponse, response::Response};
use serde::Serialize;

use crate::modules::time_tracking::application::errors::{ApplicationError, ErrorKind};

pub const INTERNAL_MESSAGE: &str = "internal server error";

#[derive(Debug, Serialize)]
pub struct Envelope<T: Serialize> {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<&'static str>,
}

pub fn ok<T: Serialize>(data: T) -> Response {
    with_data(StatusCode::OK, data)
}

pub fn created<T: Serialize>(data: T) -> Response {
    with_data(StatusCode::CREATED, data)
}

fn with_data<T: Serialize>(status: StatusCode, data: T) -> Response {
    let body = Envelope {
        success: true,
        data: Some(data),
        message: None,
        error: None,
    };
    (status, Json(body)).into_response()
}

fn error(status: StatusCode, code: &'static str, message: String) -> Response {
    let body: Envelope<()> = Envelope {
        success: false,
        data: None,
        message: Some(message),
        error: Some(code),
    };
    (status, Json(body)).into_response()
}

pub fn bad_request(message: impl Into<String>) -> Response {
    error(StatusCode::BAD_REQUEST, "BAD_REQUEST", message.into())
}

pub fn unauthenticated() -> Response {
    error(
        StatusCode::UNAUTHORIZED,
        "UNAUTHENTICATED",
        "missing caller identity".into(),
    )
}

pub fn status_of(kind: ErrorKind) -> StatusCode {
    match kind {
        ErrorKind::NotFound => StatusCode::NOT_FOUND,
        ErrorKind::InvalidState | ErrorKind::Validation => StatusCode::BAD_REQUEST,
        ErrorKind::Forbidden => StatusCode::FORBIDDEN,
        ErrorKind::Conflict => StatusCode::CONFLICT,
        ErrorKind::Internal => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

/// Message shown to clients. Internal details are hidden unless exposed.
pub fn public_message(failure: &ApplicationError, expose_internal: bool) -> String {
    match failure.kind() {
        ErrorKind::Internal if !expose_internal => INTERNAL_MESSAGE.to_string(),
        _ => failure.to_string(),
    }
}

pub fn failure(failure: &ApplicationError, expose_internal: bool) -> Response {
    let kind = failure.kind();
    error(
        status_of(kind),
        kind.code(),
        public_message(failure, expose_internal),
    )
}
