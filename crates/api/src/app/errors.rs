use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde_json::json;

use itemservice_core::DomainError;

/// Map a domain error to a JSON error response.
///
/// `ValidationFailed` normally never gets here: submission handlers recover it
/// into a form redisplay. It is still mapped for completeness.
pub fn domain_error_to_response(err: DomainError) -> axum::response::Response {
    match err {
        DomainError::NotFound => json_error(StatusCode::NOT_FOUND, "not_found", "item not found"),
        DomainError::ValidationFailed(violations) => json_error(
            StatusCode::UNPROCESSABLE_ENTITY,
            "validation_failed",
            violations.to_string(),
        ),
        e @ DomainError::MalformedInput(_) => {
            json_error(StatusCode::BAD_REQUEST, "malformed_input", e.to_string())
        }
    }
}

pub fn json_error(
    status: StatusCode,
    code: &'static str,
    message: impl Into<String>,
) -> axum::response::Response {
    (
        status,
        axum::Json(json!({
            "error": code,
            "message": message.into(),
        })),
    )
        .into_response()
}
