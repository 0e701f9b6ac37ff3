use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde_json::json;

use tillbook_core::DomainError;

pub fn domain_error_to_response(err: DomainError) -> axum::response::Response {
    match err {
        DomainError::Validation(msg) => json_error(StatusCode::BAD_REQUEST, "validation_error", msg),
        DomainError::Duplicate(email) => json_error(
            StatusCode::CONFLICT,
            "duplicate_account",
            format!("account already exists: {email}"),
        ),
        DomainError::NotFound => json_error(StatusCode::NOT_FOUND, "not_found", "account not found"),
        DomainError::Forbidden => json_error(StatusCode::FORBIDDEN, "forbidden", "invalid credentials"),
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
