//! Binding-layer validation for request payloads.
//!
//! The request bodies bind directly to the domain types in `tillbook-ledger`
//! (`Account`, `MutationRequest`), whose serde field names are the wire
//! contract. What lives here is the validation the domain deliberately leaves
//! to the binding layer.

use axum::http::StatusCode;

use crate::app::errors;

/// Reject a create payload whose account identifier is empty.
pub fn require_email(email: &str) -> Result<(), axum::response::Response> {
    if email.trim().is_empty() {
        return Err(errors::json_error(
            StatusCode::BAD_REQUEST,
            "validation_error",
            "email must not be empty",
        ));
    }
    Ok(())
}
