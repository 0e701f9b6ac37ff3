use std::sync::Arc;

use axum::{
    Json, Router,
    extract::Extension,
    http::StatusCode,
    response::IntoResponse,
    routing::{post, put},
};

use tillbook_ledger::{Account, MutationRequest};

use crate::app::services::AppServices;
use crate::app::{dto, errors};

pub fn router() -> Router {
    Router::new()
        .route("/create", post(create_account))
        .route("/withdraw", put(withdraw))
        .route("/deposit", put(deposit))
}

pub async fn create_account(
    Extension(services): Extension<Arc<AppServices>>,
    Json(body): Json<Account>,
) -> axum::response::Response {
    if let Err(resp) = dto::require_email(&body.user.email) {
        return resp;
    }

    match services.ledger().create_account(body) {
        Ok(account) => (StatusCode::OK, Json(account)).into_response(),
        Err(e) => errors::domain_error_to_response(e),
    }
}

pub async fn withdraw(
    Extension(services): Extension<Arc<AppServices>>,
    Json(body): Json<MutationRequest>,
) -> axum::response::Response {
    match services.ledger().withdraw(&body) {
        Ok(account) => (StatusCode::OK, Json(account)).into_response(),
        Err(e) => errors::domain_error_to_response(e),
    }
}

pub async fn deposit(
    Extension(services): Extension<Arc<AppServices>>,
    Json(body): Json<MutationRequest>,
) -> axum::response::Response {
    match services.ledger().deposit(&body) {
        Ok(account) => (StatusCode::OK, Json(account)).into_response(),
        Err(e) => errors::domain_error_to_response(e),
    }
}
