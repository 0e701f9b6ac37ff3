use axum::Router;

pub mod accounts;
pub mod system;

/// Router for all ledger endpoints.
pub fn router() -> Router {
    Router::new().nest("/acc", accounts::router())
}
