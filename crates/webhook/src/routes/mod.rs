pub mod callback;
pub mod health;

use axum::Router;

/// Build the complete webhook router with all routes.
pub fn create_router() -> Router {
    Router::new()
        .merge(health::router())
        .merge(callback::router())
}
