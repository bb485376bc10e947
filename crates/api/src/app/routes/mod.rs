use axum::{routing::get, Router};

pub mod groups;
pub mod items;
pub mod system;

/// Router for all endpoints.
pub fn router() -> Router {
    Router::new()
        .route("/health", get(system::health))
        .nest("/groups", groups::router())
        .nest("/items", items::router())
}
