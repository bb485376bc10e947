//! HTTP API application wiring (Axum router + service wiring).
//!
//! - `services.rs`: validation + repository wiring shared by handlers
//! - `routes/`: HTTP routes + handlers (one file per area)
//! - `dto.rs`: request DTOs and JSON mapping helpers
//! - `errors.rs`: consistent error responses

use std::sync::Arc;

use axum::{Extension, Router};
use tower::ServiceBuilder;

use stockroom_inventory::{InMemoryItemRepository, ItemRepository};

pub mod dto;
pub mod errors;
pub mod routes;
pub mod services;

/// Build the full HTTP router over a fresh in-memory repository.
pub fn build_app() -> Router {
    build_app_with(Arc::new(InMemoryItemRepository::new()))
}

/// Build the router over a caller-supplied repository.
pub fn build_app_with(repo: Arc<dyn ItemRepository>) -> Router {
    let services = Arc::new(services::AppServices::new(repo));

    routes::router().layer(ServiceBuilder::new().layer(Extension(services)))
}
