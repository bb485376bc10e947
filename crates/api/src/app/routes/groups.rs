use std::sync::Arc;

use axum::{
    extract::Extension,
    http::StatusCode,
    response::IntoResponse,
    routing::post,
    Json, Router,
};

use crate::app::services::AppServices;
use crate::app::{dto, errors};

pub fn router() -> Router {
    Router::new().route("/", post(create_group))
}

pub async fn create_group(
    Extension(services): Extension<Arc<AppServices>>,
    Json(body): Json<dto::CreateGroupRequest>,
) -> axum::response::Response {
    match services.create_group(&body.name) {
        Ok(group) => (StatusCode::CREATED, Json(dto::group_to_json(group))).into_response(),
        Err(e) => errors::domain_error_to_response(e),
    }
}
