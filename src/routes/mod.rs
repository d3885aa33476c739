use axum::{Json, Router, http::StatusCode, response::IntoResponse, routing::get};

use crate::{db::DbPool, response::ApiResponse};

pub mod doc;
pub mod health;
pub mod params;
pub mod products;

// Build the router without binding state; the caller provides the pool, so
// tests can assemble the same routes around their own.
pub fn create_api_router() -> Router<DbPool> {
    Router::new()
        .route("/health", get(health::health_check))
        .nest("/products", products::router())
        .fallback(not_found)
}

async fn not_found() -> impl IntoResponse {
    (
        StatusCode::NOT_FOUND,
        Json(ApiResponse::<()>::error("Endpoint not found")),
    )
}
