use axum::{Json, extract::State};
use serde::Serialize;
use utoipa::ToSchema;

use crate::{db::DbPool, error::AppResult, response::ApiResponse};

#[derive(Serialize, ToSchema)]
pub struct HealthData {
    pub database: String,
}

#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "OK", body = ApiResponse<HealthData>),
        (status = 500, description = "Database unreachable"),
    ),
    tag = "Health"
)]
pub async fn health_check(State(pool): State<DbPool>) -> AppResult<Json<ApiResponse<HealthData>>> {
    sqlx::query("SELECT 1").execute(&pool).await?;

    let data = HealthData {
        database: "ok".to_string(),
    };

    Ok(Json(ApiResponse::success_with_message("Health check", data)))
}
