use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::response::ApiResponse;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Produk tidak ditemukan")]
    NotFound,

    #[error("{0}")]
    BadRequest(String),

    #[error("Gagal membuat produk")]
    CreateFailed,

    #[error("Terjadi kesalahan pada server")]
    Db(#[from] sqlx::Error),

    #[error("Terjadi kesalahan pada server")]
    Internal(#[from] anyhow::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        // Driver diagnostics stay in the logs; callers only see the generic message.
        let status = match &self {
            AppError::NotFound => StatusCode::NOT_FOUND,
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::CreateFailed => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::Db(err) => {
                tracing::error!(error = %err, "database error");
                StatusCode::INTERNAL_SERVER_ERROR
            }
            AppError::Internal(err) => {
                tracing::error!(error = %err, "internal error");
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };

        let body = ApiResponse::<()>::error(self.to_string());
        (status, axum::Json(body)).into_response()
    }
}

pub type AppResult<T> = Result<T, AppError>;
