use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Product {
    pub id: i64,
    pub nama_produk: String,
    pub kategori: String,
    pub merek: String,
    pub harga: f64,
    pub stok: i32,
    pub rating: Option<f64>,
    pub deskripsi: String,
    pub created_at: DateTime<Utc>,
}
