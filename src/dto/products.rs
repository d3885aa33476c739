use serde::{Deserialize, Deserializer, Serialize};
use utoipa::ToSchema;

use crate::models::Product;

#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct CreateProductRequest {
    pub nama_produk: Option<String>,
    pub kategori: Option<String>,
    pub merek: Option<String>,
    #[serde(default, deserialize_with = "de_opt_f64")]
    pub harga: Option<f64>,
    #[serde(default, deserialize_with = "de_opt_i32")]
    pub stok: Option<i32>,
    #[serde(default, deserialize_with = "de_opt_f64")]
    pub rating: Option<f64>,
    pub deskripsi: Option<String>,
}

#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct UpdateProductRequest {
    pub nama_produk: Option<String>,
    pub kategori: Option<String>,
    pub merek: Option<String>,
    #[serde(default, deserialize_with = "de_opt_f64")]
    pub harga: Option<f64>,
    #[serde(default, deserialize_with = "de_opt_i32")]
    pub stok: Option<i32>,
    #[serde(default, deserialize_with = "de_opt_f64")]
    pub rating: Option<f64>,
    pub deskripsi: Option<String>,
}

impl UpdateProductRequest {
    /// True when none of the mutable fields was supplied.
    pub fn is_empty(&self) -> bool {
        self.nama_produk.is_none()
            && self.kategori.is_none()
            && self.merek.is_none()
            && self.harga.is_none()
            && self.stok.is_none()
            && self.rating.is_none()
            && self.deskripsi.is_none()
    }
}

/// Normalized mutable-field set, bound by the repository for both inserts and
/// full-row updates.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct NewProduct {
    pub nama_produk: String,
    pub kategori: String,
    pub merek: String,
    pub harga: f64,
    pub stok: i32,
    pub rating: Option<f64>,
    pub deskripsi: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ProductListData {
    pub products: Vec<Product>,
    pub total: i64,
    pub page: i64,
    pub limit: i64,
    pub total_pages: i64,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ProductDetail {
    pub product: Product,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ProductWithId {
    pub id: i64,
    pub data: Product,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct DeletedProduct {
    pub id: i64,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum Number {
    Float(f64),
    Text(String),
}

/// Accept a JSON number or a numeric string for decimal fields.
fn de_opt_f64<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<Number>::deserialize(deserializer)? {
        None => Ok(None),
        Some(Number::Float(value)) => Ok(Some(value)),
        Some(Number::Text(raw)) => raw
            .trim()
            .parse::<f64>()
            .map(Some)
            .map_err(|_| serde::de::Error::custom(format!("nilai numerik tidak valid: {raw}"))),
    }
}

/// Accept a JSON number or a numeric string for integer fields; fractions are
/// truncated toward zero.
fn de_opt_i32<'de, D>(deserializer: D) -> Result<Option<i32>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<Number>::deserialize(deserializer)? {
        None => Ok(None),
        Some(Number::Float(value)) => Ok(Some(value as i32)),
        Some(Number::Text(raw)) => raw
            .trim()
            .parse::<f64>()
            .map(|value| Some(value as i32))
            .map_err(|_| serde::de::Error::custom(format!("nilai numerik tidak valid: {raw}"))),
    }
}
