use crate::{
    db::DbPool,
    dto::products::{
        CreateProductRequest, DeletedProduct, NewProduct, ProductDetail, ProductListData,
        ProductWithId, UpdateProductRequest,
    },
    error::{AppError, AppResult},
    models::Product,
    repo::products as product_repo,
    response::ApiResponse,
    routes::params::ListQuery,
};

pub async fn list_products(
    pool: &DbPool,
    query: ListQuery,
) -> AppResult<ApiResponse<ProductListData>> {
    let (page, limit, offset) = query.normalize();

    let products = product_repo::fetch_page(pool, limit, offset).await?;
    let total = product_repo::count(pool).await?;
    let total_pages = (total as u64).div_ceil(limit as u64) as i64;

    Ok(ApiResponse::success(ProductListData {
        products,
        total,
        page,
        limit,
        total_pages,
    }))
}

pub async fn get_product(pool: &DbPool, id: i64) -> AppResult<ApiResponse<ProductDetail>> {
    ensure_valid_id(id)?;

    let product = product_repo::fetch_by_id(pool, id)
        .await?
        .ok_or(AppError::NotFound)?;

    Ok(ApiResponse::success(ProductDetail { product }))
}

pub async fn create_product(
    pool: &DbPool,
    payload: CreateProductRequest,
) -> AppResult<ApiResponse<ProductWithId>> {
    let data = normalize_create(payload)?;

    let product = product_repo::insert(pool, &data)
        .await?
        .ok_or(AppError::CreateFailed)?;

    Ok(ApiResponse::success_with_message(
        "Produk berhasil dibuat",
        ProductWithId {
            id: product.id,
            data: product,
        },
    ))
}

pub async fn update_product(
    pool: &DbPool,
    id: i64,
    payload: UpdateProductRequest,
) -> AppResult<ApiResponse<ProductWithId>> {
    ensure_valid_id(id)?;

    let existing = product_repo::fetch_by_id(pool, id)
        .await?
        .ok_or(AppError::NotFound)?;
    let merged = merge_update(&existing, payload)?;

    let product = product_repo::update(pool, id, &merged)
        .await?
        .ok_or(AppError::NotFound)?;

    Ok(ApiResponse::success_with_message(
        "Produk berhasil diperbarui",
        ProductWithId { id, data: product },
    ))
}

pub async fn delete_product(pool: &DbPool, id: i64) -> AppResult<ApiResponse<DeletedProduct>> {
    ensure_valid_id(id)?;

    product_repo::fetch_by_id(pool, id)
        .await?
        .ok_or(AppError::NotFound)?;

    // A concurrent delete may still win between the lookup and this statement.
    if !product_repo::delete(pool, id).await? {
        return Err(AppError::NotFound);
    }

    Ok(ApiResponse::success_with_message(
        "Produk berhasil dihapus",
        DeletedProduct { id },
    ))
}

fn ensure_valid_id(id: i64) -> AppResult<()> {
    if id < 1 {
        return Err(AppError::BadRequest("ID tidak valid".to_string()));
    }
    Ok(())
}

/// Validate required fields and apply create defaults. Absence of `rating`
/// stays absent; no default is injected for it.
pub fn normalize_create(payload: CreateProductRequest) -> AppResult<NewProduct> {
    let nama_produk = require_field("nama_produk", payload.nama_produk)?;
    let kategori = require_field("kategori", payload.kategori)?;
    let merek = require_field("merek", payload.merek)?;

    Ok(NewProduct {
        nama_produk,
        kategori,
        merek,
        harga: payload.harga.unwrap_or(0.0),
        stok: payload.stok.unwrap_or(0),
        rating: payload.rating,
        deskripsi: payload.deskripsi.unwrap_or_default(),
    })
}

/// Merge a partial payload onto the stored row. Fields the caller left out
/// carry the existing value forward, never a zero or empty default.
pub fn merge_update(existing: &Product, payload: UpdateProductRequest) -> AppResult<NewProduct> {
    if payload.is_empty() {
        return Err(AppError::BadRequest(
            "Tidak ada field yang diperbarui".to_string(),
        ));
    }

    Ok(NewProduct {
        nama_produk: payload
            .nama_produk
            .unwrap_or_else(|| existing.nama_produk.clone()),
        kategori: payload.kategori.unwrap_or_else(|| existing.kategori.clone()),
        merek: payload.merek.unwrap_or_else(|| existing.merek.clone()),
        harga: payload.harga.unwrap_or(existing.harga),
        stok: payload.stok.unwrap_or(existing.stok),
        rating: payload.rating.or(existing.rating),
        deskripsi: payload
            .deskripsi
            .unwrap_or_else(|| existing.deskripsi.clone()),
    })
}

fn require_field(name: &str, value: Option<String>) -> AppResult<String> {
    match value {
        Some(v) if !v.is_empty() => Ok(v),
        _ => Err(AppError::BadRequest(format!("Field {name} harus diisi"))),
    }
}
